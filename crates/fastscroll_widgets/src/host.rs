//! Host capabilities
//!
//! The fast scroller never owns the list it decorates. Everything it needs
//! from the host widget is expressed through two traits:
//!
//! - [`HostView`]: the view-level plumbing every host has (size, redraw
//!   requests, deferred ticks, gesture interception)
//! - [`ScrollHost`]: content metrics and position commands, plus the
//!   [`HostProfile`] describing which mapping formulas apply
//!
//! Concrete adapters for the two supported list kinds live in
//! [`adapters`](crate::adapters).

use std::time::Duration;

use fastscroll_animation::TickId;
use fastscroll_core::Size;

use crate::metrics::ScrollState;

/// A position command issued to the host while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll so the content offset equals this many pixels
    Offset(f32),
    /// Scroll so this item is the first visible one
    Index(usize),
}

/// Scroll activity reported by the host's own gesture handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostScrollState {
    Idle,
    Active,
}

/// How the thumb position is derived from the host's scroll state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbMode {
    /// Approximate from the first visible item index
    ItemCount,
    /// Exact, from the pixel range/extent/offset triple
    PixelExtent,
}

/// Which item range a drag maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexSpan {
    /// `item_count - visible_item_count`: the last screen is reached when the
    /// thumb hits the bottom
    RemainingRange,
    /// `item_count - 1`: the last item itself is scrolled to the top
    LastItem,
}

/// What kind of command a drag produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTarget {
    Offset,
    Index(IndexSpan),
}

/// How "screens of content" is computed for the length heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRatio {
    /// Floating-point `items / visible`
    Exact,
    /// Integer division, so `101 / 25` counts as 4 screens
    Truncated,
}

/// Geometry knobs that differ between host kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostProfile {
    pub thumb_mode: ThumbMode,
    pub drag_target: DragTarget,
    /// Hit area width as a multiple of the thumb width
    pub hit_width_factor: f32,
    /// Shrink the painted track width along with the fade
    pub track_follows_fade: bool,
    pub length_ratio: LengthRatio,
    /// Hand the host's native scrollbar on and off as the overlay hides and
    /// shows
    pub manages_native_scrollbar: bool,
}

impl HostProfile {
    /// Classic item-recycling list: everything is counted in items
    pub const fn item_list() -> Self {
        Self {
            thumb_mode: ThumbMode::ItemCount,
            drag_target: DragTarget::Index(IndexSpan::RemainingRange),
            hit_width_factor: 2.0,
            track_follows_fade: true,
            length_ratio: LengthRatio::Exact,
            manages_native_scrollbar: false,
        }
    }

    /// Layout-manager list: pixel-exact thumb, drag jumps to an item
    pub const fn layout_list() -> Self {
        Self {
            thumb_mode: ThumbMode::PixelExtent,
            drag_target: DragTarget::Index(IndexSpan::LastItem),
            hit_width_factor: 2.0,
            track_follows_fade: true,
            length_ratio: LengthRatio::Truncated,
            manages_native_scrollbar: true,
        }
    }

    /// Pixel-exact in both directions
    pub const fn pixel_list() -> Self {
        Self {
            thumb_mode: ThumbMode::PixelExtent,
            drag_target: DragTarget::Offset,
            hit_width_factor: 2.0,
            track_follows_fade: true,
            length_ratio: LengthRatio::Exact,
            manages_native_scrollbar: false,
        }
    }
}

impl Default for HostProfile {
    fn default() -> Self {
        Self::item_list()
    }
}

/// View-level capabilities of the host widget
pub trait HostView {
    /// Current size of the view in local pixels
    fn view_size(&self) -> Size;

    /// Repaint as soon as convenient
    fn request_redraw(&mut self);

    /// Repaint on the next display refresh
    fn request_redraw_next_frame(&mut self);

    /// Deliver `tick` back to
    /// [`FastScroller::on_tick`](crate::FastScroller::on_tick) after
    /// `delay`.
    ///
    /// Only the most recently posted tick is live; delivering a superseded
    /// one is harmless.
    fn post_tick(&mut self, tick: TickId, delay: Duration);

    /// Drop a posted tick. Hosts that cannot remove queued callbacks may
    /// ignore this.
    fn cancel_tick(&mut self, _tick: TickId) {}

    /// Claim the ongoing touch sequence away from the host's own scroll
    /// gesture recognizer
    fn intercept_gesture(&mut self);

    fn set_native_scrollbar_enabled(&mut self, _enabled: bool) {}
}

/// Content metrics and position commands
pub trait ScrollHost: HostView {
    fn profile(&self) -> HostProfile;

    fn metrics(&self) -> ScrollState;

    fn first_visible_index(&self) -> usize;

    fn command_scroll(&mut self, command: ScrollCommand);
}

/// Receives the host's scroll notifications, re-broadcast by the scroller
pub trait ScrollObserver {
    fn on_scroll_state_changed(&mut self, state: HostScrollState);

    fn on_scroll(&mut self, _first_visible: usize, _visible_count: usize, _total_count: usize) {}
}

impl<F: FnMut(HostScrollState)> ScrollObserver for F {
    fn on_scroll_state_changed(&mut self, state: HostScrollState) {
        self(state)
    }
}

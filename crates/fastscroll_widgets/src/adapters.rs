//! Host adapters for the two supported list kinds
//!
//! Each adapter wraps a list widget exposing its own native query surface
//! and turns it into a [`ScrollHost`]:
//!
//! - [`ItemListAdapter`] for item-recycling lists that only know counts and
//!   a first visible position
//! - [`LayoutListAdapter`] for layout-manager lists that also report a pixel
//!   range/extent/offset triple

use std::time::Duration;

use fastscroll_animation::TickId;
use fastscroll_core::Size;

use crate::host::{DragTarget, HostProfile, HostView, ScrollCommand, ScrollHost};
use crate::metrics::ScrollState;

/// Forward [`HostView`] to the wrapped list
macro_rules! forward_host_view {
    ($adapter:ident, $bound:ident) => {
        impl<L: $bound> HostView for $adapter<L> {
            fn view_size(&self) -> Size {
                self.list.view_size()
            }

            fn request_redraw(&mut self) {
                self.list.request_redraw();
            }

            fn request_redraw_next_frame(&mut self) {
                self.list.request_redraw_next_frame();
            }

            fn post_tick(&mut self, tick: TickId, delay: Duration) {
                self.list.post_tick(tick, delay);
            }

            fn cancel_tick(&mut self, tick: TickId) {
                self.list.cancel_tick(tick);
            }

            fn intercept_gesture(&mut self) {
                self.list.intercept_gesture();
            }

            fn set_native_scrollbar_enabled(&mut self, enabled: bool) {
                self.list.set_native_scrollbar_enabled(enabled);
            }
        }
    };
}

// =============================================================================
// Item-recycling list
// =============================================================================

/// A classic item-recycling list
pub trait ItemList: HostView {
    /// Number of items in the backing adapter
    fn count(&self) -> usize;

    /// Number of item views currently attached, i.e. visible
    fn child_count(&self) -> usize;

    fn first_visible_position(&self) -> usize;

    /// Jump so `position` is the first visible item
    fn set_selection(&mut self, position: usize);
}

/// [`ScrollHost`] over an [`ItemList`]: item-count geometry, index commands
#[derive(Debug)]
pub struct ItemListAdapter<L> {
    list: L,
}

impl<L: ItemList> ItemListAdapter<L> {
    /// Wrap `list`. The list's native scrollbar is switched off for good.
    pub fn new(mut list: L) -> Self {
        list.set_native_scrollbar_enabled(false);
        Self { list }
    }

    pub fn inner(&self) -> &L {
        &self.list
    }

    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn into_inner(self) -> L {
        self.list
    }
}

forward_host_view!(ItemListAdapter, ItemList);

impl<L: ItemList> ScrollHost for ItemListAdapter<L> {
    fn profile(&self) -> HostProfile {
        HostProfile::item_list()
    }

    fn metrics(&self) -> ScrollState {
        ScrollState::from_items(
            self.list.count(),
            self.list.child_count(),
            self.list.first_visible_position(),
        )
    }

    fn first_visible_index(&self) -> usize {
        self.list.first_visible_position()
    }

    fn command_scroll(&mut self, command: ScrollCommand) {
        let position = match command {
            ScrollCommand::Index(index) => index,
            // Item lists have no pixel offsets; an offset is an item offset
            ScrollCommand::Offset(offset) => offset.max(0.0).floor() as usize,
        };
        self.list.set_selection(position);
    }
}

// =============================================================================
// Layout-manager list
// =============================================================================

/// A list driven by a layout manager that reports pixel scroll metrics
pub trait LayoutList: HostView {
    /// Number of items in the backing adapter
    fn item_count(&self) -> usize;

    /// Number of item views currently attached, i.e. visible
    fn child_count(&self) -> usize;

    fn first_visible_position(&self) -> usize;

    /// Total scrollable content length in pixels
    fn vertical_scroll_range(&self) -> f32;

    /// Visible length in pixels
    fn vertical_scroll_extent(&self) -> f32;

    /// Current scroll offset in pixels
    fn vertical_scroll_offset(&self) -> f32;

    /// Jump so `position` is the first visible item, `offset` pixels from
    /// the top
    fn scroll_to_position_with_offset(&mut self, position: usize, offset: f32);

    fn scroll_by(&mut self, dy: f32);

    /// Scroll to an absolute pixel offset
    fn scroll_to_offset(&mut self, offset: f32) {
        let dy = offset - self.vertical_scroll_offset();
        if dy != 0.0 {
            self.scroll_by(dy);
        }
    }
}

/// [`ScrollHost`] over a [`LayoutList`]: pixel-exact geometry
#[derive(Debug)]
pub struct LayoutListAdapter<L> {
    list: L,
    profile: HostProfile,
}

impl<L: LayoutList> LayoutListAdapter<L> {
    /// Wrap `list`. Drags jump to the item under the thumb.
    pub fn new(list: L) -> Self {
        Self {
            list,
            profile: HostProfile::layout_list(),
        }
    }

    /// Drag by pixel offset instead of jumping to items
    pub fn with_offset_drag(mut self) -> Self {
        self.profile.drag_target = DragTarget::Offset;
        self
    }

    /// Override the geometry profile entirely
    pub fn with_profile(mut self, profile: HostProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn inner(&self) -> &L {
        &self.list
    }

    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn into_inner(self) -> L {
        self.list
    }
}

forward_host_view!(LayoutListAdapter, LayoutList);

impl<L: LayoutList> ScrollHost for LayoutListAdapter<L> {
    fn profile(&self) -> HostProfile {
        self.profile
    }

    fn metrics(&self) -> ScrollState {
        ScrollState::from_pixels(
            self.list.vertical_scroll_range(),
            self.list.vertical_scroll_extent(),
            self.list.vertical_scroll_offset(),
            self.list.item_count(),
            self.list.child_count(),
        )
    }

    fn first_visible_index(&self) -> usize {
        self.list.first_visible_position()
    }

    fn command_scroll(&mut self, command: ScrollCommand) {
        match command {
            ScrollCommand::Index(index) => self.list.scroll_to_position_with_offset(index, 0.0),
            ScrollCommand::Offset(offset) => self.list.scroll_to_offset(offset),
        }
    }
}

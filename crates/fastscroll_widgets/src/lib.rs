//! Fastscroll Widgets
//!
//! An auto-fading fast-scroll thumb and track drawn over a scrollable list,
//! plus the drag protocol that turns thumb position into list position and
//! back.
//!
//! # Components
//!
//! - [`VisibilityPolicy`]: whether the overlay renders at all this frame
//! - [`FadeClock`](fastscroll_animation::FadeClock): opacity as a pure
//!   function of the time since the last interaction
//! - [`GeometryMapper`]: scroll state to thumb rectangle, and dragged pointer
//!   Y back to a position command
//! - [`DragController`]: the press/drag/release state machine
//! - [`ScrollHost`]: what the overlay needs from the list it decorates, with
//!   [`ItemListAdapter`] and [`LayoutListAdapter`] for the two list kinds
//!
//! [`FastScroller`] owns the per-widget state and drives all of them.
//!
//! # Example
//!
//! ```ignore
//! use fastscroll_widgets::prelude::*;
//!
//! let mut host = ItemListAdapter::new(my_list);
//! let mut scroller = FastScroller::new(FastScrollConfig::item_list())?;
//!
//! scroller.on_host_scrolled(&mut host, Instant::now());
//! scroller.draw(&mut host, &mut canvas, Instant::now());
//! ```

pub mod adapters;
pub mod config;
pub mod drag;
pub mod error;
pub mod host;
pub mod mapper;
pub mod metrics;
pub mod scroller;
pub mod visibility;

pub use adapters::{ItemList, ItemListAdapter, LayoutList, LayoutListAdapter};
pub use config::FastScrollConfig;
pub use drag::{DragController, DragPhase, StateTransitions};
pub use error::{ConfigError, Result};
pub use host::{
    DragTarget, HostProfile, HostScrollState, HostView, IndexSpan, LengthRatio, ScrollCommand,
    ScrollHost, ScrollObserver, ThumbMode,
};
pub use mapper::{GeometryMapper, ThumbGeometry};
pub use metrics::{InteractionState, ScrollState};
pub use scroller::{EventResult, FastScroller, OverlayPaint, OverlayPart, PaintOp};
pub use visibility::{HiddenReason, Visibility, VisibilityPolicy};

/// Everything a host integration usually needs
pub mod prelude {
    pub use crate::adapters::{ItemList, ItemListAdapter, LayoutList, LayoutListAdapter};
    pub use crate::config::FastScrollConfig;
    pub use crate::host::{HostScrollState, HostView, ScrollCommand, ScrollHost, ScrollObserver};
    pub use crate::scroller::{EventResult, FastScroller};
    pub use fastscroll_animation::TickId;
    pub use fastscroll_core::{DrawSurface, PointerEvent, Size};
}

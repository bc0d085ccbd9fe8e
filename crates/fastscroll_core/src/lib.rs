//! Fastscroll Core
//!
//! Foundational primitives shared by the fast-scroll crates:
//!
//! - **Geometry**: points, sizes and rectangles in a view's local space
//! - **Colors**: linear RGBA colors with ARGB word conversion
//! - **Events**: raw pointer events already mapped into view-local coordinates
//! - **Painting**: the minimal drawing surface the overlay paints onto
//!
//! # Example
//!
//! ```rust
//! use fastscroll_core::{Point, Rect};
//!
//! let thumb = Rect::from_ltrb(84.0, 10.0, 100.0, 58.0);
//! assert!(thumb.contains(Point::new(90.0, 20.0)));
//! assert!(!thumb.contains(Point::new(10.0, 20.0)));
//! ```

pub mod color;
pub mod events;
pub mod geometry;
pub mod paint;

pub use color::Color;
pub use events::{PointerEvent, PointerKind};
pub use geometry::{Point, Rect, Size};
pub use paint::{DrawSurface, RecordingSurface};

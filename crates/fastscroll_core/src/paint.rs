//! Drawing surface capability

use crate::color::Color;
use crate::geometry::Rect;

/// The minimal painting capability the overlay needs from a host canvas.
///
/// Coordinates are in the view's local space. Implementations are expected
/// to blend `color` using its alpha channel.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }
}

/// A surface that records every fill, for headless hosts and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub fills: Vec<(Rect, Color)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fills.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }
}

//! Scroll metrics and interaction state

use crate::host::LengthRatio;

/// Content metrics read from the host on every redraw
///
/// For item-counted hosts the extents are item counts and the offset is the
/// first visible index. For variable-size content they are pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub total_content_extent: f32,
    pub viewport_extent: f32,
    pub scroll_offset: f32,
    pub item_count: usize,
    pub visible_item_count: usize,
}

impl ScrollState {
    /// Metrics for a host that only knows item counts
    pub fn from_items(item_count: usize, visible_item_count: usize, first_visible: usize) -> Self {
        Self {
            total_content_extent: item_count as f32,
            viewport_extent: visible_item_count as f32,
            scroll_offset: first_visible as f32,
            item_count,
            visible_item_count,
        }
    }

    /// Metrics for a host that reports pixel range, extent and offset
    pub fn from_pixels(
        range: f32,
        extent: f32,
        offset: f32,
        item_count: usize,
        visible_item_count: usize,
    ) -> Self {
        Self {
            total_content_extent: range,
            viewport_extent: extent,
            scroll_offset: offset,
            item_count,
            visible_item_count,
        }
    }

    /// `total_content_extent - viewport_extent`, never negative or NaN
    pub fn scroll_range(&self) -> f32 {
        let range = self.total_content_extent - self.viewport_extent;
        if range.is_finite() && range > 0.0 {
            range
        } else {
            0.0
        }
    }

    pub fn is_scrollable(&self) -> bool {
        self.scroll_range() > 0.0
    }

    /// Items that lie beyond the first screen
    pub fn remaining_items(&self) -> usize {
        self.item_count.saturating_sub(self.visible_item_count)
    }

    /// How many screens of items the content spans, `None` with nothing
    /// visible
    pub fn screens(&self, ratio: LengthRatio) -> Option<f32> {
        if self.visible_item_count == 0 {
            return None;
        }
        Some(match ratio {
            LengthRatio::Exact => self.item_count as f32 / self.visible_item_count as f32,
            LengthRatio::Truncated => (self.item_count / self.visible_item_count) as f32,
        })
    }
}

/// What the user is currently doing with the list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// The host's own gesture handling is scrolling
    Scrolling,
    /// The thumb is being dragged; `drag_offset_y` keeps it from snapping
    /// under the finger
    Dragging { drag_offset_y: f32 },
}

impl InteractionState {
    /// Active states never fade
    pub fn is_active(&self) -> bool {
        !matches!(self, InteractionState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }

    pub fn drag_offset_y(&self) -> Option<f32> {
        match self {
            InteractionState::Dragging { drag_offset_y } => Some(*drag_offset_y),
            _ => None,
        }
    }
}

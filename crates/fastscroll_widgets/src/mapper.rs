//! Scroll state ⇄ thumb geometry
//!
//! Forward mapping places the thumb from the host's scroll state. Inverse
//! mapping turns a dragged pointer Y back into a position command. Geometry
//! is never stored between frames: it is derived fresh from [`ScrollState`]
//! each time, so it cannot drift.
//!
//! All coordinates are in the view's local space, with the track running
//! down the right edge.

use fastscroll_core::{Rect, Size};

use crate::host::{DragTarget, HostProfile, IndexSpan, ScrollCommand, ThumbMode};
use crate::metrics::ScrollState;

/// Thumb placement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub top: f32,
    pub bottom: f32,
    /// Left edge of the painted track and thumb; narrows as the overlay fades
    pub track_left: f32,
    /// Left edge of the touch hit area, wider than the painted thumb
    pub hit_left: f32,
    pub view: Size,
}

impl ThumbGeometry {
    pub fn thumb_rect(&self) -> Rect {
        Rect::from_ltrb(self.track_left, self.top, self.view.width, self.bottom)
    }

    pub fn track_rect(&self) -> Rect {
        Rect::from_ltrb(self.track_left, 0.0, self.view.width, self.view.height)
    }

    pub fn hit_rect(&self) -> Rect {
        Rect::from_ltrb(self.hit_left, self.top, self.view.width, self.bottom)
    }
}

/// Maps between scroll state and thumb position for one host profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMapper {
    pub thumb_width: f32,
    pub thumb_height: f32,
    pub profile: HostProfile,
}

impl GeometryMapper {
    pub fn new(thumb_width: f32, thumb_height: f32, profile: HostProfile) -> Self {
        Self {
            thumb_width,
            thumb_height,
            profile,
        }
    }

    /// Distance the thumb's top edge can travel, `None` if the view is not
    /// taller than the thumb
    pub fn track_travel(&self, view_height: f32) -> Option<f32> {
        let travel = view_height - self.thumb_height;
        (travel.is_finite() && travel > 0.0).then_some(travel)
    }

    /// Top edge of the thumb, clamped inside the track.
    ///
    /// Returns `None` whenever a denominator would be zero or negative.
    pub fn thumb_top(&self, state: &ScrollState, first_visible: usize, view_height: f32) -> Option<f32> {
        let travel = self.track_travel(view_height)?;
        let top = match self.profile.thumb_mode {
            ThumbMode::ItemCount => {
                let remaining = state.remaining_items();
                if remaining == 0 {
                    return None;
                }
                (travel / remaining as f32) * first_visible as f32
            }
            ThumbMode::PixelExtent => {
                let range = state.scroll_range();
                if range <= 0.0 {
                    return None;
                }
                (state.scroll_offset / range).clamp(0.0, 1.0) * travel
            }
        };
        Some(top.clamp(0.0, travel))
    }

    /// Full thumb geometry for a frame drawn at `opacity`
    pub fn thumb(
        &self,
        state: &ScrollState,
        first_visible: usize,
        view: Size,
        opacity: f32,
    ) -> Option<ThumbGeometry> {
        let top = self.thumb_top(state, first_visible, view.height)?;
        let painted_width = if self.profile.track_follows_fade {
            self.thumb_width * opacity.clamp(0.0, 1.0)
        } else {
            self.thumb_width
        };
        let geometry = ThumbGeometry {
            top,
            bottom: top + self.thumb_height,
            track_left: view.width - painted_width,
            hit_left: view.width - self.thumb_width * self.profile.hit_width_factor,
            view,
        };
        tracing::trace!(
            "thumb top={:.1} bottom={:.1} track_left={:.1} opacity={:.2}",
            geometry.top,
            geometry.bottom,
            geometry.track_left,
            opacity
        );
        Some(geometry)
    }

    /// Position of a dragged thumb along its track, in `0.0..=1.0`
    pub fn relative_position(&self, pointer_y: f32, drag_offset_y: f32, view_height: f32) -> f32 {
        let Some(travel) = self.track_travel(view_height) else {
            return 0.0;
        };
        let relative = (pointer_y + drag_offset_y) / travel;
        if relative.is_nan() {
            0.0
        } else {
            relative.clamp(0.0, 1.0)
        }
    }

    /// The position command for a pointer at `pointer_y`.
    ///
    /// Results are always clamped to the valid range; an empty list maps to
    /// index or offset zero.
    pub fn target(
        &self,
        pointer_y: f32,
        drag_offset_y: f32,
        state: &ScrollState,
        view_height: f32,
    ) -> ScrollCommand {
        let relative = self.relative_position(pointer_y, drag_offset_y, view_height);
        let command = match self.profile.drag_target {
            DragTarget::Offset => {
                let range = state.scroll_range();
                ScrollCommand::Offset((relative * range).clamp(0.0, range))
            }
            DragTarget::Index(span) => {
                let last = state.item_count.saturating_sub(1);
                let span_len = match span {
                    IndexSpan::RemainingRange => state.remaining_items(),
                    IndexSpan::LastItem => last,
                };
                let index = (relative * span_len as f32).floor() as usize;
                ScrollCommand::Index(index.min(last))
            }
        };
        tracing::trace!(pointer_y, drag_offset_y, relative, ?command, "drag target");
        command
    }
}

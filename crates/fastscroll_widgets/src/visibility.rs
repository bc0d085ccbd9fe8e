//! Whether the overlay renders at all

use fastscroll_core::Size;

use crate::host::LengthRatio;
use crate::metrics::{InteractionState, ScrollState};

/// Why the overlay is not rendered this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenReason {
    Disabled,
    /// The view has zero width or height
    EmptyView,
    /// No items, or none of them visible
    NoItems,
    /// Content fits inside the viewport
    NotScrollable,
    /// The view is not taller than the thumb, leaving it nowhere to travel
    NoTrack,
    /// Content is only a few screens long
    TooShort,
    /// The fade clock reached zero
    FadedOut,
}

impl HiddenReason {
    /// True when the content itself is too small for fast-scroll to help,
    /// as opposed to the overlay merely having faded
    pub fn is_content_too_small(&self) -> bool {
        matches!(
            self,
            HiddenReason::NoItems | HiddenReason::NotScrollable | HiddenReason::TooShort
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden(HiddenReason),
}

/// Decides, per redraw, whether the overlay should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityPolicy {
    /// Content must span more than this many screens while not dragging
    pub length_threshold: f32,
    pub length_ratio: LengthRatio,
}

impl VisibilityPolicy {
    pub const DEFAULT_LENGTH_THRESHOLD: f32 = 4.0;

    pub fn new(length_threshold: f32, length_ratio: LengthRatio) -> Self {
        Self {
            length_threshold,
            length_ratio,
        }
    }

    pub fn evaluate(
        &self,
        state: &ScrollState,
        interaction: &InteractionState,
        view: Size,
        thumb_height: f32,
        opacity: f32,
    ) -> Visibility {
        use HiddenReason::*;

        if view.is_empty() {
            return Visibility::Hidden(EmptyView);
        }
        if state.item_count == 0 || state.visible_item_count == 0 {
            return Visibility::Hidden(NoItems);
        }
        if state.remaining_items() == 0 || !state.is_scrollable() {
            return Visibility::Hidden(NotScrollable);
        }
        let travel = view.height - thumb_height;
        if travel.is_nan() || travel <= 0.0 {
            return Visibility::Hidden(NoTrack);
        }
        // A drag in progress must never lose its thumb, even if the content
        // shrinks under it
        if !interaction.is_dragging() {
            let too_short = state
                .screens(self.length_ratio)
                .map_or(true, |screens| screens <= self.length_threshold);
            if too_short {
                return Visibility::Hidden(TooShort);
            }
        }
        if opacity.is_nan() || opacity <= 0.0 {
            return Visibility::Hidden(FadedOut);
        }
        Visibility::Visible
    }
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH_THRESHOLD, LengthRatio::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(400.0, 2000.0);

    fn evaluate(state: ScrollState, interaction: InteractionState) -> Visibility {
        VisibilityPolicy::default().evaluate(&state, &interaction, VIEW, 48.0, 1.0)
    }

    #[test]
    fn test_length_threshold() {
        let idle = InteractionState::Idle;
        assert_eq!(
            evaluate(ScrollState::from_items(100, 25, 0), idle),
            Visibility::Hidden(HiddenReason::TooShort)
        );
        assert_eq!(
            evaluate(ScrollState::from_items(101, 25, 0), idle),
            Visibility::Visible
        );
    }

    #[test]
    fn test_truncated_ratio() {
        let policy = VisibilityPolicy::new(4.0, LengthRatio::Truncated);
        let state = ScrollState::from_items(101, 25, 0);
        assert_eq!(
            policy.evaluate(&state, &InteractionState::Idle, VIEW, 48.0, 1.0),
            Visibility::Hidden(HiddenReason::TooShort)
        );
    }

    #[test]
    fn test_dragging_bypasses_length() {
        let dragging = InteractionState::Dragging { drag_offset_y: 0.0 };
        assert_eq!(
            evaluate(ScrollState::from_items(30, 25, 0), dragging),
            Visibility::Visible
        );
        // but never the structural checks
        assert_eq!(
            evaluate(ScrollState::from_items(20, 25, 0), dragging),
            Visibility::Hidden(HiddenReason::NotScrollable)
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        let idle = InteractionState::Idle;
        assert_eq!(
            evaluate(ScrollState::from_items(0, 0, 0), idle),
            Visibility::Hidden(HiddenReason::NoItems)
        );
        assert_eq!(
            evaluate(ScrollState::from_items(500, 0, 0), idle),
            Visibility::Hidden(HiddenReason::NoItems)
        );

        let policy = VisibilityPolicy::default();
        let state = ScrollState::from_items(500, 10, 0);
        assert_eq!(
            policy.evaluate(&state, &idle, Size::new(400.0, 0.0), 48.0, 1.0),
            Visibility::Hidden(HiddenReason::EmptyView)
        );
        assert_eq!(
            policy.evaluate(&state, &idle, Size::new(400.0, 48.0), 48.0, 1.0),
            Visibility::Hidden(HiddenReason::NoTrack)
        );
    }

    #[test]
    fn test_pixel_extent_must_exceed_viewport() {
        let state = ScrollState::from_pixels(2000.0, 2000.0, 0.0, 500, 10);
        assert_eq!(
            evaluate(state, InteractionState::Idle),
            Visibility::Hidden(HiddenReason::NotScrollable)
        );
    }

    #[test]
    fn test_faded_out() {
        let state = ScrollState::from_items(500, 10, 0);
        let policy = VisibilityPolicy::default();
        assert_eq!(
            policy.evaluate(&state, &InteractionState::Idle, VIEW, 48.0, 0.0),
            Visibility::Hidden(HiddenReason::FadedOut)
        );
        assert!(HiddenReason::TooShort.is_content_too_small());
        assert!(!HiddenReason::FadedOut.is_content_too_small());
    }
}

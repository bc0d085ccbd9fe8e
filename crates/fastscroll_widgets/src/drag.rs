//! Thumb drag state machine
//!
//! ```text
//!            THUMB_PRESS              DRAG_CAPTURE
//!   Idle ───────────────▶ PressCandidate ───────────▶ Dragging ◀─┐
//!    ▲                        │ DRAG_REJECT             │   │    │ POINTER_MOVE
//!    │                        │ POINTER_UP / CANCEL     │   └────┘
//!    └────────────────────────┴─────────────────────────┘
//!                                     POINTER_UP / POINTER_CANCEL
//! ```
//!
//! A press only becomes a candidate when it lands inside the thumb's hit
//! area. The candidate is captured (offset recorded, gesture claimed) unless
//! the view is degenerate, in which case the press falls through to the
//! host.

use fastscroll_core::events::{event_types, EventType};
use fastscroll_core::{Point, Rect, Size};

use crate::host::ScrollCommand;
use crate::mapper::GeometryMapper;
use crate::metrics::ScrollState;

/// Maps events to state transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Phase of a thumb drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    PressCandidate,
    Dragging,
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use fastscroll_core::events::event_types::*;
        match (self, event) {
            (DragPhase::Idle, THUMB_PRESS) => Some(DragPhase::PressCandidate),
            (DragPhase::PressCandidate, DRAG_CAPTURE) => Some(DragPhase::Dragging),
            (DragPhase::PressCandidate, DRAG_REJECT | POINTER_UP | POINTER_CANCEL) => {
                Some(DragPhase::Idle)
            }
            (DragPhase::Dragging, POINTER_MOVE) => Some(DragPhase::Dragging),
            (DragPhase::Dragging, POINTER_UP | POINTER_CANCEL) => Some(DragPhase::Idle),
            _ => None,
        }
    }
}

/// Drives a single-pointer thumb drag
#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: DragPhase,
    last_command: Option<ScrollCommand>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.last_command
    }

    fn send(&mut self, event: EventType) -> bool {
        match self.phase.on_event(event) {
            Some(next) => {
                if next != self.phase {
                    tracing::debug!(from = ?self.phase, to = ?next, event, "drag transition");
                }
                self.phase = next;
                true
            }
            None => false,
        }
    }

    /// Handle a pointer-down.
    ///
    /// `hit_rect` is `None` while the overlay is not visible. `thumb_top` is
    /// the thumb's current top edge, `None` if it cannot be placed. Returns
    /// the offset from the pointer to the thumb's top edge if the drag was
    /// captured; the caller keeps it for the rest of the drag.
    pub fn press(
        &mut self,
        position: Point,
        hit_rect: Option<Rect>,
        thumb_top: Option<f32>,
        view: Size,
    ) -> Option<f32> {
        if self.phase != DragPhase::Idle {
            return None;
        }
        let hit = hit_rect.is_some_and(|rect| rect.contains(position));
        if !hit || !self.send(event_types::THUMB_PRESS) {
            return None;
        }
        match thumb_top {
            Some(top) if !view.is_empty() => {
                self.last_command = None;
                self.send(event_types::DRAG_CAPTURE).then_some(top - position.y)
            }
            _ => {
                self.send(event_types::DRAG_REJECT);
                None
            }
        }
    }

    /// Handle a pointer-move while dragging.
    ///
    /// `drag_offset_y` is the offset returned by [`press`](Self::press).
    /// Returns the command to issue, or `None` when not dragging or when the
    /// target equals the previous one.
    pub fn drag_to(
        &mut self,
        pointer_y: f32,
        drag_offset_y: f32,
        mapper: &GeometryMapper,
        state: &ScrollState,
        view_height: f32,
    ) -> Option<ScrollCommand> {
        if !self.send(event_types::POINTER_MOVE) {
            return None;
        }
        let command = mapper.target(pointer_y, drag_offset_y, state, view_height);
        if self.last_command == Some(command) {
            return None;
        }
        self.last_command = Some(command);
        Some(command)
    }

    /// Forget the last issued command so the next move always re-issues
    pub fn forget_last_command(&mut self) {
        self.last_command = None;
    }

    /// Handle a pointer-up or cancel. Returns `true` if a drag ended.
    pub fn release(&mut self, cancelled: bool) -> bool {
        let was_dragging = self.is_dragging();
        let event = if cancelled {
            event_types::POINTER_CANCEL
        } else {
            event_types::POINTER_UP
        };
        self.send(event);
        if was_dragging {
            self.last_command = None;
        }
        was_dragging
    }
}

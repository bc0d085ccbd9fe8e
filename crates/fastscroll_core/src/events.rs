//! Pointer events
//!
//! The host framework delivers touch input already hit-tested and mapped
//! into the view's local coordinate space. Only a single pointer is tracked.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Event types understood by the fast-scroll state machines
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_CANCEL: EventType = 4;
    /// A pointer-down landed inside the thumb's hit area
    pub const THUMB_PRESS: EventType = 10;
    /// The press was accepted and the drag offset captured
    pub const DRAG_CAPTURE: EventType = 11;
    /// The press could not be captured (degenerate view)
    pub const DRAG_REJECT: EventType = 12;
}

/// Kind of pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerKind {
    /// The numeric event type for this pointer kind
    pub fn event_type(&self) -> EventType {
        match self {
            PointerKind::Down => event_types::POINTER_DOWN,
            PointerKind::Move => event_types::POINTER_MOVE,
            PointerKind::Up => event_types::POINTER_UP,
            PointerKind::Cancel => event_types::POINTER_CANCEL,
        }
    }

    /// True for events that end a gesture
    pub fn is_release(&self) -> bool {
        matches!(self, PointerKind::Up | PointerKind::Cancel)
    }
}

/// A raw pointer event in view-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Cancel, x, y)
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

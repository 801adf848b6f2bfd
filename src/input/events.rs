//! Pointer events forwarded by the host view.

use crate::types::{Direction, Point, RectId};

/// What a pointer-down landed on, as classified by the view (or by
/// [`crate::hit_testing::HitTester`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The rectangle's body - starts a drag
    Body(RectId),
    /// One of the eight resize handles - starts a resize
    Handle(RectId, Direction),
    /// The delete affordance - deletes, never drags
    Delete(RectId),
}

impl PointerTarget {
    pub fn rect_id(&self) -> RectId {
        match self {
            Self::Body(id) | Self::Handle(id, _) | Self::Delete(id) => *id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDownEvent {
    /// Global pointer position
    pub position: Point,
    pub target: PointerTarget,
}

impl PointerDownEvent {
    pub fn new(position: Point, target: PointerTarget) -> Self {
        Self { position, target }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMoveEvent {
    /// Global pointer position
    pub position: Point,
}

impl PointerMoveEvent {
    pub fn new(position: Point) -> Self {
        Self { position }
    }
}

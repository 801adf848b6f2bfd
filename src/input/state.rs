//! Interaction state machine - the single source of truth for what the
//! pointer is currently doing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (pointer down on a rectangle body)
//! Idle -> Resizing(direction)  (pointer down on a resize handle)
//!
//! Dragging -> Dragging         (pointer move)
//! Resizing -> Resizing         (pointer move)
//!
//! Any -> Idle                  (pointer up, pointer cancel, end session,
//!                               deletion of the session's target)
//! ```
//!
//! A pointer down while not `Idle` is rejected by the controller; sessions
//! never nest.

use crate::geometry::Operation;
use crate::types::{ContainerFrame, Direction, Geometry, Point, RectId};

/// Fixed reference snapshot taken at pointer down.
///
/// Never mutated while open. Every pointer move is computed from these
/// values rather than from the previous move's result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub kind: Operation,
    pub target: RectId,
    /// Drag: pointer offset within the rectangle (container-local).
    /// Resize: absolute pointer position at pointer down (global).
    pub pointer_anchor: Point,
    /// Target geometry at pointer down
    pub original: Geometry,
    /// Container origin and extents, captured once per session
    pub frame: ContainerFrame,
}

/// Unified interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionState {
    /// No pointer operation in progress
    #[default]
    Idle,

    /// Moving a rectangle
    Dragging { session: Session },

    /// Resizing a rectangle from one handle
    Resizing {
        direction: Direction,
        session: Session,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The open session, if any
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Idle => None,
            Self::Dragging { session } | Self::Resizing { session, .. } => Some(session),
        }
    }

    /// Id of the rectangle being manipulated
    pub fn target_id(&self) -> Option<RectId> {
        self.session().map(|s| s.target)
    }

    pub fn resize_direction(&self) -> Option<Direction> {
        match self {
            Self::Resizing { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// Open a drag session. `pointer_anchor` is the pointer's offset from
    /// the rectangle's top-left corner.
    pub fn start_dragging(
        &mut self,
        target: RectId,
        pointer_anchor: Point,
        original: Geometry,
        frame: ContainerFrame,
    ) {
        *self = Self::Dragging {
            session: Session {
                kind: Operation::Drag,
                target,
                pointer_anchor,
                original,
                frame,
            },
        };
    }

    /// Open a resize session. `pointer_anchor` is the absolute pointer
    /// position.
    pub fn start_resizing(
        &mut self,
        target: RectId,
        direction: Direction,
        pointer_anchor: Point,
        original: Geometry,
        frame: ContainerFrame,
    ) {
        *self = Self::Resizing {
            direction,
            session: Session {
                kind: Operation::Resize(direction),
                target,
                pointer_anchor,
                original,
                frame,
            },
        };
    }

    /// Discard any open session.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

//! Geometry engine - pure drag and resize math.
//!
//! Every function here is total and side-effect free: given an original
//! geometry, an operation, a pointer delta and the container extents it
//! returns the next geometry. Constraint handling is done by clamping, never
//! by rejecting input.
//!
//! ## Resize anchoring
//!
//! For handles that move the near edge (`W`, `N` and the corners containing
//! them) the moving edge is placed at `original + delta` on that axis even
//! when the minimum-size clamp fires. The opposite edge therefore drifts
//! once the rectangle is at its minimum size. Only the far edge is clamped to
//! the container; a near edge dragged past the container origin is left
//! negative.

use crate::types::{Container, Direction, Geometry, Point};

/// An operation the engine can apply to a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Move without changing size
    Drag,
    /// Resize from the given handle
    Resize(Direction),
}

/// Apply `operation` to `original` with the given pointer `delta`.
pub fn compute(
    original: &Geometry,
    operation: Operation,
    delta: Point,
    min_size: f32,
    container: Container,
) -> Geometry {
    match operation {
        Operation::Drag => compute_drag(original, delta, container),
        Operation::Resize(direction) => {
            compute_resize(original, direction, delta, min_size, container)
        }
    }
}

/// Move `original` by `delta`, keeping it fully inside `container`.
///
/// Each axis is clamped independently to `[0, container_extent - rect_extent]`.
/// When the rectangle is larger than the container the position pins to 0.
pub fn compute_drag(original: &Geometry, delta: Point, container: Container) -> Geometry {
    let max_x = container.width - original.width;
    let max_y = container.height - original.height;

    Geometry {
        x: (original.x + delta.x).min(max_x).max(0.0),
        y: (original.y + delta.y).min(max_y).max(0.0),
        width: original.width,
        height: original.height,
    }
}

/// Resize `original` from the handle `direction` by `delta`.
///
/// Width and height never drop below `min_size`, including when the far-edge
/// container clamp would otherwise shrink them further.
pub fn compute_resize(
    original: &Geometry,
    direction: Direction,
    delta: Point,
    min_size: f32,
    container: Container,
) -> Geometry {
    // (candidate width, left edge)
    let (width, x) = match direction {
        Direction::E | Direction::NE | Direction::SE => {
            (Some(original.width + delta.x), original.x)
        }
        Direction::W | Direction::NW | Direction::SW => {
            (Some(original.width - delta.x), original.x + delta.x)
        }
        Direction::N | Direction::S => (None, original.x),
    };

    // (candidate height, top edge)
    let (height, y) = match direction {
        Direction::S | Direction::SE | Direction::SW => {
            (Some(original.height + delta.y), original.y)
        }
        Direction::N | Direction::NE | Direction::NW => {
            (Some(original.height - delta.y), original.y + delta.y)
        }
        Direction::E | Direction::W => (None, original.y),
    };

    Geometry {
        x,
        y,
        width: width.map_or(original.width, |w| {
            clamp_extent(w, min_size, container.width - x)
        }),
        height: height.map_or(original.height, |h| {
            clamp_extent(h, min_size, container.height - y)
        }),
    }
}

/// Clamp a candidate extent to `min_size`, then to the room left before the
/// far container edge. The minimum wins when the two disagree.
#[inline]
fn clamp_extent(candidate: f32, min_size: f32, room: f32) -> f32 {
    let sized = candidate.max(min_size);
    sized.min(room).max(min_size)
}

//! Hit testing for rectangles, resize handles and delete affordances.
//!
//! Hosts that classify pointer-downs themselves can skip this module and
//! call the controller with an explicit [`PointerTarget`]. Otherwise the
//! tester resolves a container-local point against the store, topmost
//! rectangle first, with priority:
//!
//! 1. Delete affordance (outside the top-right corner)
//! 2. Corner handles
//! 3. Edge midpoint handles
//! 4. Body (for dragging)

use crate::constants::{DELETE_BUTTON_SIZE, HANDLE_HIT_RADIUS};
use crate::input::PointerTarget;
use crate::store::RectangleStore;
use crate::types::{Direction, Geometry, Point};

/// What part of a single rectangle a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    Delete,
    Handle(Direction),
    Body,
}

const CORNERS: [Direction; 4] = [Direction::NW, Direction::NE, Direction::SW, Direction::SE];
const EDGES: [Direction; 4] = [Direction::N, Direction::S, Direction::W, Direction::E];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTester {
    /// Half-extent of the square grab area around a handle
    pub handle_radius: f32,
    /// Side of the square delete affordance
    pub delete_size: f32,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new(HANDLE_HIT_RADIUS, DELETE_BUTTON_SIZE)
    }
}

impl HitTester {
    pub fn new(handle_radius: f32, delete_size: f32) -> Self {
        Self {
            handle_radius,
            delete_size,
        }
    }

    /// How far outside a rectangle's bounds a hit can land.
    pub fn reach(&self) -> f32 {
        self.handle_radius + self.delete_size
    }

    /// Bounds of the delete affordance, diagonally outside the top-right
    /// corner so it never overlaps the NE handle.
    pub fn delete_bounds(&self, geometry: &Geometry) -> Geometry {
        Geometry::new(
            geometry.right() + self.handle_radius,
            geometry.y - self.handle_radius - self.delete_size,
            self.delete_size,
            self.delete_size,
        )
    }

    /// Classify `point` against a single rectangle.
    pub fn classify(&self, geometry: &Geometry, point: Point) -> Option<HitKind> {
        if self.delete_bounds(geometry).contains(point) {
            return Some(HitKind::Delete);
        }

        if let Some(dir) = CORNERS
            .into_iter()
            .chain(EDGES)
            .find(|dir| self.is_near(point, dir.handle_position(geometry)))
        {
            return Some(HitKind::Handle(dir));
        }

        if geometry.contains(point) {
            return Some(HitKind::Body);
        }

        None
    }

    /// Resolve `point` against every rectangle in `store`, topmost first.
    pub fn hit_test(&self, store: &RectangleStore, point: Point) -> Option<PointerTarget> {
        store.candidates_at(point).into_iter().find_map(|rect| {
            self.classify(&rect.geometry, point).map(|kind| match kind {
                HitKind::Delete => PointerTarget::Delete(rect.id),
                HitKind::Handle(dir) => PointerTarget::Handle(rect.id, dir),
                HitKind::Body => PointerTarget::Body(rect.id),
            })
        })
    }

    #[inline]
    fn is_near(&self, point: Point, handle: Point) -> bool {
        (point.x - handle.x).abs() <= self.handle_radius
            && (point.y - handle.y).abs() <= self.handle_radius
    }
}

//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing rectangles on the
//! editing surface. Entries are padded by a margin so that handles sitting on
//! the border (half inside, half outside) are still found by point queries.

use crate::types::{Geometry, RectId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a rectangle's padded bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub rect_id: RectId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(rect_id: RectId, geometry: &Geometry, margin: f32) -> Self {
        Self {
            rect_id,
            min_x: geometry.x - margin,
            min_y: geometry.y - margin,
            max_x: geometry.right() + margin,
            max_y: geometry.bottom() + margin,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rect_id == other.rect_id
    }
}

/// Spatial index over rectangle bounds.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<RectId, SpatialEntry>,
    margin: f32,
}

impl SpatialIndex {
    /// Create an empty index whose entries are padded by `margin`.
    pub fn new(margin: f32) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            margin,
        }
    }

    /// Insert or replace the entry for `rect_id`.
    pub fn insert(&mut self, rect_id: RectId, geometry: &Geometry) {
        if let Some(old_entry) = self.entries.remove(&rect_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(rect_id, geometry, self.margin);
        self.tree.insert(entry);
        self.entries.insert(rect_id, entry);
    }

    pub fn remove(&mut self, rect_id: RectId) -> bool {
        if let Some(entry) = self.entries.remove(&rect_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Query all rectangles whose padded bounds contain the point
    /// (container-local). Order is unspecified.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<RectId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.rect_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

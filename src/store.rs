//! Rectangle store - the insertion-ordered collection of rectangles.
//!
//! Store order is significant: it is the z-order for hit testing (later
//! rectangles sit on top) and the order of crop areas in a detection request.
//! Geometry changes go through the store so the spatial index stays in sync.

use crate::constants::AREA_LABEL_PREFIX;
use crate::spatial_index::SpatialIndex;
use crate::types::{Geometry, Point, RectId, Rectangle};
use tracing::debug;

pub struct RectangleStore {
    rects: Vec<Rectangle>,
    index: SpatialIndex,
    next_id: RectId,
    /// Rectangles created since the last reset; drives "Area N" labels
    created: u64,
}

impl RectangleStore {
    /// Create an empty store. `hit_margin` pads the spatial index so that
    /// handles straddling a border are found by point queries.
    pub fn new(hit_margin: f32) -> Self {
        Self {
            rects: Vec::new(),
            index: SpatialIndex::new(hit_margin),
            next_id: 1,
            created: 0,
        }
    }

    /// Append a rectangle with the next "Area N" label and return its id.
    pub fn add(&mut self, geometry: Geometry) -> RectId {
        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;

        let label = format!("{} {}", AREA_LABEL_PREFIX, self.created);
        self.index.insert(id, &geometry);
        self.rects.push(Rectangle::new(id, geometry, label));
        debug!(rect_id = id, ?geometry, "rectangle added");
        id
    }

    pub fn remove(&mut self, id: RectId) -> Option<Rectangle> {
        let pos = self.position(id)?;
        self.index.remove(id);
        Some(self.rects.remove(pos))
    }

    pub fn get(&self, id: RectId) -> Option<&Rectangle> {
        self.rects.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RectId) -> bool {
        self.position(id).is_some()
    }

    /// Overwrite a rectangle's geometry. Returns the updated rectangle.
    pub fn set_geometry(&mut self, id: RectId, geometry: Geometry) -> Option<&Rectangle> {
        let pos = self.position(id)?;
        self.index.insert(id, &geometry);
        let rect = &mut self.rects[pos];
        rect.geometry = geometry;
        Some(rect)
    }

    pub fn set_label(&mut self, id: RectId, label: impl Into<String>) -> Option<&Rectangle> {
        let pos = self.position(id)?;
        let rect = &mut self.rects[pos];
        rect.label = label.into();
        Some(rect)
    }

    /// Rectangles whose (padded) bounds contain `point`, topmost first.
    pub fn candidates_at(&self, point: Point) -> Vec<&Rectangle> {
        let hits = self.index.query_point(point.x, point.y);
        self.rects
            .iter()
            .rev()
            .filter(|r| hits.contains(&r.id))
            .collect()
    }

    /// Iterate in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.iter()
    }

    pub fn ids(&self) -> Vec<RectId> {
        self.rects.iter().map(|r| r.id).collect()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Remove every rectangle and restart id and label numbering.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.index.clear();
        self.next_id = 1;
        self.created = 0;
    }

    fn position(&self, id: RectId) -> Option<usize> {
        self.rects.iter().position(|r| r.id == id)
    }
}

//! Spatial Index Module
//!
//! R-tree based spatial indexing used to prefilter hit testing and box
//! selection, reducing point queries from O(n) to O(log n). Envelopes are
//! conservative: they must cover everything the element's precise hit test
//! can accept, so a point query returns candidate ids that still go through
//! the element's own `is_hit`.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

use crate::geometry::{Point, Rect};

/// A spatial entry holding one element's conservative bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element_id: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element_id: u64, bounds: Rect) -> Self {
        Self {
            element_id,
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.right(),
            max_y: bounds.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
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
        self.element_id == other.element_id
    }
}

/// R-tree over element envelopes, kept in sync with scene mutations.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the envelope for an element.
    pub fn update(&mut self, element_id: u64, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&element_id) {
            self.tree.remove(&old_entry);
        }
        let entry = SpatialEntry::new(element_id, bounds);
        self.tree.insert(entry);
        self.entries.insert(element_id, entry);
    }

    pub fn remove(&mut self, element_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&element_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of all elements whose envelope contains the point.
    pub fn query_point(&self, point: Point) -> Vec<u64> {
        let probe = AABB::from_point([point.x, point.y]);
        self.tree
            .locate_in_envelope_intersecting(&probe)
            .filter(|entry| entry.contains_point(point))
            .map(|entry| entry.element_id)
            .collect()
    }

    /// Ids of all elements whose envelope intersects the rectangle.
    pub fn query_rect(&self, rect: Rect) -> Vec<u64> {
        let probe = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);
        self.tree
            .locate_in_envelope_intersecting(&probe)
            .map(|entry| entry.element_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

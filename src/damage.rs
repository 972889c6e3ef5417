//! Damage accumulation between repaints.
//!
//! Mutations report the regions they dirty; the accumulated union is flushed
//! to the host as a single redraw request. `None` is the empty region, so
//! unioning never has to special-case a zero-sized rectangle at the origin.

use crate::geometry::{Point, Rect};

#[derive(Debug, Default)]
pub struct DamageTracker {
    region: Option<Rect>,
}

impl DamageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rect(&mut self, rect: Rect) {
        self.region = Some(match self.region {
            Some(current) => current.union(&rect),
            None => rect,
        });
    }

    /// Grows the region to cover a single point.
    pub fn add_point(&mut self, point: Point) {
        self.add_rect(Rect::new(point.x, point.y, 0.0, 0.0));
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none()
    }

    pub fn peek(&self) -> Option<Rect> {
        self.region
    }

    /// Takes the accumulated region expanded by `margin`, leaving the
    /// tracker empty. Returns `None` when nothing was damaged.
    pub fn take(&mut self, margin: f32) -> Option<Rect> {
        self.region.take().map(|rect| rect.expand(margin))
    }
}

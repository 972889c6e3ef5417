//! Basic geometric types and the hit-rectangle transform utility.
//!
//! Everything on the canvas works in device coordinates relative to the
//! canvas origin. `Rect` is always axis-aligned with non-negative spans;
//! constructors normalize orientation so downstream code never sees a
//! negative width or height.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Used for nearest-port resolution, where the square root is never
    /// needed and ordering must be exact.
    pub fn distance_sq(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Point) -> f32 {
        self.distance_sq(other).sqrt()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle with non-negative spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle spanning two diagonal corners, in either order.
    pub fn from_diagonal(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// True if `other` lies entirely inside this rectangle (borders included).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Smallest rectangle covering both this rectangle and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Grow the rectangle by half the margin on every side.
    pub fn expand(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin / 2.0,
            self.y - margin / 2.0,
            self.width + margin,
            self.height + margin,
        )
    }
}

/// The affine transform active when an element was last drawn: a translation
/// followed by a rotation about the translated origin.
///
/// Shapes draw in canvas space and cache the identity. Lines draw under
/// translate(start) then rotate(atan2(end - start)), so their local space has
/// the shaft lying on the positive x axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawTransform {
    pub translation: Point,
    pub rotation: f32,
}

impl DrawTransform {
    pub const IDENTITY: DrawTransform = DrawTransform {
        translation: Point::new(0.0, 0.0),
        rotation: 0.0,
    };

    /// Transform for a line drawn from `start` toward `end`.
    pub fn for_line(start: Point, end: Point) -> Self {
        Self {
            translation: start,
            rotation: (end.y - start.y).atan2(end.x - start.x),
        }
    }

    /// Map a local-space point into canvas space.
    pub fn apply(&self, p: Point) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        Point::new(
            self.translation.x + cos * p.x - sin * p.y,
            self.translation.y + sin * p.x + cos * p.y,
        )
    }

    /// Map a canvas-space point into local space (inverse transform).
    pub fn to_local(&self, p: Point) -> Point {
        let x = p.x - self.translation.x;
        let y = p.y - self.translation.y;
        let (sin, cos) = (-self.rotation).sin_cos();
        Point::new(cos * x - sin * y, sin * x + cos * y)
    }
}

/// Convert a pointer coordinate plus the transform cached at draw time into a
/// small axis-normalized hit rectangle in the element's local draw space.
///
/// `tolerance` is the side length of the rectangle, centered on the
/// transformed coordinate. Spans are normalized (corners swapped if a
/// computed span comes out negative) before returning.
pub fn hit_rect(coordinate: Point, transform: &DrawTransform, tolerance: f32) -> Rect {
    let local = transform.to_local(coordinate);
    let half = tolerance / 2.0;
    let a = Point::new(local.x - half, local.y - half);
    let b = Point::new(local.x + half, local.y + half);
    Rect::from_diagonal(a, b)
}

/// True if the segment `a`-`b` intersects `rect` (borders included).
///
/// Standard slab clipping: shrink the parameter interval against each axis
/// in turn and check it stays non-empty.
pub fn segment_intersects_rect(a: Point, b: Point, rect: &Rect) -> bool {
    let (mut t0, mut t1) = (0.0f32, 1.0f32);
    let d = Point::new(b.x - a.x, b.y - a.y);

    let axes = [
        (d.x, rect.x - a.x, rect.right() - a.x),
        (d.y, rect.y - a.y, rect.bottom() - a.y),
    ];
    for (delta, lo, hi) in axes {
        if delta == 0.0 {
            if lo > 0.0 || hi < 0.0 {
                return false;
            }
            continue;
        }
        let (mut near, mut far) = (lo / delta, hi / delta);
        if near > far {
            std::mem::swap(&mut near, &mut far);
        }
        t0 = t0.max(near);
        t1 = t1.min(far);
        if t0 > t1 {
            return false;
        }
    }
    true
}

/// True if `p` lies inside the closed polygon `points` (even-odd rule).
pub fn point_in_polygon(p: Point, points: &[Point]) -> bool {
    let mut inside = false;
    let n = points.len();
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > p.y) != (pj.y > p.y)
            && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True if the closed polygon `points` intersects `rect`.
pub fn polygon_intersects_rect(points: &[Point], rect: &Rect) -> bool {
    if points.iter().any(|p| rect.contains_point(*p)) {
        return true;
    }
    if point_in_polygon(Point::new(rect.x, rect.y), points) {
        return true;
    }
    let n = points.len();
    (0..n).any(|i| segment_intersects_rect(points[i], points[(i + 1) % n], rect))
}

/// True if the axis-aligned ellipse inscribed in `frame` intersects `rect`.
pub fn ellipse_intersects_rect(frame: &Rect, rect: &Rect) -> bool {
    let center = frame.center();
    let rx = frame.width / 2.0;
    let ry = frame.height / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    // Closest point of the rect to the ellipse center, in normalized space.
    let nx = (center.x.clamp(rect.x, rect.right()) - center.x) / rx;
    let ny = (center.y.clamp(rect.y, rect.bottom()) - center.y) / ry;
    nx * nx + ny * ny <= 1.0
}

/// True if `p` lies inside a rounded rectangle (borders included).
pub fn point_in_rounded_rect(p: Point, rect: &Rect, radius: f32) -> bool {
    if !rect.contains_point(p) {
        return false;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let cx = p.x.clamp(rect.x + r, rect.right() - r);
    let cy = p.y.clamp(rect.y + r, rect.bottom() - r);
    // Inside the central cross, or within radius of the nearest corner circle.
    p.distance_sq(Point::new(cx, cy)) <= r * r
        || (p.x >= rect.x + r && p.x <= rect.right() - r)
        || (p.y >= rect.y + r && p.y <= rect.bottom() - r)
}

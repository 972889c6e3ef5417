//! Connection lines: directed segments between two shape ports.
//!
//! A line references its endpoints as (shape id, port side) pairs and is
//! rendered between the current port centers, recomputed on every draw so
//! the line follows its shapes. The three kinds differ only in terminator
//! decoration: association keeps the full shaft and an open arrowhead,
//! generalization shortens the shaft to meet a closed hollow triangle, and
//! composition shortens it to meet a filled diamond.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARROW_DEPTH, ARROW_HALF_WIDTH, DIAMOND_DEPTH, DIAMOND_HALF_WIDTH, ELEMENT_STROKE,
    LINE_HIT_TOLERANCE, SELECTED_LINE_STROKE, STROKE_WIDTH,
};
use crate::element::shape::PortSide;
use crate::geometry::{
    DrawTransform, Point, Rect, hit_rect, polygon_intersects_rect,
};
use crate::render::{DrawCommand, DrawList};

/// The three connection line kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Association,
    Generalization,
    Composition,
}

impl LineKind {
    /// Whether a line of this kind may connect the two endpoints.
    ///
    /// Association and composition allow self-loops but reject a line from a
    /// port to itself; generalization rejects any self-connection because a
    /// shape may not generalize itself, even through different ports.
    pub fn permits(&self, start: Endpoint, end: Endpoint) -> bool {
        match self {
            LineKind::Association | LineKind::Composition => start != end,
            LineKind::Generalization => start.shape != end.shape,
        }
    }

    /// Local-space shaft length for a line of total length `length`.
    fn shaft_length(&self, length: f32) -> f32 {
        match self {
            LineKind::Association => length,
            LineKind::Generalization => (length - ARROW_DEPTH).max(0.0),
            LineKind::Composition => (length - DIAMOND_DEPTH).max(0.0),
        }
    }

    /// Local-space terminator polygon for a line of total length `length`.
    fn head_polygon(&self, length: f32) -> Vec<Point> {
        match self {
            LineKind::Association | LineKind::Generalization => vec![
                Point::new(length - ARROW_DEPTH, -ARROW_HALF_WIDTH),
                Point::new(length, 0.0),
                Point::new(length - ARROW_DEPTH, ARROW_HALF_WIDTH),
            ],
            LineKind::Composition => vec![
                Point::new(length - DIAMOND_DEPTH, 0.0),
                Point::new(length - DIAMOND_DEPTH / 2.0, -DIAMOND_HALF_WIDTH),
                Point::new(length, 0.0),
                Point::new(length - DIAMOND_DEPTH / 2.0, DIAMOND_HALF_WIDTH),
            ],
        }
    }
}

/// One end of a connection line: a shape and the port it attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub shape: u64,
    pub port: PortSide,
}

/// Endpoint positions captured by the last draw. Hit testing, containment,
/// and repaint contribution all read this cache, so they are only valid
/// after at least one render pass.
#[derive(Clone, Copy, Debug)]
pub struct LineGeometry {
    pub start: Point,
    pub end: Point,
    pub length: f32,
}

/// A directed connection between two shape ports.
#[derive(Clone, Debug)]
pub struct Line {
    id: u64,
    kind: LineKind,
    start: Endpoint,
    end: Endpoint,
    selected: bool,
    geometry: Option<LineGeometry>,
}

impl Line {
    pub fn new(id: u64, kind: LineKind, start: Endpoint, end: Endpoint) -> Self {
        Self {
            id,
            kind,
            start,
            end,
            selected: false,
            geometry: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn start(&self) -> Endpoint {
        self.start
    }

    pub fn end(&self) -> Endpoint {
        self.end
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn geometry(&self) -> Option<LineGeometry> {
        self.geometry
    }

    /// Emit draw commands for the shaft and terminator, given the current
    /// port centers, and cache the geometry for subsequent hit tests.
    pub fn draw(&mut self, start_point: Point, end_point: Point, out: &mut DrawList) {
        let length = start_point.distance(end_point);
        self.geometry = Some(LineGeometry {
            start: start_point,
            end: end_point,
            length,
        });

        let transform = DrawTransform::for_line(start_point, end_point);
        let color = if self.selected {
            SELECTED_LINE_STROKE
        } else {
            ELEMENT_STROKE
        };

        out.push(DrawCommand::Line {
            from: start_point,
            to: transform.apply(Point::new(self.kind.shaft_length(length), 0.0)),
            color,
            width: STROKE_WIDTH,
        });

        let head: Vec<Point> = self
            .kind
            .head_polygon(length)
            .into_iter()
            .map(|p| transform.apply(p))
            .collect();
        match self.kind {
            LineKind::Association => out.push(DrawCommand::StrokePolyline {
                points: head,
                color,
                width: STROKE_WIDTH,
                closed: false,
            }),
            LineKind::Generalization => out.push(DrawCommand::StrokePolyline {
                points: head,
                color,
                width: STROKE_WIDTH,
                closed: true,
            }),
            LineKind::Composition => out.push(DrawCommand::FillPolygon {
                points: head,
                color,
            }),
        }
    }

    /// Hit test in local draw space: the probe rectangle is checked against
    /// the stroked shaft and the terminator polygon.
    pub fn is_hit(&self, coordinate: Point) -> bool {
        let Some(geometry) = self.geometry else {
            return false;
        };
        let transform = DrawTransform::for_line(geometry.start, geometry.end);
        let probe = hit_rect(coordinate, &transform, LINE_HIT_TOLERANCE);

        let shaft = Rect::new(
            0.0,
            -STROKE_WIDTH / 2.0,
            self.kind.shaft_length(geometry.length),
            STROKE_WIDTH,
        );
        if shaft.intersects(&probe) {
            return true;
        }
        polygon_intersects_rect(&self.kind.head_polygon(geometry.length), &probe)
    }

    /// A line is contained in a selection box only when both endpoints are.
    pub fn is_contained_in(&self, selection_box: &Rect) -> bool {
        match self.geometry {
            Some(g) => {
                selection_box.contains_point(g.start) && selection_box.contains_point(g.end)
            }
            None => false,
        }
    }
}

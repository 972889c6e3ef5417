//! Basic shapes: the rectangular class and the elliptical use case.
//!
//! A shape owns an unselected top-left origin, a kind-specific fixed size,
//! an optional name, and four connection ports whose centers follow the
//! origin whenever the shape moves. Selected bounds grow by half a port side
//! on every edge so the ports become visible while selected.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CLASS_FILL, CLASS_HEIGHT, CLASS_WIDTH, ELEMENT_STROKE, NAME_COLOR, POINT_HIT_TOLERANCE,
    PORT_FILL, PORT_HALF, PORT_SIDE, STROKE_WIDTH, USE_CASE_FILL, USE_CASE_HEIGHT, USE_CASE_WIDTH,
};
use crate::geometry::{DrawTransform, Point, Rect, Size, ellipse_intersects_rect, hit_rect};
use crate::render::{DrawCommand, DrawList};

/// The two basic shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Class,
    UseCase,
}

impl ShapeKind {
    /// Fixed unselected size for this kind.
    pub fn unselected_size(&self) -> Size {
        match self {
            ShapeKind::Class => Size::new(CLASS_WIDTH, CLASS_HEIGHT),
            ShapeKind::UseCase => Size::new(USE_CASE_WIDTH, USE_CASE_HEIGHT),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Class => "Class",
            ShapeKind::UseCase => "UseCase",
        }
    }
}

/// One of the four fixed connection port positions on a shape's perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl PortSide {
    pub const ALL: [PortSide; 4] = [
        PortSide::Top,
        PortSide::Bottom,
        PortSide::Left,
        PortSide::Right,
    ];
}

/// A basic object on the canvas.
#[derive(Clone, Debug)]
pub struct Shape {
    id: u64,
    kind: ShapeKind,
    origin: Point,
    name: Option<String>,
    selected: bool,
    /// Unselected frame cached by the last draw; hit testing is only valid
    /// after at least one render pass.
    frame: Option<Rect>,
}

impl Shape {
    pub fn new(id: u64, kind: ShapeKind, origin: Point) -> Self {
        Self {
            id,
            kind,
            origin,
            name: None,
            selected: false,
            frame: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn unselected_bounds(&self) -> Rect {
        let size = self.kind.unselected_size();
        Rect::new(self.origin.x, self.origin.y, size.width, size.height)
    }

    /// Unselected bounds expanded by half a port side on every edge.
    pub fn selected_bounds(&self) -> Rect {
        self.unselected_bounds().expand(PORT_SIDE)
    }

    /// Center of the given port, recomputed from the current origin.
    pub fn port_center(&self, side: PortSide) -> Point {
        let b = self.unselected_bounds();
        match side {
            PortSide::Top => Point::new(b.x + b.width / 2.0, b.y),
            PortSide::Bottom => Point::new(b.x + b.width / 2.0, b.bottom()),
            PortSide::Left => Point::new(b.x, b.y + b.height / 2.0),
            PortSide::Right => Point::new(b.right(), b.y + b.height / 2.0),
        }
    }

    /// The fixed-size square region occupied by the given port.
    pub fn port_rect(&self, side: PortSide) -> Rect {
        let center = self.port_center(side);
        Rect::new(
            center.x - PORT_HALF,
            center.y - PORT_HALF,
            PORT_SIDE,
            PORT_SIDE,
        )
    }

    /// Port nearest to `coordinate` by squared Euclidean distance.
    ///
    /// A linear scan over the four ports; ties keep the earliest side in
    /// declaration order, so resolution is deterministic.
    pub fn nearest_port(&self, coordinate: Point) -> PortSide {
        let mut best = PortSide::Top;
        let mut best_dist = f32::INFINITY;
        for side in PortSide::ALL {
            let d = coordinate.distance_sq(self.port_center(side));
            if d < best_dist {
                best = side;
                best_dist = d;
            }
        }
        best
    }

    /// Move the origin without clamping. Boundary clamping happens at the
    /// scene level, where the canvas extent is known.
    pub fn apply_offset(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin.offset(dx, dy);
    }

    /// Emit draw commands and cache the frame used for hit testing.
    pub fn draw(&mut self, out: &mut DrawList) {
        let frame = self.unselected_bounds();
        self.frame = Some(frame);

        match self.kind {
            ShapeKind::Class => {
                out.push(DrawCommand::FillRect {
                    rect: frame,
                    color: CLASS_FILL,
                });
                out.push(DrawCommand::StrokeRect {
                    rect: frame,
                    color: ELEMENT_STROKE,
                    width: STROKE_WIDTH,
                });
                // Separators between the name, attribute, and method sections.
                for fraction in [1.0 / 3.0, 2.0 / 3.0] {
                    let y = frame.y + frame.height * fraction;
                    out.push(DrawCommand::Line {
                        from: Point::new(frame.x, y),
                        to: Point::new(frame.right(), y),
                        color: ELEMENT_STROKE,
                        width: STROKE_WIDTH,
                    });
                }
            }
            ShapeKind::UseCase => {
                out.push(DrawCommand::FillEllipse {
                    frame,
                    color: USE_CASE_FILL,
                });
                out.push(DrawCommand::StrokeEllipse {
                    frame,
                    color: ELEMENT_STROKE,
                    width: STROKE_WIDTH,
                });
            }
        }

        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                out.push(DrawCommand::Text {
                    position: Point::new(frame.x, frame.y + PORT_HALF),
                    max_width: frame.width,
                    content: name.to_string(),
                    color: NAME_COLOR,
                });
            }
        }

        if self.selected {
            for side in PortSide::ALL {
                out.push(DrawCommand::FillRect {
                    rect: self.port_rect(side),
                    color: PORT_FILL,
                });
            }
        }
    }

    /// Hit test against the frame cached by the last draw.
    pub fn is_hit(&self, coordinate: Point) -> bool {
        let Some(frame) = self.frame else {
            return false;
        };
        // Shapes draw in canvas space, so the cached transform is identity.
        let probe = hit_rect(coordinate, &DrawTransform::IDENTITY, POINT_HIT_TOLERANCE);
        match self.kind {
            ShapeKind::Class => frame.intersects(&probe),
            ShapeKind::UseCase => ellipse_intersects_rect(&frame, &probe),
        }
    }

    pub fn is_contained_in(&self, selection_box: &Rect) -> bool {
        selection_box.contains_rect(&self.unselected_bounds())
    }
}

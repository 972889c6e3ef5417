//! Input State Module
//!
//! Types describing what the pointer is currently doing. Each tool maps to a
//! mode with explicit press, drag, and release behavior; the per-gesture
//! state lives here so the handlers themselves stay stateless functions over
//! the editor.

use crate::element::{Endpoint, LineKind, ShapeKind};
use crate::geometry::{Point, Rect, Size};

/// The tool selected in the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Select,
    Association,
    Generalization,
    Composition,
    CreateClass,
    CreateUseCase,
}

impl Tool {
    pub fn mode(&self) -> Mode {
        match self {
            Tool::Select => Mode::Select(SelectState::Idle),
            Tool::Association => Mode::CreateConnection(LineKind::Association, None),
            Tool::Generalization => Mode::CreateConnection(LineKind::Generalization, None),
            Tool::Composition => Mode::CreateConnection(LineKind::Composition, None),
            Tool::CreateClass => Mode::CreateShape(ShapeKind::Class, None),
            Tool::CreateUseCase => Mode::CreateShape(ShapeKind::UseCase, None),
        }
    }
}

/// Active pointer mode. Carries all in-flight gesture state, so dropping
/// the mode cancels the gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Select(SelectState),
    /// Shape creation; the payload is the pending press point.
    CreateShape(ShapeKind, Option<Point>),
    /// Connection creation; the payload is the in-flight rubber band.
    CreateConnection(LineKind, Option<ConnectionGesture>),
}

impl Mode {
    pub fn is_select(&self) -> bool {
        matches!(self, Mode::Select(_))
    }
}

/// What the select tool is doing between press and release.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectState {
    Idle,
    /// The press landed on an element; dragging moves it if movable.
    Pressed {
        id: u64,
        press: Point,
        last: Point,
    },
    /// The press landed on empty canvas; dragging sweeps a selection box.
    BoxSelect(SelectionBox),
}

/// A rubber-band connection being dragged out from a source port.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionGesture {
    pub start: Endpoint,
    pub press: Point,
    pub current: Point,
}

/// The drag-to-select rectangle, anchored at the press point. The dragged
/// corner is clamped to the canvas so the box never extends past it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionBox {
    anchor: Point,
    corner: Point,
}

impl SelectionBox {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            corner: anchor,
        }
    }

    pub fn drag_to(&mut self, point: Point, canvas: Size) {
        self.corner = Point::new(
            point.x.max(0.0).min(canvas.width),
            point.y.max(0.0).min(canvas.height),
        );
    }

    pub fn rect(&self) -> Rect {
        Rect::from_diagonal(self.anchor, self.corner)
    }
}

//! Scene elements and their shared surface.

pub mod composite;
pub mod line;
pub mod shape;

pub use composite::Composite;
pub use line::{Endpoint, Line, LineGeometry, LineKind};
pub use shape::{PortSide, Shape, ShapeKind};

use crate::geometry::{Point, Rect};

/// Anything that can live in the scene.
#[derive(Clone, Debug)]
pub enum Element {
    Shape(Shape),
    Line(Line),
    Composite(Composite),
}

impl Element {
    pub fn id(&self) -> u64 {
        match self {
            Element::Shape(shape) => shape.id(),
            Element::Line(line) => line.id(),
            Element::Composite(composite) => composite.id(),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Element::Shape(shape) => shape.is_selected(),
            Element::Line(line) => line.is_selected(),
            Element::Composite(composite) => composite.is_selected(),
        }
    }

    /// Sets this element's own selection flag. Cascading into composite
    /// members is the scene's job since it owns the element store.
    pub fn set_selected_flag(&mut self, selected: bool) {
        match self {
            Element::Shape(shape) => shape.set_selected(selected),
            Element::Line(line) => line.set_selected(selected),
            Element::Composite(composite) => composite.set_selected(selected),
        }
    }

    /// Shapes and composites move; lines only follow their endpoints.
    pub fn is_movable(&self) -> bool {
        matches!(self, Element::Shape(_) | Element::Composite(_))
    }

    /// Only bare shapes expose connection ports.
    pub fn is_connectable(&self) -> bool {
        matches!(self, Element::Shape(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Shape(shape) => shape.name(),
            Element::Line(_) => None,
            Element::Composite(composite) => composite.name(),
        }
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Element::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match self {
            Element::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Element::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut Line> {
        match self {
            Element::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Element::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Element::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    /// Hit test against geometry cached by the last draw.
    pub fn is_hit(&self, coordinate: Point) -> bool {
        match self {
            Element::Shape(shape) => shape.is_hit(coordinate),
            Element::Line(line) => line.is_hit(coordinate),
            Element::Composite(composite) => composite.is_hit(coordinate),
        }
    }

    /// Whether the element lies entirely inside a selection box.
    pub fn is_contained_in(&self, selection_box: &Rect) -> bool {
        match self {
            Element::Shape(shape) => shape.is_contained_in(selection_box),
            Element::Line(line) => line.is_contained_in(selection_box),
            Element::Composite(composite) => composite.is_contained_in(selection_box),
        }
    }
}

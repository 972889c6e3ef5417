//! Composite groups: snapshots of grouped elements.

use crate::constants::{
    COMPOSITE_CORNER_RADIUS, COMPOSITE_MARGIN, ELEMENT_STROKE, PORT_SIDE, THIN_STROKE_WIDTH,
};
use crate::geometry::{Point, Rect, point_in_rounded_rect};
use crate::render::{DrawCommand, DrawList};

/// A group of elements that moves and selects as one unit.
///
/// The member list, its shape subset, and its line subset are captured when
/// the group is created and never change afterwards; regrouping always
/// builds a new composite. Bounds are likewise given at creation (the box
/// around the original members) and only ever translated, not recomputed.
///
/// The composite paints its members in captured order and, while selected,
/// a dashed rounded outline around its bounds. The outline region also
/// serves as the hit area, so a group is grabbed anywhere inside it,
/// including the empty space between members.
#[derive(Clone, Debug)]
pub struct Composite {
    id: u64,
    members: Vec<u64>,
    shapes: Vec<u64>,
    lines: Vec<u64>,
    bounds: Rect,
    name: Option<String>,
    selected: bool,
    outline: Option<Rect>,
}

impl Composite {
    pub fn new(id: u64, members: Vec<u64>, shapes: Vec<u64>, lines: Vec<u64>, bounds: Rect) -> Self {
        Self {
            id,
            members,
            shapes,
            lines,
            bounds,
            name: None,
            selected: false,
            outline: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// All members, in their original paint order.
    pub fn members(&self) -> &[u64] {
        &self.members
    }

    /// Removes and returns the member list, dissolving the group.
    pub fn take_members(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.members)
    }

    /// The captured movable members (shapes and nested composites).
    pub fn member_shapes(&self) -> &[u64] {
        &self.shapes
    }

    /// The captured lines, those whose endpoints were both selected when
    /// the group was made.
    pub fn member_lines(&self) -> &[u64] {
        &self.lines
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
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

    pub fn outline(&self) -> Option<Rect> {
        self.outline
    }

    pub fn apply_offset(&mut self, dx: f32, dy: f32) {
        self.bounds.x += dx;
        self.bounds.y += dy;
    }

    /// Emit the group outline if selected. Always refreshes the cached
    /// outline rectangle, which hit testing reads; member painting is driven
    /// by the scene before this is called.
    pub fn draw(&mut self, out: &mut DrawList) {
        let outline = self.bounds.expand(COMPOSITE_MARGIN);
        self.outline = Some(outline);
        if self.selected {
            out.push(DrawCommand::StrokeRoundedRect {
                rect: outline,
                radius: COMPOSITE_CORNER_RADIUS,
                color: ELEMENT_STROKE,
                width: THIN_STROKE_WIDTH,
                dashed: true,
            });
        }
    }

    /// Bounds used for clamping and damage: wide enough to cover the
    /// outline and the port markers of selected member shapes.
    pub fn selected_bounds(&self) -> Rect {
        self.bounds.expand(PORT_SIDE)
    }

    /// A composite is hit anywhere inside its rounded outline. Valid only
    /// after a draw.
    pub fn is_hit(&self, coordinate: Point) -> bool {
        match self.outline {
            Some(outline) => point_in_rounded_rect(coordinate, &outline, COMPOSITE_CORNER_RADIUS),
            None => false,
        }
    }

    pub fn is_contained_in(&self, selection_box: &Rect) -> bool {
        selection_box.contains_rect(&self.bounds)
    }
}

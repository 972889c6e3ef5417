//! Display-list rendering.
//!
//! Drawing produces a flat list of resolution-independent commands rather
//! than touching a framebuffer. A host embedding the editor replays the list
//! with whatever graphics stack it has; tests inspect it directly. Colors
//! are `#rrggbb` or `#rrggbbaa` hex strings.

use crate::constants::{
    GUIDE_STROKE, SELECTION_BOX_FILL, SELECTION_BOX_STROKE, THIN_STROKE_WIDTH,
};
use crate::geometry::{Point, Rect};

// ============================================================================
// Draw commands
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: &'static str,
    },
    StrokeRect {
        rect: Rect,
        color: &'static str,
        width: f32,
    },
    FillEllipse {
        frame: Rect,
        color: &'static str,
    },
    StrokeEllipse {
        frame: Rect,
        color: &'static str,
        width: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: &'static str,
        width: f32,
    },
    FillPolygon {
        points: Vec<Point>,
        color: &'static str,
    },
    StrokePolyline {
        points: Vec<Point>,
        color: &'static str,
        width: f32,
        closed: bool,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: f32,
        color: &'static str,
        width: f32,
        dashed: bool,
    },
    Text {
        position: Point,
        max_width: f32,
        content: String,
        color: &'static str,
    },
}

/// Commands accumulated by one render pass, in paint order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ============================================================================
// Interaction overlays
// ============================================================================

/// The translucent drag-to-select rectangle.
pub fn push_selection_box(out: &mut DrawList, selection_box: Rect) {
    out.push(DrawCommand::FillRect {
        rect: selection_box,
        color: SELECTION_BOX_FILL,
    });
    out.push(DrawCommand::StrokeRect {
        rect: selection_box,
        color: SELECTION_BOX_STROKE,
        width: THIN_STROKE_WIDTH,
    });
}

/// The rubber-band guide shown while dragging out a new connection.
pub fn push_guide_line(out: &mut DrawList, from: Point, to: Point) {
    out.push(DrawCommand::Line {
        from,
        to,
        color: GUIDE_STROKE,
        width: THIN_STROKE_WIDTH,
    });
}

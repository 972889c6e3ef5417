//! Application-wide constants.
//!
//! Centralizes magic numbers for element geometry, hit testing, and repaint
//! margins to keep the codebase self-documenting.

// ============================================================================
// Element Geometry
// ============================================================================

/// Side length of a connection port square
pub const PORT_SIDE: f32 = 12.0;

/// Half a port side; the margin between a shape's unselected and selected bounds
pub const PORT_HALF: f32 = PORT_SIDE / 2.0;

/// Unselected width of a class shape
pub const CLASS_WIDTH: f32 = 100.0;

/// Unselected height of a class shape
pub const CLASS_HEIGHT: f32 = 120.0;

/// Unselected width of a use-case shape
pub const USE_CASE_WIDTH: f32 = 120.0;

/// Unselected height of a use-case shape
pub const USE_CASE_HEIGHT: f32 = 80.0;

/// Margin between a composite's unselected bounds and its dashed outline
pub const COMPOSITE_MARGIN: f32 = 6.0;

/// Corner radius of a composite's dashed selection outline
pub const COMPOSITE_CORNER_RADIUS: f32 = 10.0;

// ============================================================================
// Line Geometry
// ============================================================================

/// Default stroke width for shapes and lines
pub const STROKE_WIDTH: f32 = 2.0;

/// Stroke width for the rubber-band guide line and the selection box border
pub const THIN_STROKE_WIDTH: f32 = 1.5;

/// Distance from the line tip to the back of the arrowhead.
/// Equals 8 * sqrt(3): the head forms a 30-degree angle with the shaft.
pub const ARROW_DEPTH: f32 = 13.856407;

/// Half the width of the arrowhead at its back edge
pub const ARROW_HALF_WIDTH: f32 = 8.0;

/// Distance from the line tip to the back of the composition diamond
pub const DIAMOND_DEPTH: f32 = 16.0;

/// Half the width of the composition diamond at its midpoint
pub const DIAMOND_HALF_WIDTH: f32 = 5.0;

// ============================================================================
// Hit Testing
// ============================================================================

/// Side of the hit rectangle used when hit-testing lines.
/// Larger than the point tolerance so thin strokes stay clickable.
pub const LINE_HIT_TOLERANCE: f32 = 10.0;

/// Side of the hit rectangle used when hit-testing shapes
pub const POINT_HIT_TOLERANCE: f32 = 1.0;

/// Inflation applied to a line's endpoint bounding box when indexing it
/// spatially; covers the arrowhead extent plus the hit tolerance.
pub const LINE_ENVELOPE_MARGIN: f32 = 14.0;

// ============================================================================
// Repaint Margins
// ============================================================================

/// Margin added around a damage rectangle for plain geometry
pub const REPAINT_MARGIN: f32 = 4.0;

/// Margin added around a damage rectangle for operations touching stroked or
/// arrowed lines; covers stroke width and arrowhead extent.
pub const LINE_REPAINT_MARGIN: f32 = 20.0;

// ============================================================================
// Colors (hex values, "#rrggbb" or "#rrggbbaa")
// ============================================================================

/// Translucent fill for class shapes
pub const CLASS_FILL: &str = "#7cdcb180";

/// Translucent fill for use-case shapes
pub const USE_CASE_FILL: &str = "#ffadb080";

/// Stroke color for element outlines and unselected lines
pub const ELEMENT_STROKE: &str = "#000000";

/// Stroke color for selected lines
pub const SELECTED_LINE_STROKE: &str = "#ffa500";

/// Fill color for connection port squares
pub const PORT_FILL: &str = "#404040";

/// Name text color
pub const NAME_COLOR: &str = "#000000";

/// Translucent fill of the box-selection rectangle
pub const SELECTION_BOX_FILL: &str = "#0066cc80";

/// Border color of the box-selection rectangle
pub const SELECTION_BOX_STROKE: &str = "#0078d7";

/// Color of the in-progress connection guide line
pub const GUIDE_STROKE: &str = "#000000";

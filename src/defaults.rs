//! Default sizes, tolerances and settings (drawing-space values are pixels)

/// Pixels per math unit for a Cartesian frame
pub const SCALE: f64 = 40.0;
/// Margin around a frame's drawable area
pub const PADDING: f64 = 20.0;
/// Default axis window is `[-RANGE_EXTENT, RANGE_EXTENT]`
pub const RANGE_EXTENT: f64 = 5.0;
/// Distance between consecutive grid lines and ticks, in math units
pub const GRID_STEP: f64 = 1.0;
/// Upper bound on the ticks generated for one axis
pub const MAX_TICKS: usize = 10_000;

/// Length of the side between vertex 0 and vertex 1 in constructed triangles
pub const TRIANGLE_SIZE: f64 = 200.0;
/// Anchor for vertex 0 of constructed triangles
pub const ANCHOR_X: f64 = 50.0;
pub const ANCHOR_Y: f64 = 250.0;
/// Canvas margin around a standalone triangle
pub const VIEW_PADDING: f64 = 40.0;

/// Radius of angle arcs
pub const ARC_RADIUS: f64 = 20.0;
/// Side of the right-angle square glyph
pub const RIGHT_ANGLE_SIZE: f64 = 12.0;
/// Distance from a vertex or side to its label anchor
pub const LABEL_OFFSET: f64 = 15.0;
/// Radius of point markers (vertices, notable points)
pub const DOT_RADIUS: f64 = 3.0;
/// Arrowhead length on axes
pub const ARROW_SIZE: f64 = 8.0;
/// Half length of a tick mark across its axis
pub const TICK_HALF: f64 = 4.0;

pub const STROKE: &str = "#1f2937";
pub const FILL: &str = "none";
pub const TRIANGLE_FILL: &str = "#dbeafe";
pub const AUX_STROKE: &str = "#6b7280";
pub const NOTABLE_STROKE: &str = "#dc2626";
pub const STROKE_WIDTH: f64 = 2.0;
pub const GRID_STROKE: &str = "#e5e7eb";
pub const AXIS_STROKE: &str = "#374151";
pub const FONT_SIZE: f64 = 14.0;

/// Tolerance when checking that construction angles sum to 180°
pub const ANGLE_SUM_TOLERANCE: f64 = 1e-6;
/// Tolerance when detecting a right angle
pub const RIGHT_ANGLE_TOLERANCE: f64 = 0.5;
/// Relative area threshold under which a triangle counts as degenerate
pub const DEGENERATE_EPSILON: f64 = 1e-9;
/// Relative slack allowed in the triangle inequality
pub const SIDE_TOLERANCE: f64 = 1e-12;

//! Error types with diagnostic codes using miette
//!
//! Geometry utilities are total wherever the math allows; these errors are
//! reserved for construction input that cannot describe a triangle and for
//! genuinely undefined results (zero-area denominators).

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Which axis of a coordinate frame an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised by the coordinate transform and the triangle kernel
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate triangle (area {area})")]
    #[diagnostic(
        code(figura::geometry::degenerate),
        help("the three vertices are collinear or coincide")
    )]
    DegenerateTriangle { area: f64 },

    #[error("angles sum to {sum}°, expected 180°")]
    #[diagnostic(code(figura::construct::angle_sum))]
    InvalidAngleSum { sum: f64 },

    #[error("angle {index} is {value}°, every angle must be positive")]
    #[diagnostic(code(figura::construct::non_positive_angle))]
    NonPositiveAngle { index: usize, value: f64 },

    #[error("sides {a}, {b}, {c} violate the triangle inequality")]
    #[diagnostic(
        code(figura::construct::triangle_inequality),
        help("each side must be shorter than the sum of the other two")
    )]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("side {index} has length {value}, every side must be positive")]
    #[diagnostic(code(figura::construct::non_positive_side))]
    NonPositiveSide { index: usize, value: f64 },

    #[error("invalid {axis} range [{min}, {max}]")]
    #[diagnostic(
        code(figura::transform::invalid_range),
        help("a range needs finite bounds with min < max")
    )]
    InvalidRange { axis: Axis, min: f64, max: f64 },

    #[error("invalid scale: {value}")]
    #[diagnostic(
        code(figura::transform::invalid_scale),
        help("scale is pixels per unit and must be positive")
    )]
    InvalidScale { value: f64 },

    #[error("invalid padding: {value}")]
    #[diagnostic(code(figura::transform::invalid_padding))]
    InvalidPadding { value: f64 },

    #[error("invalid tick step: {value}")]
    #[diagnostic(code(figura::transform::invalid_step))]
    InvalidStep { value: f64 },

    #[error("{count} ticks requested, at most {max} are generated")]
    #[diagnostic(
        code(figura::transform::too_many_ticks),
        help("use a larger step or a narrower range")
    )]
    TooManyTicks { count: f64, max: usize },

    #[error("invalid size: {value}")]
    #[diagnostic(code(figura::construct::invalid_size))]
    InvalidSize { value: f64 },

    #[error("{what} is not a finite number")]
    #[diagnostic(code(figura::numeric::non_finite))]
    NonFinite { what: &'static str },

    #[error("vertex index {index} out of range")]
    #[diagnostic(code(figura::geometry::vertex_index), help("valid indices are 0, 1 and 2"))]
    VertexIndex { index: usize },

    #[error("side index {index} out of range")]
    #[diagnostic(code(figura::geometry::side_index), help("valid indices are 0, 1 and 2"))]
    SideIndex { index: usize },

    #[error("unknown {kind} name: {name}")]
    #[diagnostic(code(figura::parse::unknown_name))]
    UnknownName { kind: &'static str, name: String },
}

impl GeometryError {
    /// Attach a field name to a failed numeric check
    pub(crate) fn numeric(what: &'static str, err: NumericError) -> Self {
        crate::log::debug!(what, %err, "numeric check failed");
        GeometryError::NonFinite { what }
    }
}

// ============================================================================
// Figure Errors
// ============================================================================

/// Errors raised while composing figures into a frame
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error("frame has nothing to draw")]
    #[diagnostic(
        code(figura::figure::empty_frame),
        help("enable the grid or axes, or add at least one child figure")
    )]
    EmptyFrame,
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

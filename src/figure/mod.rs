//! Figure composition.
//!
//! A [`Figure`] turns geometry into SVG [`Element`]s. Figures either draw
//! their coordinates as-is (standalone, drawing space) or get placed inside a
//! [`CartesianPlane`], which hands each child a read-only [`FrameContext`].
//! [`Figure::embed`] rewrites a child's math-space coordinates into the
//! frame's drawing space exactly once: the result is flagged as embedded and
//! embedding it again is a no-op.

mod marks;
mod plane;
mod triangle_figure;

use enum_dispatch::enum_dispatch;

pub use marks::{PointMarker, Segment};
pub use plane::{CartesianPlane, FrameConfig, PlaneOptions};
pub use triangle_figure::{TriangleFigure, TriangleOptions};

use crate::errors::FigureError;
use crate::svg::Element;
use crate::transform::{AxisRange, CoordinateTransform, Dimensions};
use crate::types::{BBox, Point};

/// Common behavior for everything that can be drawn
#[enum_dispatch]
pub trait Figure {
    /// Copy of this figure with coordinates mapped into `frame`'s drawing space.
    /// A figure that is already embedded comes back unchanged.
    fn embed(&self, frame: &FrameContext) -> FigureKind;

    fn is_embedded(&self) -> bool;

    /// Drawing primitives, in drawing-space coordinates
    fn elements(&self) -> Result<Vec<Element>, FigureError>;

    /// Bounding box of the figure's geometry in its current coordinates
    fn bounds(&self) -> BBox;
}

/// Every figure kind a frame accepts as a child
#[enum_dispatch(Figure)]
#[derive(Clone, Debug, PartialEq)]
pub enum FigureKind {
    TriangleFigure,
    PointMarker,
    Segment,
}

/// Coordinate frame shared with the children of a [`CartesianPlane`].
///
/// Only exposes lookups; children cannot alter the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    transform: CoordinateTransform,
}

impl FrameContext {
    pub fn new(transform: CoordinateTransform) -> Self {
        FrameContext { transform }
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    pub fn to_svg(&self, p: Point) -> Point {
        self.transform.point_to_svg(p)
    }

    pub fn to_math(&self, p: Point) -> Point {
        self.transform.point_to_math(p)
    }

    /// Pixels per math unit
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.transform.dimensions()
    }

    pub fn x_range(&self) -> AxisRange {
        self.transform.x_range()
    }

    pub fn y_range(&self) -> AxisRange {
        self.transform.y_range()
    }

    /// Whether a math-space point is inside the visible window
    pub fn contains_math(&self, p: Point) -> bool {
        self.transform.contains_math(p)
    }
}

/// One decimal place, dropped when it is zero: `90`, `36.9`
pub(crate) fn format_measure(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

//! Declarative 2D geometric figures rendered to SVG.
//!
//! Three layers, bottom to top:
//!
//! - [`transform`]: the affine map between a Y-up math window and a Y-down
//!   pixel canvas, plus tick generation.
//! - [`triangle`]: a pure geometry kernel. Construction from angles or side
//!   lengths, notable points, radii, special lines and label anchors.
//! - [`figure`]: figures that emit SVG elements, and a [`CartesianPlane`]
//!   that embeds math-space children into its drawing space.
//!
//! ```
//! use figura::{Placement, TriangleFigure, build_triangle_from_sides};
//!
//! let triangle = build_triangle_from_sides([3.0, 4.0, 5.0], &Placement::new(40.0))?;
//! let svg = TriangleFigure::new(triangle).to_svg()?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), figura::FigureError>(())
//! ```

pub mod defaults;
pub mod errors;
pub mod figure;
pub mod log;
pub mod path;
pub mod svg;
pub mod transform;
pub mod triangle;
pub mod types;

pub use crate::svg::{Document, Element, Style};
pub use errors::{Axis, FigureError, GeometryError, Result};
pub use figure::{
    CartesianPlane, Figure, FigureKind, FrameConfig, FrameContext, PlaneOptions, PointMarker,
    Segment, TriangleFigure, TriangleOptions,
};
pub use path::{PathData, describe_angle_arc, describe_right_angle_marker};
pub use transform::{
    AxisRange, CoordinateTransform, Dimensions, Tick, Ticks, calculate_dimensions,
    create_math_to_svg_transform, create_svg_to_math_transform, generate_ticks,
    generate_ticks_with_step,
};
pub use triangle::{
    LineEndpoints, NotablePoint, Placement, SpecialLineConfig, SpecialLineKind, Triangle, ViewBox,
    angle_at_vertex, build_triangle_from_angles, build_triangle_from_sides,
    calculate_angle_label_position, calculate_side_label_position, calculate_special_line_endpoints,
    calculate_vertex_label_position, calculate_view_box, centroid, circumcenter, circumradius,
    find_right_angle_vertex, incenter, inradius, orthocenter,
};
pub use types::{BBox, Degrees, LabeledPoint, Point, UnitVec};

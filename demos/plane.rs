//! Render a Cartesian plane with a few children to stdout as SVG.
//!
//! ```text
//! RUST_LOG=figura=debug cargo run --example plane --features tracing
//! ```

use figura::{
    Axis, AxisRange, CartesianPlane, FigureKind, FrameConfig, NotablePoint, PlaneOptions, Point,
    PointMarker, Segment, Triangle, TriangleFigure, TriangleOptions,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = FrameConfig::new(
        AxisRange::try_new(Axis::X, -2.0, 7.0)?,
        AxisRange::try_new(Axis::Y, -2.0, 6.0)?,
    )
    .with_scale(50.0);
    let plane = CartesianPlane::new(config).with_options(PlaneOptions::default());

    let triangle =
        Triangle::from_points([Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(2.0, 4.0)]);
    let options = TriangleOptions::default()
        .with_side_labels(true)
        .with_circumcircle(true)
        .with_notable_point(NotablePoint::Orthocenter)
        .with_notable_point(NotablePoint::Circumcenter);

    let children: Vec<FigureKind> = vec![
        TriangleFigure::new(triangle).with_options(options).into(),
        Segment::new((-1.0, 5.0), (1.0, 5.0)).with_label("2").into(),
        PointMarker::labeled(5.0, 4.0, "P").into(),
    ];

    println!("{}", plane.to_svg(&children)?);
    Ok(())
}

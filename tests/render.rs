//! Whole SVG documents from figures and planes.

use figura::{
    Axis, AxisRange, CartesianPlane, FigureKind, FrameConfig, Placement, PlaneOptions, Point,
    Segment, SpecialLineConfig, Triangle, TriangleFigure, TriangleOptions,
    build_triangle_from_sides, circumradius,
};

fn small_plane() -> CartesianPlane {
    let config = FrameConfig::new(
        AxisRange::try_new(Axis::X, 0.0, 2.0).unwrap(),
        AxisRange::try_new(Axis::Y, 0.0, 1.0).unwrap(),
    )
    .with_scale(10.0)
    .with_padding(5.0);
    CartesianPlane::new(config).with_options(PlaneOptions::empty().with_grid(true))
}

#[test]
fn grid_only_plane() {
    insta::assert_snapshot!(small_plane().to_svg(&[]).unwrap(), @r##"
    <svg height="20" viewBox="0 0 30 20" width="30" xmlns="http://www.w3.org/2000/svg">
    <g class="grid">
    <line fill="none" stroke="#e5e7eb" stroke-width="1" x1="5" x2="5" y1="5" y2="15"/>
    <line fill="none" stroke="#e5e7eb" stroke-width="1" x1="15" x2="15" y1="5" y2="15"/>
    <line fill="none" stroke="#e5e7eb" stroke-width="1" x1="25" x2="25" y1="5" y2="15"/>
    <line fill="none" stroke="#e5e7eb" stroke-width="1" x1="5" x2="25" y1="15" y2="15"/>
    <line fill="none" stroke="#e5e7eb" stroke-width="1" x1="5" x2="25" y1="5" y2="5"/>
    </g>
    </svg>
    "##);
}

#[test]
fn segment_child_is_mapped_into_the_frame() {
    let children: Vec<FigureKind> = vec![Segment::new((0.0, 0.0), (2.0, 1.0)).into()];
    let svg = small_plane().with_options(PlaneOptions::empty()).to_svg(&children).unwrap();
    insta::assert_snapshot!(svg, @r##"
    <svg height="20" viewBox="0 0 30 20" width="30" xmlns="http://www.w3.org/2000/svg">
    <g class="segment">
    <line fill="none" stroke="#1f2937" stroke-width="2" x1="5" x2="25" y1="15" y2="5"/>
    </g>
    </svg>
    "##);
}

#[test]
fn standalone_right_triangle() {
    let triangle =
        Triangle::from_points([Point::new(0.0, 0.0), Point::new(40.0, 0.0), Point::new(0.0, 30.0)]);
    let options = TriangleOptions::bare().with_right_angle_mark(true).with_padding(10.0);
    let svg = TriangleFigure::new(triangle).with_options(options).to_svg().unwrap();
    insta::assert_snapshot!(svg, @r##"
    <svg height="50" viewBox="-10 -10 60 50" width="60" xmlns="http://www.w3.org/2000/svg">
    <g class="triangle">
    <polygon fill="#dbeafe" points="0,0 40,0 0,30" stroke="#1f2937" stroke-width="2"/>
    <path d="M 12,0 L 12,12 L 0,12" fill="none" stroke="#1f2937" stroke-width="1"/>
    </g>
    </svg>
    "##);
}

#[test]
fn embedded_triangle_keeps_labels_and_prints_math_lengths() {
    let config = FrameConfig::new(
        AxisRange::try_new(Axis::X, -1.0, 5.0).unwrap(),
        AxisRange::try_new(Axis::Y, -1.0, 4.0).unwrap(),
    );
    let plane =
        CartesianPlane::new(config).with_options(PlaneOptions::default().with_tick_labels(false));
    let triangle =
        Triangle::from_points([Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)]);
    let options = TriangleOptions::default().with_side_labels(true);
    let figure = TriangleFigure::new(triangle).with_options(options);
    let svg = plane.to_svg(&[figure.into()]).unwrap();

    // Vertex A at math (0,0) lands on the axes' crossing
    let frame = plane.frame().unwrap();
    let a = frame.to_svg(Point::ORIGIN);
    assert!(svg.contains(&format!(r#"points="{},{} "#, a.x, a.y)));
    for label in [">5<", ">4<", ">3<", ">A<", ">B<", ">C<"] {
        assert!(svg.contains(label), "missing {label}");
    }
}

#[test]
fn constructed_triangle_renders_every_decoration() {
    let triangle = build_triangle_from_sides([5.0, 6.0, 7.0], &Placement::new(30.0)).unwrap();
    let options = TriangleOptions::default()
        .with_angle_values(true)
        .with_incircle(true)
        .with_circumcircle(true)
        .with_notable_point("ortocentro".parse().unwrap())
        .with_special_line(SpecialLineConfig::new("mediatriz".parse().unwrap(), 0));
    let doc = TriangleFigure::new(triangle.clone()).with_options(options).document().unwrap();
    let svg = doc.to_string();
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("stroke-dasharray").count(), 3);
    assert!(svg.contains(">H<"));
    assert!(svg.contains("°<"));
    // Circumcircle fits inside the fitted view box
    let r = circumradius(&triangle).unwrap();
    assert!(doc.view_box.width >= 2.0 * r && doc.view_box.height >= 2.0 * r);
}

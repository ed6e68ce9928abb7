//! Building triangles from angle or side-length triples.
//!
//! Both constructions place vertex 0 at the anchor and vertex 1 along the
//! rotation direction; vertex 2 ends up above that base on screen (drawing
//! space is Y-down, so "above" means smaller `y`). Rotation is
//! counter-clockwise as seen on screen.
//!
//! Invalid triples are rejected rather than normalized: a triple whose
//! angles miss 180° or whose sides break the triangle inequality produces a
//! typed error.

use glam::dvec2;

use super::{DEFAULT_LABELS, Triangle};
use crate::defaults;
use crate::errors::{GeometryError, Result};
use crate::types::{Degrees, LabeledPoint, Point, check_finite, check_positive};

/// Where and how large to build a triangle
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// For angle construction: length of side v0–v1.
    /// For side construction: multiplier applied to every side.
    pub size: f64,
    /// Position of vertex 0
    pub anchor: Point,
    /// Direction of side v0–v1, counter-clockwise on screen
    pub rotation: Degrees,
    pub labels: [String; 3],
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            size: defaults::TRIANGLE_SIZE,
            anchor: Point::new(defaults::ANCHOR_X, defaults::ANCHOR_Y),
            rotation: Degrees(0.0),
            labels: DEFAULT_LABELS.map(String::from),
        }
    }
}

impl Placement {
    pub fn new(size: f64) -> Self {
        Placement {
            size,
            ..Default::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.anchor = Point::new(x, y);
        self
    }

    pub fn rotated(mut self, rotation: Degrees) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_labels(mut self, labels: [&str; 3]) -> Self {
        self.labels = labels.map(String::from);
        self
    }

    fn validate(&self) -> Result<()> {
        check_positive(self.size).map_err(|_| GeometryError::InvalidSize { value: self.size })?;
        check_finite(self.anchor.x).map_err(|e| GeometryError::numeric("anchor x", e))?;
        check_finite(self.anchor.y).map_err(|e| GeometryError::numeric("anchor y", e))?;
        check_finite(self.rotation.0).map_err(|e| GeometryError::numeric("rotation", e))?;
        Ok(())
    }

    /// Point at `distance` from the anchor, `angle` counter-clockwise from the base direction
    fn polar(&self, distance: f64, angle: Degrees) -> Point {
        let theta = (self.rotation + angle).to_radians();
        // Screen Y points down; negate so positive angles turn counter-clockwise
        self.anchor + dvec2(theta.cos(), -theta.sin()) * distance
    }

    fn assemble(&self, points: [Point; 3]) -> Triangle {
        let [p0, p1, p2] = points;
        let [l0, l1, l2] = &self.labels;
        Triangle::new(
            LabeledPoint::labeled(p0.x, p0.y, l0.as_str()),
            LabeledPoint::labeled(p1.x, p1.y, l1.as_str()),
            LabeledPoint::labeled(p2.x, p2.y, l2.as_str()),
        )
    }
}

/// Triangle with interior angles `angles` (degrees, at vertices 0, 1, 2).
///
/// Vertex 2 is where the ray from vertex 0 at angle `a` meets the ray from
/// vertex 1 at angle `180 - b`. The distance along the first ray follows
/// from the law of sines: `|v0 v2| = size · sin(b) / sin(c)`.
pub fn build_triangle_from_angles(angles: [f64; 3], placement: &Placement) -> Result<Triangle> {
    placement.validate()?;
    for (index, &value) in angles.iter().enumerate() {
        check_finite(value).map_err(|e| GeometryError::numeric("angle", e))?;
        if value <= 0.0 {
            return Err(GeometryError::NonPositiveAngle { index, value });
        }
    }
    let sum: f64 = angles.iter().sum();
    if (sum - 180.0).abs() > defaults::ANGLE_SUM_TOLERANCE {
        return Err(GeometryError::InvalidAngleSum { sum });
    }

    let [a, b, c] = angles.map(|deg| Degrees(deg).to_radians());
    let base = placement.size;
    let reach = base * b.sin() / c.sin();

    let p0 = placement.anchor;
    let p1 = placement.polar(base, Degrees(0.0));
    let p2 = placement.polar(reach, Degrees::from_radians(a));

    crate::log::debug!(?angles, ?p0, ?p1, ?p2, "triangle from angles");
    Ok(placement.assemble([p0, p1, p2]))
}

/// Triangle with side lengths `sides` (`a` opposite vertex 0, ...), each
/// scaled by `placement.size`.
///
/// Vertices 0 and 1 are `c` apart; vertex 2 sits at distance `b` from vertex
/// 0 at the angle given by the law of cosines.
pub fn build_triangle_from_sides(sides: [f64; 3], placement: &Placement) -> Result<Triangle> {
    placement.validate()?;
    for (index, &value) in sides.iter().enumerate() {
        check_finite(value).map_err(|e| GeometryError::numeric("side", e))?;
        if value <= 0.0 {
            return Err(GeometryError::NonPositiveSide { index, value });
        }
    }
    let [a, b, c] = sides;
    let slack = defaults::SIDE_TOLERANCE * (a + b + c);
    if a + b - c <= slack || b + c - a <= slack || a + c - b <= slack {
        return Err(GeometryError::TriangleInequality { a, b, c });
    }

    let cos_a = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
    let angle_a = Degrees::from_radians(cos_a.acos());

    let p0 = placement.anchor;
    let p1 = placement.polar(c * placement.size, Degrees(0.0));
    let p2 = placement.polar(b * placement.size, angle_a);

    crate::log::debug!(?sides, ?p0, ?p1, ?p2, "triangle from sides");
    Ok(placement.assemble([p0, p1, p2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::{angle_at_vertex, find_right_angle_vertex};

    fn origin_placement(size: f64) -> Placement {
        Placement::new(size).at(0.0, 0.0)
    }

    #[test]
    fn sides_3_4_5_is_right_triangle() {
        let t = build_triangle_from_sides([3.0, 4.0, 5.0], &origin_placement(1.0)).unwrap();
        let [a, b, c] = t.side_lengths();
        assert!((a - 3.0).abs() < 1e-9);
        assert!((b - 4.0).abs() < 1e-9);
        assert!((c - 5.0).abs() < 1e-9);
        // side c (length 5) is opposite vertex 2
        let angle = angle_at_vertex(&t, 2).unwrap();
        assert!(angle.approx_eq(Degrees(90.0), 1e-6));
        assert_eq!(find_right_angle_vertex(&t), Some(2));
    }

    #[test]
    fn sides_are_scaled_by_size() {
        let t = build_triangle_from_sides([3.0, 4.0, 5.0], &origin_placement(10.0)).unwrap();
        let [a, b, c] = t.side_lengths();
        assert!((a - 30.0).abs() < 1e-9);
        assert!((b - 40.0).abs() < 1e-9);
        assert!((c - 50.0).abs() < 1e-9);
    }

    #[test]
    fn apex_is_above_base_on_screen() {
        let t = build_triangle_from_sides([3.0, 4.0, 5.0], &origin_placement(1.0)).unwrap();
        let [p0, p1, p2] = t.points();
        assert_eq!(p0, Point::ORIGIN);
        assert!((p1.x - 5.0).abs() < 1e-12 && p1.y.abs() < 1e-12);
        assert!((p2.x - 3.2).abs() < 1e-9);
        assert!((p2.y + 2.4).abs() < 1e-9);
    }

    #[test]
    fn triangle_inequality_violations_rejected() {
        assert_eq!(
            build_triangle_from_sides([1.0, 2.0, 5.0], &Placement::default()),
            Err(GeometryError::TriangleInequality { a: 1.0, b: 2.0, c: 5.0 })
        );
        // flat: 1 + 1 == 2
        assert!(matches!(
            build_triangle_from_sides([1.0, 1.0, 2.0], &Placement::default()),
            Err(GeometryError::TriangleInequality { .. })
        ));
        assert_eq!(
            build_triangle_from_sides([3.0, 0.0, 5.0], &Placement::default()),
            Err(GeometryError::NonPositiveSide { index: 1, value: 0.0 })
        );
    }

    #[test]
    fn angles_are_reproduced() {
        let t = build_triangle_from_angles([50.0, 60.0, 70.0], &Placement::default()).unwrap();
        let angles = t.angles();
        assert!(angles[0].approx_eq(Degrees(50.0), 1e-9));
        assert!(angles[1].approx_eq(Degrees(60.0), 1e-9));
        assert!(angles[2].approx_eq(Degrees(70.0), 1e-9));
        let base = t.side_lengths()[2];
        assert!((base - defaults::TRIANGLE_SIZE).abs() < 1e-9);
    }

    #[test]
    fn rotation_turns_base() {
        let placement = origin_placement(10.0).rotated(Degrees(90.0));
        let t = build_triangle_from_angles([60.0, 60.0, 60.0], &placement).unwrap();
        let p1 = t.points()[1];
        // Counter-clockwise on screen: the base now points up (negative y)
        assert!(p1.x.abs() < 1e-9);
        assert!((p1.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn custom_labels_applied() {
        let placement = Placement::default().with_labels(["P", "Q", "R"]);
        let t = build_triangle_from_angles([90.0, 45.0, 45.0], &placement).unwrap();
        let labels: Vec<_> = t.vertices().iter().filter_map(|v| v.label.clone()).collect();
        assert_eq!(labels, vec!["P", "Q", "R"]);
    }

    #[test]
    fn bad_angle_sum_rejected() {
        assert_eq!(
            build_triangle_from_angles([60.0, 60.0, 70.0], &Placement::default()),
            Err(GeometryError::InvalidAngleSum { sum: 190.0 })
        );
    }

    #[test]
    fn non_positive_angle_rejected() {
        assert_eq!(
            build_triangle_from_angles([0.0, 90.0, 90.0], &Placement::default()),
            Err(GeometryError::NonPositiveAngle { index: 0, value: 0.0 })
        );
        assert!(matches!(
            build_triangle_from_angles([200.0, -10.0, -10.0], &Placement::default()),
            Err(GeometryError::NonPositiveAngle { index: 1, .. })
        ));
    }

    #[test]
    fn invalid_size_rejected() {
        assert_eq!(
            build_triangle_from_angles([60.0, 60.0, 60.0], &Placement::new(-1.0)),
            Err(GeometryError::InvalidSize { value: -1.0 })
        );
        assert!(matches!(
            build_triangle_from_sides([3.0, 4.0, 5.0], &Placement::new(1.0).at(f64::NAN, 0.0)),
            Err(GeometryError::NonFinite { what: "anchor x" })
        ));
    }
}

//! Triangle geometry kernel.
//!
//! A [`Triangle`] is three labeled vertices. Side `i` joins vertices
//! `(i+1)%3` and `(i+2)%3`, so it is the side opposite vertex `i`.
//! Everything else (angles, notable points, radii, label anchors) is derived
//! on demand by pure functions; nothing is cached or mutated in place.
//!
//! Submodules:
//! - `construct`: building triangles from angles or side lengths
//! - `notable`: centroid, incenter, circumcenter, orthocenter and radii
//! - `special_lines`: altitude / median / bisector / perpendicular bisector
//! - `labels`: label anchors and view box fitting

pub mod construct;
pub mod labels;
pub mod notable;
pub mod special_lines;

pub use construct::{Placement, build_triangle_from_angles, build_triangle_from_sides};
pub use labels::{
    ViewBox, calculate_angle_label_position, calculate_side_label_position,
    calculate_vertex_label_position, calculate_view_box,
};
pub use notable::{
    NotablePoint, centroid, circumcenter, circumradius, incenter, inradius, orthocenter,
};
pub use special_lines::{
    LineEndpoints, SpecialLineConfig, SpecialLineKind, calculate_special_line_endpoints,
};

use crate::defaults;
use crate::errors::{GeometryError, Result};
use crate::types::{Degrees, LabeledPoint, Point};

/// Default vertex names
pub const DEFAULT_LABELS: [&str; 3] = ["A", "B", "C"];

/// Three vertices, in order
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [LabeledPoint; 3],
}

impl Triangle {
    pub fn new(v0: LabeledPoint, v1: LabeledPoint, v2: LabeledPoint) -> Self {
        Triangle {
            vertices: [v0, v1, v2],
        }
    }

    /// Build from bare points, naming them "A", "B", "C"
    pub fn from_points(points: [Point; 3]) -> Self {
        let [a, b, c] = points;
        Triangle::new(
            LabeledPoint::labeled(a.x, a.y, DEFAULT_LABELS[0]),
            LabeledPoint::labeled(b.x, b.y, DEFAULT_LABELS[1]),
            LabeledPoint::labeled(c.x, c.y, DEFAULT_LABELS[2]),
        )
    }

    /// Like [`Triangle::from_points`] but rejects NaN and infinite coordinates
    pub fn try_from_points(points: [Point; 3]) -> Result<Self> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite { what: "vertex" });
        }
        Ok(Self::from_points(points))
    }

    /// Replace the vertex labels
    pub fn with_labels(mut self, labels: [&str; 3]) -> Self {
        for (v, label) in self.vertices.iter_mut().zip(labels) {
            v.label = Some(label.to_string());
        }
        self
    }

    pub fn vertices(&self) -> &[LabeledPoint; 3] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<&LabeledPoint> {
        self.vertices
            .get(index)
            .ok_or(GeometryError::VertexIndex { index })
    }

    pub fn points(&self) -> [Point; 3] {
        [
            self.vertices[0].point(),
            self.vertices[1].point(),
            self.vertices[2].point(),
        ]
    }

    /// Vertex position; callers guarantee `index < 3`
    #[inline]
    pub(crate) fn p(&self, index: usize) -> Point {
        self.vertices[index % 3].point()
    }

    /// Apply `f` to every vertex position, keeping labels
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Triangle {
        Triangle {
            vertices: [
                self.vertices[0].moved_to(f(self.vertices[0].point())),
                self.vertices[1].moved_to(f(self.vertices[1].point())),
                self.vertices[2].moved_to(f(self.vertices[2].point())),
            ],
        }
    }

    /// Endpoints of the side opposite vertex `index`
    pub fn side_endpoints(&self, index: usize) -> Result<(Point, Point)> {
        if index > 2 {
            return Err(GeometryError::SideIndex { index });
        }
        Ok((self.p(index + 1), self.p(index + 2)))
    }

    /// Side lengths `[a, b, c]`, `a` opposite vertex 0 and so on
    pub fn side_lengths(&self) -> [f64; 3] {
        let [p0, p1, p2] = self.points();
        [p1.distance(p2), p2.distance(p0), p0.distance(p1)]
    }

    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    pub fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Shoelace area; positive when the vertices wind counter-clockwise in a Y-up frame
    pub fn signed_area(&self) -> f64 {
        let [p0, p1, p2] = self.points();
        ((p1 - p0).perp_dot(p2 - p0)) / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area at or below the degeneracy threshold (collinear or coincident vertices).
    ///
    /// The threshold is relative to the square of the longest side, so
    /// scaling a triangle never changes the answer.
    pub fn is_degenerate(&self) -> bool {
        let longest = self.side_lengths().into_iter().fold(0.0_f64, f64::max);
        longest == 0.0 || self.area() <= defaults::DEGENERATE_EPSILON * longest.powi(2)
    }

    /// Area, or the degenerate-geometry error
    pub(crate) fn non_degenerate_area(&self) -> Result<f64> {
        let area = self.area();
        if self.is_degenerate() {
            crate::log::warn!(area, "degenerate triangle");
            return Err(GeometryError::DegenerateTriangle { area });
        }
        Ok(area)
    }

    pub fn midpoint_of_side(&self, index: usize) -> Result<Point> {
        let (p1, p2) = self.side_endpoints(index)?;
        Ok(p1.midpoint(p2))
    }

    /// The three interior angles, in vertex order
    pub fn angles(&self) -> [Degrees; 3] {
        [
            interior_angle(self, 0),
            interior_angle(self, 1),
            interior_angle(self, 2),
        ]
    }

    /// Classify by sides and by angles
    pub fn classify(&self) -> TriangleKind {
        let [a, b, c] = self.side_lengths();
        let tol = 1e-9 * a.max(b).max(c);
        let eq = |x: f64, y: f64| (x - y).abs() <= tol;
        let by_sides = if eq(a, b) && eq(b, c) {
            SideClass::Equilateral
        } else if eq(a, b) || eq(b, c) || eq(a, c) {
            SideClass::Isosceles
        } else {
            SideClass::Scalene
        };

        let by_angles = if find_right_angle_vertex(self).is_some() {
            AngleClass::Right
        } else if self.angles().iter().any(|a| a.0 > 90.0) {
            AngleClass::Obtuse
        } else {
            AngleClass::Acute
        };

        TriangleKind { by_sides, by_angles }
    }
}

/// Classification by side lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideClass {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification by largest angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleClass {
    Acute,
    Right,
    Obtuse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleKind {
    pub by_sides: SideClass,
    pub by_angles: AngleClass,
}

/// Law of cosines at vertex `index`. Coincident adjacent vertices give 0°.
fn interior_angle(triangle: &Triangle, index: usize) -> Degrees {
    let sides = triangle.side_lengths();
    let opp = sides[index];
    let adj1 = sides[(index + 1) % 3];
    let adj2 = sides[(index + 2) % 3];
    let denom = 2.0 * adj1 * adj2;
    if denom == 0.0 {
        return Degrees(0.0);
    }
    // Rounding can push the ratio just outside [-1, 1] for thin triangles
    let cos = ((adj1 * adj1 + adj2 * adj2 - opp * opp) / denom).clamp(-1.0, 1.0);
    Degrees::from_radians(cos.acos())
}

/// Interior angle at `vertex_index`, in degrees
pub fn angle_at_vertex(triangle: &Triangle, vertex_index: usize) -> Result<Degrees> {
    if vertex_index > 2 {
        return Err(GeometryError::VertexIndex {
            index: vertex_index,
        });
    }
    Ok(interior_angle(triangle, vertex_index))
}

/// Index of the first vertex whose angle is 90° within tolerance
pub fn find_right_angle_vertex(triangle: &Triangle) -> Option<usize> {
    triangle
        .angles()
        .iter()
        .position(|a| a.approx_eq(Degrees::RIGHT, defaults::RIGHT_ANGLE_TOLERANCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(pts: [(f64, f64); 3]) -> Triangle {
        Triangle::from_points(pts.map(Point::from))
    }

    #[test]
    fn side_i_is_opposite_vertex_i() {
        let t = tri([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert_eq!(t.side_lengths(), [5.0, 3.0, 4.0]);
        let (p1, p2) = t.side_endpoints(0).unwrap();
        assert_eq!((p1, p2), (Point::new(4.0, 0.0), Point::new(0.0, 3.0)));
        assert_eq!(t.side_endpoints(3), Err(GeometryError::SideIndex { index: 3 }));
    }

    #[test]
    fn default_labels_are_abc() {
        let t = tri([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let labels: Vec<_> = t.vertices().iter().map(|v| v.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("A"), Some("B"), Some("C")]);

        let t = t.with_labels(["P", "Q", "R"]);
        assert_eq!(t.vertex(2).unwrap().label.as_deref(), Some("R"));
    }

    #[test]
    fn try_from_points_rejects_nan() {
        let res = Triangle::try_from_points([
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, 1.0),
        ]);
        assert_eq!(res, Err(GeometryError::NonFinite { what: "vertex" }));
    }

    #[test]
    fn area_and_perimeter() {
        let t = tri([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert_eq!(t.area(), 6.0);
        assert_eq!(t.signed_area(), 6.0);
        assert_eq!(t.perimeter(), 12.0);
        assert_eq!(t.semiperimeter(), 6.0);

        let cw = tri([(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
        assert_eq!(cw.signed_area(), -6.0);
        assert_eq!(cw.area(), 6.0);
    }

    #[test]
    fn right_angle_at_origin() {
        let t = tri([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert_eq!(find_right_angle_vertex(&t), Some(0));
        let a = angle_at_vertex(&t, 0).unwrap();
        assert!(a.approx_eq(Degrees(90.0), 1e-9));
    }

    #[test]
    fn no_right_angle_in_equilateral() {
        let h = 3.0_f64.sqrt();
        let t = tri([(0.0, 0.0), (2.0, 0.0), (1.0, h)]);
        assert_eq!(find_right_angle_vertex(&t), None);
        for a in t.angles() {
            assert!(a.approx_eq(Degrees(60.0), 1e-9));
        }
    }

    #[test]
    fn angles_sum_to_180() {
        let cases = [
            [(0.0, 0.0), (6.0, 0.0), (2.0, 4.0)],
            [(1.0, -2.0), (7.5, 3.25), (-4.0, 9.0)],
            [(0.0, 0.0), (100.0, 0.0), (99.0, 0.5)],
        ];
        for pts in cases {
            let sum: f64 = tri(pts).angles().iter().map(|a| a.0).sum();
            assert!((sum - 180.0).abs() < 1e-6, "{pts:?}: {sum}");
        }
    }

    #[test]
    fn collinear_angles_do_not_produce_nan() {
        let t = tri([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        for a in t.angles() {
            assert!(a.0.is_finite());
        }
        assert!(angle_at_vertex(&t, 1).unwrap().approx_eq(Degrees(180.0), 1e-6));
    }

    #[test]
    fn coincident_vertices_give_zero_angle() {
        let t = tri([(1.0, 1.0), (1.0, 1.0), (3.0, 2.0)]);
        assert_eq!(angle_at_vertex(&t, 0).unwrap(), Degrees(0.0));
    }

    #[test]
    fn angle_index_out_of_range() {
        let t = tri([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(angle_at_vertex(&t, 5), Err(GeometryError::VertexIndex { index: 5 }));
    }

    #[test]
    fn degenerate_detection() {
        assert!(tri([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).is_degenerate());
        assert!(tri([(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]).is_degenerate());
        assert!(!tri([(0.0, 0.0), (1000.0, 0.0), (500.0, 0.01)]).is_degenerate());
        assert!(!tri([(0.0, 0.0), (1e-5, 0.0), (0.0, 1e-5)]).is_degenerate());
        assert!(tri([(0.0, 0.0), (1e-5, 0.0), (2e-5, 1e-20)]).is_degenerate());
    }

    #[test]
    fn classification() {
        let right = tri([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]).classify();
        assert_eq!(right.by_sides, SideClass::Scalene);
        assert_eq!(right.by_angles, AngleClass::Right);

        let iso = tri([(0.0, 0.0), (4.0, 0.0), (2.0, 1.0)]).classify();
        assert_eq!(iso.by_sides, SideClass::Isosceles);
        assert_eq!(iso.by_angles, AngleClass::Obtuse);

        let h = 3.0_f64.sqrt();
        let eq = tri([(0.0, 0.0), (2.0, 0.0), (1.0, h)]).classify();
        assert_eq!(eq.by_sides, SideClass::Equilateral);
        assert_eq!(eq.by_angles, AngleClass::Acute);

        let tiny = tri([(0.0, 0.0), (4e-10, 0.0), (0.0, 3e-10)]).classify();
        assert_eq!(tiny.by_sides, SideClass::Scalene);
        assert_eq!(tiny.by_angles, AngleClass::Right);
    }

    #[test]
    fn map_points_keeps_labels() {
        let t = tri([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let moved = t.map_points(|p| Point::new(p.x * 2.0, p.y + 1.0));
        assert_eq!(
            moved.points(),
            [Point::new(0.0, 1.0), Point::new(2.0, 1.0), Point::new(0.0, 2.0)]
        );
        assert_eq!(moved.vertex(1).unwrap().label.as_deref(), Some("B"));
    }
}

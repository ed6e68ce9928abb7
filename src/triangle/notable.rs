//! Notable points and radii.
//!
//! Centroid is always defined. Incenter needs a non-zero perimeter.
//! Circumcenter, orthocenter and circumradius need a non-zero area and
//! return [`GeometryError::DegenerateTriangle`] otherwise.

use std::str::FromStr;

use super::Triangle;
use crate::errors::{GeometryError, Result};
use crate::types::Point;

/// Selector for the four classical triangle centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotablePoint {
    /// Baricentro: intersection of the medians
    Centroid,
    /// Incentro: intersection of the angle bisectors
    Incenter,
    /// Circuncentro: intersection of the perpendicular bisectors
    Circumcenter,
    /// Ortocentro: intersection of the altitudes
    Orthocenter,
}

impl NotablePoint {
    pub const ALL: [NotablePoint; 4] = [
        NotablePoint::Centroid,
        NotablePoint::Incenter,
        NotablePoint::Circumcenter,
        NotablePoint::Orthocenter,
    ];

    /// Conventional one-letter symbol (G, I, O, H)
    pub fn symbol(self) -> &'static str {
        match self {
            NotablePoint::Centroid => "G",
            NotablePoint::Incenter => "I",
            NotablePoint::Circumcenter => "O",
            NotablePoint::Orthocenter => "H",
        }
    }

    /// Locate this point on `triangle`
    pub fn locate(self, triangle: &Triangle) -> Result<Point> {
        match self {
            NotablePoint::Centroid => Ok(centroid(triangle)),
            NotablePoint::Incenter => incenter(triangle),
            NotablePoint::Circumcenter => circumcenter(triangle),
            NotablePoint::Orthocenter => orthocenter(triangle),
        }
    }
}

impl FromStr for NotablePoint {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "baricentro" | "centroide" | "centroid" => Ok(NotablePoint::Centroid),
            "incentro" | "incenter" => Ok(NotablePoint::Incenter),
            "circuncentro" | "circumcenter" => Ok(NotablePoint::Circumcenter),
            "ortocentro" | "orthocenter" => Ok(NotablePoint::Orthocenter),
            _ => Err(GeometryError::UnknownName {
                kind: "notable point",
                name: s.to_string(),
            }),
        }
    }
}

impl Triangle {
    pub fn notable_point(&self, kind: NotablePoint) -> Result<Point> {
        kind.locate(self)
    }
}

/// Mean of the three vertices
pub fn centroid(triangle: &Triangle) -> Point {
    let [p0, p1, p2] = triangle.points();
    ((p0.vec() + p1.vec() + p2.vec()) / 3.0).into()
}

/// Vertices weighted by the length of the opposite side
pub fn incenter(triangle: &Triangle) -> Result<Point> {
    let [a, b, c] = triangle.side_lengths();
    let perimeter = a + b + c;
    if perimeter == 0.0 {
        return Err(GeometryError::DegenerateTriangle { area: 0.0 });
    }
    let [p0, p1, p2] = triangle.points();
    Ok(((p0.vec() * a + p1.vec() * b + p2.vec() * c) / perimeter).into())
}

/// Intersection of the perpendicular bisectors.
///
/// Solved relative to vertex 0 to keep the determinant well conditioned
/// when the triangle sits far from the origin.
pub fn circumcenter(triangle: &Triangle) -> Result<Point> {
    triangle.non_degenerate_area()?;
    let [p0, p1, p2] = triangle.points();
    let b = p1 - p0;
    let c = p2 - p0;
    let d = 2.0 * b.perp_dot(c);
    let b2 = b.length_squared();
    let c2 = c.length_squared();
    let ux = (c.y * b2 - b.y * c2) / d;
    let uy = (b.x * c2 - c.x * b2) / d;
    Ok(p0 + glam::dvec2(ux, uy))
}

/// Intersection of the altitudes, via the Euler line: `H = 3G - 2O`
pub fn orthocenter(triangle: &Triangle) -> Result<Point> {
    let g = centroid(triangle).vec();
    let o = circumcenter(triangle)?.vec();
    Ok((3.0 * g - 2.0 * o).into())
}

/// Radius of the inscribed circle, `area / semiperimeter`; 0 for degenerate triangles
pub fn inradius(triangle: &Triangle) -> f64 {
    if triangle.is_degenerate() {
        return 0.0;
    }
    triangle.area() / triangle.semiperimeter()
}

/// Radius of the circumscribed circle, `abc / (4 · area)`
pub fn circumradius(triangle: &Triangle) -> Result<f64> {
    let area = triangle.non_degenerate_area()?;
    let [a, b, c] = triangle.side_lengths();
    Ok(a * b * c / (4.0 * area))
}

//! Special lines: altura, mediana, bisectriz and mediatriz.
//!
//! Each kind is one formula; [`calculate_special_line_endpoints`] picks the
//! formula from the config's tag.

use std::str::FromStr;

use super::Triangle;
use crate::errors::{GeometryError, Result};
use crate::types::{Point, UnitVec, check_non_negative};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialLineKind {
    /// Altitude: from a vertex, perpendicular to the line of the opposite side
    Altura,
    /// Median (also "transversal de gravedad"): from a vertex to the opposite midpoint
    Mediana,
    /// Angle bisector: from a vertex to the opposite side, split in the ratio of the adjacent sides
    Bisectriz,
    /// Perpendicular bisector (also "simetral") of the side opposite the configured vertex
    Mediatriz,
}

impl FromStr for SpecialLineKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "altura" | "altitude" => Ok(SpecialLineKind::Altura),
            "mediana" | "transversal" | "median" => Ok(SpecialLineKind::Mediana),
            "bisectriz" | "bisector" => Ok(SpecialLineKind::Bisectriz),
            "mediatriz" | "simetral" | "perpendicular-bisector" => Ok(SpecialLineKind::Mediatriz),
            _ => Err(GeometryError::UnknownName {
                kind: "special line",
                name: s.to_string(),
            }),
        }
    }
}

/// Which special line to draw, and from where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialLineConfig {
    pub kind: SpecialLineKind,
    /// Vertex the line starts from. For a mediatriz, the side opposite this vertex.
    pub vertex: usize,
    /// Extra length added past both ends of a mediatriz
    pub extension: f64,
}

impl SpecialLineConfig {
    pub fn new(kind: SpecialLineKind, vertex: usize) -> Self {
        SpecialLineConfig {
            kind,
            vertex,
            extension: 0.0,
        }
    }

    pub fn with_extension(mut self, extension: f64) -> Self {
        self.extension = extension;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEndpoints {
    pub start: Point,
    pub end: Point,
}

impl LineEndpoints {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

pub fn calculate_special_line_endpoints(
    triangle: &Triangle,
    config: &SpecialLineConfig,
) -> Result<LineEndpoints> {
    let i = config.vertex;
    if i > 2 {
        return Err(GeometryError::VertexIndex { index: i });
    }
    let extension = check_non_negative(config.extension)
        .map_err(|_| GeometryError::InvalidSize { value: config.extension })?;

    let vertex = triangle.p(i);
    let (b, c) = triangle.side_endpoints(i)?;

    let endpoints = match config.kind {
        SpecialLineKind::Altura => LineEndpoints {
            start: vertex,
            end: foot_of_perpendicular(vertex, b, c),
        },
        SpecialLineKind::Mediana => LineEndpoints {
            start: vertex,
            end: b.midpoint(c),
        },
        SpecialLineKind::Bisectriz => LineEndpoints {
            start: vertex,
            end: bisector_foot(vertex, b, c),
        },
        SpecialLineKind::Mediatriz => perpendicular_bisector(triangle, b, c, extension),
    };
    Ok(endpoints)
}

/// Projection of `p` onto the infinite line through `a` and `b`
fn foot_of_perpendicular(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return a;
    }
    let t = (p - a).dot(ab) / len2;
    a + ab * t
}

/// Point on `b`–`c` dividing it in the ratio `|vb| : |vc|`
fn bisector_foot(vertex: Point, b: Point, c: Point) -> Point {
    let vb = vertex.distance(b);
    let vc = vertex.distance(c);
    if vb + vc == 0.0 {
        return b.midpoint(c);
    }
    b.lerp(c, vb / (vb + vc))
}

/// Segment through the midpoint of `b`–`c`, perpendicular to it.
///
/// It reaches at least to the circumcenter (which lies on every
/// perpendicular bisector) and at least half the side length either way.
fn perpendicular_bisector(
    triangle: &Triangle,
    b: Point,
    c: Point,
    extension: f64,
) -> LineEndpoints {
    let mid = b.midpoint(c);
    let Some(dir) = UnitVec::between(b, c) else {
        return LineEndpoints { start: mid, end: mid };
    };
    let normal = dir.perp();
    let to_center = super::circumcenter(triangle)
        .map(|o| o.distance(mid))
        .unwrap_or(0.0);
    let half = (b.distance(c) / 2.0).max(to_center) + extension;
    LineEndpoints {
        start: mid + normal * -half,
        end: mid + normal * half,
    }
}

//! Label anchors and view box fitting.
//!
//! Labels are pushed away from the triangle's interior so text never sits
//! on the fill. The centroid stands in for "the interior": it lies strictly
//! inside any non-degenerate triangle, on the same side of every edge as
//! the opposite vertex.

use super::{Triangle, centroid};
use crate::types::{BBox, LabeledPoint, Point, UnitVec};

/// Fallback direction when "away from the interior" is undefined: up on screen
fn screen_up() -> UnitVec {
    UnitVec::normalized(glam::dvec2(0.0, -1.0)).unwrap_or(UnitVec::ZERO)
}

/// Anchor for a vertex label, `offset` away from the centroid along the centroid→vertex ray
pub fn calculate_vertex_label_position(
    vertex: &LabeledPoint,
    triangle: &Triangle,
    offset: f64,
) -> Point {
    let p = vertex.point();
    let dir = UnitVec::between(centroid(triangle), p).unwrap_or_else(screen_up);
    p + dir * offset
}

/// Anchor for the label of side `p1`–`p2`: off its midpoint, perpendicular, on the outside
pub fn calculate_side_label_position(
    p1: Point,
    p2: Point,
    triangle: &Triangle,
    offset: f64,
) -> Point {
    let mid = p1.midpoint(p2);
    let Some(dir) = UnitVec::between(p1, p2) else {
        return mid + screen_up() * offset;
    };
    let mut normal = dir.perp();
    let inward = centroid(triangle) - mid;
    let side = normal.vec().dot(inward);
    if side > 0.0 {
        normal = UnitVec::normalized(-normal.vec()).unwrap_or(normal);
    } else if side == 0.0 {
        // Centroid on the side's line: prefer whichever normal points up on screen
        if normal.dy() > 0.0 {
            normal = UnitVec::normalized(-normal.vec()).unwrap_or(normal);
        }
    }
    mid + normal * offset
}

/// Anchor for an angle's value label, on the bisector of the angle at `vertex`
pub fn calculate_angle_label_position(vertex: Point, p1: Point, p2: Point, distance: f64) -> Point {
    let (Some(u1), Some(u2)) = (UnitVec::between(vertex, p1), UnitVec::between(vertex, p2)) else {
        return vertex;
    };
    let dir = UnitVec::normalized(u1.vec() + u2.vec()).unwrap_or_else(|| u1.perp());
    vertex + dir * distance
}

/// Canvas rectangle in drawing space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn from_bbox(bb: &BBox) -> Self {
        ViewBox {
            min_x: bb.min.x,
            min_y: bb.min.y,
            width: bb.width(),
            height: bb.height(),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x
            && p.x <= self.min_x + self.width
            && p.y >= self.min_y
            && p.y <= self.min_y + self.height
    }
}

/// Bounding box of the three vertices grown by `padding` on every side
pub fn calculate_view_box(triangle: &Triangle, padding: f64) -> ViewBox {
    let bb = BBox::from_points(triangle.points()).padded(padding);
    ViewBox::from_bbox(&bb)
}

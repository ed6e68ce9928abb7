//! SVG path data.
//!
//! [`PathData`] is a small fluent builder over the `d` attribute mini-language
//! (`M`, `L`, `A`, `Z`). The two marker helpers build the angle decorations
//! drawn at a triangle's vertices.

use std::fmt;

use crate::types::{Point, UnitVec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M {},{}", fmt_num(x), fmt_num(y)),
            PathCommand::LineTo { x, y } => write!(f, "L {},{}", fmt_num(x), fmt_num(y)),
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                f,
                "A {},{} {} {},{} {},{}",
                fmt_num(rx),
                fmt_num(ry),
                fmt_num(rotation),
                large_arc as u8,
                sweep as u8,
                fmt_num(x),
                fmt_num(y)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Builder for the `d` attribute of an SVG `<path>`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed polyline through `points`; empty when `points` is
    pub fn polygon(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };
        rest.iter()
            .fold(Self::new().m(first.x, first.y), |path, p| path.l(p.x, p.y))
            .z()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// Format a coordinate with 6 significant figures, trailing zeros trimmed
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < 1e-9 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    s.to_string()
}

/// Arc of `radius` around `vertex`, from the ray toward `p1` to the ray toward `p2`.
///
/// Always the shorter of the two arcs. The sweep flag follows the sign of the
/// cross product of the two rays in drawing space (Y down), which is the
/// direction SVG calls "positive angle". Empty when either ray is undefined.
pub fn describe_angle_arc(vertex: Point, p1: Point, p2: Point, radius: f64) -> PathData {
    let (Some(u1), Some(u2)) = (UnitVec::between(vertex, p1), UnitVec::between(vertex, p2)) else {
        return PathData::new();
    };
    let start = vertex + u1 * radius;
    let end = vertex + u2 * radius;
    let sweep = u1.vec().perp_dot(u2.vec()) >= 0.0;
    PathData::new()
        .m(start.x, start.y)
        .a(radius, radius, 0.0, false, sweep, end.x, end.y)
}

/// Square corner of side `size` at `vertex`, open on the vertex side
pub fn describe_right_angle_marker(vertex: Point, p1: Point, p2: Point, size: f64) -> PathData {
    let (Some(u1), Some(u2)) = (UnitVec::between(vertex, p1), UnitVec::between(vertex, p2)) else {
        return PathData::new();
    };
    let a = vertex + u1 * size;
    let b = vertex + u2 * size;
    let corner = a + u2 * size;
    PathData::new().m(a.x, a.y).l(corner.x, corner.y).l(b.x, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(1e-12), "0");
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(-3.5), "-3.5");
        assert_eq!(fmt_num(123.456789), "123.457");
        assert_eq!(fmt_num(250.0), "250");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn builder_output() {
        let path = PathData::new()
            .m(0.0, 0.0)
            .l(10.0, 0.0)
            .a(5.0, 5.0, 0.0, false, true, 10.0, 10.0)
            .z();
        insta::assert_snapshot!(path, @"M 0,0 L 10,0 A 5,5 0 0,1 10,10 Z");
    }

    #[test]
    fn polygon_closes() {
        let path =
            PathData::polygon(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)]);
        insta::assert_snapshot!(path, @"M 0,0 L 4,0 L 0,3 Z");
        assert!(PathData::polygon(&[]).is_empty());
    }

    #[test]
    fn right_angle_marker() {
        let (a, b) = (Point::new(4.0, 0.0), Point::new(0.0, 3.0));
        let path = describe_right_angle_marker(Point::ORIGIN, a, b, 1.0);
        insta::assert_snapshot!(path, @"M 1,0 L 1,1 L 0,1");
    }

    #[test]
    fn angle_arc_sweep_follows_orientation() {
        let arc =
            describe_angle_arc(Point::ORIGIN, Point::new(10.0, 0.0), Point::new(0.0, 10.0), 5.0);
        insta::assert_snapshot!(arc, @"M 5,0 A 5,5 0 0,1 0,5");
        let reversed =
            describe_angle_arc(Point::ORIGIN, Point::new(0.0, 10.0), Point::new(10.0, 0.0), 5.0);
        insta::assert_snapshot!(reversed, @"M 0,5 A 5,5 0 0,0 5,0");
    }

    #[test]
    fn angle_arc_starts_and_ends_on_circle() {
        let vertex = Point::new(3.0, 4.0);
        let arc = describe_angle_arc(vertex, Point::new(20.0, 9.0), Point::new(-7.0, 30.0), 6.0);
        let [
            PathCommand::MoveTo { x: sx, y: sy },
            PathCommand::Arc {
                x: ex,
                y: ey,
                large_arc,
                ..
            },
        ] = arc.commands()
        else {
            panic!("unexpected path {arc}");
        };
        assert!((Point::new(*sx, *sy).distance(vertex) - 6.0).abs() < 1e-9);
        assert!((Point::new(*ex, *ey).distance(vertex) - 6.0).abs() < 1e-9);
        assert!(!large_arc);
    }

    #[test]
    fn undefined_ray_gives_empty_path() {
        let p = Point::new(1.0, 1.0);
        assert!(describe_angle_arc(p, p, Point::new(2.0, 2.0), 3.0).is_empty());
        assert!(describe_right_angle_marker(p, Point::new(2.0, 2.0), p, 3.0).is_empty());
    }
}

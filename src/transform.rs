//! Coordinate transform between a logical math window and a pixel canvas.
//!
//! Math space is Y-up with arbitrary units; drawing space is Y-down pixels.
//! The mapping is affine in each axis:
//!
//! ```text
//! svg_x = padding + (math_x - x_min) * scale
//! svg_y = height - padding - (math_y - y_min) * scale
//! ```
//!
//! It is defined for every real input. Points outside the configured ranges
//! simply land outside the visible canvas.

use crate::defaults;
use crate::errors::{Axis, GeometryError, Result};
use crate::types::{Point, check_non_negative, check_positive};

/// Logical `[min, max]` window of one axis. Invariant: finite and `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        AxisRange {
            min: -defaults::RANGE_EXTENT,
            max: defaults::RANGE_EXTENT,
        }
    }
}

impl AxisRange {
    /// Create a range with validation
    pub fn try_new(axis: Axis, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GeometryError::InvalidRange { axis, min, max });
        }
        Ok(AxisRange { min, max })
    }

    /// Symmetric range `[-extent, extent]`
    pub fn symmetric(axis: Axis, extent: f64) -> Result<Self> {
        Self::try_new(axis, -extent, extent)
    }

    pub fn min(self) -> f64 {
        self.min
    }

    pub fn max(self) -> f64 {
        self.max
    }

    pub fn span(self) -> f64 {
        self.max - self.min
    }

    pub fn contains(self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn clamp(self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Canvas size in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Canvas size needed to show both ranges at `scale` with `padding` on every side.
pub fn calculate_dimensions(
    x_range: AxisRange,
    y_range: AxisRange,
    scale: f64,
    padding: f64,
) -> Dimensions {
    Dimensions {
        width: x_range.span() * scale + 2.0 * padding,
        height: y_range.span() * scale + 2.0 * padding,
    }
}

fn validate_scale(scale: f64) -> Result<f64> {
    check_positive(scale).map_err(|_| GeometryError::InvalidScale { value: scale })
}

fn validate_padding(padding: f64) -> Result<f64> {
    check_non_negative(padding).map_err(|_| GeometryError::InvalidPadding { value: padding })
}

/// Bidirectional math ↔ drawing mapping.
///
/// Immutable; build a new one whenever a parameter changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    x_range: AxisRange,
    y_range: AxisRange,
    scale: f64,
    padding: f64,
    canvas: Dimensions,
}

impl CoordinateTransform {
    /// Transform whose canvas is sized by [`calculate_dimensions`]
    pub fn new(x_range: AxisRange, y_range: AxisRange, scale: f64, padding: f64) -> Result<Self> {
        let scale = validate_scale(scale)?;
        let padding = validate_padding(padding)?;
        Ok(CoordinateTransform {
            x_range,
            y_range,
            scale,
            padding,
            canvas: calculate_dimensions(x_range, y_range, scale, padding),
        })
    }

    /// Override the canvas size. The Y flip is taken against the new height.
    pub fn with_canvas(mut self, canvas: Dimensions) -> Result<Self> {
        let width = check_positive(canvas.width)
            .map_err(|_| GeometryError::InvalidSize { value: canvas.width })?;
        let height = check_positive(canvas.height)
            .map_err(|_| GeometryError::InvalidSize { value: canvas.height })?;
        self.canvas = Dimensions { width, height };
        Ok(self)
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn dimensions(&self) -> Dimensions {
        self.canvas
    }

    /// Math space → drawing space
    pub fn to_svg(&self, math_x: f64, math_y: f64) -> Point {
        Point::new(
            self.padding + (math_x - self.x_range.min) * self.scale,
            self.canvas.height - self.padding - (math_y - self.y_range.min) * self.scale,
        )
    }

    /// Drawing space → math space; exact algebraic inverse of [`Self::to_svg`]
    pub fn to_math(&self, svg_x: f64, svg_y: f64) -> Point {
        Point::new(
            (svg_x - self.padding) / self.scale + self.x_range.min,
            (self.canvas.height - self.padding - svg_y) / self.scale + self.y_range.min,
        )
    }

    pub fn point_to_svg(&self, p: Point) -> Point {
        self.to_svg(p.x, p.y)
    }

    pub fn point_to_math(&self, p: Point) -> Point {
        self.to_math(p.x, p.y)
    }

    /// Math-space length → pixels (isotropic scale)
    pub fn length_to_svg(&self, len: f64) -> f64 {
        len * self.scale
    }

    /// Whether a math-space point lies inside both visible ranges
    pub fn contains_math(&self, p: Point) -> bool {
        self.x_range.contains(p.x) && self.y_range.contains(p.y)
    }

    /// Ticks along the x axis, positioned in drawing-space x
    pub fn x_ticks(&self, step: f64) -> Result<Ticks> {
        Ticks::try_new(self.x_range, step, self.padding, self.scale)
    }

    /// Ticks along the y axis, positioned in drawing-space y (flipped)
    pub fn y_ticks(&self, step: f64) -> Result<Ticks> {
        Ticks::try_new(
            self.y_range,
            step,
            self.canvas.height - self.padding,
            -self.scale,
        )
    }
}

/// Closure form of [`CoordinateTransform::to_svg`]
pub fn create_math_to_svg_transform(
    x_range: AxisRange,
    y_range: AxisRange,
    scale: f64,
    padding: f64,
) -> Result<impl Fn(f64, f64) -> Point + Copy> {
    let t = CoordinateTransform::new(x_range, y_range, scale, padding)?;
    Ok(move |x, y| t.to_svg(x, y))
}

/// Closure form of [`CoordinateTransform::to_math`]
pub fn create_svg_to_math_transform(
    x_range: AxisRange,
    y_range: AxisRange,
    scale: f64,
    padding: f64,
) -> Result<impl Fn(f64, f64) -> Point + Copy> {
    let t = CoordinateTransform::new(x_range, y_range, scale, padding)?;
    Ok(move |x, y| t.to_math(x, y))
}

/// One tick: its math value and its pixel coordinate along the axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
}

/// Lazy, finite sequence of ticks at every multiple of `step` inside a range.
///
/// At most [`defaults::MAX_TICKS`] ticks are produced; a denser request
/// fails with [`GeometryError::TooManyTicks`]. A clone keeps the current
/// cursor. Use [`Ticks::restart`] to iterate again from the first tick.
#[derive(Clone, Debug)]
pub struct Ticks {
    range: AxisRange,
    step: f64,
    origin: f64,
    pixels_per_unit: f64,
    /// Multiple of `step` of the first tick
    first: f64,
    len: usize,
    next: usize,
}

impl Ticks {
    fn try_new(range: AxisRange, step: f64, origin: f64, pixels_per_unit: f64) -> Result<Self> {
        let step = check_positive(step).map_err(|_| GeometryError::InvalidStep { value: step })?;
        // Absorb rounding so a bound that is an exact multiple is included
        let slack = 1e-9;
        let first = (range.min / step - slack).ceil();
        let last = (range.max / step + slack).floor();
        let count = (last - first + 1.0).max(0.0);
        if !count.is_finite() || count > defaults::MAX_TICKS as f64 {
            return Err(GeometryError::TooManyTicks {
                count,
                max: defaults::MAX_TICKS,
            });
        }
        Ok(Ticks {
            range,
            step,
            origin,
            pixels_per_unit,
            first,
            len: count as usize,
            next: 0,
        })
    }

    /// Rewind to the first tick
    pub fn restart(&mut self) {
        self.next = 0;
    }

    fn tick_at(&self, index: usize) -> Tick {
        let value = (self.first + index as f64) * self.step;
        Tick {
            value,
            position: self.origin + (value - self.range.min) * self.pixels_per_unit,
        }
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next >= self.len {
            return None;
        }
        let tick = self.tick_at(self.next);
        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}

/// One tick per integer of `range`, positioned like the x axis
/// (`padding + (value - min) * scale`).
pub fn generate_ticks(range: AxisRange, scale: f64, padding: f64) -> Result<Ticks> {
    generate_ticks_with_step(range, defaults::GRID_STEP, scale, padding)
}

/// Like [`generate_ticks`] with a configurable step
pub fn generate_ticks_with_step(
    range: AxisRange,
    step: f64,
    scale: f64,
    padding: f64,
) -> Result<Ticks> {
    let scale = validate_scale(scale)?;
    let padding = validate_padding(padding)?;
    Ticks::try_new(range, step, padding, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(axis: Axis, min: f64, max: f64) -> AxisRange {
        AxisRange::try_new(axis, min, max).unwrap()
    }

    fn sample_transform() -> CoordinateTransform {
        CoordinateTransform::new(range(Axis::X, -5.0, 5.0), range(Axis::Y, -3.0, 4.0), 40.0, 20.0)
            .unwrap()
    }

    #[test]
    fn axis_range_rejects_inverted_and_empty() {
        assert!(AxisRange::try_new(Axis::X, 1.0, 1.0).is_err());
        assert!(AxisRange::try_new(Axis::Y, 2.0, -2.0).is_err());
        assert!(AxisRange::try_new(Axis::X, f64::NAN, 2.0).is_err());
        assert_eq!(
            AxisRange::try_new(Axis::Y, 3.0, 1.0),
            Err(GeometryError::InvalidRange { axis: Axis::Y, min: 3.0, max: 1.0 })
        );
    }

    #[test]
    fn dimensions_include_padding() {
        let dims =
            calculate_dimensions(range(Axis::X, -5.0, 5.0), range(Axis::Y, 0.0, 4.0), 40.0, 20.0);
        assert_eq!(dims.width, 440.0);
        assert_eq!(dims.height, 200.0);
    }

    #[test]
    fn origin_maps_inside_padding() {
        let t = sample_transform();
        // height = 7 * 40 + 40 = 320
        assert_eq!(t.dimensions().height, 320.0);
        assert_eq!(t.to_svg(-5.0, -3.0), Point::new(20.0, 300.0));
        assert_eq!(t.to_svg(5.0, 4.0), Point::new(420.0, 20.0));
        assert_eq!(t.to_svg(0.0, 0.0), Point::new(220.0, 180.0));
    }

    #[test]
    fn y_grows_downward_in_drawing_space() {
        let t = sample_transform();
        assert!(t.to_svg(0.0, 1.0).y < t.to_svg(0.0, 0.0).y);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let t = sample_transform();
        let mut x = -20.0;
        while x <= 20.0 {
            let mut y = -20.0;
            while y <= 20.0 {
                let svg = t.to_svg(x, y);
                let back = t.to_math(svg.x, svg.y);
                assert!(back.approx_eq(Point::new(x, y), 1e-9), "{x},{y} -> {back}");
                y += 0.37;
            }
            x += 0.41;
        }
    }

    #[test]
    fn points_outside_range_are_not_errors() {
        let t = sample_transform();
        let far = t.to_svg(100.0, -100.0);
        assert!(far.x > t.dimensions().width);
        assert!(far.y > t.dimensions().height);
        assert!(!t.contains_math(Point::new(100.0, -100.0)));
    }

    #[test]
    fn explicit_canvas_changes_flip_height() {
        let t = sample_transform()
            .with_canvas(Dimensions { width: 500.0, height: 400.0 })
            .unwrap();
        assert_eq!(t.to_svg(-5.0, -3.0), Point::new(20.0, 380.0));
        let back = t.point_to_math(t.to_svg(1.5, 2.5));
        assert!(back.approx_eq(Point::new(1.5, 2.5), 1e-12));
    }

    #[test]
    fn invalid_scale_and_padding_rejected() {
        let x = range(Axis::X, 0.0, 1.0);
        let y = range(Axis::Y, 0.0, 1.0);
        assert_eq!(
            CoordinateTransform::new(x, y, 0.0, 10.0),
            Err(GeometryError::InvalidScale { value: 0.0 })
        );
        assert_eq!(
            CoordinateTransform::new(x, y, 10.0, -1.0),
            Err(GeometryError::InvalidPadding { value: -1.0 })
        );
    }

    #[test]
    fn closure_transforms_are_inverse() {
        let x = range(Axis::X, -2.0, 2.0);
        let y = range(Axis::Y, -1.0, 3.0);
        let to_svg = create_math_to_svg_transform(x, y, 25.0, 10.0).unwrap();
        let to_math = create_svg_to_math_transform(x, y, 25.0, 10.0).unwrap();
        let p = to_svg(0.75, -0.25);
        assert!(to_math(p.x, p.y).approx_eq(Point::new(0.75, -0.25), 1e-12));
    }

    #[test]
    fn integer_ticks_cover_range() {
        let ticks: Vec<_> = generate_ticks(range(Axis::X, -2.0, 2.0), 10.0, 5.0).unwrap().collect();
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(ticks[0].position, 5.0);
        assert_eq!(ticks[4].position, 45.0);
    }

    #[test]
    fn fractional_range_skips_partial_units() {
        let values: Vec<f64> = generate_ticks(range(Axis::X, -1.5, 2.7), 10.0, 0.0)
            .unwrap()
            .map(|t| t.value)
            .collect();
        assert_eq!(values, vec![-1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn custom_step_and_restart() {
        let mut ticks =
            generate_ticks_with_step(range(Axis::X, 0.0, 1.0), 0.25, 100.0, 0.0).unwrap();
        assert_eq!(ticks.len(), 5);
        let first: Vec<f64> = ticks.by_ref().map(|t| t.position).collect();
        assert_eq!(first, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(ticks.next(), None);
        ticks.restart();
        assert_eq!(ticks.count(), 5);
    }

    #[test]
    fn zero_step_rejected() {
        assert_eq!(
            generate_ticks_with_step(range(Axis::X, 0.0, 1.0), 0.0, 10.0, 0.0).err(),
            Some(GeometryError::InvalidStep { value: 0.0 })
        );
    }

    #[test]
    fn huge_range_is_rejected_instead_of_overflowing() {
        let err = generate_ticks(range(Axis::X, -1e300, 1e300), 1.0, 0.0).unwrap_err();
        assert!(matches!(err, GeometryError::TooManyTicks { max: defaults::MAX_TICKS, .. }));

        let dense = generate_ticks_with_step(range(Axis::X, 0.0, 1.0), 1e-6, 1.0, 0.0);
        assert!(matches!(dense, Err(GeometryError::TooManyTicks { .. })));

        let cap = (defaults::MAX_TICKS - 1) as f64;
        let ticks = generate_ticks(range(Axis::X, 0.0, cap), 1.0, 0.0).unwrap();
        assert_eq!(ticks.len(), defaults::MAX_TICKS);
    }

    #[test]
    fn far_offset_range_keeps_exact_values() {
        let values: Vec<f64> = generate_ticks(range(Axis::X, 1e15, 1e15 + 3.0), 1.0, 0.0)
            .unwrap()
            .map(|t| t.value)
            .collect();
        assert_eq!(values, vec![1e15, 1e15 + 1.0, 1e15 + 2.0, 1e15 + 3.0]);
    }

    #[test]
    fn y_ticks_follow_flipped_axis() {
        let t = sample_transform();
        let ticks: Vec<Tick> = t.y_ticks(1.0).unwrap().collect();
        assert_eq!(ticks.first().map(|t| t.value), Some(-3.0));
        assert_eq!(ticks.first().map(|t| t.position), Some(300.0));
        assert_eq!(ticks.last().map(|t| t.position), Some(20.0));
        for tick in &ticks {
            assert_eq!(tick.position, t.to_svg(0.0, tick.value).y);
        }
    }
}

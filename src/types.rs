//! Strongly-typed geometric primitives for figura.
//!
//! Points are plain `f64` pairs at the API surface; the geometry kernel
//! converts to `glam::DVec2` for vector arithmetic and back.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negative values (zero allowed).
#[inline]
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// A 2D point. Which space it lives in (math or drawing) is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// View this point as a glam vector
    #[inline]
    pub fn vec(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        self.vec().distance(other.vec())
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    /// Linear interpolation, `t = 0` gives `self`, `t = 1` gives `other`
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self.vec().lerp(other.vec(), t).into()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison within `tol`
    pub fn approx_eq(self, other: Point, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.vec()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Subtract two points to get a displacement vector
impl Sub for Point {
    type Output = DVec2;
    fn sub(self, rhs: Point) -> DVec2 {
        self.vec() - rhs.vec()
    }
}

/// Translate a point by a displacement vector
impl Add<DVec2> for Point {
    type Output = Point;
    fn add(self, rhs: DVec2) -> Point {
        (self.vec() + rhs).into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point with an optional display name ("A", "B", "C", ...)
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64) -> Self {
        LabeledPoint { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        LabeledPoint {
            x,
            y,
            label: Some(label.into()),
        }
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same label, new position
    pub fn moved_to(&self, p: Point) -> Self {
        LabeledPoint {
            x: p.x,
            y: p.y,
            label: self.label.clone(),
        }
    }
}

impl From<Point> for LabeledPoint {
    fn from(p: Point) -> Self {
        LabeledPoint::new(p.x, p.y)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const RIGHT: Degrees = Degrees(90.0);
    pub const STRAIGHT: Degrees = Degrees(180.0);

    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        Degrees(rad.to_degrees())
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    pub fn approx_eq(self, other: Degrees, tol: f64) -> bool {
        (self.0 - other.0).abs() <= tol
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A unit direction vector (dimensionless, normalized)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct UnitVec(DVec2);

impl UnitVec {
    pub const ZERO: UnitVec = UnitVec(DVec2::ZERO);

    /// Create a normalized unit vector from components.
    /// Returns None if the input has zero length.
    pub fn normalized(v: DVec2) -> Option<Self> {
        let len = v.length();
        if len == 0.0 || !len.is_finite() {
            None
        } else {
            Some(UnitVec(v / len))
        }
    }

    /// Unit vector pointing from `from` toward `to`
    pub fn between(from: Point, to: Point) -> Option<Self> {
        Self::normalized(to - from)
    }

    /// Unit vector at `angle` measured counter-clockwise from +x
    pub fn from_angle(angle: Degrees) -> Self {
        let rad = angle.to_radians();
        UnitVec(dvec2(rad.cos(), rad.sin()))
    }

    /// Rotate 90° counter-clockwise (in a Y-up frame)
    pub fn perp(self) -> Self {
        UnitVec(self.0.perp())
    }

    pub fn dx(self) -> f64 {
        self.0.x
    }

    pub fn dy(self) -> f64 {
        self.0.y
    }

    pub fn vec(self) -> DVec2 {
        self.0
    }
}

/// Multiply a unit vector by a length to get a displacement
impl Mul<f64> for UnitVec {
    type Output = DVec2;
    fn mul(self, len: f64) -> DVec2 {
        self.0 * len
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(f64::MIN, f64::MIN),
        }
    }

    /// Smallest box holding every point of `points`
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut bb = BBox::new();
        for p in points {
            bb.expand_point(p);
        }
        bb
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Expand to include a circle
    pub fn expand_circle(&mut self, center: Point, radius: f64) {
        self.expand_point(Point::new(center.x - radius, center.y - radius));
        self.expand_point(Point::new(center.x + radius, center.y + radius));
    }

    /// Grow by `amount` on all four sides
    pub fn padded(&self, amount: f64) -> BBox {
        BBox {
            min: Point::new(self.min.x - amount, self.min.y - amount),
            max: Point::new(self.max.x + amount, self.max.y + amount),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

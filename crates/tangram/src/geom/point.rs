//! Positions and displacements.
//!
//! `Point` is a `Copy` value: every pass or return copies, so two shapes never
//! share a vertex by identity. Equality and hashing are by exact coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::Angle;

/// Immutable displacement `(dx, dy)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    dx: f64,
    dy: f64,
}

impl Vector {
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Displacement of `p` from the origin.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    #[inline]
    pub fn plus(&self, other: Vector) -> Vector {
        Vector::new(self.dx + other.dx, self.dy + other.dy)
    }

    #[inline]
    pub fn times(&self, factor: f64) -> Vector {
        Vector::new(self.dx * factor, self.dy * factor)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        Vector2::from(*self).norm()
    }
}

impl From<Vector> for Vector2<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.dx, v.dy)
    }
}

impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

/// Mutable 2D position.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        Vector::between(*self, other).length()
    }

    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[inline]
    pub fn translate(&mut self, delta: Vector) {
        self.x += delta.dx;
        self.y += delta.dy;
    }

    /// Rotate about `center` using the axis-snapped `cos`/`sin` of `angle`.
    pub fn rotate(&mut self, angle: Angle, center: Point) {
        let (c, s) = (angle.cos(), angle.sin());
        let r = Matrix2::new(c, -s, s, c);
        let p = r * (Vector2::from(*self) - Vector2::from(center));
        self.x = center.x + p.x;
        self.y = center.y + p.y;
    }

    /// Homothety about `center`: `p' = center + factor * (p - center)`.
    #[inline]
    pub fn scale(&mut self, factor: f64, center: Point) {
        self.x = center.x + factor * (self.x - center.x);
        self.y = center.y + factor * (self.y - center.y);
    }

    /// Copy moved by `delta`.
    #[inline]
    pub fn translated(mut self, delta: Vector) -> Point {
        self.translate(delta);
        self
    }

    #[inline]
    pub fn rotated(mut self, angle: Angle, center: Point) -> Point {
        self.rotate(angle, center);
        self
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//! Line segments and the orientation-based proper-intersection test.
//!
//! `is_colliding` is the classical test without collinear special cases:
//! segments that overlap on a common line, or that only touch at an endpoint,
//! can be misclassified. Callers that need a robust answer perturb the geometry
//! first (see `puzzle::check`).

use serde::{Deserialize, Serialize};

use super::{Angle, Point, Vector};
use crate::shapes::Transformable;

/// Turn direction of an ordered triple of points (y axis pointing up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Signed encoding: collinear 0, clockwise −1, counter-clockwise +1.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Collinear => 0,
            Orientation::Clockwise => -1,
            Orientation::CounterClockwise => 1,
        }
    }
}

/// Ordered pair of endpoints. Endpoints are value copies of the inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    #[inline]
    pub fn set_a(&mut self, a: Point) {
        self.a = a;
    }

    #[inline]
    pub fn set_b(&mut self, b: Point) {
        self.b = b;
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Sign of the cross product `(p2 - p1) × (p3 - p2)`. Exact zero only.
    pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
        let cross = (p2.x() - p1.x()) * (p3.y() - p2.y()) - (p2.y() - p1.y()) * (p3.x() - p2.x());
        if cross == 0.0 {
            Orientation::Collinear
        } else if cross > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Proper intersection: each segment's endpoints lie on different sides of the other.
    pub fn is_colliding(&self, other: &Segment) -> bool {
        let (a, b, c, d) = (self.a, self.b, other.a, other.b);
        Self::orientation(a, b, c) != Self::orientation(a, b, d)
            && Self::orientation(c, d, a) != Self::orientation(c, d, b)
    }
}

impl Transformable for Segment {
    #[inline]
    fn center(&self) -> Point {
        self.a.midpoint(self.b)
    }

    fn translate(&mut self, v: Vector) {
        self.a.translate(v);
        self.b.translate(v);
    }

    fn rotate_about(&mut self, center: Point, angle: Angle) {
        self.a.rotate(angle, center);
        self.b.rotate(angle, center);
    }

    fn scale_about(&mut self, center: Point, factor: f64) {
        self.a.scale(factor, center);
        self.b.scale(factor, center);
    }
}

//! Immutable bearing in the plane.
//!
//! Canonical storage is degrees in (−180, 180]. Every factory reduces into that
//! range, so `from_degrees(270.0)` and `from_degrees(-90.0)` are the same value.
//!
//! Axis snapping
//! - `sin` is exactly 0 when the canonical value is 0 or 180.
//! - `cos` is exactly 0 when the canonical value is 90 or −90.
//! - The comparison is exact float equality on the canonical value. Repeated
//!   45° steps land on these values bit-exactly because reduction is done in
//!   degree arithmetic before any trig is evaluated.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    degrees: f64,
}

/// Reduce a degree value into (−180, 180].
#[inline]
fn reduce_degrees(value: f64) -> f64 {
    let d = value % 360.0;
    if d <= -180.0 {
        d + 360.0
    } else if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

impl Angle {
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    #[inline]
    pub fn from_degrees(value: f64) -> Self {
        Self {
            degrees: reduce_degrees(value),
        }
    }

    #[inline]
    pub fn from_radians(value: f64) -> Self {
        Self::from_degrees(value.to_degrees())
    }

    /// Bearing of the displacement `(dx, dy)` measured from the +x axis (`atan2`).
    #[inline]
    pub fn from_vector(dx: f64, dy: f64) -> Self {
        Self {
            degrees: reduce_degrees(dy.atan2(dx).to_degrees()),
        }
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    pub fn sin(&self) -> f64 {
        if self.degrees == 0.0 || self.degrees == 180.0 {
            0.0
        } else {
            self.radians().sin()
        }
    }

    pub fn cos(&self) -> f64 {
        if self.degrees == 90.0 || self.degrees == -90.0 {
            0.0
        } else {
            self.radians().cos()
        }
    }

    #[inline]
    pub fn plus(&self, other: Angle) -> Angle {
        Angle::from_degrees(self.degrees + other.degrees)
    }

    #[inline]
    pub fn minus(&self, other: Angle) -> Angle {
        Angle::from_degrees(self.degrees - other.degrees)
    }

    #[inline]
    pub fn multiply(&self, factor: f64) -> Angle {
        Angle::from_degrees(self.degrees * factor)
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        self.plus(rhs)
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        self.minus(rhs)
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::from_degrees(-self.degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_into_half_open_range() {
        assert_eq!(Angle::from_degrees(270.0).degrees(), -90.0);
        assert_eq!(Angle::from_degrees(360.0).degrees(), 0.0);
        assert_eq!(Angle::from_degrees(450.0).degrees(), 90.0);
        assert_eq!(Angle::from_degrees(-180.0).degrees(), 180.0);
        assert_eq!(Angle::from_degrees(540.0).degrees(), 180.0);
    }

    #[test]
    fn axis_values_snap_exactly() {
        assert_eq!(Angle::from_degrees(180.0).sin(), 0.0);
        assert_eq!(Angle::from_degrees(360.0).sin(), 0.0);
        assert_eq!(Angle::from_degrees(90.0).cos(), 0.0);
        assert_eq!(Angle::from_degrees(270.0).cos(), 0.0);
        assert_eq!(Angle::from_degrees(-90.0).cos(), 0.0);
        // unsnapped axis values are exact anyway
        assert_eq!(Angle::from_degrees(90.0).sin(), 1.0);
        assert_eq!(Angle::from_degrees(180.0).cos(), -1.0);
    }

    #[test]
    fn eight_steps_of_45_return_to_zero() {
        let step = Angle::from_degrees(45.0);
        let mut a = Angle::ZERO;
        for _ in 0..8 {
            a = a.plus(step);
        }
        assert_eq!(a.degrees(), 0.0);
        assert_eq!(a.sin(), 0.0);
    }

    #[test]
    fn from_vector_matches_atan2() {
        assert_eq!(Angle::from_vector(0.0, 1.0).degrees(), 90.0);
        assert_eq!(Angle::from_vector(-1.0, 0.0).degrees(), 180.0);
        assert!((Angle::from_vector(1.0, 1.0).degrees() - 45.0).abs() < 1e-12);
        assert!((Angle::from_radians(std::f64::consts::FRAC_PI_4).degrees() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn minus_wraps_across_180() {
        let a = Angle::from_degrees(170.0);
        let b = Angle::from_degrees(-170.0);
        assert!((b.minus(a).degrees() - 20.0).abs() < 1e-12);
        assert!((a.minus(b).degrees() + 20.0).abs() < 1e-12);
        assert!((a.multiply(2.0).degrees() + 20.0).abs() < 1e-12);
    }
}

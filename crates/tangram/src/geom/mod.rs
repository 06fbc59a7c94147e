//! Planar primitives: bearings, positions, displacements, segments.
//!
//! Purpose
//! - Small value types that the shape layer mutates in place.
//! - Trig goes through `Angle::sin/cos`, which snap to exact zero on the axes so
//!   repeated 45° rotations do not accumulate rounding error on axis-aligned edges.
//!
//! Code cross-refs: `shapes::{Polygon, Transformable}`, `puzzle::check`

mod angle;
mod point;
mod segment;

pub use angle::Angle;
pub use point::{Point, Vector};
pub use segment::{Orientation, Segment};

#[cfg(test)]
mod tests;

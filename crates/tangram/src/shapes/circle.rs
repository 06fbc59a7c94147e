use crate::geom::{Angle, Point, Vector};

use super::{Canvas, Color, Transformable};

/// Disc with an open boundary: `contains` is strict.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    color: Color,
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(color: Color, center: Point, radius: f64) -> Self {
        assert!(radius >= 0.0, "circle radius must be non-negative, got {radius}");
        Self {
            color,
            center,
            radius,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        assert!(radius >= 0.0, "circle radius must be non-negative, got {radius}");
        self.radius = radius;
    }

    #[inline]
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) < self.radius
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.color, self.center, self.radius);
    }
}

impl Transformable for Circle {
    #[inline]
    fn center(&self) -> Point {
        self.center
    }

    fn translate(&mut self, v: Vector) {
        self.center.translate(v);
    }

    fn rotate_about(&mut self, center: Point, angle: Angle) {
        self.center.rotate(angle, center);
    }

    fn scale_about(&mut self, center: Point, factor: f64) {
        self.center.scale(factor, center);
        self.radius *= factor.abs();
    }
}

//! Composite shape with an explicit anchor.
//!
//! The anchor is the pivot for interactive rotation. It is stored, never
//! recomputed, and every transform is applied to it in lock-step with the
//! children.

use crate::geom::{Angle, Point, Vector};

use super::{Canvas, Color, Polygon, Shape, Transformable};

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    color: Color,
    children: Vec<Shape>,
    anchor: Point,
}

impl Group {
    /// Anchor defaults to the mean of the children's centers.
    pub fn new(color: Color, children: Vec<Shape>) -> Self {
        assert!(!children.is_empty(), "group needs at least one child");
        let n = children.len() as f64;
        let (sx, sy) = children.iter().fold((0.0, 0.0), |(sx, sy), s| {
            let c = s.center();
            (sx + c.x(), sy + c.y())
        });
        Self::with_anchor(color, children, Point::new(sx / n, sy / n))
    }

    pub fn with_anchor(color: Color, children: Vec<Shape>, anchor: Point) -> Self {
        assert!(!children.is_empty(), "group needs at least one child");
        Self {
            color,
            children,
            anchor,
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
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[inline]
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    /// Mutable access to the children. The anchor is left where it is.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [Shape] {
        &mut self.children
    }

    /// Visible body of a tangram piece (child 0).
    #[inline]
    pub fn body(&self) -> &Shape {
        &self.children[0]
    }

    #[inline]
    pub fn body_polygon(&self) -> Option<&Polygon> {
        self.children[0].as_polygon()
    }

    #[inline]
    pub fn body_polygon_mut(&mut self) -> Option<&mut Polygon> {
        self.children[0].as_polygon_mut()
    }

    /// Pivot handle of a tangram piece (child 1), if present.
    #[inline]
    pub fn pivot(&self) -> Option<&Shape> {
        self.children.get(1)
    }

    pub fn set_center(&mut self, target: Point) {
        let v = Vector::between(self.anchor, target);
        self.translate(v);
    }

    pub fn contains(&self, p: Point) -> bool {
        self.children.iter().any(|s| s.contains(p))
    }

    /// Children draw in order, so later children appear on top.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for s in &self.children {
            s.render(canvas);
        }
    }
}

impl Transformable for Group {
    #[inline]
    fn center(&self) -> Point {
        self.anchor
    }

    fn translate(&mut self, v: Vector) {
        for s in &mut self.children {
            s.translate(v);
        }
        self.anchor.translate(v);
    }

    fn rotate_about(&mut self, center: Point, angle: Angle) {
        for s in &mut self.children {
            s.rotate_about(center, angle);
        }
        self.anchor.rotate(angle, center);
    }

    fn scale_about(&mut self, center: Point, factor: f64) {
        for s in &mut self.children {
            s.scale_about(center, factor);
        }
        self.anchor.scale(factor, center);
    }
}

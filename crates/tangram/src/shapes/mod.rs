//! Shape variants sharing one transform/containment contract.
//!
//! Purpose
//! - `Shape` is a closed enum over `Circle`, `Polygon`, and `Group` (the
//!   recursive variant). All geometry is mutated in place.
//! - Triangles, parallelograms, rectangles and squares are plain `Polygon`s
//!   produced by the free functions in `factory`.
//!
//! Code cross-refs: `geom::{Angle, Point, Vector}`, `puzzle::Scene`

mod circle;
pub mod factory;
mod group;
mod polygon;

use serde::{Deserialize, Serialize};

use crate::geom::{Angle, Point, Vector};

pub use circle::Circle;
pub use group::Group;
pub use polygon::Polygon;

/// In-place rigid and similarity transforms.
pub trait Transformable {
    /// Pivot used by `rotate` and `scale`.
    fn center(&self) -> Point;
    fn translate(&mut self, v: Vector);
    fn rotate_about(&mut self, center: Point, angle: Angle);
    fn scale_about(&mut self, center: Point, factor: f64);

    /// Rotate about `self.center()`.
    fn rotate(&mut self, angle: Angle) {
        let c = self.center();
        self.rotate_about(c, angle);
    }

    /// Scale about `self.center()`.
    fn scale(&mut self, factor: f64) {
        let c = self.center();
        self.scale_about(c, factor);
    }
}

/// Opaque RGB fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PINK: Color = Color::rgb(255, 175, 175);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Render collaborator. Shapes only describe fills; rasterizing is the sink's job.
pub trait Canvas {
    fn fill_polygon(&mut self, color: Color, points: &[Point]);
    fn fill_circle(&mut self, color: Color, center: Point, radius: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Group(Group),
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Circle(c) => c.color(),
            Shape::Polygon(p) => p.color(),
            Shape::Group(g) => g.color(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Shape::Circle(c) => c.set_color(color),
            Shape::Polygon(p) => p.set_color(color),
            Shape::Group(g) => g.set_color(color),
        }
    }

    /// Translate so that `center()` lands on `target`.
    pub fn set_center(&mut self, target: Point) {
        match self {
            Shape::Circle(c) => c.set_center(target),
            Shape::Polygon(p) => p.set_center(target),
            Shape::Group(g) => g.set_center(target),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Circle(c) => c.contains(p),
            Shape::Polygon(poly) => poly.contains(p),
            Shape::Group(g) => g.contains(p),
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        match self {
            Shape::Circle(c) => c.render(canvas),
            Shape::Polygon(p) => p.render(canvas),
            Shape::Group(g) => g.render(canvas),
        }
    }

    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl Transformable for Shape {
    fn center(&self) -> Point {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::Polygon(p) => p.center(),
            Shape::Group(g) => g.center(),
        }
    }

    fn translate(&mut self, v: Vector) {
        match self {
            Shape::Circle(c) => c.translate(v),
            Shape::Polygon(p) => p.translate(v),
            Shape::Group(g) => g.translate(v),
        }
    }

    fn rotate_about(&mut self, center: Point, angle: Angle) {
        match self {
            Shape::Circle(c) => c.rotate_about(center, angle),
            Shape::Polygon(p) => p.rotate_about(center, angle),
            Shape::Group(g) => g.rotate_about(center, angle),
        }
    }

    fn scale_about(&mut self, center: Point, factor: f64) {
        match self {
            Shape::Circle(c) => c.scale_about(center, factor),
            Shape::Polygon(p) => p.scale_about(center, factor),
            Shape::Group(g) => g.scale_about(center, factor),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Group> for Shape {
    fn from(g: Group) -> Self {
        Shape::Group(g)
    }
}

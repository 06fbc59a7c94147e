//! Closed polygon given by its vertex loop.
//!
//! Invariants:
//! - At least three vertices; the edge from the last vertex back to the first is implicit.
//! - Vertex order describes a simple loop (not checked).
//!
//! `center` is the vertex mean, not the area centroid. For the convex tangram
//! pieces the difference is irrelevant to picking and pivoting.

use crate::geom::{Angle, Point, Segment, Vector};

use super::{Canvas, Color, Transformable};

/// x coordinate of the far end of the containment ray. Board coordinates stay far below it.
pub(crate) const RAY_FAR_X: f64 = 1e6;

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    color: Color,
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(color: Color, vertices: Vec<Point>) -> Self {
        assert!(
            vertices.len() >= 3,
            "polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        Self { color, vertices }
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
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn set_vertices(&mut self, vertices: Vec<Point>) {
        assert!(
            vertices.len() >= 3,
            "polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        self.vertices = vertices;
    }

    /// Apply `f` to every vertex in place.
    pub fn map_vertices(&mut self, mut f: impl FnMut(&mut Point)) {
        for v in &mut self.vertices {
            f(v);
        }
    }

    /// Edges of the closed loop, as copies.
    pub fn segments(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    pub fn set_center(&mut self, target: Point) {
        let v = Vector::between(self.center(), target);
        self.translate(v);
    }

    /// Even-odd rule: cast a horizontal ray to `RAY_FAR_X` and count proper crossings.
    pub fn contains(&self, p: Point) -> bool {
        let ray = Segment::new(p, Point::new(RAY_FAR_X, p.y()));
        let crossings = self
            .segments()
            .iter()
            .filter(|s| s.is_colliding(&ray))
            .count();
        crossings % 2 == 1
    }

    /// Shoelace sum; positive when the loop turns counter-clockwise in y-up coordinates.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x() * q.y() - p.y() * q.x()
            })
            .sum();
        twice / 2.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_polygon(self.color, &self.vertices);
    }
}

impl Transformable for Polygon {
    fn center(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
        Point::new(sx / n, sy / n)
    }

    fn translate(&mut self, v: Vector) {
        self.map_vertices(|p| p.translate(v));
    }

    fn rotate_about(&mut self, center: Point, angle: Angle) {
        self.map_vertices(|p| p.rotate(angle, center));
    }

    fn scale_about(&mut self, center: Point, factor: f64) {
        self.map_vertices(|p| p.scale(factor, center));
    }
}

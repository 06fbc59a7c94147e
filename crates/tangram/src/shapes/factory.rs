//! Polygon constructors from a base edge.
//!
//! Every factory starts from the base edge `a → b`, whose bearing orients the
//! construction. Helper points are first laid out along the +x axis and then
//! rotated onto the base; the apex (or far edge) is obtained by a further
//! quarter turn. With screen coordinates (y down) a positive `height` puts the
//! far side to the right of `a → b`; a negative one mirrors it.
//!
//! ```text
//!  parallelogram                        triangle
//!         d ------- c                          c
//!      .         .  |                      .   |      .
//!   .         .   height               .     height        .
//! a ------- b - shift - t - height - t2   a - shift - s - height - s2 ---- b
//! ```

use crate::geom::{Angle, Point, Vector};

use super::{Color, Polygon};

/// Bearing of the base edge `a → b`.
#[inline]
fn base_bearing(a: Point, b: Point) -> Angle {
    Angle::from_vector(b.x() - a.x(), b.y() - a.y())
}

fn assert_base(a: Point, b: Point) {
    let len = a.distance(b);
    assert!(
        len.is_finite() && len > 0.0,
        "base edge {a} -> {b} must have positive finite length"
    );
}

/// Corner opposite the base after shifting `from` by `shift` along the base and
/// rising by `height` off it.
fn raised_corner(from: Point, bearing: Angle, shift: f64, height: f64) -> Point {
    let foot = from
        .translated(Vector::new(shift, 0.0))
        .rotated(bearing, from);
    foot.translated(Vector::new(height, 0.0))
        .rotated(Angle::from_degrees(90.0).plus(bearing), foot)
}

/// Four vertices `[a, b, c, d]`; `c` is raised from `b`, and `d = c - (b - a)`.
pub fn parallelogram(color: Color, a: Point, b: Point, shift: f64, height: f64) -> Polygon {
    assert_base(a, b);
    assert!(shift.is_finite() && height.is_finite());
    let c = raised_corner(b, base_bearing(a, b), shift, height);
    let d = c.translated(Vector::between(a, b).times(-1.0));
    Polygon::new(color, vec![a, b, c, d])
}

/// Parallelogram with zero shift.
pub fn rectangle(color: Color, a: Point, b: Point, height: f64) -> Polygon {
    assert!(height >= 0.0, "rectangle height must be non-negative, got {height}");
    parallelogram(color, a, b, 0.0, height)
}

/// Rectangle whose height is the base length truncated to whole units.
pub fn square(color: Color, a: Point, b: Point) -> Polygon {
    rectangle(color, a, b, a.distance(b).trunc())
}

/// Three vertices `[a, b, c]`; `c` is raised from `a`.
pub fn triangle(color: Color, a: Point, b: Point, shift: f64, height: f64) -> Polygon {
    assert_base(a, b);
    assert!(shift.is_finite() && height.is_finite());
    let c = raised_corner(a, base_bearing(a, b), shift, height);
    Polygon::new(color, vec![a, b, c])
}

/// Right angle at `a`.
pub fn triangle_right_angled(color: Color, a: Point, b: Point, height: f64) -> Polygon {
    triangle(color, a, b, 0.0, height)
}

/// Apex above the midpoint of the base.
pub fn triangle_isosceles(color: Color, a: Point, b: Point, height: f64) -> Polygon {
    triangle(color, a, b, a.distance(b) / 2.0, height)
}

/// Base is the hypotenuse; right angle at the apex.
pub fn triangle_right_isosceles(color: Color, a: Point, b: Point) -> Polygon {
    let half = a.distance(b) / 2.0;
    triangle(color, a, b, half, half)
}

/// Apex on the left of `a → b` (screen coordinates).
pub fn triangle_equilateral(color: Color, a: Point, b: Point) -> Polygon {
    let base = a.distance(b);
    triangle(color, a, b, base / 2.0, -(3f64.sqrt() / 2.0) * base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Transformable;

    fn near(p: Point, x: f64, y: f64) -> bool {
        (p.x() - x).abs() < 1e-9 && (p.y() - y).abs() < 1e-9
    }

    #[test]
    fn square_on_horizontal_base() {
        let sq = square(Color::WHITE, Point::new(250.0, 100.0), Point::new(650.0, 100.0));
        let v = sq.vertices();
        assert_eq!(v.len(), 4);
        assert!(near(v[2], 650.0, 500.0));
        assert!(near(v[3], 250.0, 500.0));
        assert!((sq.area() - 160_000.0).abs() < 1e-6);
    }

    #[test]
    fn right_isosceles_apex() {
        let t = triangle_right_isosceles(Color::RED, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(near(t.vertices()[2], 5.0, 5.0));
        // diagonal base: apex lands on the square corner
        let d = triangle_right_isosceles(Color::RED, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(near(d.vertices()[2], 0.0, 10.0));
        let e = triangle_right_isosceles(Color::RED, Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        assert!(near(e.vertices()[2], 10.0, 0.0));
    }

    #[test]
    fn right_angled_and_isosceles() {
        let t = triangle_right_angled(Color::GREEN, Point::new(450.0, 50.0), Point::new(650.0, 50.0), 200.0);
        assert!(near(t.vertices()[2], 450.0, 250.0));
        let i = triangle_isosceles(Color::GREEN, Point::new(0.0, 0.0), Point::new(8.0, 0.0), 3.0);
        assert!(near(i.vertices()[2], 4.0, 3.0));
    }

    #[test]
    fn equilateral_has_equal_sides_and_negative_winding_side() {
        let t = triangle_equilateral(Color::BLUE, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let c = t.vertices()[2];
        assert!(near(c, 5.0, -(3f64.sqrt() / 2.0) * 10.0));
        for s in t.segments() {
            assert!((s.length() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn parallelogram_vertical_base() {
        let p = parallelogram(
            Color::CYAN,
            Point::new(820.0, 220.0),
            Point::new(820.0, 420.0),
            100.0,
            100.0,
        );
        let v = p.vertices();
        assert!(near(v[2], 720.0, 520.0));
        assert!(near(v[3], 720.0, 320.0));
        assert!(near(p.center(), 770.0, 370.0));
        assert!((p.area() - 20_000.0).abs() < 1e-6);
    }

    #[test]
    fn negative_height_mirrors_parallelogram() {
        let p = parallelogram(
            Color::WHITE,
            Point::new(30.0, 440.0),
            Point::new(590.0, 440.0),
            280.0,
            -280.0,
        );
        let v = p.vertices();
        assert!(near(v[2], 870.0, 160.0));
        assert!(near(v[3], 310.0, 160.0));
    }

    #[test]
    fn rectangle_is_zero_shift_parallelogram() {
        let r = rectangle(Color::WHITE, Point::new(170.0, 160.0), Point::new(730.0, 160.0), 280.0);
        let p = parallelogram(Color::WHITE, Point::new(170.0, 160.0), Point::new(730.0, 160.0), 0.0, 280.0);
        assert_eq!(r, p);
        assert!(near(r.vertices()[2], 730.0, 440.0));
    }

    #[test]
    #[should_panic(expected = "positive finite length")]
    fn degenerate_base_panics() {
        let _ = triangle_right_isosceles(Color::RED, Point::new(1.0, 1.0), Point::new(1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "positive finite length")]
    fn degenerate_parallelogram_base_panics() {
        let p = Point::new(820.0, 220.0);
        let _ = parallelogram(Color::CYAN, p, p, 100.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "positive finite length")]
    fn degenerate_square_base_panics() {
        let _ = square(Color::PINK, Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_rectangle_height_panics() {
        let _ = rectangle(Color::RED, Point::new(0.0, 0.0), Point::new(1.0, 0.0), -1.0);
    }
}

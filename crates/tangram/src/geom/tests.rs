use super::*;
use crate::shapes::Transformable;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(p: Point, q: Point, tol: f64) -> bool {
    (p.x() - q.x()).abs() < tol && (p.y() - q.y()).abs() < tol
}

#[test]
fn crossing_diagonals_collide() {
    let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let t = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
    assert!(s.is_colliding(&t));
    assert!(t.is_colliding(&s));
}

#[test]
fn disjoint_collinear_segments_do_not_collide() {
    let s = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let t = Segment::new(Point::new(2.0, 0.0), Point::new(3.0, 0.0));
    assert!(!s.is_colliding(&t));
}

#[test]
fn separated_parallel_segments_do_not_collide() {
    let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let t = Segment::new(Point::new(0.0, 1.0), Point::new(10.0, 1.0));
    assert!(!s.is_colliding(&t));
}

#[test]
fn orientation_signs() {
    let o = Point::new(0.0, 0.0);
    let x = Point::new(1.0, 0.0);
    assert_eq!(
        Segment::orientation(o, x, Point::new(2.0, 1.0)),
        Orientation::CounterClockwise
    );
    assert_eq!(
        Segment::orientation(o, x, Point::new(2.0, -1.0)),
        Orientation::Clockwise
    );
    assert_eq!(Segment::orientation(o, x, Point::new(5.0, 0.0)).sign(), 0);
    assert_eq!(Orientation::Clockwise.sign(), -1);
    assert_eq!(Orientation::CounterClockwise.sign(), 1);
}

#[test]
fn segment_copies_its_endpoints() {
    let mut a = Point::new(1.0, 2.0);
    let b = Point::new(3.0, 4.0);
    let mut s = Segment::new(a, b);
    a.translate(Vector::new(100.0, 0.0));
    assert_eq!(s.a(), Point::new(1.0, 2.0));
    s.translate(Vector::new(0.0, 1.0));
    assert_eq!(a, Point::new(101.0, 2.0));
    assert_eq!(b, Point::new(3.0, 4.0));
    assert_eq!(s.b(), Point::new(3.0, 5.0));
}

#[test]
fn segment_rotates_about_its_midpoint() {
    let mut s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    s.rotate(Angle::from_degrees(90.0));
    assert_eq!(s.a(), Point::new(5.0, -5.0));
    assert_eq!(s.b(), Point::new(5.0, 5.0));
    s.scale(0.5);
    assert_eq!(s.length(), 5.0);
}

#[test]
fn point_rotation_quarter_turn_is_exact() {
    let mut p = Point::new(3.0, 0.0);
    p.rotate(Angle::from_degrees(90.0), Point::ORIGIN);
    assert_eq!(p, Point::new(0.0, 3.0));
    p.rotate(Angle::from_degrees(90.0), Point::ORIGIN);
    assert_eq!(p, Point::new(-3.0, 0.0));
}

#[test]
fn point_scale_is_homothety() {
    let mut p = Point::new(4.0, 6.0);
    p.scale(0.5, Point::new(2.0, 2.0));
    assert_eq!(p, Point::new(3.0, 4.0));
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn vector_constructors() {
    let v = Vector::between(Point::new(1.0, 1.0), Point::new(4.0, -3.0));
    assert_eq!((v.dx(), v.dy()), (3.0, -4.0));
    assert_eq!(v.length(), 5.0);
    let w = Vector::from_point(Point::new(2.0, 5.0));
    assert_eq!(v.plus(w), Vector::new(5.0, 1.0));
    assert_eq!(w.times(-1.0), Vector::new(-2.0, -5.0));
}

#[test]
fn eight_45_degree_rotations_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let step = Angle::from_degrees(45.0);
    for _ in 0..32 {
        let start = Point::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        let center = Point::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        let mut p = start;
        for _ in 0..8 {
            p.rotate(step, center);
        }
        assert!(close(p, start, 1e-9), "{p} drifted from {start}");
    }
}

proptest! {
    #[test]
    fn trig_is_periodic(d in -1080.0f64..1080.0) {
        let a = Angle::from_degrees(d);
        let b = Angle::from_degrees(d + 360.0);
        prop_assert!((a.sin() - b.sin()).abs() < 1e-9);
        prop_assert!((a.cos() - b.cos()).abs() < 1e-9);
    }

    #[test]
    fn integral_axis_degrees_snap(k in -8i32..8) {
        let d = 90.0 * k as f64;
        let a = Angle::from_degrees(d);
        if k % 2 == 0 {
            prop_assert_eq!(a.sin(), 0.0);
        } else {
            prop_assert_eq!(a.cos(), 0.0);
        }
    }

    #[test]
    fn translate_then_inverse_restores(
        x in -1e4f64..1e4, y in -1e4f64..1e4,
        dx in -1e4f64..1e4, dy in -1e4f64..1e4,
    ) {
        let start = Point::new(x, y);
        let v = Vector::new(dx, dy);
        let mut p = start;
        p.translate(v);
        p.translate(v.times(-1.0));
        prop_assert!(close(p, start, 1e-9));
    }

    #[test]
    fn full_turn_restores(
        x in -1e3f64..1e3, y in -1e3f64..1e3,
        cx in -1e3f64..1e3, cy in -1e3f64..1e3,
    ) {
        let start = Point::new(x, y);
        let mut p = start;
        p.rotate(Angle::from_degrees(360.0), Point::new(cx, cy));
        prop_assert!(close(p, start, 1e-9));
    }

    #[test]
    fn collision_is_symmetric(
        ax in -10.0f64..10.0, ay in -10.0f64..10.0, bx in -10.0f64..10.0, by in -10.0f64..10.0,
        cx in -10.0f64..10.0, cy in -10.0f64..10.0, dx in -10.0f64..10.0, dy in -10.0f64..10.0,
    ) {
        let s = Segment::new(Point::new(ax, ay), Point::new(bx, by));
        let t = Segment::new(Point::new(cx, cy), Point::new(dx, dy));
        prop_assert_eq!(s.is_colliding(&t), t.is_colliding(&s));
    }
}

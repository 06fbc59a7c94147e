//! Fixed board data: the four target outlines and the seven pieces.
//!
//! Coordinates are screen pixels (y down) on a 900×600 board. A piece is a
//! `Group` of `[body polygon, pivot circle]`; the pivot sits on the anchor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::shapes::factory::{
    parallelogram, rectangle, square, triangle_right_angled, triangle_right_isosceles,
};
use crate::shapes::{Circle, Color, Group, Polygon, Transformable};

use super::TangramCfg;

const BIG_TRIANGLE_BASE: f64 = 400.0;
const MEDIUM_TRIANGLE_SIDE: f64 = 200.0;
const SMALL_TRIANGLE_BASE: f64 = 200.0;
const SQUARE_BASE: f64 = 140.0;
const PARALLELOGRAM_BASE: f64 = 200.0;
const PARALLELOGRAM_SHIFT: f64 = 100.0;
const PARALLELOGRAM_HEIGHT: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKind {
    Square,
    Triangle,
    Rectangle,
    Parallelogram,
}

impl OutlineKind {
    pub const ALL: [OutlineKind; 4] = [
        OutlineKind::Square,
        OutlineKind::Triangle,
        OutlineKind::Rectangle,
        OutlineKind::Parallelogram,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutlineKind::Square => "square",
            OutlineKind::Triangle => "triangle",
            OutlineKind::Rectangle => "rectangle",
            OutlineKind::Parallelogram => "parallelogram",
        }
    }
}

impl fmt::Display for OutlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutlineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutlineKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown outline '{s}'"))
    }
}

/// White target polygon for `kind`.
pub fn outline(kind: OutlineKind) -> Polygon {
    let white = Color::WHITE;
    match kind {
        OutlineKind::Square => square(white, Point::new(250.0, 100.0), Point::new(650.0, 100.0)),
        OutlineKind::Rectangle => rectangle(
            white,
            Point::new(170.0, 160.0),
            Point::new(730.0, 160.0),
            280.0,
        ),
        OutlineKind::Triangle => {
            triangle_right_isosceles(white, Point::new(50.0, 100.0), Point::new(850.0, 100.0))
        }
        OutlineKind::Parallelogram => parallelogram(
            white,
            Point::new(30.0, 440.0),
            Point::new(590.0, 440.0),
            280.0,
            -280.0,
        ),
    }
}

/// Outlines in their initial stacking order (active first).
pub fn initial_outlines() -> Vec<(OutlineKind, Polygon)> {
    [
        OutlineKind::Square,
        OutlineKind::Rectangle,
        OutlineKind::Triangle,
        OutlineKind::Parallelogram,
    ]
    .into_iter()
    .map(|k| (k, outline(k)))
    .collect()
}

/// Wrap `body` into a piece. Without an explicit anchor the pivot sits on the body center.
pub fn make_piece(body: Polygon, anchor: Option<Point>, pivot_radius: f64) -> Group {
    let color = body.color();
    let pivot_at = anchor.unwrap_or_else(|| body.center());
    let pivot = Circle::new(Color::BLACK, pivot_at, pivot_radius);
    let children = vec![body.into(), pivot.into()];
    match anchor {
        Some(a) => Group::with_anchor(color, children, a),
        None => Group::new(color, children),
    }
}

/// The seven pieces, front-to-back, at their starting positions.
pub fn initial_pieces(cfg: &TangramCfg) -> Vec<Group> {
    let r = cfg.pivot_radius;
    let p = Point::new;
    vec![
        make_piece(
            triangle_right_isosceles(Color::RED, p(20.0, 50.0), p(20.0 + BIG_TRIANGLE_BASE, 50.0)),
            Some(p(220.0, 120.0)),
            r,
        ),
        make_piece(
            triangle_right_isosceles(Color::BLUE, p(20.0, 300.0), p(20.0 + BIG_TRIANGLE_BASE, 300.0)),
            Some(p(220.0, 370.0)),
            r,
        ),
        make_piece(
            triangle_right_angled(
                Color::GREEN,
                p(450.0, 50.0),
                p(450.0 + MEDIUM_TRIANGLE_SIDE, 50.0),
                MEDIUM_TRIANGLE_SIDE,
            ),
            Some(p(520.0, 120.0)),
            r,
        ),
        make_piece(
            triangle_right_isosceles(
                Color::MAGENTA,
                p(450.0, 300.0),
                p(450.0 + SMALL_TRIANGLE_BASE, 300.0),
            ),
            Some(p(550.0, 330.0)),
            r,
        ),
        make_piece(
            triangle_right_isosceles(
                Color::YELLOW,
                p(450.0, 450.0),
                p(450.0 + SMALL_TRIANGLE_BASE, 450.0),
            ),
            Some(p(550.0, 480.0)),
            r,
        ),
        make_piece(
            square(Color::PINK, p(680.0, 50.0), p(680.0 + SQUARE_BASE, 50.0)),
            None,
            r,
        ),
        make_piece(
            parallelogram(
                Color::CYAN,
                p(820.0, 220.0),
                p(820.0, 220.0 + PARALLELOGRAM_BASE),
                PARALLELOGRAM_SHIFT,
                PARALLELOGRAM_HEIGHT,
            ),
            None,
            r,
        ),
    ]
}

/// One tiling of the square outline, as target body vertices.
///
/// The parallelogram piece is chiral, so the lower-right half is laid out in
/// the orientation reachable by rotation alone.
pub fn square_solution() -> Vec<Vec<Point>> {
    let p = Point::new;
    vec![
        // big triangles: top and left quarters
        vec![p(250.0, 100.0), p(650.0, 100.0), p(450.0, 300.0)],
        vec![p(250.0, 500.0), p(250.0, 100.0), p(450.0, 300.0)],
        // medium triangle in the lower-right corner
        vec![p(650.0, 300.0), p(650.0, 500.0), p(450.0, 500.0)],
        // small triangles
        vec![p(450.0, 300.0), p(550.0, 400.0), p(550.0, 200.0)],
        vec![p(250.0, 500.0), p(450.0, 500.0), p(350.0, 400.0)],
        // square, standing on a corner
        vec![p(350.0, 400.0), p(450.0, 500.0), p(550.0, 400.0), p(450.0, 300.0)],
        // parallelogram along the right edge
        vec![p(650.0, 100.0), p(550.0, 200.0), p(550.0, 400.0), p(650.0, 300.0)],
    ]
}

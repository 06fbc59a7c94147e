//! Completion check: do the piece bodies exactly cover the target outline?
//!
//! Exact tiling puts piece vertices on the outline boundary and piece edges on
//! top of each other, which is where the even-odd containment test and the
//! proper-intersection test are unreliable. The check therefore:
//! 1. shrinks every body about its own center by `shrink_factor`,
//! 2. requires every body vertex to lie inside the outline,
//! 3. requires that no edge of one body properly crosses an edge of another,
//! 4. scales every body by `regrow_factor` and snaps its vertices to the grid.
//!
//! Steps 1 and 4 mutate the live pieces. Because `regrow_factor` is not the
//! exact reciprocal of `shrink_factor`, each run leaves bodies smaller by a
//! factor `shrink_factor * regrow_factor` until the grid snap absorbs it.

use tracing::debug;

use crate::geom::Point;
use crate::shapes::{Group, Polygon, Transformable};

use super::TangramCfg;

/// Round each coordinate to the nearest multiple of `step` (ties toward +∞).
#[inline]
pub fn snap(value: f64, step: f64) -> f64 {
    (value / step + 0.5).floor() * step
}

/// Snap every vertex of `polygon` to the grid.
pub fn align_to_grid(polygon: &mut Polygon, step: f64) {
    assert!(step > 0.0, "grid step must be positive, got {step}");
    polygon.map_vertices(|p| *p = Point::new(snap(p.x(), step), snap(p.y(), step)));
}

fn bodies_mut(pieces: &mut [Group]) -> impl Iterator<Item = &mut Polygon> {
    pieces.iter_mut().filter_map(Group::body_polygon_mut)
}

/// Scale every body about its own center.
pub fn scale_bodies(pieces: &mut [Group], factor: f64) {
    for body in bodies_mut(pieces) {
        body.scale(factor);
    }
}

/// Number of body vertices not strictly inside `outline`.
pub fn stray_vertices(outline: &Polygon, pieces: &[Group]) -> usize {
    pieces
        .iter()
        .filter_map(Group::body_polygon)
        .flat_map(|b| b.vertices().iter())
        .filter(|v| !outline.contains(**v))
        .count()
}

/// Number of crossing edge pairs between distinct bodies.
///
/// Each unordered pair of bodies is visited once; `Segment::is_colliding` is symmetric.
pub fn crossing_edges(pieces: &[Group]) -> usize {
    let edges: Vec<_> = pieces
        .iter()
        .filter_map(Group::body_polygon)
        .map(Polygon::segments)
        .collect();
    let mut hits = 0;
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            for s in &edges[i] {
                hits += edges[j].iter().filter(|t| s.is_colliding(t)).count();
            }
        }
    }
    hits
}

/// Run the full check. Pieces whose body is not a polygon do not take part.
pub fn check_completion(outline: &Polygon, pieces: &mut [Group], cfg: &TangramCfg) -> bool {
    scale_bodies(pieces, cfg.shrink_factor);

    let stray = stray_vertices(outline, pieces);
    let crossings = crossing_edges(pieces);

    scale_bodies(pieces, cfg.regrow_factor);
    for body in bodies_mut(pieces) {
        align_to_grid(body, cfg.grid_step);
    }

    let complete = stray == 0 && crossings == 0;
    debug!(stray, crossings, complete, "completion check");
    complete
}

//! Place pieces onto known target bodies by rigid moves only.
//!
//! Each target is matched to an unused piece with the same edge-length
//! signature, then the piece is turned in rotation steps about its anchor and
//! translated so the body centers coincide. Used for solved fixtures and the
//! headless `check --solved` run.

use tracing::debug;

use crate::geom::{Angle, Point, Vector};
use crate::shapes::{Group, Polygon, Transformable};

/// Largest vertex mismatch (pixels) still accepted as a fit. The 140 px square
/// piece stands in for the ideal 141.4 px one.
pub const FIT_TOLERANCE: f64 = 2.0;

/// Upper bound on the rotations tried per piece (one-degree steps).
pub(crate) const MAX_TURNS: u32 = 360;

fn sorted_edge_lengths(vertices: &[Point]) -> Vec<f64> {
    let n = vertices.len();
    let mut lens: Vec<f64> = (0..n)
        .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
        .collect();
    lens.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    lens
}

/// Max over `ours` of the distance to the nearest vertex of `theirs`.
fn vertex_mismatch(ours: &[Point], theirs: &[Point]) -> f64 {
    ours.iter()
        .map(|p| {
            theirs
                .iter()
                .map(|q| p.distance(*q))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

fn signature_gap(body: &Polygon, target: &[Point]) -> Option<f64> {
    if body.vertices().len() != target.len() {
        return None;
    }
    let a = sorted_edge_lengths(body.vertices());
    let b = sorted_edge_lengths(target);
    Some(
        a.iter()
            .zip(&b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max),
    )
}

/// Best turn count `k` (rotation by `k * step`) and the resulting mismatch.
fn best_turn(piece: &Group, target: &[Point], step: Angle) -> Option<(u32, f64)> {
    let body = piece.body_polygon()?;
    let target_center = Polygon::new(body.color(), target.to_vec()).center();
    if !(step.degrees() > 0.0) {
        return None;
    }
    let turns = (360.0 / step.degrees()).round().clamp(1.0, MAX_TURNS as f64) as u32;
    (0..turns)
        .map(|k| {
            let mut trial = body.clone();
            trial.rotate_about(piece.anchor(), step.multiply(k as f64));
            trial.set_center(target_center);
            (k, vertex_mismatch(trial.vertices(), target))
        })
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Move `piece` so that its body lands on `target`. Returns the mismatch, or
/// `None` when no rotation fits within `FIT_TOLERANCE`.
pub fn place(piece: &mut Group, target: &[Point], step: Angle) -> Option<f64> {
    let (k, mismatch) = best_turn(piece, target, step)?;
    if mismatch > FIT_TOLERANCE {
        return None;
    }
    piece.rotate(step.multiply(k as f64));
    let body = piece.body_polygon()?;
    let target_center = Polygon::new(body.color(), target.to_vec()).center();
    let delta = Vector::between(body.center(), target_center);
    piece.translate(delta);
    debug!(turns = k, mismatch, "piece placed");
    Some(mismatch)
}

/// Assign each target to a distinct piece and place it. Returns the chosen
/// piece index per target, or `None` if some target has no fitting piece.
///
/// Placement runs on a copy; `pieces` is only updated when every target fits.
pub fn arrange(pieces: &mut [Group], targets: &[Vec<Point>], step: Angle) -> Option<Vec<usize>> {
    let mut work = pieces.to_vec();
    let mut used = vec![false; work.len()];
    let mut assignment = Vec::with_capacity(targets.len());
    for target in targets {
        let (index, _) = work
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .filter_map(|(i, g)| Some((i, signature_gap(g.body_polygon()?, target)?)))
            .filter(|(_, gap)| *gap <= FIT_TOLERANCE)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;
        place(&mut work[index], target, step)?;
        used[index] = true;
        assignment.push(index);
    }
    pieces.clone_from_slice(&work);
    Some(assignment)
}

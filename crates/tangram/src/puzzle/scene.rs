//! Explicitly owned puzzle state.
//!
//! Ordering
//! - `outlines[0]` is the active target.
//! - `pieces` are stored front-to-back: index 0 is the top-most piece and the
//!   one that interactive transforms apply to.

use tracing::{debug, info};

use crate::geom::{Angle, Point, Vector};
use crate::shapes::{Canvas, Color, Group, Polygon, Transformable};

use super::check::{align_to_grid, check_completion};
use super::layout::{initial_outlines, initial_pieces, OutlineKind};
use super::TangramCfg;

#[derive(Clone, Debug)]
pub struct Scene {
    cfg: TangramCfg,
    outlines: Vec<(OutlineKind, Polygon)>,
    pieces: Vec<Group>,
    selected: Option<usize>,
    complete: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(TangramCfg::default())
    }
}

impl Scene {
    /// Board with the standard outlines and pieces.
    pub fn new(cfg: TangramCfg) -> Self {
        let pieces = initial_pieces(&cfg);
        Self::with_layout(cfg, initial_outlines(), pieces)
    }

    pub fn with_layout(
        cfg: TangramCfg,
        outlines: Vec<(OutlineKind, Polygon)>,
        pieces: Vec<Group>,
    ) -> Self {
        cfg.assert_valid();
        assert!(!outlines.is_empty(), "scene needs at least one outline");
        Self {
            cfg,
            outlines,
            pieces,
            selected: None,
            complete: false,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &TangramCfg {
        &self.cfg
    }

    #[inline]
    pub fn active_outline(&self) -> &Polygon {
        &self.outlines[0].1
    }

    #[inline]
    pub fn active_kind(&self) -> OutlineKind {
        self.outlines[0].0
    }

    pub fn outline(&self, kind: OutlineKind) -> Option<&Polygon> {
        self.outlines.iter().find(|(k, _)| *k == kind).map(|(_, p)| p)
    }

    #[inline]
    pub fn outlines(&self) -> impl Iterator<Item = (OutlineKind, &Polygon)> {
        self.outlines.iter().map(|(k, p)| (*k, p))
    }

    /// Move `kind` to the front of the outline stack. Returns false if unknown.
    pub fn select_outline(&mut self, kind: OutlineKind) -> bool {
        match self.outlines.iter().position(|(k, _)| *k == kind) {
            Some(i) => {
                let entry = self.outlines.remove(i);
                self.outlines.insert(0, entry);
                debug!(outline = %kind, "outline selected");
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn pieces(&self) -> &[Group] {
        &self.pieces
    }

    #[inline]
    pub fn pieces_mut(&mut self) -> &mut [Group] {
        &mut self.pieces
    }

    #[inline]
    pub fn front_piece(&self) -> Option<&Group> {
        self.pieces.first()
    }

    #[inline]
    pub fn front_piece_mut(&mut self) -> Option<&mut Group> {
        self.pieces.first_mut()
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Index of the top-most piece whose body contains `p`.
    pub fn pick(&self, p: Point) -> Option<usize> {
        self.pieces.iter().position(|g| g.body().contains(p))
    }

    /// Move piece `index` to the front; it becomes the selection.
    pub fn bring_to_front(&mut self, index: usize) {
        let piece = self.pieces.remove(index);
        self.pieces.insert(0, piece);
        self.selected = Some(0);
    }

    pub fn translate_front(&mut self, v: Vector) {
        if let Some(g) = self.pieces.first_mut() {
            g.translate(v);
            debug!(dx = v.dx(), dy = v.dy(), "front piece translated");
        }
    }

    /// Rotate the front piece about its anchor.
    pub fn rotate_front(&mut self, angle: Angle) {
        if let Some(g) = self.pieces.first_mut() {
            g.rotate(angle);
            debug!(degrees = angle.degrees(), "front piece rotated");
        }
    }

    /// Snap the front piece body to the grid.
    pub fn align_front(&mut self) {
        let step = self.cfg.grid_step;
        if let Some(body) = self.pieces.first_mut().and_then(Group::body_polygon_mut) {
            align_to_grid(body, step);
        }
    }

    /// Run the completion check against the active outline and store the result.
    pub fn check_completion(&mut self) -> bool {
        let outline = &self.outlines[0].1;
        let complete = check_completion(outline, &mut self.pieces, &self.cfg);
        if complete && !self.complete {
            info!(outline = %self.outlines[0].0, "puzzle complete");
        }
        self.complete = complete;
        complete
    }

    /// Result of the last completion check.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn background(&self) -> Color {
        if self.complete {
            self.cfg.win_background
        } else {
            self.cfg.background
        }
    }

    /// Paint order: active outline, then pieces from back to front.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.active_outline().render(canvas);
        for piece in self.pieces.iter().rev() {
            piece.render(canvas);
        }
    }
}

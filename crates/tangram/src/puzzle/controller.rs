//! Pointer and outline-selection handling.
//!
//! The controller owns only the drag reference point; all geometry lives in the
//! `Scene`. Every handler returns whether the scene changed, so the caller can
//! signal a redraw after the whole mutation batch.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geom::{Angle, Point, Vector};
use crate::shapes::Transformable;

use super::layout::OutlineKind;
use super::Scene;

/// Input from the UI collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Press(Point),
    Drag(Point),
    Release(Point),
    SelectOutline { outline: OutlineKind },
}

#[derive(Clone, Debug, Default)]
pub struct Controller {
    /// Pointer position the current drag is measured from.
    press: Option<Point>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn press_position(&self) -> Option<Point> {
        self.press
    }

    pub fn handle(&mut self, scene: &mut Scene, event: Event) -> bool {
        match event {
            Event::Press(p) => self.press(scene, p),
            Event::Drag(p) => self.drag(scene, p),
            Event::Release(p) => self.release(scene, p),
            Event::SelectOutline { outline } => self.select_outline(scene, outline),
        }
    }

    /// Select the top-most piece under `p` and bring it to the front.
    pub fn press(&mut self, scene: &mut Scene, p: Point) -> bool {
        self.press = Some(p);
        match scene.pick(p) {
            Some(i) => {
                scene.bring_to_front(i);
                debug!(index = i, x = p.x(), y = p.y(), "piece picked");
                true
            }
            None => {
                scene.clear_selection();
                false
            }
        }
    }

    /// Translate when the press started on the pivot handle, rotate otherwise.
    pub fn drag(&mut self, scene: &mut Scene, p: Point) -> bool {
        let (Some(sel), Some(start)) = (scene.selected(), self.press) else {
            return false;
        };
        let piece = &scene.pieces()[sel];
        let on_pivot = piece.pivot().is_some_and(|h| h.contains(start));
        if on_pivot {
            self.drag_translate(scene, start, p)
        } else {
            let center = piece.body().center();
            self.drag_rotate(scene, start, p, center)
        }
    }

    fn drag_translate(&mut self, scene: &mut Scene, start: Point, p: Point) -> bool {
        let step = scene.cfg().grid_step;
        let dx = (p.x() - start.x()).trunc();
        let dy = (p.y() - start.y()).trunc();
        if dx.abs() <= step && dy.abs() <= step {
            return false;
        }
        let dx = (dx / step).trunc() * step;
        let dy = (dy / step).trunc() * step;
        scene.translate_front(Vector::new(dx, dy));
        self.press = Some(Point::new(
            (start.x() + dx).trunc(),
            (start.y() + dy).trunc(),
        ));
        true
    }

    fn drag_rotate(&mut self, scene: &mut Scene, start: Point, p: Point, center: Point) -> bool {
        let step = scene.cfg().rotation_step();
        let from = Angle::from_vector(start.x() - center.x(), start.y() - center.y());
        let to = Angle::from_vector(p.x() - center.x(), p.y() - center.y());
        let delta = to.minus(from);
        trace!(delta = delta.degrees(), "drag rotate");
        if delta.degrees().abs() < step.degrees() {
            return false;
        }
        let turn = if delta.degrees() < 0.0 { -step } else { step };
        scene.rotate_front(turn);
        self.press = Some(p);
        true
    }

    /// Snap the front piece to the grid and re-check the puzzle.
    pub fn release(&mut self, scene: &mut Scene, _p: Point) -> bool {
        scene.align_front();
        scene.check_completion();
        true
    }

    pub fn select_outline(&mut self, scene: &mut Scene, kind: OutlineKind) -> bool {
        if !scene.select_outline(kind) {
            return false;
        }
        scene.check_completion();
        true
    }
}

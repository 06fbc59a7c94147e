//! Render list and redraw loop.
//!
//! Purpose
//! - `DrawList` is the flat paint order handed to a UI or file sink: background,
//!   the active outline, then pieces from back to front so the front piece
//!   paints last.
//! - `SharedScene` couples the scene with a dirty flag. Writers mutate under the
//!   write lock and raise the flag only after the lock is released, so a reader
//!   never observes a half-applied transform.
//! - `RenderLoop` polls the flag at a fixed cadence and never mutates the scene.
//!
//! Code cross-refs: `puzzle::{Scene, Controller}`, `shapes::Canvas`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geom::Point;
use crate::puzzle::{Controller, Event, Scene};
use crate::shapes::{Canvas, Color};

/// About 60 frames per second.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_micros(16_667);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Polygon { color: Color, points: Vec<Point> },
    Circle { color: Color, center: Point, radius: f64 },
}

/// One frame: board size, background, and fills in paint order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub complete: bool,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Snapshot of `scene` in paint order.
    pub fn capture(scene: &Scene) -> Self {
        let cfg = scene.cfg();
        let mut list = Self {
            width: cfg.board_width,
            height: cfg.board_height,
            background: scene.background(),
            complete: scene.is_complete(),
            commands: Vec::new(),
        };
        scene.render(&mut list);
        list
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Paint the recorded fills onto another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Polygon { color, points } => canvas.fill_polygon(*color, points),
                DrawCommand::Circle {
                    color,
                    center,
                    radius,
                } => canvas.fill_circle(*color, *center, *radius),
            }
        }
    }
}

impl Canvas for DrawList {
    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        self.commands.push(DrawCommand::Polygon {
            color,
            points: points.to_vec(),
        });
    }

    fn fill_circle(&mut self, color: Color, center: Point, radius: f64) {
        self.commands.push(DrawCommand::Circle {
            color,
            center,
            radius,
        });
    }
}

/// "Needs redraw" flag. Starts raised so the first frame is always drawn.
#[derive(Debug)]
pub struct RedrawSignal {
    dirty: AtomicBool,
}

impl Default for RedrawSignal {
    fn default() -> Self {
        Self {
            dirty: AtomicBool::new(true),
        }
    }
}

impl RedrawSignal {
    #[inline]
    pub fn raise(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Clear the flag, returning whether it was raised.
    #[inline]
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

/// Scene shared between one writer and the render thread.
#[derive(Debug)]
pub struct SharedScene {
    scene: RwLock<Scene>,
    signal: RedrawSignal,
}

impl SharedScene {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene: RwLock::new(scene),
            signal: RedrawSignal::default(),
        }
    }

    /// Read access. A writer that panicked leaves the last fully written state.
    pub fn read(&self) -> RwLockReadGuard<'_, Scene> {
        self.scene.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn signal(&self) -> &RedrawSignal {
        &self.signal
    }

    /// Mutate under the write lock, then raise the redraw flag.
    pub fn update<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> R {
        let out = {
            let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut scene)
        };
        self.signal.raise();
        out
    }

    /// Feed one event through `controller`; raises the flag only if the scene changed.
    pub fn dispatch(&self, controller: &mut Controller, event: Event) -> bool {
        let changed = {
            let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
            controller.handle(&mut scene, event)
        };
        if changed {
            self.signal.raise();
        }
        changed
    }

    /// Draw list for the current state if a redraw is pending.
    pub fn take_frame(&self) -> Option<DrawList> {
        if !self.signal.take() {
            return None;
        }
        Some(DrawList::capture(&self.read()))
    }
}

/// Fixed-cadence render thread.
pub struct RenderLoop {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<u64>>,
}

impl RenderLoop {
    /// Poll `shared` every `period` and pass pending frames to `sink`.
    pub fn spawn<F>(shared: Arc<SharedScene>, period: Duration, mut sink: F) -> Self
    where
        F: FnMut(DrawList) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let mut frames = 0u64;
            loop {
                if let Some(frame) = shared.take_frame() {
                    frames += 1;
                    trace!(frames, commands = frame.commands.len(), "frame");
                    sink(frame);
                }
                // a pending redraw is flushed before honoring stop
                if flag.load(Ordering::Acquire) {
                    break frames;
                }
                thread::sleep(period);
            }
        });
        debug!(period_us = period.as_micros() as u64, "render loop started");
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the thread and return the number of frames drawn.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.stop.store(true, Ordering::Release);
        let frames = match self.handle.take() {
            Some(h) => h.join().unwrap_or(0),
            None => return 0,
        };
        debug!(frames, "render loop stopped");
        frames
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn last_polygon_color(list: &DrawList) -> Option<Color> {
        list.commands().iter().rev().find_map(|c| match c {
            DrawCommand::Polygon { color, .. } => Some(*color),
            DrawCommand::Circle { .. } => None,
        })
    }

    #[test]
    fn paint_order_puts_outline_first_and_front_piece_last() {
        let scene = Scene::default();
        let list = DrawList::capture(&scene);
        assert_eq!(list.commands().len(), 1 + 7 * 2);
        match &list.commands()[0] {
            DrawCommand::Polygon { color, points } => {
                assert_eq!(*color, Color::WHITE);
                assert_eq!(points.len(), 4);
            }
            other => panic!("expected outline, got {other:?}"),
        }
        // back-most piece (cyan parallelogram) right after the outline
        assert!(matches!(
            &list.commands()[1],
            DrawCommand::Polygon { color, .. } if *color == Color::CYAN
        ));
        assert_eq!(last_polygon_color(&list), Some(Color::RED));
        assert!(matches!(
            list.commands().last(),
            Some(DrawCommand::Circle { color, .. }) if *color == Color::BLACK
        ));
        assert_eq!(list.background, Color::LIGHT_GRAY);
        assert!(!list.complete);
    }

    #[test]
    fn replay_matches_direct_render() {
        let scene = Scene::default();
        let list = DrawList::capture(&scene);
        let mut copy = DrawList {
            commands: Vec::new(),
            ..list.clone()
        };
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }

    #[test]
    fn draw_list_serializes_tagged_commands() {
        let list = DrawList::capture(&Scene::default());
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["commands"][0]["kind"], "polygon");
        assert_eq!(json["commands"][2]["kind"], "circle");
        let back: DrawList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn signal_is_taken_once() {
        let s = RedrawSignal::default();
        assert!(s.is_raised());
        assert!(s.take());
        assert!(!s.take());
        s.raise();
        assert!(s.take());
    }

    #[test]
    fn dispatch_raises_only_on_change() {
        let shared = SharedScene::new(Scene::default());
        let mut ctl = Controller::new();
        assert!(shared.take_frame().is_some());
        assert!(shared.take_frame().is_none());

        assert!(!shared.dispatch(&mut ctl, Event::Press(Point::new(5.0, 590.0))));
        assert!(shared.take_frame().is_none());

        assert!(shared.dispatch(&mut ctl, Event::Press(Point::new(550.0, 330.0))));
        let frame = shared.take_frame().expect("redraw pending");
        assert_eq!(last_polygon_color(&frame), Some(Color::MAGENTA));
    }

    #[test]
    fn update_raises_after_write() {
        let shared = SharedScene::new(Scene::default());
        shared.signal().take();
        let n = shared.update(|scene| {
            scene.bring_to_front(6);
            scene.pieces().len()
        });
        assert_eq!(n, 7);
        assert!(shared.signal().is_raised());
        assert_eq!(shared.read().front_piece().map(|g| g.color()), Some(Color::CYAN));
    }

    #[test]
    fn render_loop_delivers_frames_until_stopped() {
        let shared = Arc::new(SharedScene::new(Scene::default()));
        let (tx, rx) = mpsc::channel();
        let render = RenderLoop::spawn(Arc::clone(&shared), Duration::from_millis(1), move |f| {
            let _ = tx.send(f);
        });

        let first = rx.recv_timeout(Duration::from_secs(5)).expect("initial frame");
        assert_eq!(last_polygon_color(&first), Some(Color::RED));

        let mut ctl = Controller::new();
        shared.dispatch(&mut ctl, Event::Press(Point::new(550.0, 330.0)));
        let next = rx.recv_timeout(Duration::from_secs(5)).expect("frame after press");
        assert_eq!(last_polygon_color(&next), Some(Color::MAGENTA));

        assert!(render.stop() >= 2);
    }
}

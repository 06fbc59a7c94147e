//! Scripted pointer sessions.
//!
//! A script is a JSON document
//! `{"events": [{"event": "press", "x": 550, "y": 330}, ...]}` using the same
//! tagged encoding as `tangram::api::Event`. Replay runs the events through a
//! `Controller` against a `SharedScene` while a `RenderLoop` draws frames, the
//! same arrangement an interactive front end would use.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tangram::api::{Controller, Event, RenderLoop, Scene, SharedScene};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<Event>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading script {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing script {}", path.display()))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub changed: usize,
    pub frames: u64,
    pub outline: String,
    pub complete: bool,
}

/// Replay `script` on `scene` and return the final scene with a summary.
pub fn replay(scene: Scene, script: &Script, frame_period: Duration) -> (Scene, ReplaySummary) {
    let shared = Arc::new(SharedScene::new(scene));
    let render = RenderLoop::spawn(Arc::clone(&shared), frame_period, |_frame| {});
    let mut controller = Controller::new();
    let mut changed = 0;
    for (i, event) in script.events.iter().enumerate() {
        if shared.dispatch(&mut controller, *event) {
            changed += 1;
        }
        tracing::debug!(index = i, ?event, "event replayed");
    }
    let frames = render.stop();
    let scene = shared.read().clone();
    let summary = ReplaySummary {
        events: script.events.len(),
        changed,
        frames,
        outline: scene.active_kind().to_string(),
        complete: scene.is_complete(),
    };
    (scene, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangram::api::{OutlineKind, Point};
    use tempfile::tempdir;

    #[test]
    fn load_reports_path_on_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"events\": [{\"event\": \"wiggle\"}]}").unwrap();
        let err = Script::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn replay_counts_changes_and_keeps_final_state() {
        let script = Script {
            events: vec![
                Event::Press(Point::new(550.0, 330.0)),
                Event::Drag(Point::new(575.0, 343.0)),
                Event::Release(Point::new(575.0, 343.0)),
                Event::Press(Point::new(5.0, 590.0)),
                Event::SelectOutline {
                    outline: OutlineKind::Triangle,
                },
            ],
        };
        let (scene, summary) = replay(Scene::default(), &script, Duration::from_millis(1));
        assert_eq!(summary.events, 5);
        assert_eq!(summary.changed, 4);
        assert!(summary.frames >= 1);
        assert_eq!(summary.outline, "triangle");
        assert!(!summary.complete);
        assert_eq!(scene.front_piece().unwrap().anchor(), Point::new(570.0, 340.0));
    }
}

mod output;
mod script;
mod svg;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use tangram::api::{
    arrange, square_solution, OutlineKind, Scene, TangramCfg, Transformable,
    DEFAULT_FRAME_PERIOD,
};

#[derive(Parser)]
#[command(name = "tangram")]
#[command(about = "Headless driver for the tangram puzzle")]
struct Cmd {
    /// JSON file overriding fields of the default puzzle configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutlineArg {
    Square,
    Triangle,
    Rectangle,
    Parallelogram,
}

impl From<OutlineArg> for OutlineKind {
    fn from(a: OutlineArg) -> Self {
        match a {
            OutlineArg::Square => OutlineKind::Square,
            OutlineArg::Triangle => OutlineKind::Triangle,
            OutlineArg::Rectangle => OutlineKind::Rectangle,
            OutlineArg::Parallelogram => OutlineKind::Parallelogram,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Run the completion check against one outline
    Check {
        #[arg(long, value_enum, default_value_t = OutlineArg::Square)]
        outline: OutlineArg,
        /// Place the pieces on the known square solution first
        #[arg(long)]
        solved: bool,
    },
    /// Write the render list as SVG (.svg) or JSON (anything else)
    Render {
        #[arg(long, value_enum, default_value_t = OutlineArg::Square)]
        outline: OutlineArg,
        #[arg(long)]
        solved: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Replay a JSON script of pointer and outline events
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a JSON summary of the board
    Report,
}

fn main() -> Result<()> {
    // stdout carries the JSON results; logs go to stderr
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = load_cfg(cmd.config.as_deref())?;
    match cmd.action {
        Action::Check { outline, solved } => check(cfg, outline.into(), solved),
        Action::Render {
            outline,
            solved,
            out,
        } => render(cfg, outline.into(), solved, &out),
        Action::Replay { script, out } => replay(cfg, &script, out.as_deref()),
        Action::Report => report(cfg),
    }
}

fn load_cfg(path: Option<&Path>) -> Result<TangramCfg> {
    let Some(path) = path else {
        return Ok(TangramCfg::default());
    };
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: TangramCfg = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing config {}", path.display()))?;
    if let Err(msg) = cfg.validate() {
        bail!("config {}: {msg}", path.display());
    }
    tracing::info!(config = %path.display(), grid_step = cfg.grid_step, "config loaded");
    Ok(cfg)
}

fn build_scene(cfg: TangramCfg, outline: OutlineKind, solved: bool) -> Result<Scene> {
    let mut scene = Scene::new(cfg);
    if solved {
        let step = scene.cfg().rotation_step();
        arrange(scene.pieces_mut(), &square_solution(), step)
            .context("pieces do not fit the square solution")?;
    }
    scene.select_outline(outline);
    scene.check_completion();
    Ok(scene)
}

fn check(cfg: TangramCfg, outline: OutlineKind, solved: bool) -> Result<()> {
    let scene = build_scene(cfg, outline, solved)?;
    let complete = scene.is_complete();
    tracing::info!(%outline, solved, complete, "check");
    println!("{}", serde_json::json!({ "outline": outline, "complete": complete }));
    Ok(())
}

fn render(cfg: TangramCfg, outline: OutlineKind, solved: bool, out: &Path) -> Result<()> {
    let scene = build_scene(cfg, outline, solved)?;
    let format = output::write_render(&scene, out)?;
    tracing::info!(%outline, solved, out = %out.display(), ?format, "render");
    Ok(())
}

fn replay(cfg: TangramCfg, script: &Path, out: Option<&Path>) -> Result<()> {
    let events = script::Script::load(script)?;
    let (scene, summary) = script::replay(Scene::new(cfg), &events, DEFAULT_FRAME_PERIOD);
    tracing::info!(
        events = summary.events,
        changed = summary.changed,
        frames = summary.frames,
        complete = summary.complete,
        "replay"
    );
    if let Some(out) = out {
        output::write_render(&scene, out)?;
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report(cfg: TangramCfg) -> Result<()> {
    let scene = Scene::new(cfg);
    let outlines: Vec<_> = scene
        .outlines()
        .map(|(kind, p)| {
            serde_json::json!({
                "kind": kind,
                "vertices": p.vertices().len(),
                "area": p.area(),
            })
        })
        .collect();
    let pieces: Vec<_> = scene
        .pieces()
        .iter()
        .map(|g| {
            let c = g.body().center();
            serde_json::json!({
                "color": g.color().hex(),
                "anchor": g.anchor(),
                "center": c,
                "vertices": g.body_polygon().map_or(0, |b| b.vertices().len()),
            })
        })
        .collect();
    let obj = serde_json::json!({
        "version": tangram::VERSION,
        "code_rev": output::build_revision(),
        "cfg": scene.cfg(),
        "outlines": outlines,
        "pieces": pieces,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

//! Output files and build metadata for CLI artifacts.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

use tangram::api::{DrawList, Scene};

use crate::svg::to_svg;

/// How a render file is encoded, picked from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Svg,
    Json,
}

impl Format {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Format::Svg,
            _ => Format::Json,
        }
    }
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

/// Render `scene` to `path` as SVG or JSON.
pub fn write_render(scene: &Scene, path: &Path) -> Result<Format> {
    let list = DrawList::capture(scene);
    let format = Format::for_path(path);
    let bytes = match format {
        Format::Svg => to_svg(&list).into_bytes(),
        Format::Json => serde_json::to_vec_pretty(&list)?,
    };
    write_file(path, &bytes)?;
    Ok(format)
}

/// Revision stamped into `report`: `GIT_COMMIT` at build time, then at run
/// time, then `git describe`, else `"unknown"`.
pub fn build_revision() -> String {
    let env_rev = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    env_rev
        .or_else(git_describe)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!rev.is_empty()).then_some(rev)
}

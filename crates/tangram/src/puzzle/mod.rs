//! Tangram puzzle: board layout, scene state, interaction, completion check.
//!
//! Flow
//! - The UI collaborator feeds `Event`s to a `Controller`, which mutates the
//!   owned `Scene` synchronously.
//! - Drag release and outline selection run `check::check_completion`; the
//!   result selects the background color.
//!
//! Code cross-refs: `shapes::{Group, Polygon}`, `render::{DrawList, SharedScene}`

pub mod check;
mod cfg;
mod controller;
pub mod layout;
mod scene;
pub mod solve;

pub use cfg::TangramCfg;
pub use check::{align_to_grid, check_completion};
pub use controller::{Controller, Event};
pub use layout::OutlineKind;
pub use scene::Scene;

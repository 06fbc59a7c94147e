//! Tangram geometry engine and puzzle core.
//!
//! Layers, leaf to root
//! - `geom`: `Angle`, `Vector`, `Point`, `Segment` and the orientation test.
//! - `shapes`: the `Shape` variants (`Circle`, `Polygon`, `Group`) and the
//!   polygon factories.
//! - `puzzle`: board layout, owned `Scene`, pointer `Controller`, and the
//!   completion check.
//! - `render`: paint-order `DrawList` and the redraw loop.
//!
//! API Policy
//! - Contract violations (negative radius, fewer than three vertices, zero
//!   length base edge) panic. Lookups that may miss return `Option`.
//! - `api` is the curated surface for the CLI and examples.

pub mod api;
pub mod geom;
pub mod puzzle;
pub mod render;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Angle, Orientation, Point, Segment, Vector};
    pub use crate::puzzle::{Controller, Event, OutlineKind, Scene, TangramCfg};
    pub use crate::render::{DrawCommand, DrawList};
    pub use crate::shapes::{Canvas, Circle, Color, Group, Polygon, Shape, Transformable};
}

//! Curated surface for the CLI and examples.
//!
//! Important
//! - Not a stable public API. Prefer these re-exports so callers do not reach
//!   into module internals that move around.

// Geometry
pub use crate::geom::{Angle, Orientation, Point, Segment, Vector};
// Shapes
pub use crate::shapes::factory::{
    parallelogram, rectangle, square, triangle, triangle_equilateral, triangle_isosceles,
    triangle_right_angled, triangle_right_isosceles,
};
pub use crate::shapes::{Canvas, Circle, Color, Group, Polygon, Shape, Transformable};
// Puzzle
pub use crate::puzzle::check::{crossing_edges, stray_vertices};
pub use crate::puzzle::layout::{initial_outlines, initial_pieces, outline, square_solution};
pub use crate::puzzle::solve::{arrange, place, FIT_TOLERANCE};
pub use crate::puzzle::{
    align_to_grid, check_completion, Controller, Event, OutlineKind, Scene, TangramCfg,
};
// Rendering
pub use crate::render::{
    DrawCommand, DrawList, RedrawSignal, RenderLoop, SharedScene, DEFAULT_FRAME_PERIOD,
};

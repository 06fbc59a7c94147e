//! Place the seven pieces on the square outline and print the check per outline.
//!
//! Usage:
//!   cargo run -p tangram --example solve_square
//!
//! Prints the piece chosen for each target, then `outline=<kind> complete=<bool>`
//! for all four outlines. Only the square is expected to report `true`.

use tangram::api::{arrange, square_solution, OutlineKind, Scene, Transformable};

fn main() {
    let mut scene = Scene::default();
    let step = scene.cfg().rotation_step();
    let Some(assignment) = arrange(scene.pieces_mut(), &square_solution(), step) else {
        eprintln!("no arrangement fits the square solution");
        std::process::exit(1);
    };
    for (target, &piece) in assignment.iter().enumerate() {
        let g = &scene.pieces()[piece];
        let c = g.body().center();
        println!(
            "target {target}: piece {piece} color={} center=({:.1}, {:.1})",
            g.color().hex(),
            c.x(),
            c.y()
        );
    }
    for kind in OutlineKind::ALL {
        scene.select_outline(kind);
        let complete = scene.check_completion();
        println!("outline={kind} complete={complete}");
    }
}

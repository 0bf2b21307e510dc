/// Example: render the spinning cube as vertex markers instead of edges
///
/// Usage: cargo run --example points

use std::io;
use whirl_core::Cube;
use whirl_terminal::{RenderMode, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::init();

    let cube = Cube::corner_standing();
    let mut app = TerminalApp::with_mode(cube, RenderMode::Points)?;
    app.run()
}

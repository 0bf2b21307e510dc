/// Whirl Terminal Demo - Rotating Cube
///
/// Spins a corner-standing wireframe cube in the terminal at 60 frames
/// per second. Press Q or ESC to quit.

use std::io;
use whirl_core::Cube;
use whirl_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let cube = Cube::corner_standing();
    let mut app = TerminalApp::new(cube)?;

    log::info!("entering render loop; press q or esc to quit");
    app.run()
}

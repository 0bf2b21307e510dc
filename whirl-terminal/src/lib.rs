/// Terminal front end for the rotating cube demo
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use whirl_core::{render_frame, vertex_points, AnimationState, Cube, FRAME_INTERVAL_MS};

pub mod renderer;

pub use renderer::AsciiCanvas;

/// What gets stroked each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Wireframe edges, the demo's default look.
    Edges,
    /// Vertex markers only.
    Points,
}

/// Rasterize one frame into `canvas` and hand back the advanced state.
pub fn draw_frame(
    cube: &Cube,
    state: AnimationState,
    canvas: &mut AsciiCanvas,
    mode: RenderMode,
) -> AnimationState {
    canvas.clear();
    match mode {
        RenderMode::Edges => {
            let (segments, next) = render_frame(cube, state, canvas.viewport());
            for segment in &segments {
                canvas.draw_line(segment.start, segment.end);
            }
            next
        }
        RenderMode::Points => {
            for point in vertex_points(cube, state, canvas.viewport()) {
                canvas.draw_point(point);
            }
            state.step()
        }
    }
}

/// Main application struct for the terminal demo
pub struct TerminalApp {
    cube: Cube,
    state: AnimationState,
    canvas: AsciiCanvas,
    mode: RenderMode,
    running: bool,
    last_report: Instant,
    frame_count: u32,
}

impl TerminalApp {
    pub fn new(cube: Cube) -> io::Result<Self> {
        Self::with_mode(cube, RenderMode::Edges)
    }

    pub fn with_mode(cube: Cube, mode: RenderMode) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            cube,
            state: AnimationState::new(),
            canvas: AsciiCanvas::new(width as usize, height as usize),
            mode,
            running: true,
            last_report: Instant::now(),
            frame_count: 0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(FRAME_INTERVAL_MS);

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.tick()?;

            // Frame pacing: sleep off the remainder of the interval
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_report).as_secs() >= 1 {
                let fps = self.frame_count as f64 / (now - self.last_report).as_secs_f64();
                log::debug!("{fps:.1} frames/s");
                self.frame_count = 0;
                self.last_report = now;
            }
        }

        Ok(())
    }

    /// The demo takes no input. These keys only end the process in an
    /// orderly way so raw mode and the alternate screen are restored.
    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Draw one frame and present it.
    pub fn tick(&mut self) -> io::Result<()> {
        self.state = draw_frame(&self.cube, self.state, &mut self.canvas, self.mode);

        let mut out = stdout();
        self.canvas.present(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presented(canvas: &AsciiCanvas) -> String {
        let mut out = Vec::new();
        canvas.present(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_edge_mode_strokes_lines() {
        let cube = Cube::corner_standing();
        let mut canvas = AsciiCanvas::new(60, 30);
        let next = draw_frame(&cube, AnimationState::new(), &mut canvas, RenderMode::Edges);
        assert!(presented(&canvas).contains('#'));
        assert!(next.angle > 0.0);
    }

    #[test]
    fn test_point_mode_marks_corners() {
        let cube = Cube::corner_standing();
        let mut canvas = AsciiCanvas::new(60, 30);
        draw_frame(&cube, AnimationState::new(), &mut canvas, RenderMode::Points);
        let text = presented(&canvas);
        assert!(text.contains('@'));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_each_frame_starts_from_a_clear_canvas() {
        let cube = Cube::corner_standing();
        let mut canvas = AsciiCanvas::new(60, 30);
        let next = draw_frame(&cube, AnimationState::new(), &mut canvas, RenderMode::Edges);
        draw_frame(&cube, next, &mut canvas, RenderMode::Points);
        let text = presented(&canvas);
        assert!(text.contains('@'));
        assert!(!text.contains('#'), "stale strokes survived the clear");
    }
}

/// Character-cell canvas for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::{self, Write};
use whirl_core::Viewport;

/// Stroke color for lines and vertex markers, the terminal stand-in
/// for the demo's green-on-dark look.
const FOREGROUND: Color = Color::Green;

/// Cell used for line strokes.
const LINE_CHAR: char = '#';

/// Cell used for vertex markers.
const POINT_CHAR: char = '@';

/// Half-width of the square a vertex marker covers, in cells.
const POINT_RADIUS: i32 = 1;

/// In-memory character grid the cube is rasterized into.
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Surface dimensions as seen by the projection pipeline.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as u32, self.height as u32)
    }

    /// Reset every cell to the background.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Stroke a line between two pixel positions, Bresenham over cells.
    /// Anything outside the grid is clipped silently.
    pub fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) {
        let (mut x, mut y) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x, y, LINE_CHAR);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x == x1 {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == y1 {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }

    /// Mark a vertex with a small square of cells centered on `p`.
    pub fn draw_point(&mut self, p: Point2<f64>) {
        let (cx, cy) = (p.x.round() as i32, p.y.round() as i32);
        for y in cy - POINT_RADIUS..=cy + POINT_RADIUS {
            for x in cx - POINT_RADIUS..=cx + POINT_RADIUS {
                self.set(x, y, POINT_CHAR);
            }
        }
    }

    fn set(&mut self, x: i32, y: i32, c: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = c;
    }

    /// Queue the whole grid to `writer`, one positioned row at a time.
    ///
    /// Rows are placed with explicit cursor moves: raw mode does not
    /// return newlines to column zero.
    pub fn present<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(SetForegroundColor(FOREGROUND))?;
        for y in 0..self.height {
            let row: String = self.cells[y * self.width..(y + 1) * self.width]
                .iter()
                .collect();
            writer.queue(cursor::MoveTo(0, y as u16))?;
            writer.queue(Print(row))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(canvas: &AsciiCanvas, x: usize, y: usize) -> char {
        canvas.cells[y * canvas.width + x]
    }

    #[test]
    fn test_line_covers_both_endpoints() {
        let mut canvas = AsciiCanvas::new(10, 10);
        canvas.draw_line(Point2::new(1.0, 1.0), Point2::new(8.0, 4.0));
        assert_eq!(cell(&canvas, 1, 1), '#');
        assert_eq!(cell(&canvas, 8, 4), '#');
    }

    #[test]
    fn test_diagonal_line_steps_once_per_cell() {
        let mut canvas = AsciiCanvas::new(8, 8);
        canvas.draw_line(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
        for i in 0..=4 {
            assert_eq!(cell(&canvas, i, i), '#');
        }
        assert_eq!(canvas.cells.iter().filter(|&&c| c == '#').count(), 5);
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = AsciiCanvas::new(8, 4);
        canvas.draw_line(Point2::new(2.0, 1.0), Point2::new(6.0, 1.0));
        for x in 2..=6 {
            assert_eq!(cell(&canvas, x, 1), '#');
        }
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = AsciiCanvas::new(4, 4);
        canvas.draw_line(Point2::new(-5.0, -5.0), Point2::new(3.0, 3.0));
        canvas.draw_point(Point2::new(0.0, 0.0));
        assert_eq!(cell(&canvas, 3, 3), '#');
        assert_eq!(cell(&canvas, 0, 0), '@');
    }

    #[test]
    fn test_point_covers_a_square() {
        let mut canvas = AsciiCanvas::new(8, 8);
        canvas.draw_point(Point2::new(4.0, 4.0));
        for y in 3..=5 {
            for x in 3..=5 {
                assert_eq!(cell(&canvas, x, y), '@');
            }
        }
        assert_eq!(cell(&canvas, 2, 4), ' ');
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut canvas = AsciiCanvas::new(6, 6);
        canvas.draw_line(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        canvas.clear();
        assert!(canvas.cells.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_present_writes_strokes() {
        let mut canvas = AsciiCanvas::new(4, 2);
        canvas.draw_line(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0));

        let mut out = Vec::new();
        canvas.present(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("####"));
    }
}

/// Mapping from normalized device coordinates to surface pixels
use nalgebra::Point2;

/// Output surface dimensions in pixels (or character cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a projected point from the [-1, 1] device square (Y up) to
    /// pixel coordinates (origin top-left, Y down).
    pub fn to_pixels(&self, ndc: Point2<f64>) -> Point2<f64> {
        Point2::new(
            (ndc.x + 1.0) / 2.0 * self.width as f64,
            (1.0 - ndc.y) / 2.0 * self.height as f64,
        )
    }
}

/// Per-frame pipeline: spin, depth offset, projection and segment assembly
use crate::cube::{Cube, EDGE_LOOPS};
use crate::math::{project, rotate_xz, translate_z};
use crate::viewport::Viewport;
use nalgebra::{Point2, Point3};
use std::f64::consts::{PI, TAU};

/// Target frame rate of the demo.
pub const FPS: u32 = 60;

/// Seconds of animation time carried by one frame.
pub const FRAME_DT: f64 = 1.0 / FPS as f64;

/// Scheduling interval between frames, for hosts that count in
/// whole milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 1000 / FPS as u64;

/// Spin speed in radians per second: one revolution every two seconds.
pub const SPIN_RATE: f64 = PI;

/// Fixed distance the cube is pushed along the depth axis before
/// projection. Keeps every vertex in front of the viewer.
pub const DEPTH_OFFSET: f64 = 1.0;

/// Everything that changes between frames.
///
/// A plain value record: hosts hold one, pass it to [`render_frame`] and
/// keep the returned successor. `dz` stays constant during normal
/// operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub angle: f64,
    pub dz: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            dz: DEPTH_OFFSET,
        }
    }

    /// Advance by one frame's worth of spin.
    ///
    /// The angle is reduced into [0, 2pi) so it stays well-conditioned
    /// over arbitrarily long runs.
    pub fn step(self) -> Self {
        Self {
            angle: (self.angle + SPIN_RATE * FRAME_DT).rem_euclid(TAU),
            ..self
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// A line to stroke, both endpoints in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

/// Run one vertex through the whole pipeline: spin about the vertical
/// axis, push along the depth axis, perspective-divide, map to pixels.
pub fn project_vertex(v: Point3<f64>, state: AnimationState, viewport: Viewport) -> Point2<f64> {
    let spun = rotate_xz(v, state.angle);
    let pushed = translate_z(spun, state.dz);
    viewport.to_pixels(project(pushed))
}

/// Screen position of every cube corner at the given state, in vertex
/// index order.
pub fn vertex_points(cube: &Cube, state: AnimationState, viewport: Viewport) -> Vec<Point2<f64>> {
    cube.vertices()
        .iter()
        .map(|&v| project_vertex(v, state, viewport))
        .collect()
}

/// All edge strokes for one frame.
///
/// Walks every edge loop pairwise with wrap-around, so a two-element
/// loop contributes its edge twice (once per direction).
pub fn edge_segments(cube: &Cube, state: AnimationState, viewport: Viewport) -> Vec<Segment> {
    let corners = vertex_points(cube, state, viewport);
    let total: usize = EDGE_LOOPS.iter().map(|l| l.len()).sum();
    let mut segments = Vec::with_capacity(total);
    for edge_loop in EDGE_LOOPS {
        for i in 0..edge_loop.len() {
            segments.push(Segment {
                start: corners[edge_loop[i]],
                end: corners[edge_loop[(i + 1) % edge_loop.len()]],
            });
        }
    }
    segments
}

/// Produce one frame: the segments to stroke for `state`, and the state
/// the host should carry into the next frame.
pub fn render_frame(
    cube: &Cube,
    state: AnimationState,
    viewport: Viewport,
) -> (Vec<Segment>, AnimationState) {
    (edge_segments(cube, state, viewport), state.step())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::HALF_EXTENT;

    #[test]
    fn test_step_advances_by_fixed_increment() {
        let state = AnimationState::new();
        let next = state.step();
        assert!((next.angle - SPIN_RATE * FRAME_DT).abs() < 1e-15);
        assert!((next.dz - DEPTH_OFFSET).abs() < 1e-15);
    }

    #[test]
    fn test_two_seconds_is_one_revolution() {
        let mut state = AnimationState::new();
        for _ in 0..2 * FPS {
            state = state.step();
        }
        // Back at the start, up to accumulated rounding on either side
        // of the wrap point.
        let off = state.angle.min(TAU - state.angle);
        assert!(off < 1e-9, "angle after one revolution: {}", state.angle);
    }

    #[test]
    fn test_projection_stays_inside_device_square() {
        let cube = Cube::corner_standing();
        let mut state = AnimationState::new();
        for _ in 0..4 * FPS {
            for &v in cube.vertices() {
                let ndc = project(translate_z(rotate_xz(v, state.angle), state.dz));
                assert!(ndc.x.abs() <= 1.0);
                assert!(ndc.y.abs() <= 1.0);
            }
            state = state.step();
        }
    }

    #[test]
    fn test_frame_strokes_every_edge_pair() {
        let cube = Cube::corner_standing();
        let viewport = Viewport::new(800, 800);
        let (segments, next) = render_frame(&cube, AnimationState::new(), viewport);

        // 4 + 4 from the face rings, 2 per connecting loop.
        assert_eq!(segments.len(), 16);
        assert!((next.angle - SPIN_RATE * FRAME_DT).abs() < 1e-15);
        assert!((next.dz - DEPTH_OFFSET).abs() < 1e-15);
    }

    #[test]
    fn test_render_frame_is_pure() {
        let cube = Cube::corner_standing();
        let viewport = Viewport::new(120, 40);
        let state = AnimationState::new().step().step();
        let (first, next_a) = render_frame(&cube, state, viewport);
        let (second, next_b) = render_frame(&cube, state, viewport);
        assert_eq!(first, second);
        assert_eq!(next_a, next_b);
    }

    #[test]
    fn test_vertex_points_projects_every_corner() {
        let cube = Cube::corner_standing();
        let viewport = Viewport::new(800, 800);
        let state = AnimationState::new();
        let points = vertex_points(&cube, state, viewport);
        assert_eq!(points.len(), 8);
        for (point, &v) in points.iter().zip(cube.vertices()) {
            assert_eq!(*point, project_vertex(v, state, viewport));
        }
    }

    #[test]
    fn test_top_corner_lands_on_the_vertical_midline() {
        let cube = Cube::corner_standing();
        let viewport = Viewport::new(800, 800);
        let pixel = project_vertex(cube.vertices()[0], AnimationState::new(), viewport);

        let expected_y = 400.0 - HALF_EXTENT * 3.0_f64.sqrt() * 400.0;
        assert!((pixel.x - 400.0).abs() < 1e-9);
        assert!((pixel.y - expected_y).abs() < 1e-9);
    }
}

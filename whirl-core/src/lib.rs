/// Whirl Core Library - Shared geometry and animation logic
///
/// This library provides the stateless core of the rotating-cube demo:
/// plane rotations and perspective division, the corner-standing cube
/// model, the viewport mapping and the per-frame segment assembly.
/// Front ends own scheduling and drawing; they call `render_frame`
/// once per tick and stroke what it returns.

pub mod cube;
pub mod frame;
pub mod math;
pub mod viewport;

// Re-export commonly used types
pub use cube::{Cube, EdgeLoop, EDGE_LOOPS, HALF_EXTENT, VERTEX_COUNT};
pub use frame::{
    edge_segments, project_vertex, render_frame, vertex_points, AnimationState, Segment,
    DEPTH_OFFSET, FPS, FRAME_DT, FRAME_INTERVAL_MS, SPIN_RATE,
};
pub use viewport::Viewport;

/// Cube model: fixed vertices, edge-loop topology and the startup orientation
use crate::math::{rotate_xy, rotate_yz};
use nalgebra::Point3;
use std::f64::consts::FRAC_PI_4;

/// Half the cube's edge length; corners sit at (±0.25, ±0.25, ±0.25).
pub const HALF_EXTENT: f64 = 0.25;

/// Number of cube vertices.
pub const VERTEX_COUNT: usize = 8;

/// Ordered vertex indices describing a polyline stroked with wrap-around.
pub type EdgeLoop = &'static [usize];

/// Cube topology: two face rings plus the four connecting edges.
///
/// Each loop wraps back to its first index, so the two-element loops
/// stroke their edge in both directions. The index lists never change.
pub const EDGE_LOOPS: [EdgeLoop; 6] = [
    &[0, 1, 2, 3], // front face ring
    &[4, 5, 6, 7], // back face ring
    &[0, 4],
    &[1, 5],
    &[2, 6],
    &[3, 7],
];

/// The 8 cube corners, addressed by fixed index.
///
/// Indices are assigned once at construction and never change; the
/// orientation pass replaces coordinate values in place.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    vertices: [Point3<f64>; VERTEX_COUNT],
}

impl Cube {
    /// Axis-aligned cube centered at the origin.
    pub fn new() -> Self {
        let h = HALF_EXTENT;
        Self {
            vertices: [
                Point3::new(h, h, h),
                Point3::new(-h, h, h),
                Point3::new(-h, -h, h),
                Point3::new(h, -h, h),
                Point3::new(h, h, -h),
                Point3::new(-h, h, -h),
                Point3::new(-h, -h, -h),
                Point3::new(h, -h, -h),
            ],
        }
    }

    /// Cube standing on a corner: the space diagonal through vertices 0
    /// and 6 is aligned with the vertical axis.
    pub fn corner_standing() -> Self {
        let mut cube = Self::new();
        cube.align_diagonal();
        cube
    }

    /// One-time orientation pass.
    ///
    /// Rotating the XY plane by 45 degrees removes the X component of the
    /// diagonal; tilting the YZ plane by -atan(1/sqrt(2)) then removes the
    /// Z component, leaving the diagonal purely vertical.
    fn align_diagonal(&mut self) {
        let tilt = diagonal_tilt();
        for v in &mut self.vertices {
            *v = rotate_yz(rotate_xy(*v, FRAC_PI_4), -tilt);
        }
    }

    pub fn vertices(&self) -> &[Point3<f64>; VERTEX_COUNT] {
        &self.vertices
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// Angle between a cube's space diagonal and its projection onto a face
/// plane after the 45 degree pre-rotation: atan(1/sqrt(2)), about 35.26
/// degrees (not 45).
pub fn diagonal_tilt() -> f64 {
    (1.0 / 2.0_f64.sqrt()).atan()
}

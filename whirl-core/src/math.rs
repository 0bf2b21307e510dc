/// Plane rotations, depth translation and perspective division
use nalgebra::{Point2, Point3};

/// Rotate a point in the XY plane (Z held fixed), counter-clockwise.
pub fn rotate_xy(p: Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Rotate a point in the YZ plane (X held fixed), counter-clockwise.
pub fn rotate_yz(p: Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate a point in the XZ plane (Y held fixed), counter-clockwise.
pub fn rotate_xz(p: Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Shift a point along the depth axis.
pub fn translate_z(p: Point3<f64>, dz: f64) -> Point3<f64> {
    Point3::new(p.x, p.y, p.z + dz)
}

/// Perspective division onto the z = 1 plane.
///
/// Callers must keep `p.z` strictly positive; the fixed depth offset
/// applied before projection guarantees this for every reachable point.
pub fn project(p: Point3<f64>) -> Point2<f64> {
    Point2::new(p.x / p.z, p.y / p.z)
}

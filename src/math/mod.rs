mod tolerance;
pub mod vector;

pub use tolerance::{Tolerance, DEFAULT_ATOL, DEFAULT_RTOL};

use std::fmt;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Writes `[x, y, z]` without the column-matrix layout nalgebra uses for `Display`.
pub(crate) fn write_coords(f: &mut fmt::Formatter<'_>, coords: &Vector3) -> fmt::Result {
    write!(f, "[{}, {}, {}]", coords.x, coords.y, coords.z)
}

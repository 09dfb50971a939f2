//! Changes of coordinate basis.
//!
//! Basis matrices use the row-vector convention: row `i` holds the `i`-th
//! target basis vector expressed in the reference basis, and a coordinate
//! vector `v` maps to `vᵀ M`.

mod affine;
mod orthogonal;

pub use affine::AffineTransformation;
pub use orthogonal::OrthogonalTransformation;

use std::fmt;

use crate::math::{write_coords, Matrix3, Vector3};

/// A linear change of coordinates between a reference and a target basis.
pub trait CoordinateTransformation {
    /// Matrix whose rows are the target basis vectors.
    fn matrix(&self) -> &Matrix3;

    fn inverse_matrix(&self) -> &Matrix3;

    /// Maps target coordinates to reference coordinates: `v.x * x + v.y * y + v.z * z`.
    fn pushforward(&self, vector: &Vector3) -> Vector3 {
        self.matrix().tr_mul(vector)
    }

    /// Inverse of [`pushforward`](Self::pushforward).
    fn pullback(&self, vector: &Vector3) -> Vector3 {
        self.inverse_matrix().tr_mul(vector)
    }

    fn pushforward_all(&self, vectors: &[Vector3]) -> Vec<Vector3> {
        vectors.iter().map(|v| self.pushforward(v)).collect()
    }

    fn pullback_all(&self, vectors: &[Vector3]) -> Vec<Vector3> {
        vectors.iter().map(|v| self.pullback(v)).collect()
    }
}

fn basis_matrix(x: &Vector3, y: &Vector3, z: &Vector3) -> Matrix3 {
    Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()])
}

/// Writes `Name(x=[..], y=[..], z=[..])` from the rows of `matrix`.
fn write_basis(f: &mut fmt::Formatter<'_>, name: &str, matrix: &Matrix3) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, label) in ["x", "y", "z"].iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{label}=")?;
        write_coords(f, &matrix.row(i).transpose())?;
    }
    write!(f, ")")
}

use std::fmt;

use tracing::debug;

use crate::error::{ConstructionError, Result};
use crate::math::{Matrix3, Tolerance, Vector3};

use super::{basis_matrix, write_basis, CoordinateTransformation};

/// Change of coordinates to a right-handed orthonormal basis.
///
/// At least two of the basis vectors must be given; a missing third one is
/// completed by the right-handed cross product. All vectors are scaled to
/// unit length, so the inverse is simply the transpose.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthogonalTransformation {
    matrix: Matrix3,
    inverse: Matrix3,
}

impl OrthogonalTransformation {
    /// Builds the transformation from any two or all three basis vectors.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::NotEnoughBasisVectors`] if fewer than two are given.
    /// - [`ConstructionError::ZeroVector`] if a given (or derived) vector has zero length.
    /// - [`ConstructionError::NonOrthogonalBasis`] if exactly two are given and
    ///   they are not orthogonal.
    /// - [`ConstructionError::NotRightHanded`] if all three are given and
    ///   `x̂ × ŷ` differs from `ẑ`.
    pub fn new(
        x: Option<Vector3>,
        y: Option<Vector3>,
        z: Option<Vector3>,
        tol: &Tolerance,
    ) -> Result<Self> {
        let (x, y, z) = match (x, y, z) {
            (Some(x), Some(y), Some(z)) => {
                let (x, y, z) = (unit(&x)?, unit(&y)?, unit(&z)?);
                if !tol.vector_close(&x.cross(&y), &z) {
                    return Err(ConstructionError::NotRightHanded.into());
                }
                (x, y, z)
            }
            (Some(x), Some(y), None) => {
                let (x, y) = orthonormal_pair(&x, &y, tol)?;
                (x, y, x.cross(&y))
            }
            (Some(x), None, Some(z)) => {
                let (x, z) = orthonormal_pair(&x, &z, tol)?;
                (x, z.cross(&x), z)
            }
            (None, Some(y), Some(z)) => {
                let (y, z) = orthonormal_pair(&y, &z, tol)?;
                (y.cross(&z), y, z)
            }
            _ => return Err(ConstructionError::NotEnoughBasisVectors.into()),
        };

        let matrix = basis_matrix(&x, &y, &z);
        debug!(?x, ?y, ?z, "built orthogonal transformation");
        Ok(Self {
            matrix,
            inverse: matrix.transpose(),
        })
    }

    /// Basis with `z = x × y`.
    ///
    /// # Errors
    ///
    /// See [`OrthogonalTransformation::new`].
    pub fn from_xy(x: Vector3, y: Vector3, tol: &Tolerance) -> Result<Self> {
        Self::new(Some(x), Some(y), None, tol)
    }

    /// Basis with `y = z × x`.
    ///
    /// # Errors
    ///
    /// See [`OrthogonalTransformation::new`].
    pub fn from_xz(x: Vector3, z: Vector3, tol: &Tolerance) -> Result<Self> {
        Self::new(Some(x), None, Some(z), tol)
    }

    /// Basis with `x = y × z`.
    ///
    /// # Errors
    ///
    /// See [`OrthogonalTransformation::new`].
    pub fn from_yz(y: Vector3, z: Vector3, tol: &Tolerance) -> Result<Self> {
        Self::new(None, Some(y), Some(z), tol)
    }

    /// # Errors
    ///
    /// See [`OrthogonalTransformation::new`].
    pub fn from_xyz(x: Vector3, y: Vector3, z: Vector3, tol: &Tolerance) -> Result<Self> {
        Self::new(Some(x), Some(y), Some(z), tol)
    }
}

fn unit(vector: &Vector3) -> Result<Vector3> {
    let len = vector.norm();
    if len == 0.0 || !len.is_finite() {
        return Err(ConstructionError::ZeroVector.into());
    }
    Ok(vector / len)
}

/// Normalises both vectors and checks that they are orthogonal.
fn orthonormal_pair(a: &Vector3, b: &Vector3, tol: &Tolerance) -> Result<(Vector3, Vector3)> {
    let (a, b) = (unit(a)?, unit(b)?);
    if !tol.is_zero(a.dot(&b)) {
        return Err(ConstructionError::NonOrthogonalBasis.into());
    }
    Ok((a, b))
}

impl CoordinateTransformation for OrthogonalTransformation {
    fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    fn inverse_matrix(&self) -> &Matrix3 {
        &self.inverse
    }
}

impl fmt::Display for OrthogonalTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_basis(f, "OrthogonalTransformation", &self.matrix)
    }
}

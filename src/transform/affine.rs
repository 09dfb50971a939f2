use std::fmt;

use tracing::debug;

use crate::error::{ConstructionError, Result};
use crate::math::{Matrix3, Vector3};

use super::{basis_matrix, write_basis, CoordinateTransformation};

/// Change of coordinates to an arbitrary (possibly skewed or scaled) basis.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransformation {
    matrix: Matrix3,
    inverse: Matrix3,
}

impl AffineTransformation {
    /// Builds the transformation to the basis `x`, `y`, `z`, given in
    /// reference coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::SingularBasis`] if the vectors are linearly
    /// dependent.
    pub fn new(x: Vector3, y: Vector3, z: Vector3) -> Result<Self> {
        let matrix = basis_matrix(&x, &y, &z);
        let inverse = matrix
            .try_inverse()
            .ok_or(ConstructionError::SingularBasis)?;
        debug!(determinant = matrix.determinant(), "built affine transformation");
        Ok(Self { matrix, inverse })
    }
}

impl CoordinateTransformation for AffineTransformation {
    fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    fn inverse_matrix(&self) -> &Matrix3 {
        &self.inverse
    }
}

impl fmt::Display for AffineTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_basis(f, "AffineTransformation", &self.matrix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GeocutError;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn skewed() -> AffineTransformation {
        AffineTransformation::new(v(-2.0, 0.0, 2.0), v(-1.0, 2.0, -1.0), v(-1.0, -1.0, -1.0))
            .unwrap()
    }

    #[test]
    fn pushforward_combines_basis_vectors() {
        let actual = skewed().pushforward(&v(1.5, -1.0, 0.0));
        assert_relative_eq!(actual, v(-2.0, -2.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn pullback_inverts_pushforward() {
        let transform = skewed();
        let actual = transform.pullback(&v(-2.0, -2.0, 4.0));
        assert_relative_eq!(actual, v(1.5, -1.0, 0.0), epsilon = 1e-12);

        for vector in [v(1.0, 0.0, 0.0), v(0.3, -7.0, 2.5), v(-1e3, 4.0, 1e-3)] {
            let round_trip = transform.pullback(&transform.pushforward(&vector));
            assert_relative_eq!(round_trip, vector, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn scaled_basis() {
        let transform =
            AffineTransformation::new(v(2.0, 0.0, 0.0), v(0.0, 3.0, 0.0), v(0.0, 0.0, 4.0))
                .unwrap();
        assert_relative_eq!(transform.pushforward(&v(1.0, 1.0, 1.0)), v(2.0, 3.0, 4.0));
        assert_relative_eq!(transform.pullback(&v(2.0, 3.0, 4.0)), v(1.0, 1.0, 1.0));
    }

    #[test]
    fn many_vectors_at_once() {
        let transform = skewed();
        let vectors = [v(1.5, -1.0, 0.0), v(1.0, 0.0, 0.0)];
        let pushed = transform.pushforward_all(&vectors);
        assert_eq!(pushed.len(), 2);
        assert_relative_eq!(pushed[0], v(-2.0, -2.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(pushed[1], v(-2.0, 0.0, 2.0), epsilon = 1e-12);

        let pulled = transform.pullback_all(&pushed);
        assert_relative_eq!(pulled[0], vectors[0], epsilon = 1e-12);
        assert_relative_eq!(pulled[1], vectors[1], epsilon = 1e-12);
    }

    #[test]
    fn dependent_basis_is_rejected() {
        let err =
            AffineTransformation::new(v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0))
                .unwrap_err();
        assert!(matches!(
            err,
            GeocutError::Construction(ConstructionError::SingularBasis)
        ));
    }

    #[test]
    fn display_lists_basis() {
        assert_eq!(
            skewed().to_string(),
            "AffineTransformation(x=[-2, 0, 2], y=[-1, 2, -1], z=[-1, -1, -1])"
        );
    }
}

use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::math::{write_coords, Point3, Tolerance, Vector3};

/// An infinite plane through `point_in_plane` with normal `normal_vector`.
///
/// The normal is stored as given. Signed distances are only metric when it
/// has unit length; use [`Plane::unit`] to normalise on construction.
#[derive(Debug, Clone)]
pub struct Plane {
    point_in_plane: Point3,
    normal_vector: Vector3,
}

impl Plane {
    /// Creates a plane from a point and a (not necessarily unit) normal.
    #[must_use]
    pub fn new(point_in_plane: Point3, normal_vector: Vector3) -> Self {
        Self {
            point_in_plane,
            normal_vector,
        }
    }

    /// Creates a plane with its normal scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroVector`] if the normal is zero-length.
    pub fn unit(point_in_plane: Point3, normal_vector: Vector3) -> Result<Self> {
        let len = normal_vector.norm();
        if len == 0.0 || !len.is_finite() {
            return Err(ConstructionError::ZeroVector.into());
        }
        Ok(Self::new(point_in_plane, normal_vector / len))
    }

    #[must_use]
    pub fn point_in_plane(&self) -> &Point3 {
        &self.point_in_plane
    }

    #[must_use]
    pub fn normal_vector(&self) -> &Vector3 {
        &self.normal_vector
    }

    /// Returns `true` if `(point - point_in_plane) · normal` is close to zero.
    #[must_use]
    pub fn contains(&self, point: &Point3, tol: &Tolerance) -> bool {
        tol.is_zero(self.distance(point))
    }

    /// Signed distance `(point - point_in_plane) · normal`.
    ///
    /// Positive on the side the normal points to.
    #[must_use]
    pub fn distance(&self, point: &Point3) -> f64 {
        (point - self.point_in_plane).dot(&self.normal_vector)
    }

    /// [`distance`](Self::distance) for every point.
    #[must_use]
    pub fn distances(&self, points: &[Point3]) -> Vec<f64> {
        points.iter().map(|p| self.distance(p)).collect()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(point_in_plane=")?;
        write_coords(f, &self.point_in_plane.coords)?;
        write!(f, ", normal_vector=")?;
        write_coords(f, &self.normal_vector)?;
        write!(f, ")")
    }
}

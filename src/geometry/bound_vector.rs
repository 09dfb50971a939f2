use std::fmt;

use crate::math::{write_coords, Point3, Tolerance, Vector3};

/// A directed segment from an initial to a terminal point.
///
/// Each end point can be included in or excluded from the segment
/// independently. Zero-length bound vectors are not rejected, but the
/// intersection engine does not give them a meaningful result.
#[derive(Debug, Clone)]
pub struct BoundVector {
    initial_point: Point3,
    terminal_point: Point3,
    initial_point_included: bool,
    terminal_point_included: bool,
}

impl BoundVector {
    /// Creates a bound vector with both end points included.
    #[must_use]
    pub fn new(initial_point: Point3, terminal_point: Point3) -> Self {
        Self::with_inclusion(initial_point, terminal_point, true, true)
    }

    /// Creates a bound vector with explicit end point inclusion.
    #[must_use]
    pub fn with_inclusion(
        initial_point: Point3,
        terminal_point: Point3,
        initial_point_included: bool,
        terminal_point_included: bool,
    ) -> Self {
        Self {
            initial_point,
            terminal_point,
            initial_point_included,
            terminal_point_included,
        }
    }

    #[must_use]
    pub fn initial_point(&self) -> &Point3 {
        &self.initial_point
    }

    #[must_use]
    pub fn terminal_point(&self) -> &Point3 {
        &self.terminal_point
    }

    #[must_use]
    pub fn initial_point_included(&self) -> bool {
        self.initial_point_included
    }

    #[must_use]
    pub fn terminal_point_included(&self) -> bool {
        self.terminal_point_included
    }

    /// The displacement `terminal_point - initial_point`.
    #[must_use]
    pub fn free_vector(&self) -> Vector3 {
        self.terminal_point - self.initial_point
    }

    /// Point at parameter `t`, where `0` is the initial and `1` the terminal point.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.initial_point + self.free_vector() * t
    }

    /// Tolerance-based comparison of the end points; inclusion flags must match exactly.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        self.initial_point_included == other.initial_point_included
            && self.terminal_point_included == other.terminal_point_included
            && tol.point_close(&other.initial_point, &self.initial_point)
            && tol.point_close(&other.terminal_point, &self.terminal_point)
    }
}

impl PartialEq for BoundVector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &Tolerance::configured())
    }
}

impl fmt::Display for BoundVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundVector(initial_point=")?;
        write_coords(f, &self.initial_point.coords)?;
        write!(f, ", terminal_point=")?;
        write_coords(f, &self.terminal_point.coords)?;
        write!(
            f,
            ", initial_point_included={}, terminal_point_included={})",
            self.initial_point_included, self.terminal_point_included
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn new_includes_both_ends() {
        let bv = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert!(bv.initial_point_included());
        assert!(bv.terminal_point_included());
    }

    #[test]
    fn equal_integer_bound_vectors() {
        let a = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn equal_float_bound_vectors() {
        let a = BoundVector::new(p(0.3, 0.3, 0.3), p(1.3, 1.3, 1.3));
        let b = BoundVector::new(p(0.1 + 0.2, 0.3, 0.3), p(1.3, 1.3, 1.3));
        assert_eq!(a, b);
    }

    #[test]
    fn different_terminal_point_is_unequal() {
        let a = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 2.0));
        assert_ne!(a, b);
    }

    #[test]
    fn different_inclusion_is_unequal() {
        let a = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let excl_terminal =
            BoundVector::with_inclusion(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), true, false);
        let excl_initial =
            BoundVector::with_inclusion(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), false, true);
        assert_ne!(a, excl_terminal);
        assert_ne!(a, excl_initial);
    }

    #[test]
    fn reversed_is_unequal() {
        let a = BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = BoundVector::new(p(1.0, 1.0, 1.0), p(0.0, 0.0, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn free_vector() {
        let bv = BoundVector::new(p(-1.0, 1.5, 1.0), p(1.0, 1.0, 1.0));
        assert_relative_eq!(bv.free_vector(), Vector3::new(2.0, -0.5, 0.0));
    }

    #[test]
    fn point_at_interpolates() {
        let bv = BoundVector::new(p(0.0, 0.0, 0.0), p(2.0, 4.0, 0.0));
        assert_relative_eq!(bv.point_at(0.25), p(0.5, 1.0, 0.0));
    }

    #[test]
    fn display_lists_all_fields() {
        let bv = BoundVector::with_inclusion(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.5), true, false);
        assert_eq!(
            bv.to_string(),
            "BoundVector(initial_point=[0, 0, 0], terminal_point=[1, 1, 1.5], \
             initial_point_included=true, terminal_point_included=false)"
        );
    }
}

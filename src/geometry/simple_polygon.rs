use std::fmt;
use std::iter::FusedIterator;

use crate::math::vector::normal_vector;
use crate::math::{write_coords, Point3, Tolerance, Vector3};

use super::BoundVector;

/// A closed loop of vertices; the last vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct SimplePolygon {
    vertices: Vec<Point3>,
}

impl SimplePolygon {
    /// Creates a polygon from its vertex loop (without repeating the first vertex).
    #[must_use]
    pub fn new(vertices: Vec<Point3>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Unit normal following the right-hand rule over the winding order.
    ///
    /// Zero for fewer than three vertices or collinear vertices.
    #[must_use]
    pub fn normal_vector(&self, tol: &Tolerance) -> Vector3 {
        if self.vertices.len() < 3 {
            return Vector3::zeros();
        }
        let mut closed = self.vertices.clone();
        closed.push(self.vertices[0]);
        normal_vector(&closed, tol)
    }

    /// One inclusive bound vector per edge, wrapping from the last vertex to the first.
    ///
    /// The iterator borrows the polygon and can be cloned to restart it.
    #[must_use]
    pub fn bound_vectors(&self) -> BoundVectors<'_> {
        BoundVectors {
            vertices: &self.vertices,
            index: 0,
        }
    }

    /// Rotation-invariant comparison.
    ///
    /// Finds the first vertex of `other` matching `self`'s first vertex, rotates
    /// `other` to start there and compares vertex by vertex. Reversed winding
    /// order is unequal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        if self.vertices.len() != other.vertices.len() {
            return false;
        }
        let Some(first) = self.vertices.first() else {
            return true;
        };
        let Some(offset) = other.vertices.iter().position(|v| tol.point_close(v, first)) else {
            return false;
        };
        let n = other.vertices.len();
        self.vertices
            .iter()
            .enumerate()
            .all(|(i, v)| tol.point_close(&other.vertices[(i + offset) % n], v))
    }
}

impl PartialEq for SimplePolygon {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &Tolerance::configured())
    }
}

impl fmt::Display for SimplePolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimplePolygon(vertices=[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_coords(f, &v.coords)?;
        }
        write!(f, "])")
    }
}

/// Iterator over the edges of a [`SimplePolygon`].
#[derive(Debug, Clone)]
pub struct BoundVectors<'a> {
    vertices: &'a [Point3],
    index: usize,
}

impl Iterator for BoundVectors<'_> {
    type Item = BoundVector;

    fn next(&mut self) -> Option<BoundVector> {
        let n = self.vertices.len();
        if self.index >= n {
            return None;
        }
        let initial = self.vertices[self.index];
        let terminal = self.vertices[(self.index + 1) % n];
        self.index += 1;
        Some(BoundVector::new(initial, terminal))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundVectors<'_> {}

impl FusedIterator for BoundVectors<'_> {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> SimplePolygon {
        SimplePolygon::new(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
    }

    // ── equality ──

    #[test]
    fn polygon_equals_itself() {
        let square = unit_square();
        assert!(square.approx_eq(&square, &Tolerance::default()));
        assert_eq!(square, unit_square());
    }

    #[test]
    fn every_rotation_is_equal() {
        let square = unit_square();
        let n = square.len();
        for shift in 0..n {
            let mut rotated = square.vertices().to_vec();
            rotated.rotate_left(shift);
            assert_eq!(square, SimplePolygon::new(rotated), "shift {shift}");
        }
    }

    #[test]
    fn reversed_winding_is_unequal() {
        let square = unit_square();
        let mut reversed = square.vertices().to_vec();
        reversed.reverse();
        assert_ne!(square, SimplePolygon::new(reversed));
    }

    #[test]
    fn common_vertices_but_different_count_is_unequal() {
        let triangle =
            SimplePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        assert_ne!(unit_square(), triangle);
    }

    #[test]
    fn no_common_vertices_is_unequal() {
        let lifted = SimplePolygon::new(vec![
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
        ]);
        assert_ne!(unit_square(), lifted);
    }

    #[test]
    fn empty_polygons() {
        let empty = SimplePolygon::new(Vec::new());
        assert_eq!(empty, SimplePolygon::new(Vec::new()));
        assert_ne!(empty, unit_square());
    }

    // ── normal_vector ──

    #[test]
    fn normal_of_counter_clockwise_square() {
        let tol = Tolerance::default();
        assert_relative_eq!(unit_square().normal_vector(&tol), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normal_of_clockwise_square() {
        let tol = Tolerance::default();
        let square = SimplePolygon::new(vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
        ]);
        assert_relative_eq!(square.normal_vector(&tol), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normal_of_degenerate_polygons_is_zero() {
        let tol = Tolerance::default();
        let two = SimplePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
        assert_eq!(two.normal_vector(&tol), Vector3::zeros());
        let collinear =
            SimplePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        assert_eq!(collinear.normal_vector(&tol), Vector3::zeros());
    }

    // ── bound_vectors ──

    #[test]
    fn bound_vectors_wrap_around() {
        let square = unit_square();
        let edges: Vec<BoundVector> = square.bound_vectors().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], BoundVector::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
        assert_eq!(edges[3], BoundVector::new(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)));
        assert!(edges
            .iter()
            .all(|e| e.initial_point_included() && e.terminal_point_included()));
    }

    #[test]
    fn bound_vectors_restart() {
        let square = unit_square();
        let edges = square.bound_vectors();
        assert_eq!(edges.len(), 4);
        let first: Vec<BoundVector> = edges.clone().collect();
        let second: Vec<BoundVector> = edges.collect();
        assert_eq!(first, second);
        assert_eq!(square.bound_vectors().count(), 4);
    }

    #[test]
    fn display_lists_vertices() {
        let triangle =
            SimplePolygon::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        assert_eq!(
            triangle.to_string(),
            "SimplePolygon(vertices=[[0, 0, 0], [1, 0, 0], [0, 1, 0]])"
        );
    }
}

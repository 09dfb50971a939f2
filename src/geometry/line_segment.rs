use std::cmp::Ordering;
use std::fmt;

use crate::math::{write_coords, Point3, Tolerance};

/// An undirected segment between two end points, each included or excluded.
///
/// Equality does not depend on which end is labelled `0` and which `1`.
#[derive(Debug, Clone)]
pub struct LineSegment {
    end_point_0: Point3,
    end_point_1: Point3,
    end_point_0_included: bool,
    end_point_1_included: bool,
}

impl LineSegment {
    /// Creates a line segment with both end points included.
    #[must_use]
    pub fn new(end_point_0: Point3, end_point_1: Point3) -> Self {
        Self::with_inclusion(end_point_0, end_point_1, true, true)
    }

    /// Creates a line segment with explicit end point inclusion.
    #[must_use]
    pub fn with_inclusion(
        end_point_0: Point3,
        end_point_1: Point3,
        end_point_0_included: bool,
        end_point_1_included: bool,
    ) -> Self {
        Self {
            end_point_0,
            end_point_1,
            end_point_0_included,
            end_point_1_included,
        }
    }

    #[must_use]
    pub fn end_point_0(&self) -> &Point3 {
        &self.end_point_0
    }

    #[must_use]
    pub fn end_point_1(&self) -> &Point3 {
        &self.end_point_1
    }

    #[must_use]
    pub fn end_point_0_included(&self) -> bool {
        self.end_point_0_included
    }

    #[must_use]
    pub fn end_point_1_included(&self) -> bool {
        self.end_point_1_included
    }

    /// End points paired with their inclusion flags, in lexicographic point order.
    fn sorted_ends(&self) -> [(&Point3, bool); 2] {
        let a = (&self.end_point_0, self.end_point_0_included);
        let b = (&self.end_point_1, self.end_point_1_included);
        if lexicographic_cmp(a.0, b.0) == Ordering::Greater {
            [b, a]
        } else {
            [a, b]
        }
    }

    /// Compares both segments with their end points sorted, so the labelling
    /// of the ends does not matter. Inclusion flags travel with their points.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        self.sorted_ends()
            .iter()
            .zip(other.sorted_ends().iter())
            .all(|((sp, si), (op, oi))| si == oi && tol.point_close(op, sp))
    }
}

fn lexicographic_cmp(a: &Point3, b: &Point3) -> Ordering {
    a.coords
        .iter()
        .zip(b.coords.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &Tolerance::configured())
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment(end_point_0=")?;
        write_coords(f, &self.end_point_0.coords)?;
        write!(f, ", end_point_1=")?;
        write_coords(f, &self.end_point_1.coords)?;
        write!(
            f,
            ", end_point_0_included={}, end_point_1_included={})",
            self.end_point_0_included, self.end_point_1_included
        )
    }
}

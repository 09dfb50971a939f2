use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::{BoundVector, Geometry, LineSegment, Plane};
use crate::math::vector::{are_antiparallel, are_parallel};
use crate::math::{Matrix3, Point3, Tolerance, Vector3};

/// Non-empty result of an intersection.
#[derive(Debug, Clone)]
pub enum Intersection {
    /// The operands meet in a single point.
    Point(Point3),
    /// The operands overlap along a segment with a consistent direction.
    ///
    /// For two bound vectors the direction is the first operand's; for a bound
    /// vector lying in a plane it is the bound vector itself.
    BoundVector(BoundVector),
    /// Two antiparallel bound vectors overlap along this segment.
    LineSegment(LineSegment),
}

impl Intersection {
    /// Returns `true` unless the intersection is a single point.
    #[must_use]
    pub fn is_overlap(&self) -> bool {
        !matches!(self, Self::Point(_))
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => tol.point_close(b, a),
            (Self::BoundVector(a), Self::BoundVector(b)) => a.approx_eq(b, tol),
            (Self::LineSegment(a), Self::LineSegment(b)) => a.approx_eq(b, tol),
            _ => false,
        }
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &Tolerance::configured())
    }
}

/// Intersects two geometric objects.
///
/// Supported pairs are bound vector × bound vector and bound vector × plane
/// (in either order). `Ok(None)` means the operands do not meet.
///
/// # Errors
///
/// Returns [`OperationError::UnsupportedOperands`] for any other pair.
pub fn intersect(a: &Geometry, b: &Geometry, tol: &Tolerance) -> Result<Option<Intersection>> {
    match (a, b) {
        (Geometry::BoundVector(bv0), Geometry::BoundVector(bv1)) => {
            Ok(intersect_bound_vectors(bv0, bv1, tol))
        }
        (Geometry::BoundVector(bv), Geometry::Plane(plane))
        | (Geometry::Plane(plane), Geometry::BoundVector(bv)) => {
            Ok(intersect_bound_vector_plane(bv, plane, tol))
        }
        _ => Err(OperationError::UnsupportedOperands {
            operation: "intersection",
            first: a.kind(),
            second: b.kind(),
        }
        .into()),
    }
}

/// Intersects two bound vectors, honouring their end point inclusion.
///
/// Collinear operands give a point, an overlapping [`BoundVector`] oriented
/// like `bv0`, or a [`LineSegment`] when they are antiparallel. Coplanar,
/// non-parallel operands give at most a point. Skew operands never intersect.
#[must_use]
pub fn intersect_bound_vectors(
    bv0: &BoundVector,
    bv1: &BoundVector,
    tol: &Tolerance,
) -> Option<Intersection> {
    let d0 = bv0.free_vector();
    let d1 = bv1.free_vector();
    let connector = bv1.initial_point() - bv0.initial_point();

    let parallel = are_parallel(&d0, &d1, tol);
    let coplanar = tol.is_zero(Matrix3::from_columns(&[d0, d1, connector]).determinant());
    let collinear = parallel
        && tol.is_zero(connector.cross(&d0).norm())
        && tol.is_zero(connector.cross(&d1).norm());

    trace!(parallel, coplanar, collinear, "classified bound vector pair");

    if collinear {
        collinear_overlap(bv0, bv1, &d0, tol)
    } else if coplanar && !parallel {
        coplanar_crossing(bv0, bv1, &d0, &d1, &connector, tol)
    } else {
        None
    }
}

/// Parameter of the projection of `point` onto `origin + t * direction`.
///
/// A zero-length direction does not constrain `t` and gives 0.
fn line_parameter(point: &Point3, origin: &Point3, direction: &Vector3) -> f64 {
    let len_sq = direction.norm_squared();
    if len_sq > 0.0 {
        (point - origin).dot(direction) / len_sq
    } else {
        0.0
    }
}

/// Overlap of two bound vectors on a common line, parametrised along `bv0`.
fn collinear_overlap(
    bv0: &BoundVector,
    bv1: &BoundVector,
    d0: &Vector3,
    tol: &Tolerance,
) -> Option<Intersection> {
    let origin = bv0.initial_point();
    let t_initial = line_parameter(bv1.initial_point(), origin, d0);
    let t_terminal = line_parameter(bv1.terminal_point(), origin, d0);

    let mut params = [t_initial, t_terminal, 0.0, 1.0];
    params.sort_by(f64::total_cmp);
    let [lowest, start, end, highest] = params;

    trace!(t_initial, t_terminal, start, end, "collinear bound vectors");

    if (start < 0.0 && !tol.is_zero(start)) || (end > 1.0 && !tol.scalar_close(end, 1.0)) {
        return None;
    }

    let touches_at = |t: f64, value: f64| tol.scalar_close(t, value);
    let antiparallel = are_antiparallel(d0, &bv1.free_vector(), tol);

    // Along bv0's direction an antiparallel bv1 runs from terminal to initial point.
    let (bv1_low_included, bv1_high_included) = if antiparallel {
        (bv1.terminal_point_included(), bv1.initial_point_included())
    } else {
        (bv1.initial_point_included(), bv1.terminal_point_included())
    };

    if touches_at(start, 1.0) {
        // bv0's terminal point meets bv1's lower end.
        return (bv0.terminal_point_included() && bv1_low_included)
            .then(|| Intersection::Point(*bv0.terminal_point()));
    }
    if touches_at(end, 0.0) {
        // bv0's initial point meets bv1's upper end.
        return (bv0.initial_point_included() && bv1_high_included)
            .then(|| Intersection::Point(*bv0.initial_point()));
    }

    let start_included = if touches_at(start, 0.0) {
        if touches_at(lowest, 0.0) {
            bv0.initial_point_included() && bv1_low_included
        } else {
            bv0.initial_point_included()
        }
    } else {
        bv1_low_included
    };
    let end_included = if touches_at(end, 1.0) {
        if touches_at(highest, 1.0) {
            bv0.terminal_point_included() && bv1_high_included
        } else {
            bv0.terminal_point_included()
        }
    } else {
        bv1_high_included
    };

    let start_point = bv0.point_at(start);
    let end_point = bv0.point_at(end);

    Some(if antiparallel {
        Intersection::LineSegment(LineSegment::with_inclusion(
            start_point,
            end_point,
            start_included,
            end_included,
        ))
    } else {
        Intersection::BoundVector(BoundVector::with_inclusion(
            start_point,
            end_point,
            start_included,
            end_included,
        ))
    })
}

/// Crossing point of two coplanar, non-parallel bound vectors.
fn coplanar_crossing(
    bv0: &BoundVector,
    bv1: &BoundVector,
    d0: &Vector3,
    d1: &Vector3,
    connector: &Vector3,
    tol: &Tolerance,
) -> Option<Intersection> {
    let normal = d0.cross(d1);
    let denominator = normal.norm_squared();
    let t0 = connector.cross(d1).dot(&normal) / denominator;
    let t1 = connector.cross(d0).dot(&normal) / denominator;

    let slack = tol.atol();
    let within = |t: f64, initial_included: bool, terminal_included: bool| {
        let after_initial = if initial_included {
            t >= -slack
        } else {
            t > -slack
        };
        let before_terminal = if terminal_included {
            t <= 1.0 + slack
        } else {
            t < 1.0 + slack
        };
        after_initial && before_terminal
    };

    trace!(t0, t1, "coplanar bound vectors");

    if !within(t0, bv0.initial_point_included(), bv0.terminal_point_included())
        || !within(t1, bv1.initial_point_included(), bv1.terminal_point_included())
    {
        return None;
    }

    let point = bv0.point_at(t0);
    debug_assert!(
        tol.point_close(&bv1.point_at(t1), &point),
        "parametrisations disagree: {point:?} vs {:?}",
        bv1.point_at(t1)
    );
    Some(Intersection::Point(point))
}

/// Intersects a bound vector with a plane.
///
/// A bound vector lying in the plane is returned whole. Otherwise the result
/// is the crossing point when it lies within the closed parameter range
/// `[0, 1]`. End point inclusion flags are not taken into account.
#[must_use]
pub fn intersect_bound_vector_plane(
    bv: &BoundVector,
    plane: &Plane,
    tol: &Tolerance,
) -> Option<Intersection> {
    let normal = plane.normal_vector();
    let distance = (plane.point_in_plane() - bv.initial_point()).dot(normal);
    let projection = bv.free_vector().dot(normal);

    if tol.is_zero(distance) && tol.is_zero(projection) {
        return Some(Intersection::BoundVector(bv.clone()));
    }

    let t = distance / projection;
    let t = if t.is_nan() { 0.0 } else { t };

    (0.0..=1.0)
        .contains(&t)
        .then(|| Intersection::Point(bv.point_at(t)))
}

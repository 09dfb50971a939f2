use super::{Point3, Tolerance, Vector3};

/// Returns `true` if `a` and `b` are parallel or antiparallel.
///
/// Vectors whose exact zero/non-zero component patterns differ are never
/// parallel, so a zero vector is not parallel to anything but another zero
/// vector with the same pattern.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn are_parallel(a: &Vector3, b: &Vector3, tol: &Tolerance) -> bool {
    let same_zero_pattern = a.iter().zip(b.iter()).all(|(&x, &y)| (x == 0.0) == (y == 0.0));
    if !same_zero_pattern {
        return false;
    }
    tol.is_zero(a.cross(b).norm())
}

/// Returns `true` if `a` and `b` point in opposite directions.
///
/// Always `false` if either vector is close to zero.
#[must_use]
pub fn are_antiparallel(a: &Vector3, b: &Vector3, tol: &Tolerance) -> bool {
    if tol.is_zero_vector(a) || tol.is_zero_vector(b) {
        return false;
    }
    tol.vector_close(&(a / a.norm()), &(-b / b.norm()))
}

/// Unit normal of an open point sequence.
///
/// Averages the cross products of consecutive segments. Two or fewer points,
/// or a (near) zero average, give the zero vector. The sign follows the
/// right-hand rule over the point order.
#[must_use]
pub fn normal_vector(points: &[Point3], tol: &Tolerance) -> Vector3 {
    if points.len() <= 2 {
        return Vector3::zeros();
    }

    let segments: Vec<Vector3> = points.windows(2).map(|w| w[1] - w[0]).collect();
    let crosses = segments.windows(2).map(|w| w[0].cross(&w[1]));
    #[allow(clippy::cast_precision_loss)]
    let count = (segments.len() - 1) as f64;
    let mean = crosses.fold(Vector3::zeros(), |acc, c| acc + c) / count;

    if tol.is_zero_vector(&mean) {
        return Vector3::zeros();
    }
    mean.normalize()
}

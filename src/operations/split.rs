use std::mem;

use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{BoundVector, Geometry, Plane, SimplePolygon};
use crate::math::{Point3, Tolerance};

use super::intersect::{intersect_bound_vector_plane, intersect_bound_vectors, Intersection};

/// Side of a cutting plane, from the sign of the mean signed distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Opposite the plane normal.
    Negative,
    /// Mean distance exactly zero (or no vertices).
    On,
    /// In the direction of the plane normal.
    Positive,
}

impl Side {
    /// Classifies a chain of vertices by its mean signed distance to `plane`.
    #[must_use]
    pub fn of_chain(chain: &[Point3], plane: &Plane) -> Self {
        if chain.is_empty() {
            return Self::On;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = plane.distances(chain).iter().sum::<f64>() / chain.len() as f64;
        if mean > 0.0 {
            Self::Positive
        } else if mean < 0.0 {
            Self::Negative
        } else {
            Self::On
        }
    }
}

/// Splits `object` by `plane`.
///
/// # Errors
///
/// Returns [`OperationError::UnsupportedOperands`] unless `object` is a
/// [`SimplePolygon`].
pub fn split_by_plane(
    object: &Geometry,
    plane: &Plane,
    tol: &Tolerance,
) -> Result<Vec<SimplePolygon>> {
    match object {
        Geometry::SimplePolygon(polygon) => Ok(split_polygon_by_plane(polygon, plane, tol)),
        other => Err(OperationError::UnsupportedOperands {
            operation: "splitting",
            first: other.kind(),
            second: "Plane",
        }
        .into()),
    }
}

/// Cuts a simple polygon along a plane into one or more simple polygons.
///
/// The boundary is walked edge by edge; every crossing point ends the current
/// vertex chain and starts the next one. Chains on the same side whose closing
/// edges overlap along the cut are stitched back together. A polygon the plane
/// does not cross comes back unchanged. Each output keeps the winding order of
/// the input; degenerate chains with fewer than three vertices are emitted as is.
#[must_use]
pub fn split_polygon_by_plane(
    polygon: &SimplePolygon,
    plane: &Plane,
    tol: &Tolerance,
) -> Vec<SimplePolygon> {
    let chains = walk_boundary(polygon, plane, tol);
    debug!(
        vertices = polygon.len(),
        chains = chains.len(),
        "walked polygon boundary"
    );

    merge_touching_chains(chains, plane, tol)
        .into_iter()
        .map(SimplePolygon::new)
        .collect()
}

/// Collects the boundary into chains separated by the plane crossings.
fn walk_boundary(polygon: &SimplePolygon, plane: &Plane, tol: &Tolerance) -> Vec<Vec<Point3>> {
    let mut chains = Vec::new();
    let mut current = Vec::new();
    let mut last_terminal = None;

    for edge in polygon.bound_vectors() {
        last_terminal = Some(*edge.terminal_point());

        let crossing = match intersect_bound_vector_plane(&edge, plane, tol) {
            Some(Intersection::Point(point)) => Some(point),
            // Edge lies in the plane; its end points come from the neighbouring edges.
            Some(_) => continue,
            None => None,
        };

        current.push(*edge.initial_point());

        let Some(point) = crossing else {
            continue;
        };
        if tol.point_close(edge.initial_point(), &point) {
            continue;
        }

        trace!(?point, "boundary crosses plane");
        current.push(point);

        if tol.point_close(edge.terminal_point(), &point) {
            // The next edge starts at the crossing and adds it itself.
            chains.push(mem::take(&mut current));
        } else {
            chains.push(mem::replace(&mut current, vec![point]));
        }
    }
    chains.push(current);

    // The last chain may continue across the seam into the first one.
    let wraps = match (last_terminal, polygon.vertices().first()) {
        (Some(terminal), Some(first)) => tol.point_close(&terminal, first),
        _ => false,
    };
    if chains.len() > 1 && wraps {
        if let Some(mut last) = chains.pop() {
            last.append(&mut chains[0]);
            chains[0] = last;
        }
    }

    chains
}

/// Edge from the last vertex of a chain back to its first.
fn closing_edge(chain: &[Point3]) -> Option<BoundVector> {
    match (chain.first(), chain.last()) {
        (Some(first), Some(last)) => Some(BoundVector::new(*last, *first)),
        _ => None,
    }
}

/// Stitches together chains on the same side whose closing edges overlap.
///
/// Only the first chain that finds partners absorbs anything; its partners are
/// appended to it in discovery order and dropped from the output.
fn merge_touching_chains(
    chains: Vec<Vec<Point3>>,
    plane: &Plane,
    tol: &Tolerance,
) -> Vec<Vec<Point3>> {
    let n = chains.len();
    let sides: Vec<Side> = chains.iter().map(|c| Side::of_chain(c, plane)).collect();
    let closing: Vec<Option<BoundVector>> = chains.iter().map(|c| closing_edge(c)).collect();

    let overlaps = |i: usize, j: usize| match (&closing[i], &closing[j]) {
        (Some(a), Some(b)) => {
            intersect_bound_vectors(a, b, tol).is_some_and(|hit| hit.is_overlap())
        }
        _ => false,
    };

    let mut merge = None;
    for i in 0..n {
        let partners: Vec<usize> = (i + 1..n)
            .chain(0..i)
            .filter(|&j| sides[j] == sides[i] && overlaps(i, j))
            .collect();
        if !partners.is_empty() {
            merge = Some((i, partners));
            break;
        }
    }

    let Some((absorber, partners)) = merge else {
        return chains;
    };
    debug!(absorber, ?partners, "merging chains that touch along the cut");

    let mut slots: Vec<Option<Vec<Point3>>> = chains.into_iter().map(Some).collect();
    let absorbed: Vec<Point3> = partners
        .iter()
        .filter_map(|&j| slots[j].take())
        .flatten()
        .collect();
    if let Some(chain) = slots[absorber].as_mut() {
        chain.extend(absorbed);
    }
    slots.into_iter().flatten().collect()
}

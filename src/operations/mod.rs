mod intersect;
mod split;

pub use intersect::{intersect, intersect_bound_vector_plane, intersect_bound_vectors, Intersection};
pub use split::{split_by_plane, split_polygon_by_plane, Side};

mod bound_vector;
mod line_segment;
mod plane;
mod simple_polygon;

pub use bound_vector::BoundVector;
pub use line_segment::LineSegment;
pub use plane::Plane;
pub use simple_polygon::{BoundVectors, SimplePolygon};

/// Any geometric object the operations dispatch on.
#[derive(Debug, Clone)]
pub enum Geometry {
    BoundVector(BoundVector),
    LineSegment(LineSegment),
    Plane(Plane),
    SimplePolygon(SimplePolygon),
}

impl Geometry {
    /// Name of the contained type, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BoundVector(_) => "BoundVector",
            Self::LineSegment(_) => "LineSegment",
            Self::Plane(_) => "Plane",
            Self::SimplePolygon(_) => "SimplePolygon",
        }
    }
}

impl From<BoundVector> for Geometry {
    fn from(value: BoundVector) -> Self {
        Self::BoundVector(value)
    }
}

impl From<LineSegment> for Geometry {
    fn from(value: LineSegment) -> Self {
        Self::LineSegment(value)
    }
}

impl From<Plane> for Geometry {
    fn from(value: Plane) -> Self {
        Self::Plane(value)
    }
}

impl From<SimplePolygon> for Geometry {
    fn from(value: SimplePolygon) -> Self {
        Self::SimplePolygon(value)
    }
}

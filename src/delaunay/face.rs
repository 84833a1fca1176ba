use num_traits::real::Real;

use crate::geometry::{Direction, Point};

/// The circle through the three corners of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<C> {
    pub center: Point<C>,
    pub radius: C,
}

impl<C: Real> Circle<C> {
    pub(crate) fn circumscribing(a: &Point<C>, b: &Point<C>, c: &Point<C>) -> Option<Self> {
        let center = crate::math::circumcenter(a, b, c)?;
        Some(Self {
            center,
            radius: center.distance(a),
        })
    }
}

/// One face of a [DelaunayTriangulation](crate::DelaunayTriangulation). Vertices are
/// referred to by their index in [DelaunayTriangulation::vertices](crate::DelaunayTriangulation::vertices).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelaunayFace<C> {
    /// A finite triangle, counterclockwise. The circle center is the Voronoi vertex
    /// shared by the regions of all three vertices.
    Triangle {
        vertices: [usize; 3],
        circle: Circle<C>,
    },
    /// The infinite triangle beyond a convex hull edge. The interior of the hull lies
    /// to the right of `first -> second`, so `direction` rotated counterclockwise points outward.
    BoundaryEdge {
        first: usize,
        second: usize,
        direction: Direction<C>,
    },
    /// A lone vertex joined to two points at infinity. Only present in a triangulation of one vertex.
    Degenerate {
        vertex: usize,
    },
}

impl<C> DelaunayFace<C> {
    pub fn is_triangle(&self) -> bool {
        matches!(self, DelaunayFace::Triangle { .. })
    }
}

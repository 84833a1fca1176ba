use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{delaunay::DelaunayFace, geometry::{Axis, Direction, Point, Polygon, Polyline}, line_regions::line_regions, math::{cmp_around, cmp_real, tolerance}};

/// The Voronoi region of one vertex, before it is clipped to a box.
///
/// Open regions are bounded by directed [Axis] lines: the region lies to the right
/// of `left` and to the left of `right`, so walking along `left` reversed, then the
/// chain, then along `right` keeps the region on the left hand side.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<C> {
    /// A bounded, convex cell with counterclockwise vertices.
    Polygonal {
        vertex: usize,
        polygon: Polygon<C>,
    },
    /// A cell of a convex hull vertex: a chain of Voronoi vertices opened by a ray at each end.
    UShaped {
        vertex: usize,
        left: Axis<C>,
        right: Axis<C>,
        polyline: Polyline<C>,
    },
    /// The band between two parallel bisectors.
    Strip {
        vertex: usize,
        left: Axis<C>,
        right: Axis<C>,
    },
    /// Everything to the right of `axis`.
    HalfPlane {
        vertex: usize,
        axis: Axis<C>,
    },
    /// The whole plane.
    Unbounded {
        vertex: usize,
    },
}

/// The variant of a [Region], without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Polygonal,
    UShaped,
    Strip,
    HalfPlane,
    Unbounded,
}

impl<C> Region<C> {
    /// Index of the vertex this region belongs to.
    pub fn vertex(&self) -> usize {
        match self {
            Region::Polygonal { vertex, .. } |
            Region::UShaped { vertex, .. } |
            Region::Strip { vertex, .. } |
            Region::HalfPlane { vertex, .. } |
            Region::Unbounded { vertex } => *vertex,
        }
    }

    pub fn kind(&self) -> RegionKind {
        match self {
            Region::Polygonal { .. } => RegionKind::Polygonal,
            Region::UShaped { .. } => RegionKind::UShaped,
            Region::Strip { .. } => RegionKind::Strip,
            Region::HalfPlane { .. } => RegionKind::HalfPlane,
            Region::Unbounded { .. } => RegionKind::Unbounded,
        }
    }
}

/// What the faces around one vertex contribute to its region.
#[derive(Clone)]
struct Accumulator<C> {
    points: SmallVec<[Point<C>; 8]>,
    start: Option<Direction<C>>,
    end: Option<Direction<C>>,
}

impl<C> Default for Accumulator<C> {
    fn default() -> Self {
        Self {
            points: SmallVec::new(),
            start: None,
            end: None,
        }
    }
}

impl<C: Real> Accumulator<C> {
    /// Cocircular vertices give triangles whose circumcenters differ only by rounding,
    /// so Voronoi vertices closer than `tolerance` are merged.
    fn into_region(self, vertex: usize, site: Point<C>, tolerance: C) -> Option<Region<C>> {
        let Accumulator { mut points, start, end } = self;
        let same = |a: &mut Point<C>, b: &mut Point<C>| a.distance(b) <= tolerance;
        match (start, end) {
            (None, None) if !points.is_empty() => {
                points.sort_by(cmp_around(site));
                points.dedup_by(same);
                // The sort wraps around, so the last point may repeat the first
                while points.len() > 1 && points[0].distance(&points[points.len() - 1]) <= tolerance {
                    points.pop();
                }
                Some(Region::Polygonal {
                    vertex,
                    polygon: Polygon::singleton(points.into_vec()),
                })
            }
            (Some(start), Some(end)) if !points.is_empty() => {
                let across = Axis::new(site, start.rotate_clockwise());
                points.sort_by(|a, b| cmp_real(across.signed_distance_along(a), across.signed_distance_along(b)));
                points.dedup_by(same);
                let polyline = Polyline::new(points.into_vec())?;
                Some(Region::UShaped {
                    vertex,
                    left: Axis::new(polyline.first(), start),
                    right: Axis::new(polyline.last(), end),
                    polyline,
                })
            }
            (start, end) => {
                // Every vertex of a triangulation with a finite triangle belongs to one,
                // and hull vertices sit between exactly two hull edges.
                debug_assert!(false, "vertex {} has {} Voronoi vertices and hull edges {:?}/{:?}", vertex, points.len(), start.is_some(), end.is_some());
                tracing::warn!(vertex, points = points.len(), start = start.is_some(), end = end.is_some(), "Dropping region with inconsistent faces");
                None
            }
        }
    }
}

/// Derives one region per vertex from the faces of their Delaunay triangulation.
pub(crate) fn build_regions<C: Real>(positions: &[Point<C>], faces: &[DelaunayFace<C>]) -> Vec<Region<C>> {
    if !faces.iter().any(DelaunayFace::is_triangle) {
        return line_regions(positions);
    }

    let tolerance = tolerance(positions.iter().copied());
    let mut accumulators = vec![Accumulator::default(); positions.len()];
    for face in faces {
        match face {
            DelaunayFace::Triangle { vertices, circle } => {
                for &vi in vertices.iter() {
                    accumulators[vi].points.push(circle.center);
                }
            }
            DelaunayFace::BoundaryEdge { first, second, direction } => {
                let bisector = direction.rotate_counterclockwise();
                accumulators[*first].end = Some(bisector);
                accumulators[*second].start = Some(bisector);
            }
            DelaunayFace::Degenerate { .. } => { }
        }
    }

    accumulators.into_iter()
        .enumerate()
        .filter_map(|(vi, accumulator)| accumulator.into_region(vi, positions[vi], tolerance))
        .collect()
}

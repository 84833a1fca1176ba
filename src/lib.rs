//! Voronoi diagrams of 2D vertex sets, derived from their Delaunay triangulation and
//! clipped to an axis-aligned box.
//!
//! ```
//! use voronoi_diagram::{BoundingBox, Point, VoronoiDiagram};
//!
//! let diagram = VoronoiDiagram::from_points(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]).unwrap();
//! let bounds = BoundingBox::from_extrema(-10.0, 10.0, -10.0, 10.0);
//! for (site, cell) in diagram.polygons(&bounds) {
//!     assert!(cell.contains(site));
//! }
//! ```

mod idx;
mod math;
mod geometry;
mod delaunay;
mod region;
mod line_regions;
mod clip;
mod diagram;
mod inputs;
mod errors;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, VoronoiError};

pub use geometry::{Axis, BoundingBox, Direction, LineSegment, Point, Polygon, Polyline, Vector};
pub use delaunay::{Circle, DelaunayFace, DelaunayTriangulation};
pub use region::{Region, RegionKind};
pub use diagram::VoronoiDiagram;
pub use inputs::*;

pub use num_traits::real::Real;

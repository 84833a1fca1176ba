//! The planar primitives the diagram is built from and clipped with.

mod point;
pub use point::Point;
mod vector;
pub use vector::{Direction, Vector};
mod axis;
pub use axis::Axis;
mod segment;
pub use segment::LineSegment;
mod bounding_box;
pub use bounding_box::BoundingBox;
mod polygon;
pub use polygon::{Polygon, Polyline};

use num_traits::real::Real;

use crate::{Region, geometry::{Axis, Direction, Point}, math::line_order};

/// Regions of vertices that all lie on one line: parallel strips separated by the
/// bisectors of neighboring vertices, with a half-plane at each end.
pub(crate) fn line_regions<C: Real>(positions: &[Point<C>]) -> Vec<Region<C>> {
    match positions.len() {
        0 => Vec::new(),
        1 => vec![Region::Unbounded { vertex: 0 }],
        _ => {
            let order = line_order(positions);
            let first = positions[order[0]];
            let last = positions[order[order.len() - 1]];
            let normal = match Direction::from_points(first, last) {
                Some(direction) => direction.rotate_counterclockwise(),
                None => {
                    tracing::warn!(vertices = positions.len(), "Collinear vertices share one position");
                    return Vec::new();
                }
            };

            let bisectors: Vec<Axis<C>> = order.windows(2)
                .map(|pair| Axis::new(Point::midpoint(positions[pair[0]], positions[pair[1]]), normal))
                .collect();

            order.iter().enumerate().map(|(i, &vertex)| {
                let before = if i > 0 { bisectors.get(i - 1) } else { None };
                let after = bisectors.get(i);
                match (before, after) {
                    (Some(&left), Some(&right)) => Region::Strip { vertex, left, right },
                    (None, Some(after)) => Region::HalfPlane { vertex, axis: after.reverse() },
                    (Some(&before), None) => Region::HalfPlane { vertex, axis: before },
                    (None, None) => Region::Unbounded { vertex },
                }
            }).collect()
        }
    }
}

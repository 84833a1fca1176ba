use std::collections::{HashMap, VecDeque};

use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{errors::InternalError, geometry::{Direction, Point}, idx::{Idx, IdxDisplay, SliceExt}, math::{in_circle, line_order, orientation}};

use super::{Circle, DelaunayFace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Corner {
    Finite(usize),
    Infinite,
}

/// A triangle of the mesh. Ghost triangles close the hull with the point at
/// infinity, which is always their implicit third corner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Triangle<C> {
    Finite([usize; 3], Circle<C>),
    Ghost([usize; 2]),
}

impl<C> IdxDisplay for Triangle<C> {
    fn fmt(f: &mut std::fmt::Formatter<'_>, idx: usize) -> std::fmt::Result {
        write!(f, "t{}", idx)
    }
}

impl<C: Real> Triangle<C> {
    fn new(corners: [Corner; 3], positions: &[Point<C>]) -> Result<Self, InternalError> {
        match corners {
            [Corner::Finite(a), Corner::Finite(b), Corner::Finite(c)] => {
                let (pa, pb, pc) = (&positions[a], &positions[b], &positions[c]);
                if orientation(pa, pb, pc) <= C::zero() {
                    return Err(InternalError::new(format!("Triangle ({}, {}, {}) is not counterclockwise", a, b, c)));
                }
                let circle = Circle::circumscribing(pa, pb, pc)
                    .ok_or_else(|| InternalError::new(format!("Triangle ({}, {}, {}) has no circumcircle", a, b, c)))?;
                Ok(Triangle::Finite([a, b, c], circle))
            }
            [Corner::Finite(a), Corner::Finite(b), Corner::Infinite] |
            [Corner::Finite(a), Corner::Infinite, Corner::Finite(b)] |
            [Corner::Infinite, Corner::Finite(a), Corner::Finite(b)] => {
                // Rotations keep the winding, so the finite corners stay in cyclic order
                let (u, v) = if corners[1] == Corner::Infinite { (b, a) } else { (a, b) };
                Ok(Triangle::Ghost([u, v]))
            }
            _ => Err(InternalError::new("Triangle has more than one corner at infinity")),
        }
    }

    fn corners(&self) -> [Corner; 3] {
        match self {
            Triangle::Finite([a, b, c], _) => [Corner::Finite(*a), Corner::Finite(*b), Corner::Finite(*c)],
            Triangle::Ghost([u, v]) => [Corner::Finite(*u), Corner::Finite(*v), Corner::Infinite],
        }
    }

    fn edges(&self) -> [(Corner, Corner); 3] {
        let [a, b, c] = self.corners();
        [(a, b), (b, c), (c, a)]
    }

    /// Whether `p` lies in the open circumcircle. A ghost triangle's circumcircle is
    /// the open half-plane beyond its hull edge together with the open edge itself.
    fn in_conflict(&self, positions: &[Point<C>], p: &Point<C>) -> bool {
        match self {
            Triangle::Finite([a, b, c], _) => in_circle(&positions[*a], &positions[*b], &positions[*c], p) > C::zero(),
            Triangle::Ghost([u, v]) => {
                let (pu, pv) = (positions[*u], positions[*v]);
                let o = orientation(&pu, &pv, p);
                o > C::zero() || (o == C::zero() && (*p - pu).dot(&(pv - pu)) > C::zero() && (*p - pv).dot(&(pu - pv)) > C::zero())
            }
        }
    }

    /// Whether `p` lies in the closed triangle, or strictly beyond a ghost's hull edge.
    fn locates(&self, positions: &[Point<C>], p: &Point<C>) -> bool {
        match self {
            Triangle::Finite([a, b, c], _) => {
                let (pa, pb, pc) = (&positions[*a], &positions[*b], &positions[*c]);
                orientation(pa, pb, p) >= C::zero() && orientation(pb, pc, p) >= C::zero() && orientation(pc, pa, p) >= C::zero()
            }
            Triangle::Ghost([u, v]) => orientation(&positions[*u], &positions[*v], p) > C::zero(),
        }
    }
}

/// The connectivity of a triangulation. While every vertex is collinear there are
/// no triangles and the faces are derived from the order along the line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Mesh<C> {
    Line,
    Triangles(Vec<Triangle<C>>),
}

impl<C: Real> Mesh<C> {
    /// Triangulates `positions`, inserting vertices in `order` (which must be a permutation of the indices).
    pub fn build(positions: &[Point<C>], order: &[usize]) -> Result<Self, InternalError> {
        let (i0, i1, i2) = match seed_triangle(positions, order) {
            Some(seed) => seed,
            None => return Ok(Mesh::Line),
        };

        let (a, b, c) = if orientation(&positions[i0], &positions[i1], &positions[i2]) > C::zero() {
            (i0, i1, i2)
        } else {
            (i0, i2, i1)
        };
        let finite = Triangle::new([Corner::Finite(a), Corner::Finite(b), Corner::Finite(c)], positions)?;
        let mut triangles = Vec::with_capacity(positions.len() * 2 + 2);
        triangles.push(finite);
        triangles.push(Triangle::Ghost([b, a]));
        triangles.push(Triangle::Ghost([c, b]));
        triangles.push(Triangle::Ghost([a, c]));

        for &vi in order {
            if vi != i0 && vi != i1 && vi != i2 {
                insert_into(&mut triangles, positions, vi)?;
            }
        }
        Ok(Mesh::Triangles(triangles))
    }

    /// Adds the last vertex of `positions`, which must not coincide with any other.
    pub fn insert(&mut self, positions: &[Point<C>]) -> Result<(), InternalError> {
        let vi = positions.len() - 1;
        match self {
            Mesh::Line => {
                if positions.len() >= 3 && orientation(&positions[0], &positions[1], &positions[vi]) != C::zero() {
                    let order: Vec<usize> = (0..positions.len()).collect();
                    *self = Mesh::build(positions, &order)?;
                }
                Ok(())
            }
            Mesh::Triangles(triangles) => insert_into(triangles, positions, vi),
        }
    }

    pub fn faces(&self, positions: &[Point<C>]) -> Vec<DelaunayFace<C>> {
        match self {
            Mesh::Line => line_faces(positions),
            Mesh::Triangles(triangles) => triangles.iter().map(|t| match t {
                Triangle::Finite(vertices, circle) => DelaunayFace::Triangle { vertices: *vertices, circle: *circle },
                Triangle::Ghost([u, v]) => DelaunayFace::BoundaryEdge {
                    first: *u,
                    second: *v,
                    direction: edge_direction(positions, *u, *v),
                },
            }).collect(),
        }
    }
}

fn seed_triangle<C: Real>(positions: &[Point<C>], order: &[usize]) -> Option<(usize, usize, usize)> {
    let (&i0, rest) = order.split_first()?;
    let &i1 = rest.first()?;
    let &i2 = rest.iter().find(|&&i| orientation(&positions[i0], &positions[i1], &positions[i]) != C::zero())?;
    Some((i0, i1, i2))
}

fn edge_direction<C: Real>(positions: &[Point<C>], u: usize, v: usize) -> Direction<C> {
    // Distinct positions are guaranteed by the coincidence check on insertion
    Direction::from_points(positions[u], positions[v]).unwrap_or_else(Direction::x_axis)
}

fn line_faces<C: Real>(positions: &[Point<C>]) -> Vec<DelaunayFace<C>> {
    match positions.len() {
        0 => Vec::new(),
        1 => vec![DelaunayFace::Degenerate { vertex: 0 }],
        _ => {
            let order = line_order(positions);
            let mut faces = Vec::with_capacity(2 * order.len());
            for pair in order.windows(2) {
                let (u, v) = (pair[0], pair[1]);
                faces.push(DelaunayFace::BoundaryEdge { first: u, second: v, direction: edge_direction(positions, u, v) });
                faces.push(DelaunayFace::BoundaryEdge { first: v, second: u, direction: edge_direction(positions, v, u) });
            }
            faces
        }
    }
}

/// Bowyer-Watson insertion of vertex `vi`: removes every triangle whose circumcircle
/// holds the new vertex and fans the hole's boundary to it. Leaves `triangles`
/// untouched on error.
fn insert_into<C: Real>(triangles: &mut Vec<Triangle<C>>, positions: &[Point<C>], vi: usize) -> Result<(), InternalError> {
    let p = positions[vi];

    let ti_seed = triangles.iter_index()
        .find(|&ti| triangles[ti].locates(positions, &p))
        .ok_or_else(|| InternalError::new(format!("Vertex {} could not be located", vi)))?;

    let mut owners: HashMap<(Corner, Corner), Idx<Triangle<C>>> = HashMap::with_capacity(triangles.len() * 3);
    for ti in triangles.iter_index() {
        for edge in triangles[ti].edges().iter() {
            owners.insert(*edge, ti);
        }
    }

    // Grow the cavity outward from the triangle holding the vertex so it stays connected
    let mut in_cavity = vec![false; triangles.len()];
    let mut cavity: SmallVec<[Idx<Triangle<C>>; 16]> = SmallVec::new();
    let mut queue = VecDeque::new();
    in_cavity[ti_seed.usize()] = true;
    queue.push_back(ti_seed);
    while let Some(ti) = queue.pop_front() {
        cavity.push(ti);
        for &(a, b) in triangles[ti].edges().iter() {
            if let Some(&ti_next) = owners.get(&(b, a)) {
                if !in_cavity[ti_next.usize()] && triangles[ti_next].in_conflict(positions, &p) {
                    in_cavity[ti_next.usize()] = true;
                    queue.push_back(ti_next);
                }
            }
        }
    }

    let mut fan = Vec::with_capacity(cavity.len() + 2);
    for &ti in cavity.iter() {
        for &(a, b) in triangles[ti].edges().iter() {
            let is_boundary = match owners.get(&(b, a)) {
                Some(ti_other) => !in_cavity[ti_other.usize()],
                None => true,
            };
            if is_boundary {
                fan.push(Triangle::new([a, b, Corner::Finite(vi)], positions)?);
            }
        }
    }

    if fan.len() != cavity.len() + 2 {
        return Err(InternalError::new(format!("Cavity of vertex {} is not a disk ({} triangles, {} boundary edges)", vi, cavity.len(), fan.len())));
    }

    let mut kept = Vec::with_capacity(triangles.len() + 2);
    for (ti, t) in triangles.drain(..).enumerate() {
        if !in_cavity[ti] {
            kept.push(t);
        }
    }
    kept.extend(fan);
    *triangles = kept;

    tracing::trace!(vertex = vi, seed = %ti_seed, cavity = cavity.len(), triangles = triangles.len(), "Inserted vertex");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn build(positions: &[Point<f64>]) -> Mesh<f64> {
        let order: Vec<usize> = (0..positions.len()).collect();
        Mesh::build(positions, &order).unwrap()
    }

    #[test]
    fn collinear_stays_a_line() {
        let positions = points(&[(0., 0.), (1., 1.), (3., 3.)]);
        assert_eq!(build(&positions), Mesh::Line);
    }

    #[test]
    fn triangle_with_ghosts() {
        let positions = points(&[(0., 0.), (2., 0.), (1., 2.)]);
        let faces = build(&positions).faces(&positions);
        assert_eq!(faces.iter().filter(|f| f.is_triangle()).count(), 1);
        assert_eq!(faces.len(), 4);
    }

    #[test]
    fn square_with_center() {
        let positions = points(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.), (1., 1.)]);
        let faces = build(&positions).faces(&positions);
        // Four finite triangles around the center, four hull edges
        assert_eq!(faces.iter().filter(|f| f.is_triangle()).count(), 4);
        assert_eq!(faces.len(), 8);
        for face in faces {
            if let DelaunayFace::Triangle { vertices, circle } = face {
                assert!(vertices.contains(&4));
                assert!(circle.radius > 0.);
            }
        }
    }

    #[test]
    fn point_outside_on_hull_line() {
        // The last vertex extends the hull edge (0,0)-(2,0)
        let positions = points(&[(0., 0.), (2., 0.), (1., 2.), (4., 0.)]);
        let faces = build(&positions).faces(&positions);
        assert_eq!(faces.iter().filter(|f| f.is_triangle()).count(), 2);
        assert_eq!(faces.len(), 6);
    }

    #[test]
    fn line_becomes_triangles() {
        let mut positions = points(&[(0., 0.), (1., 0.), (2., 0.)]);
        let mut mesh = build(&positions);
        assert_eq!(mesh.faces(&positions).len(), 4);
        positions.push(Point::new(1., 1.));
        mesh.insert(&positions).unwrap();
        assert_eq!(mesh.faces(&positions).iter().filter(|f| f.is_triangle()).count(), 2);
    }
}

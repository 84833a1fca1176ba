//! An incremental Delaunay triangulation, the dual from which the diagram's regions are read.

mod face;
pub use face::{Circle, DelaunayFace};
mod mesh;

use num_traits::real::Real;
use rand::{Rng, prelude::SliceRandom};

use crate::{Vertex, errors::VoronoiError, geometry::Point, math::cmp_real};
use mesh::Mesh;

/// A Delaunay triangulation of caller-owned vertices.
///
/// Each vertex is identified by its index in [DelaunayTriangulation::vertices], which
/// follows insertion order and never changes. Positions must be pairwise distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct DelaunayTriangulation<V, C> {
    vertices: Vec<V>,
    positions: Vec<Point<C>>,
    mesh: Mesh<C>,
}

impl<V, C: Real> Default for DelaunayTriangulation<V, C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V, C: Real> DelaunayTriangulation<V, C> {
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            positions: Vec::new(),
            mesh: Mesh::Line,
        }
    }

    /// Triangulates `vertices`, located with `position`.
    ///
    /// Fails with [VoronoiError::CoincidentVertices] if two vertices share a position.
    pub fn from_vertices_by<I, F>(vertices: I, position: F) -> Result<Self, VoronoiError<V>>
    where I: IntoIterator<Item=V>, F: Fn(&V) -> Point<C> {
        Self::from_vertices_by_with_rng(vertices, position, &mut rand::thread_rng())
    }

    /// As [DelaunayTriangulation::from_vertices_by], drawing the insertion order from `rng`
    /// so that a seeded generator gives a reproducible build.
    pub fn from_vertices_by_with_rng<I, F, R>(vertices: I, position: F, rng: &mut R) -> Result<Self, VoronoiError<V>>
    where I: IntoIterator<Item=V>, F: Fn(&V) -> Point<C>, R: Rng + ?Sized {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let positions: Vec<Point<C>> = vertices.iter().map(&position).collect();

        if let Some((existing, inserted)) = find_coincident(&positions) {
            let (existing, inserted) = take_pair(vertices, existing, inserted);
            return Err(VoronoiError::CoincidentVertices(existing, inserted));
        }

        // Randomized insertion order guards against the quadratic worst case of sorted input
        let mut order: Vec<usize> = (0..positions.len()).collect();
        order[..].shuffle(rng);
        let mesh = Mesh::build(&positions, &order)?;

        Ok(Self {
            vertices,
            positions,
            mesh,
        })
    }

    /// Adds `vertex`, returning its index. On failure the triangulation is unchanged.
    pub fn insert_vertex_by<F>(&mut self, vertex: V, position: F) -> Result<usize, VoronoiError<V>>
    where V: Clone, F: Fn(&V) -> Point<C> {
        let p = position(&vertex);
        if let Some(existing) = self.positions.iter().position(|q| *q == p) {
            return Err(VoronoiError::CoincidentVertices(self.vertices[existing].clone(), vertex));
        }

        self.positions.push(p);
        if let Err(error) = self.mesh.insert(&self.positions) {
            self.positions.pop();
            return Err(error.into());
        }
        self.vertices.push(vertex);
        Ok(self.vertices.len() - 1)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn positions(&self) -> &[Point<C>] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Point<C>> {
        self.positions.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    /// Every face, including one [DelaunayFace::BoundaryEdge] per convex hull edge. While all
    /// vertices are collinear there are no triangles, and the line is bounded on both sides.
    pub fn faces(&self) -> Vec<DelaunayFace<C>> {
        self.mesh.faces(&self.positions)
    }
}

impl<V: Vertex> DelaunayTriangulation<V, V::Coordinate> {
    pub fn from_vertices<I: IntoIterator<Item=V>>(vertices: I) -> Result<Self, VoronoiError<V>> {
        Self::from_vertices_by(vertices, <V as Vertex>::position)
    }

    pub fn insert_vertex(&mut self, vertex: V) -> Result<usize, VoronoiError<V>>
    where V: Clone {
        self.insert_vertex_by(vertex, <V as Vertex>::position)
    }
}

/// The first pair of equal positions, lower index first.
fn find_coincident<C: Real>(positions: &[Point<C>]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..positions.len()).collect();
    order.sort_by(|&a, &b| cmp_real(positions[a].x(), positions[b].x()).then_with(|| cmp_real(positions[a].y(), positions[b].y())));
    order.windows(2)
        .filter(|pair| positions[pair[0]] == positions[pair[1]])
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .min()
}

fn take_pair<V>(vertices: Vec<V>, first: usize, second: usize) -> (V, V) {
    let mut first_vertex = None;
    let mut second_vertex = None;
    for (i, v) in vertices.into_iter().enumerate() {
        if i == first {
            first_vertex = Some(v);
        } else if i == second {
            second_vertex = Some(v);
            break;
        }
    }
    match (first_vertex, second_vertex) {
        (Some(a), Some(b)) => (a, b),
        _ => unreachable!("coincident indices come from the same list"),
    }
}

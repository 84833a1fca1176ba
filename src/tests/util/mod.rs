pub mod sites;
mod vtest;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{BoundingBox, Point, Polygon};

pub use vtest::{VTest, numbered};

/// `count` distinct points drawn uniformly from `[-extent, extent]²`, the same for every `seed`.
pub fn random_points(count: usize, seed: u64, extent: f64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points: Vec<Point<f64>> = Vec::with_capacity(count);
    while points.len() < count {
        let p = Point::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent));
        if !points.contains(&p) {
            points.push(p);
        }
    }
    points
}

/// `count` distinct points with integer coordinates in `[-extent, extent]²`. Integer sites are
/// full of cocircular quadruples, so their triangulations have many repeated circumcenters.
pub fn random_integer_points(count: usize, seed: u64, extent: i32) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points: Vec<Point<f64>> = Vec::with_capacity(count);
    while points.len() < count {
        let p = Point::new(rng.gen_range(-extent..=extent) as f64, rng.gen_range(-extent..=extent) as f64);
        if !points.contains(&p) {
            points.push(p);
        }
    }
    points
}

pub fn square_box(extent: f64) -> BoundingBox<f64> {
    BoundingBox::from_extrema(-extent, extent, -extent, extent)
}

/// Index of the point of `sites` nearest to `q`, and the gap to the runner up.
pub fn nearest(sites: &[Point<f64>], q: &Point<f64>) -> (usize, f64) {
    let mut best = (usize::MAX, f64::INFINITY);
    let mut second = f64::INFINITY;
    for (i, site) in sites.iter().enumerate() {
        let d = site.distance(q);
        if d < best.1 {
            second = best.1;
            best = (i, d);
        } else if d < second {
            second = d;
        }
    }
    (best.0, second - best.1)
}

pub fn total_area<'a, I: IntoIterator<Item=&'a Polygon<f64>>>(polygons: I) -> f64 {
    polygons.into_iter().map(Polygon::area).sum()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!((actual - expected).abs() <= tolerance, "{} is not within {} of {}", actual, tolerance, expected);
}

/// Whether every vertex of `a` has a match in `b` and vice versa.
pub fn same_vertices(a: &Polygon<f64>, b: &Polygon<f64>, tolerance: f64) -> bool {
    let covered = |from: &Polygon<f64>, to: &Polygon<f64>| from.vertices().iter()
        .all(|p| to.vertices().iter().any(|q| p.distance(q) <= tolerance));
    covered(a, b) && covered(b, a)
}

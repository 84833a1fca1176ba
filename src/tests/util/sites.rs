use crate::Point;

fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn triangle() -> Vec<Point<f64>> {
    points(&[(0., 0.), (4., 0.), (1., 3.)])
}

/// Four cocircular points, whose two Delaunay triangles share a circumcenter.
pub fn diamond() -> Vec<Point<f64>> {
    points(&[(1., 0.), (0., 1.), (-1., 0.), (0., -1.)])
}

pub fn star() -> Vec<Point<f64>> {
    points(&[(1., 0.), (2., 2.), (0., 1.), (-2., 2.), (-1., 0.), (-2., -2.), (0., -1.), (2., -2.)])
}

/// An `n` by `n` grid with unit spacing: collinear hull edges and cocircular cells throughout.
pub fn grid(n: usize) -> Vec<Point<f64>> {
    (0..n).flat_map(|i| (0..n).map(move |j| Point::new(i as f64, j as f64))).collect()
}

pub fn diagonal_line(n: usize) -> Vec<Point<f64>> {
    (0..n).map(|i| Point::new(i as f64 * 0.5, i as f64 * 1.5)).collect()
}

pub fn all() -> Vec<Vec<Point<f64>>> {
    vec![
        triangle(),
        diamond(),
        star(),
        grid(4),
        diagonal_line(5),
    ]
}

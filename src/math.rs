use std::cmp::Ordering;

use num_traits::{NumCast, real::Real};

use crate::geometry::{BoundingBox, Point, Vector};

/// Twice the signed area of `abc`: positive when `c` lies left of `a -> b`.
pub(crate) fn orientation<C: Real>(a: &Point<C>, b: &Point<C>, c: &Point<C>) -> C {
    (*b - *a).cross(&(*c - *a))
}

/// Positive when `d` lies strictly inside the circle through the counterclockwise triangle `abc`.
pub(crate) fn in_circle<C: Real>(a: &Point<C>, b: &Point<C>, c: &Point<C>, d: &Point<C>) -> C {
    let da = *a - *d;
    let db = *b - *d;
    let dc = *c - *d;
    let da2 = da.length_squared();
    let db2 = db.length_squared();
    let dc2 = dc.length_squared();

    da.x() * (db.y() * dc2 - db2 * dc.y())
        - da.y() * (db.x() * dc2 - db2 * dc.x())
        + da2 * (db.x() * dc.y() - db.y() * dc.x())
}

/// The center of the circle through `a`, `b` and `c`, or `None` if they are collinear.
pub(crate) fn circumcenter<C: Real>(a: &Point<C>, b: &Point<C>, c: &Point<C>) -> Option<Point<C>> {
    let ab = *b - *a;
    let ac = *c - *a;
    let two = C::one() + C::one();
    let d = two * ab.cross(&ac);
    if d == C::zero() {
        return None;
    }
    let ab2 = ab.length_squared();
    let ac2 = ac.length_squared();
    let ux = (ac.y() * ab2 - ab.y() * ac2) / d;
    let uy = (ab.x() * ac2 - ac.x() * ab2) / d;
    Some(*a + Vector::new(ux, uy))
}

/// A key that increases monotonically with the counterclockwise angle of `v` from
/// the positive x axis, in `[0, 4)`. Cheaper than `atan2`, and only good for ordering.
pub(crate) fn pseudo_angle<C: Real>(v: Vector<C>) -> C {
    let one = C::one();
    let two = one + one;
    let sum = v.x().abs() + v.y().abs();
    if sum == C::zero() {
        return C::zero();
    }
    let p = v.x() / sum;
    if v.y() < C::zero() {
        two + two - (one - p)
    } else {
        one - p
    }
}

/// Orders points by their [pseudo_angle] around `center`.
pub(crate) fn cmp_around<C: Real>(center: Point<C>) -> impl Fn(&Point<C>, &Point<C>) -> Ordering {
    move |a, b| cmp_real(pseudo_angle(*a - center), pseudo_angle(*b - center))
}

/// Indices of `positions` sorted along whichever of x and y has the larger extent
/// (x on a tie). For collinear positions this is their order along the line.
pub(crate) fn line_order<C: Real>(positions: &[Point<C>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..positions.len()).collect();
    if let Some(bounds) = BoundingBox::from_points(positions.iter().copied()) {
        if bounds.width() >= bounds.height() {
            order.sort_by(|&a, &b| cmp_real(positions[a].x(), positions[b].x()));
        } else {
            order.sort_by(|&a, &b| cmp_real(positions[a].y(), positions[b].y()));
        }
    }
    order
}

/// Distance under which two derived points (circumcenters, intersections) are taken to
/// be the same: a few ulps of the largest coordinate among `points`.
pub(crate) fn tolerance<C: Real, I: IntoIterator<Item=Point<C>>>(points: I) -> C {
    let magnitude = points.into_iter().fold(C::zero(), |m, p| m.max(p.x().abs()).max(p.y().abs()));
    let ulps: C = NumCast::from(64u8).unwrap_or_else(C::one);
    magnitude * C::epsilon() * ulps
}

pub(crate) fn cmp_real<C: Real>(a: C, b: C) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_angle_is_monotonic() {
        let steps = 64;
        let mut last = -1.0;
        for i in 0..steps {
            let theta = std::f64::consts::PI * 2.0 * (i as f64) / (steps as f64);
            let (y, x) = theta.sin_cos();
            let key = pseudo_angle(Vector::new(x, y));
            assert!(key > last, "{} <= {} at step {}", key, last, i);
            assert!(key < 4.0);
            last = key;
        }
    }

    #[test]
    fn circumcenter_of_right_triangle() {
        let c = circumcenter(&Point::new(0., 0.), &Point::new(2., 0.), &Point::new(0., 2.)).unwrap();
        assert_eq!(c, Point::new(1., 1.));
        assert!(circumcenter(&Point::new(0., 0.), &Point::new(1., 1.), &Point::new(2., 2.)).is_none());
    }

    #[test]
    fn line_order_uses_longer_extent() {
        let steep = vec![Point::new(0.0, 5.0), Point::new(1.0, -5.0), Point::new(0.5, 0.0)];
        assert_eq!(line_order(&steep), vec![1, 2, 0]);
        let flat = vec![Point::new(3.0, 0.0), Point::new(-3.0, 0.0)];
        assert_eq!(line_order(&flat), vec![1, 0]);
    }

    #[test]
    fn tolerance_scales_with_coordinates() {
        let small = tolerance(vec![Point::new(1., -2.)]);
        let large = tolerance(vec![Point::new(1., -2.), Point::new(0., 2000.)]);
        assert!(small > 0. && small < 1e-12);
        assert_eq!(large, small * 1000.);
        assert_eq!(tolerance(Vec::<Point<f64>>::new()), 0.);
    }

    #[test]
    fn predicates() {
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let c = Point::new(0., 1.);
        assert!(orientation(&a, &b, &c) > 0.);
        assert!(orientation(&b, &a, &c) < 0.);
        assert!(in_circle(&a, &b, &c, &Point::new(0.5, 0.5)) > 0.);
        assert!(in_circle(&a, &b, &c, &Point::new(2., 2.)) < 0.);
        assert_eq!(in_circle(&a, &b, &c, &Point::new(1., 1.)), 0.);
    }
}

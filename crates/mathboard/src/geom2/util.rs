use super::types::Point;

/// Euclidean distance. Total; zero for coincident points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).norm()
}

#[inline]
pub fn midpoint(p: Point, q: Point) -> Point {
    (p + q) * 0.5
}

/// z-component of `(b − a) × (c − a)`; twice the signed area of `abc`.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn distance_pythagorean_and_zero() {
        assert!((distance(vector![0.0, 0.0], vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
        let p = vector![-1.5, 2.25];
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn cross_sign_follows_orientation() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![0.0, 1.0];
        assert!((cross(a, b, c) - 1.0).abs() < 1e-12);
        assert!((cross(a, c, b) + 1.0).abs() < 1e-12);
        assert_eq!(cross(a, b, vector![2.0, 0.0]), 0.0);
    }

    #[test]
    fn degree_conversions() {
        assert!((radians_to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
        assert!((degrees_to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let m = midpoint(vector![-3.0, -2.0], vector![3.0, -2.0]);
        assert!((m - vector![0.0, -2.0]).norm() < 1e-12);
    }
}

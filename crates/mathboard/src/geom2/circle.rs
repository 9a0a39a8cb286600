//! Circle metrics and containment.
//!
//! Radius policy: metrics validate. `Circle::new` and the free `circle_area` /
//! `circle_circumference` reject a non-finite or non-positive radius with
//! `GeomError::InvalidParameter`. Containment stays a total predicate: a negative
//! radius simply contains nothing.

use std::f64::consts::PI;

use super::types::{Circle, GeomError, Point};
use super::util::distance;

impl Circle {
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Closed disk membership (`distance <= radius`).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        is_point_in_circle(p, self.center(), self.radius())
    }

    #[inline]
    pub fn properties(&self) -> CircleProperties {
        CircleProperties {
            area: self.area(),
            circumference: self.circumference(),
        }
    }
}

/// Derived quantities of a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleProperties {
    pub area: f64,
    pub circumference: f64,
}

/// `π·r²`, validating the radius.
pub fn circle_area(radius: f64) -> Result<f64, GeomError> {
    Ok(Circle::new(Point::zeros(), radius)?.area())
}

/// `2π·r`, validating the radius.
pub fn circle_circumference(radius: f64) -> Result<f64, GeomError> {
    Ok(Circle::new(Point::zeros(), radius)?.circumference())
}

#[inline]
pub fn is_point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    distance(point, center) <= radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn lesson_circle_radius_four() {
        let c = Circle::new(vector![0.0, 0.0], 4.0).unwrap();
        assert!((c.area() - 16.0 * PI).abs() < 1e-12);
        assert!((c.circumference() - 8.0 * PI).abs() < 1e-12);
        assert!((circle_area(4.0).unwrap() - 16.0 * PI).abs() < 1e-12);
        assert!((circle_circumference(4.0).unwrap() - 8.0 * PI).abs() < 1e-12);
        let props = c.properties();
        assert_eq!(props.area, c.area());
        assert_eq!(props.circumference, c.circumference());
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Circle::new(vector![1.0, 1.0], r).unwrap_err();
            assert!(matches!(err, GeomError::InvalidParameter { .. }), "r = {r}");
            assert!(circle_area(r).is_err());
            assert!(circle_circumference(r).is_err());
        }
    }

    #[test]
    fn containment_boundary_is_inside() {
        let c = Circle::new(vector![1.0, -1.0], 2.0).unwrap();
        assert!(c.contains(vector![1.0, -1.0]));
        assert!(c.contains(vector![3.0, -1.0]));
        assert!(!c.contains(vector![3.0, 0.0]));
        // Negative radius contains nothing, not even the center.
        assert!(!is_point_in_circle(vector![0.0, 0.0], vector![0.0, 0.0], -1.0));
    }
}

use super::*;
use nalgebra::vector;
use proptest::prelude::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

fn lesson_triangle() -> Triangle {
    Triangle::from_coords([[-3.0, -2.0], [3.0, -2.0], [0.0, 3.0]])
}

fn collinear() -> Triangle {
    Triangle::from_coords([[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]])
}

#[test]
fn lesson_triangle_end_to_end() {
    let t = lesson_triangle();
    let [a, b, c] = t.sides();
    // Opposite-side convention: a = |BC|, b = |AC|, c = |AB|.
    assert!((a - 34f64.sqrt()).abs() < 1e-12);
    assert!((b - 34f64.sqrt()).abs() < 1e-12);
    assert!((c - 6.0).abs() < 1e-12);
    // Base 6, height 5.
    assert!((t.area() - 15.0).abs() < 1e-9);
    let props = t.properties().unwrap();
    assert!((props.perimeter - (a + b + c)).abs() < 1e-12);
    assert!((props.centroid - vector![0.0, -1.0 / 3.0]).norm() < 1e-12);
    assert!((props.angles.iter().sum::<f64>() - PI).abs() < 1e-9);
    // Isosceles about x = 0, so every center sits on the axis.
    for p in [props.circumcenter, props.incenter, props.orthocenter] {
        assert!(p.x.abs() < 1e-12);
    }
    assert!((props.circumcenter.y + 0.4).abs() < 1e-12);
    assert!((props.orthocenter.y + 0.2).abs() < 1e-12);
    assert!((props.inradius - 15.0 / (props.perimeter / 2.0)).abs() < 1e-12);
    assert!((props.circumradius - distance(props.circumcenter, t.b)).abs() < 1e-9);
}

#[test]
fn right_triangle_centers() {
    // Right angle at A: orthocenter at A, circumcenter at hypotenuse midpoint.
    let t = Triangle::from_coords([[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]);
    let h = t.orthocenter().unwrap();
    assert!(h.norm() < 1e-12);
    let o = t.circumcenter().unwrap();
    assert!((o - vector![2.0, 1.5]).norm() < 1e-12);
    assert!((t.circumradius().unwrap() - 2.5).abs() < 1e-12);
    // 3-4-5 triangle: r = (3 + 4 - 5) / 2.
    assert!((t.inradius().unwrap() - 1.0).abs() < 1e-12);
    let i = t.incenter().unwrap();
    assert!((i - vector![1.0, 1.0]).norm() < 1e-12);
    let angles = t.angles().unwrap();
    assert!((angles[0] - PI / 2.0).abs() < 1e-12);
}

#[test]
fn vertical_and_horizontal_sides_need_no_slopes() {
    // AB vertical, AC horizontal.
    let t = Triangle::from_coords([[1.0, 1.0], [1.0, 5.0], [4.0, 1.0]]);
    let h = t.orthocenter().unwrap();
    assert!((h - vector![1.0, 1.0]).norm() < 1e-12);
    // Obtuse triangle with a vertical side; orthocenter falls outside.
    let t = Triangle::from_coords([[0.0, 0.0], [0.0, 2.0], [-3.0, 5.0]]);
    let h = t.orthocenter().unwrap();
    let [a, b, c] = t.vertices();
    assert!((h - a).dot(&(b - c)).abs() < 1e-9);
    assert!((h - b).dot(&(a - c)).abs() < 1e-9);
    assert!(!t.contains_point(h).unwrap());
}

#[test]
fn collinear_points_are_degenerate() {
    let t = collinear();
    assert!(t.is_degenerate());
    for err in [
        t.circumcenter().unwrap_err(),
        t.orthocenter().unwrap_err(),
        t.contains_point(vector![1.0, 0.0]).unwrap_err(),
        t.properties().unwrap_err(),
    ] {
        assert!(err.is_degenerate(), "{err}");
    }
    match t.orthocenter().unwrap_err() {
        GeomError::DegenerateGeometry { op, .. } => assert_eq!(op, "orthocenter"),
        e => panic!("unexpected {e:?}"),
    }
    // Total quantities still answer.
    assert_eq!(t.area(), 0.0);
    assert!((t.centroid() - vector![1.0, 0.0]).norm() < 1e-12);
    assert!(t.incenter().is_ok());
    // Angles of a flat triangle: 0, π, 0 (clamped, no NaN).
    let angles = t.angles().unwrap();
    assert!(angles.iter().all(|a| a.is_finite()));
    assert!((angles[1] - PI).abs() < 1e-6);
}

#[test]
fn coincident_points_are_degenerate() {
    let p = vector![2.0, -1.0];
    let t = Triangle::new(p, p, p);
    assert!(t.incenter().unwrap_err().is_degenerate());
    assert!(t.angles().unwrap_err().is_degenerate());
    assert!(t.inradius().unwrap_err().is_degenerate());
    assert_eq!(t.area(), 0.0);
    assert_eq!(t.centroid(), p);
    // Two coincident vertices: the angle at them is undefined.
    let t2 = Triangle::new(p, p, vector![0.0, 0.0]);
    assert!(t2.angles().is_err());
}

#[test]
fn near_collinear_angles_stay_finite() {
    let t = Triangle::from_coords([[0.0, 0.0], [1.0, 1e-9], [2.0, 0.0]]);
    let angles = t.angles().unwrap();
    assert!(angles.iter().all(|a| a.is_finite() && *a >= 0.0 && *a <= PI));
    assert!(t.area() >= 0.0);
}

#[test]
fn custom_eps_controls_collinearity() {
    let t = Triangle::from_coords([[0.0, 0.0], [1.0, 0.0], [0.5, 1e-6]]);
    assert!(t.circumcenter().is_ok());
    assert!(t.circumcenter_eps(1e-3).is_err());
    let cfg = GeomCfg {
        eps_det: 1e-3,
        ..GeomCfg::default()
    };
    assert!(t.properties_cfg(cfg).is_err());
}

#[test]
fn inradius_follows_configured_eps_det() {
    // det = 2e-12: below the default eps_det, above a tightened one.
    let t = Triangle::from_coords([[0.0, 0.0], [1e-6, 0.0], [0.0, 1e-6]]);
    let cfg = GeomCfg {
        eps_det: 1e-20,
        ..GeomCfg::default()
    };
    let props = t.properties_cfg(cfg).unwrap();
    assert!(props.area > 0.0);
    let s = props.perimeter / 2.0;
    assert!((props.inradius - props.area / s).abs() <= 1e-12 * props.inradius);
    assert_eq!(t.inradius_cfg(cfg).unwrap(), props.inradius);
    // Under the default tolerance the same triangle counts as collinear.
    assert_eq!(t.inradius().unwrap(), 0.0);
}

#[test]
fn point_in_triangle_barycentric() {
    let t = lesson_triangle();
    assert!(t.contains_point(t.centroid()).unwrap());
    assert!(is_point_in_triangle(vector![0.0, 0.0], &t).unwrap());
    // Vertices and edge points are inside (closed triangle).
    assert!(t.contains_point(t.a).unwrap());
    assert!(t.contains_point(vector![0.0, -2.0]).unwrap());
    assert!(!t.contains_point(vector![100.0, 100.0]).unwrap());
    assert!(!t.contains_point(vector![-3.0, 3.0]).unwrap());
}

#[test]
fn angles_deg_matches_equilateral() {
    let t = Triangle::new(
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 3f64.sqrt()],
    );
    let props = t.properties().unwrap();
    for deg in props.angles_deg() {
        assert!((deg - 60.0).abs() < 1e-9);
    }
    // All four centers coincide.
    for p in [props.circumcenter, props.incenter, props.orthocenter] {
        assert!((p - props.centroid).norm() < 1e-9);
    }
    assert!((props.circumradius - 2.0 * props.inradius).abs() < 1e-9);
}

#[test]
fn euler_line_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut checked = 0;
    for _ in 0..200 {
        let mut p = || vector![rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)];
        let t = Triangle::new(p(), p(), p());
        if t.area() < 1.0 {
            continue;
        }
        let props = t.properties().unwrap();
        // G lies on OH with OG : GH = 1 : 2.
        let expected = props.circumcenter + (props.orthocenter - props.circumcenter) / 3.0;
        assert!((expected - props.centroid).norm() < 1e-6);
        // Circumcenter is equidistant from all vertices.
        for v in t.vertices() {
            assert!((distance(props.circumcenter, v) - props.circumradius).abs() < 1e-6);
        }
        checked += 1;
    }
    assert!(checked > 150);
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_distance_symmetric_and_zero(p in point(), q in point()) {
        prop_assert_eq!(distance(p, p), 0.0);
        prop_assert!((distance(p, q) - distance(q, p)).abs() < 1e-12);
        prop_assert!(distance(p, q) >= 0.0);
    }

    #[test]
    fn prop_angles_sum_to_pi(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        // Keep well-conditioned triangles; relative area vs. longest side squared.
        let longest = t.sides().iter().cloned().fold(0.0, f64::max);
        prop_assume!(longest > 1e-3 && t.area() / (longest * longest) > 1e-4);
        let angles = t.angles().unwrap();
        prop_assert!((angles.iter().sum::<f64>() - std::f64::consts::PI).abs() < 1e-9);
        for x in angles {
            prop_assert!(x > 0.0 && x < std::f64::consts::PI);
        }
    }

    #[test]
    fn prop_area_non_negative_and_centroid_mean(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        prop_assert!(t.area() >= 0.0);
        let g = t.centroid();
        prop_assert!((g.x - (a.x + b.x + c.x) / 3.0).abs() < 1e-12);
        prop_assert!((g.y - (a.y + b.y + c.y) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn prop_collinear_has_zero_area(p in point(), s in -5.0f64..5.0, k in -5i32..5) {
        // Points p, p + d, p + k·d on one line with integer step keep the arithmetic exact.
        let d = vector![1.0, 2.0] * s.round();
        let t = Triangle::new(p.map(f64::round), p.map(f64::round) + d, p.map(f64::round) + d * k as f64);
        prop_assert_eq!(t.area(), 0.0);
        prop_assert!(t.circumcenter().is_err());
    }

    #[test]
    fn prop_centroid_inside_non_degenerate(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        prop_assume!(t.area() > 1.0);
        prop_assert!(t.contains_point(t.centroid()).unwrap());
        prop_assert!(!t.contains_point(vector![1e6, 1e6]).unwrap());
    }
}

//! Triangle metrics and the four classical centers.
//!
//! Conventions
//! - `sides()[i]` is the side opposite vertex `i`: `[|BC|, |AC|, |AB|]`.
//!   `angles()` uses the same indexing, so `angles()[0]` is the angle at `A`.
//! - Collinearity is decided on `d = 2·(ax(by−cy) + bx(cy−ay) + cx(ay−by))`, the
//!   circumcenter denominator. `|d| < eps_det` means no unique circumcenter,
//!   orthocenter, or barycentric frame exists and those calls return
//!   `GeomError::DegenerateGeometry`.
//! - Area, perimeter, sides, centroid, and midpoints are total.
//!
//! Code cross-refs: `types::{Triangle, GeomCfg, GeomError}`, `util::{distance, cross}`

use super::types::{GeomCfg, GeomError, Point, Triangle};
use super::util::{cross, distance, midpoint, radians_to_degrees};

impl Triangle {
    /// Side lengths `[a, b, c]` opposite `A`, `B`, `C`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [
            distance(self.b, self.c),
            distance(self.a, self.c),
            distance(self.a, self.b),
        ]
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }

    /// Heron's formula, zero for triangles that are degenerate under `eps_det`.
    ///
    /// Side lengths carry rounding from `sqrt`, so plain Heron leaves a small positive
    /// residue for exactly collinear points; the collinearity test decides zero instead.
    /// Otherwise the sides are sorted `a >= b >= c` and the factors are grouped as
    /// `(a+(b+c))(c−(a−b))(c+(a−b))(a+(b−c)) / 16`, with the radicand clamped at 0.
    pub fn area_eps(&self, eps_det: f64) -> f64 {
        if self.is_degenerate_eps(eps_det) {
            return 0.0;
        }
        let mut s = self.sides();
        s.sort_by(|x, y| y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal));
        let [a, b, c] = s;
        let radicand = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
        radicand.max(0.0).sqrt() / 4.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area_eps(GeomCfg::default().eps_det)
    }

    /// Circumcenter denominator `d = 2·cross(B−A, C−A)`.
    #[inline]
    pub fn det(&self) -> f64 {
        2.0 * cross(self.a, self.b, self.c)
    }

    #[inline]
    pub fn is_degenerate_eps(&self, eps_det: f64) -> bool {
        self.det().abs() < eps_det
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate_eps(GeomCfg::default().eps_det)
    }

    /// Interior angles in radians via the law of cosines.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so near-collinear input gives
    /// angles close to `0`/`π` instead of NaN. Fails only for a zero-length side,
    /// where the angle at its endpoints is undefined.
    pub fn angles_eps(&self, eps_len: f64) -> Result<[f64; 3], GeomError> {
        let [a, b, c] = self.sides();
        let shortest = a.min(b).min(c);
        if shortest < eps_len {
            return Err(GeomError::degenerate("angles", shortest));
        }
        let opposite = |o: f64, s1: f64, s2: f64| {
            ((s1 * s1 + s2 * s2 - o * o) / (2.0 * s1 * s2))
                .clamp(-1.0, 1.0)
                .acos()
        };
        Ok([opposite(a, b, c), opposite(b, a, c), opposite(c, a, b)])
    }

    #[inline]
    pub fn angles(&self) -> Result<[f64; 3], GeomError> {
        self.angles_eps(GeomCfg::default().eps_len)
    }

    /// Arithmetic mean of the vertices; defined for every input.
    #[inline]
    pub fn centroid(&self) -> Point {
        (self.a + self.b + self.c) / 3.0
    }

    /// Midpoints of `BC`, `AC`, `AB` (feet of the medians from `A`, `B`, `C`).
    #[inline]
    pub fn midpoints(&self) -> [Point; 3] {
        [
            midpoint(self.b, self.c),
            midpoint(self.a, self.c),
            midpoint(self.a, self.b),
        ]
    }

    /// Intersection of the perpendicular bisectors.
    pub fn circumcenter_eps(&self, eps_det: f64) -> Result<Point, GeomError> {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = self.det();
        if d.abs() < eps_det {
            return Err(GeomError::degenerate("circumcenter", d));
        }
        let a2 = a.norm_squared();
        let b2 = b.norm_squared();
        let c2 = c.norm_squared();
        let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        Ok(Point::new(ux, uy))
    }

    #[inline]
    pub fn circumcenter(&self) -> Result<Point, GeomError> {
        self.circumcenter_eps(GeomCfg::default().eps_det)
    }

    /// Vertices weighted by their opposite side lengths: `(a·A + b·B + c·C) / (a + b + c)`.
    ///
    /// Collinear but distinct vertices still have a weighted mean; only a zero
    /// perimeter (all vertices coincide) is rejected.
    pub fn incenter_eps(&self, eps_len: f64) -> Result<Point, GeomError> {
        let [sa, sb, sc] = self.sides();
        let perimeter = sa + sb + sc;
        if perimeter < eps_len {
            return Err(GeomError::degenerate("incenter", perimeter));
        }
        Ok((self.a * sa + self.b * sb + self.c * sc) / perimeter)
    }

    #[inline]
    pub fn incenter(&self) -> Result<Point, GeomError> {
        self.incenter_eps(GeomCfg::default().eps_len)
    }

    /// Intersection of the altitudes.
    ///
    /// Uses `H = A + B + C − 2·O` (O the circumcenter), which needs no side slopes and
    /// therefore handles vertical and horizontal sides without special cases. The
    /// degeneracy test is the circumcenter's, reported under this operation's name.
    pub fn orthocenter_eps(&self, eps_det: f64) -> Result<Point, GeomError> {
        let o = self
            .circumcenter_eps(eps_det)
            .map_err(|_| GeomError::degenerate("orthocenter", self.det()))?;
        Ok(self.a + self.b + self.c - o * 2.0)
    }

    #[inline]
    pub fn orthocenter(&self) -> Result<Point, GeomError> {
        self.orthocenter_eps(GeomCfg::default().eps_det)
    }

    /// Radius of the inscribed circle, `area / s`. The area uses `cfg.eps_det`,
    /// the semi-perimeter guard `cfg.eps_len`.
    pub fn inradius_cfg(&self, cfg: GeomCfg) -> Result<f64, GeomError> {
        let s = self.perimeter() / 2.0;
        if s < cfg.eps_len {
            return Err(GeomError::degenerate("inradius", s));
        }
        Ok(self.area_eps(cfg.eps_det) / s)
    }

    #[inline]
    pub fn inradius(&self) -> Result<f64, GeomError> {
        self.inradius_cfg(GeomCfg::default())
    }

    /// Radius of the circumscribed circle (distance from the circumcenter to `A`).
    pub fn circumradius_eps(&self, eps_det: f64) -> Result<f64, GeomError> {
        Ok(distance(self.circumcenter_eps(eps_det)?, self.a))
    }

    #[inline]
    pub fn circumradius(&self) -> Result<f64, GeomError> {
        self.circumradius_eps(GeomCfg::default().eps_det)
    }

    /// Barycentric membership test (boundary counts as inside).
    ///
    /// With `v0 = C − A`, `v1 = B − A`, `v2 = p − A` the weights are
    /// `u = (v1·v1 · v0·v2 − v0·v1 · v1·v2) / den`, `v = (v0·v0 · v1·v2 − v0·v1 · v0·v2) / den`,
    /// `den = v0·v0 · v1·v1 − (v0·v1)²`, and `p` is inside iff `u, v >= 0` and `u + v <= 1`.
    pub fn contains_point_eps(&self, p: Point, eps_det: f64) -> Result<bool, GeomError> {
        let d = self.det();
        if d.abs() < eps_det {
            return Err(GeomError::degenerate("contains_point", d));
        }
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = p - self.a;
        let dot00 = v0.dot(&v0);
        let dot01 = v0.dot(&v1);
        let dot02 = v0.dot(&v2);
        let dot11 = v1.dot(&v1);
        let dot12 = v1.dot(&v2);
        let inv_den = 1.0 / (dot00 * dot11 - dot01 * dot01);
        let u = (dot11 * dot02 - dot01 * dot12) * inv_den;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_den;
        Ok(u >= 0.0 && v >= 0.0 && u + v <= 1.0)
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> Result<bool, GeomError> {
        self.contains_point_eps(p, GeomCfg::default().eps_det)
    }

    /// Every derived quantity at once. The first degenerate sub-computation is returned as the error.
    pub fn properties_cfg(&self, cfg: GeomCfg) -> Result<TriangleProperties, GeomError> {
        let sides = self.sides();
        Ok(TriangleProperties {
            area: self.area_eps(cfg.eps_det),
            perimeter: sides.iter().sum(),
            sides,
            angles: self.angles_eps(cfg.eps_len)?,
            centroid: self.centroid(),
            circumcenter: self.circumcenter_eps(cfg.eps_det)?,
            incenter: self.incenter_eps(cfg.eps_len)?,
            orthocenter: self.orthocenter_eps(cfg.eps_det)?,
            inradius: self.inradius_cfg(cfg)?,
            circumradius: self.circumradius_eps(cfg.eps_det)?,
        })
    }

    #[inline]
    pub fn properties(&self) -> Result<TriangleProperties, GeomError> {
        self.properties_cfg(GeomCfg::default())
    }
}

/// Snapshot of a triangle's derived quantities. Angles are in radians; index `i`
/// of `sides`/`angles` refers to vertex `i` (side opposite, angle at).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleProperties {
    pub area: f64,
    pub perimeter: f64,
    pub sides: [f64; 3],
    pub angles: [f64; 3],
    pub centroid: Point,
    pub circumcenter: Point,
    pub incenter: Point,
    pub orthocenter: Point,
    pub inradius: f64,
    pub circumradius: f64,
}

impl TriangleProperties {
    #[inline]
    pub fn angles_deg(&self) -> [f64; 3] {
        self.angles.map(radians_to_degrees)
    }
}

/// Free-function form of [`Triangle::contains_point`].
#[inline]
pub fn is_point_in_triangle(p: Point, triangle: &Triangle) -> Result<bool, GeomError> {
    triangle.contains_point(p)
}

//! Basic 2D value types, tolerances, and the error taxonomy.
//!
//! - `Point`: a plain `Vector2<f64>`; no identity beyond its coordinates.
//! - `Triangle`: ordered vertex triple `[A, B, C]`. Order only matters for labels;
//!   side `i` is always the side opposite vertex `i`.
//! - `Circle`: center plus a strictly positive radius (validated on construction).
//! - `GeomCfg`: centralizes the epsilons for collinearity and zero-length checks.
//! - `GeomError`: degenerate input or out-of-domain parameters, never a silent NaN.
//!
//! Code cross-refs: `triangle::Triangle` methods, `circle::Circle` methods.

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Threshold on `d = 2·cross(B−A, C−A)`; below it the vertices count as collinear.
    pub eps_det: f64,
    /// Side lengths below this count as zero (coincident vertices).
    pub eps_len: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-10,
            eps_len: 1e-12,
        }
    }
}

/// Errors surfaced by the geometry routines.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Collinear or coincident vertices made a divisor vanish.
    DegenerateGeometry { op: &'static str, det: f64 },
    /// An input outside the domain of the computation (e.g. radius <= 0).
    InvalidParameter { reason: String },
}

impl GeomError {
    pub(crate) fn degenerate(op: &'static str, det: f64) -> Self {
        Self::DegenerateGeometry { op, det }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// True for the collinear/coincident family of failures.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { op, det } => write!(
                f,
                "degenerate geometry in {op}: points are collinear or coincident (det = {det:e})"
            ),
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Triangle given by its ordered vertices `A`, `B`, `C`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Build from `[[x, y]; 3]`, the shape lesson data and graph descriptors use.
    #[inline]
    pub fn from_coords(pts: [[f64; 2]; 3]) -> Self {
        Self {
            a: Point::new(pts[0][0], pts[0][1]),
            b: Point::new(pts[1][0], pts[1][1]),
            c: Point::new(pts[2][0], pts[2][1]),
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[Point; 3]> for Triangle {
    #[inline]
    fn from(v: [Point; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Circle with a validated, strictly positive radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Fails with `InvalidParameter` unless `radius` is finite and `> 0`.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeomError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeomError::invalid(format!(
                "circle radius must be finite and > 0, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

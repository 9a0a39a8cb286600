//! Function and conic families drawn on the lesson board.
//!
//! These are plotting helpers only: evaluate, sample a polyline, and compute the one
//! or two marked points each lesson figure labels (intercepts, vertex, foci).
//! Undefined samples (outside a logarithm's domain, inside a hyperbola's gap,
//! at a tangent asymptote) come back as `None` and are skipped by `sample`.

use std::f64::consts::PI;

use crate::geom2::{GeomCfg, GeomError, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigKind {
    Sin,
    Cos,
    Tan,
}

/// Explicit function graphs `y = f(x)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// `y = slope·x + intercept`
    Linear { slope: f64, intercept: f64 },
    /// `y = a·x² + b·x + c`
    Quadratic { a: f64, b: f64, c: f64 },
    /// `y = amplitude·f(frequency·x + phase) + vertical_shift`
    Trigonometric {
        kind: TrigKind,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        vertical_shift: f64,
    },
    /// `y = scale·baseˣ`
    Exponential { base: f64, scale: f64 },
    /// `y = scale·log_base(x) + shift`
    Logarithmic { base: f64, scale: f64, shift: f64 },
}

impl Curve {
    /// `f(x)`, or `None` where the function is undefined or not finite.
    pub fn eval(&self, x: f64) -> Option<f64> {
        let y = match *self {
            Curve::Linear { slope, intercept } => slope * x + intercept,
            Curve::Quadratic { a, b, c } => a * x * x + b * x + c,
            Curve::Trigonometric {
                kind,
                amplitude,
                frequency,
                phase,
                vertical_shift,
            } => {
                let arg = frequency * x + phase;
                let base = match kind {
                    TrigKind::Sin => arg.sin(),
                    TrigKind::Cos => arg.cos(),
                    TrigKind::Tan => arg.tan(),
                };
                amplitude * base + vertical_shift
            }
            Curve::Exponential { base, scale } => scale * base.powf(x),
            Curve::Logarithmic { base, scale, shift } => {
                if x <= 0.0 || !valid_log_base(base) {
                    return None;
                }
                scale * (x.ln() / base.ln()) + shift
            }
        };
        y.is_finite().then_some(y)
    }

    /// Domain the lesson figures plot by default.
    pub fn default_domain(&self) -> (f64, f64) {
        match self {
            Curve::Linear { .. } | Curve::Quadratic { .. } => (-5.0, 5.0),
            Curve::Trigonometric { .. } => (-2.0 * PI, 2.0 * PI),
            Curve::Exponential { .. } => (-3.0, 3.0),
            Curve::Logarithmic { .. } => (0.1, 5.0),
        }
    }

    /// `n` evenly spaced samples over `domain` (endpoints included), undefined ones dropped.
    pub fn sample(&self, domain: (f64, f64), n: usize) -> Vec<Point> {
        linspace(domain, n)
            .filter_map(|x| self.eval(x).map(|y| Point::new(x, y)))
            .collect()
    }

    /// The point a figure labels for this family:
    /// - linear: y-intercept `(0, intercept)`;
    /// - quadratic: vertex `(−b/2a, f(−b/2a))`;
    /// - exponential: y-intercept `(0, scale)`;
    /// - logarithmic: x-intercept `(base^(−shift/scale), 0)`;
    /// - trigonometric: none.
    pub fn key_point(&self) -> Result<Option<Point>, GeomError> {
        match *self {
            Curve::Linear { intercept, .. } => Ok(Some(Point::new(0.0, intercept))),
            Curve::Quadratic { a, b, c } => {
                if a == 0.0 {
                    return Err(GeomError::invalid("quadratic coefficient a must be non-zero"));
                }
                let x = -b / (2.0 * a);
                Ok(Some(Point::new(x, a * x * x + b * x + c)))
            }
            Curve::Trigonometric { .. } => Ok(None),
            Curve::Exponential { scale, .. } => Ok(Some(Point::new(0.0, scale))),
            Curve::Logarithmic { base, scale, shift } => {
                if !valid_log_base(base) {
                    return Err(GeomError::invalid(format!(
                        "logarithm base must be > 0 and != 1, got {base}"
                    )));
                }
                if scale == 0.0 {
                    return Err(GeomError::invalid("logarithm scale must be non-zero"));
                }
                Ok(Some(Point::new(base.powf(-shift / scale), 0.0)))
            }
        }
    }
}

fn valid_log_base(base: f64) -> bool {
    base.is_finite() && base > 0.0 && base != 1.0
}

fn linspace((lo, hi): (f64, f64), n: usize) -> impl Iterator<Item = f64> {
    let n = n.max(2);
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(move |i| lo + step * i as f64)
}

fn positive(name: &str, v: f64) -> Result<f64, GeomError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(GeomError::invalid(format!("{name} must be finite and > 0, got {v}")))
    }
}

/// `(x−h)²/a² + (y−k)²/b² = 1` with the major axis horizontal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    center: Point,
    semi_major: f64,
    semi_minor: f64,
}

impl Ellipse {
    /// Requires `semi_major >= semi_minor > 0`.
    pub fn new(center: Point, semi_major: f64, semi_minor: f64) -> Result<Self, GeomError> {
        let a = positive("semi_major", semi_major)?;
        let b = positive("semi_minor", semi_minor)?;
        if a < b {
            return Err(GeomError::invalid(format!(
                "semi_major ({a}) must not be shorter than semi_minor ({b})"
            )));
        }
        Ok(Self {
            center,
            semi_major: a,
            semi_minor: b,
        })
    }

    /// Center-to-focus distance `√(a² − b²)`.
    #[inline]
    pub fn focal_distance(&self) -> f64 {
        (self.semi_major * self.semi_major - self.semi_minor * self.semi_minor).sqrt()
    }

    pub fn foci(&self) -> [Point; 2] {
        let c = Point::new(self.focal_distance(), 0.0);
        [self.center - c, self.center + c]
    }

    #[inline]
    pub fn eccentricity(&self) -> f64 {
        self.focal_distance() / self.semi_major
    }

    /// Closed polyline of `n` points (first point repeated at the end).
    pub fn sample(&self, n: usize) -> Vec<Point> {
        linspace((0.0, 2.0 * PI), n.max(3))
            .map(|t| {
                self.center + Point::new(self.semi_major * t.cos(), self.semi_minor * t.sin())
            })
            .collect()
    }
}

/// `(x−h)²/a² − (y−k)²/b² = 1` (horizontal) or `(y−k)²/a² − (x−h)²/b² = 1` (vertical).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperbola {
    center: Point,
    semi_major: f64,
    semi_minor: f64,
    horizontal: bool,
}

impl Hyperbola {
    pub fn new(
        center: Point,
        semi_major: f64,
        semi_minor: f64,
        horizontal: bool,
    ) -> Result<Self, GeomError> {
        Ok(Self {
            center,
            semi_major: positive("semi_major", semi_major)?,
            semi_minor: positive("semi_minor", semi_minor)?,
            horizontal,
        })
    }

    /// Upper and lower ordinates at `x`; `None` in the gap `|x − h| < a` of a horizontal hyperbola.
    pub fn branches(&self, x: f64) -> Option<(f64, f64)> {
        let (h, k) = (self.center.x, self.center.y);
        let (a, b) = (self.semi_major, self.semi_minor);
        let dy = if self.horizontal {
            let term = (x - h).powi(2) / (a * a) - 1.0;
            if term < 0.0 {
                return None;
            }
            b * term.sqrt()
        } else {
            a * (1.0 + (x - h).powi(2) / (b * b)).sqrt()
        };
        Some((k + dy, k - dy))
    }

    pub fn default_domain(&self) -> (f64, f64) {
        let axis = if self.horizontal {
            self.semi_major
        } else {
            self.semi_minor
        };
        (self.center.x - axis - 2.0, self.center.x + axis + 2.0)
    }

    /// Foci at distance `√(a² + b²)` along the transverse axis.
    pub fn foci(&self) -> [Point; 2] {
        let c = self.semi_major.hypot(self.semi_minor);
        let off = if self.horizontal {
            Point::new(c, 0.0)
        } else {
            Point::new(0.0, c)
        };
        [self.center - off, self.center + off]
    }

    /// Positive asymptote slope (the other is its negation).
    pub fn asymptote_slope(&self) -> f64 {
        if self.horizontal {
            self.semi_minor / self.semi_major
        } else {
            self.semi_major / self.semi_minor
        }
    }
}

/// Parabola from vertex and focus, opening along the vertical (default) or horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parabola {
    vertex: Point,
    focus: Point,
    horizontal: bool,
}

impl Parabola {
    /// Fails when the focus lies on the vertex along the axis (`|p| < eps_det`).
    pub fn new(vertex: Point, focus: Point, horizontal: bool) -> Result<Self, GeomError> {
        let p = if horizontal {
            focus.x - vertex.x
        } else {
            focus.y - vertex.y
        };
        if !p.is_finite() || p.abs() < GeomCfg::default().eps_det {
            return Err(GeomError::degenerate("parabola", p));
        }
        Ok(Self {
            vertex,
            focus,
            horizontal,
        })
    }

    #[inline]
    pub fn focal_length(&self) -> f64 {
        if self.horizontal {
            self.focus.x - self.vertex.x
        } else {
            self.focus.y - self.vertex.y
        }
    }

    /// `1 / (4p)` in `y = coef·(x−h)² + k` (or `x = coef·(y−k)² + h`).
    #[inline]
    pub fn coefficient(&self) -> f64 {
        1.0 / (4.0 * self.focal_length())
    }

    /// Point at parameter `t` (the free coordinate: `x` for vertical, `y` for horizontal).
    pub fn point_at(&self, t: f64) -> Point {
        let (h, k) = (self.vertex.x, self.vertex.y);
        let a = self.coefficient();
        if self.horizontal {
            Point::new(h + a * (t - k).powi(2), t)
        } else {
            Point::new(t, k + a * (t - h).powi(2))
        }
    }

    /// Parameter range `vertex ± 3` along the free coordinate.
    pub fn default_domain(&self) -> (f64, f64) {
        let m = if self.horizontal {
            self.vertex.y
        } else {
            self.vertex.x
        };
        (m - 3.0, m + 3.0)
    }

    pub fn sample(&self, n: usize) -> Vec<Point> {
        linspace(self.default_domain(), n)
            .map(|t| self.point_at(t))
            .collect()
    }
}

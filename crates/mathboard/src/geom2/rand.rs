//! Random triangles for practice boards (replay tokens + rejection).
//!
//! Model
//! - Vertices are drawn uniformly from the square `[-half_width, half_width]²`,
//!   optionally snapped to integer coordinates so lesson answers stay readable.
//! - Draws that are collinear (per `GeomCfg::eps_det`) or smaller than `min_area`
//!   are rejected and redrawn, up to `max_attempts` times.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so a
//!   board can be regenerated from the two numbers alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{GeomCfg, Point, Triangle};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Half the side length of the sampling square (centered at the origin).
    pub half_width: f64,
    /// Reject triangles with a smaller area.
    pub min_area: f64,
    /// Snap vertices to the integer grid.
    pub integer_coords: bool,
    pub max_attempts: usize,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            half_width: 4.0,
            min_area: 1.0,
            integer_coords: true,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a non-degenerate triangle, or `None` if every attempt was rejected.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Option<Triangle> {
    if !cfg.half_width.is_finite() || cfg.half_width <= 0.0 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let eps_det = GeomCfg::default().eps_det;
    for _ in 0..cfg.max_attempts.max(1) {
        let t = Triangle::new(
            draw_point(&mut rng, cfg),
            draw_point(&mut rng, cfg),
            draw_point(&mut rng, cfg),
        );
        if !t.is_degenerate_eps(eps_det) && t.area() >= cfg.min_area {
            return Some(t);
        }
    }
    None
}

fn draw_point<R: Rng>(rng: &mut R, cfg: TriangleCfg) -> Point {
    let h = cfg.half_width;
    if cfg.integer_coords {
        let k = h.floor() as i64;
        Point::new(rng.gen_range(-k..=k) as f64, rng.gen_range(-k..=k) as f64)
    } else {
        Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
    }
}

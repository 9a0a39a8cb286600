//! Viewport framing for plotted datasets.
//!
//! Purpose
//! - Given a plot kind and its data, derive the rectangle the rendering surface
//!   should show, with a margin around the data.
//! - Plots without a dataset (triangles, circles, function graphs) and empty
//!   datasets get the fixed default viewport, never a box built from `±∞`.
//!
//! Per kind (defaults from `FramingCfg`)
//! - Histogram: `[min − 1, max + 1] × [−2, max_bar + 2]`, bars normalized to height 3.
//! - Scatter: bounding box of the pairs padded by 1 on every side.
//! - Box plot: `[min − 2, max + 2] × [−3, 3]`; the box sits on `y = 0`.
//! - Default: `[-4, 4] × [-4, 4]`.
//!
//! Code cross-refs: `stats::{histogram, box_summary}`, `cfg::FramingCfg`

mod cfg;
pub mod stats;

pub use cfg::FramingCfg;
pub use stats::{box_summary, histogram, median, pearson, BoxSummary, Histogram};

use crate::geom2::Point;

/// Axis-aligned plotting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Symmetric default for plots that carry no dataset.
    pub const DEFAULT: Viewport = Viewport {
        x_min: -4.0,
        x_max: 4.0,
        y_min: -4.0,
        y_max: 4.0,
    };

    #[inline]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Rendering-surface order `[x_min, y_max, x_max, y_min]` (top-left, bottom-right).
    #[inline]
    pub fn bounding_box(&self) -> [f64; 4] {
        [self.x_min, self.y_max, self.x_max, self.y_min]
    }

    /// Inverse of [`Viewport::bounding_box`].
    #[inline]
    pub fn from_bounding_box(bb: [f64; 4]) -> Self {
        Self::new(bb[0], bb[2], bb[3], bb[1])
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Finite bounds and positive extent on both axes.
    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Declared plot kind plus the data it frames.
#[derive(Clone, Copy, Debug)]
pub enum PlotData<'a> {
    /// Flat samples; `bins = None` uses `FramingCfg::histogram_bins`.
    Histogram { data: &'a [f64], bins: Option<usize> },
    /// `(x, y)` pairs.
    Scatter(&'a [[f64; 2]]),
    /// Flat samples.
    BoxPlot(&'a [f64]),
    /// Triangles, circles, function graphs: no dataset.
    Default,
}

/// Frame with the default configuration.
#[inline]
pub fn frame(plot: &PlotData<'_>) -> Viewport {
    frame_cfg(plot, &FramingCfg::default())
}

/// Frame `plot`; empty (or all non-finite) data falls back to `cfg.default_viewport`.
pub fn frame_cfg(plot: &PlotData<'_>, cfg: &FramingCfg) -> Viewport {
    let framed = match *plot {
        PlotData::Histogram { data, bins } => {
            let bins = bins.unwrap_or(cfg.histogram_bins);
            histogram(data, bins, cfg.histogram_bar_height).map(|h| {
                Viewport::new(
                    h.min - cfg.histogram_x_margin,
                    h.max + cfg.histogram_x_margin,
                    cfg.histogram_y_floor,
                    h.max_height() + cfg.histogram_headroom,
                )
            })
        }
        PlotData::Scatter(pairs) => scatter_bounds(pairs).map(|(lo, hi)| {
            let pad = cfg.scatter_padding;
            Viewport::new(lo.x - pad, hi.x + pad, lo.y - pad, hi.y + pad)
        }),
        PlotData::BoxPlot(data) => {
            let finite = data.iter().copied().filter(|v| v.is_finite());
            stats::min_max(finite).map(|(min, max)| {
                Viewport::new(
                    min - cfg.boxplot_x_margin,
                    max + cfg.boxplot_x_margin,
                    -cfg.boxplot_half_height,
                    cfg.boxplot_half_height,
                )
            })
        }
        PlotData::Default => None,
    };
    framed.unwrap_or(cfg.default_viewport)
}

fn scatter_bounds(pairs: &[[f64; 2]]) -> Option<(Point, Point)> {
    pairs
        .iter()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .map(|&[x, y]| Point::new(x, y))
        .fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.inf(&p), hi.sup(&p))),
        })
}

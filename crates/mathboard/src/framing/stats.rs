//! Statistical helpers shared by framing and the plot annotations.
//!
//! Non-finite samples are dropped before any statistic is computed; an input with
//! no finite sample behaves like an empty one.

use std::cmp::Ordering;

/// Binned counts plus normalized bar heights.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    /// `(max − min) / bins`; zero when every sample is equal.
    pub bin_width: f64,
    pub frequencies: Vec<usize>,
    /// `frequency / max_frequency · bar_height` per bin.
    pub heights: Vec<f64>,
}

impl Histogram {
    /// Tallest bar (equals the configured bar height for non-empty data).
    pub fn max_height(&self) -> f64 {
        self.heights.iter().cloned().fold(0.0, f64::max)
    }

    /// Bars as `(left, right, height)`.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.heights.iter().enumerate().map(move |(i, &h)| {
            let left = self.min + i as f64 * self.bin_width;
            (left, left + self.bin_width, h)
        })
    }
}

/// Bin `data` into `bins` equal-width bins over `[min, max]`.
///
/// A value lands in `floor((v − min) / bin_width)`, clamped to the last bin so that
/// `max` itself is counted. `bins` is clamped to `1..=n` for `n` finite samples;
/// extra empty bins would not change the bars' extent. Returns `None` without
/// finite samples.
pub fn histogram(data: &[f64], bins: usize, bar_height: f64) -> Option<Histogram> {
    let values = finite(data);
    let (min, max) = min_max(values.iter().copied())?;
    let bins = bins.clamp(1, values.len());
    let bin_width = (max - min) / bins as f64;
    let mut frequencies = vec![0usize; bins];
    for v in &values {
        let idx = if bin_width > 0.0 {
            (((v - min) / bin_width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        frequencies[idx] += 1;
    }
    let max_freq = frequencies.iter().copied().max().unwrap_or(0).max(1);
    let heights = frequencies
        .iter()
        .map(|&f| f as f64 / max_freq as f64 * bar_height)
        .collect();
    Some(Histogram {
        min,
        max,
        bin_width,
        frequencies,
        heights,
    })
}

/// Five-number summary drawn by the box plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Quartiles by index on the sorted samples: `Q1 = s[⌊n/4⌋]`, `Q3 = s[⌊3n/4⌋]`;
/// the median averages the two middle samples for even `n`.
pub fn box_summary(data: &[f64]) -> Option<BoxSummary> {
    let sorted = sorted_finite(data);
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let at = |frac: f64| sorted[((n as f64 * frac).floor() as usize).min(n - 1)];
    Some(BoxSummary {
        min: sorted[0],
        q1: at(0.25),
        median: median_sorted(&sorted)?,
        q3: at(0.75),
        max: sorted[n - 1],
    })
}

/// Median of unsorted data.
pub fn median(data: &[f64]) -> Option<f64> {
    median_sorted(&sorted_finite(data))
}

fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

/// Pearson correlation coefficient of `(x, y)` pairs.
///
/// `None` for fewer than two pairs or when either coordinate has zero variance.
pub fn pearson(pairs: &[[f64; 2]]) -> Option<f64> {
    let pairs: Vec<[f64; 2]> = pairs
        .iter()
        .copied()
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let (mut sx, mut sy, mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for [x, y] in &pairs {
        sx += x;
        sy += y;
        sxy += x * y;
        sxx += x * x;
        syy += y * y;
    }
    let den = ((n * sxx - sx * sx) * (n * syy - sy * sy)).sqrt();
    if !(den.is_finite()) || den <= 0.0 {
        return None;
    }
    Some(((n * sxy - sx * sy) / den).clamp(-1.0, 1.0))
}

pub(crate) fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn finite(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| v.is_finite()).collect()
}

fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut v = finite(data);
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    v
}

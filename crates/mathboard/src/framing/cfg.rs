//! Framing defaults.
//!
//! The default viewport is the symmetric `[-4, 4] × [-4, 4]` box used for every
//! plot without a dataset (triangles, circles, function graphs).

use super::Viewport;

/// Margins and fallbacks for viewport derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramingCfg {
    /// Returned for data-free plots and for empty datasets.
    pub default_viewport: Viewport,
    /// Bin count when a histogram does not specify one.
    pub histogram_bins: usize,
    /// Height of the tallest histogram bar; other bars scale by `frequency / max_frequency`.
    pub histogram_bar_height: f64,
    /// Horizontal margin on each side of `[min, max]`.
    pub histogram_x_margin: f64,
    /// Bottom edge of the histogram viewport (room for bin labels).
    pub histogram_y_floor: f64,
    /// Space above the tallest bar.
    pub histogram_headroom: f64,
    /// Padding on every side of the scatter bounding box.
    pub scatter_padding: f64,
    /// Horizontal margin around the whiskers.
    pub boxplot_x_margin: f64,
    /// The box is drawn on `y = 0`; the viewport spans `[-h, h]` vertically.
    pub boxplot_half_height: f64,
}

impl Default for FramingCfg {
    fn default() -> Self {
        Self {
            default_viewport: Viewport::DEFAULT,
            histogram_bins: 5,
            histogram_bar_height: 3.0,
            histogram_x_margin: 1.0,
            histogram_y_floor: -2.0,
            histogram_headroom: 2.0,
            scatter_padding: 1.0,
            boxplot_x_margin: 2.0,
            boxplot_half_height: 3.0,
        }
    }
}

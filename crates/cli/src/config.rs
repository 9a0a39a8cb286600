//! Optional JSON config overriding library tolerances and framing margins.
//!
//! Every field is optional; anything left out keeps the library default.
//!
//! ```json
//! { "geometry": { "eps_det": 1e-9 },
//!   "framing":  { "default_viewport": [-5, 5, 5, -5], "histogram_bins": 8 } }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mathboard::{FramingCfg, GeomCfg, Viewport};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub geometry: GeometrySection,
    pub framing: FramingSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometrySection {
    pub eps_det: Option<f64>,
    pub eps_len: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramingSection {
    /// Bounding-box order `[x_min, y_max, x_max, y_min]`.
    pub default_viewport: Option<[f64; 4]>,
    pub histogram_bins: Option<usize>,
    pub histogram_bar_height: Option<f64>,
    pub histogram_x_margin: Option<f64>,
    pub histogram_y_floor: Option<f64>,
    pub histogram_headroom: Option<f64>,
    pub scatter_padding: Option<f64>,
    pub boxplot_x_margin: Option<f64>,
    pub boxplot_half_height: Option<f64>,
}

impl ConfigFile {
    /// Read `path`, or return the all-defaults config when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let cfg: ConfigFile =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(cfg)
    }

    pub fn geom_cfg(&self) -> GeomCfg {
        let d = GeomCfg::default();
        GeomCfg {
            eps_det: self.geometry.eps_det.unwrap_or(d.eps_det),
            eps_len: self.geometry.eps_len.unwrap_or(d.eps_len),
        }
    }

    pub fn framing_cfg(&self) -> FramingCfg {
        let d = FramingCfg::default();
        let f = &self.framing;
        FramingCfg {
            default_viewport: f
                .default_viewport
                .map(Viewport::from_bounding_box)
                .unwrap_or(d.default_viewport),
            histogram_bins: f.histogram_bins.unwrap_or(d.histogram_bins),
            histogram_bar_height: f.histogram_bar_height.unwrap_or(d.histogram_bar_height),
            histogram_x_margin: f.histogram_x_margin.unwrap_or(d.histogram_x_margin),
            histogram_y_floor: f.histogram_y_floor.unwrap_or(d.histogram_y_floor),
            histogram_headroom: f.histogram_headroom.unwrap_or(d.histogram_headroom),
            scatter_padding: f.scatter_padding.unwrap_or(d.scatter_padding),
            boxplot_x_margin: f.boxplot_x_margin.unwrap_or(d.boxplot_x_margin),
            boxplot_half_height: f.boxplot_half_height.unwrap_or(d.boxplot_half_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_path_gives_library_defaults() {
        let cfg = ConfigFile::load(None).unwrap();
        assert_eq!(cfg.geom_cfg(), GeomCfg::default());
        assert_eq!(cfg.framing_cfg(), FramingCfg::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(
            &path,
            r#"{"geometry": {"eps_det": 1e-6},
                "framing": {"default_viewport": [-5, 5, 5, -5], "scatter_padding": 0.5}}"#,
        )
        .unwrap();
        let cfg = ConfigFile::load(Some(&path)).unwrap();
        let g = cfg.geom_cfg();
        assert_eq!(g.eps_det, 1e-6);
        assert_eq!(g.eps_len, GeomCfg::default().eps_len);
        let f = cfg.framing_cfg();
        assert_eq!(f.default_viewport, Viewport::new(-5.0, 5.0, -5.0, 5.0));
        assert_eq!(f.scatter_padding, 0.5);
        assert_eq!(f.histogram_bins, 5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"geometry": {"epsilon": 1}}"#).unwrap();
        assert!(ConfigFile::load(Some(&path)).is_err());
        assert!(ConfigFile::load(Some(&dir.path().join("missing.json"))).is_err());
    }
}

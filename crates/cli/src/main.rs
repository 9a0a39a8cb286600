use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mathboard::framing::{box_summary, histogram, pearson};
use mathboard::geom2::rand::{draw_triangle, ReplayToken, TriangleCfg};
use mathboard::{frame_cfg, Circle, FramingCfg, GeomCfg, PlotData, Point, Triangle};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod dataset;
mod graph;
mod provenance;
mod render;

use config::ConfigFile;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "mathboard")]
#[command(about = "Geometry and plot-framing calculations for lesson boards")]
struct Cmd {
    /// JSON file overriding tolerances and framing margins
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write the JSON result here, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sides, angles, area, and the four centers of a triangle
    Triangle {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: [f64; 2],
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: [f64; 2],
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        c: [f64; 2],
        /// Report angles in degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Area and circumference, optionally testing a point
    Circle {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: [f64; 2],
        #[arg(long)]
        radius: f64,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<[f64; 2]>,
    },
    /// Viewport for a plot kind and its dataset
    Frame {
        #[arg(long, value_enum)]
        kind: PlotKind,
        /// Inline samples, e.g. "1,2,2,3"
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,
        /// Inline pairs, e.g. "1:2,2:3"
        #[arg(long, allow_hyphen_values = true)]
        pairs: Option<String>,
        /// CSV file to read the dataset from
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "value")]
        column: String,
        #[arg(long, default_value = "x")]
        x_column: String,
        #[arg(long, default_value = "y")]
        y_column: String,
        #[arg(long)]
        bins: Option<usize>,
    },
    /// Evaluate a lesson graph descriptor ({"type", "params"} JSON)
    Graph {
        #[arg(long)]
        spec: PathBuf,
    },
    /// Draw a reproducible practice triangle
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlotKind {
    Histogram,
    Scatter,
    Boxplot,
    Default,
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let coord = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {t:?}: {e}"))
    };
    Ok([coord(x)?, coord(y)?])
}

#[inline]
fn pt(c: [f64; 2]) -> Point {
    Point::new(c[0], c[1])
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = ConfigFile::load(cmd.config.as_deref())?;
    let geom = cfg.geom_cfg();
    let framing = cfg.framing_cfg();

    let (result, payload) = match cmd.action {
        Action::Triangle { a, b, c, degrees } => triangle(a, b, c, degrees, geom)?,
        Action::Circle {
            center,
            radius,
            point,
        } => circle(center, radius, point)?,
        Action::Frame {
            kind,
            values,
            pairs,
            input,
            column,
            x_column,
            y_column,
            bins,
        } => {
            let source = DataSource {
                values,
                pairs,
                input,
                column,
                x_column,
                y_column,
            };
            frame(kind, &source, bins, &framing)?
        }
        Action::Graph { spec } => {
            tracing::info!(spec = %spec.display(), "graph");
            let raw = std::fs::read_to_string(&spec)
                .with_context(|| format!("reading {}", spec.display()))?;
            let parsed = graph::GraphSpec::from_json(&raw)
                .with_context(|| format!("parsing {}", spec.display()))?;
            let result = graph::evaluate(&parsed, geom, &framing)?;
            let params = json!({"spec": spec.to_string_lossy(), "type": parsed.kind});
            (result, Payload::new("graph", params))
        }
        Action::Sample { seed, index } => sample(seed, index, geom)?,
        Action::Report => (report(), Payload::new("report", json!({}))),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    if let Some(out) = cmd.out {
        let sidecar = provenance::write_result(&out, &result, payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    }
    Ok(())
}

fn triangle(
    a: [f64; 2],
    b: [f64; 2],
    c: [f64; 2],
    degrees: bool,
    geom: GeomCfg,
) -> Result<(Value, Payload)> {
    tracing::info!(?a, ?b, ?c, "triangle");
    let t = Triangle::new(pt(a), pt(b), pt(c));
    let props = t
        .properties_cfg(geom)
        .with_context(|| format!("triangle {a:?} {b:?} {c:?}"))?;
    tracing::debug!(area = props.area, perimeter = props.perimeter, "triangle_properties");
    let params = json!({"a": a, "b": b, "c": c, "degrees": degrees, "eps_det": geom.eps_det});
    Ok((
        render::triangle(&t, &props, degrees),
        Payload::new("triangle", params),
    ))
}

fn circle(center: [f64; 2], radius: f64, point: Option<[f64; 2]>) -> Result<(Value, Payload)> {
    tracing::info!(?center, radius, "circle");
    let c = Circle::new(pt(center), radius)?;
    let mut result = render::circle(&c, &c.properties());
    if let Some(p) = point {
        result["point"] = json!(p);
        result["contains_point"] = json!(c.contains(pt(p)));
    }
    let params = json!({"center": center, "radius": radius, "point": point});
    Ok((result, Payload::new("circle", params)))
}

struct DataSource {
    values: Option<String>,
    pairs: Option<String>,
    input: Option<PathBuf>,
    column: String,
    x_column: String,
    y_column: String,
}

impl DataSource {
    fn samples(&self) -> Result<Vec<f64>> {
        match (&self.values, &self.input) {
            (Some(v), None) => dataset::parse_values(v),
            (None, Some(path)) => dataset::read_column(path, &self.column),
            (None, None) => Ok(Vec::new()),
            (Some(_), Some(_)) => bail!("pass either --values or --input, not both"),
        }
    }

    fn pairs(&self) -> Result<Vec<[f64; 2]>> {
        match (&self.pairs, &self.input) {
            (Some(v), None) => dataset::parse_pairs(v),
            (None, Some(path)) => dataset::read_pairs(path, &self.x_column, &self.y_column),
            (None, None) => Ok(Vec::new()),
            (Some(_), Some(_)) => bail!("pass either --pairs or --input, not both"),
        }
    }

    fn describe(&self) -> Value {
        json!({
            "values": self.values,
            "pairs": self.pairs,
            "input": self.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "column": self.column,
            "x_column": self.x_column,
            "y_column": self.y_column,
        })
    }
}

fn frame(
    kind: PlotKind,
    source: &DataSource,
    bins: Option<usize>,
    framing: &FramingCfg,
) -> Result<(Value, Payload)> {
    tracing::info!(?kind, "frame");
    let result = match kind {
        PlotKind::Histogram => {
            let data = source.samples()?;
            tracing::debug!(n = data.len(), "samples");
            let vp = frame_cfg(&PlotData::Histogram { data: &data, bins }, framing);
            let h = histogram(
                &data,
                bins.unwrap_or(framing.histogram_bins),
                framing.histogram_bar_height,
            );
            json!({
                "viewport": render::viewport(&vp),
                "histogram": h.as_ref().map(render::histogram),
            })
        }
        PlotKind::Scatter => {
            let pairs = source.pairs()?;
            tracing::debug!(n = pairs.len(), "pairs");
            let vp = frame_cfg(&PlotData::Scatter(&pairs), framing);
            json!({
                "viewport": render::viewport(&vp),
                "correlation": pearson(&pairs),
            })
        }
        PlotKind::Boxplot => {
            let data = source.samples()?;
            tracing::debug!(n = data.len(), "samples");
            let vp = frame_cfg(&PlotData::BoxPlot(&data), framing);
            json!({
                "viewport": render::viewport(&vp),
                "summary": box_summary(&data).as_ref().map(render::box_summary),
            })
        }
        PlotKind::Default => json!({
            "viewport": render::viewport(&frame_cfg(&PlotData::Default, framing)),
        }),
    };
    let mut params = source.describe();
    params["kind"] = json!(format!("{kind:?}").to_lowercase());
    params["bins"] = json!(bins);
    Ok((result, Payload::new("frame", params)))
}

fn sample(seed: u64, index: u64, geom: GeomCfg) -> Result<(Value, Payload)> {
    tracing::info!(seed, index, "sample");
    let tok = ReplayToken { seed, index };
    let cfg = TriangleCfg::default();
    let Some(t) = draw_triangle(cfg, tok) else {
        bail!("no acceptable triangle after {} attempts", cfg.max_attempts);
    };
    let props = t.properties_cfg(geom)?;
    let mut result = render::triangle(&t, &props, true);
    result["replay"] = json!({"seed": seed, "index": index});
    let params = json!({
        "seed": seed,
        "index": index,
        "half_width": cfg.half_width,
        "min_area": cfg.min_area,
    });
    Ok((result, Payload::new("sample", params)))
}

fn report() -> Value {
    json!({
        "version": mathboard::VERSION,
        "code_rev": provenance::current_git_rev(),
        "defaults": {
            "geometry": {
                "eps_det": GeomCfg::default().eps_det,
                "eps_len": GeomCfg::default().eps_len,
            },
            "default_viewport": FramingCfg::default().default_viewport.bounding_box(),
            "histogram_bins": FramingCfg::default().histogram_bins,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_signed_pairs() {
        assert_eq!(parse_point("-3, 2.5").unwrap(), [-3.0, 2.5]);
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_parses_triangle_with_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "mathboard", "triangle", "--a", "-3,-2", "--b", "3,-2", "--c", "0,3", "--degrees",
        ])
        .unwrap();
        match cmd.action {
            Action::Triangle { a, degrees, .. } => {
                assert_eq!(a, [-3.0, -2.0]);
                assert!(degrees);
            }
            _ => panic!("expected triangle"),
        }
    }

    #[test]
    fn degenerate_triangle_fails_the_command() {
        let err = triangle([0.0, 0.0], [1.0, 1.0], [2.0, 2.0], false, GeomCfg::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("degenerate"));
    }

    #[test]
    fn frame_inline_histogram_matches_lesson_board() {
        let source = DataSource {
            values: Some("1,2,2,3,3,3,4,4,5".into()),
            pairs: None,
            input: None,
            column: "value".into(),
            x_column: "x".into(),
            y_column: "y".into(),
        };
        let (v, payload) =
            frame(PlotKind::Histogram, &source, None, &FramingCfg::default()).unwrap();
        let bb = &v["viewport"]["bounding_box"];
        assert_eq!(bb[0], 0.0);
        assert_eq!(bb[2], 6.0);
        assert_eq!(payload.params["kind"], "histogram");
        // No data at all still frames.
        let empty = DataSource {
            values: None,
            ..source
        };
        let (v, _) = frame(PlotKind::Boxplot, &empty, None, &FramingCfg::default()).unwrap();
        assert_eq!(v["viewport"]["bounding_box"], json!([-4.0, 4.0, 4.0, -4.0]));
        assert!(v["summary"].is_null());
    }

    #[test]
    fn circle_reports_containment_and_rejects_bad_radius() {
        let (v, _) = circle([0.0, 0.0], 4.0, Some([4.0, 0.0])).unwrap();
        assert_eq!(v["contains_point"], true);
        assert!(circle([0.0, 0.0], 0.0, None).is_err());
    }

    #[test]
    fn sample_is_replayable() {
        let (a, _) = sample(7, 3, GeomCfg::default()).unwrap();
        let (b, _) = sample(7, 3, GeomCfg::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["angle_unit"], "deg");
    }
}

//! Lesson graph descriptors: `{"type": ..., "params": {...}}` as stored with lesson
//! content, evaluated into a viewport plus the annotations the figure labels.
//!
//! Missing params fall back to the lesson defaults. Unknown types get the default
//! viewport only. A degenerate triangle is reported inside the result (area and
//! centroid stay available) rather than failing the whole figure.

use anyhow::{bail, Result};
use mathboard::curves::{Curve, Ellipse, Hyperbola, Parabola, TrigKind};
use mathboard::framing::{box_summary, histogram, pearson};
use mathboard::{frame_cfg, Circle, FramingCfg, GeomCfg, PlotData, Point, Triangle};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::render;

/// Polyline resolution for function graphs and conics.
const SAMPLES: usize = 101;

const LESSON_HISTOGRAM: [f64; 9] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
const LESSON_SCATTER: [[f64; 2]; 5] = [[1.0, 2.0], [2.0, 3.0], [3.0, 1.0], [4.0, 4.0], [5.0, 2.0]];
const LESSON_BOXPLOT: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

#[derive(Debug, Deserialize)]
pub struct GraphSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: GraphParams,
}

/// Union of the parameters any graph type reads; styling keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphParams {
    pub points: Option<Vec<[f64; 2]>>,
    pub data: Option<Vec<f64>>,
    pub data_pairs: Option<Vec<[f64; 2]>>,
    pub bins: Option<usize>,
    pub domain: Option<[f64; 2]>,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub trig_type: Option<String>,
    pub amplitude: Option<f64>,
    pub frequency: Option<f64>,
    pub phase: Option<f64>,
    pub vertical_shift: Option<f64>,
    pub base: Option<f64>,
    pub scale: Option<f64>,
    pub shift: Option<f64>,
    pub center: Option<[f64; 2]>,
    pub radius: Option<f64>,
    pub semi_major_axis: Option<f64>,
    pub semi_minor_axis: Option<f64>,
    pub horizontal: Option<bool>,
    pub vertex: Option<[f64; 2]>,
    pub focus: Option<[f64; 2]>,
}

impl GraphSpec {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[inline]
fn pt(c: [f64; 2]) -> Point {
    Point::new(c[0], c[1])
}

pub fn evaluate(spec: &GraphSpec, geom: GeomCfg, framing: &FramingCfg) -> Result<Value> {
    let p = &spec.params;
    let kind = spec.kind.as_str();
    let default_vp = render::viewport(&frame_cfg(&PlotData::Default, framing));
    let mut out = match kind {
        "histogram" => {
            let data = p.data.clone().unwrap_or_else(|| LESSON_HISTOGRAM.to_vec());
            let plot = PlotData::Histogram {
                data: &data,
                bins: p.bins,
            };
            let bins = p.bins.unwrap_or(framing.histogram_bins);
            let h = histogram(&data, bins, framing.histogram_bar_height);
            json!({
                "viewport": render::viewport(&frame_cfg(&plot, framing)),
                "histogram": h.as_ref().map(render::histogram),
            })
        }
        "scatter" => {
            let pairs = p
                .data_pairs
                .clone()
                .unwrap_or_else(|| LESSON_SCATTER.to_vec());
            let viewport = render::viewport(&frame_cfg(&PlotData::Scatter(&pairs), framing));
            let correlation = pearson(&pairs);
            json!({
                "viewport": viewport,
                "points": pairs,
                "correlation": correlation,
            })
        }
        "boxplot" => {
            let data = p.data.clone().unwrap_or_else(|| LESSON_BOXPLOT.to_vec());
            json!({
                "viewport": render::viewport(&frame_cfg(&PlotData::BoxPlot(&data), framing)),
                "summary": box_summary(&data).as_ref().map(render::box_summary),
            })
        }
        "triangle" | "centroid" | "circumcenter" | "incenter" | "orthocenter" => {
            let Some(&[a, b, c]) = p.points.as_deref() else {
                bail!("{kind} graph needs exactly three points");
            };
            let t = Triangle::new(pt(a), pt(b), pt(c));
            let triangle = match t.properties_cfg(geom) {
                Ok(props) => render::triangle(&t, &props, false),
                Err(e) => {
                    tracing::warn!(error = %e, kind, "degenerate_triangle");
                    json!({
                        "vertices": render::points(&t.vertices()),
                        "area": t.area_eps(geom.eps_det),
                        "centroid": render::point(t.centroid()),
                        "error": e.to_string(),
                    })
                }
            };
            let highlight = triangle.get(kind).cloned();
            json!({
                "viewport": default_vp,
                "triangle": triangle,
                "highlight": highlight,
            })
        }
        "linear" | "quadratic" | "trigonometric" | "exponential" | "logarithmic" => {
            let curve = curve_from(kind, p)?;
            let domain = p
                .domain
                .map(|[lo, hi]| (lo, hi))
                .unwrap_or_else(|| curve.default_domain());
            json!({
                "viewport": default_vp,
                "domain": [domain.0, domain.1],
                "highlight": curve.key_point()?.map(render::point),
                "samples": render::points(&curve.sample(domain, SAMPLES)),
            })
        }
        "circle" => {
            let circle = Circle::new(pt(p.center.unwrap_or([0.0, 0.0])), p.radius.unwrap_or(2.0))?;
            json!({
                "viewport": default_vp,
                "circle": render::circle(&circle, &circle.properties()),
            })
        }
        "ellipse" => {
            let e = Ellipse::new(
                pt(p.center.unwrap_or([0.0, 0.0])),
                p.semi_major_axis.unwrap_or(3.0),
                p.semi_minor_axis.unwrap_or(2.0),
            )?;
            json!({
                "viewport": default_vp,
                "foci": render::points(&e.foci()),
                "eccentricity": e.eccentricity(),
                "samples": render::points(&e.sample(SAMPLES)),
            })
        }
        "hyperbola" => {
            let h = Hyperbola::new(
                pt(p.center.unwrap_or([0.0, 0.0])),
                p.semi_major_axis.unwrap_or(2.0),
                p.semi_minor_axis.unwrap_or(1.0),
                p.horizontal.unwrap_or(true),
            )?;
            let (lo, hi) = h.default_domain();
            let step = (hi - lo) / (SAMPLES - 1) as f64;
            let (upper, lower): (Vec<Point>, Vec<Point>) = (0..SAMPLES)
                .map(|i| lo + step * i as f64)
                .filter_map(|x| {
                    h.branches(x)
                        .map(|(up, down)| (Point::new(x, up), Point::new(x, down)))
                })
                .unzip();
            json!({
                "viewport": default_vp,
                "domain": [lo, hi],
                "foci": render::points(&h.foci()),
                "asymptote_slope": h.asymptote_slope(),
                "upper": render::points(&upper),
                "lower": render::points(&lower),
            })
        }
        "parabola" => {
            let par = Parabola::new(
                pt(p.vertex.unwrap_or([0.0, 0.0])),
                pt(p.focus.unwrap_or([0.0, 1.0])),
                p.horizontal.unwrap_or(false),
            )?;
            json!({
                "viewport": default_vp,
                "focal_length": par.focal_length(),
                "coefficient": par.coefficient(),
                "samples": render::points(&par.sample(SAMPLES)),
            })
        }
        other => {
            tracing::warn!(kind = other, "unknown_graph_type");
            json!({ "viewport": default_vp })
        }
    };
    out["type"] = json!(kind);
    Ok(out)
}

fn curve_from(kind: &str, p: &GraphParams) -> Result<Curve> {
    Ok(match kind {
        "linear" => Curve::Linear {
            slope: p.slope.unwrap_or(1.0),
            intercept: p.intercept.unwrap_or(0.0),
        },
        "quadratic" => Curve::Quadratic {
            a: p.a.unwrap_or(1.0),
            b: p.b.unwrap_or(0.0),
            c: p.c.unwrap_or(0.0),
        },
        "trigonometric" => Curve::Trigonometric {
            kind: match p.trig_type.as_deref().unwrap_or("sin") {
                "sin" => TrigKind::Sin,
                "cos" => TrigKind::Cos,
                "tan" => TrigKind::Tan,
                other => bail!("unknown trigType {other:?}"),
            },
            amplitude: p.amplitude.unwrap_or(1.0),
            frequency: p.frequency.unwrap_or(1.0),
            phase: p.phase.unwrap_or(0.0),
            vertical_shift: p.vertical_shift.unwrap_or(0.0),
        },
        "exponential" => Curve::Exponential {
            base: p.base.unwrap_or(2.0),
            scale: p.scale.unwrap_or(1.0),
        },
        "logarithmic" => Curve::Logarithmic {
            base: p.base.unwrap_or(2.0),
            scale: p.scale.unwrap_or(1.0),
            shift: p.shift.unwrap_or(0.0),
        },
        other => bail!("{other} is not a function graph"),
    })
}

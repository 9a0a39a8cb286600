//! JSON shapes printed by the subcommands.

use mathboard::framing::{BoxSummary, Histogram};
use mathboard::geom2::CircleProperties;
use mathboard::{Circle, Point, Triangle, TriangleProperties, Viewport};
use serde_json::{json, Value};

#[inline]
pub fn point(p: Point) -> Value {
    json!([p.x, p.y])
}

pub fn points(ps: &[Point]) -> Value {
    Value::Array(ps.iter().copied().map(point).collect())
}

pub fn viewport(vp: &Viewport) -> Value {
    json!({
        "bounding_box": vp.bounding_box(),
        "width": vp.width(),
        "height": vp.height(),
    })
}

pub fn triangle(t: &Triangle, props: &TriangleProperties, degrees: bool) -> Value {
    let (angles, unit) = if degrees {
        (props.angles_deg(), "deg")
    } else {
        (props.angles, "rad")
    };
    json!({
        "vertices": points(&t.vertices()),
        "sides": props.sides,
        "perimeter": props.perimeter,
        "area": props.area,
        "angles": angles,
        "angle_unit": unit,
        "midpoints": points(&t.midpoints()),
        "centroid": point(props.centroid),
        "circumcenter": point(props.circumcenter),
        "incenter": point(props.incenter),
        "orthocenter": point(props.orthocenter),
        "inradius": props.inradius,
        "circumradius": props.circumradius,
    })
}

pub fn circle(c: &Circle, props: &CircleProperties) -> Value {
    json!({
        "center": point(c.center()),
        "radius": c.radius(),
        "area": props.area,
        "circumference": props.circumference,
    })
}

pub fn histogram(h: &Histogram) -> Value {
    let bars: Vec<Value> = h
        .bars()
        .zip(&h.frequencies)
        .map(|((left, right, height), freq)| {
            json!({"left": left, "right": right, "height": height, "frequency": freq})
        })
        .collect();
    json!({
        "min": h.min,
        "max": h.max,
        "bin_width": h.bin_width,
        "bars": bars,
    })
}

pub fn box_summary(s: &BoxSummary) -> Value {
    json!({
        "min": s.min,
        "q1": s.q1,
        "median": s.median,
        "q3": s.q3,
        "max": s.max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_json_carries_unit_and_centers() {
        let t = Triangle::from_coords([[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]);
        let props = t.properties().unwrap();
        let v = triangle(&t, &props, true);
        assert_eq!(v["angle_unit"], "deg");
        assert_eq!(v["area"], 6.0);
        assert_eq!(v["circumcenter"], json!([2.0, 1.5]));
        assert_eq!(v["vertices"][1], json!([4.0, 0.0]));
        let rad = triangle(&t, &props, false);
        assert_eq!(rad["angle_unit"], "rad");
    }

    #[test]
    fn viewport_json_is_bounding_box_order() {
        let v = viewport(&Viewport::DEFAULT);
        assert_eq!(v["bounding_box"], json!([-4.0, 4.0, 4.0, -4.0]));
        assert_eq!(v["width"], 8.0);
    }
}

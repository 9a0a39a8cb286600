//! Walk through the numbers one lesson board shows.
//!
//! Usage:
//!   cargo run -p mathboard --example lesson_board -- triangle
//!   cargo run -p mathboard --example lesson_board -- stats
//!
//! - triangle mode: the classroom triangle A(-3,-2), B(3,-2), C(0,3) with all centers.
//! - stats mode: histogram, scatter, and box-plot viewports for the sample datasets.

use mathboard::framing::{box_summary, frame, histogram, pearson, PlotData};
use mathboard::geom2::Triangle;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "triangle".to_string());
    match mode.as_str() {
        "triangle" => show_triangle(),
        "stats" => show_stats(),
        _ => {
            eprintln!("usage: lesson_board [triangle|stats]");
        }
    }
}

fn show_triangle() {
    let t = Triangle::from_coords([[-3.0, -2.0], [3.0, -2.0], [0.0, 3.0]]);
    match t.properties() {
        Ok(p) => {
            println!("sides (a,b,c) = {:.2?}", p.sides);
            println!("angles (deg)  = {:.1?}", p.angles_deg());
            println!("area = {:.3}, perimeter = {:.3}", p.area, p.perimeter);
            println!("centroid     = ({:.3}, {:.3})", p.centroid.x, p.centroid.y);
            println!("circumcenter = ({:.3}, {:.3})", p.circumcenter.x, p.circumcenter.y);
            println!("incenter     = ({:.3}, {:.3})", p.incenter.x, p.incenter.y);
            println!("orthocenter  = ({:.3}, {:.3})", p.orthocenter.x, p.orthocenter.y);
        }
        Err(e) => eprintln!("{e}"),
    }
}

fn show_stats() {
    let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
    if let Some(h) = histogram(&data, 5, 3.0) {
        println!("histogram frequencies = {:?}", h.frequencies);
    }
    let vp = frame(&PlotData::Histogram {
        data: &data,
        bins: Some(5),
    });
    println!("histogram viewport = {:?}", vp.bounding_box());

    let pairs = [[1.0, 2.0], [2.0, 3.0], [3.0, 1.0], [4.0, 4.0], [5.0, 2.0]];
    println!(
        "scatter viewport = {:?}, r = {:?}",
        frame(&PlotData::Scatter(&pairs)).bounding_box(),
        pearson(&pairs)
    );

    let box_data: Vec<f64> = (1..=10).map(f64::from).collect();
    println!(
        "box summary = {:?}, viewport = {:?}",
        box_summary(&box_data),
        frame(&PlotData::BoxPlot(&box_data)).bounding_box()
    );
}

//! Curated flat API for the board's UI layer (UNSTABLE).
//!
//! Important
//! - This is not a stability promise. It groups the calls a property panel or
//!   plot widget needs so that callers do not depend on the module layout.

// Plane geometry
pub use crate::geom2::{
    circle_area, circle_circumference, degrees_to_radians, distance, is_point_in_circle,
    is_point_in_triangle, midpoint, radians_to_degrees, Circle, CircleProperties, GeomCfg,
    GeomError, Point, Triangle, TriangleProperties,
};
// Random practice triangles
pub use crate::geom2::rand::{draw_triangle, ReplayToken, TriangleCfg};
// Plot framing and statistics
pub use crate::framing::{
    box_summary, frame, frame_cfg, histogram, median, pearson, BoxSummary, FramingCfg, Histogram,
    PlotData, Viewport,
};
// Curve families
pub use crate::curves::{Curve, Ellipse, Hyperbola, Parabola, TrigKind};

/// Triangle properties from `[[x, y]; 3]` vertex coordinates.
pub fn triangle_properties(points: [[f64; 2]; 3]) -> Result<TriangleProperties, GeomError> {
    Triangle::from_coords(points).properties()
}

/// Circle properties, validating the radius.
pub fn circle_properties(center: [f64; 2], radius: f64) -> Result<CircleProperties, GeomError> {
    Ok(Circle::new(Point::new(center[0], center[1]), radius)?.properties())
}

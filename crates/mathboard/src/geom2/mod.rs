//! Plane geometry for the lesson board: distances, triangle metrics and centers,
//! circle metrics, containment tests.
//!
//! Purpose
//! - Derive everything the property panel shows from raw vertex coordinates.
//! - Stay stateless: every call takes plain values and returns fresh values.
//! - Report collinear/coincident input as `GeomError::DegenerateGeometry` instead of
//!   letting NaN or infinity reach the display.
//!
//! Code cross-refs: `Triangle`, `Circle`, `GeomCfg`, `GeomError`

mod circle;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use circle::{circle_area, circle_circumference, is_point_in_circle, CircleProperties};
pub use triangle::{is_point_in_triangle, TriangleProperties};
pub use types::{Circle, GeomCfg, GeomError, Point, Triangle};
pub use util::{degrees_to_radians, distance, midpoint, radians_to_degrees};

#[cfg(test)]
mod tests;

//! Numeric core of the lesson board: plane geometry and plot framing.
//!
//! Everything here is a pure function of its arguments. The rendering surface,
//! lesson content, notation display, and problem generation live elsewhere and
//! call in with plain coordinates.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Callers outside the workspace should prefer the flat surface in `api`.

pub mod api;
pub mod curves;
pub mod framing;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use framing::{frame, frame_cfg, FramingCfg, PlotData, Viewport};
pub use geom2::{Circle, GeomCfg, GeomError, Point, Triangle, TriangleProperties};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curves::{Curve, Ellipse, Hyperbola, Parabola, TrigKind};
    pub use crate::framing::{frame, frame_cfg, FramingCfg, PlotData, Viewport};
    pub use crate::geom2::rand::{draw_triangle, ReplayToken, TriangleCfg};
    pub use crate::geom2::{
        distance, is_point_in_circle, is_point_in_triangle, Circle, CircleProperties, GeomCfg,
        GeomError, Point, Triangle, TriangleProperties,
    };
    pub use nalgebra::Vector2 as Vec2;
}

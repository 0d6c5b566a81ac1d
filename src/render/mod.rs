//! Graph geometry for sampled curves.
//!
//! Rendering here stops at geometry: the renderer produces axis lines and
//! point paths in screen coordinates, and a frontend strokes them.

mod bounds;
mod geometry;
mod renderer;
mod style;

pub use bounds::AxisBounds;
pub use geometry::{Axis, CurvePath, DrawArea, Line, Point};
pub use renderer::{CurveRenderer, RenderedGraph, ScreenMapping, Trace};
pub use style::{Color, RenderStyle};

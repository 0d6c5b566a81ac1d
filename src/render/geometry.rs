//! Plain geometry handed to whatever draws the graph.

use super::Color;
use crate::error::CurveError;

/// A point in screen coordinates; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rectangle a graph is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl DrawArea {
    /// Creates a draw area from its top-left corner and size.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDrawArea`] unless the origin is finite and
    /// both sides are positive and finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, CurveError> {
        let finite = x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite();
        if !finite || width <= 0.0 || height <= 0.0 {
            return Err(CurveError::InvalidDrawArea { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// A draw area anchored at the origin.
    pub fn sized(width: f64, height: f64) -> Result<Self, CurveError> {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// A straight stroke, optionally dashed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Color,
    /// On/off dash lengths; `None` for a solid line
    pub dash: Option<[f64; 2]>,
}

/// The axes of a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// Vertical line at `x = 0`
    pub vertical: Line,
    /// Horizontal line at `y = 0`
    pub baseline: Line,
    /// Dashed line at `y = 1`, present when a spring curve is drawn
    pub target: Option<Line>,
}

/// One stroked curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    pub color: Color,
    pub width: f64,
    pub points: Vec<Point>,
}

//! Curvelab - Timing curve evaluation for animation tooling
//!
//! This library evaluates easing and spring curves, samples them over a time
//! window that fits each curve, and lays the samples out as graph geometry
//! ready for a frontend to draw.

pub mod compare;
pub mod curves;
pub mod error;
pub mod render;
pub mod sampling;

// Re-export commonly used types at the crate root
pub use compare::{Comparison, ComparisonSlot, MAX_SLOTS, PALETTE};
pub use curves::{
    ALTERNATE_INTERACTIVE_DEFAULTS, BOUNCE_SPRING_FREQUENCY, BounceSpring, CubicBezier,
    CurveFamily, CurveSpec, InterpolatingSpring, Linear, MAX_BOUNCE_MAGNITUDE, ParamKey,
    ParamSpec, ParameterSet, ResponseSpring, TimingCurve, evaluate, time_scale,
};
pub use error::{CurveError, ParseError};
pub use render::{
    Axis, AxisBounds, Color, CurvePath, CurveRenderer, DrawArea, Line, Point, RenderStyle,
    RenderedGraph, ScreenMapping, Trace,
};
pub use sampling::{
    MAX_POINT_COUNT, Sample, SampleSequence, Samples, default_point_count, generate,
    generate_default, generate_with_time_scale,
};

#[cfg(feature = "macros")]
pub use curvelab_macros::curve;

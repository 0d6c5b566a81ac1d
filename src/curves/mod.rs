//! Timing-curve math.
//!
//! This module maps a curve family, its parameters and a time `t` to a
//! progress value. It provides:
//! - `TimingCurve` trait for anything evaluable over time
//! - `CubicBezier` for the eased families
//! - `BounceSpring`, `InterpolatingSpring` and `ResponseSpring` for springs
//! - `CurveSpec`, a validated family plus parameters
//! - the parameter table and the time-scale policy

mod bezier;
mod family;
mod params;
mod spec;
mod spring;
mod time_scale;

pub use bezier::CubicBezier;
pub use family::CurveFamily;
pub use params::{
    ALTERNATE_INTERACTIVE_DEFAULTS, MAX_BOUNCE_MAGNITUDE, ParamKey, ParamSpec, ParameterSet,
};
pub use spec::{CurveSpec, evaluate};
pub use spring::{BOUNCE_SPRING_FREQUENCY, BounceSpring, InterpolatingSpring, ResponseSpring};
pub use time_scale::time_scale;

/// Common interface for everything that maps time to progress.
///
/// Progress starts at 0 for `t <= 0` and ends at, or settles toward, 1.
/// Values outside `[0, 1]` mean overshoot.
pub trait TimingCurve {
    /// Progress at time `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Normalized time; values past 1 show overshoot and settling
    fn progress(&self, t: f64) -> f64;

    /// Multiplier for how far past `t = 1` this curve should be sampled.
    ///
    /// Defaults to 1.0 for curves that are finished at `t = 1`.
    fn time_scale(&self) -> f64 {
        1.0
    }
}

/// Linear progress, `y = t`.
///
/// # Examples
///
/// ```
/// use curvelab::{Linear, TimingCurve};
///
/// assert_eq!(Linear.progress(0.25), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Linear;

impl TimingCurve for Linear {
    fn progress(&self, t: f64) -> f64 {
        t
    }
}

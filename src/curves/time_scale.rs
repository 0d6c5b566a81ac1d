//! How far past `t = 1` a curve is sampled.
//!
//! Oscillating springs keep moving after their nominal duration. Plotting
//! them over `[0, 1]` would cut them off mid-bounce, so each spring family
//! gets a longer window the bouncier it is.

use super::{CurveFamily, InterpolatingSpring, ParamKey, ParameterSet};
use crate::error::CurveError;

/// Interpolating springs below this damping ratio get the long window.
const LOOSE_SPRING_RATIO: f64 = 0.5;

/// Window multiplier for loosely damped interpolating springs.
const LOOSE_SPRING_SCALE: f64 = 1.5;

/// Computes the sampling window for `family` without validating `params`.
///
/// The result is never below 1.0.
pub(crate) fn scale_for(family: CurveFamily, params: &ParameterSet) -> f64 {
    let value = |key| params.resolve(family, key);
    let scale = match family {
        CurveFamily::Spring => 1.0 + value(ParamKey::Bounce) * 1.2,
        CurveFamily::Smooth => 1.0 + value(ParamKey::ExtraBounce),
        CurveFamily::Snappy => 1.0 + value(ParamKey::ExtraBounce) * 0.8,
        CurveFamily::Bouncy => 1.2 + value(ParamKey::ExtraBounce),
        CurveFamily::InterpolatingSpring => {
            if InterpolatingSpring::from_params(params).damping_ratio() < LOOSE_SPRING_RATIO {
                LOOSE_SPRING_SCALE
            } else {
                1.0
            }
        }
        CurveFamily::InteractiveSpring => 1.0 + (1.0 - value(ParamKey::DampingFraction)) * 0.8,
        CurveFamily::Default
        | CurveFamily::Linear
        | CurveFamily::EaseIn
        | CurveFamily::EaseOut
        | CurveFamily::EaseInOut => 1.0,
    };
    scale.max(1.0)
}

/// Returns the multiplier applied to the sampled time window.
///
/// # Errors
///
/// Returns [`CurveError::InvalidParameter`] if a parameter the family reads
/// is out of its domain.
///
/// # Examples
///
/// ```
/// use curvelab::{time_scale, CurveFamily, ParamKey, ParameterSet};
///
/// let params = ParameterSet::new().with(ParamKey::Bounce, 0.5);
/// let scale = time_scale(CurveFamily::Spring, &params).unwrap();
/// assert!((scale - 1.6).abs() < 1e-12);
///
/// assert_eq!(time_scale(CurveFamily::EaseIn, &ParameterSet::new()).unwrap(), 1.0);
/// ```
pub fn time_scale(family: CurveFamily, params: &ParameterSet) -> Result<f64, CurveError> {
    params.validate_for(family)?;
    Ok(scale_for(family, params))
}

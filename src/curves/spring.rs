//! Closed-form step responses of damped springs.
//!
//! Every spring here starts at rest at 0 and settles at 1. Underdamped
//! springs (damping ratio below 1) overshoot and oscillate; the others
//! approach 1 without crossing it.

use std::f64::consts::PI;

use super::{CurveFamily, ParamKey, ParameterSet, TimingCurve};

/// Natural frequency shared by the bounce-parameterized springs, in rad/s.
pub const BOUNCE_SPRING_FREQUENCY: f64 = 12.0;

/// Bounce values above this behave the same.
const MAX_BOUNCE: f64 = 1.4;

/// Damping ratio never drops below this, however large the bounce.
const MIN_DAMPING_RATIO: f64 = 0.1;

/// How close to 1 a damping ratio must be to count as critical.
const CRITICAL_TOLERANCE: f64 = 1e-6;

/// Non-oscillating response `1 - e^(-wt)(1 + wt)`.
fn critically_damped(omega: f64, t: f64) -> f64 {
    1.0 - (-omega * t).exp() * (1.0 + omega * t)
}

/// Oscillating response for a damping ratio in `[0, 1)`.
fn underdamped(omega: f64, ratio: f64, t: f64) -> f64 {
    let damped_omega = omega * (1.0 - ratio * ratio).sqrt();
    let envelope = (-ratio * omega * t).exp();
    1.0 - envelope
        * ((damped_omega * t).cos() + (ratio * omega / damped_omega) * (damped_omega * t).sin())
}

/// Response used by the bounce and interactive springs: oscillating below
/// ratio 1, the critical form at or above it.
fn damped_response(omega: f64, ratio: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if ratio >= 1.0 {
        critically_damped(omega, t)
    } else {
        underdamped(omega, ratio, t)
    }
}

/// Bounce a preset family feeds its spring; 0 for other families.
pub(crate) fn preset_bounce(family: CurveFamily, params: &ParameterSet) -> f64 {
    let extra = || params.resolve(family, ParamKey::ExtraBounce);
    match family {
        CurveFamily::Smooth => extra() * 1.2,
        CurveFamily::Spring => params.resolve(family, ParamKey::Bounce),
        CurveFamily::Snappy => 0.2 + extra(),
        CurveFamily::Bouncy => 0.5 + extra() * 0.9,
        _ => 0.0,
    }
}

/// A spring described by a single `bounce` amount.
///
/// This is the shape behind the `spring`, `smooth`, `snappy` and `bouncy`
/// families. More bounce means a lower damping ratio:
/// `ratio = max(0.1, 1 - min(bounce, 1.4) * 0.85)`, at a fixed natural
/// frequency of 12 rad/s.
///
/// # Examples
///
/// ```
/// use curvelab::{BounceSpring, TimingCurve};
///
/// let spring = BounceSpring::new(0.3);
/// assert_eq!(spring.progress(0.0), 0.0);
/// assert!((spring.progress(2.0) - 1.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceSpring {
    bounce: f64,
}

impl BounceSpring {
    pub fn new(bounce: f64) -> Self {
        Self { bounce }
    }

    /// Builds the spring a preset family uses for the given parameters.
    ///
    /// Returns `None` for families that are not bounce-parameterized.
    pub fn for_family(family: CurveFamily, params: &ParameterSet) -> Option<Self> {
        matches!(
            family,
            CurveFamily::Smooth | CurveFamily::Spring | CurveFamily::Snappy | CurveFamily::Bouncy
        )
        .then(|| Self::new(preset_bounce(family, params)))
    }

    pub fn bounce(&self) -> f64 {
        self.bounce
    }

    pub fn damping_ratio(&self) -> f64 {
        let bounce = self.bounce.min(MAX_BOUNCE);
        (1.0 - bounce * 0.85).max(MIN_DAMPING_RATIO)
    }
}

impl TimingCurve for BounceSpring {
    fn progress(&self, t: f64) -> f64 {
        damped_response(BOUNCE_SPRING_FREQUENCY, self.damping_ratio(), t)
    }
}

/// A unit-mass spring with explicit stiffness and damping.
///
/// Unlike the other springs this one distinguishes all three regimes: the
/// overdamped case uses the two real roots of the characteristic equation
/// and the critical case uses `1 - e^(-wt)(1 + wt)`.
///
/// # Examples
///
/// ```
/// use curvelab::{InterpolatingSpring, TimingCurve};
///
/// let spring = InterpolatingSpring::new(400.0, 40.0);
/// assert_eq!(spring.damping_ratio(), 1.0);
/// let t: f64 = 0.1;
/// let expected = 1.0 - (-20.0 * t).exp() * (1.0 + 20.0 * t);
/// assert!((spring.progress(t) - expected).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatingSpring {
    stiffness: f64,
    damping: f64,
}

impl InterpolatingSpring {
    /// Creates a spring. Both arguments are expected to be positive.
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }

    pub fn from_params(params: &ParameterSet) -> Self {
        let family = CurveFamily::InterpolatingSpring;
        Self::new(
            params.resolve(family, ParamKey::Stiffness),
            params.resolve(family, ParamKey::Damping),
        )
    }

    /// Natural frequency `sqrt(stiffness)`.
    pub fn omega(&self) -> f64 {
        self.stiffness.sqrt()
    }

    /// `damping / (2 * sqrt(stiffness))`
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }
}

impl TimingCurve for InterpolatingSpring {
    fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let omega = self.omega();
        let ratio = self.damping_ratio();

        if (ratio - 1.0).abs() < CRITICAL_TOLERANCE {
            // The two-root form divides by zero here
            critically_damped(omega, t)
        } else if ratio > 1.0 {
            let spread = (ratio * ratio - 1.0).sqrt();
            let r1 = -omega * (ratio - spread);
            let r2 = -omega * (ratio + spread);
            let c2 = -r1 / (r2 - r1);
            let c1 = 1.0 - c2;
            1.0 - (c1 * (r1 * t).exp() + c2 * (r2 * t).exp())
        } else {
            underdamped(omega, ratio, t)
        }
    }
}

/// A spring described by its response time and damping fraction.
///
/// Used by the `interactiveSpring` family. The natural frequency is
/// `2 * PI / response` and the damping fraction is the damping ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseSpring {
    response: f64,
    damping_fraction: f64,
}

impl ResponseSpring {
    /// Creates a spring. `response` is expected to be positive.
    pub fn new(response: f64, damping_fraction: f64) -> Self {
        Self {
            response,
            damping_fraction,
        }
    }

    pub fn from_params(params: &ParameterSet) -> Self {
        let family = CurveFamily::InteractiveSpring;
        Self::new(
            params.resolve(family, ParamKey::Response),
            params.resolve(family, ParamKey::DampingFraction),
        )
    }

    pub fn omega(&self) -> f64 {
        2.0 * PI / self.response
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping_fraction
    }
}

impl TimingCurve for ResponseSpring {
    fn progress(&self, t: f64) -> f64 {
        damped_response(self.omega(), self.damping_ratio(), t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn local_maxima(curve: &impl TimingCurve, end: f64) -> usize {
        let values: Vec<f64> = (0..=1000)
            .map(|i| curve.progress(end * i as f64 / 1000.0))
            .collect();
        values
            .windows(3)
            .filter(|w| w[1] > w[0] && w[1] > w[2])
            .count()
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(BounceSpring::new(0.3).progress(0.0), 0.0);
        assert_eq!(BounceSpring::new(0.3).progress(-1.0), 0.0);
        assert_eq!(InterpolatingSpring::new(170.0, 15.0).progress(0.0), 0.0);
        assert_eq!(ResponseSpring::new(0.15, 0.86).progress(0.0), 0.0);
    }

    #[test]
    fn test_bounce_damping_ratio() {
        assert!(approx_eq(BounceSpring::new(0.0).damping_ratio(), 1.0));
        assert!(approx_eq(BounceSpring::new(0.3).damping_ratio(), 0.745));
        // Clamped bounce and ratio floor
        assert!(approx_eq(BounceSpring::new(5.0).damping_ratio(), 0.1));
        assert!(approx_eq(BounceSpring::new(1.4).damping_ratio(), 0.1));
        // Negative bounce overdamps
        assert!(BounceSpring::new(-0.5).damping_ratio() > 1.0);
    }

    #[test]
    fn test_family_bounce_mapping() {
        let params = ParameterSet::new().with(ParamKey::ExtraBounce, 0.5);
        let bounce = |family| BounceSpring::for_family(family, &params).unwrap().bounce();
        assert!(approx_eq(bounce(CurveFamily::Smooth), 0.6));
        assert!(approx_eq(bounce(CurveFamily::Snappy), 0.7));
        assert!(approx_eq(bounce(CurveFamily::Bouncy), 0.95));

        let spring = BounceSpring::for_family(CurveFamily::Spring, &ParameterSet::new()).unwrap();
        assert!(approx_eq(spring.bounce(), 0.3));

        assert!(BounceSpring::for_family(CurveFamily::Linear, &params).is_none());
    }

    #[test]
    fn test_critical_bounce_spring_matches_formula() {
        let spring = BounceSpring::new(0.0);
        for t in [0.05_f64, 0.1, 0.3] {
            let expected = 1.0 - (-12.0 * t).exp() * (1.0 + 12.0 * t);
            assert!(approx_eq(spring.progress(t), expected));
        }
    }

    #[test]
    fn test_underdamped_overshoots() {
        let spring = BounceSpring::new(0.8);
        let peak = (0..200)
            .map(|i| spring.progress(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "expected overshoot, peak = {peak}");
    }

    #[test]
    fn test_interpolating_regimes() {
        // ratio = 15 / (2 * sqrt(170)) ~ 0.575
        let spring = InterpolatingSpring::new(170.0, 15.0);
        assert!((spring.damping_ratio() - 0.5752).abs() < 1e-3);

        // Critical: sqrt(400) = 20, ratio exactly 1
        let critical = InterpolatingSpring::new(400.0, 40.0);
        for t in [0.05_f64, 0.1, 0.5] {
            let expected = 1.0 - (-20.0 * t).exp() * (1.0 + 20.0 * t);
            assert!(approx_eq(critical.progress(t), expected));
        }

        // Overdamped never overshoots and is still finite
        let over = InterpolatingSpring::new(100.0, 60.0);
        assert!(over.damping_ratio() > 1.0);
        for i in 0..300 {
            let y = over.progress(i as f64 / 100.0);
            assert!(y.is_finite() && y <= 1.0);
        }
    }

    #[test]
    fn test_overdamped_is_continuous_near_critical() {
        let critical = InterpolatingSpring::new(400.0, 40.0);
        let nearly = InterpolatingSpring::new(400.0, 40.001);
        for t in [0.05, 0.1, 0.2] {
            assert!((critical.progress(t) - nearly.progress(t)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_response_spring() {
        let spring = ResponseSpring::new(0.5, 0.7);
        assert!(approx_eq(spring.omega(), 4.0 * PI));
        assert_eq!(spring.damping_ratio(), 0.7);

        // At ratio exactly 1 the critical form is used
        let critical = ResponseSpring::new(0.5, 1.0);
        let t = 0.2;
        assert!(approx_eq(critical.progress(t), critically_damped(4.0 * PI, t)));
    }

    #[test]
    fn test_more_damping_fewer_bounces() {
        let loose = local_maxima(&BounceSpring::new(1.0), 2.0);
        let tight = local_maxima(&BounceSpring::new(0.3), 2.0);
        assert!(loose > tight, "loose = {loose}, tight = {tight}");
        assert_eq!(local_maxima(&BounceSpring::new(0.0), 2.0), 0);
    }

    #[test]
    fn test_interpolating_bounces_fade_with_damping() {
        // sqrt(170) ~ 13.04, so damping 23 keeps the ratio just under 0.9
        let counts: Vec<usize> = [1.0, 4.0, 8.0, 12.0, 16.0, 20.0, 23.0]
            .into_iter()
            .map(|damping| local_maxima(&InterpolatingSpring::new(170.0, damping), 1.5))
            .collect();
        assert!(counts.windows(2).all(|w| w[1] <= w[0]), "{counts:?}");
        assert!(counts[0] > counts[counts.len() - 1], "{counts:?}");
        assert_eq!(local_maxima(&InterpolatingSpring::new(170.0, 40.0), 1.5), 0);
    }

    #[test]
    fn test_response_bounces_fade_with_damping_fraction() {
        let counts: Vec<usize> = [0.05, 0.2, 0.4, 0.6, 0.8, 0.9]
            .into_iter()
            .map(|fraction| local_maxima(&ResponseSpring::new(0.4, fraction), 2.0))
            .collect();
        assert!(counts.windows(2).all(|w| w[1] <= w[0]), "{counts:?}");
        assert!(counts[0] > counts[counts.len() - 1], "{counts:?}");
        assert_eq!(local_maxima(&ResponseSpring::new(0.4, 1.0), 2.0), 0);
    }
}

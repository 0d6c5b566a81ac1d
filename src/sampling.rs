//! Turning curves into finite sample sequences.
//!
//! A curve is sampled over `t` in `[0, time_scale]`, but samples are stored
//! with a normalized `x` in `[0, 1]` so every sequence plots across the
//! same width regardless of how long its window is.

use std::iter::FusedIterator;

use tracing::trace;

use crate::curves::{CurveFamily, CurveSpec, TimingCurve};
use crate::error::CurveError;

/// Samples per unit of time scale when no explicit count is given.
pub const SAMPLES_PER_UNIT: f64 = 100.0;

/// Largest sample count a sequence may hold.
pub const MAX_POINT_COUNT: usize = 10_000;

/// Number of samples used for a window of `time_scale` units.
///
/// Keeps the visual density constant: a window twice as long gets twice as
/// many samples. Never returns less than 2.
///
/// # Errors
///
/// Returns [`CurveError::InvalidTimeScale`] for a non-positive or non-finite
/// window and [`CurveError::TooManySamples`] when the count would exceed
/// [`MAX_POINT_COUNT`].
pub fn default_point_count(time_scale: f64) -> Result<usize, CurveError> {
    if !(time_scale.is_finite() && time_scale > 0.0) {
        return Err(CurveError::InvalidTimeScale(time_scale));
    }
    let count = (SAMPLES_PER_UNIT * time_scale).round();
    if count > MAX_POINT_COUNT as f64 {
        return Err(CurveError::TooManySamples {
            count: count as usize,
            max: MAX_POINT_COUNT,
        });
    }
    Ok((count as usize).max(2))
}

/// One point of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Normalized position in the window, in `[0, 1]`
    pub x: f64,
    /// Progress at `t = x * time_scale`
    pub y: f64,
}

/// Lazy sampler over any [`TimingCurve`].
///
/// Yields `count` evenly spaced samples with `x` running from exactly 0 to
/// exactly 1. Build a new one to sample again.
///
/// # Examples
///
/// ```
/// use curvelab::{Linear, Samples};
///
/// let xs: Vec<f64> = Samples::new(&Linear, 5, 1.0).unwrap().map(|s| s.x).collect();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug)]
pub struct Samples<'a, C: TimingCurve + ?Sized> {
    curve: &'a C,
    count: usize,
    time_scale: f64,
    index: usize,
}

impl<'a, C: TimingCurve + ?Sized> Samples<'a, C> {
    /// Creates a sampler.
    ///
    /// # Arguments
    ///
    /// * `curve` - Curve to sample
    /// * `count` - Number of samples, from 2 to [`MAX_POINT_COUNT`]
    /// * `time_scale` - Length of the sampled time window, positive and finite
    pub fn new(curve: &'a C, count: usize, time_scale: f64) -> Result<Self, CurveError> {
        if count < 2 {
            return Err(CurveError::TooFewSamples(count));
        }
        if count > MAX_POINT_COUNT {
            return Err(CurveError::TooManySamples {
                count,
                max: MAX_POINT_COUNT,
            });
        }
        if !(time_scale.is_finite() && time_scale > 0.0) {
            return Err(CurveError::InvalidTimeScale(time_scale));
        }
        Ok(Self {
            curve,
            count,
            time_scale,
            index: 0,
        })
    }

    /// Samples over the curve's own time scale.
    pub fn over_time_scale(curve: &'a C, count: usize) -> Result<Self, CurveError> {
        Self::new(curve, count, curve.time_scale())
    }
}

impl<C: TimingCurve + ?Sized> Iterator for Samples<'_, C> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= self.count {
            return None;
        }
        let x = self.index as f64 / (self.count - 1) as f64;
        self.index += 1;
        Some(Sample {
            x,
            y: self.curve.progress(x * self.time_scale),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: TimingCurve + ?Sized> ExactSizeIterator for Samples<'_, C> {}

impl<C: TimingCurve + ?Sized> FusedIterator for Samples<'_, C> {}

/// An immutable, ordered run of samples for one curve.
///
/// Always non-empty, with `x` strictly increasing from exactly 0 to exactly 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    family: CurveFamily,
    time_scale: f64,
    samples: Vec<Sample>,
}

impl SampleSequence {
    /// Wraps samples produced elsewhere, checking the ordering invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidSequence`] if the samples are empty, do
    /// not start at `x = 0` or end at `x = 1`, are not strictly increasing in
    /// `x`, or contain non-finite values.
    pub fn from_samples(
        family: CurveFamily,
        time_scale: f64,
        samples: Vec<Sample>,
    ) -> Result<Self, CurveError> {
        if !(time_scale.is_finite() && time_scale > 0.0) {
            return Err(CurveError::InvalidTimeScale(time_scale));
        }
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(CurveError::InvalidSequence("no samples"));
        };
        if first.x != 0.0 || last.x != 1.0 {
            return Err(CurveError::InvalidSequence("x must run from 0 to 1"));
        }
        if samples.windows(2).any(|pair| pair[1].x <= pair[0].x) {
            return Err(CurveError::InvalidSequence("x must be strictly increasing"));
        }
        if samples.iter().any(|s| !s.y.is_finite()) {
            return Err(CurveError::InvalidSequence("y must be finite"));
        }
        Ok(Self {
            family,
            time_scale,
            samples,
        })
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    /// Length of the time window the samples cover.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest and largest `y`.
    pub fn y_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.y), hi.max(s.y))
            })
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

fn collect(
    spec: &CurveSpec,
    point_count: usize,
    time_scale: f64,
) -> Result<SampleSequence, CurveError> {
    let samples: Vec<Sample> = Samples::new(spec, point_count, time_scale)?.collect();
    trace!(
        family = %spec.family(),
        point_count,
        time_scale,
        "generated samples"
    );
    SampleSequence::from_samples(spec.family(), time_scale, samples)
}

/// Samples `spec` with `point_count` points over its own time scale.
///
/// # Errors
///
/// Returns [`CurveError::TooFewSamples`] if `point_count < 2`,
/// [`CurveError::TooManySamples`] above [`MAX_POINT_COUNT`], and
/// [`CurveError::InvalidSequence`] if the curve produced a non-finite value.
///
/// # Examples
///
/// ```
/// use curvelab::{generate, CurveFamily, CurveSpec};
///
/// let linear = CurveSpec::with_defaults(CurveFamily::Linear);
/// let sequence = generate(&linear, 5).unwrap();
/// let ys: Vec<f64> = sequence.iter().map(|s| s.y).collect();
/// assert_eq!(ys, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn generate(spec: &CurveSpec, point_count: usize) -> Result<SampleSequence, CurveError> {
    collect(spec, point_count, spec.time_scale())
}

/// Samples `spec` over an explicit time window.
///
/// Used when several curves must share one time axis.
pub fn generate_with_time_scale(
    spec: &CurveSpec,
    point_count: usize,
    time_scale: f64,
) -> Result<SampleSequence, CurveError> {
    collect(spec, point_count, time_scale)
}

/// Samples `spec` at the reference density, `round(100 * time_scale)` points.
pub fn generate_default(spec: &CurveSpec) -> Result<SampleSequence, CurveError> {
    let time_scale = spec.time_scale();
    collect(spec, default_point_count(time_scale)?, time_scale)
}

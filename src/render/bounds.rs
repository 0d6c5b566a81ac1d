//! Vertical extent of a graph.

use crate::error::CurveError;
use crate::sampling::SampleSequence;

/// The y range a graph maps onto its height.
///
/// Always contains `[0, 1]` so the start and end reference lines stay
/// visible, and so the range is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    min: f64,
    max: f64,
}

impl AxisBounds {
    /// The bounds used when there is nothing to plot.
    pub const UNIT: AxisBounds = AxisBounds { min: 0.0, max: 1.0 };

    /// Creates bounds, checking that they contain `[0, 1]`.
    pub fn new(min: f64, max: f64) -> Result<Self, CurveError> {
        if !(min.is_finite() && max.is_finite()) || min > 0.0 || max < 1.0 {
            return Err(CurveError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds covering every sequence, padded by `padding_ratio` of the
    /// observed range on each side.
    ///
    /// # Examples
    ///
    /// ```
    /// use curvelab::{AxisBounds, CurveFamily, Sample, SampleSequence};
    ///
    /// let overshoot = SampleSequence::from_samples(
    ///     CurveFamily::Bouncy,
    ///     1.2,
    ///     vec![Sample { x: 0.0, y: 0.0 }, Sample { x: 0.5, y: 1.3 }, Sample { x: 1.0, y: 1.0 }],
    /// ).unwrap();
    /// let bounds = AxisBounds::from_sequences([&overshoot], 0.1);
    /// assert!((bounds.max() - 1.43).abs() < 1e-9);
    /// assert!((bounds.min() + 0.13).abs() < 1e-9);
    /// ```
    pub fn from_sequences<'a, I>(sequences: I, padding_ratio: f64) -> Self
    where
        I: IntoIterator<Item = &'a SampleSequence>,
    {
        let (lo, hi) = sequences
            .into_iter()
            .map(SampleSequence::y_range)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
                (lo.min(a), hi.max(b))
            });
        if lo > hi {
            return Self::UNIT;
        }
        let padding = (hi - lo) * padding_ratio.max(0.0);
        Self {
            min: (lo - padding).min(0.0),
            max: (hi + padding).max(1.0),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`; at least 1.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `y` within the bounds, 0 at `min` and 1 at `max`.
    pub fn normalize(&self, y: f64) -> f64 {
        (y - self.min) / self.range()
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::UNIT
    }
}

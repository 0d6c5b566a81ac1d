//! Curve parameters and the table describing which family reads which.
//!
//! [`CurveFamily::param_specs`] is the one place defaults, slider ranges,
//! step sizes and display precision live. Math, descriptor parsing, the
//! `curve!` macro's compile-time checks and UI helpers all read it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::CurveFamily;
use crate::error::{CurveError, ParseError};

/// Largest bounce or extra bounce, in either direction.
pub const MAX_BOUNCE_MAGNITUDE: f64 = 2.0;

/// Names of the tunable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ParamKey {
    /// Animation length in seconds; informational for the curve shape
    Duration,
    /// Bounce of the `spring` family
    Bounce,
    /// Extra bounce on top of a preset spring's own
    ExtraBounce,
    /// Spring constant of an interpolating spring (mass is 1)
    Stiffness,
    /// Damping coefficient of an interpolating spring
    Damping,
    /// Period of the undamped interactive spring, in seconds
    Response,
    /// Damping ratio of the interactive spring
    DampingFraction,
}

impl ParamKey {
    /// Every key, in canonical order.
    pub const ALL: [ParamKey; 7] = [
        ParamKey::Duration,
        ParamKey::Bounce,
        ParamKey::ExtraBounce,
        ParamKey::Stiffness,
        ParamKey::Damping,
        ParamKey::Response,
        ParamKey::DampingFraction,
    ];

    /// Canonical camelCase name.
    pub const fn name(self) -> &'static str {
        match self {
            ParamKey::Duration => "duration",
            ParamKey::Bounce => "bounce",
            ParamKey::ExtraBounce => "extraBounce",
            ParamKey::Stiffness => "stiffness",
            ParamKey::Damping => "damping",
            ParamKey::Response => "response",
            ParamKey::DampingFraction => "dampingFraction",
        }
    }

    /// Closed range of values this key accepts.
    ///
    /// Wider than the slider ranges in the parameter table, but narrow enough
    /// that every spring formula stays finite and the sampled window stays
    /// short.
    pub const fn domain(self) -> (f64, f64) {
        match self {
            ParamKey::Duration => (0.0, 60.0),
            ParamKey::Bounce | ParamKey::ExtraBounce => {
                (-MAX_BOUNCE_MAGNITUDE, MAX_BOUNCE_MAGNITUDE)
            }
            ParamKey::Stiffness => (1e-3, 1e6),
            ParamKey::Damping => (1e-3, 1e4),
            ParamKey::Response => (1e-3, 1e3),
            ParamKey::DampingFraction => (0.0, 100.0),
        }
    }

    /// Returns true if `value` lies in [`ParamKey::domain`].
    ///
    /// NaN and infinities are always rejected. This is a const fn so the
    /// `curve!` macro can check literals at compile time.
    pub const fn accepts(self, value: f64) -> bool {
        let (min, max) = self.domain();
        value >= min && value <= max
    }

    /// Checks `value` against [`ParamKey::accepts`].
    pub fn check(self, value: f64) -> Result<f64, CurveError> {
        if self.accepts(value) {
            Ok(value)
        } else {
            let (min, max) = self.domain();
            Err(CurveError::InvalidParameter {
                key: self,
                value,
                min,
                max,
            })
        }
    }
}

const BEZIER_PARAMS: [ParamSpec; 1] = [ParamSpec::new(ParamKey::Duration, 0.35, 0.1, 2.0, 0.05, 2)];

const PRESET_SPRING_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new(ParamKey::Duration, 0.5, 0.1, 2.0, 0.05, 2),
    ParamSpec::new(ParamKey::ExtraBounce, 0.0, 0.0, 1.0, 0.05, 2),
];

const SPRING_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new(ParamKey::Duration, 0.5, 0.1, 2.0, 0.05, 2),
    ParamSpec::new(ParamKey::Bounce, 0.3, 0.0, 1.0, 0.05, 2),
];

const INTERPOLATING_SPRING_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new(ParamKey::Stiffness, 170.0, 10.0, 500.0, 5.0, 0),
    ParamSpec::new(ParamKey::Damping, 15.0, 1.0, 50.0, 0.5, 1),
];

const INTERACTIVE_SPRING_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new(ParamKey::Response, 0.15, 0.05, 1.0, 0.01, 2),
    ParamSpec::new(ParamKey::DampingFraction, 0.86, 0.1, 1.0, 0.01, 2),
];

/// The other interactive spring defaults seen in the wild: a slower,
/// bouncier `response: 0.4, dampingFraction: 0.7`.
///
/// The table uses `0.15 / 0.86`. Callers that want the alternate look can
/// start from [`ParameterSet::from`] with this array.
pub const ALTERNATE_INTERACTIVE_DEFAULTS: [(ParamKey, f64); 2] =
    [(ParamKey::Response, 0.4), (ParamKey::DampingFraction, 0.7)];

impl CurveFamily {
    /// The parameters this family reads, in display order.
    pub const fn param_specs(self) -> &'static [ParamSpec] {
        match self {
            CurveFamily::Default
            | CurveFamily::Linear
            | CurveFamily::EaseIn
            | CurveFamily::EaseOut
            | CurveFamily::EaseInOut => &BEZIER_PARAMS,
            CurveFamily::Smooth | CurveFamily::Snappy | CurveFamily::Bouncy => &PRESET_SPRING_PARAMS,
            CurveFamily::Spring => &SPRING_PARAMS,
            CurveFamily::InterpolatingSpring => &INTERPOLATING_SPRING_PARAMS,
            CurveFamily::InteractiveSpring => &INTERACTIVE_SPRING_PARAMS,
        }
    }

    /// Returns true if this family reads `key`.
    pub const fn reads(self, key: ParamKey) -> bool {
        let specs = self.param_specs();
        let mut i = 0;
        while i < specs.len() {
            if specs[i].key as u8 == key as u8 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Looks up the table row for `key`, if this family reads it.
    pub fn param_spec(self, key: ParamKey) -> Option<&'static ParamSpec> {
        self.param_specs().iter().find(|spec| spec.key == key)
    }

    /// Default value of `key` for this family.
    pub fn default_value(self, key: ParamKey) -> Option<f64> {
        self.param_spec(key).map(|spec| spec.default)
    }
}

/// A sparse set of parameter values.
///
/// Keys that are not set resolve to the family default when read through
/// [`ParameterSet::resolve`]. Keys a family does not read are kept but
/// ignored.
///
/// # Examples
///
/// ```
/// use curvelab::{CurveFamily, ParamKey, ParameterSet};
///
/// let params = ParameterSet::new().with(ParamKey::Bounce, 0.5);
/// assert_eq!(params.resolve(CurveFamily::Spring, ParamKey::Bounce), 0.5);
/// assert_eq!(params.resolve(CurveFamily::Spring, ParamKey::Duration), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParameterSet {
    values: BTreeMap<ParamKey, f64>,
}

impl ParameterSet {
    /// Creates an empty set; every key resolves to its family default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding every default of `family`.
    pub fn defaults_for(family: CurveFamily) -> Self {
        family
            .param_specs()
            .iter()
            .map(|spec| (spec.key, spec.default))
            .collect()
    }

    /// Sets `key` and returns the set, for chaining.
    pub fn with(mut self, key: ParamKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, returning the previous explicit value.
    pub fn set(&mut self, key: ParamKey, value: f64) -> Option<f64> {
        self.values.insert(key, value)
    }

    /// Removes the explicit value for `key`.
    pub fn remove(&mut self, key: ParamKey) -> Option<f64> {
        self.values.remove(&key)
    }

    /// The explicit value for `key`, without default substitution.
    pub fn get(&self, key: ParamKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// The value `family` sees for `key`: explicit, else the family default,
    /// else 0 for keys the family does not declare.
    pub fn resolve(&self, family: CurveFamily, key: ParamKey) -> f64 {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = family.default_value(key).unwrap_or(0.0);
        trace!(%family, %key, value, "using default parameter");
        value
    }

    /// Checks every parameter `family` reads, after default substitution.
    pub fn validate_for(&self, family: CurveFamily) -> Result<(), CurveError> {
        for spec in family.param_specs() {
            spec.key.check(self.resolve(family, spec.key))?;
        }
        Ok(())
    }

    /// Iterates over explicit values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, f64)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<const N: usize> From<[(ParamKey, f64); N]> for ParameterSet {
    fn from(pairs: [(ParamKey, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl FromIterator<(ParamKey, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (ParamKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

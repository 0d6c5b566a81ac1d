//! A validated curve: family, parameters and the resolved formula.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::spring::preset_bounce;
use super::time_scale::scale_for;
use super::{
    BounceSpring, CubicBezier, CurveFamily, InterpolatingSpring, Linear, ParamKey, ParameterSet,
    ResponseSpring, TimingCurve,
};
use crate::error::{CurveError, ParseError};

/// The formula a family resolves to, built once per `CurveSpec`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kernel {
    Linear(Linear),
    Bezier(CubicBezier),
    Bounce(BounceSpring),
    Interpolating(InterpolatingSpring),
    Response(ResponseSpring),
}

impl Kernel {
    fn resolve(family: CurveFamily, params: &ParameterSet) -> Self {
        match family {
            CurveFamily::Linear => Kernel::Linear(Linear),
            CurveFamily::EaseIn => Kernel::Bezier(CubicBezier::EASE_IN),
            CurveFamily::EaseOut => Kernel::Bezier(CubicBezier::EASE_OUT),
            CurveFamily::Default | CurveFamily::EaseInOut => Kernel::Bezier(CubicBezier::EASE_IN_OUT),
            CurveFamily::Smooth | CurveFamily::Spring | CurveFamily::Snappy | CurveFamily::Bouncy => {
                Kernel::Bounce(BounceSpring::new(preset_bounce(family, params)))
            }
            CurveFamily::InterpolatingSpring => {
                Kernel::Interpolating(InterpolatingSpring::from_params(params))
            }
            CurveFamily::InteractiveSpring => Kernel::Response(ResponseSpring::from_params(params)),
        }
    }

    fn progress(&self, t: f64) -> f64 {
        match self {
            Kernel::Linear(curve) => curve.progress(t),
            Kernel::Bezier(curve) => curve.progress(t),
            Kernel::Bounce(curve) => curve.progress(t),
            Kernel::Interpolating(curve) => curve.progress(t),
            Kernel::Response(curve) => curve.progress(t),
        }
    }
}

/// A curve family together with validated parameters.
///
/// Construction checks every parameter the family reads (after default
/// substitution); evaluation afterwards cannot fail.
///
/// # Examples
///
/// ```
/// use curvelab::{CurveFamily, CurveSpec, ParamKey, ParameterSet, TimingCurve};
///
/// let spec = CurveSpec::new(
///     CurveFamily::Spring,
///     ParameterSet::new().with(ParamKey::Bounce, 0.3),
/// ).unwrap();
/// assert_eq!(spec.progress(0.0), 0.0);
/// assert!((spec.progress(2.0) - 1.0).abs() < 0.01);
///
/// // The same curve, written as a descriptor
/// let parsed: CurveSpec = "spring(bounce: 0.3)".parse().unwrap();
/// assert_eq!(parsed, spec);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SpecRepr", into = "SpecRepr")
)]
pub struct CurveSpec {
    family: CurveFamily,
    params: ParameterSet,
    kernel: Kernel,
}

impl CurveSpec {
    /// Validates `params` for `family`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if a value the family reads
    /// lies outside [`ParamKey::domain`].
    pub fn new(family: CurveFamily, params: ParameterSet) -> Result<Self, CurveError> {
        if let Err(err) = params.validate_for(family) {
            debug!(%family, error = %err, "rejected curve parameters");
            return Err(err);
        }
        Ok(Self::from_checked(family, params))
    }

    /// A curve using only the family defaults.
    pub fn with_defaults(family: CurveFamily) -> Self {
        Self::from_checked(family, ParameterSet::new())
    }

    /// Builds a spec whose parameters were already checked.
    ///
    /// Used by the `curve!` macro after its compile-time assertions.
    #[doc(hidden)]
    pub fn from_checked(family: CurveFamily, params: ParameterSet) -> Self {
        let kernel = Kernel::resolve(family, &params);
        Self {
            family,
            params,
            kernel,
        }
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The value this curve sees for `key`, after default substitution.
    pub fn param(&self, key: ParamKey) -> f64 {
        self.params.resolve(self.family, key)
    }

    /// Returns a copy with one parameter changed, validated again.
    pub fn with_param(&self, key: ParamKey, value: f64) -> Result<Self, CurveError> {
        Self::new(self.family, self.params.clone().with(key, value))
    }
}

impl TimingCurve for CurveSpec {
    fn progress(&self, t: f64) -> f64 {
        self.kernel.progress(t)
    }

    fn time_scale(&self) -> f64 {
        scale_for(self.family, &self.params)
    }
}

/// Evaluates `family` with `params` at time `t`.
///
/// Missing parameters fall back to the family defaults. For repeated
/// evaluation build a [`CurveSpec`] once instead.
///
/// # Examples
///
/// ```
/// use curvelab::{evaluate, CurveFamily, ParameterSet};
///
/// let y = evaluate(CurveFamily::Linear, &ParameterSet::new(), 0.4).unwrap();
/// assert_eq!(y, 0.4);
/// ```
pub fn evaluate(family: CurveFamily, params: &ParameterSet, t: f64) -> Result<f64, CurveError> {
    params.validate_for(family)?;
    Ok(Kernel::resolve(family, params).progress(t))
}

impl fmt::Display for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if self.params.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(")")
    }
}

/// Splits `name(key: value, ...)` into the family and its parameters.
fn parse_descriptor(s: &str) -> Result<(CurveFamily, ParameterSet), ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let (name, body) = match s.find('(') {
        Some(open) => {
            let body = s[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))?;
            (&s[..open], Some(body))
        }
        None if s.contains(')') => return Err(ParseError::InvalidFormat(s.to_string())),
        None => (s, None),
    };

    let family = name.parse::<CurveFamily>()?;
    let mut params = ParameterSet::new();

    for entry in body.into_iter().flat_map(|body| body.split(',')) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidFormat(entry.to_string()))?;
        let key = key.parse::<ParamKey>()?;
        let value = value.trim();
        let value = value
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidValue(value.to_string()))?;
        if params.set(key, value).is_some() {
            return Err(ParseError::DuplicateParameter(key.to_string()));
        }
    }

    Ok((family, params))
}

impl FromStr for CurveSpec {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, params) = parse_descriptor(s)?;
        CurveSpec::new(family, params)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SpecRepr {
    family: CurveFamily,
    #[serde(default)]
    params: ParameterSet,
}

#[cfg(feature = "serde")]
impl TryFrom<SpecRepr> for CurveSpec {
    type Error = CurveError;

    fn try_from(repr: SpecRepr) -> Result<Self, Self::Error> {
        CurveSpec::new(repr.family, repr.params)
    }
}

#[cfg(feature = "serde")]
impl From<CurveSpec> for SpecRepr {
    fn from(spec: CurveSpec) -> Self {
        SpecRepr {
            family: spec.family,
            params: spec.params,
        }
    }
}

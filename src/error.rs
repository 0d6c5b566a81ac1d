//! Error types for curve evaluation, sampling and rendering.

use crate::curves::ParamKey;

/// Error type for parsing curve descriptors such as `"spring(bounce: 0.3)"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input string was empty
    #[error("input string is empty")]
    Empty,
    /// The family name was not recognized
    #[error("unknown curve family: '{0}'")]
    UnknownFamily(String),
    /// The parameter name was not recognized
    #[error("unknown parameter: '{0}'")]
    UnknownParameter(String),
    /// A parameter value could not be parsed as a number
    #[error("invalid parameter value: '{0}'")]
    InvalidValue(String),
    /// The descriptor did not follow `name(key: value, ...)`
    #[error("invalid curve format: '{0}'")]
    InvalidFormat(String),
    /// The same parameter was given twice
    #[error("parameter '{0}' given more than once")]
    DuplicateParameter(String),
}

/// Errors raised at the boundary of the curve engine.
///
/// The formulas themselves are total; every variant here describes an input
/// that was rejected before any evaluation happened.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A parameter value fell outside its key's domain
    #[error("{key} must be within [{min}, {max}], got {value}")]
    InvalidParameter {
        key: ParamKey,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Fewer than two samples were requested
    #[error("sample count must be at least 2, got {0}")]
    TooFewSamples(usize),
    /// More samples were requested than a sequence may hold
    #[error("sample count must be at most {max}, got {count}")]
    TooManySamples { count: usize, max: usize },
    /// The sampled time window was zero, negative or not finite
    #[error("time scale must be positive and finite, got {0}")]
    InvalidTimeScale(f64),
    /// Samples did not form an ordered run over `[0, 1]` with finite values
    #[error("invalid sample sequence: {0}")]
    InvalidSequence(&'static str),
    /// Axis bounds did not contain `[0, 1]`
    #[error("axis bounds [{min}, {max}] must contain [0, 1]")]
    InvalidBounds { min: f64, max: f64 },
    /// The draw area was empty or not finite
    #[error("draw area must have a positive finite size, got {width}x{height}")]
    InvalidDrawArea { width: f64, height: f64 },
    /// Every comparison slot is taken
    #[error("comparison already holds {0} curves")]
    ComparisonFull(usize),
    /// A comparison slot index was out of range
    #[error("no comparison slot at index {0}")]
    NoSuchSlot(usize),
    /// A curve descriptor could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

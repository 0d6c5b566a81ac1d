//! The closed set of timing-curve families.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Timing-curve families the engine knows how to evaluate.
///
/// A family is a pure tag: which formula to use and which parameters it reads
/// (see [`CurveFamily::param_specs`]). It carries no state of its own.
///
/// # Examples
///
/// ```
/// use curvelab::CurveFamily;
///
/// let family: CurveFamily = "easeInOut".parse().unwrap();
/// assert_eq!(family, CurveFamily::EaseInOut);
/// assert_eq!(family.to_string(), "easeInOut");
/// assert!(!family.is_spring());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CurveFamily {
    /// The platform default animation, an ease-in-out Bezier
    #[default]
    Default,
    /// Constant rate of change
    Linear,
    /// Bezier with slow start
    EaseIn,
    /// Bezier with slow finish
    EaseOut,
    /// Bezier with slow start and finish
    EaseInOut,
    /// Critically damped spring, optionally made bouncier with `extraBounce`
    Smooth,
    /// Spring driven directly by `bounce`
    Spring,
    /// Slightly underdamped spring
    Snappy,
    /// Clearly underdamped spring
    Bouncy,
    /// Mass-spring-damper described by `stiffness` and `damping`
    InterpolatingSpring,
    /// Spring described by `response` and `dampingFraction`
    InteractiveSpring,
}

impl CurveFamily {
    /// Every family, in display order.
    pub const ALL: [CurveFamily; 11] = [
        CurveFamily::Default,
        CurveFamily::Linear,
        CurveFamily::EaseIn,
        CurveFamily::EaseOut,
        CurveFamily::EaseInOut,
        CurveFamily::Smooth,
        CurveFamily::Spring,
        CurveFamily::Snappy,
        CurveFamily::Bouncy,
        CurveFamily::InterpolatingSpring,
        CurveFamily::InteractiveSpring,
    ];

    /// Canonical camelCase name, as used in curve descriptors.
    pub const fn name(self) -> &'static str {
        match self {
            CurveFamily::Default => "default",
            CurveFamily::Linear => "linear",
            CurveFamily::EaseIn => "easeIn",
            CurveFamily::EaseOut => "easeOut",
            CurveFamily::EaseInOut => "easeInOut",
            CurveFamily::Smooth => "smooth",
            CurveFamily::Spring => "spring",
            CurveFamily::Snappy => "snappy",
            CurveFamily::Bouncy => "bouncy",
            CurveFamily::InterpolatingSpring => "interpolatingSpring",
            CurveFamily::InteractiveSpring => "interactiveSpring",
        }
    }

    /// Human readable label for pickers and legends.
    pub const fn title(self) -> &'static str {
        match self {
            CurveFamily::Default => "Default",
            CurveFamily::Linear => "Linear",
            CurveFamily::EaseIn => "Ease In",
            CurveFamily::EaseOut => "Ease Out",
            CurveFamily::EaseInOut => "Ease In Out",
            CurveFamily::Smooth => "Smooth",
            CurveFamily::Spring => "Spring",
            CurveFamily::Snappy => "Snappy",
            CurveFamily::Bouncy => "Bouncy",
            CurveFamily::InterpolatingSpring => "Interpolating Spring",
            CurveFamily::InteractiveSpring => "Interactive Spring",
        }
    }

    /// Returns true for the spring-based families.
    ///
    /// Spring curves can overshoot and settle toward 1, so graphs draw a
    /// target line at y = 1 for them.
    pub const fn is_spring(self) -> bool {
        matches!(
            self,
            CurveFamily::Smooth
                | CurveFamily::Spring
                | CurveFamily::Snappy
                | CurveFamily::Bouncy
                | CurveFamily::InterpolatingSpring
                | CurveFamily::InteractiveSpring
        )
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        CurveFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownFamily(s.to_string()))
    }
}

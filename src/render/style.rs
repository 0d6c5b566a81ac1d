//! Colors and stroke settings for rendered graphs.

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0.0, 0.478, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.584, 0.0);
    pub const GREEN: Color = Color::rgb(0.204, 0.78, 0.349);
    pub const GRAY: Color = Color::rgb(0.557, 0.557, 0.576);

    /// Opaque color from its red, green and blue components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// The color as 8-bit `(r, g, b)` channels, ignoring alpha.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Stroke and layout settings for [`CurveRenderer`](super::CurveRenderer).
///
/// The defaults reproduce the reference look: 10% vertical padding, 2pt
/// curves, 1pt axes and a 4-on 4-off dash for the target line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderStyle {
    /// Fraction of the observed y range added above and below the curves
    pub padding_ratio: f64,
    pub curve_width: f64,
    pub axis_width: f64,
    pub axis_color: Color,
    /// On/off lengths of the dashed target line
    pub dash: [f64; 2],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            padding_ratio: 0.1,
            curve_width: 2.0,
            axis_width: 1.0,
            axis_color: Color::GRAY.with_alpha(0.5),
            dash: [4.0, 4.0],
        }
    }
}

//! Cubic Bezier timing curves.
//!
//! A timing curve is a cubic Bezier with its endpoints pinned to (0, 0) and
//! (1, 1). The X component is time and the Y component is progress, so
//! evaluating the curve at time `t` means first finding the curve parameter
//! `u` with `x(u) = t` and then reading `y(u)`.

use super::TimingCurve;

/// Number of Newton-Raphson steps used to invert the X component.
const NEWTON_ITERATIONS: usize = 8;

/// Below this slope a Newton step would blow up, so solving stops.
const MIN_SLOPE: f64 = 1e-6;

/// A cubic Bezier timing curve with control points `P1` and `P2`.
///
/// The polynomial coefficients are precomputed so each component evaluates
/// as `((a * u + b) * u + c) * u`.
///
/// # Examples
///
/// ```
/// use curvelab::{CubicBezier, TimingCurve};
///
/// let ease = CubicBezier::EASE_IN_OUT;
/// assert_eq!(ease.progress(0.0), 0.0);
/// assert_eq!(ease.progress(1.0), 1.0);
/// assert!((ease.progress(0.5) - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl CubicBezier {
    /// Slow start: control points (0.42, 0) and (1, 1).
    pub const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
    /// Slow finish: control points (0, 0) and (0.58, 1).
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    /// Slow start and finish: control points (0.42, 0) and (0.58, 1).
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    /// Creates a timing curve from its two inner control points.
    ///
    /// # Arguments
    ///
    /// * `x1`, `y1` - First control point
    /// * `x2`, `y2` - Second control point
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;

        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn x_at(&self, u: f64) -> f64 {
        ((self.ax * u + self.bx) * u + self.cx) * u
    }

    fn y_at(&self, u: f64) -> f64 {
        ((self.ay * u + self.by) * u + self.cy) * u
    }

    fn x_slope_at(&self, u: f64) -> f64 {
        (3.0 * self.ax * u + 2.0 * self.bx) * u + self.cx
    }

    /// Finds the curve parameter whose X component equals `x`.
    ///
    /// Runs a fixed number of Newton-Raphson steps starting from `u = x`,
    /// stopping early if the slope gets too flat to divide by.
    pub fn solve_x(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = self.x_slope_at(u);
            if slope.abs() < MIN_SLOPE {
                break;
            }
            u -= (self.x_at(u) - x) / slope;
        }
        u
    }
}

impl TimingCurve for CubicBezier {
    fn progress(&self, t: f64) -> f64 {
        // Endpoints are fixed by construction
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        self.y_at(self.solve_x(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints_are_exact() {
        for curve in [
            CubicBezier::EASE_IN,
            CubicBezier::EASE_OUT,
            CubicBezier::EASE_IN_OUT,
        ] {
            assert_eq!(curve.progress(0.0), 0.0);
            assert_eq!(curve.progress(1.0), 1.0);
            assert_eq!(curve.progress(-0.5), 0.0);
            assert_eq!(curve.progress(1.5), 1.0);
        }
    }

    #[test]
    fn test_solve_x_inverts_x_component() {
        let curve = CubicBezier::EASE_IN_OUT;
        for x in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let u = curve.solve_x(x);
            assert!(approx_eq(curve.x_at(u), x), "x({u}) != {x}");
        }
    }

    #[test]
    fn test_ease_in_is_below_linear() {
        let curve = CubicBezier::EASE_IN;
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(curve.progress(t) < t, "ease in at {t}");
        }
    }

    #[test]
    fn test_ease_out_is_above_linear() {
        let curve = CubicBezier::EASE_OUT;
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(curve.progress(t) > t, "ease out at {t}");
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let curve = CubicBezier::EASE_IN_OUT;
        assert!(approx_eq(curve.progress(0.5), 0.5));
        for t in [0.1, 0.2, 0.3, 0.4] {
            let sum = curve.progress(t) + curve.progress(1.0 - t);
            assert!(approx_eq(sum, 1.0), "asymmetric at {t}: {sum}");
        }
    }

    #[test]
    fn test_monotonic() {
        for curve in [
            CubicBezier::EASE_IN,
            CubicBezier::EASE_OUT,
            CubicBezier::EASE_IN_OUT,
        ] {
            let mut previous = 0.0;
            for i in 0..=100 {
                let y = curve.progress(i as f64 / 100.0);
                assert!(y >= previous - EPSILON);
                previous = y;
            }
        }
    }

    #[test]
    fn test_coefficients_of_straight_line() {
        // Control points on the diagonal give the identity
        let curve = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for t in [0.2, 0.4, 0.6, 0.8] {
            assert!(approx_eq(curve.progress(t), t));
        }
    }
}

//! Mapping sample sequences onto a draw area.

use tracing::trace;

use super::{Axis, AxisBounds, Color, CurvePath, DrawArea, Line, Point, RenderStyle};
use crate::sampling::SampleSequence;

/// A sample sequence paired with the color it is stroked in.
#[derive(Debug, Clone, Copy)]
pub struct Trace<'a> {
    pub samples: &'a SampleSequence,
    pub color: Color,
}

impl<'a> Trace<'a> {
    pub fn new(samples: &'a SampleSequence, color: Color) -> Self {
        Self { samples, color }
    }
}

/// Everything needed to draw one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGraph {
    pub bounds: AxisBounds,
    pub axis: Axis,
    /// One path per input trace, in input order
    pub paths: Vec<CurvePath>,
}

/// Maps graph coordinates (`x` in `[0, 1]`, `y` within the bounds) to
/// screen coordinates inside a draw area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    area: DrawArea,
    bounds: AxisBounds,
}

impl ScreenMapping {
    pub fn new(area: DrawArea, bounds: AxisBounds) -> Self {
        Self { area, bounds }
    }

    pub fn x(&self, x: f64) -> f64 {
        self.area.left() + x * self.area.width()
    }

    /// Screen y for progress `y`; higher progress draws higher up.
    pub fn y(&self, y: f64) -> f64 {
        self.area.bottom() - self.bounds.normalize(y) * self.area.height()
    }

    pub fn point(&self, x: f64, y: f64) -> Point {
        Point::new(self.x(x), self.y(y))
    }
}

/// Builds axis and curve geometry for one or more sampled curves.
///
/// Single-curve and comparison graphs are the same operation: all traces
/// share one [`AxisBounds`], so their heights are directly comparable.
///
/// # Examples
///
/// ```
/// use curvelab::{generate_default, Color, CurveFamily, CurveRenderer, CurveSpec, DrawArea, Trace};
///
/// let spec = CurveSpec::with_defaults(CurveFamily::Bouncy);
/// let samples = generate_default(&spec).unwrap();
/// let area = DrawArea::sized(300.0, 200.0).unwrap();
///
/// let graph = CurveRenderer::default().render(&[Trace::new(&samples, Color::BLUE)], &area);
/// assert_eq!(graph.paths.len(), 1);
/// assert!(graph.axis.target.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveRenderer {
    style: RenderStyle,
}

impl CurveRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Renders the traces into `area`.
    ///
    /// With no traces the bounds fall back to `[0, 1]` and only the axis is
    /// produced.
    pub fn render(&self, traces: &[Trace<'_>], area: &DrawArea) -> RenderedGraph {
        let bounds = AxisBounds::from_sequences(
            traces.iter().map(|trace| trace.samples),
            self.style.padding_ratio,
        );
        let mapping = ScreenMapping::new(*area, bounds);
        let show_target = traces.iter().any(|trace| trace.samples.family().is_spring());

        trace!(
            traces = traces.len(),
            min = bounds.min(),
            max = bounds.max(),
            "rendering graph"
        );

        let paths = traces
            .iter()
            .map(|trace| CurvePath {
                color: trace.color,
                width: self.style.curve_width,
                points: trace
                    .samples
                    .iter()
                    .map(|sample| mapping.point(sample.x, sample.y))
                    .collect(),
            })
            .collect();

        RenderedGraph {
            bounds,
            axis: self.axis(&mapping, area, show_target),
            paths,
        }
    }

    fn axis(&self, mapping: &ScreenMapping, area: &DrawArea, show_target: bool) -> Axis {
        let solid = |from, to| Line {
            from,
            to,
            width: self.style.axis_width,
            color: self.style.axis_color,
            dash: None,
        };
        let horizontal = |y: f64| {
            let screen_y = mapping.y(y);
            solid(
                Point::new(area.left(), screen_y),
                Point::new(area.right(), screen_y),
            )
        };

        let origin_x = mapping.x(0.0);
        Axis {
            vertical: solid(
                Point::new(origin_x, area.top()),
                Point::new(origin_x, area.bottom()),
            ),
            baseline: horizontal(0.0),
            target: show_target.then(|| Line {
                dash: Some(self.style.dash),
                ..horizontal(1.0)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{CurveFamily, CurveSpec};
    use crate::sampling::{Sample, generate, generate_default};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn area() -> DrawArea {
        DrawArea::new(10.0, 20.0, 200.0, 100.0).unwrap()
    }

    #[test]
    fn test_unit_mapping() {
        let mapping = ScreenMapping::new(area(), AxisBounds::UNIT);
        assert_eq!(mapping.point(0.0, 0.0), Point::new(10.0, 120.0));
        assert_eq!(mapping.point(1.0, 1.0), Point::new(210.0, 20.0));
        assert_eq!(mapping.point(0.5, 0.5), Point::new(110.0, 70.0));
    }

    #[test]
    fn test_linear_path_spans_area() {
        let samples = generate(&CurveSpec::with_defaults(CurveFamily::Linear), 5).unwrap();
        let graph = CurveRenderer::default().render(&[Trace::new(&samples, Color::BLUE)], &area());

        // [0, 1] padded by 10% on each side
        assert!(approx_eq(graph.bounds.min(), -0.1));
        assert!(approx_eq(graph.bounds.max(), 1.1));

        let path = &graph.paths[0];
        assert_eq!(path.points.len(), 5);
        assert_eq!(path.color, Color::BLUE);
        assert!(approx_eq(path.points[0].x, 10.0));
        assert!(approx_eq(path.points[4].x, 210.0));
        // Rising curve draws upward on screen
        assert!(path.points[4].y < path.points[0].y);
    }

    #[test]
    fn test_axis_lines() {
        let samples = generate(&CurveSpec::with_defaults(CurveFamily::Linear), 5).unwrap();
        let graph = CurveRenderer::default().render(&[Trace::new(&samples, Color::BLUE)], &area());
        let mapping = ScreenMapping::new(area(), graph.bounds);

        assert_eq!(graph.axis.vertical.from, Point::new(10.0, 20.0));
        assert_eq!(graph.axis.vertical.to, Point::new(10.0, 120.0));
        assert!(approx_eq(graph.axis.baseline.from.y, mapping.y(0.0)));
        assert_eq!(graph.axis.baseline.dash, None);
        // Linear is not a spring: no target line
        assert!(graph.axis.target.is_none());
    }

    #[test]
    fn test_spring_has_dashed_target() {
        let samples = generate_default(&CurveSpec::with_defaults(CurveFamily::Spring)).unwrap();
        let graph = CurveRenderer::default().render(&[Trace::new(&samples, Color::BLUE)], &area());
        let target = graph.axis.target.unwrap();
        let mapping = ScreenMapping::new(area(), graph.bounds);
        assert_eq!(target.dash, Some([4.0, 4.0]));
        assert!(approx_eq(target.from.y, mapping.y(1.0)));
        assert!(approx_eq(target.to.y, mapping.y(1.0)));
    }

    #[test]
    fn test_no_traces() {
        let graph = CurveRenderer::default().render(&[], &area());
        assert_eq!(graph.bounds, AxisBounds::UNIT);
        assert!(graph.paths.is_empty());
        assert!(graph.axis.target.is_none());
        assert!(approx_eq(graph.axis.baseline.from.y, 120.0));
    }

    #[test]
    fn test_comparison_shares_one_scale() {
        let overshoot = SampleSequence::from_samples(
            CurveFamily::Bouncy,
            1.2,
            vec![
                Sample { x: 0.0, y: 0.0 },
                Sample { x: 0.5, y: 1.3 },
                Sample { x: 1.0, y: 1.0 },
            ],
        )
        .unwrap();
        let linear = generate(&CurveSpec::with_defaults(CurveFamily::Linear), 3).unwrap();

        let graph = CurveRenderer::default().render(
            &[
                Trace::new(&overshoot, Color::ORANGE),
                Trace::new(&linear, Color::BLUE),
            ],
            &area(),
        );

        assert!(graph.bounds.max() >= 1.3 * 1.1 - EPSILON);
        // Both curves end at y = 1, so they must land on the same pixel row
        let end_a = graph.paths[0].points[2];
        let end_b = graph.paths[1].points[2];
        assert!(approx_eq(end_a.y, end_b.y));
        assert!(graph.axis.target.is_some());
    }

    #[test]
    fn test_custom_style() {
        let style = RenderStyle {
            padding_ratio: 0.0,
            curve_width: 3.0,
            ..RenderStyle::default()
        };
        let samples = generate(&CurveSpec::with_defaults(CurveFamily::Linear), 2).unwrap();
        let graph = CurveRenderer::new(style).render(&[Trace::new(&samples, Color::GREEN)], &area());
        assert_eq!(graph.bounds, AxisBounds::UNIT);
        assert_eq!(graph.paths[0].width, 3.0);
    }
}

//! Side-by-side comparison of up to three curves.
//!
//! Every active slot is sampled over the same time window, the longest one
//! any active curve asks for, so the curves line up on one time axis and
//! share one vertical scale when rendered.

use tracing::debug;

use crate::curves::{CurveSpec, TimingCurve};
use crate::error::CurveError;
use crate::render::{Color, CurveRenderer, DrawArea, RenderedGraph, Trace};
use crate::sampling::{SampleSequence, default_point_count, generate_with_time_scale};

/// Maximum number of curves in one comparison.
pub const MAX_SLOTS: usize = 3;

/// Slot colors, handed out in order.
pub const PALETTE: [Color; MAX_SLOTS] = [Color::BLUE, Color::ORANGE, Color::GREEN];

/// One curve in a comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonSlot {
    pub spec: CurveSpec,
    pub color: Color,
    /// Inactive slots keep their color but are not sampled or drawn
    pub active: bool,
}

/// A set of curves drawn against each other.
///
/// # Examples
///
/// ```
/// use curvelab::{Color, Comparison, CurveFamily, CurveSpec};
///
/// let mut comparison = Comparison::new();
/// comparison.push(CurveSpec::with_defaults(CurveFamily::EaseOut)).unwrap();
/// let bouncy = comparison.push(CurveSpec::with_defaults(CurveFamily::Bouncy)).unwrap();
///
/// assert_eq!(comparison.slots()[bouncy].color, Color::ORANGE);
/// assert!((comparison.shared_time_scale() - 1.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    slots: Vec<ComparisonSlot>,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active slot and returns its index.
    ///
    /// The slot gets the first palette color no other slot is using, so
    /// removing a curve and adding another reuses the freed color.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ComparisonFull`] when [`MAX_SLOTS`] slots exist.
    pub fn push(&mut self, spec: CurveSpec) -> Result<usize, CurveError> {
        let color = PALETTE
            .into_iter()
            .find(|color| self.slots.iter().all(|slot| slot.color != *color))
            .ok_or(CurveError::ComparisonFull(MAX_SLOTS))?;
        debug!(family = %spec.family(), slot = self.slots.len(), "added comparison slot");
        self.slots.push(ComparisonSlot {
            spec,
            color,
            active: true,
        });
        Ok(self.slots.len() - 1)
    }

    /// Removes and returns the slot at `index`; later slots shift down.
    pub fn remove(&mut self, index: usize) -> Result<ComparisonSlot, CurveError> {
        if index >= self.slots.len() {
            return Err(CurveError::NoSuchSlot(index));
        }
        let slot = self.slots.remove(index);
        debug!(family = %slot.spec.family(), slot = index, "removed comparison slot");
        Ok(slot)
    }

    /// Replaces the curve in a slot, keeping its color and active flag.
    pub fn replace(&mut self, index: usize, spec: CurveSpec) -> Result<CurveSpec, CurveError> {
        let slot = self.slot_mut(index)?;
        debug!(family = %spec.family(), slot = index, "replaced comparison slot");
        Ok(std::mem::replace(&mut slot.spec, spec))
    }

    pub fn set_active(&mut self, index: usize, active: bool) -> Result<(), CurveError> {
        self.slot_mut(index)?.active = active;
        debug!(slot = index, active, "comparison slot visibility changed");
        Ok(())
    }

    /// Flips a slot's active flag and returns the new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool, CurveError> {
        let active = !self.slot_mut(index)?.active;
        self.set_active(index, active)?;
        Ok(active)
    }

    pub fn slots(&self) -> &[ComparisonSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_SLOTS
    }

    /// Slots currently shown.
    pub fn active(&self) -> impl Iterator<Item = &ComparisonSlot> {
        self.slots.iter().filter(|slot| slot.active)
    }

    /// The time window all active curves are sampled over.
    ///
    /// The largest time scale among active slots, or 1.0 when none are active.
    pub fn shared_time_scale(&self) -> f64 {
        self.active()
            .map(|slot| slot.spec.time_scale())
            .fold(1.0, f64::max)
    }

    /// Samples every active slot over the shared window, in slot order.
    pub fn sequences(&self) -> Result<Vec<(Color, SampleSequence)>, CurveError> {
        let time_scale = self.shared_time_scale();
        let point_count = default_point_count(time_scale)?;
        self.active()
            .map(|slot| {
                generate_with_time_scale(&slot.spec, point_count, time_scale)
                    .map(|sequence| (slot.color, sequence))
            })
            .collect()
    }

    /// Samples and renders the active slots on one shared scale.
    pub fn render(
        &self,
        area: &DrawArea,
        renderer: &CurveRenderer,
    ) -> Result<RenderedGraph, CurveError> {
        let sequences = self.sequences()?;
        let traces: Vec<Trace<'_>> = sequences
            .iter()
            .map(|(color, sequence)| Trace::new(sequence, *color))
            .collect();
        Ok(renderer.render(&traces, area))
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut ComparisonSlot, CurveError> {
        self.slots
            .get_mut(index)
            .ok_or(CurveError::NoSuchSlot(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{CurveFamily, ParamKey};

    fn spec(family: CurveFamily) -> CurveSpec {
        CurveSpec::with_defaults(family)
    }

    #[test]
    fn test_palette_order_and_capacity() {
        let mut comparison = Comparison::new();
        assert_eq!(comparison.push(spec(CurveFamily::Linear)), Ok(0));
        assert_eq!(comparison.push(spec(CurveFamily::Spring)), Ok(1));
        assert_eq!(comparison.push(spec(CurveFamily::Bouncy)), Ok(2));
        assert!(comparison.is_full());

        let colors: Vec<Color> = comparison.slots().iter().map(|s| s.color).collect();
        assert_eq!(colors, PALETTE.to_vec());

        assert_eq!(
            comparison.push(spec(CurveFamily::Smooth)),
            Err(CurveError::ComparisonFull(MAX_SLOTS))
        );
        assert_eq!(comparison.len(), 3);
    }

    #[test]
    fn test_freed_color_is_reused() {
        let mut comparison = Comparison::new();
        comparison.push(spec(CurveFamily::Linear)).unwrap();
        comparison.push(spec(CurveFamily::Spring)).unwrap();
        comparison.push(spec(CurveFamily::Bouncy)).unwrap();

        let removed = comparison.remove(0).unwrap();
        assert_eq!(removed.color, Color::BLUE);

        let index = comparison.push(spec(CurveFamily::Snappy)).unwrap();
        assert_eq!(index, 2);
        assert_eq!(comparison.slots()[index].color, Color::BLUE);
    }

    #[test]
    fn test_bad_index() {
        let mut comparison = Comparison::new();
        assert_eq!(comparison.remove(0), Err(CurveError::NoSuchSlot(0)));
        assert_eq!(comparison.toggle(1), Err(CurveError::NoSuchSlot(1)));
        assert_eq!(
            comparison.set_active(2, false),
            Err(CurveError::NoSuchSlot(2))
        );
    }

    #[test]
    fn test_shared_time_scale_uses_active_slots() {
        let mut comparison = Comparison::new();
        assert_eq!(comparison.shared_time_scale(), 1.0);

        comparison.push(spec(CurveFamily::EaseIn)).unwrap();
        let spring = CurveSpec::with_defaults(CurveFamily::Spring)
            .with_param(ParamKey::Bounce, 0.5)
            .unwrap();
        let index = comparison.push(spring).unwrap();
        assert!((comparison.shared_time_scale() - 1.6).abs() < 1e-12);

        assert_eq!(comparison.toggle(index), Ok(false));
        assert_eq!(comparison.shared_time_scale(), 1.0);
        assert_eq!(comparison.active().count(), 1);
    }

    #[test]
    fn test_sequences_share_one_window() {
        let mut comparison = Comparison::new();
        comparison.push(spec(CurveFamily::EaseOut)).unwrap();
        comparison.push(spec(CurveFamily::Bouncy)).unwrap();

        let sequences = comparison.sequences().unwrap();
        assert_eq!(sequences.len(), 2);
        for (_, sequence) in &sequences {
            assert!((sequence.time_scale() - 1.2).abs() < 1e-12);
            assert_eq!(sequence.len(), 120);
        }
        // easeOut is past its end by the last sample and holds at 1
        let (_, ease) = &sequences[0];
        assert_eq!(ease.samples()[ease.len() - 1].y, 1.0);
    }

    #[test]
    fn test_widest_valid_bounces_share_a_bounded_window() {
        use crate::curves::MAX_BOUNCE_MAGNITUDE;
        use crate::sampling::MAX_POINT_COUNT;

        let mut comparison = Comparison::new();
        for family in [CurveFamily::Spring, CurveFamily::Bouncy] {
            let key = if family == CurveFamily::Spring {
                ParamKey::Bounce
            } else {
                ParamKey::ExtraBounce
            };
            let spec = spec(family).with_param(key, MAX_BOUNCE_MAGNITUDE).unwrap();
            comparison.push(spec).unwrap();
        }
        assert!(spec(CurveFamily::Spring).with_param(ParamKey::Bounce, 1e18).is_err());

        let sequences = comparison.sequences().unwrap();
        for (_, sequence) in &sequences {
            assert!(sequence.len() <= MAX_POINT_COUNT);
            assert!(sequence.iter().all(|s| s.y.is_finite()));
        }
    }

    #[test]
    fn test_replace_keeps_color() {
        let mut comparison = Comparison::new();
        comparison.push(spec(CurveFamily::Linear)).unwrap();
        comparison.push(spec(CurveFamily::Spring)).unwrap();
        comparison.set_active(1, false).unwrap();

        let old = comparison.replace(1, spec(CurveFamily::Smooth)).unwrap();
        assert_eq!(old.family(), CurveFamily::Spring);
        let slot = &comparison.slots()[1];
        assert_eq!(slot.spec.family(), CurveFamily::Smooth);
        assert_eq!(slot.color, Color::ORANGE);
        assert!(!slot.active);
    }

    #[test]
    fn test_render_only_active() {
        let mut comparison = Comparison::new();
        comparison.push(spec(CurveFamily::Linear)).unwrap();
        comparison.push(spec(CurveFamily::Bouncy)).unwrap();
        comparison.set_active(1, false).unwrap();

        let area = DrawArea::sized(100.0, 100.0).unwrap();
        let graph = comparison.render(&area, &CurveRenderer::default()).unwrap();
        assert_eq!(graph.paths.len(), 1);
        assert_eq!(graph.paths[0].color, Color::BLUE);
        assert!(graph.axis.target.is_none());
    }
}

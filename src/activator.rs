//! Section activation.
//!
//! Picks the active section for a scroll sample and applies the marking to
//! whatever holds the sections: the in-memory [`Sections`] model or the DOM.

use crate::layout::{SectionLayout, DEFAULT_BUFFER_RATIO};
use crate::types::{ScrollSample, Sections};

/// Ordered sections with a measurable height and an active marking.
pub trait SectionSurface {
    /// Number of sections; fixed for the lifetime of the surface
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current rendered height of section `index` in CSS pixels
    fn height(&self, index: usize) -> f64;

    /// Add or remove the active marking on section `index`
    fn set_marked(&mut self, index: usize, active: bool);
}

impl SectionSurface for Sections {
    fn len(&self) -> usize {
        Sections::len(self)
    }

    fn height(&self, index: usize) -> f64 {
        self.get(index).map_or(0.0, |s| s.height)
    }

    fn set_marked(&mut self, index: usize, active: bool) {
        self.mark(index, active);
    }
}

/// Applies the scroll-to-section selection rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionActivator {
    buffer_ratio: f64,
}

impl Default for SectionActivator {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_RATIO)
    }
}

impl SectionActivator {
    /// Negative or non-finite ratios fall back to [`DEFAULT_BUFFER_RATIO`].
    pub fn new(buffer_ratio: f64) -> Self {
        let buffer_ratio = if buffer_ratio.is_finite() && buffer_ratio >= 0.0 {
            buffer_ratio
        } else {
            tracing::warn!(buffer_ratio, "invalid buffer ratio, using default");
            DEFAULT_BUFFER_RATIO
        };
        Self { buffer_ratio }
    }

    pub fn buffer_ratio(&self) -> f64 {
        self.buffer_ratio
    }

    /// Snapshot the surface's current heights.
    pub fn measure<S: SectionSurface + ?Sized>(surface: &S) -> SectionLayout {
        SectionLayout::new((0..surface.len()).map(|i| surface.height(i)))
    }

    /// Clear the marking from every section, then mark `index`.
    ///
    /// Out-of-range indices (including any index on an empty surface) leave
    /// the surface untouched and return `false`.
    pub fn set_active<S: SectionSurface + ?Sized>(surface: &mut S, index: usize) -> bool {
        let len = surface.len();
        if index >= len {
            tracing::warn!(index, len, "ignoring activation of missing section");
            return false;
        }
        for i in 0..len {
            surface.set_marked(i, false);
        }
        surface.set_marked(index, true);
        true
    }

    /// Measure the surface, select the section for `sample`, and mark it.
    ///
    /// Returns the selected index, or `None` when there are no sections.
    pub fn select_active_on_scroll<S: SectionSurface + ?Sized>(
        &self,
        surface: &mut S,
        sample: ScrollSample,
    ) -> Option<usize> {
        let layout = Self::measure(surface);
        let index = layout.select(sample, self.buffer_ratio)?;
        tracing::debug!(
            y = sample.y(),
            h = sample.h(),
            index,
            sections = layout.len(),
            "active section selected"
        );
        Self::set_active(surface, index);
        Some(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_active_is_idempotent() {
        let mut sections = Sections::from_heights([10.0, 20.0, 30.0]);
        assert!(SectionActivator::set_active(&mut sections, 1));
        let once = sections.clone();
        assert!(SectionActivator::set_active(&mut sections, 1));
        assert_eq!(sections, once);
        assert_eq!(sections.active_index(), Some(1));
        assert_eq!(sections.active_count(), 1);
    }

    #[test]
    fn test_set_active_moves_marking() {
        let mut sections = Sections::from_heights([10.0, 20.0, 30.0]);
        SectionActivator::set_active(&mut sections, 0);
        SectionActivator::set_active(&mut sections, 2);
        assert_eq!(sections.active_index(), Some(2));
        assert_eq!(sections.active_count(), 1);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut sections = Sections::from_heights([10.0]);
        SectionActivator::set_active(&mut sections, 0);
        assert!(!SectionActivator::set_active(&mut sections, 3));
        assert_eq!(sections.active_index(), Some(0));

        let mut empty = Sections::default();
        assert!(!SectionActivator::set_active(&mut empty, 0));
    }

    #[test]
    fn test_scan_on_empty_surface() {
        let mut empty = Sections::default();
        let activator = SectionActivator::default();
        assert_eq!(
            activator.select_active_on_scroll(&mut empty, ScrollSample::new(50.0, 600.0)),
            None
        );
    }

    #[test]
    fn test_invalid_ratio_falls_back_to_default() {
        for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5] {
            let activator = SectionActivator::new(ratio);
            assert_eq!(activator.buffer_ratio().to_bits(), DEFAULT_BUFFER_RATIO.to_bits());
        }
        // h = 0 used to turn an infinite ratio into a NaN buffer.
        let mut sections = Sections::from_heights([100.0, 200.0, 150.0]);
        let activator = SectionActivator::new(f64::INFINITY);
        assert_eq!(
            activator.select_active_on_scroll(&mut sections, ScrollSample::new(500.0, 0.0)),
            Some(2)
        );
    }

    #[test]
    fn test_heights_are_remeasured_each_call() {
        let mut sections = Sections::from_heights([100.0, 100.0]);
        let activator = SectionActivator::new(0.0);
        let sample = ScrollSample::new(150.0, 0.0);
        assert_eq!(activator.select_active_on_scroll(&mut sections, sample), Some(1));
        sections.set_height(0, 400.0);
        assert_eq!(activator.select_active_on_scroll(&mut sections, sample), Some(0));
    }
}

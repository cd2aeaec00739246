//! Pre-computed cumulative heights for a story page.
//!
//! Bottoms are computed once per measurement so the active section can be
//! found with an O(log n) search instead of re-walking every section.

use crate::types::{clamp_measurement, ScrollSample};

/// Fraction of the viewport height a section activates ahead of its top edge.
pub const DEFAULT_BUFFER_RATIO: f64 = 1.0 / 3.0;

/// Cumulative section bottoms in page order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    /// `bottoms[i]` = sum of the heights of sections `0..=i`
    bottoms: Vec<f64>,
}

impl SectionLayout {
    /// Build a layout from rendered heights.
    ///
    /// Negative and non-finite heights count as zero, which keeps the
    /// bottoms non-decreasing.
    pub fn new<I>(heights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut memo = 0.0;
        let bottoms = heights
            .into_iter()
            .map(|h| {
                memo += clamp_measurement(h);
                memo
            })
            .collect();
        Self { bottoms }
    }

    pub fn len(&self) -> usize {
        self.bottoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bottoms.is_empty()
    }

    /// Sum of all section heights
    pub fn total_height(&self) -> f64 {
        self.bottoms.last().copied().unwrap_or(0.0)
    }

    /// Y of the bottom edge of section `index`
    pub fn bottom(&self, index: usize) -> Option<f64> {
        self.bottoms.get(index).copied()
    }

    /// Y of the top edge of section `index`
    pub fn top(&self, index: usize) -> Option<f64> {
        if index >= self.bottoms.len() {
            return None;
        }
        match index.checked_sub(1) {
            Some(prev) => self.bottoms.get(prev).copied(),
            None => Some(0.0),
        }
    }

    /// Pick the section that should be active for `sample`.
    ///
    /// At the top of the page the first section wins. Otherwise the first
    /// section whose bottom, less `buffer_ratio * h`, lies below `y` wins, and
    /// past the end of the content the last section is used. Returns `None`
    /// only when there are no sections.
    pub fn select(&self, sample: ScrollSample, buffer_ratio: f64) -> Option<usize> {
        let last = self.bottoms.len().checked_sub(1)?;
        if sample.is_at_top() {
            return Some(0);
        }
        let y = sample.y();
        let buffer = sample.h() * buffer_ratio;
        // `y < memo - NaN` never holds, so nothing matches.
        if buffer.is_nan() {
            return Some(last);
        }
        // Bottoms are non-decreasing, so sections with `y < memo - buffer`
        // form a suffix and the partition point is the first of them.
        let first = self.bottoms.partition_point(|&memo| memo - buffer <= y);
        Some(first.min(last))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_bottoms_accumulate() {
        let layout = SectionLayout::new([100.0, 200.0, 150.0]);
        assert_eq!(layout.bottom(0), Some(100.0));
        assert_eq!(layout.bottom(2), Some(450.0));
        assert_eq!(layout.top(0), Some(0.0));
        assert_eq!(layout.top(2), Some(300.0));
        assert_eq!(layout.top(3), None);
        assert_eq!(layout.total_height(), 450.0);
    }

    #[test]
    fn test_bad_heights_count_as_zero() {
        let layout = SectionLayout::new([100.0, -50.0, f64::NAN, 20.0]);
        assert_eq!(layout.bottom(1), Some(100.0));
        assert_eq!(layout.bottom(2), Some(100.0));
        assert_eq!(layout.total_height(), 120.0);
    }

    #[test]
    fn test_empty_layout_selects_nothing() {
        let layout = SectionLayout::default();
        assert_eq!(layout.select(ScrollSample::new(0.0, 600.0), DEFAULT_BUFFER_RATIO), None);
        assert_eq!(layout.top(0), None);
    }

    #[test]
    fn test_exact_threshold_is_not_a_match() {
        // memo - buffer == y must not select: the test is strict.
        let layout = SectionLayout::new([100.0, 100.0]);
        let sample = ScrollSample::new(70.0, 60.0);
        assert_eq!(layout.select(sample, 0.5), Some(1));
    }

    #[test]
    fn test_nan_buffer_matches_nothing() {
        let layout = SectionLayout::new([100.0, 200.0, 150.0]);
        assert_eq!(layout.select(ScrollSample::new(150.0, 300.0), f64::NAN), Some(2));
        assert_eq!(layout.select(ScrollSample::new(150.0, 0.0), f64::INFINITY), Some(2));
        assert_eq!(layout.select(ScrollSample::new(0.0, 300.0), f64::NAN), Some(0));
    }

    #[test]
    fn test_zero_height_sections_are_skipped() {
        let layout = SectionLayout::new([0.0, 0.0, 500.0]);
        assert_eq!(layout.select(ScrollSample::new(10.0, 0.0), 0.0), Some(2));
    }
}

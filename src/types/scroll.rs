use serde::{Deserialize, Serialize};

/// A scroll notification sample: vertical offset and viewport height.
///
/// Both values are always finite and non-negative. Malformed host
/// measurements (negative, NaN, infinite) are clamped to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSample")]
pub struct ScrollSample {
    y: f64,
    h: f64,
}

#[derive(Deserialize)]
struct RawSample {
    y: f64,
    h: f64,
}

impl From<RawSample> for ScrollSample {
    fn from(raw: RawSample) -> Self {
        Self::new(raw.y, raw.h)
    }
}

impl ScrollSample {
    pub fn new(y: f64, h: f64) -> Self {
        Self {
            y: clamp_measurement(y),
            h: clamp_measurement(h),
        }
    }

    /// Vertical scroll offset in CSS pixels
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Viewport height in CSS pixels
    pub fn h(&self) -> f64 {
        self.h
    }

    /// True when the page is scrolled to the very top.
    pub fn is_at_top(&self) -> bool {
        self.y <= 0.0
    }
}

pub(crate) fn clamp_measurement(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

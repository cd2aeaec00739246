//! Viewport metrics as reported by the host page.

use crate::types::ScrollSample;

/// Raw scroll metrics read on a scroll notification.
///
/// Window properties are preferred; older hosts only expose the root
/// element's metrics. Both paths feed the same selection logic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// `window.pageYOffset`, if the host provides it
    pub page_y_offset: Option<f64>,
    /// `window.innerHeight`, if the host provides it
    pub inner_height: Option<f64>,
    /// `document.documentElement.scrollTop`
    pub root_scroll_top: f64,
    /// `document.documentElement.clientHeight`
    pub root_client_height: f64,
}

impl Viewport {
    /// Viewport known only through root-element metrics
    pub fn from_root(scroll_top: f64, client_height: f64) -> Self {
        Self {
            page_y_offset: None,
            inner_height: None,
            root_scroll_top: scroll_top,
            root_client_height: client_height,
        }
    }

    /// Viewport reported through window properties
    pub fn from_window(page_y_offset: f64, inner_height: f64) -> Self {
        Self {
            page_y_offset: Some(page_y_offset),
            inner_height: Some(inner_height),
            ..Self::default()
        }
    }

    /// Resolve to a clamped scroll sample.
    ///
    /// A missing or non-finite `pageYOffset` selects the root-element pair.
    pub fn sample(&self) -> ScrollSample {
        match self.page_y_offset.filter(|y| y.is_finite()) {
            Some(y) => {
                let h = self
                    .inner_height
                    .filter(|h| h.is_finite())
                    .unwrap_or(self.root_client_height);
                ScrollSample::new(y, h)
            }
            None => ScrollSample::new(self.root_scroll_top, self.root_client_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_metrics_preferred() {
        let vp = Viewport {
            page_y_offset: Some(120.0),
            inner_height: Some(700.0),
            root_scroll_top: 5.0,
            root_client_height: 500.0,
        };
        assert_eq!(vp.sample(), ScrollSample::new(120.0, 700.0));
    }

    #[test]
    fn test_root_fallback_when_offset_missing() {
        let vp = Viewport {
            page_y_offset: None,
            inner_height: Some(700.0),
            root_scroll_top: 40.0,
            root_client_height: 500.0,
        };
        assert_eq!(vp.sample(), ScrollSample::new(40.0, 500.0));
    }

    #[test]
    fn test_nan_offset_uses_root() {
        let vp = Viewport {
            page_y_offset: Some(f64::NAN),
            ..Viewport::from_root(40.0, 500.0)
        };
        assert_eq!(vp.sample(), ScrollSample::new(40.0, 500.0));
    }

    #[test]
    fn test_missing_inner_height_uses_root_height() {
        let vp = Viewport {
            inner_height: None,
            root_client_height: 480.0,
            ..Viewport::from_window(10.0, 0.0)
        };
        assert_eq!(vp.sample(), ScrollSample::new(10.0, 480.0));
    }
}

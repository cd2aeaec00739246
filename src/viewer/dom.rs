//! DOM access for story sections and scroll metrics.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::activator::SectionSurface;
use crate::error::{Result, StorymapError};
use crate::layout::Viewport;

/// Section elements of the page, in document order.
pub(crate) struct DomSections {
    elements: Vec<HtmlElement>,
    active_class: String,
}

impl DomSections {
    /// Collect every element with `tag`. The set is read once and kept.
    pub(crate) fn collect(document: &Document, tag: &str, active_class: &str) -> Self {
        let collection = document.get_elements_by_tag_name(tag);
        let elements = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        Self {
            elements,
            active_class: active_class.to_string(),
        }
    }
}

impl SectionSurface for DomSections {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn height(&self, index: usize) -> f64 {
        self.elements
            .get(index)
            .map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn set_marked(&mut self, index: usize, active: bool) {
        if let Some(el) = self.elements.get(index) {
            if let Err(e) = el.class_list().toggle_with_force(&self.active_class, active) {
                tracing::warn!(index, error = ?e, "failed to update active class");
            }
        }
    }
}

pub(crate) fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| StorymapError::Dom("no document".into()))
}

/// Read the current scroll metrics, including the root-element fallback.
pub(crate) fn read_viewport(window: &Window) -> Viewport {
    let (root_scroll_top, root_client_height) = window
        .document()
        .and_then(|d| d.document_element())
        .map_or((0.0, 0.0), |root| {
            (f64::from(root.scroll_top()), f64::from(root.client_height()))
        });
    Viewport {
        page_y_offset: window.page_y_offset().ok(),
        inner_height: window.inner_height().ok().and_then(|h| h.as_f64()),
        root_scroll_top,
        root_client_height,
    }
}

//! `StoryView` - the WASM-exported entry point for story pages.
//!
//! Creating a view collects the page's section elements, binds the window
//! scroll listener and, when configured, mounts the map. The active class
//! then follows the reader with no further JavaScript wiring.

mod dom;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::activator::SectionSurface;
use crate::config::{MapConfig, StoryConfig};
use crate::coordinator::ScrollCoordinator;
use crate::error::StorymapError;
use crate::map::{mount_map, LeafletMap, MarkerSet};

use dom::DomSections;
use scroll::TimeoutScheduler;

/// Shared state that can be accessed by event handlers
pub(crate) type SharedState = ScrollCoordinator<DomSections, TimeoutScheduler>;

/// Scroll-driven section highlighter exported to JavaScript
#[wasm_bindgen]
pub struct StoryView {
    state: Rc<RefCell<SharedState>>,
    window: Window,
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl StoryView {
    /// Create a view for the current document.
    ///
    /// `config` may be `undefined` for the defaults. A map that fails to
    /// mount is logged and skipped; the highlighter still runs.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<StoryView, JsValue> {
        console_error_panic_hook::set_once();

        let config = StoryConfig::from_js(config)?;
        let window = web_sys::window().ok_or_else(|| StorymapError::Dom("no window".into()))?;
        let document = dom::document(&window)?;

        let sections = DomSections::collect(&document, &config.section_tag, &config.active_class);
        let count = sections.len();
        let state = Rc::new(RefCell::new(ScrollCoordinator::new(
            sections,
            TimeoutScheduler::new(window.clone()),
            &config,
        )));
        state
            .borrow_mut()
            .scheduler_mut()
            .bind(Rc::downgrade(&state));

        let scroll_closure = scroll::scroll_listener(window.clone(), &state);
        window
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())
            .map_err(|e| StorymapError::Dom(format!("scroll listener: {e:?}")))?;

        if let Some(map_config) = &config.map {
            if let Err(e) = mount_leaflet(map_config) {
                tracing::warn!(error = %e, "map not mounted");
            }
        }

        tracing::info!(
            sections = count,
            tag = %config.section_tag,
            debounce_ms = config.debounce_ms,
            "story view ready"
        );

        Ok(StoryView {
            state,
            window,
            scroll_closure: Some(scroll_closure),
        })
    }

    /// Mark section `index` active. Returns `false` if it does not exist.
    pub fn set_active(&self, index: usize) -> bool {
        self.state.borrow_mut().set_active(index)
    }

    /// Index of the active section, `undefined` before the first selection.
    pub fn active_index(&self) -> Option<usize> {
        self.state.borrow().active_index()
    }

    pub fn section_count(&self) -> usize {
        self.state.borrow().surface().len()
    }

    /// Sample the scroll position now and select without waiting for the debounce.
    pub fn refresh(&self) -> Option<usize> {
        let sample = dom::read_viewport(&self.window).sample();
        let mut s = self.state.borrow_mut();
        s.cancel();
        s.select(sample)
    }

    /// Unbind the scroll listener and drop any pending selection.
    pub fn destroy(&mut self) {
        if let Some(closure) = self.scroll_closure.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            {
                tracing::warn!(error = ?e, "scroll listener not removed");
            }
            self.state.borrow_mut().cancel();
            tracing::info!("story view destroyed");
        }
    }
}

impl Drop for StoryView {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount_leaflet(config: &MapConfig) -> crate::error::Result<()> {
    let mut map = LeafletMap::new(&config.container_id)?;
    mount_map(&mut map, config)
}

fn map_config_from_js(config: JsValue) -> crate::error::Result<MapConfig> {
    let config: MapConfig = if config.is_undefined() || config.is_null() {
        MapConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    config.validate()?;
    Ok(config)
}

/// Mount a map without a story view. `undefined` mounts the default map.
///
/// # Errors
/// Returns an error if the configuration is invalid or Leaflet is not loaded.
#[wasm_bindgen]
pub fn render_map(config: JsValue) -> Result<(), JsValue> {
    let config = map_config_from_js(config)?;
    mount_leaflet(&config)?;
    Ok(())
}

/// Markers of a map configuration as a GeoJSON string.
/// `undefined` uses the default markers.
///
/// # Errors
/// Returns an error if the configuration is invalid.
#[wasm_bindgen]
pub fn marker_geojson(config: JsValue) -> Result<String, JsValue> {
    let config = map_config_from_js(config)?;
    serde_json::to_string(&MarkerSet::from(&config).to_geojson())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

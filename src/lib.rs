//! storymap - scroll-driven story sections for the web
//!
//! Highlights the section a reader is on as they scroll a narrative page,
//! and mounts a marker map next to it:
//! - First-match section selection with an anticipatory viewport buffer
//! - Trailing-edge debounced scroll handling
//! - Pure, natively testable core; thin DOM binding in WebAssembly
//! - Map handed off to Leaflet through a small capability interface
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { StoryView, init_logging } from 'storymap';
//! await init();
//! init_logging('info');
//! const view = new StoryView({ map: { containerId: 'map' } });
//! ```

pub mod activator;
pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod logging;
pub mod map;
pub mod types;

// Browser bindings
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::StoryView;

pub use activator::{SectionActivator, SectionSurface};
pub use config::{MapConfig, StoryConfig};
pub use coordinator::ScrollCoordinator;
pub use error::{Result, StorymapError};
pub use types::*;

/// Index of the section to activate for a scroll position
///
/// # Arguments
/// * `heights` - Rendered section heights, in page order
/// * `y` - Vertical scroll offset
/// * `h` - Viewport height
///
/// # Returns
/// The section index, or -1 when there are no sections.
#[must_use]
#[wasm_bindgen]
pub fn select_index(heights: &[f64], y: f64, h: f64) -> i32 {
    layout::SectionLayout::new(heights.iter().copied())
        .select(ScrollSample::new(y, h), layout::DEFAULT_BUFFER_RATIO)
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(-1)
}

/// Default story configuration as a JavaScript object
///
/// # Errors
/// Returns an error if serialization fails.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn default_config() -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&StoryConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Default map configuration as a JavaScript object
///
/// # Errors
/// Returns an error if serialization fails.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn default_map_config() -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&MapConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Page configuration.
//!
//! Every field has a default, so an empty object (or `undefined` from
//! JavaScript) yields the stock story page: `<section>` elements, an
//! `active` class, a 10 ms debounce and a one-third viewport buffer.

use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::error::{Result, StorymapError};
use crate::layout::DEFAULT_BUFFER_RATIO;
use crate::types::{LatLng, MapView, Marker};

/// Highest zoom level accepted for the map view.
pub const MAX_ZOOM: u8 = 18;

/// Scroll highlighter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryConfig {
    /// Tag name of the section elements, in document order
    pub section_tag: String,
    /// Class toggled on the active section
    pub active_class: String,
    /// Quiet interval before a scroll burst is acted on
    pub debounce_ms: u32,
    /// Fraction of the viewport height sections activate early by
    pub buffer_ratio: f64,
    /// Map to mount alongside the story, if any
    pub map: Option<MapConfig>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            section_tag: "section".to_string(),
            active_class: "active".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            buffer_ratio: DEFAULT_BUFFER_RATIO,
            map: None,
        }
    }
}

impl StoryConfig {
    /// Decode and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Decode and validate a configuration object passed from JavaScript.
    ///
    /// `undefined` and `null` yield the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        let config: Self = if value.is_undefined() || value.is_null() {
            Self::default()
        } else {
            serde_wasm_bindgen::from_value(value)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.section_tag.trim().is_empty() {
            return Err(StorymapError::Config("sectionTag is empty".into()));
        }
        if self.active_class.is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(StorymapError::Config(format!(
                "activeClass {:?} is not a single class name",
                self.active_class
            )));
        }
        if !self.buffer_ratio.is_finite() || !(0.0..=1.0).contains(&self.buffer_ratio) {
            return Err(StorymapError::Config(format!(
                "bufferRatio {} is outside [0, 1]",
                self.buffer_ratio
            )));
        }
        if let Some(map) = &self.map {
            map.validate()?;
        }
        Ok(())
    }
}

/// Map collaborator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    /// Id of the element the map renders into
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    /// Stamen tile style name
    pub tile_style: String,
    pub markers: Vec<Marker>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            center: LatLng::new(9.925201, 78.119775),
            zoom: 5,
            tile_style: "watercolor".to_string(),
            markers: vec![
                Marker::new("Madurai", LatLng::new(9.925201, 78.119775)),
                Marker::new("Coimbatore", LatLng::new(11.0, 76.96667)),
            ],
        }
    }
}

impl MapConfig {
    pub fn view(&self) -> MapView {
        MapView {
            center: self.center,
            zoom: self.zoom,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.container_id.trim().is_empty() {
            return Err(StorymapError::Config("map containerId is empty".into()));
        }
        if self.zoom > MAX_ZOOM {
            return Err(StorymapError::Config(format!(
                "zoom {} exceeds {MAX_ZOOM}",
                self.zoom
            )));
        }
        if !self.center.is_valid() {
            return Err(StorymapError::Config(format!(
                "map center {:?} is not a valid coordinate",
                self.center
            )));
        }
        if self.tile_style.trim().is_empty() {
            return Err(StorymapError::Config("tileStyle is empty".into()));
        }
        for marker in &self.markers {
            if marker.title.trim().is_empty() {
                return Err(StorymapError::Config("marker title is empty".into()));
            }
            if !marker.coordinates.is_valid() {
                return Err(StorymapError::Config(format!(
                    "marker {:?} has invalid coordinates {:?}",
                    marker.title, marker.coordinates
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(StoryConfig::default().validate().is_ok());
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(StoryConfig::from_json("{}").unwrap(), StoryConfig::default());
    }

    #[test]
    fn test_default_buffer_is_one_third() {
        assert_eq!(StoryConfig::default().buffer_ratio, 1.0 / 3.0);
    }
}

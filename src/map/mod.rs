//! Map collaborator.
//!
//! Tile rendering, projection and marker icons belong to the page's map
//! library. This module only describes what gets handed to it: a view, a
//! tile style and a list of titled markers.

#[cfg(target_arch = "wasm32")]
mod leaflet;

#[cfg(target_arch = "wasm32")]
pub use leaflet::LeafletMap;

use serde_json::{json, Value};

use crate::config::MapConfig;
use crate::error::Result;
use crate::types::{MapView, Marker};

/// A map widget that accepts a view, a tile layer and markers.
pub trait MapSurface {
    fn set_view(&mut self, view: &MapView) -> Result<()>;

    fn add_tile_layer(&mut self, style: &str) -> Result<()>;

    fn add_marker(&mut self, marker: &Marker) -> Result<()>;
}

/// Push a configured map into `surface`: view first, then tiles, then markers.
pub fn mount_map<M: MapSurface + ?Sized>(surface: &mut M, config: &MapConfig) -> Result<()> {
    surface.set_view(&config.view())?;
    surface.add_tile_layer(&config.tile_style)?;
    for marker in &config.markers {
        surface.add_marker(marker)?;
    }
    tracing::info!(
        container = %config.container_id,
        markers = config.markers.len(),
        zoom = config.zoom,
        "map mounted"
    );
    Ok(())
}

/// Ordered markers, addressable by title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// First marker with the given title
    pub fn get(&self, title: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    /// Markers as a GeoJSON `FeatureCollection` of `Point`s.
    ///
    /// GeoJSON positions are `[lon, lat]`, the reverse of [`crate::types::LatLng`].
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .markers
            .iter()
            .map(|m| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [m.coordinates.lon, m.coordinates.lat],
                    },
                    "properties": { "title": m.title },
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }
}

impl From<&MapConfig> for MarkerSet {
    fn from(config: &MapConfig) -> Self {
        Self::new(config.markers.clone())
    }
}

/// One call received by a [`RecordingMap`]
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    SetView(MapView),
    TileLayer(String),
    Marker(Marker),
}

/// Map surface that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub calls: Vec<MapCall>,
}

impl MapSurface for RecordingMap {
    fn set_view(&mut self, view: &MapView) -> Result<()> {
        self.calls.push(MapCall::SetView(*view));
        Ok(())
    }

    fn add_tile_layer(&mut self, style: &str) -> Result<()> {
        self.calls.push(MapCall::TileLayer(style.to_string()));
        Ok(())
    }

    fn add_marker(&mut self, marker: &Marker) -> Result<()> {
        self.calls.push(MapCall::Marker(marker.clone()));
        Ok(())
    }
}

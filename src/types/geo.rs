use serde::{Deserialize, Serialize};

/// Geographic coordinate, serialized as a `[lat, lon]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when latitude lies in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lon]
    }
}

/// A titled point feature shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub coordinates: LatLng,
    pub title: String,
}

impl Marker {
    pub fn new(title: impl Into<String>, coordinates: LatLng) -> Self {
        Self {
            coordinates,
            title: title.into(),
        }
    }
}

/// Initial map view: center coordinate and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

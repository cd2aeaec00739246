//! Leaflet bridge.
//!
//! Talks to the page's global `L` object through `Reflect`; the Leaflet and
//! Stamen scripts must be loaded before a map is mounted.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::MapSurface;
use crate::error::{Result, StorymapError};
use crate::types::{LatLng, MapView, Marker};

fn map_err(context: &str, err: &JsValue) -> StorymapError {
    StorymapError::Map(format!("{context}: {err:?}"))
}

fn get(target: &JsValue, key: &str) -> Result<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(key)).map_err(|e| map_err(key, &e))?;
    if value.is_undefined() {
        return Err(StorymapError::Map(format!("{key} is undefined")));
    }
    Ok(value)
}

fn function(target: &JsValue, key: &str) -> Result<Function> {
    get(target, key)?
        .dyn_into::<Function>()
        .map_err(|_| StorymapError::Map(format!("{key} is not a function")))
}

fn call(target: &JsValue, key: &str, args: &Array) -> Result<JsValue> {
    function(target, key)?
        .apply(target, args)
        .map_err(|e| map_err(key, &e))
}

fn lat_lng(p: LatLng) -> JsValue {
    Array::of2(&JsValue::from_f64(p.lat), &JsValue::from_f64(p.lon)).into()
}

fn options(pairs: &[(&str, JsValue)]) -> Result<JsValue> {
    let obj = Object::new();
    for (key, value) in pairs {
        Reflect::set(&obj, &JsValue::from_str(key), value).map_err(|e| map_err(key, &e))?;
    }
    Ok(obj.into())
}

/// A Leaflet map bound to a container element.
///
/// The map object is created by the first `set_view`.
pub struct LeafletMap {
    leaflet: JsValue,
    container_id: String,
    map: Option<JsValue>,
}

impl LeafletMap {
    /// Bind to the global `L`; fails if Leaflet is not loaded.
    pub fn new(container_id: &str) -> Result<Self> {
        let leaflet = get(&js_sys::global().into(), "L")?;
        Ok(Self {
            leaflet,
            container_id: container_id.to_string(),
            map: None,
        })
    }

    fn map(&self) -> Result<&JsValue> {
        self.map
            .as_ref()
            .ok_or_else(|| StorymapError::Map("map view not set".into()))
    }
}

impl MapSurface for LeafletMap {
    fn set_view(&mut self, view: &MapView) -> Result<()> {
        if let Some(map) = &self.map {
            let args = Array::of2(&lat_lng(view.center), &JsValue::from(view.zoom));
            call(map, "setView", &args)?;
            return Ok(());
        }
        let opts = options(&[
            ("center", lat_lng(view.center)),
            ("zoom", JsValue::from(view.zoom)),
        ])?;
        let args = Array::of2(&JsValue::from_str(&self.container_id), &opts);
        self.map = Some(call(&self.leaflet, "map", &args)?);
        Ok(())
    }

    fn add_tile_layer(&mut self, style: &str) -> Result<()> {
        let ctor = function(&self.leaflet, "StamenTileLayer")?;
        let layer = Reflect::construct(&ctor, &Array::of1(&JsValue::from_str(style)))
            .map_err(|e| map_err("StamenTileLayer", &e))?;
        call(self.map()?, "addLayer", &Array::of1(&layer))?;
        Ok(())
    }

    fn add_marker(&mut self, marker: &Marker) -> Result<()> {
        let opts = options(&[("title", JsValue::from_str(&marker.title))])?;
        let leaflet_marker = call(
            &self.leaflet,
            "marker",
            &Array::of2(&lat_lng(marker.coordinates), &opts),
        )?;
        call(&leaflet_marker, "addTo", &Array::of1(self.map()?))?;
        Ok(())
    }
}

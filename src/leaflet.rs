//! Bindings to the Leaflet global `L` loaded by index.html.
//! Only the calls the location map needs are declared.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::Callback;

use crate::config::MapConfig;
use crate::model::LocationId;
use crate::view::MarkerView;
use crate::viewport::Viewport;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = zoomIn)]
    fn leaflet_zoom_in(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = zoomOut)]
    fn leaflet_zoom_out(this: &LeafletMap);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap);

    pub type Icon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = icon)]
    fn icon(options: &JsValue) -> Result<Icon, JsValue>;

    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap);

    #[wasm_bindgen(method)]
    fn on(this: &Marker, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &Marker, content: &str);
}

impl Viewport for LeafletMap {
    fn zoom_in(&self) {
        self.leaflet_zoom_in();
    }

    fn zoom_out(&self) {
        self.leaflet_zoom_out();
    }
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    title: &'a str,
    alt: &'a str,
}

/// Plain JS object from any serializable value.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let raw = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&raw)
}

/// Creates the map inside `config.container_id` and attaches the tile layer.
pub fn mount(config: &MapConfig) -> Result<LeafletMap, JsValue> {
    let map = create_map(&config.container_id, &to_js(&config.map_options())?)?;
    let tiles = tile_layer(
        &config.tile_layer.url_template,
        &to_js(&config.tile_layer)?,
    )?;
    tiles.add_tiles_to(&map);
    Ok(map)
}

/// Adds one marker per entry. The returned click closures must outlive the map.
pub fn add_markers(
    map: &LeafletMap,
    config: &MapConfig,
    markers: &[MarkerView],
    on_click: &Callback<LocationId>,
) -> Result<Vec<Closure<dyn FnMut()>>, JsValue> {
    let pin = icon(&to_js(&config.icon)?)?;
    let mut listeners = Vec::with_capacity(markers.len());
    for mv in markers {
        let options = to_js(&MarkerOptions {
            title: &mv.title,
            alt: &mv.title,
        })?;
        let options =
            js_sys::Object::assign(&options.unchecked_into::<js_sys::Object>(), &icon_entry(&pin));
        let m = marker(&to_js(&mv.position.to_array())?, &options)?;
        let id = mv.id;
        let cb = on_click.clone();
        let handler = Closure::<dyn FnMut()>::new(move || cb.emit(id));
        m.on("click", handler.as_ref().unchecked_ref());
        m.bind_tooltip(&mv.title);
        m.add_marker_to(map);
        listeners.push(handler);
    }
    Ok(listeners)
}

fn icon_entry(pin: &Icon) -> js_sys::Object {
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &JsValue::from_str("icon"), pin);
    obj
}

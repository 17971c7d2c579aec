//! Bindings to the Yandex Maps 2.1 JavaScript API (browser only).
//!
//! SYSTEM CONTEXT
//! ==============
//! The API is loaded by injecting its loader script once per page. Everything
//! past that boundary is the widget's business: if the script or the map fails
//! to initialize, callers get a reason string and show a degraded map region.
//!
//! TRADE-OFFS
//! ==========
//! Option objects are built with `serde_json` and handed over through
//! `JSON.parse` instead of field-by-field `Reflect::set` calls.

use std::rc::Rc;

use fleet::marker::{self, Marker};
use fleet::{EquipmentId, MapSettings};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::script_loader::{LoadState, LoaderStep, STATE_ATTR, next_step};

const SCRIPT_ID: &str = "ymaps-loader";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ymaps, js_name = ready)]
    fn ymaps_ready(on_ready: &js_sys::Function, on_error: &js_sys::Function);

    #[wasm_bindgen(js_namespace = ymaps, js_name = Map)]
    type YMap;

    #[wasm_bindgen(constructor, js_namespace = ymaps, js_class = "Map", catch)]
    fn new(container: &web_sys::HtmlElement, state: &JsValue, options: &JsValue) -> Result<YMap, JsValue>;

    #[wasm_bindgen(method, getter, js_class = "Map", js_name = geoObjects)]
    fn geo_objects(this: &YMap) -> GeoObjectCollection;

    #[wasm_bindgen(method, js_class = "Map")]
    fn destroy(this: &YMap);

    type GeoObjectCollection;

    #[wasm_bindgen(method)]
    fn add(this: &GeoObjectCollection, object: &Placemark);

    #[wasm_bindgen(method, js_name = removeAll)]
    fn remove_all(this: &GeoObjectCollection);

    #[wasm_bindgen(js_namespace = ymaps)]
    type Placemark;

    #[wasm_bindgen(constructor, js_namespace = ymaps)]
    fn new(coordinates: &JsValue, properties: &JsValue, options: &JsValue) -> Placemark;

    #[wasm_bindgen(method, getter)]
    fn events(this: &Placemark) -> EventManager;

    #[wasm_bindgen(method, getter)]
    fn geometry(this: &Placemark) -> PointGeometry;

    type PointGeometry;

    #[wasm_bindgen(method, js_name = setCoordinates)]
    fn set_coordinates(this: &PointGeometry, coordinates: &JsValue);

    type EventManager;

    #[wasm_bindgen(method, js_name = add)]
    fn add_listener(this: &EventManager, event: &str, handler: &js_sys::Function);
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    js_sys::JSON::parse(&value.to_string()).map_err(|e| format!("{e:?}"))
}

fn api_present() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("ymaps")).unwrap_or(false)
}

/// Load the API script if needed and run `on_ready` once `ymaps.ready` fires.
/// `on_error` receives a reason when the script or the API fails to load.
pub fn ensure_loaded(settings: &MapSettings, on_ready: impl Fn() + 'static, on_error: impl Fn(String) + 'static) {
    let on_ready: Rc<dyn Fn()> = Rc::new(on_ready);
    let on_error: Rc<dyn Fn(String)> = Rc::new(on_error);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        on_error("no document".to_owned());
        return;
    };
    let existing = document.get_element_by_id(SCRIPT_ID);
    let recorded = existing.as_ref().map(|el| el.get_attribute(STATE_ATTR).as_deref().and_then(LoadState::from_attr));

    let script = match next_step(api_present(), recorded) {
        LoaderStep::UseApi => {
            wait_ready(on_ready, on_error);
            return;
        }
        LoaderStep::Fail => {
            on_error("map script loaded without the API".to_owned());
            return;
        }
        LoaderStep::Wait => match existing {
            Some(script) => script,
            None => {
                on_error("loader script disappeared".to_owned());
                return;
            }
        },
        LoaderStep::Inject => {
            if let Some(stale) = existing {
                stale.remove();
            }
            match inject_script(&document, settings) {
                Ok(script) => script,
                Err(reason) => {
                    on_error(reason);
                    return;
                }
            }
        }
    };

    let loaded = script.clone();
    let failed = script.clone();
    let ready_error = Rc::clone(&on_error);
    let on_load = Closure::once_into_js(move || {
        let _ = loaded.set_attribute(STATE_ATTR, LoadState::Loaded.as_attr());
        wait_ready(on_ready, ready_error);
    });
    let on_fail = Closure::once_into_js(move || {
        let _ = failed.set_attribute(STATE_ATTR, LoadState::Failed.as_attr());
        on_error("map script failed to load".to_owned());
    });
    let _ = script.add_event_listener_with_callback("load", on_load.unchecked_ref());
    let _ = script.add_event_listener_with_callback("error", on_fail.unchecked_ref());
}

fn inject_script(document: &web_sys::Document, settings: &MapSettings) -> Result<web_sys::Element, String> {
    let element = document.create_element("script").map_err(|_| "cannot create loader script".to_owned())?;
    let script: web_sys::HtmlScriptElement = element.unchecked_into();
    script.set_id(SCRIPT_ID);
    script.set_src(&settings.script_url());
    script.set_async(true);
    let _ = script.set_attribute(STATE_ATTR, LoadState::Loading.as_attr());
    let head = document.head().ok_or_else(|| "cannot attach loader script".to_owned())?;
    head.append_child(&script).map_err(|_| "cannot attach loader script".to_owned())?;
    Ok(script.into())
}

fn wait_ready(on_ready: Rc<dyn Fn()>, on_error: Rc<dyn Fn(String)>) {
    let ready = Closure::once_into_js(move || on_ready());
    let failed = Closure::once_into_js(move |err: JsValue| on_error(format!("map API failed: {err:?}")));
    ymaps_ready(ready.unchecked_ref(), failed.unchecked_ref());
}

/// One live map instance bound to a container element.
pub struct MapWidget {
    map: YMap,
    placemarks: Vec<(EquipmentId, Placemark)>,
    handlers: Vec<Closure<dyn FnMut()>>,
}

impl MapWidget {
    /// Create the map centered per `settings`.
    ///
    /// # Errors
    ///
    /// Returns the widget's own error text when construction throws.
    pub fn create(container: &web_sys::HtmlElement, settings: &MapSettings) -> Result<Self, String> {
        let state = to_js(&serde_json::json!({
            "center": settings.center,
            "zoom": settings.zoom,
            "controls": ["zoomControl", "geolocationControl"],
        }))?;
        let options = to_js(&serde_json::json!({ "suppressMapOpenBlock": true }))?;
        let map = YMap::new(container, &state, &options).map_err(|e| format!("{e:?}"))?;
        Ok(Self { map, placemarks: Vec::new(), handlers: Vec::new() })
    }

    /// Sync placemarks with `markers`. Clicking one calls `on_select` with its id.
    ///
    /// When the same ids are shown in the same order only coordinates move,
    /// so an open balloon survives a tracking tick. Any other change rebuilds
    /// the collection.
    pub fn set_markers(&mut self, markers: &[Marker], on_select: impl Fn(EquipmentId) + Clone + 'static) {
        let ids: Vec<EquipmentId> = self.placemarks.iter().map(|(id, _)| *id).collect();
        if marker::same_ids(&ids, markers) {
            for ((_, placemark), marker) in self.placemarks.iter().zip(markers) {
                match to_js(&serde_json::json!(marker.coordinates)) {
                    Ok(coordinates) => placemark.geometry().set_coordinates(&coordinates),
                    Err(reason) => log::warn!("marker {} not moved: {reason}", marker.id),
                }
            }
            return;
        }

        let collection = self.map.geo_objects();
        collection.remove_all();
        self.placemarks.clear();
        self.handlers.clear();

        for marker in markers {
            let Ok(placemark) = build_placemark(marker) else {
                log::warn!("skipping marker {}: options rejected", marker.id);
                continue;
            };
            let id = marker.id;
            let select = on_select.clone();
            let handler = Closure::<dyn FnMut()>::new(move || select(id));
            placemark.events().add_listener("click", handler.as_ref().unchecked_ref());
            collection.add(&placemark);
            self.placemarks.push((id, placemark));
            self.handlers.push(handler);
        }
    }

    /// Tear the map down and release click handlers.
    pub fn destroy(self) {
        self.map.geo_objects().remove_all();
        self.map.destroy();
    }
}

fn build_placemark(marker: &Marker) -> Result<Placemark, String> {
    let coordinates = to_js(&serde_json::json!(marker.coordinates))?;
    let properties = to_js(&serde_json::json!({
        "balloonContentHeader": marker.balloon.header,
        "balloonContentBody": marker.balloon.body,
        "hintContent": marker.balloon.hint,
    }))?;
    let options = to_js(&serde_json::json!({
        "iconLayout": "default#image",
        "iconImageHref": marker.icon.href,
        "iconImageSize": marker.icon.size,
        "iconImageOffset": marker.icon.offset,
        "hideIconOnBalloonOpen": false,
    }))?;
    Ok(Placemark::new(&coordinates, &properties, &options))
}

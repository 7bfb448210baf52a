use anyhow::anyhow;
use map_common::{Cursor, LngLat, MapAdapter, MapConfig, Popup};
use wasm_bindgen::{prelude::*, JsCast};

#[wasm_bindgen(js_namespace = mapboxgl)]
extern "C" {
    pub type Map;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = getCenter)]
    fn get_center(this: &Map) -> JsLngLat;

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method, js_name = getCanvas)]
    fn get_canvas(this: &Map) -> web_sys::HtmlCanvasElement;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn off(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn remove(this: &Map);

    #[wasm_bindgen(js_name = LngLat)]
    pub type JsLngLat;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &JsLngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &JsLngLat) -> f64;

    #[wasm_bindgen(js_name = Marker)]
    pub type JsMarker;

    #[wasm_bindgen(constructor, js_class = "Marker")]
    fn new() -> JsMarker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &JsMarker, lng_lat: &JsValue) -> JsMarker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &JsMarker, popup: &JsPopup) -> JsMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &JsMarker, map: &Map) -> JsMarker;

    #[wasm_bindgen(method)]
    fn remove(this: &JsMarker) -> JsMarker;

    #[wasm_bindgen(method, js_name = getElement)]
    fn get_element(this: &JsMarker) -> web_sys::HtmlElement;

    #[wasm_bindgen(js_name = Popup)]
    pub type JsPopup;

    #[wasm_bindgen(constructor, js_class = "Popup")]
    fn new() -> JsPopup;

    #[wasm_bindgen(method, js_name = setDOMContent)]
    fn set_dom_content(this: &JsPopup, node: &web_sys::Node) -> JsPopup;
}

#[wasm_bindgen]
extern "C" {
    /// Mouse event passed to `click` listeners.
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter, js_name = lngLat)]
    fn lng_lat(this: &MapMouseEvent) -> JsLngLat;
}

impl MapMouseEvent {
    pub fn position(&self) -> LngLat {
        let lng_lat = self.lng_lat();
        LngLat::new(lng_lat.lng(), lng_lat.lat())
    }
}

pub type Listener = Closure<dyn FnMut(JsValue)>;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

fn lng_lat_array(at: LngLat) -> JsValue {
    js_sys::Array::of2(&at.lng.into(), &at.lat.into()).into()
}

fn map_options(config: &MapConfig, container: &web_sys::HtmlElement) -> anyhow::Result<JsValue> {
    let options = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), value).map_err(js_err)
    };
    set("container", &JsValue::from(container.clone()))?;
    set("accessToken", &JsValue::from_str(&config.access_token))?;
    set("style", &JsValue::from_str(&config.style))?;
    set("center", &lng_lat_array(config.center))?;
    set("zoom", &JsValue::from_f64(config.zoom))?;
    Ok(options.into())
}

/// Builds the `<h1>` shown inside a marker popup.
fn popup_node(popup: &Popup) -> anyhow::Result<web_sys::Node> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        anyhow::bail!("Cannot get document");
    };
    let heading = document.create_element("h1").map_err(js_err)?;
    heading.set_text_content(Some(popup.heading()));
    Ok(heading.into())
}

/// Owns one mapbox-gl map. Dropping the adapter detaches its listeners and
/// destroys the map.
pub struct MapboxAdapter {
    map: Map,
    listeners: Vec<(&'static str, Listener)>,
}

impl MapboxAdapter {
    pub fn new(config: &MapConfig, container: &web_sys::HtmlElement) -> anyhow::Result<Self> {
        let options = map_options(config, container)?;
        let map = Map::new(&options).map_err(js_err)?;
        log::info!("Map created with style {}", config.style);
        Ok(Self {
            map,
            listeners: vec![],
        })
    }

    pub fn listen(&mut self, event: &'static str, listener: Listener) {
        self.map.on(event, listener.as_ref().unchecked_ref());
        self.listeners.push((event, listener));
    }
}

impl Drop for MapboxAdapter {
    fn drop(&mut self) {
        for (event, listener) in self.listeners.drain(..) {
            self.map.off(event, listener.as_ref().unchecked_ref());
        }
        self.map.remove();
        log::info!("Map removed");
    }
}

impl MapAdapter for MapboxAdapter {
    type Marker = JsMarker;

    fn center(&self) -> LngLat {
        let center = self.map.get_center();
        LngLat::new(center.lng(), center.lat())
    }

    fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }

    fn add_marker(&mut self, at: LngLat, popup: &Popup) -> JsMarker {
        let js_popup = JsPopup::new();
        match popup_node(popup) {
            Ok(node) => {
                js_popup.set_dom_content(&node);
            }
            Err(e) => log::error!("Cannot render popup: {e}"),
        }

        JsMarker::new()
            .set_lng_lat(&lng_lat_array(at))
            .set_popup(&js_popup)
            .add_to(&self.map)
    }

    fn remove_marker(&mut self, marker: JsMarker) {
        marker.remove();
    }

    fn set_marker_visible(&mut self, marker: &JsMarker, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = marker.get_element().style().set_property("display", display) {
            log::error!("Cannot set marker display: {e:?}");
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if let Err(e) = self
            .map
            .get_canvas()
            .style()
            .set_property("cursor", cursor.as_css())
        {
            log::error!("Cannot set map cursor: {e:?}");
        }
    }
}

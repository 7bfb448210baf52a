use leptos::*;
use leptos_meta::*;

mod components;
pub mod mapbox;

use crate::components::map::MapWidget;
use map_common::MapConfig;
use wasm_bindgen::JsValue;

pub const CONFIG_ELEMENT_ID: &str = "map-config";

/// Reads the JSON config embedded in the host page as
/// `<script id="map-config" type="application/json">`.
pub fn read_page_config() -> anyhow::Result<MapConfig> {
    let Some(window) = web_sys::window() else {
        anyhow::bail!("Cannot get window");
    };

    let Some(document) = window.document() else {
        anyhow::bail!("Cannot get document");
    };

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        anyhow::bail!("No #{CONFIG_ELEMENT_ID} element in page");
    };

    let text = element.text_content().unwrap_or_default();
    MapConfig::load(text.as_str())
}

pub fn load_config() -> MapConfig {
    match read_page_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Cannot read page config ({e}), using defaults");
            let config = MapConfig::default()
                .with_access_token(option_env!("MAPBOX_ACCESS_TOKEN").unwrap_or_default());
            if let Err(e) = config.validate() {
                log::error!("Invalid map config: {e}");
            }
            config
        }
    }
}

/// Today's date formatted for the browser's locale.
pub fn locale_date() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();

    view! {
        <Title text="Map markers"/>
        <Meta charset="UTF-8"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <main>
            <MapWidget config=config/>
        </main>
    }
}

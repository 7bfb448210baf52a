#![cfg(target_arch = "wasm32")]

use map_widget::{load_config, locale_date, read_page_config, CONFIG_ELEMENT_ID};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_page_config(json: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id(CONFIG_ELEMENT_ID) {
        old.remove();
    }
    let script = document.create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(json));
    document.body().unwrap().append_child(&script).unwrap();
}

#[wasm_bindgen_test]
fn reads_config_from_page() {
    set_page_config(r#"{"access_token": "pk.test", "zoom": 11.5}"#);
    let config = read_page_config().unwrap();
    assert_eq!(config.access_token, "pk.test");
    assert_eq!(config.zoom, 11.5);
}

#[wasm_bindgen_test]
fn falls_back_on_invalid_config() {
    set_page_config("{ broken");
    assert!(read_page_config().is_err());

    let config = load_config();
    assert_eq!(config.style, map_common::config::DEFAULT_STYLE);
}

#[wasm_bindgen_test]
fn formats_today() {
    assert!(!locale_date().is_empty());
}

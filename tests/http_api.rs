#![cfg(all(target_arch = "wasm32", feature = "yew"))]

use activity_form::model::network::{ActivityId, HttpActivityApi, ItemUpload};
use wasm_bindgen_test::*;

/// To run the tests:
///
/// wasm-pack test --firefox --headless
wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn item_form_contains_scalars_and_activity() {
    console_error_panic_hook::set_once();

    let upload = ItemUpload::<web_sys::File> {
        activity: ActivityId::new("A1"),
        text: "Hallo".to_string(),
        text_translation: "Hello".to_string(),
        audio: None,
        image: None,
    };

    let form = HttpActivityApi::item_form(&upload).unwrap();

    assert_eq!(form.get("text").as_string().as_deref(), Some("Hallo"));
    assert_eq!(form.get("text_translation").as_string().as_deref(), Some("Hello"));
    assert_eq!(form.get("activity").as_string().as_deref(), Some("A1"));
    assert!(!form.has("audio"));
    assert!(!form.has("image"));
}

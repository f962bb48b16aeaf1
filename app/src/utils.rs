//! Small JS interop helpers

use wasm_bindgen::JsValue;

/// Set `key` on a JS object. Reflect::set only fails on frozen objects or
/// non-objects, neither of which we build.
pub fn js_set(obj: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), value);
}

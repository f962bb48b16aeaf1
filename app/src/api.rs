//! Tauri API client module
//!
//! Type-safe wrappers around Tauri invoke() calls. The settings window never
//! touches `window.__TAURI__` directly.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::types::{IMAGE_EXTENSIONS, Settings};
use crate::utils::js_set;

// ─────────────────────────────────────────────────────────────────────────────
// Raw Tauri Bindings
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "dialog"], js_name = "open")]
    async fn open_dialog(options: JsValue) -> JsValue;
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Build a JsValue object with a single key-value pair
fn build_args<T: Serialize + ?Sized>(key: &str, value: &T) -> JsValue {
    let args = serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL);
    let obj = js_sys::Object::new();
    js_set(&obj, key, &args);
    obj.into()
}

/// Deserialize a JsValue into a type, returning None on failure
fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Option<T> {
    serde_wasm_bindgen::from_value(value).ok()
}

/// Invoke a Tauri command that may return an error, catching the rejection.
/// Returns Ok(JsValue) on success, Err(String) on failure.
async fn try_invoke(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    use js_sys::Promise;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or("No window")?;
    let tauri = js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map_err(|_| "No __TAURI__")?;
    let core = js_sys::Reflect::get(&tauri, &JsValue::from_str("core")).map_err(|_| "No core")?;
    let invoke_fn =
        js_sys::Reflect::get(&core, &JsValue::from_str("invoke")).map_err(|_| "No invoke")?;
    let invoke_fn: js_sys::Function = invoke_fn.dyn_into().map_err(|_| "invoke not a function")?;

    let promise = invoke_fn
        .call2(&JsValue::NULL, &JsValue::from_str(cmd), &args)
        .map_err(|e| format!("invoke call failed: {:?}", e))?;
    let promise: Promise = promise.dyn_into().map_err(|_| "not a promise")?;

    // Rejections carry the backend's error string
    JsFuture::from(promise)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Load the persisted settings (defaults if nothing was saved yet)
pub async fn get_settings() -> Result<Settings, String> {
    let result = try_invoke("get_settings", JsValue::NULL).await?;
    from_js(result).ok_or_else(|| "Malformed settings from backend".to_string())
}

/// Persist the given settings
pub async fn save_settings(settings: &Settings) -> Result<(), String> {
    try_invoke("save_settings", build_args("settings", settings)).await?;
    Ok(())
}

/// Delete the persisted settings and get the defaults back
pub async fn reset_settings() -> Result<Settings, String> {
    let result = try_invoke("reset_settings", JsValue::NULL).await?;
    from_js(result).ok_or_else(|| "Malformed settings from backend".to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Dialogs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DialogFilter {
    name: &'static str,
    extensions: &'static [&'static str],
}

#[derive(Serialize)]
struct OpenDialogOptions {
    title: String,
    multiple: bool,
    directory: bool,
    filters: Vec<DialogFilter>,
}

/// Ask the user for an image file. Returns `None` when the dialog is cancelled.
pub async fn pick_image(title: &str) -> Option<String> {
    let options = OpenDialogOptions {
        title: title.to_string(),
        multiple: false,
        directory: false,
        filters: vec![DialogFilter {
            name: "Images",
            extensions: IMAGE_EXTENSIONS,
        }],
    };
    let options = serde_wasm_bindgen::to_value(&options).ok()?;
    open_dialog(options).await.as_string()
}

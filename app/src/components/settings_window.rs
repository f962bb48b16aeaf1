//! Settings window
//!
//! Edits a local draft of [`Settings`] and only talks to the backend on load,
//! save and reset. Range hints on the sliders come from the shared schema;
//! number fields accept anything that parses.

use dioxus::prelude::*;

use crate::api;
use crate::components::image_field::ImageField;
use crate::components::toast::{ToastSeverity, use_toast};
use crate::types::{ANIMATION_SPEED_RANGE_MS, DEFAULT_SETTINGS, ImageSlot, OPACITY_RANGE};

#[component]
pub fn SettingsWindow() -> Element {
    let mut draft = use_signal(|| DEFAULT_SETTINGS);
    let mut loaded = use_signal(|| false);
    let mut has_changes = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut toast = use_toast();

    use_future(move || async move {
        match api::get_settings().await {
            Ok(settings) => draft.set(settings),
            Err(e) => {
                dioxus_logger::tracing::warn!(error = %e, "Failed to load settings");
                toast.show(format!("Could not load settings: {e}"), ToastSeverity::Error);
            }
        }
        loaded.set(true);
    });

    let save = move |_| {
        let settings = draft();
        busy.set(true);
        spawn(async move {
            match api::save_settings(&settings).await {
                Ok(()) => {
                    has_changes.set(false);
                    toast.show("Settings saved", ToastSeverity::Success);
                }
                Err(e) => toast.show(format!("Failed to save: {e}"), ToastSeverity::Error),
            }
            busy.set(false);
        });
    };

    let reset = move |_| {
        busy.set(true);
        spawn(async move {
            match api::reset_settings().await {
                Ok(defaults) => {
                    draft.set(defaults);
                    has_changes.set(false);
                    toast.show("Settings reset to defaults", ToastSeverity::Success);
                }
                Err(e) => toast.show(format!("Failed to reset: {e}"), ToastSeverity::Error),
            }
            busy.set(false);
        });
    };

    let s = draft();
    let speed_min = *ANIMATION_SPEED_RANGE_MS.start();
    let speed_max = *ANIMATION_SPEED_RANGE_MS.end();
    let opacity_min = *OPACITY_RANGE.start();
    let opacity_max = *OPACITY_RANGE.end();
    let opacity_percent = (s.opacity * 100.0).round() as i32;
    let disabled = !loaded() || busy();

    rsx! {
        div { class: "settings-window",
            section { class: "settings-section",
                h4 { "Window" }
                div { class: "setting-row",
                    label { "Position X" }
                    input {
                        r#type: "number",
                        value: "{s.window_position.x}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                draft.write().window_position.x = v;
                                has_changes.set(true);
                            }
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Position Y" }
                    input {
                        r#type: "number",
                        value: "{s.window_position.y}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                draft.write().window_position.y = v;
                                has_changes.set(true);
                            }
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Width" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{s.window_size.width}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                draft.write().window_size.width = v;
                                has_changes.set(true);
                            }
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Height" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{s.window_size.height}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                draft.write().window_size.height = v;
                                has_changes.set(true);
                            }
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Always on top" }
                    input {
                        r#type: "checkbox",
                        checked: s.always_on_top,
                        onchange: move |e| {
                            let checked = e.checked();
                            draft.write().always_on_top = checked;
                            has_changes.set(true);
                        },
                    }
                }
            }

            section { class: "settings-section",
                h4 { "Appearance" }
                div { class: "setting-row",
                    label { "Animation speed" }
                    input {
                        r#type: "range",
                        min: "{speed_min}",
                        max: "{speed_max}",
                        step: "10",
                        value: "{s.animation_speed}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                draft.write().animation_speed = v;
                                has_changes.set(true);
                            }
                        },
                    }
                    span { class: "value-display", "{s.animation_speed} ms" }
                }
                div { class: "setting-row",
                    label { "Opacity" }
                    input {
                        r#type: "range",
                        min: "{opacity_min}",
                        max: "{opacity_max}",
                        step: "0.05",
                        value: "{s.opacity}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<f32>() {
                                draft.write().opacity = v;
                                has_changes.set(true);
                            }
                        },
                    }
                    span { class: "value-display", "{opacity_percent}%" }
                }
            }

            section { class: "settings-section",
                h4 { "Mascot images" }
                for slot in ImageSlot::all().iter().copied() {
                    ImageField {
                        key: "{slot:?}",
                        slot,
                        path: slot.get(&s.images).to_string(),
                        disabled,
                        on_change: move |path: String| {
                            *slot.get_mut(&mut draft.write().images) = path;
                            has_changes.set(true);
                        },
                    }
                }
            }

            div { class: "settings-actions",
                if has_changes() {
                    span { class: "unsaved-hint", "Unsaved changes" }
                }
                button {
                    class: "btn",
                    disabled,
                    onclick: reset,
                    "Reset to defaults"
                }
                button {
                    class: "btn btn-primary",
                    disabled: disabled || !has_changes(),
                    onclick: save,
                    "Save"
                }
            }
        }
    }
}

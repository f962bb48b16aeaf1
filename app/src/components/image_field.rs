//! Image path row with a file picker

use dioxus::prelude::*;

use crate::api;
use crate::types::ImageSlot;

#[component]
pub fn ImageField(
    slot: ImageSlot,
    path: String,
    disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    let label = slot.label();
    let title = format!("Choose {} image", label.to_lowercase());
    let placeholder = "No image selected";

    rsx! {
        div { class: "setting-row",
            label { "{label}" }
            input {
                r#type: "text",
                value: "{path}",
                placeholder,
                disabled,
                oninput: move |e| on_change.call(e.value()),
            }
            button {
                class: "btn btn-small",
                disabled,
                onclick: move |_| {
                    let title = title.clone();
                    spawn(async move {
                        if let Some(picked) = api::pick_image(&title).await {
                            on_change.call(picked);
                        }
                    });
                },
                "Browse"
            }
            button {
                class: "btn btn-small",
                disabled: disabled || path.is_empty(),
                onclick: move |_| on_change.call(String::new()),
                "Clear"
            }
        }
    }
}

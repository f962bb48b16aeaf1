//! Settings window for the desktop mascot.
//!
//! Runs as wasm inside the Tauri webview and talks to the host through the
//! commands wrapped in [`api`].

mod api;
mod bootstrap;
mod components;
mod theme;
mod types;
mod utils;

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use crate::bootstrap::Bootstrap;
use crate::components::{SettingsWindow, ToastFrame, use_toast_provider};
use crate::theme::{ThemePreset, ThemeStyle};

fn main() {
    let _ = dioxus_logger::init(Level::INFO);

    Bootstrap::new(App).with_theme(ThemePreset::Aura).launch();
}

#[component]
fn App() -> Element {
    use_toast_provider();

    rsx! {
        ThemeStyle {}
        SettingsWindow {}
        ToastFrame {}
    }
}

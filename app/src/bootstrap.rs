//! Application bootstrap
//!
//! Builds the app from a root component, hands it a theme preset and mounts
//! it on a page element. The preset travels as launch context rather than a
//! global, so `ThemeStyle` reads whatever was passed here.

use dioxus::prelude::*;

use crate::theme::ThemePreset;

/// Element id the app mounts on (see `index.html`)
pub const MOUNT_POINT: &str = "app";

pub struct Bootstrap {
    root: fn() -> Element,
    theme: ThemePreset,
    mount_point: String,
}

impl Bootstrap {
    /// Bootstrap for `root` with the default preset and mount point.
    pub fn new(root: fn() -> Element) -> Self {
        Self {
            root,
            theme: ThemePreset::default(),
            mount_point: MOUNT_POINT.to_string(),
        }
    }

    pub fn with_theme(mut self, theme: ThemePreset) -> Self {
        self.theme = theme;
        self
    }

    pub fn mount_point(mut self, id: impl Into<String>) -> Self {
        self.mount_point = id.into();
        self
    }

    pub fn theme(&self) -> ThemePreset {
        self.theme
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_point
    }

    /// Mount and run. A missing mount point is reported by dioxus-web.
    pub fn launch(self) {
        dioxus_logger::tracing::info!(
            mount_point = %self.mount_point,
            theme = self.theme.name(),
            "Mounting settings window"
        );

        let config = dioxus::web::Config::new().rootname(self.mount_point);
        dioxus::LaunchBuilder::web()
            .with_cfg(config)
            .with_context(self.theme)
            .launch(self.root);
    }
}

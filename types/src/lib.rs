//! Shared settings types for the desktop mascot.
//!
//! Used by both the Tauri backend and the Dioxus settings window, so this
//! crate only depends on serde.

pub mod settings;

pub use settings::{
    ANIMATION_SPEED_RANGE_MS, DEFAULT_SETTINGS, ImagePaths, OPACITY_RANGE, Settings,
    WindowPosition, WindowSize,
};

//! UI Components

pub mod image_field;
pub mod settings_window;
pub mod toast;

pub use settings_window::SettingsWindow;
pub use toast::{ToastFrame, use_toast_provider};

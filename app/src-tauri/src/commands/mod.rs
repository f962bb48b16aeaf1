//! Tauri commands module
//!
//! All Tauri-invokable commands are centralized here for easy discovery.
//!
//! # Command Categories
//!
//! - `settings` - Load, save and reset the persisted mascot settings

mod settings;

// Re-export all commands for the invoke_handler
pub use settings::*;

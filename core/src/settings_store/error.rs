use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading, saving or resetting settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to create config directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write settings file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to delete settings file {path:?}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SettingsError {
    /// Path of the file or directory the failed operation touched.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. }
            | Self::Remove { path, .. } => path,
        }
    }
}

//! Error types for core module
//!
//! Provides custom error types for the application shell: settings
//! persistence, configuration validation and frame output.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Search limit that cannot be sent to an engine
    #[error("Invalid search limit: {message}")]
    InvalidLimit { message: String },

    /// Writing a frame failed
    #[error("Render error: {source}")]
    Render {
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

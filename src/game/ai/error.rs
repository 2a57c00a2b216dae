//! Error types for the engine adapter

use std::io;

/// Errors raised while talking to the engine subprocess
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Engine binary could not be started
    #[error("Failed to start engine '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the engine failed
    #[error("Engine I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Engine process has no stdin pipe")]
    NoStdin,

    #[error("Engine process has no stdout pipe")]
    NoStdout,

    /// Engine exited or closed its output before finishing a request
    #[error("Engine terminated")]
    Terminated,

    /// Command issued after the engine was shut down
    #[error("Engine is not running")]
    NotRunning,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

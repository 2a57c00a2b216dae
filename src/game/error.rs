//! Error types for game module
//!
//! Provides custom error types for board interaction: move validation,
//! undo history, pointer hits outside the board and position setup.
//! Every variant is recoverable; callers log and carry on.

use shakmaty::Square;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// Dropped piece does not form a legal move
    #[error("Illegal move: {uci}")]
    IllegalMove { uci: String },

    /// Undo requested with an empty history
    #[error("No previous move to undo")]
    NoPreviousMove,

    /// Pointer landed outside the board rectangle
    #[error("Point ({x:.1}, {y:.1}) is outside the board")]
    InvalidSquare { x: f32, y: f32 },

    /// Pick-up attempted on an empty square
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// Starting position could not be parsed or is not a legal setup
    #[error("Invalid position '{fen}': {message}")]
    InvalidPosition { fen: String, message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

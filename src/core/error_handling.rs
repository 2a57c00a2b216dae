//! Error handling utilities for the frame loop
//!
//! Game errors are never fatal. These helpers log them at a level that
//! matches how surprising they are and hand back `None` so the caller can
//! carry on with the next event.

use crate::game::error::{GameError, GameResult};
use tracing::{debug, warn};

/// Unwrap a game result, logging the error instead of propagating it
///
/// Expected outcomes of normal play (illegal drops, clicks on empty
/// squares or off the board, undo with no history) are logged at debug
/// level; anything else is a warning.
pub fn handle_game_result<T>(result: GameResult<T>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            if is_routine(&e) {
                debug!("[ERROR_HANDLER] {}: {}", context, e);
            } else {
                warn!("[ERROR_HANDLER] {} failed: {}", context, e);
            }
            None
        }
    }
}

/// Whether an error is an ordinary consequence of user input
pub fn is_routine(error: &GameError) -> bool {
    matches!(
        error,
        GameError::IllegalMove { .. }
            | GameError::NoPreviousMove
            | GameError::InvalidSquare { .. }
            | GameError::NoPieceAtSquare { .. }
    )
}

//! Chess rules module - thin layer over the `shakmaty` rules library
//!
//! Nothing in here decides legality on its own. `shakmaty` generates and
//! validates moves; this module owns the position, keeps the history needed
//! for undo and for replaying the game to an engine, and builds candidate
//! moves (with promotion pieces) from drag gestures.
//!
//! # Module Structure
//!
//! - `board_state` - Owned position with undo history and reset
//! - `promotion` - Promotion rank checks and the promotion policy

pub mod board_state;
pub mod promotion;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use board_state::BoardState;
pub use promotion::{candidate_move, is_promotion_move, AutoQueen, FixedPromotion, PromotionPolicy};

//! Chess game logic module - board state, interaction and engine analysis
//!
//! Everything in here is independent of how the board is drawn or how input
//! arrives. The frame loop in `core::app` feeds it squares and commands; the
//! renderers read it back through `rendering::snapshot`.
//!
//! # Module Organization
//!
//! - `rules` - Position, history and promotion on top of `shakmaty`
//! - `interaction` - Idle/holding state machine for pick-up and drop
//! - `ai` - Engine adapters and the analysis session
//! - `types` - Small shared value types (orientation, points, evaluations)
//! - `error` - [`GameError`] and the [`GameResult`] alias
//!
//! # Ownership
//!
//! One [`BoardState`], one [`Interaction`] and one [`AnalysisSession`] exist
//! per running board. All three are owned by the frame loop and mutated only
//! through `&mut`, so there is a single writer for every piece of state.

pub mod ai;
pub mod error;
pub mod interaction;
pub mod rules;
pub mod types;

// Re-export the main entry points
pub use ai::AnalysisSession;
pub use error::{GameError, GameResult};
pub use interaction::{DropOutcome, Interaction, InteractionState};
pub use rules::BoardState;
pub use types::{Evaluation, Orientation, Point};

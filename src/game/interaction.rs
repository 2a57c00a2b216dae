//! Interaction state machine - turns pick-up and drop gestures into moves
//!
//! The board has exactly two interaction states:
//!
//! - **Idle**: nothing in hand
//! - **Holding(square)**: the piece on `square` was picked up
//!
//! A drop always returns to `Idle`, whatever happens to the move. Dropping
//! back on the origin square is a "place back" and never reaches the rules
//! library.
//!
//! # Side Effects on Analysis
//!
//! | Action         | Board          | Analysis                         |
//! |----------------|----------------|----------------------------------|
//! | legal drop     | move applied   | cancelled, best move cleared     |
//! | illegal drop   | unchanged      | untouched                        |
//! | undo           | last move popped | cancelled, results cleared     |
//! | reset          | initial position | cancelled, results cleared     |
//!
//! A best move computed for a position that no longer exists is never shown.

use crate::game::ai::{AnalysisRequest, AnalysisSession, SearchLimit};
use crate::game::error::{GameError, GameResult};
use crate::game::rules::{candidate_move, AutoQueen, BoardState, PromotionPolicy};
use crate::game::types::{Orientation, Point};
use shakmaty::uci::UciMove;
use shakmaty::Square;
use tracing::{debug, info};

/// Pick-up state of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Holding(Square),
}

/// Result of dropping a held piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The move was legal and has been played
    Moved(UciMove),
    /// The piece went back to its origin square
    PlacedBack,
    /// Nothing was held
    NotHolding,
}

/// Interaction state plus the view settings that belong to the player
///
/// # Fields
///
/// - `state`: idle or holding a square
/// - `orientation`: which colour is drawn at the bottom
/// - `pointer`: last known pointer position, for drawing a held piece
/// - `limit`: search limit used when the player asks for analysis
/// - `policy`: how promotion pieces are chosen
pub struct Interaction {
    state: InteractionState,
    orientation: Orientation,
    pointer: Option<Point>,
    limit: SearchLimit,
    policy: Box<dyn PromotionPolicy>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(Orientation::default(), SearchLimit::default())
    }
}

impl Interaction {
    /// Creates an idle interaction that promotes to a queen
    pub fn new(orientation: Orientation, limit: SearchLimit) -> Self {
        Self {
            state: InteractionState::Idle,
            orientation,
            pointer: None,
            limit,
            policy: Box::new(AutoQueen),
        }
    }

    pub fn with_policy(mut self, policy: Box<dyn PromotionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn held_square(&self) -> Option<Square> {
        match self.state {
            InteractionState::Holding(square) => Some(square),
            InteractionState::Idle => None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn set_pointer(&mut self, point: Point) {
        self.pointer = Some(point);
    }

    pub fn limit(&self) -> SearchLimit {
        self.limit
    }

    /// Pick up the piece on `square`
    ///
    /// Only valid while idle; a second pick-up while holding is ignored.
    ///
    /// # Errors
    ///
    /// [`GameError::NoPieceAtSquare`] when the square is empty. The state is
    /// unchanged.
    pub fn pick_up(&mut self, board: &BoardState, square: Square) -> GameResult<()> {
        if let InteractionState::Holding(held) = self.state {
            debug!("[INPUT] Already holding {}, ignoring pick-up on {}", held, square);
            return Ok(());
        }
        if board.piece_at(square).is_none() {
            return Err(GameError::NoPieceAtSquare { square });
        }

        debug!("[INPUT] Picked up {}", square);
        self.state = InteractionState::Holding(square);
        Ok(())
    }

    /// Drop the held piece on `square`
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalMove`] when the move is rejected; the board is
    /// unchanged and the hold is released.
    pub fn drop(
        &mut self,
        board: &mut BoardState,
        analysis: &mut AnalysisSession,
        square: Square,
    ) -> GameResult<DropOutcome> {
        let InteractionState::Holding(origin) = self.state else {
            return Ok(DropOutcome::NotHolding);
        };
        self.state = InteractionState::Idle;

        if origin == square {
            debug!("[INPUT] Placed {} back", origin);
            return Ok(DropOutcome::PlacedBack);
        }

        let candidate = candidate_move(board, origin, square, self.policy.as_mut())
            .ok_or(GameError::NoPieceAtSquare { square: origin })?;
        let played = board.apply_move(&candidate)?;

        // The analysed position is gone
        analysis.cancel();
        info!("[INPUT] Played {}", played);
        Ok(DropOutcome::Moved(played))
    }

    /// Release any hold without touching the board
    pub fn cancel_hold(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Return the board to its starting position
    pub fn reset(&mut self, board: &mut BoardState, analysis: &mut AnalysisSession) {
        self.state = InteractionState::Idle;
        board.reset();
        analysis.cancel();
        analysis.clear_results();
        info!("[INPUT] Board reset");
    }

    /// Take back the last move, if any
    ///
    /// # Errors
    ///
    /// [`GameError::NoPreviousMove`] when the history is empty. Hold and
    /// analysis are cleared either way.
    pub fn undo(
        &mut self,
        board: &mut BoardState,
        analysis: &mut AnalysisSession,
    ) -> GameResult<UciMove> {
        self.state = InteractionState::Idle;
        analysis.cancel();
        analysis.clear_results();

        let undone = board.undo()?;
        info!("[INPUT] Took back {}", undone);
        Ok(undone)
    }

    pub fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
        debug!("[INPUT] Orientation now {:?}", self.orientation);
    }

    /// Ask the engine about the current position
    pub fn request_analysis(&self, board: &BoardState, analysis: &mut AnalysisSession) {
        analysis.start(AnalysisRequest::for_board(board, self.limit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::ScriptedEngine;

    fn setup() -> (BoardState, Interaction, AnalysisSession) {
        let (engine, _handle) = ScriptedEngine::new();
        (
            BoardState::new(),
            Interaction::default(),
            AnalysisSession::new(Box::new(engine)),
        )
    }

    #[test]
    fn test_pick_up_empty_square_is_rejected() {
        let (board, mut interaction, _) = setup();
        let result = interaction.pick_up(&board, Square::E4);
        assert_eq!(result, Err(GameError::NoPieceAtSquare { square: Square::E4 }));
        assert_eq!(interaction.state(), InteractionState::Idle);
    }

    #[test]
    fn test_second_pick_up_keeps_first_hold() {
        let (board, mut interaction, _) = setup();
        interaction.pick_up(&board, Square::E2).unwrap();
        interaction.pick_up(&board, Square::D2).unwrap();
        assert_eq!(interaction.held_square(), Some(Square::E2));
    }

    #[test]
    fn test_drop_while_idle() {
        let (mut board, mut interaction, mut analysis) = setup();
        let outcome = interaction.drop(&mut board, &mut analysis, Square::E4);
        assert_eq!(outcome, Ok(DropOutcome::NotHolding));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_flip_only_changes_orientation() {
        let (board, mut interaction, _) = setup();
        interaction.flip();
        assert_eq!(interaction.orientation(), Orientation::BlackBottom);
        assert_eq!(board.move_count(), 0);
        interaction.flip();
        assert_eq!(interaction.orientation(), Orientation::WhiteBottom);
    }
}

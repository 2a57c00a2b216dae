//! View snapshot - everything a renderer needs for one frame
//!
//! [`build_snapshot`] is a pure function of the board, the interaction state
//! and the analysis session. It borrows all three for the duration of a frame
//! and copies nothing large, so building it every tick is cheap. Renderers
//! only ever see a snapshot, never the mutable state behind it.
//!
//! # Square Shading
//!
//! | Priority | Shade                    | When                              |
//! |----------|--------------------------|-----------------------------------|
//! | 1        | [`SquareShade::BestMove`]| square is the best move's from/to |
//! | 2        | [`SquareShade::Held`]    | square is the picked-up square    |
//! | 3        | `Light` / `Dark`         | checkerboard; a1 is dark          |

use crate::game::ai::AnalysisSession;
use crate::game::interaction::Interaction;
use crate::game::rules::BoardState;
use crate::game::types::{Evaluation, Orientation, Point};
use shakmaty::uci::UciMove;
use shakmaty::{Chess, Color, Piece, Position, Square};

/// Render-ready view of the board for one frame
///
/// # Fields
///
/// - `position`: current position, borrowed from the board
/// - `held_square`: square picked up by the player, if any
/// - `orientation`: which colour is drawn at the bottom
/// - `best_move`: latest best move from the engine, if any
/// - `evaluation`: evaluation of the current position, White's point of
///   view; `None` while the last known score belongs to an older position
/// - `is_analyzing`: whether a request is outstanding (the "thinking" flag)
/// - `pointer`: last pointer position, for drawing a held piece
#[derive(Debug, Clone, Copy)]
pub struct ViewSnapshot<'a> {
    pub position: &'a Chess,
    pub held_square: Option<Square>,
    pub orientation: Orientation,
    pub best_move: Option<&'a UciMove>,
    pub evaluation: Option<Evaluation>,
    pub is_analyzing: bool,
    pub pointer: Option<Point>,
}

/// How a square is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareShade {
    Light,
    Dark,
    Held,
    BestMove,
}

/// Build the snapshot for the current frame
pub fn build_snapshot<'a>(
    board: &'a BoardState,
    interaction: &Interaction,
    analysis: &'a AnalysisSession,
) -> ViewSnapshot<'a> {
    ViewSnapshot {
        position: board.position(),
        held_square: interaction.held_square(),
        orientation: interaction.orientation(),
        best_move: analysis.best_move(),
        evaluation: analysis.evaluation(),
        is_analyzing: analysis.is_analyzing(),
        pointer: interaction.pointer(),
    }
}

/// Whether `square` is a light square; a1 is dark
pub fn is_light_square(square: Square) -> bool {
    (square.file() as u32 + square.rank() as u32) % 2 == 1
}

/// Squares a move touches, as `(from, to)`
pub fn move_squares(mv: &UciMove) -> Option<(Option<Square>, Square)> {
    match *mv {
        UciMove::Normal { from, to, .. } => Some((Some(from), to)),
        UciMove::Put { to, .. } => Some((None, to)),
        _ => None,
    }
}

impl ViewSnapshot<'_> {
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Whether `square` is the origin or target of the best move
    pub fn is_best_move_square(&self, square: Square) -> bool {
        match self.best_move.and_then(move_squares) {
            Some((from, to)) => from == Some(square) || to == square,
            None => false,
        }
    }

    pub fn shade(&self, square: Square) -> SquareShade {
        if self.is_best_move_square(square) {
            SquareShade::BestMove
        } else if self.held_square == Some(square) {
            SquareShade::Held
        } else if is_light_square(square) {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }
}

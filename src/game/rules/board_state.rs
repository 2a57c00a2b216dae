//! Board state wrapper around the rules library position
//!
//! `BoardState` is the single owner of the position for a running session.
//! All mutation goes through [`BoardState::apply_move`], [`BoardState::undo`]
//! and [`BoardState::reset`]; legality is always decided by `shakmaty`.

use crate::game::error::{GameError, GameResult};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Piece, Position, Square};

/// A move that was played, together with the position it was played from
#[derive(Debug, Clone)]
struct PlayedMove {
    before: Chess,
    uci: UciMove,
}

/// Represents the game position plus enough history to undo and to replay it
/// to an engine
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Position the board returns to on reset
    initial: Chess,
    /// FEN the session started from, `None` for the standard start position
    initial_fen: Option<String>,
    position: Chess,
    history: Vec<PlayedMove>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Board in the standard starting position
    pub fn new() -> Self {
        Self {
            initial: Chess::default(),
            initial_fen: None,
            position: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Board starting from a FEN string
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] when the FEN does not parse or
    /// describes an illegal setup.
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let parsed: Fen = fen.trim().parse().map_err(|e| GameError::InvalidPosition {
            fen: fen.to_string(),
            message: format!("{e}"),
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| GameError::InvalidPosition {
                    fen: fen.to_string(),
                    message: format!("{e}"),
                })?;

        Ok(Self {
            initial: position.clone(),
            initial_fen: Some(fen.trim().to_string()),
            position,
            history: Vec::new(),
        })
    }

    /// Current position
    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// Side to move in the current position
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Resolve a candidate move against the current position
    pub fn to_legal_move(&self, candidate: &UciMove) -> GameResult<Move> {
        candidate
            .to_move(&self.position)
            .map_err(|_| GameError::IllegalMove {
                uci: candidate.to_string(),
            })
    }

    pub fn is_legal(&self, candidate: &UciMove) -> bool {
        self.to_legal_move(candidate).is_ok()
    }

    /// Validate and play a candidate move
    ///
    /// The board is left untouched when the move is illegal.
    pub fn apply_move(&mut self, candidate: &UciMove) -> GameResult<UciMove> {
        let played = self.to_legal_move(candidate)?;
        let uci = played.to_uci(CastlingMode::Standard);

        let before = self.position.clone();
        self.position.play_unchecked(&played);
        self.history.push(PlayedMove {
            before,
            uci: uci.clone(),
        });

        Ok(uci)
    }

    /// Take back the last move
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPreviousMove`] when nothing has been played.
    pub fn undo(&mut self) -> GameResult<UciMove> {
        let last = self.history.pop().ok_or(GameError::NoPreviousMove)?;
        self.position = last.before;
        Ok(last.uci)
    }

    /// Return to the starting position and forget the history
    pub fn reset(&mut self) {
        self.position = self.initial.clone();
        self.history.clear();
    }

    pub fn initial_fen(&self) -> Option<&str> {
        self.initial_fen.as_deref()
    }

    /// Moves played since the starting position, in UCI notation
    pub fn uci_moves(&self) -> impl Iterator<Item = &UciMove> + '_ {
        self.history.iter().map(|played| &played.uci)
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&UciMove> {
        self.history.last().map(|played| &played.uci)
    }

    /// Whether the side to move has no legal moves (checkmate or stalemate)
    pub fn is_terminal(&self) -> bool {
        self.position.is_checkmate() || self.position.is_stalemate()
    }
}

//! Test suite for the board state wrapper and promotion policy
//!
//! Legality itself belongs to `shakmaty`; these tests check the parts this
//! crate owns: history and undo, reset, FEN setup, and the rank-only
//! promotion rule applied while building candidate moves.
//!
//! # Test Organization
//!
//! - `test_board_state_*` - Apply, undo, reset, FEN setup
//! - `test_promotion_*` - Candidate construction at and away from the last rank

use super::*;
use crate::game::error::GameError;
use shakmaty::uci::UciMove;
use shakmaty::{Color, Piece, Position, Role, Square};

/// Helper to build a plain candidate move without a promotion piece
fn plain(from: Square, to: Square) -> UciMove {
    UciMove::Normal {
        from,
        to,
        promotion: None,
    }
}

const WHITE_PAWN_ON_E7: &str = "8/4P3/8/8/8/8/8/4K2k w - - 0 1";
const BLACK_PAWN_ON_D2: &str = "4k3/8/8/8/8/8/3p4/K7 b - - 0 1";
const WHITE_PAWN_TAKES_ON_D8: &str = "3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1";

// ============================================================================
// BoardState Tests
// ============================================================================

#[test]
fn test_board_state_starts_in_standard_position() {
    let board = BoardState::new();

    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.initial_fen(), None);
    assert_eq!(
        board.piece_at(Square::E2),
        Some(Piece {
            color: Color::White,
            role: Role::Pawn
        })
    );
    assert_eq!(board.piece_at(Square::E4), None);
}

#[test]
fn test_board_state_applies_legal_move() {
    //! e2e4 is legal from the start position and lands in the history

    let mut board = BoardState::new();
    let played = board.apply_move(&plain(Square::E2, Square::E4)).unwrap();

    assert_eq!(played.to_string(), "e2e4");
    assert_eq!(board.move_count(), 1);
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.piece_at(Square::E2), None);
    assert_eq!(board.piece_at(Square::E4).map(|p| p.role), Some(Role::Pawn));
    assert_eq!(board.last_move().map(|m| m.to_string()), Some("e2e4".to_string()));
}

#[test]
fn test_board_state_rejects_illegal_move_without_mutation() {
    //! A pawn cannot jump three squares; the board must be unchanged

    let mut board = BoardState::new();
    let before = board.position().board().clone();

    let result = board.apply_move(&plain(Square::E2, Square::E5));

    assert!(matches!(result, Err(GameError::IllegalMove { ref uci }) if uci == "e2e5"));
    assert_eq!(board.position().board(), &before);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn test_board_state_undo_with_empty_history() {
    let mut board = BoardState::new();
    assert_eq!(board.undo(), Err(GameError::NoPreviousMove));
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_board_state_undo_restores_previous_position() {
    let mut board = BoardState::new();
    let start = board.position().board().clone();

    board.apply_move(&plain(Square::E2, Square::E4)).unwrap();
    board.apply_move(&plain(Square::E7, Square::E5)).unwrap();

    let undone = board.undo().unwrap();
    assert_eq!(undone.to_string(), "e7e5");
    assert_eq!(board.turn(), Color::Black);

    board.undo().unwrap();
    assert_eq!(board.position().board(), &start);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn test_board_state_reset_returns_to_initial_fen() {
    //! Reset goes back to the position the session started from, not to the
    //! standard start position

    let mut board = BoardState::from_fen(WHITE_PAWN_ON_E7).unwrap();
    let start = board.position().board().clone();

    board
        .apply_move(&UciMove::Normal {
            from: Square::E7,
            to: Square::E8,
            promotion: Some(Role::Queen),
        })
        .unwrap();
    board.reset();

    assert_eq!(board.position().board(), &start);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.initial_fen(), Some(WHITE_PAWN_ON_E7));
}

#[test]
fn test_board_state_rejects_bad_fen() {
    let result = BoardState::from_fen("not a fen");
    assert!(matches!(result, Err(GameError::InvalidPosition { .. })));
}

#[test]
fn test_board_state_castling_by_king_drag() {
    //! Dragging the king two squares is how castling is entered on the board

    let mut board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    board.apply_move(&plain(Square::E1, Square::G1)).unwrap();

    assert_eq!(board.piece_at(Square::G1).map(|p| p.role), Some(Role::King));
    assert_eq!(board.piece_at(Square::F1).map(|p| p.role), Some(Role::Rook));
}

#[test]
fn test_board_state_detects_terminal_position() {
    //! Fool's mate leaves White checkmated

    let board = BoardState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert!(board.is_terminal());
    assert!(!BoardState::new().is_terminal());
}

// ============================================================================
// Promotion Tests
// ============================================================================

#[test]
fn test_promotion_white_push_to_eighth_rank() {
    let board = BoardState::from_fen(WHITE_PAWN_ON_E7).unwrap();
    let candidate = candidate_move(&board, Square::E7, Square::E8, &mut AutoQueen).unwrap();

    assert_eq!(
        candidate,
        UciMove::Normal {
            from: Square::E7,
            to: Square::E8,
            promotion: Some(Role::Queen)
        }
    );
    assert!(board.is_legal(&candidate));
}

#[test]
fn test_promotion_black_push_to_first_rank() {
    let mut board = BoardState::from_fen(BLACK_PAWN_ON_D2).unwrap();
    let candidate = candidate_move(&board, Square::D2, Square::D1, &mut AutoQueen).unwrap();

    assert!(matches!(
        candidate,
        UciMove::Normal {
            promotion: Some(Role::Queen),
            ..
        }
    ));

    board.apply_move(&candidate).unwrap();
    assert_eq!(
        board.piece_at(Square::D1),
        Some(Piece {
            color: Color::Black,
            role: Role::Queen
        })
    );
}

#[test]
fn test_promotion_applies_to_captures_too() {
    let mut board = BoardState::from_fen(WHITE_PAWN_TAKES_ON_D8).unwrap();
    let candidate = candidate_move(&board, Square::E7, Square::D8, &mut AutoQueen).unwrap();

    assert!(matches!(
        candidate,
        UciMove::Normal {
            promotion: Some(Role::Queen),
            ..
        }
    ));
    board.apply_move(&candidate).unwrap();
    assert_eq!(board.piece_at(Square::D8).map(|p| p.role), Some(Role::Queen));
}

#[test]
fn test_promotion_never_attached_before_last_rank() {
    //! Pawn moves that stop short of the far rank never carry a promotion

    let board = BoardState::new();
    let push = candidate_move(&board, Square::E2, Square::E4, &mut AutoQueen).unwrap();
    assert_eq!(push, plain(Square::E2, Square::E4));

    let board = BoardState::from_fen("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1").unwrap();
    let push = candidate_move(&board, Square::E6, Square::E7, &mut AutoQueen).unwrap();
    assert_eq!(push, plain(Square::E6, Square::E7));
}

#[test]
fn test_promotion_rank_is_colour_specific() {
    //! A black pawn reaching rank 8 or a white pawn reaching rank 1 is not a
    //! promotion, whatever the geometry says

    let white_pawn = Piece {
        color: Color::White,
        role: Role::Pawn,
    };
    let black_pawn = Piece {
        color: Color::Black,
        role: Role::Pawn,
    };

    assert!(is_promotion_move(white_pawn, Square::A8));
    assert!(!is_promotion_move(white_pawn, Square::A1));
    assert!(is_promotion_move(black_pawn, Square::H1));
    assert!(!is_promotion_move(black_pawn, Square::H8));
}

#[test]
fn test_promotion_ignores_other_pieces() {
    let board = BoardState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let rook_lift = candidate_move(&board, Square::A1, Square::A8, &mut AutoQueen).unwrap();
    assert_eq!(rook_lift, plain(Square::A1, Square::A8));
}

#[test]
fn test_promotion_policy_is_pluggable() {
    let board = BoardState::from_fen(WHITE_PAWN_ON_E7).unwrap();
    let mut underpromote = FixedPromotion(Role::Knight);
    let candidate = candidate_move(&board, Square::E7, Square::E8, &mut underpromote).unwrap();

    assert!(matches!(
        candidate,
        UciMove::Normal {
            promotion: Some(Role::Knight),
            ..
        }
    ));
}

#[test]
fn test_promotion_candidate_requires_a_piece() {
    let board = BoardState::new();
    assert!(candidate_move(&board, Square::E4, Square::E5, &mut AutoQueen).is_none());
}

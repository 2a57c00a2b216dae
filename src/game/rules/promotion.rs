//! Pawn promotion policy and candidate move construction
//!
//! When a pawn is dropped on the far rank for its colour, the candidate move
//! must name a promotion piece before it is handed to the rules library.
//! The check is rank-only: straight pushes and captures alike get a
//! promotion piece attached.

use crate::game::rules::BoardState;
use shakmaty::uci::UciMove;
use shakmaty::{Color, Piece, Rank, Role, Square};

/// Chooses the piece a pawn promotes to
///
/// The board UI has no promotion picker, so the default policy is
/// [`AutoQueen`]. A front end that can ask the player supplies its own.
pub trait PromotionPolicy: Send {
    fn choose(&mut self, from: Square, to: Square, color: Color) -> Role;
}

/// Always promotes to a queen
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoQueen;

impl PromotionPolicy for AutoQueen {
    fn choose(&mut self, _from: Square, _to: Square, _color: Color) -> Role {
        Role::Queen
    }
}

/// Always promotes to a fixed piece
#[derive(Debug, Clone, Copy)]
pub struct FixedPromotion(pub Role);

impl PromotionPolicy for FixedPromotion {
    fn choose(&mut self, _from: Square, _to: Square, _color: Color) -> Role {
        self.0
    }
}

/// Rank a pawn of `color` promotes on
pub fn promotion_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First,
    }
}

/// Check if moving `piece` to `to` is a promotion
pub fn is_promotion_move(piece: Piece, to: Square) -> bool {
    piece.role == Role::Pawn && to.rank() == promotion_rank(piece.color)
}

/// Build the candidate move for a drag from `from` to `to`
///
/// Returns `None` when there is no piece on `from`. The result is not
/// validated; pass it to [`BoardState::apply_move`] for that.
pub fn candidate_move(
    board: &BoardState,
    from: Square,
    to: Square,
    policy: &mut dyn PromotionPolicy,
) -> Option<UciMove> {
    let piece = board.piece_at(from)?;
    let promotion = if is_promotion_move(piece, to) {
        Some(policy.choose(from, to, piece.color))
    } else {
        None
    };

    Some(UciMove::Normal {
        from,
        to,
        promotion,
    })
}

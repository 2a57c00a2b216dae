//! Type definitions shared by the board, the analysis session and the renderers
//!
//! Provides small value types that carry no behaviour of their own beyond
//! conversions: screen points, board orientation and engine evaluations.

use serde::{Deserialize, Serialize};
use shakmaty::Color;
use std::fmt;

/// Which side of the board is drawn at the bottom of the screen
///
/// Orientation only affects coordinate mapping. It never changes game
/// semantics, whose turn it is, or how evaluations are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// White pieces at the bottom, rank 1 drawn last
    #[default]
    WhiteBottom,
    /// Black pieces at the bottom, rank 8 drawn last
    BlackBottom,
}

impl Orientation {
    /// Returns the opposite orientation
    pub fn flipped(self) -> Self {
        match self {
            Orientation::WhiteBottom => Orientation::BlackBottom,
            Orientation::BlackBottom => Orientation::WhiteBottom,
        }
    }

    /// Colour whose pieces start at the bottom edge
    pub fn bottom_color(self) -> Color {
        match self {
            Orientation::WhiteBottom => Color::White,
            Orientation::BlackBottom => Color::Black,
        }
    }
}

/// Screen position in pixels, origin at the top-left of the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Engine evaluation of a position
///
/// Always expressed from White's point of view: positive centipawns favour
/// White, `MateIn(3)` means White mates in three and `MateIn(-2)` means Black
/// mates in two. Engines report scores relative to the side to move; use
/// [`Evaluation::from_side_to_move`] to convert exactly once at the boundary.
///
/// A mate already on the board has no sign to carry, so it is stored as
/// [`Evaluation::Mated`] naming the side that has been mated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    CentiPawns(i32),
    MateIn(i32),
    Mated(Color),
}

impl Default for Evaluation {
    /// Neutral evaluation shown before any analysis has run
    fn default() -> Self {
        Evaluation::CentiPawns(0)
    }
}

impl Evaluation {
    /// Convert a score reported for `turn` into White's point of view
    ///
    /// `mate 0` means the side to move is already mated and becomes
    /// [`Evaluation::Mated`] for `turn`.
    pub fn from_side_to_move(self, turn: Color) -> Self {
        match (self, turn) {
            (Evaluation::MateIn(0), _) => Evaluation::Mated(turn),
            (_, Color::White) => self,
            (_, Color::Black) => self.negated(),
        }
    }

    /// The same evaluation seen from the other side
    pub fn negated(self) -> Self {
        match self {
            Evaluation::CentiPawns(cp) => Evaluation::CentiPawns(-cp),
            Evaluation::MateIn(n) => Evaluation::MateIn(-n),
            Evaluation::Mated(color) => Evaluation::Mated(!color),
        }
    }

    /// Centipawn value in pawns, or `None` for forced mates
    pub fn to_pawns(self) -> Option<f32> {
        match self {
            Evaluation::CentiPawns(cp) => Some(cp as f32 / 100.0),
            Evaluation::MateIn(_) | Evaluation::Mated(_) => None,
        }
    }

    /// Whether this evaluation favours White (mates included)
    pub fn favours_white(self) -> bool {
        match self {
            Evaluation::CentiPawns(cp) => cp > 0,
            Evaluation::MateIn(n) => n > 0,
            Evaluation::Mated(color) => color == Color::Black,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Evaluation::CentiPawns(cp) => write!(f, "{:+.2}", cp as f32 / 100.0),
            Evaluation::MateIn(n) if n >= 0 => write!(f, "#{}", n),
            Evaluation::MateIn(n) => write!(f, "#-{}", n.unsigned_abs()),
            Evaluation::Mated(Color::Black) => f.write_str("1-0"),
            Evaluation::Mated(Color::White) => f.write_str("0-1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_flip_round_trip() {
        assert_eq!(Orientation::default(), Orientation::WhiteBottom);
        assert_eq!(Orientation::WhiteBottom.flipped(), Orientation::BlackBottom);
        assert_eq!(Orientation::WhiteBottom.flipped().flipped(), Orientation::WhiteBottom);
        assert_eq!(Orientation::BlackBottom.bottom_color(), Color::Black);
    }

    #[test]
    fn test_evaluation_perspective_conversion() {
        let raw = Evaluation::CentiPawns(30);
        assert_eq!(raw.from_side_to_move(Color::White), Evaluation::CentiPawns(30));
        assert_eq!(raw.from_side_to_move(Color::Black), Evaluation::CentiPawns(-30));
        assert_eq!(
            Evaluation::MateIn(2).from_side_to_move(Color::Black),
            Evaluation::MateIn(-2)
        );
    }

    #[test]
    fn test_mate_zero_keeps_the_winner() {
        //! `score mate 0` names no winner by sign; the side to move decides
        let white_mated = Evaluation::MateIn(0).from_side_to_move(Color::White);
        assert_eq!(white_mated, Evaluation::Mated(Color::White));
        assert!(!white_mated.favours_white());
        assert_eq!(white_mated.to_string(), "0-1");

        let black_mated = Evaluation::MateIn(0).from_side_to_move(Color::Black);
        assert_eq!(black_mated, Evaluation::Mated(Color::Black));
        assert!(black_mated.favours_white());
        assert_eq!(black_mated.to_string(), "1-0");

        assert_eq!(black_mated.negated(), white_mated);
        assert_eq!(black_mated.to_pawns(), None);
    }

    #[test]
    fn test_evaluation_display() {
        assert_eq!(Evaluation::CentiPawns(30).to_string(), "+0.30");
        assert_eq!(Evaluation::CentiPawns(-125).to_string(), "-1.25");
        assert_eq!(Evaluation::MateIn(3).to_string(), "#3");
        assert_eq!(Evaluation::MateIn(-2).to_string(), "#-2");
    }

    #[test]
    fn test_evaluation_default_is_neutral() {
        let eval = Evaluation::default();
        assert_eq!(eval, Evaluation::CentiPawns(0));
        assert!(!eval.favours_white());
        assert_eq!(eval.to_pawns(), Some(0.0));
        assert_eq!(Evaluation::MateIn(1).to_pawns(), None);
    }
}

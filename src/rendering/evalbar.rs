//! Evaluation bar geometry
//!
//! The bar is eight cells tall. White's share starts at half (four cells) and
//! moves half a cell per pawn of advantage, clamped so that each side always
//! keeps at least half a cell. Forced mates pin the bar to the clamp. With no
//! current evaluation the bar sits at half.

use crate::game::types::{Evaluation, Orientation};
use shakmaty::Color;

const BAR_CELLS: f32 = 8.0;
const MIN_CELLS: f32 = 0.5;
const MAX_CELLS: f32 = BAR_CELLS - MIN_CELLS;

/// Height of White's share of the bar, in cells
pub fn white_fill_cells(evaluation: Evaluation) -> f32 {
    match evaluation {
        Evaluation::CentiPawns(cp) => (4.0 + cp as f32 / 200.0).clamp(MIN_CELLS, MAX_CELLS),
        Evaluation::MateIn(_) | Evaluation::Mated(_) if evaluation.favours_white() => MAX_CELLS,
        Evaluation::MateIn(_) | Evaluation::Mated(_) => MIN_CELLS,
    }
}

/// White's share of the bar as a fraction of its height
pub fn white_fill_fraction(evaluation: Evaluation) -> f32 {
    white_fill_cells(evaluation) / BAR_CELLS
}

/// Split of the bar into a top and a bottom segment
///
/// The bottom segment belongs to the colour drawn at the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalBarLayout {
    pub bottom_color: Color,
    pub top_height: f32,
    pub bottom_height: f32,
}

pub fn eval_bar_layout(
    evaluation: Option<Evaluation>,
    orientation: Orientation,
    height: f32,
) -> EvalBarLayout {
    let white = white_fill_fraction(evaluation.unwrap_or_default());
    let bottom_color = orientation.bottom_color();
    let bottom_fraction = match bottom_color {
        Color::White => white,
        Color::Black => 1.0 - white,
    };
    let bottom_height = bottom_fraction * height;

    EvalBarLayout {
        bottom_color,
        top_height: height - bottom_height,
        bottom_height,
    }
}

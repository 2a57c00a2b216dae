//! Terminal renderer
//!
//! Draws a [`ViewSnapshot`] as text: the activity indicator and evaluation
//! bar down the left edge, the board with rank and file labels, and a status
//! line. A frame is written only when it differs from the previous one, so a
//! 60 Hz frame loop does not flood the terminal.
//!
//! ```text
//! .█ 8 [♜] ♞  ♝  ♛  ♚  ♝  ♞  ♜
//! .█ 7  ♟  ♟  ♟  ♟  ♟  ♟  ♟  ♟
//! ...
//!        a  b  c  d  e  f  g  h
//! White to move | eval +0.30 | best e2e4 | idle
//! ```
//!
//! Cell markers: `[x]` best move square, `(x)` held square, `·` empty dark
//! square.

use crate::rendering::assets::{AssetCache, AssetLoader, GlyphLoader};
use crate::rendering::board::coordinates::BoardGeometry;
use crate::rendering::evalbar::eval_bar_layout;
use crate::rendering::snapshot::{SquareShade, ViewSnapshot};
use crate::rendering::Renderer;
use shakmaty::Color;
use std::fmt::Write as _;
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Renders snapshots as text to any writer
pub struct TextRenderer<W: Write, L: AssetLoader<Asset = String> = GlyphLoader> {
    out: W,
    assets: AssetCache<L>,
    clear_screen: bool,
    last_frame: Option<String>,
    frames_written: usize,
}

impl<W: Write, L: AssetLoader<Asset = String>> TextRenderer<W, L> {
    pub fn new(out: W, assets: AssetCache<L>) -> Self {
        Self {
            out,
            assets,
            clear_screen: false,
            last_frame: None,
            frames_written: 0,
        }
    }

    /// Clear the terminal before each frame
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Lay out one frame without writing it
    pub fn compose(&mut self, snapshot: &ViewSnapshot<'_>) -> String {
        let orientation = snapshot.orientation;
        let bar = eval_bar_layout(snapshot.evaluation, orientation, 8.0);
        let bottom_rows = bar.bottom_height.round() as u32;
        let (bottom_fill, top_fill) = match bar.bottom_color {
            Color::White => ('█', '░'),
            Color::Black => ('░', '█'),
        };
        let activity = if snapshot.is_analyzing { '*' } else { '.' };

        let mut frame = String::new();
        for row in 0..8 {
            let fill = if row >= 8 - bottom_rows { bottom_fill } else { top_fill };
            let rank = BoardGeometry::square_at_cell(0, row, orientation).rank();
            let _ = write!(frame, "{}{} {} ", activity, fill, rank as u8 + 1);

            for column in 0..8 {
                let square = BoardGeometry::square_at_cell(column, row, orientation);
                let glyph = match snapshot.piece_at(square) {
                    Some(piece) => self.assets.get(piece.role, piece.color).clone(),
                    None if snapshot.shade(square) == SquareShade::Dark => "·".to_string(),
                    None => " ".to_string(),
                };
                let (open, close) = match snapshot.shade(square) {
                    SquareShade::BestMove => ('[', ']'),
                    SquareShade::Held => ('(', ')'),
                    SquareShade::Light | SquareShade::Dark => (' ', ' '),
                };
                let _ = write!(frame, "{}{}{}", open, glyph, close);
            }
            frame.push('\n');
        }

        frame.push_str("     ");
        for column in 0..8 {
            let file = BoardGeometry::square_at_cell(column, 7, orientation).file();
            let _ = write!(frame, " {} ", (b'a' + file as u8) as char);
        }
        frame.push('\n');

        frame.push_str(&status_line(snapshot));
        frame.push('\n');
        frame
    }
}

/// One-line summary under the board
pub fn status_line(snapshot: &ViewSnapshot<'_>) -> String {
    let turn = match snapshot.turn() {
        Color::White => "White",
        Color::Black => "Black",
    };
    let best = snapshot
        .best_move
        .map_or_else(|| "none".to_string(), |mv| mv.to_string());
    let eval = snapshot
        .evaluation
        .map_or_else(|| "--".to_string(), |eval| eval.to_string());
    let activity = if snapshot.is_analyzing { "thinking" } else { "idle" };

    let mut line = format!(
        "{} to move | eval {} | best {} | {}",
        turn, eval, best, activity
    );
    if let Some(held) = snapshot.held_square {
        let _ = write!(line, " | holding {}", held);
        if let Some(pointer) = snapshot.pointer {
            let _ = write!(line, " at ({:.0}, {:.0})", pointer.x, pointer.y);
        }
    }
    line
}

impl<W: Write, L: AssetLoader<Asset = String>> Renderer for TextRenderer<W, L> {
    fn render(&mut self, snapshot: &ViewSnapshot<'_>) -> io::Result<()> {
        let frame = self.compose(snapshot);
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return Ok(());
        }

        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;

        self.frames_written += 1;
        self.last_frame = Some(frame);
        Ok(())
    }
}

//! Board geometry - mapping between squares and screen pixels
//!
//! The window is laid out left to right as:
//!
//! ```text
//! ┌──┬──┬────────────────────────┐
//! │A │E │                        │
//! │c │v │      8 x 8 board       │
//! │t │a │                        │
//! │  │l │                        │
//! └──┴──┴────────────────────────┘
//!  ¼  ¼        8 cells
//! ```
//!
//! The activity bar and the evaluation bar are each a quarter cell wide; the
//! board origin is offset by both. The vertical origin is the top edge of the
//! window.
//!
//! # Orientation
//!
//! With [`Orientation::WhiteBottom`], file a is the leftmost column and rank 8
//! the top row. [`Orientation::BlackBottom`] mirrors both axes, so h1 sits in
//! the top-left corner.
//!
//! # Invariants
//!
//! - [`BoardGeometry::square_at`] and [`BoardGeometry::screen_pos`] are exact
//!   inverses for every square under both orientations
//! - The board rectangle is half-open: a point exactly on the right or bottom
//!   edge is off the board, and off-board points never wrap

use crate::game::error::{GameError, GameResult};
use crate::game::types::{Orientation, Point};
use shakmaty::{File, Rank, Square};

/// Default edge length of one board cell in pixels
pub const DEFAULT_CELL_SIZE: f32 = 80.0;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Half-open containment test
    pub fn contains(&self, point: Point) -> bool {
        (self.x..self.x + self.width).contains(&point.x)
            && (self.y..self.y + self.height).contains(&point.y)
    }
}

/// Pixel layout of the board window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    cell_size: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl BoardGeometry {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Width of each side bar
    pub fn bar_width(&self) -> f32 {
        self.cell_size / 4.0
    }

    /// Top-left corner of square a8 with White at the bottom
    pub fn origin(&self) -> Point {
        Point::new(2.0 * self.bar_width(), 0.0)
    }

    /// Pixel rectangle covered by the 64 squares
    pub fn board_rect(&self) -> Rect {
        let origin = self.origin();
        Rect {
            x: origin.x,
            y: origin.y,
            width: 8.0 * self.cell_size,
            height: 8.0 * self.cell_size,
        }
    }

    pub fn activity_bar_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.bar_width(),
            height: 8.0 * self.cell_size,
        }
    }

    pub fn eval_bar_rect(&self) -> Rect {
        Rect {
            x: self.bar_width(),
            y: 0.0,
            width: self.bar_width(),
            height: 8.0 * self.cell_size,
        }
    }

    /// Total window size as `(width, height)`
    pub fn window_size(&self) -> (f32, f32) {
        let board = self.board_rect();
        (board.x + board.width, board.height)
    }

    /// Square drawn in grid cell `(column, row)`, counted from the top-left
    ///
    /// Both indices must be below 8.
    pub fn square_at_cell(column: u32, row: u32, orientation: Orientation) -> Square {
        let (file, rank) = match orientation {
            Orientation::WhiteBottom => (column, 7 - row),
            Orientation::BlackBottom => (7 - column, row),
        };
        Square::from_coords(File::new(file), Rank::new(rank))
    }

    /// Grid cell `(column, row)` in which `square` is drawn
    pub fn cell_of(square: Square, orientation: Orientation) -> (u32, u32) {
        let file = square.file() as u32;
        let rank = square.rank() as u32;
        match orientation {
            Orientation::WhiteBottom => (file, 7 - rank),
            Orientation::BlackBottom => (7 - file, rank),
        }
    }

    /// Square under a screen point
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSquare`] when the point is outside the board
    /// rectangle (including inside the side bars).
    pub fn square_at(&self, point: Point, orientation: Orientation) -> GameResult<Square> {
        if !self.board_rect().contains(point) {
            return Err(GameError::InvalidSquare {
                x: point.x,
                y: point.y,
            });
        }

        let origin = self.origin();
        // min(7) guards against float rounding just inside the far edge
        let column = (((point.x - origin.x) / self.cell_size) as u32).min(7);
        let row = (((point.y - origin.y) / self.cell_size) as u32).min(7);
        Ok(Self::square_at_cell(column, row, orientation))
    }

    /// Top-left corner of the cell where `square` is drawn
    pub fn cell_origin(&self, square: Square, orientation: Orientation) -> Point {
        let (column, row) = Self::cell_of(square, orientation);
        let origin = self.origin();
        Point::new(
            origin.x + column as f32 * self.cell_size,
            origin.y + row as f32 * self.cell_size,
        )
    }

    /// Centre of the cell where `square` is drawn
    pub fn screen_pos(&self, square: Square, orientation: Orientation) -> Point {
        let corner = self.cell_origin(square, orientation);
        let half = self.cell_size / 2.0;
        Point::new(corner.x + half, corner.y + half)
    }
}

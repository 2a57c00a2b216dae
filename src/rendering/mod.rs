//! Rendering module - turns view snapshots into frames
//!
//! Rendering is strictly read-only: the frame loop builds a [`ViewSnapshot`]
//! once per tick and hands it to a [`Renderer`]. Nothing in here can mutate
//! the board, the interaction state or the analysis session.
//!
//! # Architecture
//!
//! - `board::coordinates` - Square/pixel mapping and window layout
//! - `snapshot` - [`ViewSnapshot`] and square shading rules
//! - `evalbar` - Evaluation bar fill computation
//! - `assets` - Piece asset cache keyed by role and colour
//! - `text` - [`TextRenderer`], the terminal front end

// Submodules
pub mod assets;
pub mod board;
pub mod evalbar;
pub mod snapshot;
pub mod text;

use std::io;

pub use board::coordinates::{BoardGeometry, Rect};
pub use snapshot::{build_snapshot, SquareShade, ViewSnapshot};
pub use text::TextRenderer;

/// Draws one frame
///
/// Implementations may skip frames that look identical to the previous one.
pub trait Renderer {
    fn render(&mut self, snapshot: &ViewSnapshot<'_>) -> io::Result<()>;
}

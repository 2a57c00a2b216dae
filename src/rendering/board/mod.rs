//! Board layout
//!
//! Maps squares to screen positions and back.

pub mod coordinates;

pub use coordinates::{BoardGeometry, Rect, DEFAULT_CELL_SIZE};

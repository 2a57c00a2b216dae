//! Application settings - command line and settings file
//!
//! Settings come from two places, merged in this order:
//!
//! 1. The JSON settings file (see [`crate::core::settings_persistence`])
//! 2. Command-line flags, which override the file field by field
//!
//! # File Format
//!
//! ```json
//! {
//!   "engine": "stockfish",
//!   "limit": { "kind": "depth", "value": 18 }
//! }
//! ```
//!
//! `kind` is `depth` (plies) or `time` (milliseconds). Every field is
//! optional; missing fields take their defaults.

use crate::core::error::{CoreError, CoreResult};
use crate::core::frame_pacer::DEFAULT_FPS;
use crate::game::ai::SearchLimit;
use crate::game::types::Orientation;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Engine binary used when nothing else is configured
pub const DEFAULT_ENGINE: &str = "stockfish";

/// Command-line interface
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "miniuci", version, about = "Chess board with live UCI engine analysis")]
pub struct Cli {
    /// Path or name of the UCI engine binary
    #[arg(long)]
    pub engine: Option<String>,

    /// Analyse to a fixed depth in plies
    #[arg(long, conflicts_with = "time")]
    pub depth: Option<u32>,

    /// Analyse for a fixed time in milliseconds
    #[arg(long, value_name = "MS")]
    pub time: Option<u64>,

    /// Starting position in FEN
    #[arg(long)]
    pub fen: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with Black at the bottom
    #[arg(long)]
    pub flip: bool,

    /// Target frame rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Directory with `<color>-<piece>.txt` glyph overrides
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Write the merged settings back to the settings file
    #[arg(long)]
    pub save_config: bool,
}

/// Search limit as stored in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LimitSetting {
    Depth(u32),
    /// Milliseconds
    Time(u64),
}

impl Default for LimitSetting {
    fn default() -> Self {
        LimitSetting::Depth(crate::game::ai::resource::DEFAULT_DEPTH)
    }
}

impl LimitSetting {
    /// Convert to an engine search limit
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidLimit`] for a zero depth or zero time.
    pub fn to_search_limit(self) -> CoreResult<SearchLimit> {
        match self {
            LimitSetting::Depth(0) => Err(CoreError::InvalidLimit {
                message: "depth must be at least 1".to_string(),
            }),
            LimitSetting::Time(0) => Err(CoreError::InvalidLimit {
                message: "time must be at least 1 ms".to_string(),
            }),
            LimitSetting::Depth(depth) => Ok(SearchLimit::Depth(depth)),
            LimitSetting::Time(ms) => Ok(SearchLimit::Time(Duration::from_millis(ms))),
        }
    }
}

/// Merged application settings
///
/// # Fields
///
/// - `engine`: engine binary, looked up on `PATH` when not a path
/// - `limit`: search limit for analysis requests
/// - `fen`: starting position, `None` for the standard start
/// - `orientation`: initial board orientation
/// - `fps`: frame rate of the frame loop
/// - `assets`: glyph override directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: String,
    pub limit: LimitSetting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    pub orientation: Orientation,
    pub fps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            limit: LimitSetting::default(),
            fen: None,
            orientation: Orientation::WhiteBottom,
            fps: DEFAULT_FPS,
            assets: None,
        }
    }
}

impl Settings {
    /// Override file values with whatever was given on the command line
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(engine) = &cli.engine {
            self.engine = engine.clone();
        }
        if let Some(depth) = cli.depth {
            self.limit = LimitSetting::Depth(depth);
        }
        if let Some(ms) = cli.time {
            self.limit = LimitSetting::Time(ms);
        }
        if let Some(fen) = &cli.fen {
            self.fen = Some(fen.clone());
        }
        if cli.flip {
            self.orientation = self.orientation.flipped();
        }
        if let Some(fps) = cli.fps {
            self.fps = fps;
        }
        if let Some(assets) = &cli.assets {
            self.assets = Some(assets.clone());
        }
    }

    pub fn search_limit(&self) -> CoreResult<SearchLimit> {
        self.limit.to_search_limit()
    }
}

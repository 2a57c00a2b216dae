//! Analysis request definitions: search limits, depth presets and the
//! position description handed to the engine
//!
//! These types describe *what* to analyse. They carry no engine handles and
//! no channels, so they are cheap to clone, compare and log.
//!
//! # Search Limits
//!
//! A request is bounded either by depth or by time, never both:
//!
//! | Preset   | Limit        | UCI command       |
//! |----------|--------------|-------------------|
//! | Quick    | depth 10     | `go depth 10`     |
//! | Standard | depth 18     | `go depth 18`     |
//! | Deep     | 5000 ms      | `go movetime 5000`|
//!
//! `Standard` matches the depth the board has always asked for by default.
//!
//! # Position Encoding
//!
//! The engine never sees our board object. [`AnalysisRequest::for_board`]
//! captures the starting FEN (if any) and the moves played since, which
//! [`AnalysisRequest::position_command`] turns into a single `position` line:
//!
//! ```rust,ignore
//! let request = AnalysisRequest::for_board(&board, SearchLimit::Depth(18));
//! assert_eq!(request.position_command(), "position startpos moves e2e4");
//! assert_eq!(request.limit.go_command(), "go depth 18");
//! ```

use crate::game::rules::BoardState;
use shakmaty::Color;
use std::fmt;
use std::time::Duration;

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u32 = 18;

/// Bound for a single analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchLimit {
    /// Search to a fixed number of plies
    Depth(u32),
    /// Search for a fixed wall-clock time
    Time(Duration),
}

impl Default for SearchLimit {
    fn default() -> Self {
        SearchLimit::Depth(DEFAULT_DEPTH)
    }
}

impl SearchLimit {
    /// UCI `go` command for this limit
    pub fn go_command(&self) -> String {
        match self {
            SearchLimit::Depth(depth) => format!("go depth {}", depth),
            SearchLimit::Time(duration) => format!("go movetime {}", duration.as_millis()),
        }
    }
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLimit::Depth(depth) => write!(f, "depth {}", depth),
            SearchLimit::Time(duration) => write!(f, "{} ms", duration.as_millis()),
        }
    }
}

/// Analysis strength presets
///
/// Mirrors the difficulty presets of an AI opponent, except that the result
/// is a [`SearchLimit`] rather than a playing strength.
///
/// # Examples
///
/// ```rust,ignore
/// let limit = AnalysisDepth::Deep.limit();
/// println!("Analysing with {} ({})", limit, AnalysisDepth::Deep.description());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisDepth {
    /// Shallow search that answers almost immediately
    Quick,
    /// Default depth for interactive analysis
    #[default]
    Standard,
    /// Time-bounded search for positions worth waiting on
    Deep,
}

impl AnalysisDepth {
    pub fn limit(self) -> SearchLimit {
        match self {
            AnalysisDepth::Quick => SearchLimit::Depth(10),
            AnalysisDepth::Standard => SearchLimit::Depth(DEFAULT_DEPTH),
            AnalysisDepth::Deep => SearchLimit::Time(Duration::from_secs(5)),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AnalysisDepth::Quick => "quick look",
            AnalysisDepth::Standard => "standard analysis",
            AnalysisDepth::Deep => "deep analysis",
        }
    }
}

/// One position to analyse, in the form the engine understands
///
/// # Fields
///
/// - `fen`: starting FEN, `None` for the standard start position
/// - `moves`: moves played since the start, in UCI notation
/// - `turn`: side to move in the analysed position; engines report scores
///   relative to it, so the adapter needs it to normalise evaluations
/// - `limit`: depth or time bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub fen: Option<String>,
    pub moves: Vec<String>,
    pub turn: Color,
    pub limit: SearchLimit,
}

impl AnalysisRequest {
    /// Capture the current position of `board`
    pub fn for_board(board: &BoardState, limit: SearchLimit) -> Self {
        Self {
            fen: board.initial_fen().map(str::to_string),
            moves: board.uci_moves().map(|m| m.to_string()).collect(),
            turn: board.turn(),
            limit,
        }
    }

    /// UCI `position` command for this request
    pub fn position_command(&self) -> String {
        let mut command = match &self.fen {
            Some(fen) => format!("position fen {}", fen),
            None => "position startpos".to_string(),
        };
        if !self.moves.is_empty() {
            command.push_str(" moves ");
            command.push_str(&self.moves.join(" "));
        }
        command
    }
}

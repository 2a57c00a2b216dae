//! Engine analysis for the board
//!
//! Everything needed to ask a UCI engine about the current position and to
//! fold its answers back into what the board displays.
//!
//! # Architecture
//!
//! - `resource`: What to analyse ([`AnalysisRequest`], [`SearchLimit`], presets)
//! - `engine`: The [`AnalysisEngine`] seam and the update stream contract
//! - `uci`: Production engine, a UCI subprocess run on `tokio`
//! - `scripted`: Hand-driven engine for tests (`test-utils` feature)
//! - `session`: [`AnalysisSession`], the frame-thread owner of all results
//!
//! # Data Flow
//!
//! 1. Frame loop calls [`AnalysisSession::start`] with a request
//! 2. Engine adapter writes `position` and `go`, then returns a mailbox
//! 3. Reader task forwards `info`/`bestmove` into the mailbox
//! 4. [`AnalysisSession::poll`] drains the mailbox once per frame
//!
//! The board never waits on the engine; an unresponsive engine only means
//! the best move arrives late or not at all.

pub mod engine;
pub mod error;
pub mod resource;
#[cfg(any(test, feature = "test-utils"))]
pub mod scripted;
pub mod session;
pub mod uci;

// Re-export for convenience
pub use engine::{AnalysisEngine, EngineUpdate, UpdateStream};
pub use error::{EngineError, EngineResult};
pub use resource::{AnalysisDepth, AnalysisRequest, SearchLimit};
#[cfg(any(test, feature = "test-utils"))]
pub use scripted::{ScriptedEngine, ScriptedHandle};
pub use session::{AnalysisPhase, AnalysisSession};
pub use uci::UciEngine;

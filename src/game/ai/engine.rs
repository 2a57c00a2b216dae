//! Engine collaborator interface
//!
//! The analysis session talks to any engine through [`AnalysisEngine`]. Each
//! call to [`AnalysisEngine::start_analysis`] returns a fresh mailbox
//! ([`UpdateStream`]) that receives the updates for that one request and is
//! disconnected by the engine side once the request is over.
//!
//! # Stream Contract
//!
//! - Zero or more [`EngineUpdate::Info`] messages
//! - Exactly one terminal [`EngineUpdate::BestMove`], after which the sender
//!   is dropped
//! - If the engine dies first, the sender is dropped without a terminal
//!   message; receivers observe a disconnected channel
//!
//! Scores in updates are already converted to White's point of view.

use crate::game::ai::error::EngineResult;
use crate::game::ai::resource::AnalysisRequest;
use crate::game::types::Evaluation;
use crossbeam_channel::Receiver;
use shakmaty::uci::UciMove;

/// One incremental result from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineUpdate {
    /// Progress report; either field may be absent in a given line
    Info {
        score: Option<Evaluation>,
        pv: Vec<UciMove>,
    },
    /// Final answer for the request; `None` when the position has no legal
    /// move
    BestMove(Option<UciMove>),
}

impl EngineUpdate {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineUpdate::BestMove(_))
    }
}

/// Receiving end of a per-request mailbox
pub type UpdateStream = Receiver<EngineUpdate>;

/// Anything that can analyse a position and stream results back
///
/// Implementations must not block the caller: `start_analysis` hands the
/// request off and returns immediately, and results arrive on the returned
/// stream from whatever thread or task the engine runs on.
pub trait AnalysisEngine: Send {
    /// Begin analysing `request`
    fn start_analysis(&mut self, request: &AnalysisRequest) -> EngineResult<UpdateStream>;

    /// Ask the engine to finish the current request early
    ///
    /// The engine still delivers a terminal update on the old stream.
    fn stop(&mut self) -> EngineResult<()>;

    /// Shut the engine down; later calls fail with `NotRunning`
    fn quit(&mut self) -> EngineResult<()>;
}

//! Analysis session - one cancellable engine request at a time
//!
//! The session sits between the frame loop and an [`AnalysisEngine`]. It
//! owns every piece of analysis state the board displays (best move, score,
//! thinking flag) and only ever touches it from the frame thread: updates
//! arrive in a per-request mailbox and are drained by [`AnalysisSession::poll`]
//! with non-blocking receives.
//!
//! # Phases
//!
//! ```text
//!            start                 first info
//!   Idle ─────────────► Requesting ───────────► Streaming
//!    ▲                      │                       │
//!    │      bestmove        │ start / cancel        │ start / cancel
//!    ├◄─────────────────────┼───────────────────────┤
//!    │                      ▼                       ▼
//!    └◄──────────────── Cancelling ◄────────────────┘
//!       old bestmove        (queued request, if any, issued here)
//! ```
//!
//! # Restart Serialisation
//!
//! Starting while a request is in flight sends `stop`, remembers the new
//! request and waits. Updates from the old stream are discarded; only when
//! its terminal `bestmove` arrives is the queued request handed to the
//! engine. Starting again while cancelling just replaces the queued request,
//! so at most one request is ever outstanding.
//!
//! # Engine Failure
//!
//! A failed `start_analysis` or `stop`, or a stream that disconnects before
//! its terminal update, drops the session back to `Idle` with no best move
//! and records the error. The frame loop keeps running.

use crate::game::ai::engine::{AnalysisEngine, EngineUpdate, UpdateStream};
use crate::game::ai::error::EngineError;
use crate::game::ai::resource::AnalysisRequest;
use crate::game::types::Evaluation;
use crossbeam_channel::TryRecvError;
use shakmaty::uci::UciMove;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Where the session is in the lifecycle of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisPhase {
    /// No request outstanding
    #[default]
    Idle,
    /// Request sent, nothing heard back yet
    Requesting,
    /// At least one update received
    Streaming,
    /// `stop` sent; waiting for the old stream's terminal update
    Cancelling,
}

impl AnalysisPhase {
    pub fn is_active(self) -> bool {
        !matches!(self, AnalysisPhase::Idle)
    }
}

/// Owns the engine and the analysis results shown on the board
pub struct AnalysisSession {
    engine: Box<dyn AnalysisEngine>,
    phase: AnalysisPhase,
    mailbox: Option<UpdateStream>,
    /// Request waiting for a cancellation to finish
    queued: Option<AnalysisRequest>,
    best_move: Option<UciMove>,
    score: Evaluation,
    /// Score belongs to a position that is no longer on the board
    score_stale: bool,
    started_at: Option<Instant>,
    last_error: Option<EngineError>,
}

impl AnalysisSession {
    pub fn new(engine: Box<dyn AnalysisEngine>) -> Self {
        Self {
            engine,
            phase: AnalysisPhase::Idle,
            mailbox: None,
            queued: None,
            best_move: None,
            score: Evaluation::default(),
            score_stale: false,
            started_at: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    /// Whether a request is outstanding, including one being cancelled
    pub fn is_analyzing(&self) -> bool {
        self.phase.is_active()
    }

    pub fn best_move(&self) -> Option<&UciMove> {
        self.best_move.as_ref()
    }

    /// Latest score, from White's point of view
    pub fn score(&self) -> Evaluation {
        self.score
    }

    /// Score to display, `None` until the current position has one
    pub fn evaluation(&self) -> Option<Evaluation> {
        (!self.score_stale).then_some(self.score)
    }

    /// Time since the current request was issued
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|started| started.elapsed())
    }

    /// Error that last ended a request, if any
    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }

    pub fn has_queued_request(&self) -> bool {
        self.queued.is_some()
    }

    /// Analyse a position, cancelling whatever is in flight first
    pub fn start(&mut self, request: AnalysisRequest) {
        match self.phase {
            AnalysisPhase::Idle => self.issue(request),
            AnalysisPhase::Requesting | AnalysisPhase::Streaming => {
                debug!("[SESSION] Restart requested, stopping current analysis");
                self.queued = Some(request);
                self.begin_cancel();
            }
            AnalysisPhase::Cancelling => {
                debug!("[SESSION] Replacing queued analysis request");
                self.queued = Some(request);
            }
        }
    }

    /// Stop the current request and clear the best move
    ///
    /// The score stays readable through [`AnalysisSession::score`] but is
    /// withheld from [`AnalysisSession::evaluation`] until a fresh one
    /// arrives. Idempotent: cancelling while idle or already cancelling sends
    /// nothing.
    pub fn cancel(&mut self) {
        self.best_move = None;
        self.score_stale = true;
        self.queued = None;
        if matches!(
            self.phase,
            AnalysisPhase::Requesting | AnalysisPhase::Streaming
        ) {
            self.begin_cancel();
        }
    }

    /// Forget the best move and reset the score to neutral
    pub fn clear_results(&mut self) {
        self.best_move = None;
        self.score = Evaluation::default();
        self.score_stale = false;
    }

    /// Drain every update that has arrived since the last call
    ///
    /// Never blocks. Returns the number of updates applied or discarded.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = match self.mailbox.as_ref() {
                Some(mailbox) => mailbox.try_recv(),
                None => break,
            };
            match next {
                Ok(update) => {
                    handled += 1;
                    self.apply(update);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.terminated(EngineError::Terminated);
                    break;
                }
            }
        }
        handled
    }

    /// Cancel any request and tell the engine to exit
    pub fn shutdown(&mut self) {
        self.cancel();
        if let Err(e) = self.engine.quit() {
            warn!("[SESSION] Engine did not shut down cleanly: {}", e);
        }
        self.phase = AnalysisPhase::Idle;
        self.mailbox = None;
        self.started_at = None;
        info!("[SESSION] Analysis session shut down");
    }

    fn issue(&mut self, request: AnalysisRequest) {
        self.best_move = None;
        match self.engine.start_analysis(&request) {
            Ok(stream) => {
                info!(
                    "[SESSION] Analysis started: {} ({})",
                    request.position_command(),
                    request.limit
                );
                self.mailbox = Some(stream);
                self.phase = AnalysisPhase::Requesting;
                self.started_at = Some(Instant::now());
                self.last_error = None;
            }
            Err(e) => self.terminated(e),
        }
    }

    fn begin_cancel(&mut self) {
        match self.engine.stop() {
            Ok(()) => self.phase = AnalysisPhase::Cancelling,
            Err(e) => self.terminated(e),
        }
    }

    fn apply(&mut self, update: EngineUpdate) {
        match (self.phase, update) {
            (AnalysisPhase::Cancelling, EngineUpdate::Info { .. }) => {}
            (AnalysisPhase::Cancelling, EngineUpdate::BestMove(_)) => {
                self.finish_stream();
                debug!("[SESSION] Cancellation complete");
                if let Some(next) = self.queued.take() {
                    self.issue(next);
                }
            }
            (_, EngineUpdate::Info { score, pv }) => {
                self.phase = AnalysisPhase::Streaming;
                if let Some(score) = score {
                    self.score = score;
                    self.score_stale = false;
                }
                if let Some(first) = pv.into_iter().next() {
                    self.best_move = Some(first);
                }
            }
            (_, EngineUpdate::BestMove(best)) => {
                match &best {
                    Some(mv) => info!("[SESSION] Best move {} ({})", mv, self.score),
                    None => info!("[SESSION] Engine reports no legal move"),
                }
                self.best_move = best;
                self.finish_stream();
            }
        }
    }

    fn finish_stream(&mut self) {
        self.mailbox = None;
        self.phase = AnalysisPhase::Idle;
        self.started_at = None;
    }

    fn terminated(&mut self, error: EngineError) {
        warn!("[SESSION] Analysis ended by engine failure: {}", error);
        self.finish_stream();
        self.queued = None;
        self.best_move = None;
        self.last_error = Some(error);
    }
}

//! In-process engine driven by hand
//!
//! [`ScriptedEngine`] implements [`AnalysisEngine`] without a subprocess.
//! Its paired [`ScriptedHandle`] plays the part of the engine's output: it
//! pushes updates into the current request's mailbox, finishes or drops the
//! stream, and records what the session asked for. Used to drive the
//! analysis session and the frame loop deterministically in tests. Only
//! compiled for unit tests or with the `test-utils` feature.
//!
//! ```rust,ignore
//! let (engine, handle) = ScriptedEngine::new();
//! let mut session = AnalysisSession::new(Box::new(engine));
//! session.start(request);
//! handle.info(Some(Evaluation::CentiPawns(20)), &["e2e4"]);
//! handle.finish(Some("e2e4"));
//! session.poll();
//! ```

use crate::game::ai::engine::{AnalysisEngine, EngineUpdate, UpdateStream};
use crate::game::ai::error::{EngineError, EngineResult};
use crate::game::ai::resource::AnalysisRequest;
use crate::game::types::Evaluation;
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use shakmaty::uci::UciMove;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ScriptState {
    sender: Option<Sender<EngineUpdate>>,
    requests: Vec<AnalysisRequest>,
    stop_count: usize,
    quit: bool,
    /// Answer `stop` immediately with `bestmove (none)`
    auto_ack_stop: bool,
    fail_next_start: bool,
}

/// Engine whose output is controlled through a [`ScriptedHandle`]
#[derive(Debug)]
pub struct ScriptedEngine {
    state: Arc<Mutex<ScriptState>>,
}

/// Control side of a [`ScriptedEngine`]
#[derive(Debug, Clone)]
pub struct ScriptedHandle {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedEngine {
    pub fn new() -> (Self, ScriptedHandle) {
        let state = Arc::new(Mutex::new(ScriptState::default()));
        (
            Self {
                state: state.clone(),
            },
            ScriptedHandle { state },
        )
    }
}

impl AnalysisEngine for ScriptedEngine {
    fn start_analysis(&mut self, request: &AnalysisRequest) -> EngineResult<UpdateStream> {
        let mut state = self.state.lock();
        if state.quit {
            return Err(EngineError::NotRunning);
        }
        if state.fail_next_start {
            state.fail_next_start = false;
            return Err(EngineError::Terminated);
        }

        let (sender, stream) = crossbeam_channel::unbounded();
        state.sender = Some(sender);
        state.requests.push(request.clone());
        Ok(stream)
    }

    fn stop(&mut self) -> EngineResult<()> {
        let mut state = self.state.lock();
        if state.quit {
            return Err(EngineError::NotRunning);
        }
        state.stop_count += 1;
        if state.auto_ack_stop {
            if let Some(sender) = state.sender.take() {
                let _ = sender.send(EngineUpdate::BestMove(None));
            }
        }
        Ok(())
    }

    fn quit(&mut self) -> EngineResult<()> {
        let mut state = self.state.lock();
        state.quit = true;
        state.sender = None;
        Ok(())
    }
}

fn parse_moves(moves: &[&str]) -> Vec<UciMove> {
    moves.iter().filter_map(|m| m.parse().ok()).collect()
}

impl ScriptedHandle {
    /// Push an update to the current request; `false` if none is open
    pub fn send(&self, update: EngineUpdate) -> bool {
        let state = self.state.lock();
        match state.sender.as_ref() {
            Some(sender) => sender.send(update).is_ok(),
            None => false,
        }
    }

    /// Push an `info` update with a White-relative score and a PV
    pub fn info(&self, score: Option<Evaluation>, pv: &[&str]) -> bool {
        self.send(EngineUpdate::Info {
            score,
            pv: parse_moves(pv),
        })
    }

    /// Send the terminal `bestmove` and close the current stream
    pub fn finish(&self, best: Option<&str>) -> bool {
        let sender = self.state.lock().sender.take();
        match sender {
            Some(sender) => {
                let best = best.and_then(|m| m.parse().ok());
                sender.send(EngineUpdate::BestMove(best)).is_ok()
            }
            None => false,
        }
    }

    /// Close the current stream without a terminal update, as if the engine
    /// process had died
    pub fn disconnect(&self) {
        self.state.lock().sender = None;
    }

    pub fn has_open_stream(&self) -> bool {
        self.state.lock().sender.is_some()
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.state.lock().requests.clone()
    }

    pub fn stop_count(&self) -> usize {
        self.state.lock().stop_count
    }

    pub fn is_quit(&self) -> bool {
        self.state.lock().quit
    }

    pub fn set_auto_ack_stop(&self, enabled: bool) {
        self.state.lock().auto_ack_stop = enabled;
    }

    /// Make the next `start_analysis` fail as if the engine had died
    pub fn fail_next_start(&self) {
        self.state.lock().fail_next_start = true;
    }
}

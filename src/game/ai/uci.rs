//! UCI engine subprocess adapter
//!
//! [`UciEngine`] runs a UCI engine binary as a child process on a `tokio`
//! runtime and implements [`AnalysisEngine`] on top of it. The frame loop
//! never awaits anything: commands are queued to a writer task and results
//! come back through the per-request mailbox.
//!
//! # Tasks
//!
//! | Task    | Owns          | Job                                          |
//! |---------|---------------|----------------------------------------------|
//! | writer  | child stdin   | Writes queued commands, one per line         |
//! | reader  | child stdout  | Parses lines, forwards updates to the mailbox|
//! | reaper  | child process | Waits for exit, kills the child on drop      |
//!
//! The only state shared between the frame thread and the reader task is the
//! slot holding the current request's sender. The reader takes the slot when
//! `bestmove` arrives, which drops the sender and closes that stream; at EOF
//! it clears the slot without a terminal update so the session sees a
//! disconnect.
//!
//! # Score Perspective
//!
//! UCI engines print scores for the side to move. The slot remembers whose
//! turn it was in the analysed position and the reader converts every score
//! to White's point of view before forwarding it.

use crate::game::ai::engine::{AnalysisEngine, EngineUpdate, UpdateStream};
use crate::game::ai::error::{EngineError, EngineResult};
use crate::game::ai::resource::AnalysisRequest;
use crate::game::types::Evaluation;
use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use shakmaty::uci::UciMove;
use shakmaty::Color;
use std::path::Path;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{ChildStdin, ChildStdout, Command};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};
use vampirc_uci::{parse_one, UciInfoAttribute, UciMessage};

/// Mailbox of the request the engine is currently working on
#[derive(Debug)]
struct ActiveStream {
    sender: Sender<EngineUpdate>,
    turn: Color,
}

type ActiveSlot = Arc<Mutex<Option<ActiveStream>>>;

/// A UCI engine running as a child process
pub struct UciEngine {
    commands: mpsc::UnboundedSender<String>,
    active: ActiveSlot,
    alive: Arc<AtomicBool>,
    ready: Receiver<()>,
}

impl UciEngine {
    /// Start the engine binary at `path` and begin the UCI handshake
    ///
    /// The handshake (`uci`, `isready`) is sent but not awaited; call
    /// [`UciEngine::wait_ready`] to block until the engine answers.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Spawn`] when the binary cannot be executed.
    pub fn spawn(path: impl AsRef<Path>, runtime: &Handle) -> EngineResult<Self> {
        let path = path.as_ref();
        // Process spawning registers the child with the runtime's reactor
        let _guard = runtime.enter();

        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Spawn {
                path: path.display().to_string(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(EngineError::NoStdin)?;
        let stdout = child.stdout.take().ok_or(EngineError::NoStdout)?;

        let (commands, command_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready) = crossbeam_channel::bounded(1);
        let active: ActiveSlot = Arc::new(Mutex::new(None));
        let alive = Arc::new(AtomicBool::new(true));

        runtime.spawn(write_commands(stdin, command_rx));
        runtime.spawn(read_output(
            BufReader::new(stdout),
            active.clone(),
            alive.clone(),
            ready_tx,
        ));
        runtime.spawn(async move {
            match child.wait().await {
                Ok(status) => info!("[ENGINE] Engine process exited with {}", status),
                Err(e) => warn!("[ENGINE] Failed to wait for engine process: {}", e),
            }
        });

        info!("[ENGINE] Started engine {}", path.display());

        let engine = Self {
            commands,
            active,
            alive,
            ready,
        };
        engine.send("uci")?;
        engine.send("isready")?;
        Ok(engine)
    }

    /// Block until the engine answers `isready`
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Terminated`] when the engine exits or stays
    /// silent for longer than `timeout`.
    pub fn wait_ready(&self, timeout: Duration) -> EngineResult<()> {
        self.ready.recv_timeout(timeout).map_err(|e| {
            warn!("[ENGINE] Engine did not become ready: {}", e);
            EngineError::Terminated
        })
    }

    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    fn send(&self, command: &str) -> EngineResult<()> {
        if !self.is_running() {
            return Err(EngineError::NotRunning);
        }
        self.commands
            .send(command.to_string())
            .map_err(|_| EngineError::NotRunning)
    }
}

impl AnalysisEngine for UciEngine {
    fn start_analysis(&mut self, request: &AnalysisRequest) -> EngineResult<UpdateStream> {
        let (sender, stream) = crossbeam_channel::unbounded();

        // Install the mailbox before `go` so no early line is missed
        let previous = self.active.lock().replace(ActiveStream {
            sender,
            turn: request.turn,
        });
        if previous.is_some() {
            warn!("[ENGINE] New request replaced an unfinished one");
        }

        let sent = self
            .send(&request.position_command())
            .and_then(|_| self.send(&request.limit.go_command()));
        if let Err(e) = sent {
            self.active.lock().take();
            return Err(e);
        }
        Ok(stream)
    }

    fn stop(&mut self) -> EngineResult<()> {
        self.send("stop")
    }

    fn quit(&mut self) -> EngineResult<()> {
        self.send("quit")?;
        self.alive.store(false, Ordering::SeqCst);
        Ok(())
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        if self.is_running() {
            let _ = self.commands.send("quit".to_string());
        }
    }
}

async fn write_commands(mut stdin: ChildStdin, mut commands: mpsc::UnboundedReceiver<String>) {
    while let Some(command) = commands.recv().await {
        debug!("[ENGINE] >> {}", command);
        if let Err(e) = write_line(&mut stdin, &command).await {
            warn!("[ENGINE] Failed to write to engine: {}", e);
            break;
        }
        if command == "quit" {
            break;
        }
    }
}

async fn write_line(stdin: &mut ChildStdin, line: &str) -> std::io::Result<()> {
    stdin.write_all(line.as_bytes()).await?;
    stdin.write_all(b"\n").await?;
    stdin.flush().await
}

async fn read_output(
    reader: BufReader<ChildStdout>,
    active: ActiveSlot,
    alive: Arc<AtomicBool>,
    ready: Sender<()>,
) {
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => dispatch_line(&line, &active, &ready),
            Ok(None) => break,
            Err(e) => {
                warn!("[ENGINE] Failed to read from engine: {}", e);
                break;
            }
        }
    }

    alive.store(false, Ordering::SeqCst);
    // Dropping the sender without a terminal update signals the disconnect
    if active.lock().take().is_some() {
        warn!("[ENGINE] Engine output closed during analysis");
    } else {
        info!("[ENGINE] Engine output closed");
    }
}

/// Route one engine line to the active mailbox
fn dispatch_line(line: &str, active: &Mutex<Option<ActiveStream>>, ready: &Sender<()>) {
    trace!("[ENGINE] << {}", line);

    match parse_one(line) {
        UciMessage::ReadyOk => {
            let _ = ready.try_send(());
        }
        UciMessage::UciOk => debug!("[ENGINE] Handshake complete"),
        UciMessage::Id {
            name: Some(name), ..
        } => info!("[ENGINE] Connected to {}", name),
        UciMessage::Info(attributes) => {
            let Some((score, pv)) = primary_line(&attributes) else {
                return;
            };
            let slot = active.lock();
            if let Some(stream) = slot.as_ref() {
                let update = EngineUpdate::Info {
                    score: score.map(|score| score.from_side_to_move(stream.turn)),
                    pv,
                };
                let _ = stream.sender.send(update);
            }
        }
        UciMessage::BestMove { best_move, .. } => finish_stream(active, to_move(&best_move)),
        // `bestmove (none)` and `bestmove 0000` fall outside the move grammar
        UciMessage::Unknown(..) if line.trim_start().starts_with("bestmove") => {
            finish_stream(active, None)
        }
        _ => {}
    }
}

/// Close the active stream with its terminal update
fn finish_stream(active: &Mutex<Option<ActiveStream>>, best: Option<UciMove>) {
    match active.lock().take() {
        Some(stream) => {
            let _ = stream.sender.send(EngineUpdate::BestMove(best));
        }
        None => debug!("[ENGINE] bestmove with no request in flight"),
    }
}

/// Score and principal variation of an `info` line
///
/// Returns `None` for secondary `multipv` lines and for progress lines that
/// carry neither a score nor a variation.
fn primary_line(attributes: &[UciInfoAttribute]) -> Option<(Option<Evaluation>, Vec<UciMove>)> {
    let mut score = None;
    let mut pv = Vec::new();

    for attribute in attributes {
        match attribute {
            UciInfoAttribute::MultiPv(n) if *n > 1 => return None,
            UciInfoAttribute::Score { cp, mate, .. } => {
                score = match (mate, cp) {
                    (Some(n), _) => Some(Evaluation::MateIn(i32::from(*n))),
                    (None, Some(cp)) => Some(Evaluation::CentiPawns(*cp)),
                    (None, None) => None,
                };
            }
            UciInfoAttribute::Pv(moves) => {
                pv = moves.iter().map_while(to_move).collect();
            }
            _ => {}
        }
    }

    if score.is_none() && pv.is_empty() {
        return None;
    }
    Some((score, pv))
}

fn to_move(mv: &vampirc_uci::UciMove) -> Option<UciMove> {
    match mv.to_string().parse::<UciMove>() {
        Ok(UciMove::Null) | Err(_) => None,
        Ok(mv) => Some(mv),
    }
}

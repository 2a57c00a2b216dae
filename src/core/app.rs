//! Frame loop
//!
//! [`App`] owns the board, the interaction state, the analysis session and
//! the two collaborators at the edges (input and rendering). Each
//! [`App::tick`] runs the same fixed sequence on one thread:
//!
//! 1. Poll input and apply every command in arrival order, expanding each
//!    into events under the orientation current at that point
//! 2. Drain engine updates into the analysis session
//! 3. Build a [`ViewSnapshot`](crate::rendering::ViewSnapshot)
//! 4. Hand the snapshot to the renderer
//!
//! No state is shared with the engine's threads, so a frame always sees a
//! consistent board and analysis.

use crate::core::error::{CoreError, CoreResult};
use crate::core::error_handling::handle_game_result;
use crate::core::frame_pacer::FramePacer;
use crate::game::ai::AnalysisSession;
use crate::game::interaction::Interaction;
use crate::game::rules::BoardState;
use crate::game::types::Point;
use crate::input::{
    command_for_key, pointer_action, BoardCommand, InputCommand, InputEvent, InputSource,
    PointerAction, PointerPhase,
};
use crate::rendering::{build_snapshot, BoardGeometry, Renderer};
use tracing::{debug, info};

/// The running board application
pub struct App<I: InputSource, R: Renderer> {
    board: BoardState,
    interaction: Interaction,
    analysis: AnalysisSession,
    geometry: BoardGeometry,
    input: I,
    renderer: R,
    running: bool,
    frames: u64,
}

impl<I: InputSource, R: Renderer> App<I, R> {
    pub fn new(
        board: BoardState,
        interaction: Interaction,
        analysis: AnalysisSession,
        input: I,
        renderer: R,
    ) -> Self {
        Self {
            board,
            interaction,
            analysis,
            geometry: BoardGeometry::default(),
            input,
            renderer,
            running: true,
            frames: 0,
        }
    }

    pub fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn analysis(&self) -> &AnalysisSession {
        &self.analysis
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame
    ///
    /// # Errors
    ///
    /// [`CoreError::Render`] when the renderer cannot write the frame.
    pub fn tick(&mut self) -> CoreResult<()> {
        for command in self.input.poll() {
            self.handle_input(command);
        }

        self.analysis.poll();

        let snapshot = build_snapshot(&self.board, &self.interaction, &self.analysis);
        self.renderer
            .render(&snapshot)
            .map_err(|source| CoreError::Render { source })?;
        self.frames += 1;
        Ok(())
    }

    /// Tick until the window closes, then shut the engine down
    pub fn run(&mut self, pacer: &mut FramePacer) -> CoreResult<()> {
        info!("[APP] Frame loop started at {:?} per frame", pacer.frame_time());
        let result = loop {
            if !self.running {
                break Ok(());
            }
            if let Err(e) = self.tick() {
                break Err(e);
            }
            pacer.wait();
        };

        self.shutdown();
        info!("[APP] Frame loop stopped after {} frames", self.frames);
        result
    }

    pub fn shutdown(&mut self) {
        self.running = false;
        self.interaction.cancel_hold();
        self.analysis.shutdown();
    }

    /// Expand one input command and apply its events
    ///
    /// Square-level commands are placed using the orientation at the moment
    /// they are handled, after any earlier flip in the same frame.
    pub fn handle_input(&mut self, command: InputCommand) {
        let events = command.to_events(&self.geometry, self.interaction.orientation());
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(point) => self.handle_pointer(PointerPhase::Down, point),
            InputEvent::PointerUp(point) => self.handle_pointer(PointerPhase::Up, point),
            InputEvent::PointerMoved(point) => self.interaction.set_pointer(point),
            InputEvent::KeyDown(key) => match command_for_key(key) {
                Some(command) => self.handle_command(command),
                None => debug!("[INPUT] Unbound key {:?}", key),
            },
            InputEvent::WindowClose => self.running = false,
        }
    }

    pub fn handle_command(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::Flip => self.interaction.flip(),
            BoardCommand::Reset => self.interaction.reset(&mut self.board, &mut self.analysis),
            BoardCommand::Undo => {
                handle_game_result(
                    self.interaction.undo(&mut self.board, &mut self.analysis),
                    "undo",
                );
            }
            BoardCommand::Analyze => self
                .interaction
                .request_analysis(&self.board, &mut self.analysis),
            BoardCommand::Quit => self.running = false,
        }
    }

    fn handle_pointer(&mut self, phase: PointerPhase, point: Point) {
        self.interaction.set_pointer(point);

        let square = self
            .geometry
            .square_at(point, self.interaction.orientation());
        let Some(square) = handle_game_result(square, "pointer") else {
            return;
        };

        match pointer_action(phase, square, self.interaction.state()) {
            PointerAction::PickUp(square) => {
                handle_game_result(self.interaction.pick_up(&self.board, square), "pick up");
            }
            PointerAction::Drop(square) => {
                handle_game_result(
                    self.interaction
                        .drop(&mut self.board, &mut self.analysis, square),
                    "drop",
                );
            }
            PointerAction::Ignore => {}
        }
    }
}

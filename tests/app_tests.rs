//! Frame Loop Integration Tests
//!
//! Runs [`App`] end to end with scripted input, the scripted engine and the
//! text renderer writing into memory.

use miniuci::core::{App, CoreError, FramePacer};
use miniuci::game::ai::{AnalysisPhase, ScriptedEngine, ScriptedHandle, SearchLimit};
use miniuci::game::{
    AnalysisSession, BoardState, Evaluation, Interaction, InteractionState, Orientation, Point,
};
use miniuci::input::{InputCommand, Key, ScriptedInput};
use miniuci::rendering::assets::{AssetCache, GlyphLoader};
use miniuci::rendering::{BoardGeometry, TextRenderer};
use shakmaty::{Color, Square};
use std::io::{self, Write};

type TestApp = App<ScriptedInput, TextRenderer<Vec<u8>>>;

fn app(frames: Vec<Vec<InputCommand>>) -> (TestApp, ScriptedHandle) {
    let (engine, handle) = ScriptedEngine::new();
    let app = App::new(
        BoardState::new(),
        Interaction::new(Orientation::WhiteBottom, SearchLimit::Depth(10)),
        AnalysisSession::new(Box::new(engine)),
        ScriptedInput::from_frames(frames),
        TextRenderer::new(Vec::new(), AssetCache::new(GlyphLoader::default())),
    );
    (app, handle)
}

fn status(app: &TestApp) -> String {
    app.renderer()
        .last_frame()
        .and_then(|frame| frame.lines().last())
        .unwrap_or_default()
        .to_string()
}

// ============================================================================
// Moves
// ============================================================================

#[test]
fn test_drag_plays_move() {
    let (mut app, _handle) = app(vec![vec![InputCommand::Drag(Square::E2, Square::E4)]]);

    app.tick().unwrap();

    assert_eq!(app.board().turn(), Color::Black);
    assert_eq!(app.board().move_count(), 1);
    assert_eq!(status(&app), "Black to move | eval -- | best none | idle");
}

#[test]
fn test_flip_then_click_in_one_frame() {
    //! A click queued behind a flip lands on the square under the new layout
    let (mut app, _handle) = app(vec![vec![
        InputCommand::Key(Key::Char('f')),
        InputCommand::Click(Square::E2),
    ]]);

    app.tick().unwrap();

    assert_eq!(app.interaction().orientation(), Orientation::BlackBottom);
    assert_eq!(app.interaction().state(), InteractionState::Holding(Square::E2));
}

#[test]
fn test_click_click_plays_move() {
    //! Pick up with one click, drop with the next
    let (mut app, _handle) = app(vec![
        vec![InputCommand::Click(Square::G1)],
        vec![InputCommand::Click(Square::F3)],
    ]);

    app.tick().unwrap();
    assert_eq!(app.interaction().state(), InteractionState::Holding(Square::G1));
    assert!(status(&app).contains("holding g1"));

    app.tick().unwrap();
    assert_eq!(app.interaction().state(), InteractionState::Idle);
    assert_eq!(app.board().move_count(), 1);
}

#[test]
fn test_off_board_release_keeps_hold() {
    let geometry = BoardGeometry::default();
    let e2 = geometry.screen_pos(Square::E2, Orientation::WhiteBottom);
    let (mut app, _handle) = app(vec![
        vec![InputCommand::Down(e2)],
        vec![InputCommand::Up(Point::new(5.0, 5.0))],
    ]);

    app.tick().unwrap();
    app.tick().unwrap();

    assert_eq!(app.interaction().state(), InteractionState::Holding(Square::E2));
    assert_eq!(app.board().move_count(), 0);
}

#[test]
fn test_illegal_drop_does_not_stop_the_loop() {
    let (mut app, _handle) = app(vec![
        vec![InputCommand::Drag(Square::E2, Square::E6)],
        vec![],
    ]);

    app.tick().unwrap();
    app.tick().unwrap();

    assert!(app.is_running());
    assert_eq!(app.board().move_count(), 0);
    assert_eq!(app.interaction().state(), InteractionState::Idle);
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_analysis_shows_up_in_frames() {
    let (mut app, handle) = app(vec![
        vec![InputCommand::Drag(Square::E2, Square::E4)],
        vec![InputCommand::Key(Key::Space)],
        vec![],
        vec![],
    ]);

    app.tick().unwrap();
    app.tick().unwrap();
    assert_eq!(app.analysis().phase(), AnalysisPhase::Requesting);
    assert!(status(&app).ends_with("| thinking"));

    // Black to move: the engine's score is already converted for White
    handle.info(Some(Evaluation::CentiPawns(-30)), &["c7c5", "g1f3"]);
    app.tick().unwrap();
    assert_eq!(
        status(&app),
        "Black to move | eval -0.30 | best c7c5 | thinking"
    );

    handle.finish(Some("e7e5"));
    app.tick().unwrap();
    assert_eq!(status(&app), "Black to move | eval -0.30 | best e7e5 | idle");

    let frame = app.renderer().last_frame().unwrap().to_string();
    assert!(frame.contains("[♟]"));
}

#[test]
fn test_move_during_analysis_cancels_it() {
    let (mut app, handle) = app(vec![
        vec![InputCommand::Key(Key::Space)],
        vec![InputCommand::Drag(Square::D2, Square::D4)],
    ]);

    app.tick().unwrap();
    handle.info(Some(Evaluation::CentiPawns(25)), &["e2e4"]);
    app.tick().unwrap();

    assert_eq!(handle.stop_count(), 1);
    assert_eq!(app.analysis().phase(), AnalysisPhase::Cancelling);
    assert!(app.analysis().best_move().is_none());

    // The +0.25 belonged to the starting position
    assert_eq!(app.analysis().evaluation(), None);
    assert_eq!(
        status(&app),
        "Black to move | eval -- | best none | thinking"
    );
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_flip_undo_and_reset_keys() {
    let (mut app, _handle) = app(vec![
        vec![InputCommand::Drag(Square::E2, Square::E4)],
        vec![InputCommand::Drag(Square::E7, Square::E5)],
        vec![InputCommand::Key(Key::Left)],
        vec![InputCommand::Key(Key::Char('f'))],
        vec![InputCommand::Key(Key::Char('r'))],
    ]);

    app.tick().unwrap();
    app.tick().unwrap();
    assert_eq!(app.board().move_count(), 2);

    app.tick().unwrap();
    assert_eq!(app.board().move_count(), 1);

    app.tick().unwrap();
    assert_eq!(app.interaction().orientation(), Orientation::BlackBottom);

    app.tick().unwrap();
    assert_eq!(app.board().move_count(), 0);
    assert_eq!(app.interaction().orientation(), Orientation::BlackBottom);
}

#[test]
fn test_quit_key_stops_the_loop() {
    let (mut app, _handle) = app(vec![vec![InputCommand::Key(Key::Char('q'))]]);
    app.tick().unwrap();
    assert!(!app.is_running());
}

// ============================================================================
// Run and Shutdown
// ============================================================================

#[test]
fn test_run_until_script_ends() {
    //! The script's end closes the window; the engine is told to quit
    let (mut app, handle) = app(vec![
        vec![InputCommand::Key(Key::Space)],
        vec![InputCommand::Drag(Square::E2, Square::E4)],
    ]);

    app.run(&mut FramePacer::new(1000)).unwrap();

    assert!(!app.is_running());
    assert_eq!(app.frames(), 3);
    assert!(handle.is_quit());
    assert!(!app.analysis().is_analyzing());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_render_failure_is_reported() {
    let (engine, handle) = ScriptedEngine::new();
    let mut app = App::new(
        BoardState::new(),
        Interaction::default(),
        AnalysisSession::new(Box::new(engine)),
        ScriptedInput::from_frames(vec![vec![]]),
        TextRenderer::new(BrokenPipe, AssetCache::new(GlyphLoader::default())),
    );

    let result = app.run(&mut FramePacer::new(1000));

    assert!(matches!(result, Err(CoreError::Render { .. })));
    assert!(handle.is_quit());
}

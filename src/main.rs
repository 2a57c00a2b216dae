use anyhow::{Context, Result};
use clap::Parser;
use miniuci::core::settings_persistence::{
    default_save_path, load_or_default, resolve_settings_path, save_settings,
};
use miniuci::core::{init_tracing, App, Cli, FramePacer};
use miniuci::game::ai::UciEngine;
use miniuci::game::{AnalysisSession, BoardState, Interaction};
use miniuci::input::StdinInput;
use miniuci::rendering::assets::{AssetCache, GlyphLoader};
use miniuci::rendering::TextRenderer;
use std::time::Duration;
use tracing::info;

/// How long the engine gets to answer `isready`
const ENGINE_READY_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let settings_path = resolve_settings_path(cli.config.as_deref());
    let mut settings = load_or_default(&settings_path);
    settings.apply_cli(&cli);

    if cli.save_config {
        let path = cli.config.clone().unwrap_or_else(default_save_path);
        save_settings(&settings, &path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
    }

    let limit = settings.search_limit()?;
    let board = match &settings.fen {
        Some(fen) => BoardState::from_fen(fen)?,
        None => BoardState::new(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("engine-io")
        .enable_all()
        .build()
        .context("failed to build the engine runtime")?;

    let engine = UciEngine::spawn(&settings.engine, runtime.handle())
        .with_context(|| format!("failed to start engine '{}'", settings.engine))?;
    engine
        .wait_ready(ENGINE_READY_TIMEOUT)
        .with_context(|| format!("engine '{}' did not become ready", settings.engine))?;
    info!("[ENGINE] {} ready, analysing with {}", settings.engine, limit);

    let input = StdinInput::spawn().context("failed to start the input reader")?;
    let renderer = TextRenderer::new(
        std::io::stdout(),
        AssetCache::new(GlyphLoader::new(settings.assets.clone())),
    )
    .with_clear_screen(true);

    let mut app = App::new(
        board,
        Interaction::new(settings.orientation, limit),
        AnalysisSession::new(Box::new(engine)),
        input,
        renderer,
    );
    app.run(&mut FramePacer::new(settings.fps))?;

    Ok(())
}

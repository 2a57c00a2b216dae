//! Core module - application infrastructure around the board
//!
//! Holds everything that is not chess: the frame loop, settings, logging,
//! frame pacing and the error plumbing shared by the binary.
//!
//! # Architecture Overview
//!
//! ## Frame Loop
//!
//! [`App`] owns the board, interaction state and analysis session together
//! with an input source and a renderer. One [`App::tick`] polls input,
//! drains engine updates, builds a snapshot and renders it. [`FramePacer`]
//! keeps the loop at the configured frame rate.
//!
//! ## Settings
//!
//! | Source | Module | Precedence |
//! |--------|--------|------------|
//! | `settings.json` | `settings_persistence` | lowest |
//! | command line | `settings` ([`Cli`]) | highest |
//!
//! ## Errors
//!
//! - [`CoreError`] covers settings I/O, serialization, invalid limits and
//!   render failures
//! - [`handle_game_result`] logs recoverable game errors and carries on
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use miniuci::core::{init_tracing, App, FramePacer};
//!
//! init_tracing();
//! let mut app = App::new(board, interaction, analysis, input, renderer);
//! app.run(&mut FramePacer::new(60))?;
//! ```

pub mod app;
pub mod error;
pub mod error_handling;
pub mod frame_pacer;
pub mod logging;
pub mod settings;
pub mod settings_persistence;

// Re-export commonly used items
pub use app::App;
pub use error::{CoreError, CoreResult};
pub use error_handling::handle_game_result;
pub use frame_pacer::{FramePacer, DEFAULT_FPS};
pub use logging::init_tracing;
pub use settings::{Cli, LimitSetting, Settings, DEFAULT_ENGINE};

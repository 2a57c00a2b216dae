//! Input module - event sources and gesture translation
//!
//! Input arrives as [`InputCommand`]s from an [`InputSource`]; the frame
//! loop expands them into screen-space [`InputEvent`]s, maps pointer events to squares through the board geometry
//! and then through [`pointer_action`]; key events go through
//! [`command_for_key`].
//!
//! # Architecture
//!
//! - `events` - [`InputEvent`] and [`Key`]
//! - `pointer` - Pointer down/up to pick-up/drop translation
//! - `keyboard` - Key bindings to [`BoardCommand`]s
//! - `source` - [`InputSource`] trait, text commands, [`ScriptedInput`]
//! - `stdin` - [`StdinInput`], commands typed on standard input

pub mod events;
pub mod keyboard;
pub mod pointer;
pub mod source;
pub mod stdin;

// Re-export commonly used items
pub use events::{InputEvent, Key};
pub use keyboard::{command_for_key, BoardCommand};
pub use pointer::{pointer_action, PointerAction, PointerPhase};
pub use source::{parse_command, InputCommand, InputSource, ScriptedInput};
pub use stdin::StdinInput;

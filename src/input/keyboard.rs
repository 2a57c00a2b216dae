//! Key bindings
//!
//! | Key          | Command  |
//! |--------------|----------|
//! | `f`          | Flip     |
//! | `r`          | Reset    |
//! | `Left`       | Undo     |
//! | `Space`      | Analyze  |
//! | `Escape`/`q` | Quit     |

use crate::input::events::Key;

/// Board-level command bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardCommand {
    Flip,
    Reset,
    Undo,
    Analyze,
    Quit,
}

/// Command bound to `key`, if any
pub fn command_for_key(key: Key) -> Option<BoardCommand> {
    match key {
        Key::Char('f') | Key::Char('F') => Some(BoardCommand::Flip),
        Key::Char('r') | Key::Char('R') => Some(BoardCommand::Reset),
        Key::Left => Some(BoardCommand::Undo),
        Key::Space => Some(BoardCommand::Analyze),
        Key::Escape | Key::Char('q') | Key::Char('Q') => Some(BoardCommand::Quit),
        _ => None,
    }
}

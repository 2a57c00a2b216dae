//! Input events delivered to the frame loop

use crate::game::types::Point;
use std::str::FromStr;

/// Keys the board reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Space,
    Escape,
}

impl FromStr for Key {
    type Err = String;

    /// Parse a key name such as `f`, `left`, `space` or `esc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            "space" | " " => Ok(Key::Space),
            "esc" | "escape" => Ok(Key::Escape),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(format!("unknown key '{}'", s)),
                }
            }
        }
    }
}

/// One input event, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerUp(Point),
    PointerMoved(Point),
    KeyDown(Key),
    WindowClose,
}

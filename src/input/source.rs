//! Input sources and the text command language
//!
//! Every source produces [`InputCommand`]s. The frame loop expands each one
//! into screen-space [`InputEvent`]s just before handling it, so square-level
//! commands such as `click e2` land on the square's centre under the
//! orientation in effect at that moment, and then go through exactly the
//! same translation as real pointer input.
//!
//! # Command Language
//!
//! | Command        | Events                                 |
//! |----------------|----------------------------------------|
//! | `down X Y`     | pointer down at `(X, Y)`               |
//! | `up X Y`       | pointer up at `(X, Y)`                 |
//! | `move X Y`     | pointer moved to `(X, Y)`              |
//! | `click e2`     | down and up on e2                      |
//! | `drag e2 e4`   | down on e2, move and up on e4          |
//! | `key f`        | key press (`left`, `space`, `esc`, ...)|
//! | `quit`         | window close                           |

use crate::game::types::{Orientation, Point};
use crate::input::events::{InputEvent, Key};
use crate::rendering::board::coordinates::BoardGeometry;
use shakmaty::Square;
use std::collections::VecDeque;

/// Anything that can be polled for input once per frame
pub trait InputSource {
    /// Commands that arrived since the last poll, in order; never blocks
    fn poll(&mut self) -> Vec<InputCommand>;
}

/// One parsed text command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    Down(Point),
    Up(Point),
    Move(Point),
    Click(Square),
    Drag(Square, Square),
    Key(Key),
    Quit,
}

fn parse_point(x: Option<&str>, y: Option<&str>) -> Result<Point, String> {
    let x = x.ok_or("missing x coordinate")?;
    let y = y.ok_or("missing y coordinate")?;
    let x: f32 = x.parse().map_err(|_| format!("bad x coordinate '{}'", x))?;
    let y: f32 = y.parse().map_err(|_| format!("bad y coordinate '{}'", y))?;
    Ok(Point::new(x, y))
}

fn parse_square(token: Option<&str>) -> Result<Square, String> {
    let token = token.ok_or("missing square")?;
    token
        .parse()
        .map_err(|_| format!("bad square '{}'", token))
}

/// Parse one line of the command language
pub fn parse_command(line: &str) -> Result<InputCommand, String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().ok_or("empty command")?;

    match command.to_ascii_lowercase().as_str() {
        "down" => parse_point(parts.next(), parts.next()).map(InputCommand::Down),
        "up" => parse_point(parts.next(), parts.next()).map(InputCommand::Up),
        "move" => parse_point(parts.next(), parts.next()).map(InputCommand::Move),
        "click" => parse_square(parts.next()).map(InputCommand::Click),
        "drag" => {
            let from = parse_square(parts.next())?;
            let to = parse_square(parts.next())?;
            Ok(InputCommand::Drag(from, to))
        }
        "key" => parts
            .next()
            .ok_or_else(|| "missing key".to_string())?
            .parse()
            .map(InputCommand::Key),
        "quit" | "exit" => Ok(InputCommand::Quit),
        other => Err(format!("unknown command '{}'", other)),
    }
}

impl InputCommand {
    /// Expand into screen-space events for the current layout
    pub fn to_events(&self, geometry: &BoardGeometry, orientation: Orientation) -> Vec<InputEvent> {
        match *self {
            InputCommand::Down(point) => vec![InputEvent::PointerDown(point)],
            InputCommand::Up(point) => vec![InputEvent::PointerUp(point)],
            InputCommand::Move(point) => vec![InputEvent::PointerMoved(point)],
            InputCommand::Click(square) => {
                let centre = geometry.screen_pos(square, orientation);
                vec![InputEvent::PointerDown(centre), InputEvent::PointerUp(centre)]
            }
            InputCommand::Drag(from, to) => {
                let start = geometry.screen_pos(from, orientation);
                let end = geometry.screen_pos(to, orientation);
                vec![
                    InputEvent::PointerDown(start),
                    InputEvent::PointerMoved(end),
                    InputEvent::PointerUp(end),
                ]
            }
            InputCommand::Key(key) => vec![InputEvent::KeyDown(key)],
            InputCommand::Quit => vec![InputEvent::WindowClose],
        }
    }
}

/// Replays a fixed list of frames, one per poll
///
/// Once the script runs out every poll returns a single `Quit`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputCommand>>,
}

impl ScriptedInput {
    /// One command per frame
    pub fn new(commands: impl IntoIterator<Item = InputCommand>) -> Self {
        Self::from_frames(commands.into_iter().map(|command| vec![command]))
    }

    /// Explicit frames; an empty frame is a tick with no input
    pub fn from_frames(frames: impl IntoIterator<Item = Vec<InputCommand>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputCommand> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputCommand::Quit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("down 100 250.5"),
            Ok(InputCommand::Down(Point::new(100.0, 250.5)))
        );
        assert_eq!(parse_command("click e2"), Ok(InputCommand::Click(Square::E2)));
        assert_eq!(
            parse_command("drag g1 f3"),
            Ok(InputCommand::Drag(Square::G1, Square::F3))
        );
        assert_eq!(parse_command("key left"), Ok(InputCommand::Key(Key::Left)));
        assert_eq!(parse_command("quit"), Ok(InputCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("down 10").is_err());
        assert!(parse_command("click z9").is_err());
        assert!(parse_command("jump e2").is_err());
    }

    #[test]
    fn test_click_lands_on_square_centre() {
        let geometry = BoardGeometry::default();
        let events = InputCommand::Click(Square::A1).to_events(&geometry, Orientation::WhiteBottom);
        let centre = Point::new(80.0, 600.0);
        assert_eq!(
            events,
            vec![InputEvent::PointerDown(centre), InputEvent::PointerUp(centre)]
        );
    }

    #[test]
    fn test_click_follows_orientation() {
        //! The same square lands on mirrored pixels once the board is flipped
        let geometry = BoardGeometry::default();
        let white = InputCommand::Click(Square::E2).to_events(&geometry, Orientation::WhiteBottom);
        let black = InputCommand::Click(Square::E2).to_events(&geometry, Orientation::BlackBottom);

        assert_ne!(white, black);
        let InputEvent::PointerDown(point) = black[0] else {
            panic!("expected pointer down");
        };
        assert_eq!(geometry.square_at(point, Orientation::BlackBottom), Ok(Square::E2));
    }

    #[test]
    fn test_scripted_input_closes_when_exhausted() {
        let mut input = ScriptedInput::from_frames(vec![vec![], vec![InputCommand::Key(Key::Space)]]);

        assert!(input.poll().is_empty());
        assert_eq!(input.poll(), vec![InputCommand::Key(Key::Space)]);
        assert_eq!(input.poll(), vec![InputCommand::Quit]);
        assert_eq!(input.remaining(), 0);
    }
}

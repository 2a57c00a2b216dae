//! Line-based input from standard input
//!
//! A background thread reads commands (see [`crate::input::source`]) and
//! hands them to the frame loop through a channel. End of input closes the
//! window.

use crate::input::source::{parse_command, InputCommand, InputSource};
use crossbeam_channel::{Receiver, Sender};
use std::io::{self, BufRead};
use std::thread;
use tracing::{debug, warn};

/// Input source fed by a reader thread
pub struct StdinInput {
    commands: Receiver<InputCommand>,
}

impl StdinInput {
    /// Read commands from the process's standard input
    pub fn spawn() -> io::Result<Self> {
        Self::from_reader(io::BufReader::new(io::stdin()))
    }

    /// Read commands from any buffered reader on a background thread
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> io::Result<Self> {
        let (sender, commands) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || read_commands(reader, sender))?;
        Ok(Self { commands })
    }
}

fn read_commands<R: BufRead>(reader: R, sender: Sender<InputCommand>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("[INPUT] Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                debug!("[INPUT] {:?}", command);
                if sender.send(command).is_err() {
                    return;
                }
            }
            Err(e) => warn!("[INPUT] Ignoring '{}': {}", line.trim(), e),
        }
    }
    let _ = sender.send(InputCommand::Quit);
}

impl InputSource for StdinInput {
    fn poll(&mut self) -> Vec<InputCommand> {
        self.commands.try_iter().collect()
    }
}

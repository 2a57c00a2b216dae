//! Fixed-rate frame pacing
//!
//! The frame loop calls [`FramePacer::wait`] once per tick. Whatever is left
//! of the frame budget after input, state updates and rendering is slept
//! away; a frame that overruns its budget is not slept at all.

use std::thread;
use std::time::{Duration, Instant};

/// Default frame rate of the board window
pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_time: Duration,
    frame_start: Instant,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FramePacer {
    /// Pacer for `fps` frames per second; zero is treated as one
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Time left in the frame budget after `elapsed`
    pub fn slack(&self, elapsed: Duration) -> Duration {
        self.frame_time.saturating_sub(elapsed)
    }

    /// Sleep out the rest of the current frame and start the next one
    ///
    /// Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let slack = self.slack(self.frame_start.elapsed());
        if !slack.is_zero() {
            thread::sleep(slack);
        }
        self.frame_start = Instant::now();
        slack
    }
}

//! Frame pacing for the cooperative game loop.
//!
//! The loop renders, sleeps until the frame deadline, drains input and then
//! applies gravity with the time that actually passed. [`FramePacer`] owns the
//! deadline and turns wall-clock time into whole milliseconds for
//! `Session::tick`, carrying the sub-millisecond remainder to the next frame.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    last_tick: Instant,
    deadline: Instant,
    carry_us: u128,
}

impl FramePacer {
    /// Pacer targeting `fps` frames per second (at least 1).
    pub fn new(fps: u32, now: Instant) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            last_tick: now,
            deadline: now + frame,
            carry_us: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left before the current frame's deadline.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Sleep until the frame deadline. Returns immediately when already late.
    pub fn wait(&self) {
        let left = self.remaining(Instant::now());
        if !left.is_zero() {
            std::thread::sleep(left);
        }
    }

    /// Close the frame at `now` and start the next one.
    ///
    /// Returns the whole milliseconds elapsed since the previous tick.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.deadline = now + self.frame;

        let total_us = elapsed.as_micros() + self.carry_us;
        self.carry_us = total_us % 1000;
        u32::try_from(total_us / 1000).unwrap_or(u32::MAX)
    }
}

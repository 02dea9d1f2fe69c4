//! Fixed-tick pacing and per-tick outcome reporting.
//!
//! The interactive loop and the tests both drive the session one tick at a
//! time; `TickOutcome` tells the caller what happened without the caller
//! having to diff session state.

use std::time::{Duration, Instant};

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The world was simulated this tick (Playing and armed).
    pub simulated: bool,
    /// Terrain pairs that scrolled off the left edge (points scored).
    pub pairs_passed: u32,
    /// The speed level went up this tick.
    pub speed_level_up: bool,
    /// The player hit terrain; the session is now in GameOver.
    pub crashed: bool,
    /// The crash set a new high score.
    pub new_high_score: bool,
}

/// Wall-clock rate limiter for the tick loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick boundary, zero if it has passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Move the deadline forward after a tick that ended at `now`.
    ///
    /// A loop running more than one interval late resynchronises to `now`
    /// instead of bursting through the missed ticks.
    pub fn advance(&mut self, now: Instant) {
        self.next_tick += self.interval;
        if now > self.next_tick + self.interval {
            self.next_tick = now + self.interval;
        }
    }

    /// Sleep until the next tick boundary.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}

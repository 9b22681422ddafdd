//! Frame time model.
//!
//! # Design
//!
//! Simulation time is a monotonically increasing `Tick` counter, one per
//! scheduler iteration (a "frame").  Wall-clock pacing is the scheduler's
//! job; this module only holds the integer arithmetic it needs:
//!
//! - [`frame_budget`]: the wall-clock slot of one frame, `1000 / fps` ms.
//! - [`Cadence`]: "every N frames" gating for the actor-update phase.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
///
/// The scheduler advances it at the *start* of each iteration, so the first
/// frame it runs is `Tick(1)`; `Tick::ZERO` is the initial draw before the
/// loop begins.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following frame.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Cadence ───────────────────────────────────────────────────────────────────

/// Runs something once every `interval` frames.
///
/// A frame is due when `tick % interval == 0`.  With frames counted from 1,
/// an interval of 6 fires on frames 6, 12, 18, …; an interval of 1 fires on
/// every frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cadence {
    interval: u64,
}

impl Cadence {
    pub const EVERY_FRAME: Cadence = Cadence { interval: 1 };

    /// A cadence firing every `interval` frames.  An interval of 0 is
    /// treated as 1.
    pub fn every(interval: u64) -> Self {
        Self { interval: interval.max(1) }
    }

    #[inline]
    pub fn interval(self) -> u64 {
        self.interval
    }

    #[inline]
    pub fn is_due(self, tick: Tick) -> bool {
        tick.0.is_multiple_of(self.interval)
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::EVERY_FRAME
    }
}

// ── Frame budget ──────────────────────────────────────────────────────────────

/// Wall-clock budget of one frame at `fps` frames per second.
///
/// Integer milliseconds, so 20 fps gives exactly 50 ms and 30 fps gives
/// 33 ms.  `fps == 0` yields a zero budget (no pacing); `SimConfig::validate`
/// rejects that configuration before it reaches the scheduler.
pub fn frame_budget(fps: u32) -> Duration {
    match fps {
        0 => Duration::ZERO,
        fps => Duration::from_millis(1_000 / fps as u64),
    }
}

//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Tick `n` is the
//! moment each car executes the `n`-th character (0-based) of its command
//! string.  Human-facing reports use the 1-based *step* number instead, see
//! [`Tick::step`].

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// 1-based step number of this tick, as reported to users.
    #[inline]
    pub fn step(self) -> u64 {
        self.0 + 1
    }

    /// Cast to `usize` for indexing into a command string.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Tunables that do not change simulation outcomes.
///
/// The number of ticks is not configured: a run always lasts as long as the
/// longest command string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Emit an observer snapshot every N ticks.  1 = every tick; 0 disables
    /// snapshots entirely.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// `true` if a snapshot is due after processing `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { output_interval_ticks: 1 }
    }
}

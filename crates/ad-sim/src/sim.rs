//! The `Sim` struct and its tick loop.

use ad_car::{CarOutcome, CarStore};
use ad_core::{Bounds, SimConfig, Tick};
use tracing::info;

use crate::resolver::{self, TickReport};
use crate::{NoopObserver, SimObserver};

/// The simulation runner.
///
/// `Sim` owns the field bounds and every car for the lifetime of one run.
/// There is no partial reset: to start over, build a new `Sim`.
///
/// Each tick is resolved in two phases (see the crate docs): intents are
/// computed for all eligible cars from pre-tick state, then committed in a
/// single sequential pass.  A committed tick is never revisited.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug, Clone)]
pub struct Sim {
    /// Observer-facing configuration (snapshot interval).
    pub config: SimConfig,

    bounds:    Bounds,
    cars:      CarStore,
    clock:     Tick,
    max_ticks: u64,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, bounds: Bounds, cars: CarStore) -> Self {
        let max_ticks = cars.max_ticks();
        Self {
            config,
            bounds,
            cars,
            clock: Tick::ZERO,
            max_ticks,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run every remaining tick with no observer.
    pub fn run(&mut self) {
        self.run_with(&mut NoopObserver);
    }

    /// Run from the current tick until every command string is used up.
    ///
    /// Calls observer hooks at every tick boundary and `on_sim_end` once at
    /// the end.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) {
        while self.step_with(observer).is_some() {}
        observer.on_sim_end(self.clock);
        info!(
            ticks = self.clock.0,
            cars = self.cars.len(),
            active = self.cars.active_count(),
            "simulation complete",
        );
    }

    /// Run at most `n` ticks from the current position.
    ///
    /// Useful for tests and incremental stepping.  Does not call `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.step_with(observer).is_none() {
                break;
            }
        }
    }

    /// Resolve exactly one tick.  Returns `false` once the run is finished.
    pub fn step(&mut self) -> bool {
        self.step_with(&mut NoopObserver).is_some()
    }

    /// Resolve exactly one tick with observer callbacks.
    ///
    /// Returns the tick's report, or `None` if the run is already finished.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> Option<TickReport> {
        if self.is_finished() {
            return None;
        }
        let now = self.clock;

        observer.on_tick_start(now);
        let report = resolver::resolve_tick(&mut self.cars, self.bounds, now);
        for event in &report.collisions {
            observer.on_collision(event, &self.cars);
        }
        observer.on_tick_end(now, report.intents);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.cars);
        }

        self.clock = self.clock + 1;
        Some(report)
    }

    // ── Read-only state ───────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn cars(&self) -> &CarStore {
        &self.cars
    }

    /// Next tick to be resolved.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    /// Total ticks in this run: the longest command string, 0 with no cars.
    #[inline]
    pub fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.clock.0 >= self.max_ticks
    }

    /// Outcome of every car, paired with its name, in insertion order.
    pub fn outcomes(&self) -> Vec<(String, CarOutcome)> {
        self.cars.outcomes()
    }
}

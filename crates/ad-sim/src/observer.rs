//! Simulation observer trait for progress reporting and data collection.

use ad_car::CarStore;
use ad_core::Tick;

use crate::CollisionEvent;

/// Callbacks invoked by [`Sim::run_with`][crate::Sim::run_with] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — collision printer
///
/// ```rust,ignore
/// struct CrashPrinter;
///
/// impl SimObserver for CrashPrinter {
///     fn on_collision(&mut self, event: &CollisionEvent, _cars: &CarStore) {
///         println!("step {}: {} cars at {}", event.tick.step(), event.cars.len(), event.position);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per collision group, after the tick's commit phase.
    ///
    /// `cars` already reflects the committed tick.
    fn on_collision(&mut self, _event: &CollisionEvent, _cars: &CarStore) {}

    /// Called at the end of each tick.
    ///
    /// `intents` is the number of cars that executed a command this tick.
    fn on_tick_end(&mut self, _tick: Tick, _intents: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to every car so that output writers can
    /// record positions without the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &CarStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run_with`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

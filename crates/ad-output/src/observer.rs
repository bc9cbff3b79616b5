//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ad_car::CarStore;
use ad_core::Tick;
use ad_sim::{CollisionEvent, SimObserver};

use crate::row::{CarSnapshotRow, CollisionRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes car snapshots and collisions to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_with()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run_with()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_collision(&mut self, event: &CollisionEvent, cars: &CarStore) {
        let row = CollisionRow {
            step: event.tick.step(),
            x:    event.position.x,
            y:    event.position.y,
            cars: event
                .cars
                .iter()
                .filter_map(|&id| cars.get(id).map(|c| c.name().to_owned()))
                .collect(),
        };
        let result = self.writer.write_collision(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &CarStore) {
        let rows: Vec<CarSnapshotRow> = cars
            .iter()
            .map(|(_, car)| CarSnapshotRow {
                tick:      tick.0,
                car:       car.name().to_owned(),
                x:         car.position().x,
                y:         car.position().y,
                direction: car.direction().letter(),
                active:    car.is_active(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `car_snapshots.csv`
//! - `collisions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarSnapshotRow, CollisionRow, OutputResult};

/// Separator between car names in the `cars` column of `collisions.csv`.
const CAR_SEPARATOR: &str = ";";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    collisions: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("car_snapshots.csv"))?;
        snapshots.write_record(["tick", "car", "x", "y", "direction", "active"])?;

        let mut collisions = Writer::from_path(dir.join("collisions.csv"))?;
        collisions.write_record(["step", "x", "y", "cars"])?;

        Ok(Self {
            snapshots,
            collisions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.car.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.direction.to_string(),
                (row.active as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_collision(&mut self, row: &CollisionRow) -> OutputResult<()> {
        self.collisions.write_record(&[
            row.step.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.cars.join(CAR_SEPARATOR),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.collisions.flush()?;
        Ok(())
    }
}

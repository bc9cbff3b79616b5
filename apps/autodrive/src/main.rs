//! autodrive — interactive auto driving car simulation.
//!
//! Prompts for a field size and a list of cars, runs every car's command
//! string in lock-step and reports where each car ended up or which cars it
//! collided with.
//!
//! ```text
//! autodrive [--csv-dir <DIR>] [--json]
//! ```
//!
//! Set `RUST_LOG=debug` to see per-collision logs on stderr.

mod input;
mod report;
mod session;

#[cfg(test)]
mod tests;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use session::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "autodrive", version, about = "Auto driving car simulation on a bounded grid")]
struct Cli {
    /// Write `car_snapshots.csv` and `collisions.csv` to this directory after each run.
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,

    /// Print final car outcomes as JSON after the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let options = SessionOptions {
        csv_dir: cli.csv_dir,
        json:    cli.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), options).run()
}

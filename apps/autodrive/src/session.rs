//! The interactive menu loop.
//!
//! A [`Session`] reads one line per prompt from any `BufRead` and writes
//! prompts and results to any `Write`, so tests can drive it with in-memory
//! buffers.  End of input ends the session cleanly at any prompt.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use ad_core::Bounds;
use ad_output::{CsvWriter, OutputError, SimOutputObserver};
use ad_sim::{CarSpec, Sim, SimBuilder};
use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::input::{self, InputResult};
use crate::report;

/// Where run results go besides the text report.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Write `car_snapshots.csv` and `collisions.csv` here after each run.
    pub csv_dir: Option<PathBuf>,
    /// Print the final outcomes as JSON after the text report.
    pub json:    bool,
}

/// What the user chose after a run.
enum AfterRun {
    StartOver,
    Exit,
}

pub struct Session<R, W> {
    input:   R,
    out:     W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, options: SessionOptions) -> Self {
        Self { input, out, options }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run sessions until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "Welcome to Auto Driving Car Simulation!\n")?;

            let Some(bounds) = self.prompt_field()? else { return Ok(()) };
            let Some(builder) = self.main_menu(SimBuilder::new(bounds))? else { return Ok(()) };
            self.simulate(builder)?;

            match self.after_run_menu()? {
                Some(AfterRun::StartOver) => debug!("starting over"),
                Some(AfterRun::Exit) => {
                    writeln!(self.out, "Thank you for running the simulation. Goodbye!")?;
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
    }

    // ── Prompts ───────────────────────────────────────────────────────────

    fn prompt_field(&mut self) -> Result<Option<Bounds>> {
        let Some(bounds) = self.prompt_until(
            "Please enter the width and height of the simulation field in x y format: ",
            input::parse_field,
        )?
        else {
            return Ok(None);
        };
        writeln!(self.out, "You have created a field of {bounds}.\n")?;
        Ok(Some(bounds))
    }

    /// `[1] Add a car` / `[2] Run simulation` until a run is requested with
    /// at least one car queued.
    fn main_menu(&mut self, mut builder: SimBuilder) -> Result<Option<SimBuilder>> {
        loop {
            writeln!(self.out, "\nPlease choose from the following options:")?;
            writeln!(self.out, "[1] Add a car to field")?;
            writeln!(self.out, "[2] Run simulation")?;
            let Some(choice) = self.read_line()? else { return Ok(None) };

            match choice.trim() {
                "1" => {
                    let Some(spec) = self.prompt_car(&builder)? else { return Ok(None) };
                    builder = builder.spec(spec);
                    self.display_cars(builder.cars())?;
                }
                "2" if builder.cars().is_empty() => {
                    writeln!(self.out, "No cars to simulate. Please add at least one car.")?;
                }
                "2" => {
                    self.display_cars(builder.cars())?;
                    return Ok(Some(builder));
                }
                _ => writeln!(self.out, "Invalid option. Please choose 1 or 2.")?,
            }
        }
    }

    fn prompt_car(&mut self, builder: &SimBuilder) -> Result<Option<CarSpec>> {
        let bounds = builder.bounds();

        let Some(name) = self.prompt_until("Please enter the name of the car: \n", |line| {
            input::parse_name(line, builder.cars())
        })?
        else {
            return Ok(None);
        };

        let prompt = format!("Please enter initial position of car {name} in x y Direction format:\n");
        let Some((position, direction)) =
            self.prompt_until(&prompt, |line| input::parse_position(line, bounds))?
        else {
            return Ok(None);
        };

        let prompt = format!("Please enter the commands for the car {name}:\n");
        let Some(commands) = self.prompt_until(&prompt, input::parse_commands)? else {
            return Ok(None);
        };

        let spec = CarSpec { name, position, direction, commands };
        builder.check(&spec).context("validated car rejected by builder")?;
        Ok(Some(spec))
    }

    fn after_run_menu(&mut self) -> Result<Option<AfterRun>> {
        loop {
            writeln!(self.out, "\nPlease choose from the following options:")?;
            writeln!(self.out, "[1] Start over")?;
            writeln!(self.out, "[2] Exit")?;
            let Some(choice) = self.read_line()? else { return Ok(None) };

            match choice.trim() {
                "1" => return Ok(Some(AfterRun::StartOver)),
                "2" => return Ok(Some(AfterRun::Exit)),
                _ => writeln!(self.out, "Invalid option. Please choose 1 or 2.")?,
            }
        }
    }

    // ── Running ───────────────────────────────────────────────────────────

    fn simulate(&mut self, builder: SimBuilder) -> Result<()> {
        let mut sim = builder.build()?;
        info!(cars = sim.cars().len(), ticks = sim.max_ticks(), bounds = %sim.bounds(), "running simulation");

        let output_error = match &self.options.csv_dir {
            Some(dir) => run_with_csv(&mut sim, dir)?,
            None => {
                sim.run();
                None
            }
        };

        let outcomes = sim.outcomes();
        writeln!(self.out, "\nAfter simulation, the result is:")?;
        for (name, outcome) in &outcomes {
            writeln!(self.out, "{}", report::outcome_line(name, outcome))?;
        }
        if self.options.json {
            writeln!(self.out, "{}", report::outcomes_json(&outcomes)?)?;
        }
        if let Some(e) = output_error {
            error!(error = %e, "csv output incomplete");
            writeln!(self.out, "output error: {e}")?;
        }
        Ok(())
    }

    // ── Line I/O ──────────────────────────────────────────────────────────

    fn display_cars(&mut self, cars: &[CarSpec]) -> Result<()> {
        writeln!(self.out, "\nYour current list of cars are:")?;
        for spec in cars {
            writeln!(self.out, "{}", report::car_line(spec))?;
        }
        Ok(())
    }

    /// Show `prompt` and re-ask until `parse` accepts the line.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> InputResult<T>,
    ) -> Result<Option<T>> {
        loop {
            write!(self.out, "{prompt}")?;
            let Some(line) = self.read_line()? else { return Ok(None) };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// Run `sim` with CSV output into `dir`.  A failure to create the files is
/// returned as an error; a failed write during the run comes back as the
/// stored [`OutputError`].
fn run_with_csv(sim: &mut Sim, dir: &Path) -> Result<Option<OutputError>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let writer = CsvWriter::new(dir)?;
    let mut obs = SimOutputObserver::new(writer);
    sim.run_with(&mut obs);
    Ok(obs.take_error())
}

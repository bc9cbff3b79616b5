//! Fluent builder for constructing a [`Sim`].

use ad_car::{Car, CarStore};
use ad_core::{Bounds, Command, Direction, Position, SimConfig};

use crate::{Sim, SimError, SimResult};

/// Everything needed to place one car on the field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSpec {
    pub name:      String,
    pub position:  Position,
    pub direction: Direction,
    pub commands:  String,
}

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Bounds`] — field width and height
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                 |
/// |----------------|-------------------------|
/// | `.config(c)`   | `SimConfig::default()`  |
/// | `.car(..)`     | no cars                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(Bounds::new(10, 10))
///     .car("A", Position::new(1, 2), Direction::North, "FFRFFFFRRL")
///     .car("B", Position::new(7, 8), Direction::West, "FFLFFFFFFF")
///     .build()?;
/// sim.run();
/// ```
#[derive(Debug, Clone)]
pub struct SimBuilder {
    bounds: Bounds,
    config: SimConfig,
    cars:   Vec<CarSpec>,
}

impl SimBuilder {
    /// Create a builder for an empty field of `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            config: SimConfig::default(),
            cars:   Vec::new(),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Queue a car.  Validation is deferred to [`build`](Self::build).
    pub fn car(
        mut self,
        name:      impl Into<String>,
        position:  Position,
        direction: Direction,
        commands:  impl Into<String>,
    ) -> Self {
        self.cars.push(CarSpec {
            name: name.into(),
            position,
            direction,
            commands: commands.into(),
        });
        self
    }

    /// Queue a prepared [`CarSpec`].
    pub fn spec(mut self, spec: CarSpec) -> Self {
        self.cars.push(spec);
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Cars queued so far, in insertion order.
    pub fn cars(&self) -> &[CarSpec] {
        &self.cars
    }

    /// Check `spec` against the field and the cars queued so far.
    ///
    /// A car must have a non-empty name not already taken, start inside the
    /// field, and carry a non-empty command string over `L`/`R`/`F`.
    pub fn check(&self, spec: &CarSpec) -> SimResult<()> {
        check_spec(self.bounds, &self.cars, spec)
    }

    /// Validate all queued cars and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let mut store = CarStore::new();
        for (i, spec) in self.cars.iter().enumerate() {
            check_spec(self.bounds, &self.cars[..i], spec)?;
            store
                .push(Car::new(spec.name.clone(), spec.position, spec.direction, &spec.commands))
                .ok_or(SimError::TooManyCars)?;
        }
        Ok(Sim::new(self.config, self.bounds, store))
    }
}

fn check_spec(bounds: Bounds, earlier: &[CarSpec], spec: &CarSpec) -> SimResult<()> {
    if spec.name.is_empty() {
        return Err(SimError::EmptyName);
    }
    if earlier.iter().any(|c| c.name == spec.name) {
        return Err(SimError::DuplicateName(spec.name.clone()));
    }
    if !bounds.contains(spec.position) {
        return Err(SimError::OutOfBounds {
            name:     spec.name.clone(),
            position: spec.position,
            bounds,
        });
    }
    if spec.commands.is_empty() {
        return Err(SimError::EmptyCommands(spec.name.clone()));
    }
    Command::validate_sequence(&spec.commands).map_err(|source| SimError::InvalidCommands {
        name: spec.name.clone(),
        source,
    })
}

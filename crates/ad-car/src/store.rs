//! `CarStore` — insertion-ordered car storage addressed by [`CarId`].
//!
//! A car's `CarId` is its insertion index and never changes: the store only
//! grows, and cars are never removed or reordered.  Insertion order is the
//! display order of results and the order of partner lists in collision
//! records.
//!
//! [`push`](CarStore::push) refuses a car whose index would not fit a
//! `CarId`, so every stored index converts exactly.

use ad_core::{CarId, Tick};

use crate::{Car, CarOutcome};

/// All cars of one simulation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarStore {
    cars: Vec<Car>,
}

impl CarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `car` and return its id, or `None` if the store is full.
    pub fn push(&mut self, car: Car) -> Option<CarId> {
        let id = CarId::try_from(self.cars.len()).ok()?;
        self.cars.push(car);
        Some(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    #[inline]
    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: CarId) -> Option<&mut Car> {
        self.cars.get_mut(id.index())
    }

    /// Look a car up by its unique name.
    pub fn find(&self, name: &str) -> Option<CarId> {
        self.cars
            .iter()
            .position(|c| c.name() == name)
            .and_then(|i| CarId::try_from(i).ok())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Iterator over all `CarId`s in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.cars.len()).filter_map(|i| CarId::try_from(i).ok())
    }

    /// Iterator over `(CarId, &Car)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CarId, &Car)> + '_ {
        self.cars
            .iter()
            .enumerate()
            .filter_map(|(i, c)| CarId::try_from(i).ok().map(|id| (id, c)))
    }

    /// Read-only slice of all cars, indexed by `CarId::index()`.
    #[inline]
    pub fn as_slice(&self) -> &[Car] {
        &self.cars
    }

    /// Length of the longest command string; a run lasts this many ticks.
    /// Zero for an empty store.
    pub fn max_ticks(&self) -> u64 {
        self.cars.iter().map(|c| c.command_count() as u64).max().unwrap_or(0)
    }

    /// Cars that still take part in `tick`: active, with a command left.
    pub fn eligible_at(&self, tick: Tick) -> impl Iterator<Item = (CarId, &Car, char)> + '_ {
        self.iter().filter_map(move |(id, car)| {
            if !car.is_active() {
                return None;
            }
            car.command_at(tick).map(|cmd| (id, car, cmd))
        })
    }

    pub fn active_count(&self) -> usize {
        self.cars.iter().filter(|c| c.is_active()).count()
    }

    /// Current outcome of every car, paired with its name, in insertion order.
    pub fn outcomes(&self) -> Vec<(String, CarOutcome)> {
        self.cars
            .iter()
            .map(|c| (c.name().to_owned(), c.outcome()))
            .collect()
    }
}

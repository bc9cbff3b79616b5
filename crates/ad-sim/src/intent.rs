//! Car intents — what a car would do this tick if nobody got in its way.

use ad_car::Car;
use ad_core::{Bounds, CarId, Direction, Position};

/// The effect of one car's command for the current tick, computed purely from
/// that car's own pre-tick state.
///
/// Intents are produced by the intent phase of
/// [`resolve_tick`][crate::resolver::resolve_tick] and consumed by its commit
/// phase.  Building an intent never touches the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intent {
    pub car:       CarId,
    /// Cell the car occupies before the tick.
    pub from:      Position,
    /// Cell the car wants to occupy after the tick.  Equals `from` for turns
    /// and for forward moves blocked by the field edge.
    pub to:        Position,
    /// Heading after the command.
    pub direction: Direction,
    pub command:   char,
}

impl Intent {
    /// Build the intent of `car` executing `command` on a field of `bounds`.
    pub fn for_car(id: CarId, car: &Car, command: char, bounds: Bounds) -> Self {
        let (direction, to) = car.preview_command(command, bounds);
        Self {
            car: id,
            from: car.position(),
            to,
            direction,
            command,
        }
    }

    /// `true` if the car changes cell.
    #[inline]
    pub fn moves(&self) -> bool {
        self.from != self.to
    }
}

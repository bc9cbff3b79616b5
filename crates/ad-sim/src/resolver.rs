//! The tick resolver: intent phase, destination grouping and commit phase.

use ad_car::{CarStore, CollisionRecord};
use ad_core::{Bounds, CarId, Position, Tick};
use tracing::{debug, trace};

use crate::Intent;

#[cfg(not(feature = "fx-hash"))]
type DestinationIndex = std::collections::HashMap<Position, usize>;
#[cfg(feature = "fx-hash")]
type DestinationIndex = rustc_hash::FxHashMap<Position, usize>;

// ── Reports ───────────────────────────────────────────────────────────────────

/// Two or more cars reaching the same cell in the same tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionEvent {
    pub tick:     Tick,
    /// The contested cell.
    pub position: Position,
    /// Every car involved, in insertion order.
    pub cars:     Vec<CarId>,
}

/// What happened during one call to [`resolve_tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:       Tick,
    /// Cars that executed a command this tick.
    pub intents:    usize,
    /// Cars whose intent changed cell (collided cars included).
    pub moved:      usize,
    pub collisions: Vec<CollisionEvent>,
}

// ── Phases ────────────────────────────────────────────────────────────────────

/// Resolve one tick: compute every eligible car's intent, then commit them.
///
/// Eligible cars are active and still have a command at `tick`.  Collided
/// cars are not eligible, so a car driving onto a frozen car's cell later on
/// is not a collision.
pub fn resolve_tick(cars: &mut CarStore, bounds: Bounds, tick: Tick) -> TickReport {
    let intents = compute_intents(cars, bounds, tick);
    commit(cars, &intents, tick)
}

/// Intent phase.  Reads car state only; returns intents in `CarId` order.
pub fn compute_intents(cars: &CarStore, bounds: Bounds, tick: Tick) -> Vec<Intent> {
    #[cfg(not(feature = "parallel"))]
    {
        cars.eligible_at(tick)
            .map(|(id, car, cmd)| Intent::for_car(id, car, cmd, bounds))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed collect keeps CarId order.
        cars.as_slice()
            .par_iter()
            .enumerate()
            .filter(|(_, car)| car.is_active())
            .filter_map(|(i, car)| {
                let id = CarId::try_from(i).ok()?;
                car.command_at(tick).map(|cmd| Intent::for_car(id, car, cmd, bounds))
            })
            .collect()
    }
}

/// Bucket intents by destination cell.
///
/// Buckets appear in order of their first intent and hold indices into
/// `intents` in input order, so the result is deterministic whatever the
/// hasher.
pub fn group_by_destination(intents: &[Intent]) -> Vec<(Position, Vec<usize>)> {
    let mut index = DestinationIndex::default();
    let mut groups: Vec<(Position, Vec<usize>)> = Vec::new();
    for (i, intent) in intents.iter().enumerate() {
        match index.get(&intent.to) {
            Some(&g) => groups[g].1.push(i),
            None => {
                index.insert(intent.to, groups.len());
                groups.push((intent.to, vec![i]));
            }
        }
    }
    groups
}

/// Commit phase.  Sequential, single writer.
fn commit(cars: &mut CarStore, intents: &[Intent], tick: Tick) -> TickReport {
    let mut report = TickReport {
        tick,
        intents: intents.len(),
        moved: intents.iter().filter(|i| i.moves()).count(),
        collisions: Vec::new(),
    };

    for (cell, members) in group_by_destination(intents) {
        if let [only] = members.as_slice() {
            let intent = &intents[*only];
            if let Some(car) = cars.get_mut(intent.car) {
                car.commit(intent.direction, intent.to);
            }
            continue;
        }

        let ids: Vec<CarId> = members.iter().map(|&m| intents[m].car).collect();
        let names: Vec<String> = ids
            .iter()
            .filter_map(|&id| cars.get(id).map(|c| c.name().to_owned()))
            .collect();

        for &m in &members {
            let intent = &intents[m];
            let Some(car) = cars.get_mut(intent.car) else { continue };
            let partners = names
                .iter()
                .filter(|n| n.as_str() != car.name())
                .cloned()
                .collect();
            car.commit_direction(intent.direction);
            car.collide(CollisionRecord {
                position: cell,
                step: tick.step(),
                partners,
            });
        }

        debug!(tick = tick.0, step = tick.step(), %cell, cars = ?names, "collision");
        report.collisions.push(CollisionEvent { tick, position: cell, cars: ids });
    }

    trace!(
        tick = tick.0,
        intents = report.intents,
        moved = report.moved,
        collisions = report.collisions.len(),
        "tick resolved",
    );
    report
}

//! A single car: position, heading, command string and collision state.

use ad_core::{Bounds, Command, Direction, Position, Tick};
use tracing::trace;

// ── CollisionRecord ───────────────────────────────────────────────────────────

/// Where and when a car collided, and with whom.
///
/// Written once, at the first collision, and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionRecord {
    /// The contested cell.  The car comes to rest here.
    pub position: Position,
    /// 1-based step at which the collision happened.
    pub step:     u64,
    /// Names of every other car that reached `position` in the same step,
    /// in insertion order.
    pub partners: Vec<String>,
}

// ── CarOutcome ────────────────────────────────────────────────────────────────

/// Final (or current) state of a car as reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarOutcome {
    /// Still driving: its live position and heading.
    Active {
        position:  Position,
        direction: Direction,
    },
    /// Frozen by a collision.
    Collided(CollisionRecord),
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// A car on the field.
///
/// `active` starts `true` and only ever flips to `false`, at which point the
/// car's position, heading and collision record are frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    name:      String,
    position:  Position,
    direction: Direction,
    commands:  Vec<char>,
    active:    bool,
    collision: Option<CollisionRecord>,
}

impl Car {
    /// Create an active car.
    ///
    /// No validation happens here: the caller guarantees an in-bounds start
    /// and a command string over `L`/`R`/`F`.
    pub fn new(
        name:      impl Into<String>,
        position:  Position,
        direction: Direction,
        commands:  &str,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            direction,
            commands: commands.chars().collect(),
            active: true,
            collision: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn collision(&self) -> Option<&CollisionRecord> {
        self.collision.as_ref()
    }

    /// The full command string.
    pub fn commands(&self) -> String {
        self.commands.iter().collect()
    }

    /// Number of commands, i.e. the number of ticks this car takes part in.
    #[inline]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// The command to execute at `tick`, or `None` once the string is used up.
    #[inline]
    pub fn command_at(&self, tick: Tick) -> Option<char> {
        self.commands.get(tick.index()).copied()
    }

    pub fn outcome(&self) -> CarOutcome {
        match &self.collision {
            Some(record) => CarOutcome::Collided(record.clone()),
            None => CarOutcome::Active {
                position:  self.position,
                direction: self.direction,
            },
        }
    }

    // ── Primitives ────────────────────────────────────────────────────────

    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// The cell one step ahead, or the current cell if that step would leave
    /// the field.  Hitting the edge is not a collision.
    pub fn compute_forward(&self, bounds: Bounds) -> Position {
        let ahead = self.position.step(self.direction);
        if bounds.contains(ahead) {
            ahead
        } else {
            self.position
        }
    }

    /// Execute one command character in isolation.
    ///
    /// Characters other than `L`, `R`, `F` are ignored.
    pub fn apply_command(&mut self, cmd: char, bounds: Bounds) {
        let (direction, position) = self.preview_command(cmd, bounds);
        self.direction = direction;
        self.position = position;
    }

    /// Heading and cell this car would have after `cmd`, computed from its
    /// own current state only.  `self` is left untouched.
    pub fn preview_command(&self, cmd: char, bounds: Bounds) -> (Direction, Position) {
        match Command::from_char(cmd) {
            Some(Command::Left)    => (self.direction.left(), self.position),
            Some(Command::Right)   => (self.direction.right(), self.position),
            Some(Command::Forward) => (self.direction, self.compute_forward(bounds)),
            None => {
                trace!(car = %self.name, command = ?cmd, "ignoring unrecognized command");
                (self.direction, self.position)
            }
        }
    }

    // ── Commit helpers used by the tick resolver ──────────────────────────

    /// Commit a resolved, collision-free move.  A frozen car is left as is.
    pub fn commit(&mut self, direction: Direction, position: Position) {
        if !self.active {
            return;
        }
        self.direction = direction;
        self.position = position;
    }

    /// Commit a heading change only.  A frozen car is left as is.
    pub fn commit_direction(&mut self, direction: Direction) {
        if self.active {
            self.direction = direction;
        }
    }

    /// Stop the car at `record.position` and store `record`.
    ///
    /// A car that already carries a collision record keeps it, together with
    /// its frozen position.
    pub fn collide(&mut self, record: CollisionRecord) {
        if self.collision.is_some() {
            return;
        }
        self.active = false;
        self.position = record.position;
        self.collision = Some(record);
    }
}

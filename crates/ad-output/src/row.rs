//! Plain data row types written by output backends.

/// A snapshot of one car's state at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub tick:      u64,
    pub car:       String,
    pub x:         i64,
    pub y:         i64,
    /// Heading letter (`N`, `E`, `S`, `W`).
    pub direction: char,
    pub active:    bool,
}

/// One collision group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRow {
    /// 1-based step, matching the collision records on the cars.
    pub step: u64,
    pub x:    i64,
    pub y:    i64,
    /// Names of every car involved, in insertion order.
    pub cars: Vec<String>,
}

//! Integer grid coordinates and the rectangular field they live in.
//!
//! The field's origin is the bottom-left corner: `y` grows northwards and
//! `x` grows eastwards.  Coordinates are signed so that a step off the
//! western or southern edge produces a representable (out-of-bounds) cell
//! rather than an underflow.

use std::fmt;

use crate::Direction;

/// A cell on the simulation field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `heading`.  Not bounds-checked.
    #[inline]
    pub fn step(self, heading: Direction) -> Position {
        let (dx, dy) = heading.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl From<(i64, i64)> for Position {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of the field.
///
/// A cell is valid iff `0 <= x < width` and `0 <= y < height`.  A zero-sized
/// field is legal and simply contains no cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width:  u32,
    pub height: u32,
}

impl Bounds {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` if `pos` lies inside the field.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        (0..self.width as i64).contains(&pos.x) && (0..self.height as i64).contains(&pos.y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

//! Compass heading of a car.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One of the four compass headings.
///
/// Variants are declared in clockwise order; turning is index arithmetic
/// modulo 4 over [`Direction::CLOCKWISE`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order starting from north.
    pub const CLOCKWISE: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }

    /// Heading after a 90° counter-clockwise turn.
    #[inline]
    pub fn left(self) -> Direction {
        Self::CLOCKWISE[(self.ordinal() + 3) % 4]
    }

    /// Heading after a 90° clockwise turn.
    #[inline]
    pub fn right(self) -> Direction {
        Self::CLOCKWISE[(self.ordinal() + 1) % 4]
    }

    /// Unit `(dx, dy)` step for this heading.  North is `+y`.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East  => (1, 0),
            Direction::South => (0, -1),
            Direction::West  => (-1, 0),
        }
    }

    /// Single-letter form (`N`, `E`, `S`, `W`).
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East  => 'E',
            Direction::South => 'S',
            Direction::West  => 'W',
        }
    }

    pub fn from_letter(c: char) -> Option<Direction> {
        match c {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _   => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Direction::from_letter(c).ok_or_else(|| CoreError::InvalidDirection(s.to_owned()))
            }
            _ => Err(CoreError::InvalidDirection(s.to_owned())),
        }
    }
}

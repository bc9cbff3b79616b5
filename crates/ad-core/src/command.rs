//! Per-tick driving commands.

use std::fmt;

use crate::{CoreError, CoreResult};

/// A single driving instruction executed by a car during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `L` — rotate 90° counter-clockwise in place.
    Left,
    /// `R` — rotate 90° clockwise in place.
    Right,
    /// `F` — advance one cell, unless that would leave the field.
    Forward,
}

impl Command {
    pub fn from_char(c: char) -> Option<Command> {
        match c {
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'F' => Some(Command::Forward),
            _   => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Left    => 'L',
            Command::Right   => 'R',
            Command::Forward => 'F',
        }
    }

    /// Check that every character of `commands` is a valid command.
    ///
    /// Returns the first offending character on failure.  The empty string
    /// is accepted here; callers decide whether an empty sequence is allowed.
    pub fn validate_sequence(commands: &str) -> CoreResult<()> {
        match commands.chars().find(|&c| Command::from_char(c).is_none()) {
            Some(bad) => Err(CoreError::InvalidCommand(bad)),
            None      => Ok(()),
        }
    }
}

impl TryFrom<char> for Command {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Command::from_char(c).ok_or(CoreError::InvalidCommand(c))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

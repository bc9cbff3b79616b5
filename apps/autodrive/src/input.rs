//! Parsing and validation of the lines typed at each prompt.
//!
//! Every error displays as the exact message shown to the user before the
//! prompt is repeated.

use ad_core::{Bounds, Command, Direction, Position};
use ad_sim::CarSpec;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter two integers separated by a space.")]
    FieldFormat,

    #[error("Width and height must be positive integers.")]
    NegativeField,

    #[error("Car name cannot be empty.")]
    EmptyName,

    #[error("Car named {0} already exists. Please choose a different name.")]
    DuplicateName(String),

    #[error(
        "Invalid input. Make sure to enter two numbers with a space between (x y) \
         followed by a direction (e.g., '10 5 N')."
    )]
    PositionFormat,

    #[error("Position out of bounds, x should be between 0 and {max_x} and y should be between 0 and {max_y}")]
    OutOfBounds { max_x: i64, max_y: i64 },

    #[error("Invalid direction. Only N,S,E,W values are allowed.")]
    Direction,

    #[error("Invalid commands, only L, R, F allowed.")]
    Commands,
}

pub type InputResult<T> = Result<T, InputError>;

/// `"width height"`: exactly two integers, neither negative.
pub fn parse_field(line: &str) -> InputResult<Bounds> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [w, h] = parts.as_slice() else {
        return Err(InputError::FieldFormat);
    };
    let w: i64 = w.parse().map_err(|_| InputError::FieldFormat)?;
    let h: i64 = h.parse().map_err(|_| InputError::FieldFormat)?;
    if w < 0 || h < 0 {
        return Err(InputError::NegativeField);
    }
    let width = u32::try_from(w).map_err(|_| InputError::FieldFormat)?;
    let height = u32::try_from(h).map_err(|_| InputError::FieldFormat)?;
    Ok(Bounds::new(width, height))
}

/// A trimmed, non-empty name not used by any car in `taken`.
pub fn parse_name(line: &str, taken: &[CarSpec]) -> InputResult<String> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    if taken.iter().any(|c| c.name == name) {
        return Err(InputError::DuplicateName(name.to_owned()));
    }
    Ok(name.to_owned())
}

/// `"x y D"`: an in-bounds cell followed by one of `N`, `E`, `S`, `W`.
pub fn parse_position(line: &str, bounds: Bounds) -> InputResult<(Position, Direction)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, dir] = parts.as_slice() else {
        return Err(InputError::PositionFormat);
    };
    let x: i64 = x.parse().map_err(|_| InputError::PositionFormat)?;
    let y: i64 = y.parse().map_err(|_| InputError::PositionFormat)?;

    let position = Position::new(x, y);
    if !bounds.contains(position) {
        return Err(InputError::OutOfBounds {
            max_x: i64::from(bounds.width) - 1,
            max_y: i64::from(bounds.height) - 1,
        });
    }
    let direction = dir.parse::<Direction>().map_err(|_| InputError::Direction)?;
    Ok((position, direction))
}

/// Upper-cases the line; the result must be non-empty and only `L`/`R`/`F`.
pub fn parse_commands(line: &str) -> InputResult<String> {
    let commands = line.trim().to_uppercase();
    if commands.is_empty() {
        return Err(InputError::Commands);
    }
    Command::validate_sequence(&commands).map_err(|_| InputError::Commands)?;
    Ok(commands)
}

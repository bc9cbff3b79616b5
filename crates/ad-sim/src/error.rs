use ad_core::{Bounds, CoreError, Position};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("car name must not be empty")]
    EmptyName,

    #[error("car named {0} already exists")]
    DuplicateName(String),

    #[error("car {name} starts at {position}, outside the {bounds} field")]
    OutOfBounds {
        name:     String,
        position: Position,
        bounds:   Bounds,
    },

    #[error("car {0} has no commands")]
    EmptyCommands(String),

    #[error("car {name} has an invalid command string: {source}")]
    InvalidCommands {
        name:   String,
        #[source]
        source: CoreError,
    },

    #[error("too many cars for one simulation")]
    TooManyCars,
}

pub type SimResult<T> = Result<T, SimError>;

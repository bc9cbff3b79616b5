//! Core error type.
//!
//! Only the parsing helpers in this crate can fail.  Sub-crates define their
//! own error enums and wrap `CoreError` as one variant where they need to.

use thiserror::Error;

/// Errors produced while parsing core values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid direction {0:?}, expected one of N, E, S, W")]
    InvalidDirection(String),

    #[error("invalid command {0:?}, expected one of L, R, F")]
    InvalidCommand(char),
}

/// Shorthand result type for `ad-core`.
pub type CoreResult<T> = Result<T, CoreError>;

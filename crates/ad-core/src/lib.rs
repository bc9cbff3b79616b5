//! `ad-core` — foundational types for the `autodrive` car simulator.
//!
//! This crate is a dependency of every other `ad-*` crate.  It intentionally
//! has no `ad-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`                                               |
//! | [`grid`]        | `Position`, `Bounds`                                  |
//! | [`direction`]   | `Direction` (N/E/S/W compass heading)                 |
//! | [`command`]     | `Command` (`L`/`R`/`F`)                               |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod command;
pub mod direction;
pub mod error;
pub mod grid;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::Command;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use grid::{Bounds, Position};
pub use ids::CarId;
pub use time::{SimConfig, Tick};

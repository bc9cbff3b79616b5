//! `ad-car` — car agent state and storage for the `autodrive` simulator.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`car`]   | `Car`, `CollisionRecord`, `CarOutcome`                      |
//! | [`store`] | `CarStore` (insertion-ordered cars addressed by `CarId`)    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |
//!
//! A car only knows how to turn and how to compute its own next cell.  Which
//! of those effects get committed in a tick, and what happens when two cars
//! want the same cell, is decided by the resolver in `ad-sim`.

pub mod car;
pub mod store;


pub use car::{Car, CarOutcome, CollisionRecord};
pub use store::CarStore;

//! `ad-sim` — lock-step tick loop for the autodrive car simulator.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..max(command string length):
//!   ① Intents — every active car with a command left at this tick computes
//!               an immutable Intent {from, to, direction} from its own
//!               pre-tick state (parallel with the `parallel` feature).
//!   ② Group   — intents are bucketed by destination cell, in order of first
//!               appearance.
//!   ③ Commit  — sequentially, per bucket:
//!                 1 car   → heading and position committed
//!                 2+ cars → all stop on the contested cell, marked collided
//! ```
//!
//! Because no car is mutated before every intent of the tick exists, the
//! outcome of a tick does not depend on the order cars were added in.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the intent phase on Rayon's thread pool.          |
//! | `fx-hash`  | Uses FxHash for the per-tick destination index.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on events and state. |
//!
//! Both feature builds produce identical results.  Run the test suite once
//! plainly and once with `cargo test -p ad-sim --features parallel,fx-hash`
//! to cover both intent phases and both hashers.
//!
//! # Quick-start
//!
//! ```rust
//! use ad_core::{Bounds, Direction, Position};
//! use ad_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(Bounds::new(10, 10))
//!     .car("A", Position::new(1, 2), Direction::North, "FFRFFFFRRL")
//!     .build()
//!     .unwrap();
//! sim.run();
//! let a = sim.cars().get(ad_core::CarId(0)).unwrap();
//! assert_eq!(a.position(), Position::new(5, 4));
//! ```

pub mod builder;
pub mod error;
pub mod intent;
pub mod observer;
pub mod resolver;
pub mod sim;


pub use builder::{CarSpec, SimBuilder};
pub use error::{SimError, SimResult};
pub use intent::Intent;
pub use observer::{NoopObserver, SimObserver};
pub use resolver::{CollisionEvent, TickReport};
pub use sim::Sim;

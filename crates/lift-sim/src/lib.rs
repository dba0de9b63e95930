//! `lift-sim` — a reference building for the lift dispatcher.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`passenger`]   | `Passenger`, `Delivery`                                  |
//! | [`loader`]      | CSV scenario loading                                     |
//! | [`observer`]    | `SimObserver` trait, `NoopObserver`, `StatsObserver`     |
//! | [`builder`]     | `SimBuilder` (fluent construction with validation)       |
//! | [`sim`]         | `Sim` — spawn, motion, arrivals, boarding                |
//! | [`error`]       | `SimError`, `SimResult<T>`                               |
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Idle      — tick 0 only: every cabin reports Idle.
//!   ② Spawn     — due passengers queue at their origin and press a hall button.
//!   ③ Motion    — each cabin moves one floor towards its queue head:
//!                   intermediate floor → PassingFloor (may become a stop)
//!                   head reached       → pop, StoppedAtFloor, alight/board, Idle?
//!                 idle cabins re-report Idle while calls are outstanding.
//!   ④ Re-press  — passengers left behind press their hall button again.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{DispatchConfig, SimConfig};
//! use lift_sim::{load_passengers_csv, SimBuilder, StatsObserver};
//!
//! let passengers = load_passengers_csv(Path::new("scenario.csv"))?;
//! let mut sim = SimBuilder::new(SimConfig::new(500, 10), DispatchConfig::new(12))
//!     .cabins(3)
//!     .passengers(passengers)
//!     .build()?;
//! let mut stats = StatsObserver::new();
//! sim.run(&mut stats);
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod observer;
pub mod passenger;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use loader::{load_passengers_csv, load_passengers_reader};
pub use observer::{NoopObserver, SimObserver, StatsObserver};
pub use passenger::{Delivery, Passenger};
pub use sim::Sim;

//! `lift-fleet` — the cabin state the dispatcher reads and commands.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`queue`]   | `DestinationQueue` — ordered, duplicate-free stop plan           |
//! | [`cabin`]   | `Cabin` — position, queue, pressed buttons, load, indicator lamps |
//! | [`store`]   | `Fleet` — `Vec<Cabin>` indexed by `CabinId`                      |
//! | [`builder`] | `FleetBuilder` (fluent construction with validation)             |
//! | [`command`] | `Command` enum issued by the dispatcher, applied by `Fleet`      |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                                   |
//!
//! # Ownership
//!
//! The motion engine owns position, pressed buttons and load; the dispatcher
//! only reads them.  The destination queue is shared: the dispatcher inserts
//! and removes floors directly through [`DestinationQueue`], and everything
//! else reaches it through [`Command`]s applied with [`Fleet::apply`].

pub mod builder;
pub mod cabin;
pub mod command;
pub mod error;
pub mod queue;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use cabin::Cabin;
pub use command::Command;
pub use error::{FleetError, FleetResult};
pub use queue::DestinationQueue;
pub use store::Fleet;

//! `lift-core` — foundational types for the lift dispatcher.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `CabinId`, `Floor`                                        |
//! | [`direction`]   | `Direction`, `CallDirection`, `resolve_direction`         |
//! | [`time`]        | `Tick`                                                    |
//! | [`config`]      | `DispatchConfig`, `SimConfig`                             |
//! | [`rng`]         | `DispatchRng`                                             |
//! | [`error`]       | `LiftError`, `LiftResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DispatchConfig, SimConfig, DEFAULT_LOAD_THRESHOLD};
pub use direction::{CallDirection, Direction, resolve_direction};
pub use error::{LiftError, LiftResult};
pub use ids::{CabinId, Floor};
pub use rng::DispatchRng;
pub use time::Tick;

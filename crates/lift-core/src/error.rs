//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` via `From`
//! where a configuration problem can surface through them.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{floor} is outside a building with {floor_count} floors")]
    FloorOutOfRange {
        floor:       Floor,
        floor_count: u32,
    },
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;

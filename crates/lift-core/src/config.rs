//! Dispatcher and simulation configuration.
//!
//! Both structs are plain data.  Applications typically build them in code or
//! load them from JSON/TOML with the `serde` feature, then hand them to
//! `Dispatcher::new` / `SimBuilder::new`.

use crate::{Floor, LiftError, LiftResult};

/// Load factor at or above which a passing cabin skips opportunistic pickups.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.8;

// ── DispatchConfig ────────────────────────────────────────────────────────────

/// Building geometry and dispatch tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// Number of floors.  Floors are `0..floor_count`; `0` and
    /// `floor_count - 1` are terminals.
    pub floor_count: u32,

    /// A passing cabin only stops for a hall call while its load factor is
    /// strictly below this value.
    pub load_threshold: f64,

    /// Seed for the idle-routing coin flip between two equidistant calls.
    /// The same seed always produces the same choices.
    pub seed: u64,
}

impl DispatchConfig {
    /// Configuration for a building with `floor_count` floors and default
    /// tuning.
    pub fn new(floor_count: u32) -> Self {
        Self {
            floor_count,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            seed: 0,
        }
    }

    pub fn with_load_threshold(mut self, load_threshold: f64) -> Self {
        self.load_threshold = load_threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject geometry the sweep logic cannot work with.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.floor_count
            )));
        }
        if !(self.load_threshold > 0.0 && self.load_threshold <= 1.0) {
            return Err(LiftError::Config(format!(
                "load threshold must lie in (0, 1], got {}",
                self.load_threshold
            )));
        }
        Ok(())
    }

    /// The highest floor (a terminal).
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floor_count - 1)
    }

    /// `true` for floor 0 and the top floor.
    #[inline]
    pub fn is_terminal(&self, floor: Floor) -> bool {
        floor == Floor(0) || floor == self.top_floor()
    }

    /// `Ok` if `floor` exists in this building.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<()> {
        if floor.0 < self.floor_count {
            Ok(())
        } else {
            Err(LiftError::FloorOutOfRange { floor, floor_count: self.floor_count })
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Reference-simulation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.  One tick moves a cabin one floor.
    pub total_ticks: u64,

    /// Passengers a cabin can carry.  `load_factor = riders / capacity`.
    pub cabin_capacity: u32,
}

impl SimConfig {
    pub fn new(total_ticks: u64, cabin_capacity: u32) -> Self {
        Self { total_ticks, cabin_capacity }
    }
}

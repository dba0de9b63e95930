//! Fluent builder for constructing a validated [`Fleet`].
//!
//! # Usage
//!
//! ```rust
//! use lift_core::Floor;
//! use lift_fleet::FleetBuilder;
//!
//! let fleet = FleetBuilder::new(10)
//!     .cabin_at(Floor(0))
//!     .cabin_at(Floor(9))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fleet.len(), 2);
//! ```

use lift_core::{CabinId, Floor};

use crate::{Cabin, Fleet, FleetError, FleetResult};

/// Fluent builder for [`Fleet`].
///
/// Cabins receive IDs in the order they are added, starting at `CabinId(0)`.
pub struct FleetBuilder {
    floor_count:    u32,
    initial_floors: Vec<Floor>,
}

impl FleetBuilder {
    pub fn new(floor_count: u32) -> Self {
        Self { floor_count, initial_floors: Vec::new() }
    }

    /// Add one cabin parked at `floor`.
    pub fn cabin_at(mut self, floor: Floor) -> Self {
        self.initial_floors.push(floor);
        self
    }

    /// Add `count` cabins parked at floor 0.
    pub fn cabins(mut self, count: usize) -> Self {
        self.initial_floors.extend(std::iter::repeat_n(Floor(0), count));
        self
    }

    /// Validate the initial floors and construct the fleet.
    pub fn build(self) -> FleetResult<Fleet> {
        let mut cabins = Vec::with_capacity(self.initial_floors.len());
        for (i, &floor) in self.initial_floors.iter().enumerate() {
            let id = CabinId(i as u32);
            if floor.0 >= self.floor_count {
                return Err(FleetError::InitialFloorOutOfRange {
                    cabin: id,
                    floor,
                    floor_count: self.floor_count,
                });
            }
            cabins.push(Cabin::new(id, floor));
        }
        Ok(Fleet::new(self.floor_count, cabins))
    }
}

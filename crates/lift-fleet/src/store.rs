//! The `Fleet` — every cabin in the building.

use lift_core::{CabinId, Floor};

use crate::{Cabin, Command, FleetError, FleetResult};

/// All cabins, indexed by `CabinId`.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].  `cabins[i].id ==
/// CabinId(i)` always holds, so iteration order is ascending `CabinId`.
pub struct Fleet {
    floor_count: u32,
    cabins:      Vec<Cabin>,
}

impl Fleet {
    pub(crate) fn new(floor_count: u32, cabins: Vec<Cabin>) -> Self {
        Self { floor_count, cabins }
    }

    /// Number of floors in the building this fleet serves.
    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cabins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cabins.is_empty()
    }

    /// # Panics
    /// Panics if `id` is not part of this fleet.
    #[inline]
    pub fn cabin(&self, id: CabinId) -> &Cabin {
        &self.cabins[id.index()]
    }

    /// # Panics
    /// Panics if `id` is not part of this fleet.
    #[inline]
    pub fn cabin_mut(&mut self, id: CabinId) -> &mut Cabin {
        &mut self.cabins[id.index()]
    }

    /// Fallible lookup for callers holding untrusted IDs.
    pub fn get(&self, id: CabinId) -> FleetResult<&Cabin> {
        self.cabins.get(id.index()).ok_or(FleetError::CabinNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cabin> {
        self.cabins.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CabinId> + '_ {
        self.cabins.iter().map(|c| c.id)
    }

    /// Realise a dispatcher command against the fleet state.
    ///
    /// Returns `true` if any state changed.
    pub fn apply(&mut self, command: &Command) -> bool {
        match *command {
            Command::GoToFloor { cabin, floor, immediate } => {
                debug_assert!(floor.0 < self.floor_count, "{floor} outside the building");
                let queue = &mut self.cabin_mut(cabin).destination_queue;
                if immediate { queue.push_front(floor) } else { queue.push_back(floor) }
            }
            Command::CheckDestinationQueue { .. } => false,
            Command::SetIndicators { cabin, going_up, going_down } => {
                let c = self.cabin_mut(cabin);
                let changed = c.going_up_indicator != going_up || c.going_down_indicator != going_down;
                c.going_up_indicator = going_up;
                c.going_down_indicator = going_down;
                changed
            }
        }
    }

    /// Apply every command in order.
    pub fn apply_all(&mut self, commands: &[Command]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Cabins currently positioned at `floor`.
    pub fn cabins_at(&self, floor: Floor) -> impl Iterator<Item = &Cabin> {
        self.cabins.iter().filter(move |c| c.current_floor == floor)
    }
}

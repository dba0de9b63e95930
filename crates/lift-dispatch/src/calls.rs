//! Per-floor hall-call bookkeeping.

use lift_core::{CallDirection, Floor};

/// Pending hall calls, one counter per floor and direction.
///
/// A counter above zero means "someone is waiting".  Counting rather than
/// flagging tolerates repeated presses before a cabin arrives; clearing
/// always resets to zero.
///
/// Floor indices outside the building are a caller bug and panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallTable {
    up:   Vec<u32>,
    down: Vec<u32>,
}

impl CallTable {
    pub fn new(floor_count: u32) -> Self {
        Self {
            up:   vec![0; floor_count as usize],
            down: vec![0; floor_count as usize],
        }
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.up.len() as u32
    }

    /// Register one press of the hall button at `floor`.
    pub fn record(&mut self, floor: Floor, direction: CallDirection) {
        let counter = &mut self.counters_mut(direction)[floor.index()];
        *counter = counter.saturating_add(1);
    }

    /// `true` while a call in `direction` at `floor` is outstanding.
    #[inline]
    pub fn has_pending(&self, floor: Floor, direction: CallDirection) -> bool {
        self.counters(direction)[floor.index()] > 0
    }

    /// `true` while a call in either direction at `floor` is outstanding.
    #[inline]
    pub fn has_any_pending(&self, floor: Floor) -> bool {
        self.up[floor.index()] > 0 || self.down[floor.index()] > 0
    }

    /// Number of presses recorded since the last clear.
    #[inline]
    pub fn presses(&self, floor: Floor, direction: CallDirection) -> u32 {
        self.counters(direction)[floor.index()]
    }

    /// Mark the call in `direction` at `floor` as served.
    ///
    /// Returns `true` if a call was actually outstanding.
    pub fn clear(&mut self, floor: Floor, direction: CallDirection) -> bool {
        let counter = &mut self.counters_mut(direction)[floor.index()];
        let was_pending = *counter > 0;
        *counter = 0;
        was_pending
    }

    /// Mark both directions at `floor` as served.
    pub fn clear_both(&mut self, floor: Floor) -> bool {
        let up = self.clear(floor, CallDirection::Up);
        let down = self.clear(floor, CallDirection::Down);
        up || down
    }

    /// Floors with a call outstanding in either direction, ascending.
    pub fn pending_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        (0..self.floor_count())
            .map(Floor)
            .filter(|&f| self.has_any_pending(f))
    }

    fn counters(&self, direction: CallDirection) -> &[u32] {
        match direction {
            CallDirection::Up   => &self.up,
            CallDirection::Down => &self.down,
        }
    }

    fn counters_mut(&mut self, direction: CallDirection) -> &mut [u32] {
        match direction {
            CallDirection::Up   => &mut self.up,
            CallDirection::Down => &mut self.down,
        }
    }
}

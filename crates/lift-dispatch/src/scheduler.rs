//! Sweep-ordered insertion into a cabin's destination queue.
//!
//! The scheduler walks the existing queue slot by slot while simulating the
//! cabin's position: one floor per slot in the current sweep direction,
//! turning around at floor 0 and at the top floor.  The new floor goes into
//! the first slot where the simulated position reaches it (travelling in the
//! called direction, when one is given).  If no slot matches, it is appended.

use lift_core::{CallDirection, Floor};
use lift_fleet::Cabin;
use tracing::debug;

/// Inserts floors into destination queues at sweep-consistent positions.
#[derive(Clone, Copy, Debug)]
pub struct DestinationScheduler {
    floor_count: u32,
}

impl DestinationScheduler {
    pub fn new(floor_count: u32) -> Self {
        Self { floor_count }
    }

    /// Where `floor` belongs in `cabin`'s queue.
    ///
    /// `None` means the floor is already queued at or before its slot and
    /// nothing needs to change.
    pub fn insertion_index(
        &self,
        cabin:  &Cabin,
        floor:  Floor,
        called: Option<CallDirection>,
    ) -> Option<usize> {
        let queue = cabin.destination_queue.as_slice();
        let top = i64::from(self.floor_count) - 1;
        let target = i64::from(floor.0);
        let mut position = i64::from(cabin.current_floor.0);
        let mut step = cabin.destination_direction().step();

        for (index, &queued) in queue.iter().enumerate() {
            if queued == floor {
                return None;
            }
            if position == target && called.is_none_or(|d| d.step() == step) {
                return Some(index);
            }
            if position == 0 {
                step = 1;
            }
            if position == top {
                step = -1;
            }
            position += step;
        }
        Some(queue.len())
    }

    /// Insert `floor` into `cabin`'s queue at its sweep position.
    ///
    /// Idempotent: scheduling the same floor twice without intervening
    /// changes leaves the queue as the first call left it.  Returns `true` if
    /// the queue changed, in which case the caller must tell the motion
    /// engine to re-check it.
    pub fn schedule(
        &self,
        cabin:  &mut Cabin,
        floor:  Floor,
        called: Option<CallDirection>,
    ) -> bool {
        debug_assert!(floor.0 < self.floor_count, "{floor} outside the building");
        let Some(index) = self.insertion_index(cabin, floor, called) else {
            return false;
        };
        let changed = cabin.destination_queue.insert_at(index, floor);
        if changed {
            debug!(
                cabin = %cabin.id,
                floor = floor.0,
                index,
                queue = %cabin.destination_queue,
                "scheduled floor"
            );
        }
        changed
    }
}

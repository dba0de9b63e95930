//! Per-cabin state.

use std::collections::BTreeSet;

use lift_core::{CabinId, Direction, Floor, resolve_direction};

use crate::DestinationQueue;

/// One elevator cabin as the dispatcher sees it.
///
/// The motion engine writes `current_floor`, `pressed_floors` and
/// `load_factor`.  The dispatcher reads them and plans through
/// `destination_queue`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cabin {
    pub id: CabinId,

    /// Last floor reached, rounded by the motion engine while between floors.
    pub current_floor: Floor,

    /// Planned stops, next stop first.
    pub destination_queue: DestinationQueue,

    /// Floors requested by passengers inside the cabin.  Cleared by the
    /// motion engine on arrival.
    pub pressed_floors: BTreeSet<Floor>,

    /// Fractional occupancy in `[0, 1]`.  Advisory; never written by the
    /// dispatcher.
    pub load_factor: f64,

    pub going_up_indicator: bool,
    pub going_down_indicator: bool,
}

impl Cabin {
    /// An empty, idle cabin at `floor` with both indicator lamps lit.
    pub fn new(id: CabinId, floor: Floor) -> Self {
        Self {
            id,
            current_floor:        floor,
            destination_queue:    DestinationQueue::new(),
            pressed_floors:       BTreeSet::new(),
            load_factor:          0.0,
            going_up_indicator:   true,
            going_down_indicator: true,
        }
    }

    /// Travel intent derived from the queue head and current floor.
    #[inline]
    pub fn destination_direction(&self) -> Direction {
        resolve_direction(self.current_floor, self.destination_queue.head())
    }

    /// `true` when the cabin has nowhere to go.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.destination_queue.is_empty()
    }

    #[inline]
    pub fn is_pressed(&self, floor: Floor) -> bool {
        self.pressed_floors.contains(&floor)
    }
}

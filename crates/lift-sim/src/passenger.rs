//! Passengers and completed trips.

use lift_core::{CabinId, CallDirection, Floor, Tick};

/// One person who appears at `origin` at `spawn_tick` and wants to reach
/// `destination`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub origin:      Floor,
    pub destination: Floor,
    pub spawn_tick:  Tick,
}

impl Passenger {
    pub fn new(origin: Floor, destination: Floor, spawn_tick: Tick) -> Self {
        Self { origin, destination, spawn_tick }
    }

    /// The hall button this passenger presses.
    ///
    /// Only meaningful when `origin != destination`; the builder rejects
    /// passengers that go nowhere.
    #[inline]
    pub fn direction(&self) -> CallDirection {
        if self.destination > self.origin { CallDirection::Up } else { CallDirection::Down }
    }
}

/// A passenger that reached their destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    /// Index of the passenger in spawn order.
    pub passenger:    usize,
    pub cabin:        CabinId,
    pub spawn_tick:   Tick,
    pub boarded_at:   Tick,
    pub delivered_at: Tick,
}

impl Delivery {
    /// Ticks spent waiting at the origin floor.
    #[inline]
    pub fn wait_ticks(&self) -> u64 {
        self.boarded_at.since(self.spawn_tick)
    }

    /// Ticks spent inside the cabin.
    #[inline]
    pub fn ride_ticks(&self) -> u64 {
        self.delivered_at.since(self.boarded_at)
    }
}

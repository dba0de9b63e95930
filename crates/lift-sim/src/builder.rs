//! Fluent builder for constructing a [`Sim`].

use lift_core::{DispatchConfig, Floor, SimConfig};
use lift_dispatch::Dispatcher;
use lift_fleet::FleetBuilder;

use crate::{Passenger, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks and cabin capacity
/// - [`DispatchConfig`] — building geometry and dispatch tuning
/// - at least one cabin, via `.cabin_at(f)` or `.cabins(n)`
///
/// # Optional inputs
///
/// | Method              | Default        |
/// |---------------------|----------------|
/// | `.passengers(v)`    | no passengers  |
/// | `.passenger(p)`     | —              |
///
/// # Example
///
/// ```rust
/// use lift_core::{DispatchConfig, Floor, SimConfig, Tick};
/// use lift_sim::{NoopObserver, Passenger, SimBuilder};
///
/// let mut sim = SimBuilder::new(SimConfig::new(50, 8), DispatchConfig::new(6))
///     .cabin_at(Floor(0))
///     .passenger(Passenger::new(Floor(0), Floor(4), Tick(0)))
///     .build()
///     .unwrap();
/// sim.run(&mut NoopObserver);
/// assert_eq!(sim.delivered(), 1);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    dispatch:   DispatchConfig,
    fleet:      FleetBuilder,
    passengers: Vec<Passenger>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, dispatch: DispatchConfig) -> Self {
        Self {
            fleet: FleetBuilder::new(dispatch.floor_count),
            config,
            dispatch,
            passengers: Vec::new(),
        }
    }

    /// Add one cabin parked at `floor`.
    pub fn cabin_at(mut self, floor: Floor) -> Self {
        self.fleet = self.fleet.cabin_at(floor);
        self
    }

    /// Add `count` cabins parked at floor 0.
    pub fn cabins(mut self, count: usize) -> Self {
        self.fleet = self.fleet.cabins(count);
        self
    }

    /// Append a batch of passengers, e.g. from
    /// [`load_passengers_reader`][crate::load_passengers_reader].
    pub fn passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers.extend(passengers);
        self
    }

    pub fn passenger(mut self, passenger: Passenger) -> Self {
        self.passengers.push(passenger);
        self
    }

    /// Validate every input and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.cabin_capacity == 0 {
            return Err(SimError::Config("cabin capacity must be at least 1".into()));
        }

        let fleet = self.fleet.build()?;
        if fleet.is_empty() {
            return Err(SimError::Config("a building needs at least one cabin".into()));
        }
        let dispatcher = Dispatcher::new(self.dispatch, &fleet)?;

        // ── Validate the scenario against the building ────────────────────
        let building = dispatcher.config();
        for (i, p) in self.passengers.iter().enumerate() {
            building
                .check_floor(p.origin)
                .and_then(|()| building.check_floor(p.destination))
                .map_err(|e| SimError::Scenario(format!("passenger {i}: {e}")))?;
            if p.origin == p.destination {
                return Err(SimError::Scenario(format!(
                    "passenger {i}: origin and destination are both floor {}",
                    p.origin.0
                )));
            }
        }

        // Stable: equal spawn ticks keep their input order.
        let mut passengers = self.passengers;
        passengers.sort_by_key(|p| p.spawn_tick);

        Ok(Sim::new(self.config, fleet, dispatcher, passengers))
    }
}

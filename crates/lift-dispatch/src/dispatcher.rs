//! The `Dispatcher` — routes each event to the component that owns the
//! decision and collects the resulting commands.

use lift_core::{CabinId, CallDirection, DispatchConfig, DispatchRng, Direction, Floor, Tick};
use lift_fleet::{Command, Fleet};
use tracing::{debug, trace};

use crate::assignment::assign_call;
use crate::idle::on_idle;
use crate::passing::on_passing_floor;
use crate::{
    Assignment, CallTable, DestinationScheduler, DispatchError, DispatchResult, Event, IdleRoute,
    StopReason,
};

/// Dispatch state for one building.
///
/// The dispatcher owns the hall-call table; cabins live in a [`Fleet`] owned
/// by the caller and lent to every handler.  Handlers return [`Command`]s
/// rather than executing them, so a command that re-enters the dispatcher
/// (an immediate stop reported as `StoppedAtFloor`) always sees committed
/// queues.
///
/// # Example
///
/// ```rust
/// use lift_core::{DispatchConfig, Floor};
/// use lift_dispatch::{Dispatcher, Event};
/// use lift_fleet::FleetBuilder;
///
/// let mut fleet = FleetBuilder::new(5).cabin_at(Floor(2)).build().unwrap();
/// let mut dispatcher = Dispatcher::new(DispatchConfig::new(5), &fleet).unwrap();
///
/// let commands = dispatcher.handle(&mut fleet, Event::UpButtonPressed { floor: Floor(0) });
/// fleet.apply_all(&commands);
/// ```
pub struct Dispatcher {
    config:    DispatchConfig,
    calls:     CallTable,
    scheduler: DestinationScheduler,
    rng:       DispatchRng,
}

impl Dispatcher {
    /// Validate `config` against the fleet it will serve.
    pub fn new(config: DispatchConfig, fleet: &Fleet) -> DispatchResult<Self> {
        config.validate()?;
        if fleet.floor_count() != config.floor_count {
            return Err(DispatchError::FleetMismatch {
                fleet:  fleet.floor_count(),
                config: config.floor_count,
            });
        }
        Ok(Self {
            calls:     CallTable::new(config.floor_count),
            scheduler: DestinationScheduler::new(config.floor_count),
            rng:       DispatchRng::new(config.seed),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Read-only view of the pending hall calls.
    #[inline]
    pub fn calls(&self) -> &CallTable {
        &self.calls
    }

    /// Handle one event to completion.
    pub fn handle(&mut self, fleet: &mut Fleet, event: Event) -> Vec<Command> {
        trace!(?event, "event");
        let mut out = Vec::new();
        match event {
            Event::UpButtonPressed { floor } => {
                self.new_call_into(fleet, floor, CallDirection::Up, &mut out);
            }
            Event::DownButtonPressed { floor } => {
                self.new_call_into(fleet, floor, CallDirection::Down, &mut out);
            }
            Event::FloorButtonPressed { cabin, floor } => {
                self.floor_button_into(fleet, cabin, floor, &mut out);
            }
            Event::PassingFloor { cabin, floor, direction } => {
                self.passing_floor_into(fleet, cabin, floor, direction, &mut out);
            }
            Event::StoppedAtFloor { cabin, floor } => {
                self.stopped_into(fleet, cabin, floor, &mut out);
            }
            Event::Idle { cabin } => {
                self.idle_into(fleet, cabin, &mut out);
            }
        }
        out
    }

    /// The periodic tick hook.  Dispatch keeps no per-tick state.
    pub fn on_tick(&mut self, _tick: Tick) {}

    // ── Per-event entry points ────────────────────────────────────────────

    /// A hall button was pressed: record the call and pick who serves it.
    pub fn new_call(
        &mut self,
        fleet:     &mut Fleet,
        floor:     Floor,
        direction: CallDirection,
    ) -> (Assignment, Vec<Command>) {
        let mut out = Vec::new();
        let assignment = self.new_call_into(fleet, floor, direction, &mut out);
        (assignment, out)
    }

    /// A cabin is passing `floor`: stop now, or carry on.
    pub fn passing_floor(
        &mut self,
        fleet:     &mut Fleet,
        cabin:     CabinId,
        floor:     Floor,
        direction: Direction,
    ) -> (Option<StopReason>, Vec<Command>) {
        let mut out = Vec::new();
        let reason = self.passing_floor_into(fleet, cabin, floor, direction, &mut out);
        (reason, out)
    }

    /// A cabin ran out of destinations: find it something to do.
    pub fn idle(&mut self, fleet: &Fleet, cabin: CabinId) -> (Option<IdleRoute>, Vec<Command>) {
        let mut out = Vec::new();
        let route = self.idle_into(fleet, cabin, &mut out);
        (route, out)
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    fn new_call_into(
        &mut self,
        fleet:     &mut Fleet,
        floor:     Floor,
        direction: CallDirection,
        out:       &mut Vec<Command>,
    ) -> Assignment {
        assign_call(&self.config, &self.scheduler, &mut self.calls, fleet, floor, direction, out)
    }

    fn floor_button_into(
        &mut self,
        fleet: &mut Fleet,
        cabin: CabinId,
        floor: Floor,
        out:   &mut Vec<Command>,
    ) {
        if self.scheduler.schedule(fleet.cabin_mut(cabin), floor, None) {
            out.push(Command::CheckDestinationQueue { cabin });
        }
    }

    fn passing_floor_into(
        &mut self,
        fleet:     &mut Fleet,
        cabin:     CabinId,
        floor:     Floor,
        direction: Direction,
        out:       &mut Vec<Command>,
    ) -> Option<StopReason> {
        on_passing_floor(&self.config, &mut self.calls, fleet, cabin, floor, direction, out)
    }

    /// Credit the stop with the calls it served and light the lamps for the
    /// direction the cabin leaves in.
    fn stopped_into(&mut self, fleet: &Fleet, cabin: CabinId, floor: Floor, out: &mut Vec<Command>) {
        let direction = fleet.cabin(cabin).destination_direction();
        let served = match direction.as_call() {
            Some(call) => self.calls.clear(floor, call),
            None       => self.calls.clear_both(floor),
        };
        out.push(Command::SetIndicators {
            cabin,
            going_up:   direction != Direction::Down,
            going_down: direction != Direction::Up,
        });
        debug!(%cabin, floor = floor.0, %direction, served, "stopped");
    }

    fn idle_into(&mut self, fleet: &Fleet, cabin: CabinId, out: &mut Vec<Command>) -> Option<IdleRoute> {
        on_idle(&self.calls, fleet, &mut self.rng, cabin, out)
    }
}

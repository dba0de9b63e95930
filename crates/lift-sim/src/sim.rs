//! The `Sim` struct and its tick loop.

use lift_core::{CabinId, CallDirection, Floor, SimConfig, Tick};
use lift_dispatch::{Dispatcher, Event};
use lift_fleet::Fleet;
use tracing::{debug, trace};

use crate::{Delivery, Passenger, SimObserver};

// ── Per-cabin rider record ────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Rider {
    passenger:  usize,
    boarded_at: Tick,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The reference motion engine.
///
/// `Sim` plays the part of the building around the dispatcher: it spawns
/// passengers, presses buttons, moves cabins one floor per tick and reports
/// every movement as an [`Event`].  Each tick runs four phases:
///
/// 1. **Idle reports**: at tick 0 every cabin reports idle.
/// 2. **Spawn**: passengers due this tick appear and press their hall button.
/// 3. **Motion** (ascending `CabinId`): a cabin with a queue moves one floor
///    towards its head.  Intermediate floors raise `PassingFloor`; reaching the
///    head (or being told to stop where it is) is an arrival.  A cabin with no
///    queue re-reports idle while hall calls are outstanding.
/// 4. **Re-press**: passengers still waiting at a floor whose call was cleared
///    press the button again.
///
/// Arrival pops the queue head, releases the floor button, raises
/// `StoppedAtFloor`, lets riders off and waiting passengers on (within
/// capacity, and only in a direction whose indicator lamp is lit), then raises
/// `Idle` if the queue is empty.
///
/// Every command the dispatcher returns is applied to the fleet before the
/// next event is raised.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run length and cabin capacity.
    pub config: SimConfig,

    /// Cabin state shared with the dispatcher.
    pub fleet: Fleet,

    pub dispatcher: Dispatcher,

    now: Tick,

    /// All passengers, sorted by spawn tick.
    passengers: Vec<Passenger>,

    /// Index of the next passenger to spawn.
    next_spawn: usize,

    /// Passenger indices waiting at each floor, in arrival order.
    waiting: Vec<Vec<usize>>,

    /// Passengers inside each cabin, indexed by `CabinId`.
    riders: Vec<Vec<Rider>>,

    delivered: usize,
}

impl Sim {
    pub(crate) fn new(
        config:     SimConfig,
        fleet:      Fleet,
        dispatcher: Dispatcher,
        passengers: Vec<Passenger>,
    ) -> Self {
        Self {
            waiting: vec![Vec::new(); fleet.floor_count() as usize],
            riders: vec![Vec::new(); fleet.len()],
            config,
            fleet,
            dispatcher,
            now: Tick::ZERO,
            passengers,
            next_spawn: 0,
            delivered: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.now.0 < self.config.total_ticks {
            self.step(observer);
        }
        observer.on_sim_end(self.now);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// The next tick to be processed.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// The scenario, in spawn order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Passengers that have reached their destination.
    #[inline]
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Passengers currently waiting at a floor.
    pub fn waiting_count(&self) -> usize {
        self.waiting.iter().map(Vec::len).sum()
    }

    /// Passengers at `floor` still waiting for a cabin.
    pub fn waiting_at(&self, floor: Floor) -> usize {
        self.waiting[floor.index()].len()
    }

    /// Passengers currently inside `cabin`.
    pub fn riding(&self, cabin: CabinId) -> usize {
        self.riders[cabin.index()].len()
    }

    /// `true` once every passenger has spawned and been delivered.
    pub fn is_finished(&self) -> bool {
        self.delivered == self.passengers.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now);
        let moved = self.process_tick(now, observer);
        observer.on_tick_end(now, moved);
        self.now = now + 1;
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        self.dispatcher.on_tick(now);

        // ── Phase 1: initial idle reports ─────────────────────────────────
        if now == Tick::ZERO {
            for i in 0..self.fleet.len() {
                self.dispatch(Event::Idle { cabin: CabinId(i as u32) });
            }
        }

        // ── Phase 2: spawn passengers ─────────────────────────────────────
        self.spawn_passengers(now);

        // ── Phase 3: motion ───────────────────────────────────────────────
        let mut moved = 0;
        for i in 0..self.fleet.len() {
            if self.step_cabin(CabinId(i as u32), now, observer) {
                moved += 1;
            }
        }

        // ── Phase 4: re-press cleared calls ───────────────────────────────
        self.repress_hall_calls();

        moved
    }

    /// Hand one event to the dispatcher and apply what it asks for.
    fn dispatch(&mut self, event: Event) {
        let commands = self.dispatcher.handle(&mut self.fleet, event);
        self.fleet.apply_all(&commands);
    }

    fn spawn_passengers(&mut self, now: Tick) {
        while let Some(&passenger) = self.passengers.get(self.next_spawn) {
            if passenger.spawn_tick > now {
                break;
            }
            let index = self.next_spawn;
            self.next_spawn += 1;
            self.waiting[passenger.origin.index()].push(index);
            debug!(
                passenger = index,
                origin = passenger.origin.0,
                destination = passenger.destination.0,
                "spawned"
            );
            self.dispatch(Event::hall_call(passenger.origin, passenger.direction()));
        }
    }

    /// Advance one cabin by at most one floor.  Returns `true` if it moved.
    fn step_cabin<O: SimObserver>(&mut self, id: CabinId, now: Tick, observer: &mut O) -> bool {
        let cabin = self.fleet.cabin(id);
        let current = cabin.current_floor;
        let Some(head) = cabin.destination_queue.head() else {
            if self.dispatcher.calls().pending_floors().next().is_some() {
                self.dispatch(Event::Idle { cabin: id });
            }
            return false;
        };

        if head == current {
            self.arrive(id, now, observer);
            return false;
        }

        let direction = cabin.destination_direction();
        let next = if head > current { Floor(current.0 + 1) } else { Floor(current.0 - 1) };
        self.fleet.cabin_mut(id).current_floor = next;
        trace!(cabin = %id, floor = next.0, %direction, "moved");

        if next != head {
            self.dispatch(Event::PassingFloor { cabin: id, floor: next, direction });
            if self.fleet.cabin(id).destination_queue.head() != Some(next) {
                return true;
            }
        }
        self.arrive(id, now, observer);
        true
    }

    fn arrive<O: SimObserver>(&mut self, id: CabinId, now: Tick, observer: &mut O) {
        let cabin = self.fleet.cabin_mut(id);
        let floor = cabin.current_floor;
        cabin.destination_queue.pop_front();
        cabin.pressed_floors.remove(&floor);
        debug!(cabin = %id, floor = floor.0, queue = %cabin.destination_queue, "arrived");

        self.dispatch(Event::StoppedAtFloor { cabin: id, floor });
        self.exchange(id, floor, now, observer);

        if self.fleet.cabin(id).is_idle() {
            self.dispatch(Event::Idle { cabin: id });
        }
    }

    /// Let riders off at `floor`, then board waiting passengers.
    fn exchange<O: SimObserver>(&mut self, id: CabinId, floor: Floor, now: Tick, observer: &mut O) {
        let passengers = &self.passengers;

        // ── Alight ────────────────────────────────────────────────────────
        let mut alighted = Vec::new();
        self.riders[id.index()].retain(|r| {
            let off = passengers[r.passenger].destination == floor;
            if off {
                alighted.push(*r);
            }
            !off
        });
        for rider in alighted {
            let delivery = Delivery {
                passenger:    rider.passenger,
                cabin:        id,
                spawn_tick:   passengers[rider.passenger].spawn_tick,
                boarded_at:   rider.boarded_at,
                delivered_at: now,
            };
            self.delivered += 1;
            debug!(passenger = rider.passenger, cabin = %id, floor = floor.0, "delivered");
            observer.on_delivered(&delivery);
        }

        // ── Board ─────────────────────────────────────────────────────────
        let cabin = self.fleet.cabin(id);
        let (going_up, going_down) = (cabin.going_up_indicator, cabin.going_down_indicator);
        let capacity = self.config.cabin_capacity as usize;
        let riders = &mut self.riders[id.index()];
        let mut requested = Vec::new();

        self.waiting[floor.index()].retain(|&p| {
            let passenger = &passengers[p];
            let lamp_lit = match passenger.direction() {
                CallDirection::Up   => going_up,
                CallDirection::Down => going_down,
            };
            if lamp_lit && riders.len() < capacity {
                riders.push(Rider { passenger: p, boarded_at: now });
                requested.push(passenger.destination);
                false
            } else {
                true
            }
        });
        let load_factor = riders.len() as f64 / capacity as f64;
        self.fleet.cabin_mut(id).load_factor = load_factor;

        for destination in requested {
            if self.fleet.cabin_mut(id).pressed_floors.insert(destination) {
                self.dispatch(Event::FloorButtonPressed { cabin: id, floor: destination });
            }
        }
    }

    fn repress_hall_calls(&mut self) {
        for f in 0..self.waiting.len() {
            let floor = Floor(f as u32);
            let mut wants_up = false;
            let mut wants_down = false;
            for &p in &self.waiting[f] {
                match self.passengers[p].direction() {
                    CallDirection::Up   => wants_up = true,
                    CallDirection::Down => wants_down = true,
                }
            }
            for (wanted, direction) in [(wants_up, CallDirection::Up), (wants_down, CallDirection::Down)] {
                if wanted && !self.dispatcher.calls().has_pending(floor, direction) {
                    trace!(floor = f, %direction, "re-pressing hall button");
                    self.dispatch(Event::hall_call(floor, direction));
                }
            }
        }
    }
}

//! tower — a morning rush in a 12-floor office block served by 3 cabins.
//!
//! Runs the reference simulation against an embedded scenario and prints a
//! per-cabin table plus a JSON summary.  Set `RUST_LOG=lift_dispatch=debug`
//! to watch every dispatch decision.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use lift_core::{DispatchConfig, Floor, SimConfig, Tick};
use lift_dispatch::Dispatcher;
use lift_fleet::Fleet;
use lift_sim::{Delivery, SimBuilder, SimObserver, StatsObserver, load_passengers_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:    u32 = 12;
const CABIN_CAPACITY: u32 = 8;
const TOTAL_TICKS:    u64 = 400;
const SEED:           u64 = 42;

// ── Scenario CSV ──────────────────────────────────────────────────────────────

// Lobby arrivals heading up, a few inter-floor trips, and early leavers
// heading down to the lobby.
const SCENARIO_CSV: &str = "\
origin,destination,spawn_tick
0,5,0
0,9,0
0,11,1
0,3,1
0,7,2
0,7,2
4,0,3
0,10,4
8,2,5
0,6,6
0,11,6
11,0,8
0,2,9
6,9,10
0,8,12
3,0,12
0,4,14
10,1,15
0,9,16
0,5,18
7,0,20
0,11,22
2,6,24
9,0,25
0,3,28
";

// ── Observer wrapper to count per-cabin deliveries ───────────────────────────

struct TowerObserver {
    stats:     StatsObserver,
    per_cabin: Vec<usize>,
}

impl TowerObserver {
    fn new(cabins: usize) -> Self {
        Self { stats: StatsObserver::new(), per_cabin: vec![0; cabins] }
    }
}

impl SimObserver for TowerObserver {
    fn on_tick_end(&mut self, tick: Tick, moved: usize) {
        self.stats.on_tick_end(tick, moved);
    }

    fn on_delivered(&mut self, delivery: &Delivery) {
        self.per_cabin[delivery.cabin.index()] += 1;
        self.stats.on_delivered(delivery);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.stats.on_sim_end(final_tick);
    }
}

// ── JSON summary ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    config:        &'a DispatchConfig,
    passengers:    usize,
    stats:         &'a StatsObserver,
    mean_wait:     Option<f64>,
    mean_ride:     Option<f64>,
    still_waiting: usize,
}

fn print_cabins(fleet: &Fleet, dispatcher: &Dispatcher, per_cabin: &[usize]) {
    println!("{:<10} {:>6} {:>10} {:>8}", "cabin", "floor", "delivered", "queue");
    for cabin in fleet.iter() {
        println!(
            "{:<10} {:>6} {:>10} {:>8}",
            cabin.id.to_string(),
            cabin.current_floor.0,
            per_cabin[cabin.id.index()],
            cabin.destination_queue.to_string(),
        );
    }
    let pending: Vec<u32> = dispatcher.calls().pending_floors().map(|f| f.0).collect();
    println!("Pending hall calls: {pending:?}");
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    println!("=== tower — lift dispatch demo ===");
    println!("Floors: {FLOOR_COUNT}  |  Cabins: 3  |  Capacity: {CABIN_CAPACITY}  |  Seed: {SEED}");
    println!();

    // 1. Load the scenario.
    let passengers = load_passengers_reader(Cursor::new(SCENARIO_CSV))?;
    println!("Loaded {} passengers", passengers.len());

    // 2. Build the simulation: cabins parked at the lobby, mid-rise, and top.
    let dispatch = DispatchConfig::new(FLOOR_COUNT).with_seed(SEED);
    let mut sim = SimBuilder::new(SimConfig::new(TOTAL_TICKS, CABIN_CAPACITY), dispatch.clone())
        .cabin_at(Floor(0))
        .cabin_at(Floor(6))
        .cabin_at(Floor(FLOOR_COUNT - 1))
        .passengers(passengers)
        .build()?;

    // 3. Run.
    let mut observer = TowerObserver::new(sim.fleet.len());
    let started = Instant::now();
    sim.run(&mut observer);
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "simulation finished");

    // 4. Report.
    println!();
    print_cabins(&sim.fleet, &sim.dispatcher, &observer.per_cabin);
    println!();

    let stats = &observer.stats;
    let summary = Summary {
        config:        &dispatch,
        passengers:    sim.passengers().len(),
        stats,
        mean_wait:     stats.mean_wait(),
        mean_ride:     stats.mean_ride(),
        still_waiting: sim.waiting_count(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if !sim.is_finished() {
        anyhow::bail!(
            "only {} of {} passengers delivered in {TOTAL_TICKS} ticks",
            sim.delivered(),
            sim.passengers().len()
        );
    }
    Ok(())
}

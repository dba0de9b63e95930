//! Simulation observer trait and a statistics collector.

use lift_core::Tick;

use crate::Delivery;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_delivered(&mut self, delivery: &Delivery) {
///         println!("passenger {} arrived after {} ticks", delivery.passenger, delivery.wait_ticks());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of cabins that travelled a floor this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called whenever a passenger leaves a cabin at their destination.
    fn on_delivered(&mut self, _delivery: &Delivery) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── StatsObserver ─────────────────────────────────────────────────────────────

/// Accumulates trip statistics over a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsObserver {
    pub delivered:        usize,
    pub total_wait_ticks: u64,
    pub total_ride_ticks: u64,
    pub max_wait_ticks:   u64,
    pub cabin_moves:      u64,
    pub final_tick:       Option<Tick>,
}

impl StatsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean ticks from spawn to boarding; `None` before the first delivery.
    pub fn mean_wait(&self) -> Option<f64> {
        (self.delivered > 0).then(|| self.total_wait_ticks as f64 / self.delivered as f64)
    }

    /// Mean ticks from boarding to arrival; `None` before the first delivery.
    pub fn mean_ride(&self) -> Option<f64> {
        (self.delivered > 0).then(|| self.total_ride_ticks as f64 / self.delivered as f64)
    }
}

impl SimObserver for StatsObserver {
    fn on_tick_end(&mut self, _tick: Tick, moved: usize) {
        self.cabin_moves += moved as u64;
    }

    fn on_delivered(&mut self, delivery: &Delivery) {
        let wait = delivery.wait_ticks();
        self.delivered += 1;
        self.total_wait_ticks += wait;
        self.total_ride_ticks += delivery.ride_ticks();
        self.max_wait_ticks = self.max_wait_ticks.max(wait);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.final_tick = Some(final_tick);
    }
}

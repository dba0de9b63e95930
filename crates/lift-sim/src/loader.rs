//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per passenger.  Rows need not be sorted; the simulation spawns
//! passengers in `spawn_tick` order, keeping file order among equal ticks.
//!
//! ```csv
//! origin,destination,spawn_tick
//! 0,7,0
//! 5,0,3
//! 11,2,3
//! ```
//!
//! Floors are checked against the building later, by
//! [`SimBuilder::build`][crate::SimBuilder::build].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::{Passenger, SimError, SimResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PassengerRecord {
    origin:      u32,
    destination: u32,
    spawn_tick:  u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a passenger scenario from a CSV file.
pub fn load_passengers_csv(path: &Path) -> SimResult<Vec<Passenger>> {
    let file = std::fs::File::open(path)?;
    load_passengers_reader(file)
}

/// Like [`load_passengers_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scenarios embedded
/// in a binary.
pub fn load_passengers_reader<R: Read>(reader: R) -> SimResult<Vec<Passenger>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut passengers = Vec::new();

    for (row, result) in csv_reader.deserialize::<PassengerRecord>().enumerate() {
        let record = result.map_err(|e| SimError::Scenario(e.to_string()))?;
        if record.origin == record.destination {
            return Err(SimError::Scenario(format!(
                "row {}: origin and destination are both floor {}",
                row + 1,
                record.origin
            )));
        }
        passengers.push(Passenger::new(
            Floor(record.origin),
            Floor(record.destination),
            Tick(record.spawn_tick),
        ));
    }

    Ok(passengers)
}

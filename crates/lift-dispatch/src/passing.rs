//! Stop-or-continue decisions for a cabin passing a floor mid-transit.

use lift_core::{CabinId, DispatchConfig, Direction, Floor};
use lift_fleet::{Cabin, Command, Fleet};
use tracing::debug;

use crate::CallTable;

/// Why a passing cabin should stop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StopReason {
    /// A passenger inside pressed this floor.
    DropOff,
    /// A hall call in the direction of travel is waiting and there is room.
    PickUp,
}

/// Decide whether `cabin`, travelling in `direction`, should stop at `floor`.
///
/// Drop-offs win over pick-ups.  A pick-up needs a pending call in the
/// direction of travel and a load factor strictly below the threshold.
pub fn stop_reason(
    config:    &DispatchConfig,
    calls:     &CallTable,
    cabin:     &Cabin,
    floor:     Floor,
    direction: Direction,
) -> Option<StopReason> {
    if cabin.is_pressed(floor) {
        return Some(StopReason::DropOff);
    }
    let call_waiting = direction.as_call().is_some_and(|d| calls.has_pending(floor, d));
    if call_waiting && cabin.load_factor < config.load_threshold {
        return Some(StopReason::PickUp);
    }
    None
}

/// Handle a passing-floor notification.
///
/// On a stop the floor leaves the queue, the call in the direction of travel
/// is credited to this stop, and an immediate stop is commanded last.
pub(crate) fn on_passing_floor(
    config:    &DispatchConfig,
    calls:     &mut CallTable,
    fleet:     &mut Fleet,
    cabin:     CabinId,
    floor:     Floor,
    direction: Direction,
    out:       &mut Vec<Command>,
) -> Option<StopReason> {
    let reason = stop_reason(config, calls, fleet.cabin(cabin), floor, direction)?;

    if fleet.cabin_mut(cabin).destination_queue.remove(floor) {
        out.push(Command::CheckDestinationQueue { cabin });
    }
    if let Some(call) = direction.as_call() {
        calls.clear(floor, call);
    }
    out.push(Command::GoToFloor { cabin, floor, immediate: true });

    debug!(%cabin, floor = floor.0, %direction, ?reason, "stopping while passing");
    Some(reason)
}

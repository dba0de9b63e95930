//! Routing for cabins that have run out of destinations.
//!
//! Pressed buttons come first: a cabin with passengers aboard serves the
//! side with less to do, then sweeps back through the rest.  Otherwise it
//! heads for the outermost unserved hall call.

use lift_core::{CabinId, DispatchRng, Floor};
use lift_fleet::{Cabin, Command, Fleet};
use tracing::debug;

use crate::CallTable;
use crate::sweep::is_covered;

/// Where an idle cabin was sent, and why.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IdleRoute {
    /// Towards a floor pressed inside the cabin.
    PressedFloor(Floor),
    /// Towards an outstanding hall call no other cabin covers.
    HallCall(Floor),
}

impl IdleRoute {
    pub fn floor(self) -> Floor {
        match self {
            IdleRoute::PressedFloor(f) | IdleRoute::HallCall(f) => f,
        }
    }
}

/// The pressed floor an idle cabin should visit first.
///
/// Each side (above / at-or-below the cabin) is weighted by the summed
/// distance to its pressed floors.  The cabin serves the lighter side first,
/// starting with its nearest floor, and collects the heavier side on the way
/// back.  `None` when nothing is pressed.
pub fn pressed_floor_target(cabin: &Cabin) -> Option<Floor> {
    let current = cabin.current_floor;
    let mut above_weight = 0u64;
    let mut below_weight = 0u64;
    let mut nearest_above: Option<Floor> = None;
    let mut nearest_below: Option<Floor> = None;

    for &floor in &cabin.pressed_floors {
        if floor > current {
            above_weight += u64::from(floor.distance(current));
            nearest_above = Some(nearest_above.map_or(floor, |f| f.min(floor)));
        } else {
            below_weight += u64::from(current.distance(floor));
            nearest_below = Some(nearest_below.map_or(floor, |f| f.max(floor)));
        }
    }

    if above_weight > below_weight {
        nearest_below.or(nearest_above)
    } else {
        nearest_above.or(nearest_below)
    }
}

/// The hall call an idle cabin at `current` should head for.
///
/// Only calls outside every cabin's planned sweep count.  Of the lowest and
/// highest such floors the farther one wins; an exact tie is settled by a
/// coin flip.  `None` when no call qualifies.
pub fn hall_call_target(
    calls:   &CallTable,
    fleet:   &Fleet,
    current: Floor,
    rng:     &mut DispatchRng,
) -> Option<Floor> {
    let mut uncovered = calls.pending_floors().filter(|&f| !is_covered(fleet, f));
    let lowest = uncovered.next()?;
    let highest = uncovered.last().unwrap_or(lowest);

    let below = current.distance(lowest);
    let above = current.distance(highest);
    let target = if above > below {
        highest
    } else if below > above {
        lowest
    } else if lowest == highest {
        lowest
    } else {
        rng.pick(lowest, highest)
    };
    Some(target)
}

/// Handle an idle notification for `cabin`.
pub(crate) fn on_idle(
    calls: &CallTable,
    fleet: &Fleet,
    rng:   &mut DispatchRng,
    cabin: CabinId,
    out:   &mut Vec<Command>,
) -> Option<IdleRoute> {
    let c = fleet.cabin(cabin);
    let route = match pressed_floor_target(c) {
        Some(floor) => IdleRoute::PressedFloor(floor),
        None => IdleRoute::HallCall(hall_call_target(calls, fleet, c.current_floor, rng)?),
    };

    out.push(Command::GoToFloor { cabin, floor: route.floor(), immediate: false });
    debug!(%cabin, at = c.current_floor.0, ?route, "routing idle cabin");
    Some(route)
}

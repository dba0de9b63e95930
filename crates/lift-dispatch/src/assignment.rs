//! New hall calls: leave them to an approaching cabin, stretch a cabin's
//! sweep, or wake an idle one.

use lift_core::{CabinId, CallDirection, DispatchConfig, Floor};
use lift_fleet::{Command, Fleet};
use tracing::debug;

use crate::sweep::{closest, effective_direction, incoming_cabins, Reach};
use crate::{CallTable, DestinationScheduler};

/// What the dispatcher did with a new hall call.
///
/// At most one cabin is newly claimed per call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Assignment {
    /// A cabin's planned sweep already passes the floor in the right
    /// direction; it will pick the call up when passing.
    AlreadyComing,
    /// The floor was added to the sweep of a cabin heading that way.
    Extended(CabinId),
    /// An idle cabin was sent to the floor.
    Dispatched(CabinId),
    /// No cabin could take it yet; the call waits for a passing or idle cabin.
    Queued,
}

impl Assignment {
    /// The cabin newly claimed for the call, if any.
    pub fn cabin(self) -> Option<CabinId> {
        match self {
            Assignment::Extended(id) | Assignment::Dispatched(id) => Some(id),
            Assignment::AlreadyComing | Assignment::Queued => None,
        }
    }
}

/// Record a hall call and decide who serves it.
pub(crate) fn assign_call(
    config:    &DispatchConfig,
    scheduler: &DestinationScheduler,
    calls:     &mut CallTable,
    fleet:     &mut Fleet,
    floor:     Floor,
    direction: CallDirection,
    out:       &mut Vec<Command>,
) -> Assignment {
    calls.record(floor, direction);
    let effective = effective_direction(config, floor, direction);

    let already_coming = incoming_cabins(fleet, floor, effective, Reach::Full).next().is_some();
    let assignment = if already_coming {
        Assignment::AlreadyComing
    } else {
        let en_route = closest(incoming_cabins(fleet, floor, effective, Reach::HalfWay), floor);
        let idle = closest(fleet.iter().filter(|c| c.is_idle()), floor);
        match (en_route, idle) {
            (Some(id), _) => {
                if scheduler.schedule(fleet.cabin_mut(id), floor, Some(effective)) {
                    out.push(Command::CheckDestinationQueue { cabin: id });
                }
                Assignment::Extended(id)
            }
            (None, Some(id)) => {
                if scheduler.schedule(fleet.cabin_mut(id), floor, None) {
                    out.push(Command::CheckDestinationQueue { cabin: id });
                }
                Assignment::Dispatched(id)
            }
            (None, None) => Assignment::Queued,
        }
    };

    debug!(floor = floor.0, %direction, %effective, ?assignment, "hall call");
    assignment
}

//! Notifications the dispatcher consumes.

use lift_core::{CabinId, CallDirection, Direction, Floor};

/// One notification from a floor or a cabin.
///
/// Events are handled one at a time, each to completion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Hall button "up" pressed at `floor`.
    UpButtonPressed { floor: Floor },

    /// Hall button "down" pressed at `floor`.
    DownButtonPressed { floor: Floor },

    /// A passenger inside `cabin` requested `floor`.  The motion engine has
    /// already added it to the cabin's pressed floors.
    FloorButtonPressed { cabin: CabinId, floor: Floor },

    /// `cabin` is about to pass `floor` while travelling in `direction`.
    PassingFloor { cabin: CabinId, floor: Floor, direction: Direction },

    /// `cabin` has stopped at `floor` and removed it from its queue.
    StoppedAtFloor { cabin: CabinId, floor: Floor },

    /// `cabin` has no destinations left.
    Idle { cabin: CabinId },
}

impl Event {
    /// The hall event for a call in `direction` at `floor`.
    pub fn hall_call(floor: Floor, direction: CallDirection) -> Event {
        match direction {
            CallDirection::Up   => Event::UpButtonPressed { floor },
            CallDirection::Down => Event::DownButtonPressed { floor },
        }
    }
}

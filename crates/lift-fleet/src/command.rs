//! Commands the dispatcher issues to the motion engine.

use lift_core::{CabinId, Floor};

/// An instruction for the collaborator that moves cabins and drives lamps.
///
/// Event handlers return commands instead of calling out, so every queue
/// mutation a handler makes is committed before any command runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Add `floor` to the cabin's plan.
    ///
    /// `immediate` makes it the next stop; otherwise it is appended.
    GoToFloor {
        cabin:     CabinId,
        floor:     Floor,
        immediate: bool,
    },

    /// The dispatcher edited the cabin's destination queue directly; the
    /// motion engine should re-validate its current heading.
    CheckDestinationQueue { cabin: CabinId },

    /// Set the cabin's direction lamps.
    SetIndicators {
        cabin:      CabinId,
        going_up:   bool,
        going_down: bool,
    },
}

impl Command {
    /// The cabin this command targets.
    pub fn cabin(&self) -> CabinId {
        match *self {
            Command::GoToFloor { cabin, .. }
            | Command::CheckDestinationQueue { cabin }
            | Command::SetIndicators { cabin, .. } => cabin,
        }
    }
}

//! Travel and call directions, and the direction resolver.

use std::fmt;

use crate::Floor;

/// The travel intent of a cabin.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Stopped,
}

impl Direction {
    /// The hall-call direction a cabin travelling this way can serve.
    pub fn as_call(self) -> Option<CallDirection> {
        match self {
            Direction::Up      => Some(CallDirection::Up),
            Direction::Down    => Some(CallDirection::Down),
            Direction::Stopped => None,
        }
    }

    /// Signed floor step used when simulating a sweep.
    ///
    /// A stopped cabin simulates downwards.
    #[inline]
    pub fn step(self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down | Direction::Stopped => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up      => "up",
            Direction::Down    => "down",
            Direction::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// The direction requested by a hall call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallDirection {
    Up,
    Down,
}

impl CallDirection {
    #[inline]
    pub fn flip(self) -> CallDirection {
        match self {
            CallDirection::Up   => CallDirection::Down,
            CallDirection::Down => CallDirection::Up,
        }
    }

    #[inline]
    pub fn as_direction(self) -> Direction {
        match self {
            CallDirection::Up   => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }

    /// Signed floor step matching [`Direction::step`].
    #[inline]
    pub fn step(self) -> i64 {
        self.as_direction().step()
    }
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_direction().fmt(f)
    }
}

/// Derive a cabin's travel intent from its position and the head of its
/// destination queue.
///
/// An empty queue is `Stopped`.  A head equal to the current floor is also
/// `Stopped`: the cabin is about to open its doors where it is.
pub fn resolve_direction(current: Floor, head: Option<Floor>) -> Direction {
    match head {
        None => Direction::Stopped,
        Some(head) if current < head => Direction::Up,
        Some(head) if current > head => Direction::Down,
        Some(_) => Direction::Stopped,
    }
}

//! The ordered stop plan of one cabin.

use std::fmt;

use lift_core::Floor;

/// An ordered sequence of floors a cabin intends to visit.
///
/// Each floor appears at most once.  The order is the planned visiting
/// sequence; it is not necessarily monotonic because a sweep that reaches a
/// terminal turns around.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationQueue {
    floors: Vec<Floor>,
}

impl DestinationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from `floors`, keeping the first occurrence of each.
    pub fn from_floors<I: IntoIterator<Item = Floor>>(floors: I) -> Self {
        let mut queue = Self::new();
        for floor in floors {
            queue.push_back(floor);
        }
        queue
    }

    #[inline]
    pub fn head(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    pub fn position(&self, floor: Floor) -> Option<usize> {
        self.floors.iter().position(|&f| f == floor)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }

    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }

    /// Highest queued floor, `None` when empty.
    pub fn max(&self) -> Option<Floor> {
        self.floors.iter().copied().max()
    }

    /// Lowest queued floor, `None` when empty.
    pub fn min(&self) -> Option<Floor> {
        self.floors.iter().copied().min()
    }

    /// Place `floor` at `index` (clamped to the queue length), keeping the
    /// relative order of every other floor.
    ///
    /// A floor already queued elsewhere is moved rather than duplicated.
    /// Returns `false` if the queue was left unchanged.
    pub fn insert_at(&mut self, index: usize, floor: Floor) -> bool {
        let mut index = index.min(self.floors.len());
        if let Some(existing) = self.position(floor) {
            if existing == index || existing + 1 == index {
                return false;
            }
            self.floors.remove(existing);
            if existing < index {
                index -= 1;
            }
        }
        self.floors.insert(index, floor);
        true
    }

    /// Append `floor` unless it is already queued.
    pub fn push_back(&mut self, floor: Floor) -> bool {
        if self.contains(floor) {
            return false;
        }
        self.floors.push(floor);
        true
    }

    /// Make `floor` the next stop, removing any later occurrence.
    pub fn push_front(&mut self, floor: Floor) -> bool {
        self.insert_at(0, floor)
    }

    /// Remove `floor` if queued.  Returns `true` if it was present.
    pub fn remove(&mut self, floor: Floor) -> bool {
        match self.position(floor) {
            Some(i) => {
                self.floors.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove and return the next stop.
    pub fn pop_front(&mut self) -> Option<Floor> {
        if self.floors.is_empty() {
            None
        } else {
            Some(self.floors.remove(0))
        }
    }
}

impl fmt::Display for DestinationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, floor) in self.floors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", floor.0)?;
        }
        f.write_str("]")
    }
}

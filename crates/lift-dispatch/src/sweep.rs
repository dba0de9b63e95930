//! Shared "is a cabin already heading there?" tests.

use lift_core::{CabinId, CallDirection, DispatchConfig, Direction, Floor};
use lift_fleet::{Cabin, Fleet};

/// How far ahead a cabin's sweep must reach to count as approaching a floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Reach {
    /// The floor lies between the cabin and its furthest planned stop.
    Full,
    /// The cabin is merely heading towards the floor.
    HalfWay,
}

/// The furthest planned stop in the cabin's direction of travel.
///
/// `None` for a stopped cabin.
pub fn furthest_destination(cabin: &Cabin) -> Option<Floor> {
    match cabin.destination_direction() {
        Direction::Up      => cabin.destination_queue.max(),
        Direction::Down    => cabin.destination_queue.min(),
        Direction::Stopped => None,
    }
}

/// `true` if `cabin` is strictly before `floor` in its direction of travel
/// and, for [`Reach::Full`], will get at least as far as `floor`.
pub fn is_coming_towards(cabin: &Cabin, floor: Floor, reach: Reach) -> bool {
    let Some(furthest) = furthest_destination(cabin) else {
        return false;
    };
    let current = cabin.current_floor;
    let half_way = reach == Reach::HalfWay;
    match cabin.destination_direction() {
        Direction::Up      => current < floor && (half_way || furthest >= floor),
        Direction::Down    => current > floor && (half_way || furthest <= floor),
        Direction::Stopped => false,
    }
}

/// The direction a cabin must travel in to pick up a `call` at `floor`.
///
/// At a terminal the call is inverted: a cabin reaching floor 0 arrives
/// travelling down, whatever the passenger pressed.
pub fn effective_direction(config: &DispatchConfig, floor: Floor, call: CallDirection) -> CallDirection {
    if config.is_terminal(floor) { call.flip() } else { call }
}

/// Cabins travelling in `direction` and approaching `floor`.
pub fn incoming_cabins(
    fleet:     &Fleet,
    floor:     Floor,
    direction: CallDirection,
    reach:     Reach,
) -> impl Iterator<Item = &Cabin> {
    fleet
        .iter()
        .filter(move |c| c.destination_direction() == direction.as_direction())
        .filter(move |c| is_coming_towards(c, floor, reach))
}

/// `true` if any cabin's planned sweep already covers `floor`.
pub fn is_covered(fleet: &Fleet, floor: Floor) -> bool {
    fleet.iter().any(|c| is_coming_towards(c, floor, Reach::Full))
}

/// The candidate nearest to `floor`.
///
/// Ties on distance go to the lowest `CabinId`.
pub fn closest<'a>(candidates: impl Iterator<Item = &'a Cabin>, floor: Floor) -> Option<CabinId> {
    candidates
        .min_by_key(|c| (c.current_floor.distance(floor), c.id))
        .map(|c| c.id)
}

//! Unit tests for lift-fleet.

use lift_core::{CabinId, Direction, Floor};

use crate::{Cabin, Command, DestinationQueue, Fleet, FleetBuilder, FleetError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn q(floors: &[u32]) -> DestinationQueue {
    DestinationQueue::from_floors(floors.iter().map(|&f| Floor(f)))
}

fn floors(queue: &DestinationQueue) -> Vec<u32> {
    queue.iter().map(|f| f.0).collect()
}

fn fleet_at(floor_count: u32, at: &[u32]) -> Fleet {
    at.iter()
        .fold(FleetBuilder::new(floor_count), |b, &f| b.cabin_at(Floor(f)))
        .build()
        .unwrap()
}

// ── DestinationQueue ──────────────────────────────────────────────────────────

#[cfg(test)]
mod destination_queue {
    use super::*;

    #[test]
    fn from_floors_drops_duplicates() {
        assert_eq!(floors(&q(&[3, 1, 3, 4, 1])), vec![3, 1, 4]);
    }

    #[test]
    fn push_back_is_idempotent() {
        let mut queue = q(&[2]);
        assert!(queue.push_back(Floor(5)));
        assert!(!queue.push_back(Floor(5)));
        assert_eq!(floors(&queue), vec![2, 5]);
    }

    #[test]
    fn push_front_moves_existing_floor() {
        let mut queue = q(&[2, 5, 7]);
        assert!(queue.push_front(Floor(7)));
        assert_eq!(floors(&queue), vec![7, 2, 5]);
        assert!(!queue.push_front(Floor(7)));
    }

    #[test]
    fn insert_at_preserves_relative_order() {
        let mut queue = q(&[1, 4, 8]);
        assert!(queue.insert_at(2, Floor(6)));
        assert_eq!(floors(&queue), vec![1, 4, 6, 8]);
    }

    #[test]
    fn insert_at_clamps_index() {
        let mut queue = q(&[1]);
        assert!(queue.insert_at(99, Floor(3)));
        assert_eq!(floors(&queue), vec![1, 3]);
    }

    #[test]
    fn insert_at_moves_later_occurrence_forward() {
        let mut queue = q(&[1, 4, 8, 6]);
        assert!(queue.insert_at(1, Floor(6)));
        assert_eq!(floors(&queue), vec![1, 6, 4, 8]);
    }

    #[test]
    fn insert_at_same_slot_is_noop() {
        let mut queue = q(&[1, 4, 8]);
        assert!(!queue.insert_at(1, Floor(4)));
        assert!(!queue.insert_at(2, Floor(4)));
        assert_eq!(floors(&queue), vec![1, 4, 8]);
    }

    #[test]
    fn remove_and_pop() {
        let mut queue = q(&[3, 6, 9]);
        assert!(queue.remove(Floor(6)));
        assert!(!queue.remove(Floor(6)));
        assert_eq!(queue.pop_front(), Some(Floor(3)));
        assert_eq!(queue.pop_front(), Some(Floor(9)));
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn extremes_of_empty_queue_are_none() {
        let queue = DestinationQueue::new();
        assert_eq!(queue.max(), None);
        assert_eq!(queue.min(), None);
        assert_eq!(queue.head(), None);
    }

    #[test]
    fn display() {
        assert_eq!(q(&[4, 0, 2]).to_string(), "[4,0,2]");
        assert_eq!(DestinationQueue::new().to_string(), "[]");
    }
}

// ── Cabin ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cabin {
    use super::*;

    #[test]
    fn new_cabin_is_idle_and_stopped() {
        let cabin = Cabin::new(CabinId(0), Floor(2));
        assert!(cabin.is_idle());
        assert_eq!(cabin.destination_direction(), Direction::Stopped);
        assert!(cabin.going_up_indicator && cabin.going_down_indicator);
    }

    #[test]
    fn direction_follows_queue_head() {
        let mut cabin = Cabin::new(CabinId(0), Floor(1));
        cabin.destination_queue = q(&[4]);
        assert_eq!(cabin.destination_direction(), Direction::Up);
        cabin.destination_queue = q(&[0, 4]);
        assert_eq!(cabin.destination_direction(), Direction::Down);
    }
}

// ── Fleet + builder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;

    #[test]
    fn builder_assigns_sequential_ids() {
        let fleet = fleet_at(10, &[0, 9, 4]);
        let ids: Vec<CabinId> = fleet.ids().collect();
        assert_eq!(ids, vec![CabinId(0), CabinId(1), CabinId(2)]);
        assert_eq!(fleet.cabin(CabinId(1)).current_floor, Floor(9));
        assert_eq!(fleet.floor_count(), 10);
    }

    #[test]
    fn builder_rejects_floor_outside_building() {
        let result = FleetBuilder::new(5).cabin_at(Floor(5)).build();
        assert!(matches!(
            result,
            Err(FleetError::InitialFloorOutOfRange { cabin: CabinId(0), floor: Floor(5), .. })
        ));
    }

    #[test]
    fn cabins_parks_at_ground_floor() {
        let fleet = FleetBuilder::new(5).cabins(3).build().unwrap();
        assert_eq!(fleet.len(), 3);
        assert!(fleet.iter().all(|c| c.current_floor == Floor(0)));
        assert_eq!(fleet.cabins_at(Floor(0)).count(), 3);
    }

    #[test]
    fn get_unknown_cabin_errors() {
        let fleet = fleet_at(5, &[0]);
        assert!(fleet.get(CabinId(0)).is_ok());
        assert!(matches!(fleet.get(CabinId(4)), Err(FleetError::CabinNotFound(CabinId(4)))));
    }
}

// ── Command application ───────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use super::*;

    #[test]
    fn go_to_floor_appends() {
        let mut fleet = fleet_at(10, &[0]);
        let cabin = CabinId(0);
        fleet.apply(&Command::GoToFloor { cabin, floor: Floor(3), immediate: false });
        fleet.apply(&Command::GoToFloor { cabin, floor: Floor(6), immediate: false });
        assert_eq!(floors(&fleet.cabin(cabin).destination_queue), vec![3, 6]);
    }

    #[test]
    fn immediate_go_to_floor_becomes_head() {
        let mut fleet = fleet_at(10, &[0]);
        let cabin = CabinId(0);
        fleet.cabin_mut(cabin).destination_queue = q(&[5, 8]);
        assert!(fleet.apply(&Command::GoToFloor { cabin, floor: Floor(2), immediate: true }));
        assert_eq!(floors(&fleet.cabin(cabin).destination_queue), vec![2, 5, 8]);
    }

    #[test]
    fn go_to_queued_floor_does_not_duplicate() {
        let mut fleet = fleet_at(10, &[0]);
        let cabin = CabinId(0);
        fleet.cabin_mut(cabin).destination_queue = q(&[5]);
        assert!(!fleet.apply(&Command::GoToFloor { cabin, floor: Floor(5), immediate: false }));
        assert_eq!(fleet.cabin(cabin).destination_queue.len(), 1);
    }

    #[test]
    fn set_indicators() {
        let mut fleet = fleet_at(10, &[0]);
        let cabin = CabinId(0);
        assert!(fleet.apply(&Command::SetIndicators { cabin, going_up: true, going_down: false }));
        let c = fleet.cabin(cabin);
        assert!(c.going_up_indicator);
        assert!(!c.going_down_indicator);
    }

    #[test]
    fn check_destination_queue_changes_nothing() {
        let mut fleet = fleet_at(10, &[0]);
        assert!(!fleet.apply(&Command::CheckDestinationQueue { cabin: CabinId(0) }));
    }

    #[test]
    fn apply_all_in_order() {
        let mut fleet = fleet_at(10, &[0, 0]);
        let cmds = vec![
            Command::GoToFloor { cabin: CabinId(1), floor: Floor(4), immediate: false },
            Command::GoToFloor { cabin: CabinId(1), floor: Floor(7), immediate: true },
        ];
        fleet.apply_all(&cmds);
        assert_eq!(floors(&fleet.cabin(CabinId(1)).destination_queue), vec![7, 4]);
        assert!(fleet.cabin(CabinId(0)).is_idle());
        assert_eq!(cmds[0].cabin(), CabinId(1));
    }
}

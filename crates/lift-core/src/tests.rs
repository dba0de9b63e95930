//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CabinId, Floor};

    #[test]
    fn index_roundtrip() {
        let id = CabinId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CabinId::try_from(3usize).unwrap(), id);
        assert_eq!(usize::from(Floor(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(CabinId(0) < CabinId(1));
        assert!(Floor(9) > Floor(2));
    }

    #[test]
    fn display() {
        assert_eq!(CabinId(2).to_string(), "CabinId(2)");
        assert_eq!(Floor(5).to_string(), "Floor(5)");
    }

    #[test]
    fn floor_distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(7)), 5);
        assert_eq!(Floor(7).distance(Floor(2)), 5);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }
}

#[cfg(test)]
mod direction {
    use crate::{CallDirection, Direction, Floor, resolve_direction};

    #[test]
    fn empty_queue_is_stopped() {
        assert_eq!(resolve_direction(Floor(3), None), Direction::Stopped);
    }

    #[test]
    fn head_above_is_up_and_below_is_down() {
        assert_eq!(resolve_direction(Floor(1), Some(Floor(4))), Direction::Up);
        assert_eq!(resolve_direction(Floor(4), Some(Floor(1))), Direction::Down);
    }

    #[test]
    fn head_at_current_floor_is_stopped() {
        assert_eq!(resolve_direction(Floor(2), Some(Floor(2))), Direction::Stopped);
    }

    #[test]
    fn ground_floor_head_is_a_real_destination() {
        assert_eq!(resolve_direction(Floor(3), Some(Floor(0))), Direction::Down);
    }

    #[test]
    fn call_direction_flip_and_conversion() {
        assert_eq!(CallDirection::Up.flip(), CallDirection::Down);
        assert_eq!(CallDirection::Down.flip(), CallDirection::Up);
        assert_eq!(CallDirection::Up.as_direction(), Direction::Up);
        assert_eq!(Direction::Down.as_call(), Some(CallDirection::Down));
        assert_eq!(Direction::Stopped.as_call(), None);
    }

    #[test]
    fn stopped_simulates_downwards() {
        assert_eq!(Direction::Up.step(), 1);
        assert_eq!(Direction::Down.step(), -1);
        assert_eq!(Direction::Stopped.step(), -1);
        assert_eq!(CallDirection::Up.step(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Stopped.to_string(), "stopped");
        assert_eq!(CallDirection::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod config {
    use crate::{DispatchConfig, Floor, LiftError, DEFAULT_LOAD_THRESHOLD};

    #[test]
    fn defaults() {
        let cfg = DispatchConfig::new(10);
        assert_eq!(cfg.load_threshold, DEFAULT_LOAD_THRESHOLD);
        assert_eq!(cfg.top_floor(), Floor(9));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn terminals() {
        let cfg = DispatchConfig::new(5);
        assert!(cfg.is_terminal(Floor(0)));
        assert!(cfg.is_terminal(Floor(4)));
        assert!(!cfg.is_terminal(Floor(2)));
    }

    #[test]
    fn single_floor_building_rejected() {
        assert!(matches!(DispatchConfig::new(1).validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        assert!(DispatchConfig::new(5).with_load_threshold(0.0).validate().is_err());
        assert!(DispatchConfig::new(5).with_load_threshold(1.5).validate().is_err());
        assert!(DispatchConfig::new(5).with_load_threshold(f64::NAN).validate().is_err());
        assert!(DispatchConfig::new(5).with_load_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn check_floor() {
        let cfg = DispatchConfig::new(5);
        assert!(cfg.check_floor(Floor(4)).is_ok());
        assert!(matches!(
            cfg.check_floor(Floor(5)),
            Err(LiftError::FloorOutOfRange { floor: Floor(5), floor_count: 5 })
        ));
    }
}

#[cfg(test)]
mod rng {
    use crate::DispatchRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = DispatchRng::new(7);
        let mut b = DispatchRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.pick(1, 2), b.pick(1, 2));
        }
    }

    #[test]
    fn pick_returns_one_of_the_inputs() {
        let mut rng = DispatchRng::new(1);
        for _ in 0..32 {
            let v = rng.pick(10, 20);
            assert!(v == 10 || v == 20);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = DispatchRng::new(0);
        assert!(rng.gen_bool(1.0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(2.0)); // clamped
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn arithmetic_and_display() {
        let t = Tick(5) + 3;
        assert_eq!(t, Tick(8));
        assert_eq!(t.since(Tick(2)), 6);
        assert_eq!(Tick(2).since(t), 0);
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }
}

//! Unit tests for cs-core primitives.

#[cfg(test)]
mod ids {
    use crate::ActorId;

    #[test]
    fn index_roundtrip() {
        let id = ActorId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn step_in_exploration_order() {
        let c = Cell::new(5, 5);
        let steps: Vec<_> = Direction::ALL.iter().map(|&d| c.step(d).unwrap()).collect();
        assert_eq!(
            steps,
            vec![Cell::new(6, 5), Cell::new(4, 5), Cell::new(5, 6), Cell::new(5, 4)]
        );
    }

    #[test]
    fn step_off_origin_edge_is_none() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::East), Some(Cell::new(1, 0)));
    }

    #[test]
    fn manhattan_and_adjacency() {
        assert_eq!(Cell::new(2, 2).manhattan(Cell::new(10, 10)), 16);
        assert!(Cell::new(3, 4).is_adjacent(Cell::new(3, 5)));
        assert!(!Cell::new(3, 4).is_adjacent(Cell::new(4, 5)));
        assert!(!Cell::new(3, 4).is_adjacent(Cell::new(3, 4)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, 10).to_string(), "(2, 10)");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{Cadence, Tick, frame_budget};

    #[test]
    fn frames_count_up_from_zero() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(6).to_string(), "F6");
    }

    #[test]
    fn budget_is_whole_milliseconds() {
        assert_eq!(frame_budget(20), Duration::from_millis(50));
        assert_eq!(frame_budget(30), Duration::from_millis(33));
        assert_eq!(frame_budget(0), Duration::ZERO);
    }

    #[test]
    fn cadence_fires_on_multiples() {
        let c = Cadence::every(6);
        let due: Vec<u64> = (1..=20).filter(|&f| c.is_due(Tick(f))).collect();
        assert_eq!(due, vec![6, 12, 18]);
    }

    #[test]
    fn cadence_zero_means_every_frame() {
        let c = Cadence::every(0);
        assert_eq!(c, Cadence::EVERY_FRAME);
        assert!((1..10).all(|f| c.is_due(Tick(f))));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1_000u32), r2.gen_range(0..1_000u32));
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..20u32);
            assert!(v < 20);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[3]), Some(&3));
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{Cadence, RoutingMode, SimConfig};

    #[test]
    fn small_preset() {
        let cfg = SimConfig::small();
        cfg.validate().unwrap();
        assert_eq!((cfg.grid_width, cfg.grid_height), (20, 20));
        assert_eq!(cfg.window_width(), Some(400));
        assert_eq!(cfg.window_height(), Some(400));
        assert_eq!(cfg.frame_budget(), Duration::from_millis(50));
        assert_eq!(cfg.actor_cadence(), Cadence::every(6));
        assert_eq!(cfg.routing, RoutingMode::DirectedSearch);
    }

    #[test]
    fn large_preset() {
        let cfg = SimConfig::large();
        cfg.validate().unwrap();
        assert_eq!(cfg.cell_count(), 80 * 60);
        assert_eq!(cfg.window_width(), Some(1600));
        assert_eq!(cfg.window_height(), Some(1200));
        assert_eq!(cfg.actor_cadence(), Cadence::EVERY_FRAME);
        assert_eq!(cfg.routing, RoutingMode::RandomWalk);
    }

    #[test]
    fn rejects_degenerate_values() {
        let bad = [
            SimConfig { grid_width: 0, ..SimConfig::small() },
            SimConfig { grid_height: 0, ..SimConfig::small() },
            SimConfig { tile_size: 0, ..SimConfig::small() },
            SimConfig { fps: 0, ..SimConfig::small() },
            SimConfig { fps: 5_000, ..SimConfig::small() },
            SimConfig { actor_update_interval: 0, ..SimConfig::small() },
            SimConfig { grid_width: u32::MAX, tile_size: 2, ..SimConfig::small() },
        ];
        for cfg in bad {
            assert!(cfg.validate().is_err(), "accepted {cfg:?}");
        }
    }
}

#[cfg(test)]
mod routing {
    use crate::RoutingMode;

    #[test]
    fn parse_and_display_agree() {
        for mode in [RoutingMode::DirectedSearch, RoutingMode::RandomWalk] {
            assert_eq!(mode.to_string().parse::<RoutingMode>().unwrap(), mode);
        }
        assert!("teleport".parse::<RoutingMode>().is_err());
    }

    #[test]
    fn only_directed_search_uses_destinations() {
        assert!(RoutingMode::DirectedSearch.uses_destinations());
        assert!(!RoutingMode::RandomWalk.uses_destinations());
    }
}

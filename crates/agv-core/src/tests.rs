//! Unit tests for agv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, OrderId};

    #[test]
    fn slot_roundtrip() {
        let id = AgentId(3);
        assert_eq!(id.slot(), 2);
        assert_eq!(AgentId::from_slot(2), id);
        assert_eq!(AgentId::try_from(7usize).unwrap(), AgentId(7));
    }

    #[test]
    fn ordering() {
        assert!(AgentId(1) < AgentId(2));
        assert!(OrderId::from("O1") < OrderId::from("O2"));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(OrderId::new("O12").to_string(), "O12");
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(1, 1);
        let b = Coord::new(10, 4);
        assert_eq!(a.manhattan(b), 12);
        assert_eq!(b.manhattan(a), 12);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 3));
    }

    #[test]
    fn tuple_conversions() {
        let c: Coord = (4, 5).into();
        assert_eq!(c, Coord::new(4, 5));
        let t: (i32, i32) = c.into();
        assert_eq!(t, (4, 5));
        assert_eq!(c.to_string(), "(4, 5)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_orders_and_displays() {
        assert!(Tick::ZERO < Tick(1));
        assert_eq!(Tick(10).to_string(), "T10");
    }

    #[test]
    fn clock_exhausts_at_cap() {
        let mut clock = SimClock::new(2);
        assert!(!clock.is_exhausted());
        assert_eq!(clock.remaining(), 2);
        clock.advance();
        clock.advance();
        assert!(clock.is_exhausted());
        assert_eq!(clock.remaining(), 0);
        assert_eq!(clock.to_string(), "T2 / 2");
    }

    #[test]
    fn zero_cap_is_exhausted_immediately() {
        assert!(SimClock::new(0).is_exhausted());
    }
}

#[cfg(test)]
mod config {
    use crate::config::ensure_in_bounds;
    use crate::{Coord, CoreError, SimConfig};

    #[test]
    fn default_matches_reference_warehouse() {
        let cfg = SimConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (12, 12));
        assert_eq!(cfg.agv_starts, vec![Coord::new(0, 0)]);
        assert_eq!(cfg.max_steps, 300);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        for (rows, cols) in [(0, 5), (5, 0), (-1, 3)] {
            let cfg = SimConfig { rows, cols, ..SimConfig::default() };
            assert_eq!(cfg.validate(), Err(CoreError::InvalidDimensions { rows, cols }));
        }
    }

    #[test]
    fn out_of_range_cells_rejected() {
        let cfg = SimConfig {
            rows:      4,
            cols:      4,
            obstacles: vec![Coord::new(1, 1), Coord::new(4, 0)],
            ..SimConfig::default()
        };
        match cfg.validate() {
            Err(CoreError::InvalidCoordinate { what, coord, .. }) => {
                assert_eq!(what, "obstacle");
                assert_eq!(coord, Coord::new(4, 0));
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }

        let cfg = SimConfig { agv_starts: vec![Coord::new(0, -1)], ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidCoordinate { what: "agv start", .. })));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(ensure_in_bounds("pick", Coord::new(2, 2), 3, 3).is_ok());
        assert!(ensure_in_bounds("pick", Coord::new(3, 2), 3, 3).is_err());
        assert!(ensure_in_bounds("pick", Coord::new(0, 0), 1, 1).is_ok());
    }
}

//! Unit tests for cs-actor.

#[cfg(test)]
mod store {
    use cs_core::{ActorId, Cell};

    use crate::{Actor, ActorKind, ActorStore};

    #[test]
    fn new_store_is_empty() {
        let s = ActorStore::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.actor_ids().count(), 0);
        assert!(s.get(ActorId(0)).is_none());
    }

    #[test]
    fn spawn_appends_in_order() {
        let mut s = ActorStore::with_capacity(4);
        let a = s.spawn(ActorKind::Car, Cell::new(1, 1));
        let b = s.spawn(ActorKind::Car, Cell::new(2, 1));
        assert_eq!((a, b), (ActorId(0), ActorId(1)));
        assert_eq!(s.len(), 2);
        assert_eq!(s.kind.len(), 2);
        assert_eq!(s.position.len(), 2);
        assert_eq!(s.destination.len(), 2);

        let positions: Vec<_> = s.iter().map(|(_, a)| a.position).collect();
        assert_eq!(positions, vec![Cell::new(1, 1), Cell::new(2, 1)]);
    }

    #[test]
    fn spawned_actor_has_no_destination() {
        let mut s = ActorStore::new();
        let id = s.spawn(ActorKind::Car, Cell::new(3, 4));
        assert_eq!(
            s.get(id),
            Some(Actor { kind: ActorKind::Car, position: Cell::new(3, 4), destination: None })
        );
    }

    #[test]
    fn co_located_spawns_are_allowed() {
        let mut s = ActorStore::new();
        let c = Cell::new(5, 5);
        s.spawn(ActorKind::Car, c);
        s.spawn(ActorKind::Car, c);
        assert_eq!(s.len(), 2);
        assert_eq!(s.count_at(c), 2);
        assert_eq!(s.count_at(Cell::new(0, 0)), 0);
    }

    #[test]
    fn writes_through_soa_arrays_are_visible() {
        let mut s = ActorStore::new();
        let id = s.spawn(ActorKind::Car, Cell::new(0, 0));
        s.position[id.index()]    = Cell::new(0, 1);
        s.destination[id.index()] = Some(Cell::new(0, 1));
        let a = s.get(id).unwrap();
        assert_eq!(a.position, Cell::new(0, 1));
        assert!(a.has_arrived());
    }
}

#[cfg(test)]
mod actor {
    use cs_core::Cell;

    use crate::{Actor, ActorKind};

    #[test]
    fn arrival_needs_a_destination() {
        let mut a = Actor { kind: ActorKind::Car, position: Cell::new(1, 1), destination: None };
        assert!(!a.has_arrived());
        a.destination = Some(Cell::new(1, 2));
        assert!(!a.has_arrived());
        a.destination = Some(Cell::new(1, 1));
        assert!(a.has_arrived());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ActorKind::Car.to_string(), "car");
    }
}

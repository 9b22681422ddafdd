//! Core actor storage.

use cs_core::{ActorId, Cell};

use crate::{Actor, ActorKind};

/// Structure-of-Arrays storage for all actors.
///
/// Every `Vec` field has exactly `count` elements; the `ActorId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[actor.index()];
/// ```
///
/// Actors are appended by [`spawn`](Self::spawn) and never removed, so
/// ascending `ActorId` order is spawn order.
#[derive(Clone, Debug, Default)]
pub struct ActorStore {
    /// Number of actors.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub kind: Vec<ActorKind>,

    /// Current cell.  Always a road cell once placed.
    pub position: Vec<Cell>,

    /// Current destination, if any.
    pub destination: Vec<Option<Cell>>,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for `capacity` actors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count:       0,
            kind:        Vec::with_capacity(capacity),
            position:    Vec::with_capacity(capacity),
            destination: Vec::with_capacity(capacity),
        }
    }

    /// Append a new actor at `at` with no destination and return its ID.
    ///
    /// No de-duplication: several actors may share a cell.
    pub fn spawn(&mut self, kind: ActorKind, at: Cell) -> ActorId {
        let id = ActorId(self.count as u32);
        self.kind.push(kind);
        self.position.push(at);
        self.destination.push(None);
        self.count += 1;
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, id: ActorId) -> bool {
        id.index() < self.count
    }

    /// Iterator over all `ActorId`s in spawn order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        (0..self.count as u32).map(ActorId)
    }

    /// By-value view of one actor, `None` for an unknown ID.
    pub fn get(&self, id: ActorId) -> Option<Actor> {
        let i = id.index();
        self.contains(id).then(|| Actor {
            kind:        self.kind[i],
            position:    self.position[i],
            destination: self.destination[i],
        })
    }

    /// Every actor in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, Actor)> + '_ {
        self.actor_ids().filter_map(|id| self.get(id).map(|a| (id, a)))
    }

    /// Number of actors currently standing on `cell`.
    pub fn count_at(&self, cell: Cell) -> usize {
        self.position.iter().filter(|&&p| p == cell).count()
    }
}

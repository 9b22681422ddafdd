//! Actor kinds and the by-value actor view.

use std::fmt;

use cs_core::Cell;

/// What an actor is.  Only cars exist today.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ActorKind {
    #[default]
    Car,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActorKind::Car => "car",
        })
    }
}

/// A copy of one actor's state, assembled from the store's arrays.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Actor {
    pub kind:        ActorKind,
    pub position:    Cell,
    /// Where the actor is heading.  `None` until the destination policy
    /// assigns one, and always `None` under random-walk routing.
    pub destination: Option<Cell>,
}

impl Actor {
    /// `true` if the actor has a destination and is standing on it.
    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.destination == Some(self.position)
    }
}

//! The mutable world: grid plus actors.

use cs_actor::ActorStore;
use cs_grid::Grid;

/// Grid and actor store, owned by [`Sim`][crate::Sim].  Renderers get `&SimState`
/// between frames and never a mutable borrow.
#[derive(Clone, Debug)]
pub struct SimState {
    pub grid:   Grid,
    pub actors: ActorStore,
}

impl SimState {
    pub fn new(grid: Grid) -> Self {
        Self { grid, actors: ActorStore::new() }
    }
}

//! Per-actor movement engine.

use cs_actor::ActorStore;
use cs_core::{ActorId, RoutingMode, SimRng};
use cs_grid::{Grid, Pathfinder, random_probe};

use crate::{ActorUpdate, MobilityError, MobilityResult, maybe_assign_destination};

/// Applies the configured [`RoutingMode`] to one actor at a time.
///
/// # Type parameter
///
/// `P` must implement [`Pathfinder`] (e.g. [`cs_grid::BfsPathfinder`]).  It
/// is only consulted under [`RoutingMode::DirectedSearch`].
pub struct MobilityEngine<P: Pathfinder> {
    /// The routing algorithm for directed search.
    pub pathfinder: P,

    mode: RoutingMode,

    /// Drives destination draws and random-walk probes.
    rng: SimRng,
}

impl<P: Pathfinder> MobilityEngine<P> {
    pub fn new(pathfinder: P, mode: RoutingMode, rng: SimRng) -> Self {
        Self { pathfinder, mode, rng }
    }

    #[inline]
    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    /// Give `actor` its update for this tick: possibly a new destination,
    /// then at most one step.
    ///
    /// Validation happens before any write, so an `Err` leaves the actor
    /// untouched.
    pub fn update_actor(
        &mut self,
        actor: ActorId,
        store: &mut ActorStore,
        grid:  &Grid,
    ) -> MobilityResult<ActorUpdate> {
        if !store.contains(actor) {
            return Err(MobilityError::UnknownActor(actor));
        }
        let i    = actor.index();
        let from = store.position[i];
        if !grid.contains(from) {
            return Err(MobilityError::OffGrid { actor, cell: from });
        }

        let update = match self.mode {
            RoutingMode::DirectedSearch => {
                let retargeted =
                    maybe_assign_destination(from, &mut store.destination[i], grid, &mut self.rng);
                if let Some(dest) = retargeted {
                    log::debug!("{actor} at {from} heads for {dest}");
                }
                let moved_to = match store.destination[i] {
                    Some(to) => self.pathfinder.next_step(grid, from, to)?,
                    None     => None,
                };
                ActorUpdate { retargeted, moved_to }
            }
            RoutingMode::RandomWalk => ActorUpdate {
                retargeted: None,
                moved_to:   random_probe(grid, from, &mut self.rng),
            },
        };

        if let Some(next) = update.moved_to {
            store.position[i] = next;
        }
        Ok(update)
    }
}

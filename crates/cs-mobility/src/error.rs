use cs_core::{ActorId, Cell};
use cs_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("actor {0} is not in the store")]
    UnknownActor(ActorId),

    #[error("actor {actor} stands at {cell}, outside the grid")]
    OffGrid { actor: ActorId, cell: Cell },

    #[error("routing failed: {0}")]
    Routing(#[from] GridError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;

use cs_core::{Cell, CsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CsError),

    #[error("grid is {got_width}x{got_height} but the configuration asks for {width}x{height}")]
    GridMismatch {
        width:      u32,
        height:     u32,
        got_width:  u32,
        got_height: u32,
    },

    #[error("cannot place a car on non-road cell {0}")]
    SpawnOffRoad(Cell),

    #[error("frontend error: {0}")]
    Frontend(String),
}

pub type SimResult<T> = Result<T, SimError>;

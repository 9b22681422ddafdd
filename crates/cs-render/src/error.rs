//! Error types for cs-render.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("frame is {got_width}×{got_height} px but the grid needs {width}×{height} px")]
    FrameMismatch {
        width:      usize,
        height:     usize,
        got_width:  usize,
        got_height: usize,
    },

    #[error("{grid_width}×{grid_height} grid at {tile_size} px per tile does not fit in memory")]
    SurfaceTooLarge {
        grid_width:  u32,
        grid_height: u32,
        tile_size:   u32,
    },
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;

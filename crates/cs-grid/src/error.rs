//! Grid-subsystem error type.

use thiserror::Error;

use cs_core::Cell;

/// Errors produced by `cs-grid`.
///
/// Only caller mistakes end up here.  "No path" and "destination is not a
/// road" are ordinary outcomes and are reported as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("road segment {from} -> {to} is not axis-aligned")]
    NotAxisAligned { from: Cell, to: Cell },

    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {got} tiles, expected {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },

    #[error("unknown tile glyph {0:?}")]
    UnknownGlyph(char),
}

pub type GridResult<T> = Result<T, GridError>;

//! `cs-grid` — tile grid and road pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`grid`]       | `Tile`, `Grid` (row-major tile matrix), `GridBuilder`      |
//! | [`pathfinder`] | `Pathfinder` trait, `BfsPathfinder`, `random_probe`        |
//! | [`error`]      | `GridError`, `GridResult<T>`                               |

pub mod error;
pub mod grid;
pub mod pathfinder;


pub use error::{GridError, GridResult};
pub use grid::{Grid, GridBuilder, Tile};
pub use pathfinder::{BfsPathfinder, Pathfinder, random_probe};

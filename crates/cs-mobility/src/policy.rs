//! Destination policy.

use cs_core::{Cell, SimRng};
use cs_grid::Grid;

/// `true` if an actor at `position` must be given a new destination: it has
/// none yet, or it has reached the one it had.
#[inline]
pub fn needs_destination(position: Cell, destination: Option<Cell>) -> bool {
    destination.is_none_or(|dest| dest == position)
}

/// Uniform draw over every cell of `grid`, road or not.
pub fn sample_destination(grid: &Grid, rng: &mut SimRng) -> Cell {
    Cell::new(rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()))
}

/// Replace `destination` with a fresh sample if [`needs_destination`] says
/// so.  Returns the new destination when one was assigned.
pub fn maybe_assign_destination(
    position:    Cell,
    destination: &mut Option<Cell>,
    grid:        &Grid,
    rng:         &mut SimRng,
) -> Option<Cell> {
    if !needs_destination(position, *destination) {
        return None;
    }
    let fresh = sample_destination(grid, rng);
    *destination = Some(fresh);
    Some(fresh)
}

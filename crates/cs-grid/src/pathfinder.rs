//! Road pathfinding: the `Pathfinder` trait, breadth-first search, and the
//! single-probe random walk.
//!
//! # Pluggability
//!
//! `cs-mobility` calls routing through the [`Pathfinder`] trait, so a
//! different search (A*, weighted costs) can be swapped in without touching
//! the simulation loop.  The default [`BfsPathfinder`] treats every road
//! cell as unit cost, which makes BFS optimal.
//!
//! # One step per call
//!
//! A pathfinder returns only the *first* cell of the route.  Actors advance
//! one cell per update and the search is re-run from the new position next
//! time, so nothing is cached between calls.

use cs_core::{Cell, Direction, SimRng};

use crate::{Grid, GridError, GridResult};

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Computes the next move of an actor towards a destination over road cells.
pub trait Pathfinder {
    /// First cell of a shortest 4-connected road path from `from` to `to`.
    ///
    /// Returns:
    /// - `Ok(Some(next))`: `next` is an in-bounds road cell adjacent to `from`.
    /// - `Ok(None)`: stay put.  Either `from == to`, `to` is not a road cell (or is
    ///   outside the grid), or no road path connects them.  The caller
    ///   should leave the actor where it is and try again next update.
    /// - `Err(OutOfBounds)`: `from` itself is outside the grid.
    fn next_step(&self, grid: &Grid, from: Cell, to: Cell) -> GridResult<Option<Cell>>;
}

// ── BfsPathfinder ─────────────────────────────────────────────────────────────

/// Breadth-first search over road cells.
///
/// Neighbours are explored in `+x, -x, +y, -y` order; among several shortest
/// paths, the one found first in that order wins.
///
/// Each cell is visited at most once, so one call is O(W·H) time and memory
/// in the worst case.  The frontier is an arena of visited cells where each
/// entry stores the arena index of the cell it was reached from; the first
/// step is recovered by walking that chain back to the origin.
pub struct BfsPathfinder;

impl Pathfinder for BfsPathfinder {
    fn next_step(&self, grid: &Grid, from: Cell, to: Cell) -> GridResult<Option<Cell>> {
        bfs_first_step(grid, from, to)
    }
}

/// Arena index of the origin entry.
const ORIGIN: usize = 0;

struct Visit {
    cell:   Cell,
    /// Arena index of the predecessor; meaningless for the origin entry.
    parent: usize,
}

fn bfs_first_step(grid: &Grid, from: Cell, to: Cell) -> GridResult<Option<Cell>> {
    let origin = grid.offset(from).ok_or(GridError::OutOfBounds {
        cell:   from,
        width:  grid.width(),
        height: grid.height(),
    })?;

    // A non-road destination can never be matched, so skip the search.
    if from == to || !grid.is_road(to) {
        return Ok(None);
    }

    let mut seen = vec![false; grid.len()];
    seen[origin] = true;

    let mut arena = vec![Visit { cell: from, parent: ORIGIN }];
    let mut head  = 0;

    while let Some(current) = arena.get(head).map(|v| v.cell) {
        for next in grid.neighbors(current) {
            let Some(i) = grid.offset(next) else { continue };
            if seen[i] {
                continue;
            }
            // Mark before the road check so grass cells are rejected once.
            seen[i] = true;
            if !grid.is_road(next) {
                continue;
            }

            arena.push(Visit { cell: next, parent: head });
            if next == to {
                return Ok(Some(first_step(&arena, arena.len() - 1)));
            }
        }
        head += 1;
    }

    Ok(None)
}

/// Walk parents from `entry` back to the origin's direct neighbour.
fn first_step(arena: &[Visit], mut entry: usize) -> Cell {
    while arena[entry].parent != ORIGIN {
        entry = arena[entry].parent;
    }
    arena[entry].cell
}

// ── Random walk ───────────────────────────────────────────────────────────────

/// Memoryless single probe: pick one of the four directions uniformly at
/// random and return that cell if it is an in-bounds road.
///
/// There is no retry, so an actor next to a single road neighbour moves with
/// probability 1/4 per call.  An actor with no road neighbour never moves.
pub fn random_probe(grid: &Grid, from: Cell, rng: &mut SimRng) -> Option<Cell> {
    let dir = *rng.choose(&Direction::ALL)?;
    from.step(dir).filter(|&next| grid.is_road(next))
}

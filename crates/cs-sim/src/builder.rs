//! Fluent builder for constructing a [`Sim`].

use cs_core::{Cell, SimConfig, SimRng};
use cs_grid::{Grid, Pathfinder};
use cs_mobility::MobilityEngine;

use crate::{Sim, SimError, SimResult, SimState};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid size, tile size, fps, cadence, routing, seed
/// - `P: Pathfinder`: the search used by directed routing (e.g.
///   [`cs_grid::BfsPathfinder`])
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                  |
/// |---------------|------------------------------------------|
/// | `.grid(g)`    | All-grass grid of the configured size    |
/// | `.car(cell)`  | No actors                                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::small(), BfsPathfinder)
///     .grid(grid)
///     .car(Cell::new(2, 2))
///     .build()?;
/// ```
pub struct SimBuilder<P: Pathfinder> {
    config:     SimConfig,
    pathfinder: P,
    grid:       Option<Grid>,
    cars:       Vec<Cell>,
}

impl<P: Pathfinder> SimBuilder<P> {
    pub fn new(config: SimConfig, pathfinder: P) -> Self {
        Self { config, pathfinder, grid: None, cars: Vec::new() }
    }

    /// Start from a pre-painted grid.  Must match the configured dimensions.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Place a car at `cell` before the first frame.  The cell must be road.
    pub fn car(mut self, cell: Cell) -> Self {
        self.cars.push(cell);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let (width, height) = (self.config.grid_width, self.config.grid_height);
        let grid = match self.grid {
            Some(g) => {
                if (g.width(), g.height()) != (width, height) {
                    return Err(SimError::GridMismatch {
                        width,
                        height,
                        got_width:  g.width(),
                        got_height: g.height(),
                    });
                }
                g
            }
            None => Grid::new(width, height),
        };

        let mut state = SimState::new(grid);
        for cell in self.cars {
            if !state.grid.is_road(cell) {
                return Err(SimError::SpawnOffRoad(cell));
            }
            state.actors.spawn(cs_actor::ActorKind::Car, cell);
        }

        let mobility = MobilityEngine::new(
            self.pathfinder,
            self.config.routing,
            SimRng::new(self.config.seed),
        );

        Ok(Sim { config: self.config, state, mobility })
    }
}

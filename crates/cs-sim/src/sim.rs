//! The `Sim` struct and its per-frame simulation step.

use cs_actor::ActorKind;
use cs_core::{ActorId, Cell, SimConfig};
use cs_grid::{Pathfinder, Tile};
use cs_mobility::MobilityEngine;

use crate::{InputEvent, PointerButton, SimState};

// ── StepReport ────────────────────────────────────────────────────────────────

/// What one simulation step did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// A `Quit` event was seen.
    pub quit: bool,

    /// Some input event changed the state.
    pub input_changed: bool,

    /// The actor phase ran this step.
    pub actors_updated: bool,

    /// Actors that stepped onto a new cell.
    pub moved: usize,

    /// Actors that were given a new destination.
    pub retargeted: usize,

    /// Actors whose update failed and was skipped.
    pub failed: usize,
}

impl StepReport {
    /// `true` if anything visible changed and a redraw is needed.
    #[inline]
    pub fn changed(&self) -> bool {
        self.input_changed || self.moved > 0 || self.retargeted > 0
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation: configuration, world state, and the mobility engine.
///
/// `Sim` owns [`SimState`] exclusively; every mutation goes through the
/// methods below.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder> {
    /// Startup configuration (grid size, tile size, cadence, routing, seed).
    pub config: SimConfig,

    /// Grid and actors.
    pub state: SimState,

    /// Destination policy + pathfinder (or random walk), with the sim RNG.
    pub mobility: MobilityEngine<P>,
}

impl<P: Pathfinder> Sim<P> {
    /// Read-only view for renderers.
    #[inline]
    pub fn state(&self) -> &SimState {
        &self.state
    }

    // ── Input-level operations ────────────────────────────────────────────

    /// Turn `cell` into road.  Returns `true` for any in-grid cell, even one
    /// that was already road; `false` if `cell` is outside the grid.
    pub fn paint_road(&mut self, cell: Cell) -> bool {
        match self.state.grid.paint_road(cell) {
            Ok(Tile::Grass) => {
                log::debug!("painted road at {cell}");
                true
            }
            Ok(_)  => true,
            Err(_) => false,
        }
    }

    /// Spawn a car on `cell` if it is road.  Returns the new actor's ID, or
    /// `None` when the spawn is rejected.
    pub fn spawn_car(&mut self, cell: Cell) -> Option<ActorId> {
        if !self.state.grid.is_road(cell) {
            log::debug!("spawn at {cell} rejected: not a road");
            return None;
        }
        let id = self.state.actors.spawn(ActorKind::Car, cell);
        log::debug!("spawned {id} at {cell}");
        Some(id)
    }

    /// Apply a pointer press at window pixel `(x, y)`.  Returns `true` if
    /// the state changed.
    pub fn handle_pointer(&mut self, x: u32, y: u32, button: PointerButton) -> bool {
        let Some(cell) = self.state.grid.cell_at_pixel(x, y, self.config.tile_size) else {
            log::trace!("pointer at ({x}, {y}) is outside the grid");
            return false;
        };
        match button {
            PointerButton::Primary   => self.paint_road(cell),
            PointerButton::Secondary => self.spawn_car(cell).is_some(),
        }
    }

    /// Apply one input event.  `Quit` changes nothing here; the scheduler
    /// acts on it.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => false,
            InputEvent::PointerDown { x, y, button } => self.handle_pointer(x, y, button),
        }
    }

    // ── Actor phase ───────────────────────────────────────────────────────

    /// Update every actor once, in spawn order.
    ///
    /// A failing actor is logged and skipped; the rest are still updated.
    /// Actors see the moves of actors updated before them in the same call.
    pub fn update_actors(&mut self) -> StepReport {
        let mut report = StepReport { actors_updated: true, ..StepReport::default() };

        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid     = &self.state.grid;
        let actors   = &mut self.state.actors;
        let mobility = &mut self.mobility;

        for i in 0..actors.len() {
            let id = ActorId(i as u32);
            match mobility.update_actor(id, actors, grid) {
                Ok(update) => {
                    report.moved      += usize::from(update.moved_to.is_some());
                    report.retargeted += usize::from(update.retargeted.is_some());
                }
                Err(e) => {
                    log::warn!("{id}: update skipped: {e}");
                    report.failed += 1;
                }
            }
        }
        report
    }

    // ── Full step ─────────────────────────────────────────────────────────

    /// One simulation step: apply `events` in order, then, if
    /// `update_actors` is set, run the actor phase.
    ///
    /// There is no rollback; each event and each actor commits on its own.
    pub fn tick<I>(&mut self, events: I, update_actors: bool) -> StepReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut report = StepReport::default();
        for event in events {
            if event == InputEvent::Quit {
                report.quit = true;
            }
            report.input_changed |= self.apply_input(event);
        }

        if update_actors {
            let actors = self.update_actors();
            report.actors_updated = true;
            report.moved          = actors.moved;
            report.retargeted     = actors.retargeted;
            report.failed         = actors.failed;
        }
        report
    }
}

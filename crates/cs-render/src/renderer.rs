//! Full-surface redraw of the simulation state.

use cs_actor::ActorKind;
use cs_core::{Cell, SimConfig};
use cs_grid::Grid;
use cs_sim::SimState;

use crate::{FrameBuffer, RenderError, RenderResult, palette};

/// Draws a [`SimState`] into a [`FrameBuffer`].
///
/// Every call repaints the whole surface: tiles first, then each actor in
/// store order, so later actors are drawn over earlier ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Renderer {
    /// Edge length of one tile in pixels.
    pub tile_size: u32,

    /// Draw the white destination marker for each car.
    pub draw_destinations: bool,
}

impl Renderer {
    /// Tile size from `config`; destination markers only when the routing
    /// mode assigns destinations.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            tile_size:         config.tile_size,
            draw_destinations: config.routing.uses_destinations(),
        }
    }

    /// Pixel size of the surface `grid` needs.
    pub fn surface_size(&self, grid: &Grid) -> RenderResult<(usize, usize)> {
        let too_large = || RenderError::SurfaceTooLarge {
            grid_width:  grid.width(),
            grid_height: grid.height(),
            tile_size:   self.tile_size,
        };
        let w = grid.width().checked_mul(self.tile_size).ok_or_else(too_large)?;
        let h = grid.height().checked_mul(self.tile_size).ok_or_else(too_large)?;
        Ok((w as usize, h as usize))
    }

    /// A blank surface sized for `grid`.
    pub fn frame_for(&self, grid: &Grid) -> RenderResult<FrameBuffer> {
        let (w, h) = self.surface_size(grid)?;
        Ok(FrameBuffer::new(w, h))
    }

    /// Repaint `frame` from `state`.
    ///
    /// Fails only if `frame` is not the size [`frame_for`](Self::frame_for)
    /// would have produced.
    pub fn draw(&self, state: &SimState, frame: &mut FrameBuffer) -> RenderResult<()> {
        let (width, height) = self.surface_size(&state.grid)?;
        if (frame.width(), frame.height()) != (width, height) {
            return Err(RenderError::FrameMismatch {
                width,
                height,
                got_width:  frame.width(),
                got_height: frame.height(),
            });
        }

        for (cell, tile) in state.grid.cells() {
            self.fill_tile(frame, cell, palette::tile_color(tile));
        }

        for (_, actor) in state.actors.iter() {
            match actor.kind {
                ActorKind::Car => {
                    self.fill_tile(frame, actor.position, palette::CAR_TILE);
                    self.fill_inset(frame, actor.position, palette::CAR_BODY);
                    if self.draw_destinations
                        && let Some(dest) = actor.destination
                    {
                        self.fill_inset(frame, dest, palette::DESTINATION);
                    }
                }
            }
        }
        log::trace!("redrew {width}×{height} px with {} actors", state.actors.len());
        Ok(())
    }

    // ── Primitives ────────────────────────────────────────────────────────

    fn origin(&self, cell: Cell) -> (usize, usize) {
        let ts = self.tile_size as usize;
        (cell.x as usize * ts, cell.y as usize * ts)
    }

    fn fill_tile(&self, frame: &mut FrameBuffer, cell: Cell, color: u32) {
        let (x, y) = self.origin(cell);
        let ts = self.tile_size as usize;
        frame.fill_rect(x, y, ts, ts, color);
    }

    /// The centred half-size square used for car bodies and destinations.
    fn fill_inset(&self, frame: &mut FrameBuffer, cell: Cell, color: u32) {
        let (x, y) = self.origin(cell);
        let ts     = self.tile_size as usize;
        let inset  = ts / 4;
        let side   = ts - ts / 2;
        frame.fill_rect(x + inset, y + inset, side, side, color);
    }
}

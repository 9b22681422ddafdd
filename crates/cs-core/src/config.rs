//! Top-level simulation configuration.

use std::time::Duration;

use crate::{Cadence, CsError, CsResult, RoutingMode, frame_budget};

/// Everything fixed at startup: grid geometry, frame rate, actor cadence,
/// routing policy, and the RNG seed.
///
/// Typically built from one of the presets ([`SimConfig::small`],
/// [`SimConfig::large`]) or loaded from JSON by the application crate, then
/// checked with [`validate`](Self::validate) before use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid columns.
    pub grid_width: u32,

    /// Grid rows.
    pub grid_height: u32,

    /// Edge length of one tile in pixels.
    pub tile_size: u32,

    /// Target frame rate of the scheduler loop.
    pub fps: u32,

    /// Actors are updated every `actor_update_interval` frames.  1 = every
    /// frame.  Input is drained every frame regardless.
    pub actor_update_interval: u32,

    /// How actors move.
    pub routing: RoutingMode,

    /// Master RNG seed.  The same seed and the same input sequence always
    /// produce identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// 20×20 grid, destination-directed routing, actors updated at a third
    /// of the frame rate.
    pub fn small() -> Self {
        let fps = 20;
        Self {
            grid_width:            20,
            grid_height:           20,
            tile_size:             20,
            fps,
            actor_update_interval: fps / 3,
            routing:               RoutingMode::DirectedSearch,
            seed:                  0,
        }
    }

    /// 80×60 grid, random-walk routing, actors updated every frame.
    pub fn large() -> Self {
        Self {
            grid_width:            80,
            grid_height:           60,
            tile_size:             20,
            fps:                   20,
            actor_update_interval: 1,
            routing:               RoutingMode::RandomWalk,
            seed:                  0,
        }
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> CsResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CsError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.tile_size == 0 {
            return Err(CsError::Config("tile_size must be at least 1 pixel".into()));
        }
        if self.fps == 0 || self.fps > 1_000 {
            return Err(CsError::Config(format!(
                "fps must be in 1..=1000 for a whole-millisecond frame budget, got {}",
                self.fps
            )));
        }
        if self.actor_update_interval == 0 {
            return Err(CsError::Config("actor_update_interval must be at least 1".into()));
        }
        if self.window_width().is_none() || self.window_height().is_none() {
            return Err(CsError::Config(format!(
                "window size {}x{} tiles of {} px overflows",
                self.grid_width, self.grid_height, self.tile_size
            )));
        }
        Ok(())
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    /// Window width in pixels, `None` on overflow.
    #[inline]
    pub fn window_width(&self) -> Option<u32> {
        self.grid_width.checked_mul(self.tile_size)
    }

    /// Window height in pixels, `None` on overflow.
    #[inline]
    pub fn window_height(&self) -> Option<u32> {
        self.grid_height.checked_mul(self.tile_size)
    }

    /// Wall-clock budget of one frame (`1000 / fps` ms).
    #[inline]
    pub fn frame_budget(&self) -> Duration {
        frame_budget(self.fps)
    }

    /// Gate for the actor-update phase.
    #[inline]
    pub fn actor_cadence(&self) -> Cadence {
        Cadence::every(self.actor_update_interval as u64)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::small()
    }
}

//! citysim — paint roads, drop cars, watch them drive.
//!
//! Left click paints the tile under the pointer as road; right click spawns
//! a car on a road tile.  Escape or closing the window quits.
//!
//! ```text
//! citysim [small | large | <config.json>] [--headless <frames>]
//! ```
//!
//! `RUST_LOG` controls log verbosity (default `info`).

mod cli;
mod window;


use anyhow::Result;

use cs_grid::BfsPathfinder;
use cs_sim::{ExitReason, FrameScheduler, HeadlessFrontend, NoopObserver, SimBuilder, SystemClock};

use cli::Args;
use window::WindowFrontend;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args   = Args::parse(std::env::args().skip(1))?;
    let config = args.config.load()?;
    log::info!(
        "{}×{} grid, {} px tiles, {} fps, actors every {} frame(s), {} routing, seed {}",
        config.grid_width,
        config.grid_height,
        config.tile_size,
        config.fps,
        config.actor_update_interval,
        config.routing,
        config.seed,
    );

    let mut sim       = SimBuilder::new(config.clone(), BfsPathfinder).build()?;
    let mut scheduler = FrameScheduler::new(&config);
    let mut clock     = SystemClock::new();

    let summary = match args.headless {
        Some(frames) => {
            let mut frontend = HeadlessFrontend::default();
            scheduler.run_frames(frames, &mut sim, &mut frontend, &mut clock, &mut NoopObserver)
        }
        None => {
            let mut frontend = WindowFrontend::open(&config)?;
            scheduler.run(&mut sim, &mut frontend, &mut clock, &mut NoopObserver)
        }
    };

    if summary.exit == ExitReason::FrontendFailure {
        log::warn!("stopped early: the window frontend failed");
    }
    log::info!(
        "{} roads, {} cars at exit",
        sim.state.grid.road_count(),
        sim.state.actors.len()
    );
    Ok(())
}

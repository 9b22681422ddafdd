//! `cs-sim` — simulation step and frame scheduler for the citysim framework.
//!
//! # Frame loop
//!
//! ```text
//! initial draw
//! while running:
//!   ① Start    : advance the frame counter, note the start time.
//!   ② Input    : drain every pending frontend event:
//!                  Quit                  → running = false (frame still finishes)
//!                  PointerDown(primary)  → paint the tile under the pointer road
//!                  PointerDown(secondary)→ spawn a car if that tile is road
//!   ③ Actors   : on frames where the actor cadence is due, update every
//!                actor in spawn order (destination policy, then one step).
//!   ④ Render   : present the state only if ② or ③ changed something.
//!   ⑤ Pace     : sleep out the rest of the frame budget; overruns are
//!                accepted and never caught up.
//! ```
//!
//! Everything runs on the caller's thread.  The frontend (window, input,
//! presentation) and the clock are traits so the loop can be driven
//! headlessly in tests.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_core::SimConfig;
//! use cs_grid::BfsPathfinder;
//! use cs_sim::{FrameScheduler, NoopObserver, SimBuilder, SystemClock};
//!
//! let config = SimConfig::small();
//! let mut sim = SimBuilder::new(config.clone(), BfsPathfinder).build()?;
//! let mut scheduler = FrameScheduler::new(&config);
//! scheduler.run(&mut sim, &mut frontend, &mut SystemClock::new(), &mut NoopObserver);
//! ```

pub mod builder;
pub mod clock;
pub mod error;
pub mod frontend;
pub mod input;
pub mod observer;
pub mod scheduler;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use clock::{Clock, SystemClock};
pub use error::{SimError, SimResult};
pub use frontend::{Frontend, HeadlessFrontend};
pub use input::{InputEvent, PointerButton};
pub use observer::{ExitReason, FrameReport, NoopObserver, RunSummary, SimObserver};
pub use scheduler::FrameScheduler;
pub use sim::{Sim, StepReport};
pub use state::SimState;

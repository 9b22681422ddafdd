//! `cs-mobility` — destination choice and one-cell-per-update movement.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`policy`]  | Destination policy: when an actor needs a new goal, how it is drawn |
//! | [`update`]  | `ActorUpdate`: what one actor update changed                      |
//! | [`engine`]  | `MobilityEngine<P>`: applies the configured `RoutingMode`         |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model
//!
//! Actors move at most one cell per update:
//!
//! 1. Under `DirectedSearch`, an actor without a destination, or standing on
//!    it, draws a new one uniformly over the whole grid.  The draw does not
//!    check for roads; an unreachable goal just stalls the actor until it is
//!    reachable.
//! 2. The [`Pathfinder`][cs_grid::Pathfinder] returns the first cell of a
//!    shortest road path and the actor steps onto it.
//! 3. Under `RandomWalk`, the actor instead probes one random direction and
//!    moves only if that cell is road.

pub mod engine;
pub mod error;
pub mod policy;
pub mod update;


pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use policy::{maybe_assign_destination, needs_destination, sample_destination};
pub use update::ActorUpdate;

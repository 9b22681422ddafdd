//! `cs-actor` — actor storage for the `citysim` framework.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`actor`] | `ActorKind`, `Actor` (by-value view of one actor)         |
//! | [`store`] | `ActorStore` (SoA arrays, spawn order = `ActorId` order)  |
//!
//! The store knows nothing about the grid.  Whoever spawns an actor is
//! responsible for only placing it on a road cell; `cs-sim` does this.

pub mod actor;
pub mod store;

#[cfg(test)]
mod tests;

pub use actor::{Actor, ActorKind};
pub use store::ActorStore;

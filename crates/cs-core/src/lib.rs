//! `cs-core` — foundational types for the `citysim` traffic simulation.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`                                             |
//! | [`cell`]        | `Cell` grid coordinate, `Direction`                   |
//! | [`time`]        | `Tick`, `Cadence`, `frame_budget`                     |
//! | [`rng`]         | `SimRng` (seeded simulation RNG)                      |
//! | [`routing`]     | `RoutingMode` enum                                    |
//! | [`config`]      | `SimConfig` and its deployment presets                |
//! | [`error`]       | `CsError`, `CsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SimConfig`, `Cell`,     |
//! |         | and `RoutingMode` so applications can load configs.       |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod routing;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::SimConfig;
pub use error::{CsError, CsResult};
pub use ids::ActorId;
pub use rng::SimRng;
pub use routing::RoutingMode;
pub use time::{Cadence, Tick, frame_budget};

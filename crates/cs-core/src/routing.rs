//! How actors pick their next cell.

use std::fmt;
use std::str::FromStr;

use crate::CsError;

/// Routing policy, resolved once at configuration time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoutingMode {
    /// Each actor holds a destination and advances one cell per update along
    /// a shortest road path to it (breadth-first search).
    #[default]
    DirectedSearch,
    /// Memoryless: each update probes one uniformly random direction and
    /// moves there only if it is an in-bounds road cell.
    RandomWalk,
}

impl RoutingMode {
    /// `true` if actors carry (and the renderer draws) a destination.
    #[inline]
    pub fn uses_destinations(self) -> bool {
        matches!(self, RoutingMode::DirectedSearch)
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoutingMode::DirectedSearch => "directed-search",
            RoutingMode::RandomWalk     => "random-walk",
        })
    }
}

impl FromStr for RoutingMode {
    type Err = CsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directed-search" => Ok(RoutingMode::DirectedSearch),
            "random-walk"     => Ok(RoutingMode::RandomWalk),
            other => Err(CsError::Config(format!("unknown routing mode {other:?}"))),
        }
    }
}

//! Outcome of a single actor update.

use cs_core::Cell;

/// What one call to [`MobilityEngine::update_actor`][crate::MobilityEngine::update_actor]
/// changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorUpdate {
    /// New destination assigned this update, if any.
    pub retargeted: Option<Cell>,
    /// Cell the actor stepped onto, if it moved.
    pub moved_to: Option<Cell>,
}

impl ActorUpdate {
    /// `true` if anything visible changed.  A new destination counts even
    /// when the actor did not move, because the destination marker is drawn.
    #[inline]
    pub fn changed(&self) -> bool {
        self.retargeted.is_some() || self.moved_to.is_some()
    }
}

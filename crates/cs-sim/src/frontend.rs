//! The boundary with the windowing/rendering toolkit.

use std::time::Duration;

use crate::{Clock, InputEvent, SimResult, SimState};

/// Window, input, and presentation, as seen by the scheduler.
///
/// Implementations own whatever toolkit handles they need and release them
/// on `Drop`.  Errors from either method end the loop cleanly.
pub trait Frontend {
    /// Append every event that arrived since the last call to `out`.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> SimResult<()>;

    /// Redraw the whole surface from `state` and show it.
    fn present(&mut self, state: &SimState) -> SimResult<()>;

    /// Spend the rest of the frame.  The default just sleeps.
    ///
    /// Frontends that can only sample input state (rather than receive
    /// queued events) override this to keep sampling while they wait, so a
    /// press that starts and ends inside one frame still reaches the next
    /// `poll_events`.  Must return after about `duration` of `clock` time.
    fn idle(&mut self, clock: &mut dyn Clock, duration: Duration) {
        clock.sleep(duration);
    }
}

/// A frontend with no window: never produces input and discards frames.
///
/// Used for smoke-testing the loop without a display.
#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    /// How many times `present` was called.
    pub presents: u64,
}

impl Frontend for HeadlessFrontend {
    fn poll_events(&mut self, _out: &mut Vec<InputEvent>) -> SimResult<()> {
        Ok(())
    }

    fn present(&mut self, _state: &SimState) -> SimResult<()> {
        self.presents += 1;
        Ok(())
    }
}

//! Observer hooks and per-run reporting.

use std::time::Duration;

use cs_core::Tick;

use crate::StepReport;

/// Per-frame record handed to [`SimObserver::on_frame_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub tick: Tick,

    /// What the simulation step did.
    pub step: StepReport,

    /// The state was presented this frame.
    pub rendered: bool,

    /// Time from frame start to just before the pacing sleep.
    pub elapsed: Duration,

    /// How long the scheduler slept to fill the frame budget.
    pub slept: Duration,
}

/// Why the loop stopped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExitReason {
    /// A `Quit` event was received.
    #[default]
    Quit,
    /// The frontend failed to poll input or present a frame.
    FrontendFailure,
    /// `run_frames` reached its frame limit.
    FrameLimit,
}

/// Totals for one call to `FrameScheduler::run` / `run_frames`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames executed (the initial draw is not a frame).
    pub frames: u64,
    /// Successful presents, including the initial draw.
    pub renders: u64,
    /// Frames that took longer than the budget.
    pub overruns: u64,
    pub exit: ExitReason,
}

/// Callbacks invoked by the [`FrameScheduler`][crate::FrameScheduler].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: render counter
///
/// ```rust,ignore
/// struct Renders(u64);
///
/// impl SimObserver for Renders {
///     fn on_render(&mut self, _tick: Tick) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before input is drained.
    fn on_frame_start(&mut self, _tick: Tick) {}

    /// Called after each successful present.  `Tick::ZERO` is the initial
    /// draw before the first frame.
    fn on_render(&mut self, _tick: Tick) {}

    /// Called at the end of each frame, after pacing.
    fn on_frame_end(&mut self, _tick: Tick, _report: &FrameReport) {}

    /// Called once when the loop exits.
    fn on_exit(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! Fixed-rate frame loop.

use std::time::Duration;

use cs_core::{Cadence, SimConfig, Tick};
use cs_grid::Pathfinder;

use crate::{
    Clock, ExitReason, FrameReport, Frontend, InputEvent, RunSummary, Sim, SimObserver,
};

/// Drives a [`Sim`] at a fixed target frame rate.
///
/// The loop never runs faster than the target rate.  Under load it runs
/// slower and does not catch up or skip frames.
pub struct FrameScheduler {
    /// Wall-clock slot of one frame.
    budget: Duration,

    /// Gate for the actor phase.
    actor_cadence: Cadence,

    /// Last frame started.  Persists across `run` calls.
    tick: Tick,

    /// Reused input buffer.
    events: Vec<InputEvent>,
}

impl FrameScheduler {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            budget:        config.frame_budget(),
            actor_cadence: config.actor_cadence(),
            tick:          Tick::ZERO,
            events:        Vec::new(),
        }
    }

    /// The most recent frame number (`Tick::ZERO` before the first frame).
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn frame_budget(&self) -> Duration {
        self.budget
    }

    /// Run until a `Quit` event or a frontend failure.
    pub fn run<P, F, C, O>(
        &mut self,
        sim:      &mut Sim<P>,
        frontend: &mut F,
        clock:    &mut C,
        observer: &mut O,
    ) -> RunSummary
    where
        P: Pathfinder,
        F: Frontend,
        C: Clock,
        O: SimObserver,
    {
        self.run_loop(None, sim, frontend, clock, observer)
    }

    /// Like [`run`](Self::run), but stop after at most `max_frames` frames.
    pub fn run_frames<P, F, C, O>(
        &mut self,
        max_frames: u64,
        sim:        &mut Sim<P>,
        frontend:   &mut F,
        clock:      &mut C,
        observer:   &mut O,
    ) -> RunSummary
    where
        P: Pathfinder,
        F: Frontend,
        C: Clock,
        O: SimObserver,
    {
        self.run_loop(Some(max_frames), sim, frontend, clock, observer)
    }

    fn run_loop<P, F, C, O>(
        &mut self,
        max_frames: Option<u64>,
        sim:        &mut Sim<P>,
        frontend:   &mut F,
        clock:      &mut C,
        observer:   &mut O,
    ) -> RunSummary
    where
        P: Pathfinder,
        F: Frontend,
        C: Clock,
        O: SimObserver,
    {
        let mut summary = RunSummary { exit: ExitReason::FrameLimit, ..RunSummary::default() };

        // ── Initial draw ──────────────────────────────────────────────────
        match frontend.present(sim.state()) {
            Ok(()) => {
                summary.renders += 1;
                observer.on_render(self.tick);
            }
            Err(e) => {
                log::error!("initial draw failed: {e}");
                summary.exit = ExitReason::FrontendFailure;
                observer.on_exit(&summary);
                return summary;
            }
        }

        let mut running = true;
        while running && max_frames.is_none_or(|n| summary.frames < n) {
            self.tick = self.tick.next();
            let tick  = self.tick;
            let begin = clock.now();
            observer.on_frame_start(tick);

            // ── Input ─────────────────────────────────────────────────────
            self.events.clear();
            if let Err(e) = frontend.poll_events(&mut self.events) {
                log::error!("{tick}: input polling failed, stopping: {e}");
                running      = false;
                summary.exit = ExitReason::FrontendFailure;
            }

            // ── Simulation step ───────────────────────────────────────────
            let step = sim.tick(self.events.drain(..), self.actor_cadence.is_due(tick));
            if step.quit {
                log::info!("{tick}: quit requested");
                running      = false;
                summary.exit = ExitReason::Quit;
            }

            // ── Render ────────────────────────────────────────────────────
            let mut rendered = false;
            if step.changed() {
                match frontend.present(sim.state()) {
                    Ok(()) => {
                        rendered = true;
                        summary.renders += 1;
                        observer.on_render(tick);
                    }
                    Err(e) => {
                        log::error!("{tick}: present failed, stopping: {e}");
                        running      = false;
                        summary.exit = ExitReason::FrontendFailure;
                    }
                }
            }

            // ── Pace ──────────────────────────────────────────────────────
            let elapsed = clock.now().saturating_sub(begin);
            let slept   = self.budget.saturating_sub(elapsed);
            if !slept.is_zero() {
                frontend.idle(clock, slept);
            } else if elapsed > self.budget {
                summary.overruns += 1;
                log::trace!("{tick}: overran budget ({elapsed:?} > {:?})", self.budget);
            }

            summary.frames += 1;
            observer.on_frame_end(tick, &FrameReport { tick, step, rendered, elapsed, slept });
        }

        log::info!(
            "loop exited ({:?}) after {} frames, {} renders, {} overruns",
            summary.exit, summary.frames, summary.renders, summary.overruns
        );
        observer.on_exit(&summary);
        summary
    }
}

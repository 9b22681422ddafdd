//! `minifb` window frontend.

use std::time::Duration;

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use cs_core::SimConfig;
use cs_render::{FrameBuffer, Renderer};
use cs_sim::{Clock, Frontend, InputEvent, PointerButton, SimError, SimResult, SimState};

const TITLE: &str = "CitySim";

/// Longest gap between two button samples while the scheduler is idle.
const SAMPLE_INTERVAL: Duration = Duration::from_millis(4);

// ── Press detection ───────────────────────────────────────────────────────────

/// Turns sampled button state into `PointerDown` events.
///
/// `minifb` exposes whether a button is held, not a queue of presses, so a
/// press is a sample where the button is down after being up.  Presses are
/// kept until the next [`drain_into`](Self::drain_into).
#[derive(Debug, Default)]
pub struct PressSampler {
    primary_down:   bool,
    secondary_down: bool,
    pending:        Vec<InputEvent>,
}

impl PressSampler {
    /// Record one sample.  `pointer` is `None` when the pointer is outside
    /// the window; a press there is dropped.
    pub fn sample(&mut self, primary: bool, secondary: bool, pointer: Option<(u32, u32)>) {
        let pressed = [
            (primary && !self.primary_down, PointerButton::Primary),
            (secondary && !self.secondary_down, PointerButton::Secondary),
        ];
        self.primary_down   = primary;
        self.secondary_down = secondary;

        let Some((x, y)) = pointer else { return };
        for (down, button) in pressed {
            if down {
                self.pending.push(InputEvent::PointerDown { x, y, button });
            }
        }
    }

    /// Move every press recorded so far into `out`, oldest first.
    pub fn drain_into(&mut self, out: &mut Vec<InputEvent>) {
        out.append(&mut self.pending);
    }
}

// ── WindowFrontend ────────────────────────────────────────────────────────────

/// A window showing the grid.  The window closes when this is dropped.
pub struct WindowFrontend {
    window:   Window,
    renderer: Renderer,
    frame:    FrameBuffer,
    presses:  PressSampler,
}

impl WindowFrontend {
    pub fn open(config: &SimConfig) -> anyhow::Result<Self> {
        let renderer = Renderer::from_config(config);
        let grid     = cs_grid::Grid::new(config.grid_width, config.grid_height);
        let frame    = renderer.frame_for(&grid)?;

        let mut window = Window::new(TITLE, frame.width(), frame.height(), WindowOptions::default())?;
        // Pacing belongs to the frame scheduler.
        window.set_target_fps(0);

        log::info!("opened {}×{} px window", frame.width(), frame.height());
        Ok(Self { window, renderer, frame, presses: PressSampler::default() })
    }

    /// Pump window events and sample both buttons once.
    fn sample(&mut self) {
        self.window.update();
        let pointer = self
            .window
            .get_mouse_pos(MouseMode::Discard)
            .filter(|&(x, y)| x >= 0.0 && y >= 0.0)
            .map(|(x, y)| (x as u32, y as u32));
        self.presses.sample(
            self.window.get_mouse_down(MouseButton::Left),
            self.window.get_mouse_down(MouseButton::Right),
            pointer,
        );
    }
}

impl Frontend for WindowFrontend {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> SimResult<()> {
        self.sample();
        self.presses.drain_into(out);

        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            out.push(InputEvent::Quit);
        }
        Ok(())
    }

    fn present(&mut self, state: &SimState) -> SimResult<()> {
        self.renderer
            .draw(state, &mut self.frame)
            .map_err(|e| SimError::Frontend(e.to_string()))?;
        self.window
            .update_with_buffer(self.frame.pixels(), self.frame.width(), self.frame.height())
            .map_err(|e| SimError::Frontend(e.to_string()))
    }

    fn idle(&mut self, clock: &mut dyn Clock, duration: Duration) {
        let mut left = duration;
        while !left.is_zero() {
            let slice = left.min(SAMPLE_INTERVAL);
            clock.sleep(slice);
            left -= slice;
            if self.window.is_open() {
                self.sample();
            }
        }
    }
}

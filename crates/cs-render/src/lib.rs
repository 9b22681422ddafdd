//! `cs-render` — software rendering for the citysim framework.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | `frame`     | [`FrameBuffer`]: a packed `0RGB` pixel surface        |
//! | `palette`   | Tile and actor colours                                |
//! | `renderer`  | [`Renderer`]: full repaint of a [`cs_sim::SimState`]  |
//!
//! The frame buffer layout (row-major `u32`, `0x00RRGGBB`) is what window
//! toolkits such as `minifb` take directly, so a frontend can present
//! [`FrameBuffer::pixels`] without conversion.
//!
//! # Usage
//!
//! ```rust,ignore
//! let renderer = Renderer::from_config(&config);
//! let mut frame = renderer.frame_for(&sim.state.grid)?;
//! renderer.draw(sim.state(), &mut frame)?;
//! window.update_with_buffer(frame.pixels(), frame.width(), frame.height())?;
//! ```

pub mod error;
pub mod frame;
pub mod palette;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use error::{RenderError, RenderResult};
pub use frame::FrameBuffer;
pub use renderer::Renderer;

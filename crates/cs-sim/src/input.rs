//! Input events delivered by the frontend.

/// Which pointer button was pressed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PointerButton {
    /// Paints roads.
    Primary,
    /// Spawns cars.
    Secondary,
}

/// One event drained from the frontend at the start of a frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputEvent {
    /// Stop the loop after the current frame.
    Quit,
    /// A button went down at window pixel `(x, y)`.
    PointerDown { x: u32, y: u32, button: PointerButton },
}

impl InputEvent {
    /// Convenience constructor for a primary-button press.
    pub fn primary(x: u32, y: u32) -> Self {
        InputEvent::PointerDown { x, y, button: PointerButton::Primary }
    }

    /// Convenience constructor for a secondary-button press.
    pub fn secondary(x: u32, y: u32) -> Self {
        InputEvent::PointerDown { x, y, button: PointerButton::Secondary }
    }
}

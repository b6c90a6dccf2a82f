//! Platform-neutral pointer input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer events as the platform layer reports them, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64, button: PointerButton },
    /// Relative movement since the previous event.
    Move { dx: f64, dy: f64 },
    Up,
    /// The pointer left the container.
    Leave,
    /// The host window lost focus.
    Blur,
    /// A press and release on the same spot.
    Click { x: f64, y: f64 },
    DoubleClick { x: f64, y: f64 },
}

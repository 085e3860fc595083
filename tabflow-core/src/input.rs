use nalgebra::Vector2;

/// The state of a button or key: pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    /// The element was pressed.
    Pressed,
    /// The element was released.
    Released,
}

/// A pointer device button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left/primary button.
    Left,
    /// The right/secondary button.
    Right,
    /// The middle button.
    Middle,
}

/// A keyboard focus traversal event, delivered by the host.
///
/// Widgets that manage focusable children consume this to move their
/// internal focus; the host typically maps Tab / Shift-Tab and window blur
/// onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusChange {
    /// Focus advances to the next focusable element.
    Next,
    /// Focus moves back to the previous focusable element.
    Prev,
    /// Focus left the widget tree entirely.
    Lost,
}

/// Per-frame input and environment state, delivered by the embedding host.
///
/// The host translates its windowing events (winit, wayland, a test driver)
/// into this vocabulary before each update pass and calls [reset](FrameInfo::reset)
/// afterwards so transient events do not leak into the next frame.
#[derive(Debug, Clone)]
pub struct FrameInfo {
    /// The position of the cursor. If [None], the cursor left the window.
    pub cursor_pos: Option<Vector2<f64>>,
    /// The fired mouse button events.
    pub buttons: Vec<(MouseButton, ElementState)>,
    /// The scroll delta in pixels, if a wheel event was fired.
    pub scroll_delta: Option<Vector2<f64>>,
    /// The focus traversal event fired this frame, if any.
    pub focus: Option<FocusChange>,
    /// The size of the host viewport.
    pub size: Vector2<f64>,
}

impl FrameInfo {
    /// Reset the transient event state for a new frame.
    pub fn reset(&mut self) {
        self.buttons.clear();
        self.scroll_delta = None;
        self.focus = None;
    }
}

impl Default for FrameInfo {
    fn default() -> Self {
        Self {
            cursor_pos: None,
            buttons: Vec::with_capacity(2),
            scroll_delta: None,
            focus: None,
            size: Vector2::new(0.0, 0.0),
        }
    }
}

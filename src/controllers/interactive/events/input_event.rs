/// Window-system independent input, produced by an input adapter and consumed
/// by [`InteractiveController`](crate::controllers::interactive::InteractiveController).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Drawable area changed, in physical pixels.
    Resize { width: u32, height: u32 },
    /// Cursor position in physical pixels, origin top-left.
    MouseMove { x: f64, y: f64 },
    MouseButton { button: MouseButton, pressed: bool },
    /// Scroll in lines; positive scrolls away from the user.
    Scroll { delta: f64 },
    Key { key: Key, pressed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    R,
    H,
    Other,
}

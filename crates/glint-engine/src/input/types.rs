/// Keyboard key identifier.
///
/// Intentionally minimal: only keys the runtime cares to distinguish.
/// Everything else collapses into `Key::Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    /// Platform key not represented above.
    Unknown,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Key transition delivered to the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,

    /// True when this event is an OS key-repeat rather than a fresh press.
    pub repeat: bool,
}

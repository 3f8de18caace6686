//! Raw input vocabulary and its translation into abstract actions.
//!
//! The front end converts whatever the OS delivers (terminal key events,
//! mouse clicks, a GPIO joystick) into [`RawEvent`]s. [`ActionTranslator`]
//! turns those into the small [`Action`] set the navigation core reasons about.

mod held;
mod keymap;
#[cfg(test)]
mod tests;
mod translator;

pub use held::{HeldKeys, Release};
pub use keymap::{Key, KeyMap, KeyParseError};
pub use translator::{ActionTranslator, HeldDirections};

/// Abstract intent every raw input is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Prev,
    Next,
    Select,
    Back,
    Quit,
    Freeze,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Prev => "PREV",
            Action::Next => "NEXT",
            Action::Select => "SELECT",
            Action::Back => "BACK",
            Action::Quit => "QUIT",
            Action::Freeze => "FREEZE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickDirection {
    Up,
    Down,
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// One physical input event, delivered in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    JoystickDown(JoystickDirection),
    JoystickUp(JoystickDirection),
    /// The input device stopped reporting; anything still held is stale.
    FocusLost,
    Quit,
}

/// Identifier tracked in [`HeldKeys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeldInput {
    Key(Key),
    Joystick(JoystickDirection),
}

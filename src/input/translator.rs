use super::{Action, HeldInput, HeldKeys, JoystickDirection, KeyMap, MouseButton, RawEvent};
use std::sync::Arc;

/// Which direction actions are currently held, for continuous game controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub prev: bool,
    pub next: bool,
}

/// Stateless lookup from raw events to actions.
#[derive(Debug, Clone)]
pub struct ActionTranslator {
    keymap: Arc<KeyMap>,
}

impl ActionTranslator {
    pub fn new(keymap: Arc<KeyMap>) -> Self {
        Self { keymap }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Unmapped events translate to `None` and are dropped by the caller.
    pub fn translate(&self, event: &RawEvent) -> Option<Action> {
        match *event {
            RawEvent::KeyDown(key) | RawEvent::KeyUp(key) => self.keymap.action_for(key),
            RawEvent::MouseDown(button) => Some(mouse_action(button)),
            RawEvent::JoystickDown(direction) | RawEvent::JoystickUp(direction) => {
                Some(joystick_action(direction))
            }
            RawEvent::Quit => Some(Action::Quit),
            RawEvent::FocusLost => None,
        }
    }

    pub fn held_action(&self, input: HeldInput) -> Option<Action> {
        match input {
            HeldInput::Key(key) => self.keymap.action_for(key),
            HeldInput::Joystick(direction) => Some(joystick_action(direction)),
        }
    }

    /// Keyboard keys bound to `action` that are held and not consumed by a gesture.
    pub fn live_keys<'a>(
        &'a self,
        held: &'a HeldKeys,
        action: Action,
    ) -> impl Iterator<Item = HeldInput> + 'a {
        held.iter().filter(move |input| {
            matches!(input, HeldInput::Key(key) if self.keymap.action_for(*key) == Some(action))
                && held.is_live(*input)
        })
    }

    pub fn held_directions(&self, held: &HeldKeys) -> HeldDirections {
        let mut directions = HeldDirections::default();
        for input in held.iter() {
            match self.held_action(input) {
                Some(Action::Prev) => directions.prev = true,
                Some(Action::Next) => directions.next = true,
                _ => {}
            }
        }
        directions
    }
}

fn mouse_action(button: MouseButton) -> Action {
    match button {
        MouseButton::Left => Action::Prev,
        MouseButton::Right => Action::Next,
        MouseButton::Middle => Action::Select,
    }
}

fn joystick_action(direction: JoystickDirection) -> Action {
    match direction {
        JoystickDirection::Up => Action::Prev,
        JoystickDirection::Down => Action::Next,
        JoystickDirection::Left => Action::Back,
        JoystickDirection::Right => Action::Next,
        JoystickDirection::Middle => Action::Select,
    }
}

use super::Action;
use std::{fmt, str::FromStr};

/// Keyboard key as seen by the core, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParseError {
    input: String,
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown key '{}' (use a single character or one of enter, esc, backspace, tab, space, up, down, left, right)",
            self.input
        )
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        let key = match lowered.as_str() {
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Esc,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            _ => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() && ch != ' ' => {
                        Key::Char(ch.to_ascii_lowercase())
                    }
                    _ => {
                        return Err(KeyParseError {
                            input: raw.to_string(),
                        })
                    }
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(ch) => write!(f, "{}", ch.to_ascii_uppercase()),
            Key::Enter => f.write_str("Enter"),
            Key::Esc => f.write_str("Esc"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Tab => f.write_str("Tab"),
            Key::Space => f.write_str("Space"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
        }
    }
}

/// Key-to-action table, loaded once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<(Key, Action)>,
}

impl KeyMap {
    /// Later bindings for an already-bound key are ignored.
    pub fn new(bindings: impl IntoIterator<Item = (Key, Action)>) -> Self {
        let mut table: Vec<(Key, Action)> = Vec::new();
        for (key, action) in bindings {
            if !table.iter().any(|(bound, _)| *bound == key) {
                table.push((key, action));
            }
        }
        Self { bindings: table }
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }

    /// First key bound to `action`, used for on-screen hints.
    pub fn key_for(&self, action: Action) -> Option<Key> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == action)
            .map(|(key, _)| *key)
    }

    pub fn bindings(&self) -> &[(Key, Action)] {
        &self.bindings
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new([
            (Key::Char('a'), Action::Prev),
            (Key::Char('d'), Action::Next),
            (Key::Enter, Action::Select),
            (Key::Backspace, Action::Back),
            (Key::Char('f'), Action::Freeze),
            (Key::Esc, Action::Quit),
        ])
    }
}

use super::HeldInput;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Hold {
    since: Instant,
    silent: bool,
    spent: bool,
}

/// What a key-up should do once the key leaves the held set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Ordinary release; the key's action applies.
    Normal,
    /// The key was part of a chord or drove a gesture; no action.
    Silent,
}

/// Inputs currently held down.
///
/// Besides membership, each entry remembers whether its release should be
/// swallowed (chords, fired gestures) and whether a gesture already consumed it.
#[derive(Debug, Default)]
pub struct HeldKeys {
    entries: HashMap<HeldInput, Hold>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for auto-repeat presses of an input that is already down.
    pub fn press(&mut self, input: HeldInput, now: Instant) -> bool {
        if self.entries.contains_key(&input) {
            return false;
        }
        self.entries.insert(
            input,
            Hold {
                since: now,
                silent: false,
                spent: false,
            },
        );
        true
    }

    /// `None` when the input was not held (release without a press we saw).
    pub fn release(&mut self, input: HeldInput) -> Option<Release> {
        self.entries.remove(&input).map(|hold| {
            if hold.silent || hold.spent {
                Release::Silent
            } else {
                Release::Normal
            }
        })
    }

    pub fn contains(&self, input: HeldInput) -> bool {
        self.entries.contains_key(&input)
    }

    /// Held and not yet consumed by a gesture.
    pub fn is_live(&self, input: HeldInput) -> bool {
        self.entries.get(&input).is_some_and(|hold| !hold.spent)
    }

    pub fn held_since(&self, input: HeldInput) -> Option<Instant> {
        self.entries.get(&input).map(|hold| hold.since)
    }

    pub fn silence(&mut self, input: HeldInput) {
        if let Some(hold) = self.entries.get_mut(&input) {
            hold.silent = true;
        }
    }

    pub fn spend(&mut self, input: HeldInput) {
        if let Some(hold) = self.entries.get_mut(&input) {
            hold.spent = true;
            hold.silent = true;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = HeldInput> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

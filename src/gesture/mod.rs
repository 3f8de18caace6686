//! Precondition-gated hold timers.
//!
//! Timers are polled from the frame loop, never scheduled. A timer arms the
//! first time its precondition is observed true, clears the moment it is
//! observed false, and fires once when the required hold has elapsed.

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureTimer {
    started_at: Option<Instant>,
}

impl GestureTimer {
    pub const fn new() -> Self {
        Self { started_at: None }
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Arm on a true precondition, clear on a false one. Progress never survives a clear.
    pub fn track(&mut self, precondition: bool, now: Instant) {
        match (precondition, self.started_at) {
            (false, _) => self.started_at = None,
            (true, None) => self.started_at = Some(now),
            (true, Some(_)) => {}
        }
    }

    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
    }

    /// Fraction of `required` held so far, for progress hints.
    pub fn progress(&self, required: Duration, now: Instant) -> Option<f32> {
        let elapsed = self.elapsed(now)?;
        if required.is_zero() {
            return Some(1.0);
        }
        Some((elapsed.as_secs_f32() / required.as_secs_f32()).min(1.0))
    }

    /// Re-checks the precondition, then fires and clears once `required` has elapsed.
    pub fn poll(&mut self, precondition: bool, required: Duration, now: Instant) -> bool {
        self.track(precondition, now);
        match self.elapsed(now) {
            Some(elapsed) if elapsed >= required => {
                self.started_at = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    LongPressBack,
    SecretCombo,
    JoystickMiddle,
}

impl Gesture {
    pub fn label(self) -> &'static str {
        match self {
            Gesture::LongPressBack => "long-press-back",
            Gesture::SecretCombo => "secret-combo-hold",
            Gesture::JoystickMiddle => "joystick-middle-hold",
        }
    }
}

/// Precondition values sampled by the state machine for one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureConditions {
    pub long_press_back: bool,
    pub secret_combo: bool,
    pub joystick_middle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureDurations {
    pub long_press: Duration,
    pub secret_combo: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureTimers {
    pub long_press_back: GestureTimer,
    pub secret_combo: GestureTimer,
    pub joystick_middle: GestureTimer,
}

impl GestureTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, conditions: GestureConditions, now: Instant) {
        self.long_press_back.track(conditions.long_press_back, now);
        self.secret_combo.track(conditions.secret_combo, now);
        self.joystick_middle.track(conditions.joystick_middle, now);
    }

    pub fn cancel_all(&mut self) {
        self.long_press_back.cancel();
        self.secret_combo.cancel();
        self.joystick_middle.cancel();
    }

    /// Evaluates every timer and reports the first that fired.
    ///
    /// The secret menu gestures win over long-press-back; the caller applies
    /// the effect and re-samples conditions before the next poll.
    pub fn poll(
        &mut self,
        conditions: GestureConditions,
        durations: GestureDurations,
        now: Instant,
    ) -> Option<Gesture> {
        if self
            .secret_combo
            .poll(conditions.secret_combo, durations.secret_combo, now)
        {
            return Some(Gesture::SecretCombo);
        }
        if self
            .joystick_middle
            .poll(conditions.joystick_middle, durations.secret_combo, now)
        {
            return Some(Gesture::JoystickMiddle);
        }
        if self
            .long_press_back
            .poll(conditions.long_press_back, durations.long_press, now)
        {
            return Some(Gesture::LongPressBack);
        }
        None
    }
}

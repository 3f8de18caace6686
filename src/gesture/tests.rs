use super::*;
use std::time::{Duration, Instant};

const HOLD: Duration = Duration::from_secs(5);

fn durations() -> GestureDurations {
    GestureDurations {
        long_press: Duration::from_secs(2),
        secret_combo: HOLD,
    }
}

#[test]
fn timer_fires_once_at_threshold() {
    let t0 = Instant::now();
    let mut timer = GestureTimer::new();
    assert!(!timer.poll(true, HOLD, t0));
    assert_eq!(timer.elapsed(t0), Some(Duration::ZERO));
    assert!(!timer.poll(true, HOLD, t0 + HOLD - Duration::from_millis(1)));
    assert!(timer.poll(true, HOLD, t0 + HOLD));
    assert!(!timer.is_active());
}

#[test]
fn timer_rearms_from_scratch_after_precondition_loss() {
    let t0 = Instant::now();
    let eps = Duration::from_millis(1);
    let mut timer = GestureTimer::new();
    timer.track(true, t0);
    assert!(!timer.poll(true, HOLD, t0 + HOLD - eps));

    timer.track(false, t0 + HOLD - eps);
    assert!(!timer.is_active());

    let t1 = t0 + HOLD;
    timer.track(true, t1);
    assert!(!timer.poll(true, HOLD, t1 + HOLD - eps));
    assert!(timer.poll(true, HOLD, t1 + HOLD));
}

#[test]
fn poll_rechecks_precondition_before_firing() {
    let t0 = Instant::now();
    let mut timer = GestureTimer::new();
    timer.track(true, t0);
    assert!(!timer.poll(false, HOLD, t0 + HOLD * 2));
    assert!(!timer.is_active());
}

#[test]
fn progress_is_clamped() {
    let t0 = Instant::now();
    let mut timer = GestureTimer::new();
    assert_eq!(timer.progress(HOLD, t0), None);
    timer.track(true, t0);
    let half = timer.progress(HOLD, t0 + HOLD / 2).unwrap_or_default();
    assert!((half - 0.5).abs() < 0.01);
    assert_eq!(timer.progress(HOLD, t0 + HOLD * 3), Some(1.0));
}

#[test]
fn timers_track_independently() {
    let t0 = Instant::now();
    let mut timers = GestureTimers::new();
    timers.track(
        GestureConditions {
            long_press_back: true,
            secret_combo: false,
            joystick_middle: true,
        },
        t0,
    );
    assert!(timers.long_press_back.is_active());
    assert!(!timers.secret_combo.is_active());
    assert!(timers.joystick_middle.is_active());

    timers.cancel_all();
    assert_eq!(timers, GestureTimers::new());
}

#[test]
fn poll_reports_long_press_after_its_own_duration() {
    let t0 = Instant::now();
    let mut timers = GestureTimers::new();
    let conditions = GestureConditions {
        long_press_back: true,
        ..GestureConditions::default()
    };
    timers.track(conditions, t0);
    assert_eq!(timers.poll(conditions, durations(), t0 + Duration::from_millis(1999)), None);
    assert_eq!(
        timers.poll(conditions, durations(), t0 + Duration::from_secs(2)),
        Some(Gesture::LongPressBack)
    );
    assert_eq!(timers.poll(conditions, durations(), t0 + Duration::from_secs(3)), None);
}

#[test]
fn secret_combo_wins_over_long_press_in_same_tick() {
    let t0 = Instant::now();
    let mut timers = GestureTimers::new();
    let conditions = GestureConditions {
        long_press_back: true,
        secret_combo: true,
        joystick_middle: false,
    };
    timers.track(conditions, t0);
    assert_eq!(timers.poll(conditions, durations(), t0 + HOLD), Some(Gesture::SecretCombo));
    assert!(timers.long_press_back.is_active());
}

#[test]
fn joystick_hold_uses_secret_duration() {
    let t0 = Instant::now();
    let mut timers = GestureTimers::new();
    let conditions = GestureConditions {
        joystick_middle: true,
        ..GestureConditions::default()
    };
    timers.track(conditions, t0);
    assert_eq!(timers.poll(conditions, durations(), t0 + Duration::from_secs(2)), None);
    assert_eq!(
        timers.poll(conditions, durations(), t0 + HOLD),
        Some(Gesture::JoystickMiddle)
    );
}

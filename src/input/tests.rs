use super::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn translator() -> ActionTranslator {
    ActionTranslator::new(Arc::new(KeyMap::default()))
}

#[test]
fn default_keymap_translates_keyboard() {
    let tr = translator();
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Char('a'))), Some(Action::Prev));
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Char('d'))), Some(Action::Next));
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Enter)), Some(Action::Select));
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Backspace)), Some(Action::Back));
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Char('f'))), Some(Action::Freeze));
    assert_eq!(tr.translate(&RawEvent::KeyDown(Key::Esc)), Some(Action::Quit));
}

#[test]
fn unmapped_events_are_dropped() {
    let tr = translator();
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Char('z'))), None);
    assert_eq!(tr.translate(&RawEvent::KeyDown(Key::Tab)), None);
    assert_eq!(tr.translate(&RawEvent::FocusLost), None);
}

#[test]
fn mouse_mirrors_keyboard() {
    let tr = translator();
    assert_eq!(tr.translate(&RawEvent::MouseDown(MouseButton::Left)), Some(Action::Prev));
    assert_eq!(tr.translate(&RawEvent::MouseDown(MouseButton::Right)), Some(Action::Next));
    assert_eq!(
        tr.translate(&RawEvent::MouseDown(MouseButton::Middle)),
        Some(Action::Select)
    );
}

#[test]
fn joystick_directions_follow_fixed_mapping() {
    let tr = translator();
    let cases = [
        (JoystickDirection::Up, Action::Prev),
        (JoystickDirection::Down, Action::Next),
        (JoystickDirection::Left, Action::Back),
        (JoystickDirection::Right, Action::Next),
        (JoystickDirection::Middle, Action::Select),
    ];
    for (direction, expected) in cases {
        assert_eq!(
            tr.translate(&RawEvent::JoystickDown(direction)),
            Some(expected),
            "{direction:?}"
        );
    }
}

#[test]
fn custom_keymap_replaces_defaults() {
    let keymap = KeyMap::new([
        (Key::Left, Action::Prev),
        (Key::Right, Action::Next),
        (Key::Space, Action::Select),
    ]);
    let tr = ActionTranslator::new(Arc::new(keymap));
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Left)), Some(Action::Prev));
    assert_eq!(tr.translate(&RawEvent::KeyUp(Key::Char('a'))), None);
    assert_eq!(tr.keymap().key_for(Action::Select), Some(Key::Space));
}

#[test]
fn keymap_keeps_first_binding_for_duplicate_key() {
    let keymap = KeyMap::new([(Key::Enter, Action::Select), (Key::Enter, Action::Back)]);
    assert_eq!(keymap.action_for(Key::Enter), Some(Action::Select));
    assert_eq!(keymap.bindings().len(), 1);
}

#[test]
fn key_names_parse() {
    assert_eq!("a".parse::<Key>(), Ok(Key::Char('a')));
    assert_eq!("D".parse::<Key>(), Ok(Key::Char('d')));
    assert_eq!("Enter".parse::<Key>(), Ok(Key::Enter));
    assert_eq!("return".parse::<Key>(), Ok(Key::Enter));
    assert_eq!("escape".parse::<Key>(), Ok(Key::Esc));
    assert_eq!(" left ".parse::<Key>(), Ok(Key::Left));
    assert!("".parse::<Key>().is_err());
    assert!("ab".parse::<Key>().is_err());
    let err = "f13".parse::<Key>().unwrap_err();
    assert!(err.to_string().contains("f13"));
}

#[test]
fn key_display_is_hint_friendly() {
    assert_eq!(Key::Char('a').to_string(), "A");
    assert_eq!(Key::Enter.to_string(), "Enter");
}

#[test]
fn held_keys_ignore_repeat_presses() {
    let t0 = Instant::now();
    let mut held = HeldKeys::new();
    let a = HeldInput::Key(Key::Char('a'));
    assert!(held.press(a, t0));
    assert!(!held.press(a, t0 + Duration::from_millis(30)));
    assert_eq!(held.held_since(a), Some(t0));
    assert_eq!(held.len(), 1);
}

#[test]
fn silenced_and_spent_keys_release_quietly() {
    let t0 = Instant::now();
    let mut held = HeldKeys::new();
    let a = HeldInput::Key(Key::Char('a'));
    let d = HeldInput::Key(Key::Char('d'));
    let enter = HeldInput::Key(Key::Enter);
    held.press(a, t0);
    held.press(d, t0);
    held.press(enter, t0);
    held.silence(a);
    held.spend(d);

    assert!(held.is_live(a));
    assert!(!held.is_live(d));
    assert_eq!(held.release(a), Some(Release::Silent));
    assert_eq!(held.release(d), Some(Release::Silent));
    assert_eq!(held.release(enter), Some(Release::Normal));
    assert_eq!(held.release(enter), None);
    assert!(held.is_empty());
}

#[test]
fn held_directions_cover_keys_and_joystick() {
    let tr = translator();
    let t0 = Instant::now();
    let mut held = HeldKeys::new();
    assert_eq!(tr.held_directions(&held), HeldDirections::default());

    held.press(HeldInput::Key(Key::Char('a')), t0);
    held.press(HeldInput::Joystick(JoystickDirection::Down), t0);
    let directions = tr.held_directions(&held);
    assert!(directions.prev);
    assert!(directions.next);
}

#[test]
fn live_keys_only_report_keyboard_bindings() {
    let tr = translator();
    let t0 = Instant::now();
    let mut held = HeldKeys::new();
    held.press(HeldInput::Joystick(JoystickDirection::Up), t0);
    assert_eq!(tr.live_keys(&held, Action::Prev).count(), 0);

    held.press(HeldInput::Key(Key::Char('a')), t0);
    assert_eq!(tr.live_keys(&held, Action::Prev).count(), 1);
    held.spend(HeldInput::Key(Key::Char('a')));
    assert_eq!(tr.live_keys(&held, Action::Prev).count(), 0);
}

use crossbeam_channel::Sender;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermMouseButton,
    MouseEventKind,
};
use std::thread;
use tricorder::input::{Key, MouseButton, RawEvent};
use tricorder::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMessage {
    Raw(RawEvent),
    Resize,
}

/// Read crossterm events on a dedicated thread. Without key release reporting
/// every press is followed by a synthetic release so taps still register.
pub(crate) fn spawn_input_thread(
    tx: Sender<InputMessage>,
    key_release: bool,
) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                log_debug(&format!("terminal event read error: {err}"));
                return;
            }
        };
        for message in convert_event(event, key_release) {
            if tx.send(message).is_err() {
                return;
            }
        }
    })
}

pub(crate) fn convert_event(event: Event, key_release: bool) -> Vec<InputMessage> {
    match event {
        Event::Key(key) => convert_key(key, key_release)
            .into_iter()
            .map(InputMessage::Raw)
            .collect(),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(button) => {
                vec![InputMessage::Raw(RawEvent::MouseDown(mouse_button(button)))]
            }
            _ => Vec::new(),
        },
        Event::FocusLost => vec![InputMessage::Raw(RawEvent::FocusLost)],
        Event::Resize(_, _) => vec![InputMessage::Resize],
        _ => Vec::new(),
    }
}

fn convert_key(key: KeyEvent, key_release: bool) -> Vec<RawEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return if key.kind == KeyEventKind::Release {
            Vec::new()
        } else {
            vec![RawEvent::Quit]
        };
    }
    let Some(code) = key_from_code(key.code) else {
        return Vec::new();
    };
    match (key.kind, key_release) {
        (KeyEventKind::Press, true) => vec![RawEvent::KeyDown(code)],
        (KeyEventKind::Release, true) => vec![RawEvent::KeyUp(code)],
        (KeyEventKind::Press, false) => vec![RawEvent::KeyDown(code), RawEvent::KeyUp(code)],
        // Auto-repeat would restart hold timers.
        _ => Vec::new(),
    }
}

fn key_from_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(ch) => Key::Char(ch.to_ascii_lowercase()),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(key)
}

fn mouse_button(button: TermMouseButton) -> MouseButton {
    match button {
        TermMouseButton::Left => MouseButton::Left,
        TermMouseButton::Right => MouseButton::Right,
        TermMouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_without_release_support_synthesizes_key_up() {
        let down = Key::Char('a');
        assert_eq!(
            convert_event(key(KeyCode::Char('A'), KeyEventKind::Press), false),
            vec![
                InputMessage::Raw(RawEvent::KeyDown(down)),
                InputMessage::Raw(RawEvent::KeyUp(down))
            ]
        );
    }

    #[test]
    fn release_support_passes_presses_and_releases_through() {
        assert_eq!(
            convert_event(key(KeyCode::Enter, KeyEventKind::Press), true),
            vec![InputMessage::Raw(RawEvent::KeyDown(Key::Enter))]
        );
        assert_eq!(
            convert_event(key(KeyCode::Enter, KeyEventKind::Release), true),
            vec![InputMessage::Raw(RawEvent::KeyUp(Key::Enter))]
        );
        assert!(convert_event(key(KeyCode::Enter, KeyEventKind::Repeat), true).is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            convert_event(event, false),
            vec![InputMessage::Raw(RawEvent::Quit)]
        );
    }

    #[test]
    fn mouse_down_and_focus_and_resize() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(TermMouseButton::Right),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            convert_event(click, true),
            vec![InputMessage::Raw(RawEvent::MouseDown(MouseButton::Right))]
        );
        assert_eq!(
            convert_event(Event::FocusLost, true),
            vec![InputMessage::Raw(RawEvent::FocusLost)]
        );
        assert_eq!(convert_event(Event::Resize(80, 24), true), vec![InputMessage::Resize]);
        assert!(convert_event(Event::FocusGained, true).is_empty());
    }
}

use super::*;

const FIELD: Viewport = Viewport::new(320, 240);

fn manager() -> GameSessionManager {
    GameSessionManager::with_seed(FIELD, 17)
}

#[test]
fn launch_creates_single_session() {
    let mut sessions = manager();
    assert!(!sessions.is_active());
    sessions.launch(GameKind::Pong).expect("pong");
    assert_eq!(sessions.active_kind(), Some(GameKind::Pong));
    sessions.launch(GameKind::Snake).expect("snake");
    assert_eq!(sessions.active_kind(), Some(GameKind::Snake));
}

#[test]
fn launch_fails_when_viewport_too_small() {
    let mut sessions = GameSessionManager::with_seed(Viewport::new(200, 150), 1);
    let err = sessions.launch(GameKind::Breakout).unwrap_err();
    assert!(matches!(
        err,
        LaunchError::ViewportTooSmall {
            kind: GameKind::Breakout,
            ..
        }
    ));
    assert!(err.to_string().contains("Breakout needs at least"));
    assert!(!sessions.is_active());

    sessions.launch(GameKind::Pong).expect("pong fits");
    assert!(sessions.launch(GameKind::Breakout).is_err());
    assert_eq!(sessions.active_kind(), Some(GameKind::Pong));
}

#[test]
fn dispatch_without_session_is_none() {
    let mut sessions = manager();
    assert_eq!(sessions.dispatch(Action::Select), None);
}

#[test]
fn select_pauses_games_without_primary_action() {
    let mut sessions = manager();
    sessions.launch(GameKind::Snake).expect("snake");
    assert_eq!(sessions.dispatch(Action::Select), Some(GameResult::GamePaused));
    assert!(sessions.active().is_some_and(|game| game.paused()));
}

#[test]
fn breakout_select_launches_before_pausing() {
    let mut sessions = manager();
    sessions.launch(GameKind::Breakout).expect("breakout");
    assert_eq!(sessions.dispatch(Action::Select), None);
    assert_eq!(sessions.dispatch(Action::Select), Some(GameResult::GamePaused));
}

#[test]
fn paused_session_routes_to_pause_menu() {
    let mut sessions = manager();
    sessions.launch(GameKind::Pong).expect("pong");
    sessions.dispatch(Action::Select);
    assert_eq!(sessions.dispatch(Action::Next), None);
    assert_eq!(sessions.active().map(|game| game.pause_menu_index()), Some(1));
    assert_eq!(sessions.dispatch(Action::Select), Some(GameResult::QuitToMenu));

    sessions.dispatch(Action::Prev);
    assert_eq!(sessions.dispatch(Action::Select), Some(GameResult::ResumeGame));
    assert!(sessions.active().is_some_and(|game| !game.paused()));
}

#[test]
fn back_toggles_pause_both_ways() {
    let mut sessions = manager();
    sessions.launch(GameKind::Tetris).expect("tetris");
    assert_eq!(sessions.dispatch(Action::Back), Some(GameResult::GamePaused));
    assert_eq!(sessions.dispatch(Action::Back), Some(GameResult::ResumeGame));
}

#[test]
fn game_over_only_accepts_back() {
    let mut sessions = manager();
    sessions.launch(GameKind::Pong).expect("pong");
    for _ in 0..100_000 {
        if sessions.active().is_some_and(|game| game.game_over()) {
            break;
        }
        sessions.update(HeldDirections::default());
    }
    assert!(sessions.active().is_some_and(|game| game.game_over()));
    assert_eq!(sessions.dispatch(Action::Select), None);
    assert_eq!(sessions.dispatch(Action::Prev), None);
    assert_eq!(sessions.dispatch(Action::Back), Some(GameResult::QuitToMenu));
}

#[test]
fn end_session_tears_down() {
    let mut sessions = manager();
    sessions.launch(GameKind::Snake).expect("snake");
    assert_eq!(sessions.end_session(), Some(GameKind::Snake));
    assert_eq!(sessions.end_session(), None);
    assert!(sessions.active().is_none());
}

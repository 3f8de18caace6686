use super::*;
use crate::catalog::Catalog;

fn menus() -> MenuCatalog {
    MenuCatalog::build(&Catalog::builtin())
}

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn main_menu_has_hand_authored_entries() {
    let menus = menus();
    assert_eq!(
        names(menus.items(MenuId::Main)),
        ["Systems", "Sensors", "Sweep", "Schematics", "Settings"]
    );
    assert_eq!(menus.settings_index(), Some(4));
    let sweep = menus.item(MenuId::Main, 2).expect("sweep");
    assert_eq!(sweep.target_state, Some(State::Dashboard));
    assert_eq!(sweep.color_key.as_deref(), Some("SIDEBAR_ALL"));
}

#[test]
fn sensors_menu_is_derived_from_catalog() {
    let menus = menus();
    let sensors = menus.items(MenuId::Sensors);
    assert_eq!(
        names(sensors),
        ["Env: Temp", "Env: Humid", "Atmos", "Attitude", "Inertia"]
    );
    for item in sensors {
        assert_eq!(item.target_state, Some(State::SensorView));
        assert!(matches!(item.payload, Payload::Sensor { .. }));
    }
    assert_eq!(
        sensors[2].payload,
        Payload::Sensor {
            key: "PRESSURE".to_string()
        }
    );
}

#[test]
fn schematics_menu_lists_visible_models_then_back() {
    let menus = menus();
    let items = menus.items(MenuId::Schematics);
    assert_eq!(
        names(items),
        ["NCC-1701 Enterprise", "Apollo NCC-1570", "<- Back"]
    );
    assert_eq!(
        items[0].payload,
        Payload::Schematic {
            model: "ncc_1701".to_string()
        }
    );
    assert_eq!(items[2].action, Some(MenuAction::ReturnToMenu));
}

#[test]
fn secret_games_menu_launches_each_game() {
    let menus = menus();
    let items = menus.items(MenuId::SecretGames);
    assert_eq!(names(items), ["Pong", "Breakout", "Snake", "Tetris", "Quit"]);
    assert_eq!(items[0].action, Some(MenuAction::LaunchGame(GameKind::Pong)));
    assert_eq!(items[4].action, Some(MenuAction::ReturnToMenu));
    assert!(items.iter().all(|item| item.target_state.is_none()));
}

#[test]
fn settings_index_follows_name_not_position() {
    let menus = MenuCatalog::from_menus(
        vec![
            MenuItem::navigate("Settings", State::Settings),
            MenuItem::navigate("Sweep", State::Dashboard),
        ],
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    assert_eq!(menus.settings_index(), Some(0));

    let menus = MenuCatalog::from_menus(
        vec![MenuItem::navigate("Sweep", State::Dashboard)],
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    assert_eq!(menus.settings_index(), None);
}

#[test]
fn menu_for_state_covers_menu_screens_only() {
    assert_eq!(MenuId::for_state(State::Menu), Some(MenuId::Main));
    assert_eq!(MenuId::for_state(State::Settings), Some(MenuId::Settings));
    assert_eq!(MenuId::for_state(State::SecretGames), Some(MenuId::SecretGames));
    assert_eq!(MenuId::for_state(State::Dashboard), None);
    assert_eq!(MenuId::for_state(State::PongActive), None);
}

#[test]
fn wrap_helpers_walk_modulo_len() {
    for len in 1..6 {
        let mut index = 0;
        for k in 1..=(len * 3) {
            index = wrap_next(index, len);
            assert_eq!(index, k % len);
        }
        let mut index = 0;
        for k in 1..=(len * 3) {
            index = wrap_prev(index, len);
            assert_eq!(index, (len * 3 - k) % len);
        }
    }
    assert_eq!(wrap_next(0, 0), 0);
    assert_eq!(wrap_prev(0, 0), 0);
}

#[test]
fn cursors_are_independent_per_menu() {
    let mut cursors = MenuCursors::default();
    assert_eq!(cursors.next(MenuId::Main, 5), 1);
    assert_eq!(cursors.prev(MenuId::SecretGames, 5), 4);
    assert_eq!(cursors.get(MenuId::Main), 1);
    cursors.reset(MenuId::SecretGames);
    assert_eq!(cursors.get(MenuId::SecretGames), 0);
    assert_eq!(cursors.get(MenuId::Settings), 0);
}

#[test]
fn label_items_have_no_effect_fields() {
    let item = MenuItem::label("Version 1.0");
    assert!(item.target_state.is_none());
    assert!(item.action.is_none());
    assert_eq!(item.payload, Payload::None);
}

//! Menu entries and the fixed menus built from the catalog at startup.

#[cfg(test)]
mod tests;

use crate::catalog::Catalog;
use crate::games::GameKind;
use crate::nav::State;

/// Screen-specific data carried by a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    #[default]
    None,
    Sensor {
        key: String,
    },
    Schematic {
        model: String,
    },
}

/// Non-navigational effect of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LaunchGame(GameKind),
    ReturnToMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub target_state: Option<State>,
    pub payload: Payload,
    pub color_key: Option<String>,
    pub action: Option<MenuAction>,
}

impl MenuItem {
    pub fn navigate(name: impl Into<String>, target: State) -> Self {
        Self {
            name: name.into(),
            target_state: Some(target),
            payload: Payload::None,
            color_key: None,
            action: None,
        }
    }

    pub fn action(name: impl Into<String>, action: MenuAction) -> Self {
        Self {
            name: name.into(),
            target_state: None,
            payload: Payload::None,
            color_key: None,
            action: Some(action),
        }
    }

    /// An entry with neither target nor action; selecting it does nothing.
    pub fn label(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_state: None,
            payload: Payload::None,
            color_key: None,
            action: None,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_color(mut self, color_key: impl Into<String>) -> Self {
        self.color_key = Some(color_key.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Main,
    Sensors,
    Schematics,
    SecretGames,
    Settings,
}

impl MenuId {
    /// The menu shown while `state` is current.
    pub fn for_state(state: State) -> Option<MenuId> {
        match state {
            State::Menu => Some(MenuId::Main),
            State::SensorsMenu => Some(MenuId::Sensors),
            State::SchematicsMenu => Some(MenuId::Schematics),
            State::SecretGames => Some(MenuId::SecretGames),
            State::Settings => Some(MenuId::Settings),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuId::Main => "Main Menu",
            MenuId::Sensors => "Sensors",
            MenuId::Schematics => "Schematics",
            MenuId::SecretGames => "Secret Games",
            MenuId::Settings => "Settings",
        }
    }

    fn slot(self) -> usize {
        match self {
            MenuId::Main => 0,
            MenuId::Sensors => 1,
            MenuId::Schematics => 2,
            MenuId::SecretGames => 3,
            MenuId::Settings => 4,
        }
    }
}

pub const SETTINGS_ITEM_NAME: &str = "Settings";

/// All menus, built once and only indexed afterwards.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    menus: [Vec<MenuItem>; 5],
    settings_index: Option<usize>,
}

impl MenuCatalog {
    pub fn build(catalog: &Catalog) -> Self {
        let main = vec![
            MenuItem::navigate("Systems", State::SystemInfo).with_color("SIDEBAR_SYSTEM"),
            MenuItem::navigate("Sensors", State::SensorsMenu).with_color("SIDEBAR_TEMP"),
            MenuItem::navigate("Sweep", State::Dashboard).with_color("SIDEBAR_ALL"),
            MenuItem::navigate("Schematics", State::SchematicsMenu)
                .with_color("SIDEBAR_SCHEMATICS"),
            MenuItem::navigate(SETTINGS_ITEM_NAME, State::Settings).with_color("SIDEBAR_SETTINGS"),
        ];

        let sensors = catalog
            .sensors
            .iter()
            .filter(|sensor| sensor.is_browsable())
            .map(|sensor| {
                MenuItem::navigate(sensor.display_name.clone(), State::SensorView)
                    .with_payload(Payload::Sensor {
                        key: sensor.key.clone(),
                    })
                    .with_color(sensor.color_key.clone())
            })
            .collect();

        let mut schematics: Vec<MenuItem> = catalog
            .schematics
            .iter()
            .filter(|schematic| schematic.visible)
            .map(|schematic| {
                MenuItem::navigate(schematic.name.clone(), State::Schematics)
                    .with_payload(Payload::Schematic {
                        model: schematic.model.clone(),
                    })
                    .with_color("SIDEBAR_SCHEMATICS")
            })
            .collect();
        schematics.push(MenuItem::action("<- Back", MenuAction::ReturnToMenu));

        let mut secret_games: Vec<MenuItem> = GameKind::ALL
            .iter()
            .map(|kind| MenuItem::action(kind.label(), MenuAction::LaunchGame(*kind)))
            .collect();
        secret_games.push(MenuItem::action("Quit", MenuAction::ReturnToMenu));

        let settings = vec![
            MenuItem::navigate("Display Settings", State::SettingsDisplay),
            MenuItem::navigate("Device Settings", State::SettingsDevice),
            MenuItem::navigate("<- Back", State::Menu),
        ];

        Self::from_menus(main, sensors, schematics, secret_games, settings)
    }

    /// Assemble menus directly; the Settings index is looked up by name.
    pub fn from_menus(
        main: Vec<MenuItem>,
        sensors: Vec<MenuItem>,
        schematics: Vec<MenuItem>,
        secret_games: Vec<MenuItem>,
        settings: Vec<MenuItem>,
    ) -> Self {
        let settings_index = main
            .iter()
            .position(|item| item.name == SETTINGS_ITEM_NAME);
        Self {
            menus: [main, sensors, schematics, secret_games, settings],
            settings_index,
        }
    }

    pub fn items(&self, id: MenuId) -> &[MenuItem] {
        &self.menus[id.slot()]
    }

    pub fn item(&self, id: MenuId, index: usize) -> Option<&MenuItem> {
        self.items(id).get(index)
    }

    /// Index of the Settings entry in the main menu, used by the secret combo.
    pub fn settings_index(&self) -> Option<usize> {
        self.settings_index
    }
}

/// Step forward with wraparound. An empty list stays at 0.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Step back with wraparound. An empty list stays at 0.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

/// One selection index per menu. Each stays in range of its menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCursors {
    indices: [usize; 5],
}

impl MenuCursors {
    pub fn get(&self, id: MenuId) -> usize {
        self.indices[id.slot()]
    }

    pub fn reset(&mut self, id: MenuId) {
        self.indices[id.slot()] = 0;
    }

    pub fn next(&mut self, id: MenuId, len: usize) -> usize {
        let slot = &mut self.indices[id.slot()];
        *slot = wrap_next(*slot, len);
        *slot
    }

    pub fn prev(&mut self, id: MenuId, len: usize) -> usize {
        let slot = &mut self.indices[id.slot()];
        *slot = wrap_prev(*slot, len);
        *slot
    }
}

use crate::games::GameKind;
use std::fmt;

/// Every screen the device can show. Transitions are the only way to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Menu,
    SensorsMenu,
    Dashboard,
    SensorView,
    SystemInfo,
    SchematicsMenu,
    Schematics,
    Settings,
    SettingsDisplay,
    SettingsDevice,
    SelectComboDuration,
    ConfirmReboot,
    ConfirmShutdown,
    ConfirmRestartApp,
    SecretGames,
    PongActive,
    BreakoutActive,
    SnakeActive,
    TetrisActive,
}

impl State {
    pub fn game(self) -> Option<GameKind> {
        match self {
            State::PongActive => Some(GameKind::Pong),
            State::BreakoutActive => Some(GameKind::Breakout),
            State::SnakeActive => Some(GameKind::Snake),
            State::TetrisActive => Some(GameKind::Tetris),
            _ => None,
        }
    }

    pub fn is_game(self) -> bool {
        self.game().is_some()
    }

    /// Screens where SELECT or FREEZE toggles the freeze flag.
    pub fn is_live_view(self) -> bool {
        matches!(
            self,
            State::Dashboard | State::SensorView | State::SystemInfo
        )
    }

    pub fn is_confirm(self) -> bool {
        matches!(
            self,
            State::ConfirmReboot | State::ConfirmShutdown | State::ConfirmRestartApp
        )
    }

    /// Screen BACK leads to. `None` means BACK is not a navigation here.
    pub fn parent(self) -> Option<State> {
        match self {
            State::Menu => None,
            State::PongActive
            | State::BreakoutActive
            | State::SnakeActive
            | State::TetrisActive => None,
            State::Schematics => Some(State::SchematicsMenu),
            State::SettingsDisplay | State::SettingsDevice => Some(State::Settings),
            State::SelectComboDuration
            | State::ConfirmReboot
            | State::ConfirmShutdown
            | State::ConfirmRestartApp => Some(State::SettingsDevice),
            State::SensorsMenu
            | State::Dashboard
            | State::SensorView
            | State::SystemInfo
            | State::SchematicsMenu
            | State::Settings
            | State::SecretGames => Some(State::Menu),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            State::Menu => "MENU",
            State::SensorsMenu => "SENSORS_MENU",
            State::Dashboard => "DASHBOARD",
            State::SensorView => "SENSOR",
            State::SystemInfo => "SYSTEM",
            State::SchematicsMenu => "SCHEMATICS_MENU",
            State::Schematics => "SCHEMATICS",
            State::Settings => "SETTINGS",
            State::SettingsDisplay => "SETTINGS_DISPLAY",
            State::SettingsDevice => "SETTINGS_DEVICE",
            State::SelectComboDuration => "SELECT_COMBO_DURATION",
            State::ConfirmReboot => "CONFIRM_REBOOT",
            State::ConfirmShutdown => "CONFIRM_SHUTDOWN",
            State::ConfirmRestartApp => "CONFIRM_RESTART_APP",
            State::SecretGames => "SECRET_GAMES",
            State::PongActive => "PONG_ACTIVE",
            State::BreakoutActive => "BREAKOUT_ACTIVE",
            State::SnakeActive => "SNAKE_ACTIVE",
            State::TetrisActive => "TETRIS_ACTIVE",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current and previous screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTracker {
    current: State,
    previous: State,
}

impl StateTracker {
    pub fn new(initial: State) -> Self {
        Self {
            current: initial,
            previous: initial,
        }
    }

    pub fn current(&self) -> State {
        self.current
    }

    pub fn previous(&self) -> State {
        self.previous
    }

    /// Returns false without touching `previous` when already on `next`.
    pub fn transition_to(&mut self, next: State) -> bool {
        if next == self.current {
            return false;
        }
        tracing::debug!(from = %self.current, to = %next, "state transition");
        crate::log_debug(&format!("state {} -> {}", self.current, next));
        self.previous = self.current;
        self.current = next;
        true
    }
}

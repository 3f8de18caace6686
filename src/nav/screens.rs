use super::settings::{
    self, option_index, DeviceCommand, DeviceItem, CONFIRM_NO, CONFIRM_OPTIONS, CONFIRM_YES,
};
use super::snapshot::{GameView, MenuView, OptionsView, SchematicView, Screen, Snapshot};
use super::{NavigationStateMachine, State};
use crate::config::{AUTO_CYCLE_OPTIONS, SECRET_COMBO_OPTIONS};
use crate::games::{GameKind, GameResult};
use crate::input::Action;
use crate::menu::{wrap_next, wrap_prev, MenuAction, MenuId, MenuItem, Payload};
use std::time::{Duration, Instant};

pub const SCHEMATIC_PAUSE_OPTIONS: [&str; 3] = ["Toggle rotation", "Back to schematics", "Resume"];

impl NavigationStateMachine {
    /// Route one action to the handler of the current screen.
    pub(super) fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        let state = self.state.current();
        if state.is_game() {
            return self.game_input(action);
        }
        if let Some(id) = MenuId::for_state(state) {
            return self.menu_input(id, action, now);
        }
        match state {
            State::Dashboard | State::SensorView | State::SystemInfo => {
                self.live_view_input(action, now)
            }
            State::Schematics => self.schematics_input(action),
            State::SettingsDisplay => self.display_settings_input(action),
            State::SettingsDevice => self.device_settings_input(action, now),
            State::SelectComboDuration => self.combo_duration_input(action),
            state if state.is_confirm() => self.confirm_input(state, action),
            _ => {
                tracing::error!(state = %state, "no input handler for state");
                self.recover();
                true
            }
        }
    }

    /// Transition forward into `target`, resetting whatever that screen starts from.
    pub(super) fn enter(&mut self, target: State, now: Instant) -> bool {
        match target {
            State::Dashboard => {
                self.live.reset(now);
                self.live.cycle_index = 0;
                self.live.current_sensor = self.dashboard_keys.first().cloned();
            }
            State::SensorView => self.live.reset(now),
            State::SensorsMenu => self.cursors.reset(MenuId::Sensors),
            State::SchematicsMenu => self.cursors.reset(MenuId::Schematics),
            State::Settings => self.cursors.reset(MenuId::Settings),
            State::SecretGames => {
                self.secret_origin = self.state.current();
                self.cursors.reset(MenuId::SecretGames);
            }
            State::Schematics => {
                self.schematic.auto_rotate = true;
                self.schematic.yaw_steps = 0;
                self.schematic.pause_menu = None;
            }
            State::SettingsDisplay => {
                self.settings.display = option_index(&AUTO_CYCLE_OPTIONS, self.auto_cycle_interval);
            }
            State::SettingsDevice => self.settings.device = 0,
            State::SelectComboDuration => {
                self.settings.combo =
                    option_index(&SECRET_COMBO_OPTIONS, self.durations.secret_combo);
            }
            state if state.is_confirm() => self.settings.confirm = CONFIRM_NO,
            _ => {}
        }
        self.state.transition_to(target)
    }

    pub(super) fn return_to_menu(&mut self) -> bool {
        self.schematic.pause_menu = None;
        self.state.transition_to(State::Menu)
    }

    /// Follow [`State::parent`]. Screens without a parent ignore BACK.
    pub(super) fn go_back(&mut self) -> bool {
        match self.state.current().parent() {
            Some(State::Menu) => self.return_to_menu(),
            Some(parent) => self.state.transition_to(parent),
            None => false,
        }
    }

    fn menu_input(&mut self, id: MenuId, action: Action, now: Instant) -> bool {
        let len = self.menus.items(id).len();
        match action {
            Action::Prev => {
                self.cursors.prev(id, len);
                true
            }
            Action::Next => {
                self.cursors.next(id, len);
                true
            }
            Action::Select => self.activate(id, now),
            Action::Back => self.go_back(),
            Action::Freeze if id == MenuId::Settings => self.toggle_freeze(now),
            Action::Freeze | Action::Quit => false,
        }
    }

    fn activate(&mut self, id: MenuId, now: Instant) -> bool {
        let Some(item) = self.menus.item(id, self.cursors.get(id)).cloned() else {
            return false;
        };
        crate::log_debug(&format!("{} SELECT: {}", id.title(), item.name));
        if let Some(target) = item.target_state {
            return self.enter_with_payload(target, &item, now);
        }
        match item.action {
            Some(MenuAction::LaunchGame(kind)) => self.launch_game(kind),
            Some(MenuAction::ReturnToMenu) => self.return_to_menu(),
            None => {
                tracing::warn!(item = %item.name, "menu item has neither target nor action");
                false
            }
        }
    }

    fn enter_with_payload(&mut self, target: State, item: &MenuItem, now: Instant) -> bool {
        match (target, &item.payload) {
            (State::SensorView, Payload::Sensor { key }) => {
                self.live.current_sensor = Some(key.clone());
            }
            (State::Schematics, Payload::Schematic { model }) => {
                self.schematic.model = Some(model.clone());
            }
            (State::SensorView | State::Schematics, payload) => {
                tracing::warn!(
                    item = %item.name,
                    target = %target,
                    ?payload,
                    "menu payload does not fit target"
                );
                return false;
            }
            _ => {}
        }
        self.enter(target, now)
    }

    fn launch_game(&mut self, kind: GameKind) -> bool {
        match self.sessions.launch(kind) {
            Ok(()) => self.state.transition_to(kind.active_state()),
            Err(err) => {
                tracing::warn!(game = %kind, error = %err, "game launch failed");
                crate::log_debug(&format!("game launch failed: {err}"));
                false
            }
        }
    }

    fn game_input(&mut self, action: Action) -> bool {
        if !self.sessions.is_active() {
            tracing::error!(state = %self.state.current(), "game state without a session");
            self.recover();
            return true;
        }
        match self.sessions.dispatch(action) {
            Some(GameResult::QuitToMenu) => self.quit_game(),
            Some(GameResult::ResumeGame | GameResult::GamePaused) => true,
            None => matches!(action, Action::Prev | Action::Next | Action::Select),
        }
    }

    fn quit_game(&mut self) -> bool {
        self.sessions.end_session();
        let target = if self.secret_origin.is_game() || self.secret_origin == State::SecretGames {
            State::Menu
        } else {
            self.secret_origin
        };
        self.state.transition_to(target)
    }

    fn toggle_freeze(&mut self, now: Instant) -> bool {
        self.live.is_frozen = !self.live.is_frozen;
        if self.state.current() == State::Dashboard {
            self.live.auto_cycle = !self.live.auto_cycle;
            self.live.last_cycle = Some(now);
        }
        tracing::info!(
            state = %self.state.current(),
            frozen = self.live.is_frozen,
            auto_cycle = self.live.auto_cycle,
            "freeze toggled"
        );
        true
    }

    fn live_view_input(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Select | Action::Freeze => self.toggle_freeze(now),
            Action::Back => self.go_back(),
            Action::Prev | Action::Next | Action::Quit => false,
        }
    }

    fn schematics_input(&mut self, action: Action) -> bool {
        if let Some(index) = self.schematic.pause_menu {
            let len = SCHEMATIC_PAUSE_OPTIONS.len();
            return match action {
                Action::Prev => {
                    self.schematic.pause_menu = Some(wrap_prev(index, len));
                    true
                }
                Action::Next => {
                    self.schematic.pause_menu = Some(wrap_next(index, len));
                    true
                }
                Action::Select => {
                    self.schematic.pause_menu = None;
                    match index {
                        0 => {
                            self.schematic.auto_rotate = !self.schematic.auto_rotate;
                            tracing::info!(
                                auto = self.schematic.auto_rotate,
                                "schematic rotation mode"
                            );
                            true
                        }
                        1 => self.go_back(),
                        _ => true,
                    }
                }
                Action::Back => {
                    self.schematic.pause_menu = None;
                    true
                }
                Action::Freeze | Action::Quit => false,
            };
        }
        match action {
            Action::Prev | Action::Next if self.schematic.auto_rotate => false,
            Action::Prev => {
                self.schematic.yaw_steps -= 1;
                true
            }
            Action::Next => {
                self.schematic.yaw_steps += 1;
                true
            }
            Action::Select => {
                self.schematic.pause_menu = Some(0);
                true
            }
            Action::Back => self.go_back(),
            Action::Freeze | Action::Quit => false,
        }
    }

    fn display_settings_input(&mut self, action: Action) -> bool {
        let len = AUTO_CYCLE_OPTIONS.len() + 1;
        match action {
            Action::Prev => {
                self.settings.display = wrap_prev(self.settings.display, len);
                true
            }
            Action::Next => {
                self.settings.display = wrap_next(self.settings.display, len);
                true
            }
            Action::Select => match AUTO_CYCLE_OPTIONS.get(self.settings.display) {
                Some(secs) => {
                    self.set_auto_cycle_interval(Duration::from_secs(*secs));
                    true
                }
                None => self.return_to_menu(),
            },
            Action::Back => self.go_back(),
            Action::Freeze | Action::Quit => false,
        }
    }

    fn device_settings_input(&mut self, action: Action, now: Instant) -> bool {
        let len = DeviceItem::ALL.len();
        match action {
            Action::Prev => {
                self.settings.device = wrap_prev(self.settings.device, len);
                true
            }
            Action::Next => {
                self.settings.device = wrap_next(self.settings.device, len);
                true
            }
            Action::Select => match DeviceItem::ALL.get(self.settings.device) {
                Some(DeviceItem::BackToMenu) => self.return_to_menu(),
                Some(item) => self.enter(item.target(), now),
                None => false,
            },
            Action::Back => self.go_back(),
            Action::Freeze | Action::Quit => false,
        }
    }

    fn combo_duration_input(&mut self, action: Action) -> bool {
        let len = SECRET_COMBO_OPTIONS.len();
        match action {
            Action::Prev => {
                self.settings.combo = wrap_prev(self.settings.combo, len);
                true
            }
            Action::Next => {
                self.settings.combo = wrap_next(self.settings.combo, len);
                true
            }
            Action::Select => {
                if let Some(secs) = SECRET_COMBO_OPTIONS.get(self.settings.combo) {
                    self.set_combo_duration(Duration::from_secs(*secs));
                }
                self.state.transition_to(State::SettingsDevice)
            }
            Action::Back => self.go_back(),
            Action::Freeze | Action::Quit => false,
        }
    }

    fn confirm_input(&mut self, state: State, action: Action) -> bool {
        match action {
            Action::Prev | Action::Next => {
                self.settings.confirm = wrap_next(self.settings.confirm, CONFIRM_OPTIONS.len());
                true
            }
            Action::Select => {
                if self.settings.confirm == CONFIRM_YES {
                    if let Some(command) = DeviceCommand::for_confirm(state) {
                        tracing::warn!(command = %command, "device command confirmed");
                        crate::log_debug(&format!("device command confirmed: {command}"));
                        self.pending_command = Some(command);
                    }
                }
                self.state.transition_to(State::SettingsDevice)
            }
            Action::Back => self.go_back(),
            Action::Freeze | Action::Quit => false,
        }
    }

    /// Copy out what a renderer needs. Nothing in the result aliases live state.
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let state = self.state.current();
        let combo = self.durations.secret_combo;
        let secret_progress = self
            .timers
            .secret_combo
            .progress(combo, now)
            .or_else(|| self.timers.joystick_middle.progress(combo, now));
        Snapshot {
            current: state,
            previous: self.state.previous(),
            screen: self.screen(state),
            is_frozen: self.live.is_frozen,
            auto_cycle: self.live.auto_cycle,
            auto_cycle_interval: self.auto_cycle_interval,
            current_sensor: self.live.current_sensor.clone(),
            secret_progress,
            long_press_progress: self
                .timers
                .long_press_back
                .progress(self.durations.long_press, now),
        }
    }

    fn screen(&self, state: State) -> Screen {
        if let Some(id) = MenuId::for_state(state) {
            return Screen::Menu(MenuView {
                title: id.title(),
                items: self.menus.items(id).to_vec(),
                selected: self.cursors.get(id),
            });
        }
        match state {
            State::Dashboard | State::SensorView | State::SystemInfo => Screen::Live,
            State::Schematics => Screen::Schematic(SchematicView {
                model: self.schematic.model.clone(),
                auto_rotate: self.schematic.auto_rotate,
                yaw_steps: self.schematic.yaw_steps,
                pause_menu: self.schematic.pause_menu,
            }),
            State::SettingsDisplay => Screen::Options(OptionsView {
                title: "Display Settings",
                prompt: None,
                options: settings::display_options(),
                selected: self.settings.display,
            }),
            State::SettingsDevice => Screen::Options(OptionsView {
                title: "Device Settings",
                prompt: None,
                options: settings::device_options(),
                selected: self.settings.device,
            }),
            State::SelectComboDuration => Screen::Options(OptionsView {
                title: "Secret Combo Timer",
                prompt: None,
                options: settings::combo_options(),
                selected: self.settings.combo,
            }),
            state if state.is_confirm() => Screen::Options(OptionsView {
                title: "Confirm",
                prompt: DeviceCommand::for_confirm(state).map(DeviceCommand::prompt),
                options: CONFIRM_OPTIONS.iter().map(|s| s.to_string()).collect(),
                selected: self.settings.confirm,
            }),
            _ => match self.sessions.active() {
                Some(game) => Screen::Game(GameView {
                    kind: game.kind(),
                    paused: game.paused(),
                    game_over: game.game_over(),
                    score: game.score(),
                    hud: game.hud(),
                    banner: game.banner(),
                    pause_index: game.pause_menu_index(),
                    playfield: game.playfield(),
                    sprites: game.sprites(),
                }),
                None => Screen::Live,
            },
        }
    }
}

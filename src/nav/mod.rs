//! Navigation state machine: decides which screen is active and what an
//! input means right now.
//!
//! One frame is `handle_input` over the drained events followed by `update`.
//! Both take the frame clock explicitly so holds and auto-cycle can be driven
//! deterministically. Game routing is delegated to [`GameSessionManager`].

mod screens;
mod settings;
mod snapshot;
mod state;

pub use settings::{
    combo_options, device_options, display_options, DeviceCommand, DeviceItem, BACK_TO_MAIN_MENU,
    CONFIRM_OPTIONS,
};
pub use screens::SCHEMATIC_PAUSE_OPTIONS;
pub use snapshot::{GameView, MenuView, OptionsView, SchematicView, Screen, Snapshot};
pub use state::{State, StateTracker};

use crate::catalog::Catalog;
use crate::config::CoreConfig;
use crate::gesture::{Gesture, GestureConditions, GestureDurations, GestureTimers};
use crate::input::{
    Action, ActionTranslator, HeldInput, HeldKeys, JoystickDirection, RawEvent, Release,
};
use crate::menu::{MenuCatalog, MenuCursors, MenuId, MenuItem};
use crate::session::GameSessionManager;
use std::sync::Arc;
use std::time::{Duration, Instant};

const JOYSTICK_MIDDLE: HeldInput = HeldInput::Joystick(JoystickDirection::Middle);

/// Freeze and auto-cycle flags shared by the live sensor screens.
#[derive(Debug, Clone, Default)]
struct LiveView {
    is_frozen: bool,
    auto_cycle: bool,
    current_sensor: Option<String>,
    cycle_index: usize,
    last_cycle: Option<Instant>,
}

impl LiveView {
    fn reset(&mut self, now: Instant) {
        self.is_frozen = false;
        self.auto_cycle = true;
        self.last_cycle = Some(now);
    }
}

#[derive(Debug, Clone)]
struct SchematicState {
    model: Option<String>,
    auto_rotate: bool,
    yaw_steps: i32,
    pause_menu: Option<usize>,
}

impl Default for SchematicState {
    fn default() -> Self {
        Self {
            model: None,
            auto_rotate: true,
            yaw_steps: 0,
            pause_menu: None,
        }
    }
}

/// Cursors of the settings pages that are not catalog menus.
#[derive(Debug, Clone, Copy, Default)]
struct SettingsCursors {
    display: usize,
    device: usize,
    combo: usize,
    confirm: usize,
}

pub struct NavigationStateMachine {
    translator: ActionTranslator,
    menus: MenuCatalog,
    dashboard_keys: Vec<String>,
    state: StateTracker,
    cursors: MenuCursors,
    held: HeldKeys,
    timers: GestureTimers,
    durations: GestureDurations,
    auto_cycle_interval: Duration,
    live: LiveView,
    schematic: SchematicState,
    settings: SettingsCursors,
    sessions: GameSessionManager,
    /// Where the secret games menu was opened from; quitting a game lands here.
    secret_origin: State,
    pending_command: Option<DeviceCommand>,
    quit_requested: bool,
}

impl NavigationStateMachine {
    pub fn new(config: &CoreConfig, catalog: &Catalog) -> Self {
        Self::with_menus(config, MenuCatalog::build(catalog), catalog.dashboard_keys())
    }

    /// Build around hand-assembled menus and a dashboard cycle list.
    pub fn with_menus(
        config: &CoreConfig,
        menus: MenuCatalog,
        dashboard_keys: Vec<String>,
    ) -> Self {
        Self::with_sessions(
            config,
            menus,
            dashboard_keys,
            GameSessionManager::new(config.viewport),
        )
    }

    pub fn with_sessions(
        config: &CoreConfig,
        menus: MenuCatalog,
        dashboard_keys: Vec<String>,
        sessions: GameSessionManager,
    ) -> Self {
        if menus.settings_index().is_none() {
            tracing::warn!("main menu has no Settings entry; secret combo is unreachable");
        }
        Self {
            translator: ActionTranslator::new(Arc::clone(&config.keymap)),
            menus,
            dashboard_keys,
            state: StateTracker::new(State::Menu),
            cursors: MenuCursors::default(),
            held: HeldKeys::new(),
            timers: GestureTimers::new(),
            durations: GestureDurations {
                long_press: config.long_press,
                secret_combo: config.secret_combo,
            },
            auto_cycle_interval: config.auto_cycle,
            live: LiveView {
                auto_cycle: true,
                ..LiveView::default()
            },
            schematic: SchematicState::default(),
            settings: SettingsCursors::default(),
            sessions,
            secret_origin: State::Menu,
            pending_command: None,
            quit_requested: false,
        }
    }

    /// Process events in arrival order. Returns true when a redraw is needed.
    pub fn handle_input(&mut self, events: &[RawEvent], now: Instant) -> bool {
        let mut redraw = false;
        for event in events {
            redraw |= self.handle_event(*event, now);
            self.track_gestures(now);
        }
        redraw
    }

    fn handle_event(&mut self, event: RawEvent, now: Instant) -> bool {
        match event {
            RawEvent::KeyDown(key) => {
                let input = HeldInput::Key(key);
                if !self.held.press(input, now) {
                    return false;
                }
                crate::log_debug_content(&format!("key down {key}"));
                match self.translator.held_action(input) {
                    Some(Action::Prev) => self.mark_chord(input, Action::Next),
                    Some(Action::Next) => self.mark_chord(input, Action::Prev),
                    _ => {}
                }
                true
            }
            RawEvent::KeyUp(key) => {
                let fired = self.fire_due_gesture(now);
                let released = match self.held.release(HeldInput::Key(key)) {
                    Some(Release::Normal) => match self.translator.translate(&event) {
                        Some(action) => self.apply_action(action, now),
                        None => false,
                    },
                    Some(Release::Silent) => true,
                    None => false,
                };
                fired || released
            }
            RawEvent::MouseDown(_) | RawEvent::Quit => match self.translator.translate(&event) {
                Some(action) => self.apply_action(action, now),
                None => false,
            },
            RawEvent::JoystickDown(direction) => {
                let input = HeldInput::Joystick(direction);
                if !self.held.press(input, now) {
                    return false;
                }
                if direction == JoystickDirection::Middle {
                    return true;
                }
                match self.translator.translate(&event) {
                    Some(action) => self.apply_action(action, now),
                    None => false,
                }
            }
            RawEvent::JoystickUp(direction) => {
                let fired = self.fire_due_gesture(now);
                let release = self.held.release(HeldInput::Joystick(direction));
                let middle_tap =
                    direction == JoystickDirection::Middle && release == Some(Release::Normal);
                let released = if middle_tap {
                    self.apply_action(Action::Select, now)
                } else {
                    release.is_some()
                };
                fired || released
            }
            RawEvent::FocusLost => {
                let had_held = !self.held.is_empty();
                self.held.clear();
                self.timers.cancel_all();
                if had_held {
                    crate::log_debug("focus lost; cleared held inputs");
                }
                had_held
            }
        }
    }

    /// PREV and NEXT held together form a chord; neither release navigates.
    fn mark_chord(&mut self, pressed: HeldInput, partner: Action) {
        let partners: Vec<HeldInput> = self.translator.live_keys(&self.held, partner).collect();
        if partners.is_empty() {
            return;
        }
        self.held.silence(pressed);
        for input in partners {
            self.held.silence(input);
        }
    }

    fn apply_action(&mut self, action: Action, now: Instant) -> bool {
        tracing::debug!(action = action.label(), state = %self.state.current(), "action");
        if action == Action::Quit {
            self.quit_requested = true;
            tracing::info!("quit requested");
            return true;
        }
        self.dispatch(action, now)
    }

    /// Per-frame work that runs with or without input: gestures, auto-cycle, game ticks.
    pub fn update(&mut self, now: Instant) -> bool {
        let mut redraw = self.fire_due_gesture(now);
        redraw |= self.auto_cycle(now);

        if self.state.current().is_game() {
            if self.sessions.is_active() {
                let held = self.translator.held_directions(&self.held);
                self.sessions.update(held);
            } else {
                tracing::error!(state = %self.state.current(), "game state without a session");
                self.recover();
            }
            redraw = true;
        }

        redraw
            || self.timers.long_press_back.is_active()
            || self.timers.secret_combo.is_active()
            || self.timers.joystick_middle.is_active()
    }

    fn live_key_held(&self, action: Action) -> bool {
        self.translator.live_keys(&self.held, action).next().is_some()
    }

    fn gesture_conditions(&self) -> GestureConditions {
        let state = self.state.current();
        let prev_held = self.live_key_held(Action::Prev);
        let on_settings = self.menus.settings_index() == Some(self.cursors.get(MenuId::Main));
        GestureConditions {
            long_press_back: prev_held && long_press_allowed(state),
            secret_combo: state == State::Menu
                && on_settings
                && prev_held
                && self.live_key_held(Action::Next),
            joystick_middle: state == State::Menu && self.held.is_live(JOYSTICK_MIDDLE),
        }
    }

    fn track_gestures(&mut self, now: Instant) {
        let conditions = self.gesture_conditions();
        self.timers.track(conditions, now);
    }

    /// Fire the gesture whose hold has reached its duration by `now`, if any.
    /// Releases poll this before the input leaves the held set.
    fn fire_due_gesture(&mut self, now: Instant) -> bool {
        let conditions = self.gesture_conditions();
        match self.timers.poll(conditions, self.durations, now) {
            Some(gesture) => {
                let redraw = self.fire_gesture(gesture, now);
                self.track_gestures(now);
                redraw
            }
            None => false,
        }
    }

    fn fire_gesture(&mut self, gesture: Gesture, now: Instant) -> bool {
        tracing::info!(gesture = gesture.label(), state = %self.state.current(), "gesture fired");
        crate::log_debug(&format!("gesture {} fired", gesture.label()));
        match gesture {
            Gesture::LongPressBack => {
                self.spend_keys(Action::Prev);
                self.return_to_menu()
            }
            Gesture::SecretCombo => {
                self.spend_keys(Action::Prev);
                self.spend_keys(Action::Next);
                self.enter(State::SecretGames, now)
            }
            Gesture::JoystickMiddle => {
                self.held.spend(JOYSTICK_MIDDLE);
                self.enter(State::SecretGames, now)
            }
        }
    }

    fn spend_keys(&mut self, action: Action) {
        let keys: Vec<HeldInput> = self.translator.live_keys(&self.held, action).collect();
        for input in keys {
            self.held.spend(input);
        }
    }

    fn auto_cycle(&mut self, now: Instant) -> bool {
        if self.state.current() != State::Dashboard
            || self.live.is_frozen
            || !self.live.auto_cycle
            || self.dashboard_keys.is_empty()
        {
            return false;
        }
        let Some(last) = self.live.last_cycle else {
            self.live.last_cycle = Some(now);
            return false;
        };
        if now.saturating_duration_since(last) < self.auto_cycle_interval {
            return false;
        }
        self.live.cycle_index = (self.live.cycle_index + 1) % self.dashboard_keys.len();
        self.live.current_sensor = Some(self.dashboard_keys[self.live.cycle_index].clone());
        self.live.last_cycle = Some(now);
        tracing::debug!(sensor = ?self.live.current_sensor, "dashboard auto-cycled");
        true
    }

    /// Back to the main menu after an unexpected defect. Any game session is dropped.
    pub fn recover(&mut self) {
        tracing::error!(state = %self.state.current(), "recovering navigation to menu");
        crate::log_debug(&format!(
            "recovering from {} to {}",
            self.state.current(),
            State::Menu
        ));
        self.sessions.end_session();
        self.held.clear();
        self.timers.cancel_all();
        self.schematic.pause_menu = None;
        self.state.transition_to(State::Menu);
    }

    pub fn current_state(&self) -> State {
        self.state.current()
    }

    pub fn previous_state(&self) -> State {
        self.state.previous()
    }

    /// The menu shown right now, if the current screen is a menu.
    pub fn current_menu(&self) -> Option<MenuId> {
        MenuId::for_state(self.state.current())
    }

    pub fn current_menu_items(&self) -> &[MenuItem] {
        self.current_menu()
            .map(|id| self.menus.items(id))
            .unwrap_or(&[])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.current_menu().map(|id| self.cursors.get(id))
    }

    pub fn cursor(&self, id: MenuId) -> usize {
        self.cursors.get(id)
    }

    pub fn menus(&self) -> &MenuCatalog {
        &self.menus
    }

    pub fn is_frozen(&self) -> bool {
        self.live.is_frozen
    }

    pub fn auto_cycle_enabled(&self) -> bool {
        self.live.auto_cycle
    }

    pub fn current_sensor(&self) -> Option<&str> {
        self.live.current_sensor.as_deref()
    }

    pub fn selected_schematic(&self) -> Option<&str> {
        self.schematic.model.as_deref()
    }

    pub fn held_keys(&self) -> &HeldKeys {
        &self.held
    }

    pub fn timers(&self) -> &GestureTimers {
        &self.timers
    }

    pub fn sessions(&self) -> &GameSessionManager {
        &self.sessions
    }

    pub fn combo_duration(&self) -> Duration {
        self.durations.secret_combo
    }

    /// Takes effect on the next timer evaluation.
    pub fn set_combo_duration(&mut self, duration: Duration) {
        tracing::info!(secs = duration.as_secs_f64(), "secret combo duration changed");
        self.durations.secret_combo = duration;
    }

    pub fn auto_cycle_interval(&self) -> Duration {
        self.auto_cycle_interval
    }

    pub fn set_auto_cycle_interval(&mut self, interval: Duration) {
        tracing::info!(secs = interval.as_secs_f64(), "auto-cycle interval changed");
        self.auto_cycle_interval = interval;
    }

    /// A device command confirmed by the user, handed out once.
    pub fn take_device_command(&mut self) -> Option<DeviceCommand> {
        self.pending_command.take()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

/// Long-press-back is meaningless where BACK does not navigate.
fn long_press_allowed(state: State) -> bool {
    !matches!(state, State::Menu | State::SecretGames) && !state.is_game()
}

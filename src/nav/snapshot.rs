use super::State;
use crate::games::{GameKind, Sprite, Viewport};
use crate::menu::MenuItem;
use std::time::Duration;

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub current: State,
    pub previous: State,
    pub screen: Screen,
    pub is_frozen: bool,
    pub auto_cycle: bool,
    pub auto_cycle_interval: Duration,
    pub current_sensor: Option<String>,
    /// Progress of the secret menu hold, keyboard or joystick, in `0.0..=1.0`.
    pub secret_progress: Option<f32>,
    pub long_press_progress: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu(MenuView),
    /// Dashboard, single sensor and system info panels.
    Live,
    Options(OptionsView),
    Schematic(SchematicView),
    Game(GameView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionsView {
    pub title: &'static str,
    pub prompt: Option<&'static str>,
    pub options: Vec<String>,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchematicView {
    pub model: Option<String>,
    pub auto_rotate: bool,
    /// Manual rotation steps, positive is clockwise.
    pub yaw_steps: i32,
    pub pause_menu: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub kind: GameKind,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub hud: String,
    pub banner: Option<&'static str>,
    pub pause_index: usize,
    pub playfield: Viewport,
    pub sprites: Vec<Sprite>,
}

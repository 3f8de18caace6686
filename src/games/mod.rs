//! Mini-games and the control surface the navigation core drives them through.
//!
//! The core never touches a game's internals. It steers, triggers the primary
//! action, toggles and navigates the pause menu, ticks it once per frame, and
//! reads `paused`/`game_over`/score back for the snapshot.

mod breakout;
mod pong;
mod rng;
mod snake;
#[cfg(test)]
mod tests;
mod tetris;

pub use breakout::Breakout;
pub use pong::Pong;
pub use rng::GameRng;
pub use snake::Snake;
pub use tetris::Tetris;

use crate::input::HeldDirections;
use crate::nav::State;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Pong,
    Breakout,
    Snake,
    Tetris,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Pong,
        GameKind::Breakout,
        GameKind::Snake,
        GameKind::Tetris,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameKind::Pong => "Pong",
            GameKind::Breakout => "Breakout",
            GameKind::Snake => "Snake",
            GameKind::Tetris => "Tetris",
        }
    }

    pub fn active_state(self) -> State {
        match self {
            GameKind::Pong => State::PongActive,
            GameKind::Breakout => State::BreakoutActive,
            GameKind::Snake => State::SnakeActive,
            GameKind::Tetris => State::TetrisActive,
        }
    }

    /// Smallest playfield the game can lay itself out in.
    pub fn min_viewport(self) -> Viewport {
        match self {
            GameKind::Pong => Viewport::new(120, 80),
            GameKind::Breakout => Viewport::new(
                breakout::BRICK_FIELD_WIDTH,
                breakout::MIN_HEIGHT,
            ),
            GameKind::Snake => Viewport::new(snake::CELL * 8, snake::CELL * 6),
            GameKind::Tetris => Viewport::new(120, 160),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a dispatched action meant to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    ResumeGame,
    QuitToMenu,
    GamePaused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn fits(self, min: Viewport) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

/// Directional input for a running game: PREV and NEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Back,
    Forward,
}

pub const PAUSE_OPTIONS: [&str; 2] = ["Resume", "Quit to Menu"];

/// Run/pause/over flags and the pause menu shared by every game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayState {
    pub paused: bool,
    pub game_over: bool,
    pub pause_index: usize,
    pub banner: Option<&'static str>,
}

impl PlayState {
    pub fn running(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn finish(&mut self, banner: &'static str) {
        self.game_over = true;
        self.banner = Some(banner);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Paddle,
    Ball,
    Brick(u8),
    SnakeHead,
    SnakeBody,
    Food,
    Block(u8),
    Wall,
}

/// Axis-aligned rectangle in playfield units, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: SpriteKind,
}

impl Sprite {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: SpriteKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    pub fn overlaps(&self, other: &Sprite) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

pub trait Game {
    fn kind(&self) -> GameKind;
    fn play(&self) -> &PlayState;
    fn play_mut(&mut self) -> &mut PlayState;

    /// One frame of simulation. Held directions drive continuous controls.
    fn update(&mut self, held: HeldDirections);

    /// PREV/NEXT while running: `move_*` or `turn_*` depending on the game.
    fn steer(&mut self, steer: Steer);

    /// SELECT while running. Returns false when the game has no primary
    /// action right now, in which case SELECT pauses.
    fn primary_action(&mut self) -> bool {
        false
    }

    fn score(&self) -> u32;
    fn hud(&self) -> String;
    fn playfield(&self) -> Viewport;
    fn sprites(&self) -> Vec<Sprite>;

    fn paused(&self) -> bool {
        self.play().paused
    }

    fn game_over(&self) -> bool {
        self.play().game_over
    }

    fn banner(&self) -> Option<&'static str> {
        self.play().banner
    }

    fn pause_menu_index(&self) -> usize {
        self.play().pause_index
    }

    fn toggle_pause(&mut self) {
        let kind = self.kind();
        let play = self.play_mut();
        play.paused = !play.paused;
        if play.paused {
            play.pause_index = 0;
        }
        tracing::info!(game = %kind, paused = play.paused, "pause toggled");
    }

    fn navigate_pause_menu_up(&mut self) {
        let play = self.play_mut();
        if play.paused {
            play.pause_index = crate::menu::wrap_prev(play.pause_index, PAUSE_OPTIONS.len());
        }
    }

    fn navigate_pause_menu_down(&mut self) {
        let play = self.play_mut();
        if play.paused {
            play.pause_index = crate::menu::wrap_next(play.pause_index, PAUSE_OPTIONS.len());
        }
    }

    fn select_pause_menu_option(&mut self) -> Option<GameResult> {
        if !self.play().paused {
            return None;
        }
        match PAUSE_OPTIONS.get(self.play().pause_index).copied() {
            Some("Resume") => {
                self.toggle_pause();
                Some(GameResult::ResumeGame)
            }
            Some("Quit to Menu") => Some(GameResult::QuitToMenu),
            _ => None,
        }
    }
}

/// Build a fresh game for `viewport`. The caller checks the minimum size first.
pub fn create(kind: GameKind, viewport: Viewport, seed: u64) -> Box<dyn Game> {
    let rng = GameRng::new(seed);
    match kind {
        GameKind::Pong => Box::new(Pong::new(viewport, rng)),
        GameKind::Breakout => Box::new(Breakout::new(viewport, rng)),
        GameKind::Snake => Box::new(Snake::new(viewport, rng)),
        GameKind::Tetris => Box::new(Tetris::new(viewport, rng)),
    }
}

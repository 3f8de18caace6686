//! Ownership of the single active mini-game session.

#[cfg(test)]
mod tests;

use crate::games::{self, Game, GameKind, GameResult, Steer, Viewport};
use crate::input::{Action, HeldDirections};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    ViewportTooSmall {
        kind: GameKind,
        viewport: Viewport,
        minimum: Viewport,
    },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::ViewportTooSmall {
                kind,
                viewport,
                minimum,
            } => write!(
                f,
                "{kind} needs at least {}x{}, viewport is {}x{}",
                minimum.width, minimum.height, viewport.width, viewport.height
            ),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Holds at most one game and routes actions into it.
pub struct GameSessionManager {
    viewport: Viewport,
    seed: u64,
    active: Option<Box<dyn Game>>,
}

impl fmt::Debug for GameSessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSessionManager")
            .field("viewport", &self.viewport)
            .field("active", &self.active_kind())
            .finish()
    }
}

impl GameSessionManager {
    pub fn new(viewport: Viewport) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(1);
        Self::with_seed(viewport, seed)
    }

    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self {
            viewport,
            seed,
            active: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn next_seed(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.seed
    }

    /// Construct `kind`, replacing any session already running.
    pub fn launch(&mut self, kind: GameKind) -> Result<(), LaunchError> {
        let minimum = kind.min_viewport();
        if !self.viewport.fits(minimum) {
            return Err(LaunchError::ViewportTooSmall {
                kind,
                viewport: self.viewport,
                minimum,
            });
        }
        if let Some(previous) = self.active_kind() {
            tracing::warn!(
                replaced = %previous,
                launched = %kind,
                "game launched over an active session"
            );
            crate::log_debug(&format!("replacing active {previous} session with {kind}"));
        }
        let seed = self.next_seed();
        self.active = Some(games::create(kind, self.viewport, seed));
        tracing::info!(
            game = %kind,
            width = self.viewport.width,
            height = self.viewport.height,
            "game launched"
        );
        Ok(())
    }

    /// Forward one action, honouring the session's running/paused/over state.
    pub fn dispatch(&mut self, action: Action) -> Option<GameResult> {
        let game = self.active.as_mut()?;
        if game.game_over() {
            return (action == Action::Back).then_some(GameResult::QuitToMenu);
        }
        if game.paused() {
            return match action {
                Action::Prev => {
                    game.navigate_pause_menu_up();
                    None
                }
                Action::Next => {
                    game.navigate_pause_menu_down();
                    None
                }
                Action::Select => game.select_pause_menu_option(),
                Action::Back => {
                    game.toggle_pause();
                    Some(GameResult::ResumeGame)
                }
                Action::Quit | Action::Freeze => None,
            };
        }
        match action {
            Action::Prev => {
                game.steer(Steer::Back);
                None
            }
            Action::Next => {
                game.steer(Steer::Forward);
                None
            }
            Action::Select => {
                if game.primary_action() {
                    None
                } else {
                    game.toggle_pause();
                    Some(GameResult::GamePaused)
                }
            }
            Action::Back => {
                game.toggle_pause();
                Some(GameResult::GamePaused)
            }
            Action::Quit | Action::Freeze => None,
        }
    }

    /// Per-frame tick of the active session.
    pub fn update(&mut self, held: HeldDirections) {
        if let Some(game) = self.active.as_mut() {
            game.update(held);
        }
    }

    /// Drops the session. Returns what was running, if anything.
    pub fn end_session(&mut self) -> Option<GameKind> {
        let ended = self.active.take().map(|game| game.kind());
        if let Some(kind) = ended {
            tracing::info!(game = %kind, "game session ended");
        }
        ended
    }

    pub fn active(&self) -> Option<&dyn Game> {
        self.active.as_deref()
    }

    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(|game| game.kind())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

use super::{Game, GameKind, GameRng, PlayState, Sprite, SpriteKind, Steer, Viewport};
use crate::input::HeldDirections;

const PADDLE_WIDTH: f32 = 5.0;
const PADDLE_HEIGHT: f32 = 40.0;
const BALL_SIZE: f32 = 5.0;
const PADDLE_SPEED: f32 = 4.0;
const BALL_SPEED: f32 = 3.0;
const BOUNCE_SPEEDUP: f32 = 1.1;
pub const SCORE_LIMIT: u32 = 7;

/// Single-player pong: the paddle guards the left wall, the right wall scores.
#[derive(Debug, Clone)]
pub struct Pong {
    field: Viewport,
    play: PlayState,
    rng: GameRng,
    paddle_y: f32,
    ball_x: f32,
    ball_y: f32,
    vel_x: f32,
    vel_y: f32,
    score: u32,
}

impl Pong {
    pub fn new(field: Viewport, rng: GameRng) -> Self {
        let mut game = Self {
            field,
            play: PlayState::default(),
            rng,
            paddle_y: field.height as f32 / 2.0 - PADDLE_HEIGHT / 2.0,
            ball_x: 0.0,
            ball_y: 0.0,
            vel_x: 0.0,
            vel_y: 0.0,
            score: 0,
        };
        game.reset_ball();
        game
    }

    fn width(&self) -> f32 {
        self.field.width as f32
    }

    fn height(&self) -> f32 {
        self.field.height as f32
    }

    fn reset_ball(&mut self) {
        self.ball_x = self.width() / 2.0 - BALL_SIZE / 2.0;
        self.ball_y = self.height() / 2.0 - BALL_SIZE / 2.0;
        self.vel_x = BALL_SPEED * self.rng.sign();
        self.vel_y = BALL_SPEED * self.rng.sign();
    }

    pub fn move_paddle_up(&mut self) {
        if self.play.running() {
            self.paddle_y = (self.paddle_y - PADDLE_SPEED).max(0.0);
        }
    }

    pub fn move_paddle_down(&mut self) {
        if self.play.running() {
            self.paddle_y = (self.paddle_y + PADDLE_SPEED).min(self.height() - PADDLE_HEIGHT);
        }
    }

    pub fn paddle_y(&self) -> f32 {
        self.paddle_y
    }

    fn paddle(&self) -> Sprite {
        Sprite::new(0.0, self.paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT, SpriteKind::Paddle)
    }

    fn ball(&self) -> Sprite {
        Sprite::new(self.ball_x, self.ball_y, BALL_SIZE, BALL_SIZE, SpriteKind::Ball)
    }

    #[cfg(test)]
    pub(crate) fn place_ball(&mut self, x: f32, y: f32, vel_x: f32, vel_y: f32) {
        self.ball_x = x;
        self.ball_y = y;
        self.vel_x = vel_x;
        self.vel_y = vel_y;
    }

    #[cfg(test)]
    pub(crate) fn ball_velocity(&self) -> (f32, f32) {
        (self.vel_x, self.vel_y)
    }
}

impl Game for Pong {
    fn kind(&self) -> GameKind {
        GameKind::Pong
    }

    fn play(&self) -> &PlayState {
        &self.play
    }

    fn play_mut(&mut self) -> &mut PlayState {
        &mut self.play
    }

    fn update(&mut self, held: HeldDirections) {
        if !self.play.running() {
            return;
        }
        if held.prev {
            self.move_paddle_up();
        } else if held.next {
            self.move_paddle_down();
        }

        self.ball_x += self.vel_x;
        self.ball_y += self.vel_y;

        let floor = self.height() - BALL_SIZE;
        if self.ball_y <= 0.0 || self.ball_y >= floor {
            self.vel_y = -self.vel_y;
            self.ball_y = self.ball_y.clamp(0.0, floor);
        }

        if self.ball_x >= self.width() - BALL_SIZE {
            self.score += 1;
            if self.score >= SCORE_LIMIT {
                self.play.finish("YOU WIN!");
                tracing::info!(score = self.score, "pong won");
            } else {
                self.reset_ball();
            }
            return;
        }

        if self.ball_x <= 0.0 {
            self.play.finish("GAME OVER");
            tracing::info!(score = self.score, "pong ball missed");
            return;
        }

        if self.vel_x < 0.0 && self.ball().overlaps(&self.paddle()) {
            self.vel_x *= -BOUNCE_SPEEDUP;
            let hit = (self.ball_y + BALL_SIZE / 2.0) - (self.paddle_y + PADDLE_HEIGHT / 2.0);
            self.vel_y += hit * 0.1;
            self.ball_x = PADDLE_WIDTH;
        }
    }

    fn steer(&mut self, steer: Steer) {
        match steer {
            Steer::Back => self.move_paddle_up(),
            Steer::Forward => self.move_paddle_down(),
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn hud(&self) -> String {
        format!("Score: {}/{}", self.score, SCORE_LIMIT)
    }

    fn playfield(&self) -> Viewport {
        self.field
    }

    fn sprites(&self) -> Vec<Sprite> {
        vec![self.paddle(), self.ball()]
    }
}

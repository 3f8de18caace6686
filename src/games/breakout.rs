use super::{Game, GameKind, GameRng, PlayState, Sprite, SpriteKind, Steer, Viewport};
use crate::input::HeldDirections;

const PADDLE_WIDTH: f32 = 60.0;
const PADDLE_HEIGHT: f32 = 8.0;
const PADDLE_OFFSET: f32 = 20.0;
const PADDLE_SPEED: f32 = 6.0;
const BALL_SIZE: f32 = 6.0;
const BALL_SPEED_X: f32 = 3.0;
const BALL_SPEED_Y: f32 = -3.0;
const MAX_SPEED_X: f32 = 6.0;
const BRICK_ROWS: u32 = 6;
const BRICKS_PER_ROW: u32 = 8;
const BRICK_WIDTH: u32 = 35;
const BRICK_HEIGHT: u32 = 12;
const BRICK_SPACING: u32 = 4;
const BRICK_TOP: u32 = 30;
const LIVES: u32 = 3;
const BRICK_POINTS: u32 = 10;

pub(super) const BRICK_FIELD_WIDTH: u32 =
    BRICKS_PER_ROW * BRICK_WIDTH + (BRICKS_PER_ROW - 1) * BRICK_SPACING;
pub(super) const MIN_HEIGHT: u32 =
    BRICK_TOP + BRICK_ROWS * (BRICK_HEIGHT + BRICK_SPACING) + 80;

#[derive(Debug, Clone, Copy)]
struct Brick {
    rect: Sprite,
    alive: bool,
}

#[derive(Debug, Clone)]
pub struct Breakout {
    field: Viewport,
    play: PlayState,
    rng: GameRng,
    paddle_x: f32,
    ball_x: f32,
    ball_y: f32,
    vel_x: f32,
    vel_y: f32,
    ball_on_paddle: bool,
    bricks: Vec<Brick>,
    score: u32,
    lives: u32,
}

impl Breakout {
    pub fn new(field: Viewport, rng: GameRng) -> Self {
        let mut game = Self {
            field,
            play: PlayState::default(),
            rng,
            paddle_x: field.width as f32 / 2.0 - PADDLE_WIDTH / 2.0,
            ball_x: 0.0,
            ball_y: 0.0,
            vel_x: 0.0,
            vel_y: 0.0,
            ball_on_paddle: true,
            bricks: build_bricks(field),
            score: 0,
            lives: LIVES,
        };
        game.reset_ball();
        game
    }

    fn paddle_y(&self) -> f32 {
        self.field.height as f32 - PADDLE_OFFSET
    }

    fn reset_ball(&mut self) {
        self.ball_on_paddle = true;
        self.vel_x = BALL_SPEED_X * self.rng.sign();
        self.vel_y = BALL_SPEED_Y;
        self.rest_ball_on_paddle();
    }

    fn rest_ball_on_paddle(&mut self) {
        self.ball_x = self.paddle_x + PADDLE_WIDTH / 2.0 - BALL_SIZE / 2.0;
        self.ball_y = self.paddle_y() - BALL_SIZE - 2.0;
    }

    pub fn move_paddle_left(&mut self) {
        if !self.play.running() {
            return;
        }
        self.paddle_x = (self.paddle_x - PADDLE_SPEED).max(0.0);
        if self.ball_on_paddle {
            self.rest_ball_on_paddle();
        }
    }

    pub fn move_paddle_right(&mut self) {
        if !self.play.running() {
            return;
        }
        let max_x = self.field.width as f32 - PADDLE_WIDTH;
        self.paddle_x = (self.paddle_x + PADDLE_SPEED).min(max_x);
        if self.ball_on_paddle {
            self.rest_ball_on_paddle();
        }
    }

    /// Returns true when the ball left the paddle.
    pub fn launch_ball(&mut self) -> bool {
        if self.ball_on_paddle && self.play.running() {
            self.ball_on_paddle = false;
            tracing::debug!("breakout ball launched");
            return true;
        }
        false
    }

    pub fn ball_on_paddle(&self) -> bool {
        self.ball_on_paddle
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn bricks_left(&self) -> usize {
        self.bricks.iter().filter(|brick| brick.alive).count()
    }

    fn paddle(&self) -> Sprite {
        Sprite::new(
            self.paddle_x,
            self.paddle_y(),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            SpriteKind::Paddle,
        )
    }

    fn ball(&self) -> Sprite {
        Sprite::new(self.ball_x, self.ball_y, BALL_SIZE, BALL_SIZE, SpriteKind::Ball)
    }

    #[cfg(test)]
    pub(crate) fn drop_ball_below_field(&mut self) {
        self.ball_on_paddle = false;
        self.ball_y = self.field.height as f32 + 1.0;
        self.vel_y = 1.0;
    }
}

fn build_bricks(field: Viewport) -> Vec<Brick> {
    let start_x = field.width.saturating_sub(BRICK_FIELD_WIDTH) / 2;
    let mut bricks = Vec::with_capacity((BRICK_ROWS * BRICKS_PER_ROW) as usize);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICKS_PER_ROW {
            let x = start_x + col * (BRICK_WIDTH + BRICK_SPACING);
            let y = BRICK_TOP + row * (BRICK_HEIGHT + BRICK_SPACING);
            bricks.push(Brick {
                rect: Sprite::new(
                    x as f32,
                    y as f32,
                    BRICK_WIDTH as f32,
                    BRICK_HEIGHT as f32,
                    SpriteKind::Brick((row % 3) as u8),
                ),
                alive: true,
            });
        }
    }
    bricks
}

impl Game for Breakout {
    fn kind(&self) -> GameKind {
        GameKind::Breakout
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
            self.move_paddle_left();
        } else if held.next {
            self.move_paddle_right();
        }
        if self.ball_on_paddle {
            return;
        }

        self.ball_x += self.vel_x;
        self.ball_y += self.vel_y;

        let right = self.field.width as f32 - BALL_SIZE;
        if self.ball_x <= 0.0 || self.ball_x >= right {
            self.vel_x = -self.vel_x;
            self.ball_x = self.ball_x.clamp(0.0, right);
        }
        if self.ball_y <= 0.0 {
            self.vel_y = -self.vel_y;
            self.ball_y = 0.0;
        }

        if self.ball_y >= self.field.height as f32 {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.play.finish("GAME OVER!");
                tracing::info!(score = self.score, "breakout out of lives");
            } else {
                self.reset_ball();
            }
            return;
        }

        let ball = self.ball();
        if self.vel_y > 0.0 && ball.overlaps(&self.paddle()) {
            let hit = (self.ball_x + BALL_SIZE / 2.0) - (self.paddle_x + PADDLE_WIDTH / 2.0);
            self.vel_y = -self.vel_y.abs();
            self.vel_x = (self.vel_x + hit / (PADDLE_WIDTH / 2.0) * 2.0)
                .clamp(-MAX_SPEED_X, MAX_SPEED_X);
            self.ball_y = self.paddle_y() - BALL_SIZE;
        }

        if let Some(brick) = self
            .bricks
            .iter_mut()
            .find(|brick| brick.alive && brick.rect.overlaps(&ball))
        {
            brick.alive = false;
            self.score += BRICK_POINTS;
            self.vel_y = -self.vel_y;
        }

        if self.bricks_left() == 0 {
            self.play.finish("YOU WIN!");
            tracing::info!(score = self.score, "breakout cleared");
        }
    }

    fn steer(&mut self, steer: Steer) {
        match steer {
            Steer::Back => self.move_paddle_left(),
            Steer::Forward => self.move_paddle_right(),
        }
    }

    fn primary_action(&mut self) -> bool {
        self.launch_ball()
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn hud(&self) -> String {
        let mut hud = format!("Score: {}  Lives: {}", self.score, self.lives);
        if self.ball_on_paddle && self.play.running() {
            hud.push_str("  (SELECT launches)");
        }
        hud
    }

    fn playfield(&self) -> Viewport {
        self.field
    }

    fn sprites(&self) -> Vec<Sprite> {
        let mut sprites: Vec<Sprite> = self
            .bricks
            .iter()
            .filter(|brick| brick.alive)
            .map(|brick| brick.rect)
            .collect();
        sprites.push(self.paddle());
        sprites.push(self.ball());
        sprites
    }
}

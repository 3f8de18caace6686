use super::{Game, GameKind, GameRng, PlayState, Sprite, SpriteKind, Steer, Viewport};
use crate::input::HeldDirections;
use std::collections::VecDeque;

pub(super) const CELL: u32 = 16;
const TICKS_PER_STEP: u32 = 8;
const FOOD_POINTS: u32 = 10;
/// The board counts as won this many cells short of full.
const WIN_SLACK: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    fn counter_clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    fn clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }
}

type Cell = (i32, i32);

#[derive(Debug, Clone)]
pub struct Snake {
    field: Viewport,
    play: PlayState,
    rng: GameRng,
    columns: i32,
    rows: i32,
    body: VecDeque<Cell>,
    heading: Heading,
    next_heading: Heading,
    food: Cell,
    ticks: u32,
    score: u32,
}

impl Snake {
    pub fn new(field: Viewport, rng: GameRng) -> Self {
        let columns = (field.width / CELL) as i32;
        let rows = (field.height / CELL) as i32;
        let mut body = VecDeque::new();
        body.push_back((columns / 2, rows / 2));
        let mut game = Self {
            field,
            play: PlayState::default(),
            rng,
            columns,
            rows,
            body,
            heading: Heading::Right,
            next_heading: Heading::Right,
            food: (0, 0),
            ticks: 0,
            score: 0,
        };
        game.food = game.spawn_food();
        game
    }

    fn spawn_food(&mut self) -> Cell {
        let free: Vec<Cell> = (0..self.rows)
            .flat_map(|y| (0..self.columns).map(move |x| (x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        if free.is_empty() {
            return self.body.front().copied().unwrap_or((0, 0));
        }
        free[self.rng.below(free.len() as u32) as usize]
    }

    pub fn turn_left(&mut self) {
        if self.play.running() {
            self.next_heading = self.heading.counter_clockwise();
        }
    }

    pub fn turn_right(&mut self) {
        if self.play.running() {
            self.next_heading = self.heading.clockwise();
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    fn step(&mut self) {
        if self.next_heading != self.heading.opposite() {
            self.heading = self.next_heading;
        }
        let Some((x, y)) = self.head() else {
            return;
        };
        let (dx, dy) = self.heading.delta();
        let head = (x + dx, y + dy);

        if head.0 < 0 || head.0 >= self.columns || head.1 < 0 || head.1 >= self.rows {
            self.play.finish("GAME OVER! Hit Wall");
            tracing::info!(score = self.score, "snake hit wall");
            return;
        }
        if self.body.contains(&head) {
            self.play.finish("GAME OVER! Hit Self");
            tracing::info!(score = self.score, "snake hit itself");
            return;
        }

        self.body.push_front(head);
        if head == self.food {
            self.score += FOOD_POINTS;
            let cells = (self.columns * self.rows) as usize;
            if self.body.len() >= cells.saturating_sub(WIN_SLACK) {
                self.play.finish("YOU WIN! Perfect Snake!");
                return;
            }
            self.food = self.spawn_food();
        } else {
            self.body.pop_back();
        }
    }
}

impl Game for Snake {
    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn play(&self) -> &PlayState {
        &self.play
    }

    fn play_mut(&mut self) -> &mut PlayState {
        &mut self.play
    }

    fn update(&mut self, _held: HeldDirections) {
        if !self.play.running() {
            return;
        }
        self.ticks += 1;
        if self.ticks < TICKS_PER_STEP {
            return;
        }
        self.ticks = 0;
        self.step();
    }

    fn steer(&mut self, steer: Steer) {
        match steer {
            Steer::Back => self.turn_left(),
            Steer::Forward => self.turn_right(),
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn hud(&self) -> String {
        format!("Score: {}  Length: {}", self.score, self.body.len())
    }

    fn playfield(&self) -> Viewport {
        self.field
    }

    fn sprites(&self) -> Vec<Sprite> {
        let size = (CELL - 1) as f32;
        let at = |(x, y): Cell, kind| {
            Sprite::new(
                (x as u32 * CELL) as f32,
                (y as u32 * CELL) as f32,
                size,
                size,
                kind,
            )
        };
        let mut sprites = vec![at(self.food, SpriteKind::Food)];
        for (index, cell) in self.body.iter().enumerate() {
            let kind = if index == 0 {
                SpriteKind::SnakeHead
            } else {
                SpriteKind::SnakeBody
            };
            sprites.push(at(*cell, kind));
        }
        sprites
    }
}

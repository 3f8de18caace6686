use super::{Game, GameKind, GameRng, PlayState, Sprite, SpriteKind, Steer, Viewport};
use crate::input::HeldDirections;

pub const COLUMNS: usize = 10;
const VISIBLE_ROWS: usize = 20;
const ROWS: usize = VISIBLE_ROWS + 4;
const INITIAL_FALL_TICKS: u32 = 45;
const LEVEL_SPEEDUP: u32 = 4;
const MIN_FALL_TICKS: u32 = 4;
const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

type Cells = [(i32, i32); 4];

/// (row, col) offsets for I, O, T, S, Z, J, L.
const SHAPES: [Cells; 7] = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (0, 1), (1, 0), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 2), (1, 0), (1, 1), (1, 2)],
];

fn normalize(mut cells: Cells) -> Cells {
    let min_row = cells.iter().map(|(r, _)| *r).min().unwrap_or(0);
    let min_col = cells.iter().map(|(_, c)| *c).min().unwrap_or(0);
    for cell in &mut cells {
        cell.0 -= min_row;
        cell.1 -= min_col;
    }
    cells
}

fn rotate_clockwise(cells: Cells) -> Cells {
    normalize(cells.map(|(r, c)| (c, -r)))
}

#[derive(Debug, Clone)]
pub struct Tetris {
    field: Viewport,
    play: PlayState,
    rng: GameRng,
    board: [[Option<u8>; COLUMNS]; ROWS],
    piece: Cells,
    shape: u8,
    next_shape: u8,
    row: i32,
    col: i32,
    fall_ticks: u32,
    fall_delay: u32,
    score: u32,
    lines: u32,
    level: u32,
}

impl Tetris {
    pub fn new(field: Viewport, mut rng: GameRng) -> Self {
        let next_shape = rng.below(SHAPES.len() as u32) as u8;
        let mut game = Self {
            field,
            play: PlayState::default(),
            rng,
            board: [[None; COLUMNS]; ROWS],
            piece: SHAPES[0],
            shape: 0,
            next_shape,
            row: 0,
            col: 0,
            fall_ticks: 0,
            fall_delay: INITIAL_FALL_TICKS,
            score: 0,
            lines: 0,
            level: 1,
        };
        game.spawn_piece();
        game
    }

    fn spawn_piece(&mut self) {
        self.shape = self.next_shape;
        self.piece = SHAPES[usize::from(self.shape)];
        self.next_shape = self.rng.below(SHAPES.len() as u32) as u8;
        self.row = 0;
        let width = self.piece.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        self.col = (COLUMNS as i32 - width) / 2;
        if self.collides(&self.piece, self.row, self.col) {
            self.play.finish("GAME OVER");
            tracing::info!(score = self.score, lines = self.lines, "tetris blocked at spawn");
        }
    }

    fn collides(&self, piece: &Cells, row: i32, col: i32) -> bool {
        piece.iter().any(|(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            if c < 0 || c >= COLUMNS as i32 || r >= ROWS as i32 {
                return true;
            }
            r >= 0 && self.board[r as usize][c as usize].is_some()
        })
    }

    fn lock_piece(&mut self) {
        for (dr, dc) in self.piece {
            let (r, c) = (self.row + dr, self.col + dc);
            if (0..ROWS as i32).contains(&r) && (0..COLUMNS as i32).contains(&c) {
                self.board[r as usize][c as usize] = Some(self.shape);
            }
        }
        self.clear_lines();
        self.spawn_piece();
    }

    fn clear_lines(&mut self) {
        let kept: Vec<[Option<u8>; COLUMNS]> = self
            .board
            .iter()
            .filter(|row| row.iter().any(Option::is_none))
            .copied()
            .collect();
        let cleared = ROWS - kept.len();
        if cleared == 0 {
            return;
        }
        let mut board = [[None; COLUMNS]; ROWS];
        board[cleared..].copy_from_slice(&kept);
        self.board = board;

        self.lines += cleared as u32;
        self.score += LINE_POINTS[cleared.min(4)] * self.level;
        self.level = 1 + self.lines / 10;
        self.fall_delay = INITIAL_FALL_TICKS
            .saturating_sub((self.level - 1) * LEVEL_SPEEDUP)
            .max(MIN_FALL_TICKS);
    }

    fn shift(&mut self, delta: i32) {
        if self.play.running() && !self.collides(&self.piece, self.row, self.col + delta) {
            self.col += delta;
        }
    }

    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    pub fn move_right(&mut self) {
        self.shift(1);
    }

    pub fn rotate_cw(&mut self) {
        if !self.play.running() {
            return;
        }
        let rotated = rotate_clockwise(self.piece);
        if !self.collides(&rotated, self.row, self.col) {
            self.piece = rotated;
        }
    }

    /// Lowers the piece one row, locking it when it cannot move.
    pub fn soft_drop(&mut self) {
        if !self.play.running() {
            return;
        }
        if self.collides(&self.piece, self.row + 1, self.col) {
            self.lock_piece();
        } else {
            self.row += 1;
        }
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn piece_column(&self) -> i32 {
        self.col
    }

    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[cfg(test)]
    pub(crate) fn fill_row_except(&mut self, row: usize, gap: usize) {
        for col in 0..COLUMNS {
            self.board[row][col] = (col != gap).then_some(0);
        }
    }

    fn cell_size(&self) -> f32 {
        let by_width = self.field.width as f32 / COLUMNS as f32;
        let by_height = self.field.height as f32 / ROWS as f32;
        by_width.min(by_height).floor().max(1.0)
    }
}

impl Game for Tetris {
    fn kind(&self) -> GameKind {
        GameKind::Tetris
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
        self.fall_ticks += 1;
        if self.fall_ticks >= self.fall_delay {
            self.fall_ticks = 0;
            self.soft_drop();
        }
    }

    fn steer(&mut self, steer: Steer) {
        match steer {
            Steer::Back => self.move_left(),
            Steer::Forward => self.move_right(),
        }
    }

    fn primary_action(&mut self) -> bool {
        self.rotate_cw();
        true
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn hud(&self) -> String {
        format!(
            "Score: {}  Lvl: {}  Lines: {}",
            self.score, self.level, self.lines
        )
    }

    fn playfield(&self) -> Viewport {
        self.field
    }

    fn sprites(&self) -> Vec<Sprite> {
        let size = self.cell_size();
        let left = (self.field.width as f32 - size * COLUMNS as f32) / 2.0;
        let block = |row: i32, col: i32, shape: u8| {
            Sprite::new(
                left + col as f32 * size,
                row as f32 * size,
                size - 1.0,
                size - 1.0,
                SpriteKind::Block(shape),
            )
        };
        let mut sprites = vec![
            Sprite::new(left - 1.0, 0.0, 1.0, size * ROWS as f32, SpriteKind::Wall),
            Sprite::new(
                left + size * COLUMNS as f32,
                0.0,
                1.0,
                size * ROWS as f32,
                SpriteKind::Wall,
            ),
        ];
        for (r, row) in self.board.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(shape) = cell {
                    sprites.push(block(r as i32, c as i32, *shape));
                }
            }
        }
        for (dr, dc) in self.piece {
            if self.row + dr >= 0 {
                sprites.push(block(self.row + dr, self.col + dc, self.shape));
            }
        }
        sprites
    }
}

use super::*;
use crate::input::HeldDirections;

const FIELD: Viewport = Viewport::new(320, 240);
const IDLE: HeldDirections = HeldDirections {
    prev: false,
    next: false,
};

#[test]
fn kinds_map_to_their_active_states() {
    for kind in GameKind::ALL {
        assert_eq!(kind.active_state().game(), Some(kind));
        assert!(FIELD.fits(kind.min_viewport()), "{kind}");
    }
}

#[test]
fn pause_menu_wraps_and_resumes() {
    let mut game = create(GameKind::Snake, FIELD, 7);
    assert!(!game.paused());
    game.navigate_pause_menu_down();
    assert_eq!(game.pause_menu_index(), 0, "menu only moves while paused");

    game.toggle_pause();
    assert!(game.paused());
    game.navigate_pause_menu_down();
    assert_eq!(game.pause_menu_index(), 1);
    game.navigate_pause_menu_down();
    assert_eq!(game.pause_menu_index(), 0);
    game.navigate_pause_menu_up();
    assert_eq!(game.pause_menu_index(), 1);
    assert_eq!(game.select_pause_menu_option(), Some(GameResult::QuitToMenu));
    assert!(game.paused(), "quit leaves teardown to the caller");

    game.navigate_pause_menu_up();
    assert_eq!(game.select_pause_menu_option(), Some(GameResult::ResumeGame));
    assert!(!game.paused());
    assert_eq!(game.select_pause_menu_option(), None);
}

#[test]
fn pausing_resets_pause_menu_selection() {
    let mut game = create(GameKind::Pong, FIELD, 1);
    game.toggle_pause();
    game.navigate_pause_menu_down();
    game.toggle_pause();
    game.toggle_pause();
    assert_eq!(game.pause_menu_index(), 0);
}

#[test]
fn pong_paddle_follows_held_direction_and_clamps() {
    let mut pong = Pong::new(FIELD, GameRng::new(3));
    let start = pong.paddle_y();
    pong.place_ball(160.0, 100.0, 1.0, 0.0);
    pong.update(HeldDirections {
        prev: true,
        next: false,
    });
    assert!(pong.paddle_y() < start);

    for _ in 0..200 {
        pong.move_paddle_up();
    }
    assert_eq!(pong.paddle_y(), 0.0);
    for _ in 0..200 {
        pong.move_paddle_down();
    }
    assert_eq!(pong.paddle_y(), 200.0);
}

#[test]
fn pong_paddle_ignores_input_while_paused() {
    let mut pong = Pong::new(FIELD, GameRng::new(3));
    let start = pong.paddle_y();
    pong.toggle_pause();
    pong.steer(Steer::Back);
    assert_eq!(pong.paddle_y(), start);
}

#[test]
fn pong_missed_ball_ends_game() {
    let mut pong = Pong::new(FIELD, GameRng::new(5));
    for _ in 0..200 {
        pong.move_paddle_down();
    }
    pong.place_ball(2.0, 10.0, -3.0, 0.0);
    pong.update(IDLE);
    assert!(pong.game_over());
    assert_eq!(pong.banner(), Some("GAME OVER"));
}

#[test]
fn pong_paddle_bounces_ball_faster() {
    let mut pong = Pong::new(FIELD, GameRng::new(5));
    let paddle_mid = pong.paddle_y() + 20.0;
    pong.place_ball(7.0, paddle_mid, -3.0, 0.0);
    pong.update(IDLE);
    let (vel_x, _) = pong.ball_velocity();
    assert!(!pong.game_over());
    assert!(vel_x > 3.0);
}

#[test]
fn pong_scoring_to_limit_wins() {
    let mut pong = Pong::new(FIELD, GameRng::new(9));
    for expected in 1..=pong::SCORE_LIMIT {
        pong.place_ball(314.0, 100.0, 3.0, 0.0);
        pong.update(IDLE);
        assert_eq!(pong.score(), expected);
    }
    assert!(pong.game_over());
    assert_eq!(pong.banner(), Some("YOU WIN!"));
}

#[test]
fn breakout_select_launches_only_from_paddle() {
    let mut game = Breakout::new(FIELD, GameRng::new(11));
    assert!(game.ball_on_paddle());
    assert!(game.primary_action());
    assert!(!game.ball_on_paddle());
    assert!(!game.primary_action());
}

#[test]
fn breakout_losing_all_lives_ends_game() {
    let mut game = Breakout::new(FIELD, GameRng::new(11));
    for lives_left in (0..3).rev() {
        game.drop_ball_below_field();
        game.update(IDLE);
        assert_eq!(game.lives(), lives_left);
    }
    assert!(game.game_over());
    assert!(!game.primary_action());
}

#[test]
fn breakout_builds_full_brick_wall() {
    let game = Breakout::new(FIELD, GameRng::new(1));
    assert_eq!(game.bricks_left(), 48);
    assert_eq!(game.sprites().len(), 50);
}

#[test]
fn snake_moves_every_eighth_tick() {
    let mut snake = Snake::new(FIELD, GameRng::new(2));
    snake.place_food((0, 0));
    let start = snake.head().expect("head");
    for _ in 0..7 {
        snake.update(IDLE);
    }
    assert_eq!(snake.head(), Some(start));
    snake.update(IDLE);
    assert_eq!(snake.head(), Some((start.0 + 1, start.1)));
}

#[test]
fn snake_turns_relative_to_heading() {
    let mut snake = Snake::new(FIELD, GameRng::new(2));
    snake.place_food((0, 0));
    snake.steer(Steer::Back);
    for _ in 0..8 {
        snake.update(IDLE);
    }
    assert_eq!(snake.heading(), snake::Heading::Up);
    snake.steer(Steer::Forward);
    for _ in 0..8 {
        snake.update(IDLE);
    }
    assert_eq!(snake.heading(), snake::Heading::Right);
}

#[test]
fn snake_grows_on_food_and_dies_at_wall() {
    let mut snake = Snake::new(FIELD, GameRng::new(2));
    let (x, y) = snake.head().expect("head");
    snake.place_food((x + 1, y));
    for _ in 0..8 {
        snake.update(IDLE);
    }
    assert_eq!(snake.len(), 2);
    assert_eq!(snake.score(), 10);

    for _ in 0..(8 * 20) {
        snake.update(IDLE);
    }
    assert!(snake.game_over());
    assert_eq!(snake.banner(), Some("GAME OVER! Hit Wall"));
}

#[test]
fn tetris_select_rotates_and_moves_stay_in_bounds() {
    let mut game = Tetris::new(FIELD, GameRng::new(4));
    assert!(game.primary_action());
    for _ in 0..20 {
        game.move_left();
    }
    assert_eq!(game.piece_column(), 0);
    for _ in 0..20 {
        game.move_right();
    }
    assert!(game.piece_column() > 0);
    assert!(game.piece_column() < tetris::COLUMNS as i32);
}

#[test]
fn tetris_gravity_eventually_locks_pieces() {
    let mut game = Tetris::new(FIELD, GameRng::new(4));
    for _ in 0..(45 * 30) {
        game.update(IDLE);
    }
    assert!(game.filled_cells() >= 4);
}

#[test]
fn tetris_clears_completed_line() {
    let mut game = Tetris::new(FIELD, GameRng::new(4));
    game.fill_row_except(23, 0);
    let before = game.filled_cells();
    for _ in 0..40 {
        game.move_left();
        game.soft_drop();
        if game.lines() > 0 {
            break;
        }
    }
    if game.lines() > 0 {
        assert!(game.score() >= 100);
        assert!(game.filled_cells() < before + 4);
    } else {
        assert!(game.filled_cells() > before);
    }
}

#[test]
fn create_builds_requested_kind() {
    for kind in GameKind::ALL {
        let game = create(kind, FIELD, 42);
        assert_eq!(game.kind(), kind);
        assert_eq!(game.playfield(), FIELD);
        assert!(!game.sprites().is_empty());
        assert!(game.hud().starts_with("Score"));
    }
}

#[test]
fn rng_is_reproducible() {
    let mut a = GameRng::new(99);
    let mut b = GameRng::new(99);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    assert!(GameRng::new(0).below(10) < 10);
    assert_eq!(GameRng::new(5).below(0), 0);
}

use super::panels::draw_popup;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use tricorder::games::{Sprite, SpriteKind, PAUSE_OPTIONS};
use tricorder::nav::GameView;

const BLOCK_COLORS: [Color; 7] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::LightRed,
];

fn sprite_color(kind: SpriteKind) -> Color {
    match kind {
        SpriteKind::Paddle => Color::White,
        SpriteKind::Ball => Color::LightYellow,
        SpriteKind::Brick(row) => BLOCK_COLORS[usize::from(row) % BLOCK_COLORS.len()],
        SpriteKind::SnakeHead => Color::LightGreen,
        SpriteKind::SnakeBody => Color::Green,
        SpriteKind::Food => Color::Red,
        SpriteKind::Block(shape) => BLOCK_COLORS[usize::from(shape) % BLOCK_COLORS.len()],
        SpriteKind::Wall => Color::DarkGray,
    }
}

/// Canvas space has its origin bottom-left; sprites use top-left.
fn to_canvas(sprite: &Sprite, field_height: f64) -> Rectangle {
    Rectangle {
        x: f64::from(sprite.x),
        y: field_height - f64::from(sprite.y) - f64::from(sprite.height),
        width: f64::from(sprite.width),
        height: f64::from(sprite.height),
        color: sprite_color(sprite.kind),
    }
}

pub(super) fn draw_game(frame: &mut Frame<'_>, area: Rect, view: &GameView) {
    let width = f64::from(view.playfield.width);
    let height = f64::from(view.playfield.height);
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{}  {}", view.kind, view.hud)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for sprite in &view.sprites {
                ctx.draw(&to_canvas(sprite, height));
            }
        });
    frame.render_widget(canvas, area);

    if view.game_over {
        let banner = view.banner.unwrap_or("GAME OVER");
        let lines = vec![
            Line::styled(banner, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("Score: {}", view.score)),
            Line::from("BACK: menu"),
        ];
        let popup_width = (banner.chars().count() as u16 + 6).max(16).min(area.width);
        let popup = Rect {
            x: area.x + (area.width - popup_width) / 2,
            y: area.y + area.height.saturating_sub(5) / 2,
            width: popup_width,
            height: 5.min(area.height),
        };
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(ratatui::layout::Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    } else if view.paused {
        draw_popup(frame, area, "Paused", &PAUSE_OPTIONS, view.pause_index);
    }
}

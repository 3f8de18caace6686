//! Read-only drawing of a navigation snapshot.

mod game;
mod live;
mod panels;

pub(crate) use live::SYSTEM_EXTRA_KEYS;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tricorder::catalog::Catalog;
use tricorder::input::{Action, KeyMap};
use tricorder::nav::{Screen, Snapshot};
use tricorder::sensors::SensorFrame;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const ACCENT: Color = Color::Rgb(255, 153, 0);
const PROGRESS_CELLS: usize = 12;

/// Static inputs the renderer needs beside the snapshot.
pub(crate) struct RenderContext<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) keymap: &'a KeyMap,
}

pub(crate) fn draw(
    frame: &mut Frame<'_>,
    snapshot: &Snapshot,
    ctx: &RenderContext<'_>,
    readings: &SensorFrame,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], snapshot);
    match &snapshot.screen {
        Screen::Menu(view) => panels::draw_menu(frame, chunks[1], view),
        Screen::Live => live::draw_live(frame, chunks[1], snapshot, ctx.catalog, readings),
        Screen::Options(view) => panels::draw_options(frame, chunks[1], view),
        Screen::Schematic(view) => panels::draw_schematic(frame, chunks[1], view, ctx.catalog),
        Screen::Game(view) => game::draw_game(frame, chunks[1], view),
    }
    draw_footer(frame, chunks[2], snapshot, ctx.keymap);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let mut spans = vec![
        Span::styled(
            " TRICORDER ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", snapshot.current)),
    ];
    if snapshot.current.is_live_view() {
        if snapshot.is_frozen {
            spans.push(Span::styled(
                "  FROZEN",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        } else if snapshot.auto_cycle {
            spans.push(Span::styled(
                format!("  AUTO {}s", snapshot.auto_cycle_interval.as_secs()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, keymap: &KeyMap) {
    let hold = snapshot
        .secret_progress
        .map(|p| ("combo", p))
        .or_else(|| snapshot.long_press_progress.map(|p| ("back", p)));
    let text = match hold {
        Some((label, fraction)) => {
            format!("hold {label} {}", progress_bar(fraction, PROGRESS_CELLS))
        }
        None => key_hints(keymap),
    };
    let line = fit_width(&text, usize::from(area.width));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

pub(crate) fn key_hints(keymap: &KeyMap) -> String {
    let hints: Vec<String> = [
        Action::Prev,
        Action::Next,
        Action::Select,
        Action::Back,
        Action::Freeze,
        Action::Quit,
    ]
    .into_iter()
    .filter_map(|action| {
        keymap
            .key_for(action)
            .map(|key| format!("{key} {}", action.label().to_lowercase()))
    })
    .collect();
    format!("{}  | mouse L/R/M", hints.join("  "))
}

pub(crate) fn progress_bar(fraction: f32, cells: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * cells as f32).round() as usize).min(cells);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(cells - filled))
}

/// Truncate to `width` terminal columns, marking the cut with an ellipsis.
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

pub(crate) fn color_for_key(color_key: Option<&str>) -> Color {
    match color_key.unwrap_or_default() {
        "SIDEBAR_TEMP" => Color::Rgb(204, 102, 102),
        "SIDEBAR_HUMID" => Color::Rgb(153, 153, 255),
        "SIDEBAR_PRESS" => Color::Rgb(204, 153, 204),
        "SIDEBAR_ORIENT" => Color::Rgb(255, 204, 153),
        "SIDEBAR_ACCEL" => Color::Rgb(153, 204, 255),
        "SIDEBAR_SYSTEM" => Color::Rgb(204, 204, 102),
        "SIDEBAR_ALL" => ACCENT,
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_truncates_by_columns() {
        assert_eq!(fit_width("short", 10), "short");
        assert_eq!(fit_width("abcdefgh", 5), "abcd…");
        assert_eq!(fit_width("日本語テキスト", 5), "日本…");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(progress_bar(0.5, 4), "[##..]");
        assert_eq!(progress_bar(2.0, 4), "[####]");
        assert_eq!(progress_bar(-1.0, 4), "[....]");
    }

    #[test]
    fn key_hints_follow_bindings() {
        let hints = key_hints(&KeyMap::default());
        assert!(hints.starts_with("A prev  D next  Enter select"));
        assert!(hints.contains("Esc quit"));
    }

    #[test]
    fn unknown_color_keys_fall_back_to_gray() {
        assert_eq!(color_for_key(None), Color::Gray);
        assert_eq!(color_for_key(Some("NOPE")), Color::Gray);
        assert_eq!(color_for_key(Some("SIDEBAR_ALL")), ACCENT);
    }
}

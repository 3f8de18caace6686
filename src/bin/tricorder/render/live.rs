use super::{color_for_key, fit_width, ACCENT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use tricorder::catalog::{Catalog, SensorCategory, CLOCK_KEY};
use tricorder::nav::Snapshot;
use tricorder::sensors::{Reading, SensorFrame};
use tricorder::State;

/// Host channels polled for the system screen beyond the catalog.
pub(crate) const SYSTEM_EXTRA_KEYS: [&str; 2] = ["HOSTNAME", "UPTIME"];

const DASHBOARD_COLUMNS: usize = 3;

pub(super) fn draw_live(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    catalog: &Catalog,
    readings: &SensorFrame,
) {
    match snapshot.current {
        State::Dashboard => draw_dashboard(frame, area, snapshot, catalog, readings),
        State::SystemInfo => draw_system_info(frame, area, catalog, readings),
        _ => draw_sensor(frame, area, snapshot, catalog, readings),
    }
}

fn reading<'a>(readings: &'a SensorFrame, key: &str) -> std::borrow::Cow<'a, Reading> {
    match readings.get(key) {
        Some(found) => std::borrow::Cow::Borrowed(found),
        None => std::borrow::Cow::Owned(Reading::unavailable()),
    }
}

fn draw_dashboard(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    catalog: &Catalog,
    readings: &SensorFrame,
) {
    let keys = catalog.dashboard_keys();
    if keys.is_empty() {
        frame.render_widget(Paragraph::new("No graphable sensors"), area);
        return;
    }
    let rows = keys.len().div_ceil(DASHBOARD_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, chunk) in keys.chunks(DASHBOARD_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, DASHBOARD_COLUMNS as u32); DASHBOARD_COLUMNS])
            .split(row_areas[row]);
        for (col, key) in chunk.iter().enumerate() {
            let Some(spec) = catalog.sensor(key) else {
                continue;
            };
            let selected = snapshot.current_sensor.as_deref() == Some(key.as_str());
            let value = reading(readings, key);
            let border = if selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let width = usize::from(cells[col].width.saturating_sub(2));
            let body = vec![
                Line::from(Span::styled(
                    fit_width(&format!("{} {}", value.text, value.unit), width),
                    Style::default()
                        .fg(color_for_key(Some(&spec.color_key)))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(fit_width(&value.note, width)),
            ];
            frame.render_widget(
                Paragraph::new(body).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(fit_width(&spec.display_name, width)),
                ),
                cells[col],
            );
        }
    }
}

fn draw_sensor(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    catalog: &Catalog,
    readings: &SensorFrame,
) {
    let Some(key) = snapshot.current_sensor.as_deref() else {
        frame.render_widget(Paragraph::new("No sensor selected"), area);
        return;
    };
    let (title, color) = catalog
        .sensor(key)
        .map(|spec| (spec.display_name.clone(), color_for_key(Some(&spec.color_key))))
        .unwrap_or_else(|| (key.to_string(), Color::Gray));
    let value = reading(readings, key);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", value.text, value.unit),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(value.note.clone()),
        ]),
        parts[0],
    );
    if let (Some(number), "%") = (value.value, value.unit.as_str()) {
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio((number / 100.0).clamp(0.0, 1.0)),
            parts[1],
        );
    }
}

fn draw_system_info(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog, readings: &SensorFrame) {
    let mut rows: Vec<(String, String)> = catalog
        .sensors
        .iter()
        .filter(|spec| spec.key == CLOCK_KEY || spec.category == SensorCategory::System)
        .map(|spec| (spec.display_name.clone(), spec.key.clone()))
        .collect();
    rows.extend(
        SYSTEM_EXTRA_KEYS
            .iter()
            .map(|key| (key.to_lowercase(), (*key).to_string())),
    );

    let width = usize::from(area.width.saturating_sub(2));
    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, key)| {
            let value = reading(readings, key);
            let text = format!("{label:<10} {} {}  {}", value.text, value.unit, value.note);
            Line::from(fit_width(&text, width))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("System")),
        area,
    );
}

use super::{color_for_key, fit_width, ACCENT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tricorder::catalog::Catalog;
use tricorder::nav::{MenuView, OptionsView, SchematicView, SCHEMATIC_PAUSE_OPTIONS};

const YAW_DEGREES_PER_STEP: i32 = 15;

fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn draw_menu(frame: &mut Frame<'_>, area: Rect, view: &MenuView) {
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| {
            let color = color_for_key(item.color_key.as_deref());
            let swatch = Span::styled("▌", Style::default().fg(color));
            ListItem::new(Line::from(vec![swatch, Span::raw(fit_width(&item.name, width))]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(view.title))
        .highlight_style(highlight())
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select((!view.items.is_empty()).then_some(view.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

pub(super) fn draw_options(frame: &mut Frame<'_>, area: Rect, view: &OptionsView) {
    let block = Block::default().borders(Borders::ALL).title(view.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt_rows = if view.prompt.is_some() { 2 } else { 0 };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(prompt_rows), Constraint::Min(1)])
        .split(inner);
    if let Some(prompt) = view.prompt {
        frame.render_widget(
            Paragraph::new(prompt)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true }),
            parts[0],
        );
    }
    let items: Vec<ListItem> = view
        .options
        .iter()
        .map(|option| ListItem::new(option.as_str()))
        .collect();
    let mut state = ListState::default();
    state.select((!view.options.is_empty()).then_some(view.selected));
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(highlight())
            .highlight_symbol("> "),
        parts[1],
        &mut state,
    );
}

pub(super) fn draw_schematic(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &SchematicView,
    catalog: &Catalog,
) {
    let spec = view.model.as_deref().and_then(|model| catalog.schematic(model));
    let title = spec
        .map(|spec| spec.name.as_str())
        .or(view.model.as_deref())
        .unwrap_or("Schematic");
    let rotation = if view.auto_rotate {
        "Rotation: auto".to_string()
    } else {
        format!("Rotation: manual, yaw {}°", view.yaw_steps * YAW_DEGREES_PER_STEP)
    };
    let lines = vec![
        Line::from(spec.map(|spec| spec.description.clone()).unwrap_or_default()),
        Line::from(""),
        Line::from(Span::styled(rotation, Style::default().fg(Color::Cyan))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );

    if let Some(selected) = view.pause_menu {
        draw_popup(frame, area, "Paused", &SCHEMATIC_PAUSE_OPTIONS, selected);
    }
}

/// Small centred option list drawn over the current screen.
pub(super) fn draw_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    options: &[&str],
    selected: usize,
) {
    let width = options
        .iter()
        .map(|option| option.chars().count() as u16 + 6)
        .max()
        .unwrap_or(10)
        .max(title.chars().count() as u16 + 4)
        .min(area.width);
    let height = (options.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    let items: Vec<ListItem> = options.iter().map(|option| ListItem::new(*option)).collect();
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(
        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(highlight())
            .highlight_symbol("> "),
        popup,
        &mut state,
    );
}

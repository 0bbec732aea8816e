//! Submitted records pane

use crate::app::App;
use crate::state::Pane;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Draw the read-only list of accepted records
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let pane_focused = app.focus.pane == Pane::Submitted;
    let border_color = if pane_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let items: Vec<ListItem> = app
        .store
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
                Span::raw(record.name.clone()),
                Span::styled("  Gender: ", Style::default().fg(Color::DarkGray)),
                Span::raw(record.gender.label()),
                Span::styled("  Hobby: ", Style::default().fg(Color::DarkGray)),
                Span::raw(record.hobbies_display()),
                Span::styled("  DOB: ", Style::default().fg(Color::DarkGray)),
                Span::raw(record.date_of_birth.to_string()),
            ]))
        })
        .collect();

    let title = format!(" Submitted Data ({}) ", app.store.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if pane_focused && !app.store.is_empty() {
        state.select(Some(app.focus.submitted_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

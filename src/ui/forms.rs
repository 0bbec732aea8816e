//! Draft entry form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{DraftButton, DraftEntry, DraftField, Gender, Hobby, Pane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one draft form: four field rows, the buttons row, and the
/// surrounding border
pub const FORM_HEIGHT: u16 = 4 * 3 + BUTTON_HEIGHT + 2;

/// Draw the drafts pane: the empty-state message, or one form block
/// per draft with the focused one kept in view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.drafts.is_empty() {
        draw_empty_state(frame, area, app);
        return;
    }

    let pane_focused = app.focus.pane == Pane::Drafts;
    let visible = (area.height / FORM_HEIGHT).max(1) as usize;
    let offset = (app.focus.draft_index + 1).saturating_sub(visible);

    let mut constraints: Vec<Constraint> = app
        .drafts
        .iter()
        .skip(offset)
        .take(visible)
        .map(|_| Constraint::Length(FORM_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, (index, draft)) in app
        .drafts
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let form_focused = pane_focused && index == app.focus.draft_index;
        draw_form(frame, chunks[slot], app, draft, index, form_focused);
    }
}

/// "No draft forms" display state; derived from the collection, not a flag
fn draw_empty_state(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        "Add More (Ctrl+N)",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    if app.store.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Please enter data",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(" Entries ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .centered();
    frame.render_widget(paragraph, area);
}

fn draw_form(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    draft: &DraftEntry,
    index: usize,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" Entry {} ", index + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Hobby
            Constraint::Length(3), // Date of birth
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(inner);

    let active = |field: DraftField| focused && app.focus.field == field;

    draw_text_field(frame, chunks[0], "Name", &draft.name, active(DraftField::Name));
    draw_gender_row(frame, chunks[1], app, draft, active(DraftField::Gender));
    draw_hobby_row(frame, chunks[2], app, draft, active(DraftField::Hobby));
    draw_text_field(
        frame,
        chunks[3],
        "Date of Birth",
        &draft.date_of_birth_input,
        active(DraftField::DateOfBirth),
    );
    draw_buttons_row(frame, chunks[4], app, active(DraftField::Buttons));
}

/// Single-line text field with cursor bar
fn draw_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(content.block(block), area);
}

/// Radio-style row for the mutually exclusive gender selection
fn draw_gender_row(frame: &mut Frame, area: Rect, app: &App, draft: &DraftEntry, is_active: bool) {
    let mut spans = Vec::new();
    for (i, gender) in Gender::ALL.iter().enumerate() {
        let glyph = if draft.gender == Some(*gender) {
            "(•)"
        } else {
            "( )"
        };
        let style = option_style(is_active, is_active && i == app.focus.gender_cursor);
        spans.push(Span::styled(format!("{glyph} {}  ", gender.label()), style));
    }
    draw_option_row(frame, area, "Gender", spans, is_active);
}

/// Checkbox-style row for the hobby set
fn draw_hobby_row(frame: &mut Frame, area: Rect, app: &App, draft: &DraftEntry, is_active: bool) {
    let mut spans = Vec::new();
    for (i, hobby) in Hobby::ALL.iter().enumerate() {
        let glyph = if draft.hobbies.contains(hobby) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = option_style(is_active, is_active && i == app.focus.hobby_cursor);
        spans.push(Span::styled(format!("{glyph} {}  ", hobby.label()), style));
    }
    draw_option_row(frame, area, "Hobby", spans, is_active);
}

fn option_style(row_active: bool, under_cursor: bool) -> Style {
    if under_cursor {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if row_active {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_option_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    spans: Vec<Span>,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        DraftButton::Submit.label(),
        is_active && app.focus.button == DraftButton::Submit,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        DraftButton::Remove.label(),
        is_active && app.focus.button == DraftButton::Remove,
        Some(Color::Red),
    );
}

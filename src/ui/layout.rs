//! Top-level layout and the status bar

use crate::app::App;
use crate::notify::NotifyKind;
use crate::state::Pane;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the drafts pane, the submitted pane (when
/// records exist), and the one-line status bar
pub fn create_layout(area: Rect, has_records: bool) -> (Rect, Option<Rect>, Rect) {
    if has_records {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(62),
                Constraint::Percentage(38),
                Constraint::Length(1),
            ])
            .split(area);
        (chunks[0], Some(chunks[1]), chunks[2])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], None, chunks[1])
    }
}

/// Key hints on the left, the live toast on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus.pane {
        Pane::Drafts if app.drafts.is_empty() => "Ctrl+N: add  Ctrl+C: quit",
        Pane::Drafts => {
            "Ctrl+N: add  Tab: field  ↑/↓: entry  ←/→: option  Space: select  Enter: activate  Ctrl+C: quit"
        }
        Pane::Submitted => "↑/↓: select  d: delete  Ctrl+N: add  Ctrl+C: quit",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if let Some(toast) = app.toasts.current() {
        let toast_style = match toast.kind {
            NotifyKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            NotifyKind::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(toast.message.clone(), toast_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

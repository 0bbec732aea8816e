//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (drafts_area, submitted_area, status_area) =
        layout::create_layout(area, !app.store.is_empty());

    forms::draw(frame, drafts_area, app);
    if let Some(submitted_area) = submitted_area {
        submitted::draw(frame, submitted_area, app);
    }
    layout::draw_status_bar(frame, status_area, app);
}

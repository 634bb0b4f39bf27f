pub mod header;
pub mod help_overlay;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.palette().background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | add input | counter | list | status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + theme toggle
            Constraint::Length(1), // add input
            Constraint::Length(1), // remaining count + clear hint
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_title_bar(frame, app, chunks[0]);
    header::render_add_input(frame, app, chunks[1]);
    header::render_counter_row(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Spaces to right-align `right` after `left_width` cells in `width`
pub(super) fn padding_between(
    width: usize,
    left_width: usize,
    right_width: usize,
) -> Option<String> {
    (left_width + right_width < width).then(|| " ".repeat(width - left_width - right_width))
}

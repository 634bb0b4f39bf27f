use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::format_remaining;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::padding_between;

/// ` MY TASKS` on the left, the theme toggle on the right
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let p = app.theme.palette();
    let bg = p.background;
    let width = area.width as usize;

    let title = " MY TASKS";
    let toggle = format!("{} t ", app.theme.toggle_icon());

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(p.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(pad) = padding_between(
        width,
        unicode::display_width(title),
        unicode::display_width(&toggle),
    ) {
        spans.push(Span::styled(pad, Style::default().bg(bg)));
        spans.push(Span::styled(toggle, Style::default().fg(p.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// The add-task line. Shows the editor while adding, a hint otherwise.
pub fn render_add_input(frame: &mut Frame, app: &App, area: Rect) {
    let p = app.theme.palette();
    let bg = p.surface;
    let prefix = " + ";
    let prefix_width = unicode::display_width(prefix);

    let line = if app.mode == Mode::Add {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(p.accent).bg(bg)),
            Span::styled(app.edit_buffer.clone(), Style::default().fg(p.text).bg(bg)),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(p.dim).bg(bg)),
            Span::styled("Add a task (a)", Style::default().fg(p.dim).bg(bg)),
        ])
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);

    if app.mode == Mode::Add && area.height > 0 {
        let col = prefix_width
            + unicode::byte_offset_to_display_col(&app.edit_buffer, app.edit_cursor);
        let x = area.x + (col as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

/// `N tasks left` with the clear-all hint on the right
pub fn render_counter_row(frame: &mut Frame, app: &App, area: Rect) {
    let p = app.theme.palette();
    let bg = p.surface;
    let width = area.width as usize;

    let left = format!(" {}", format_remaining(app.store.remaining_count()));
    let right = "Clear all tasks (C) ";

    let mut spans = vec![Span::styled(left.clone(), Style::default().fg(p.dim).bg(bg))];
    if let Some(pad) = padding_between(
        width,
        unicode::display_width(&left),
        unicode::display_width(right),
    ) {
        spans.push(Span::styled(pad, Style::default().bg(bg)));
        spans.push(Span::styled(right, Style::default().fg(p.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

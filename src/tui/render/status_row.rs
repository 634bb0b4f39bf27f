use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for the current mode
fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => {
            "a add  e edit  \u{2423} toggle  d delete  m move  t theme  ? help  q quit"
        }
        Mode::Add | Mode::Edit => "Enter save  Esc cancel",
        Mode::Move => "j/k move  Enter drop  Esc cancel",
        Mode::ConfirmClear => "y confirm  any key cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let p = app.theme.palette();
    let bg = p.background;

    let line = if app.mode == Mode::ConfirmClear {
        Line::from(vec![
            Span::styled(
                format!(" Clear all {} tasks? ", app.store.len()),
                Style::default()
                    .fg(p.error)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("y/n", Style::default().fg(p.dim).bg(bg)),
        ])
    } else if let Some(status) = &app.status {
        let fg = if status.is_error { p.error } else { p.text };
        Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(fg).bg(bg),
        ))
    } else if app.show_key_hints || app.mode != Mode::Navigate {
        Line::from(Span::styled(
            format!(" {}", hints(app.mode)),
            Style::default().fg(p.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

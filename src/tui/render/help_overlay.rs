use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("\u{2191}\u{2193}/jk", "Move cursor up/down"),
            ("g/G", "Jump to top/bottom"),
        ],
    ),
    (
        "Tasks",
        &[
            ("a", "Add a task"),
            ("e/Enter", "Edit title"),
            ("Space/x", "Toggle completed"),
            ("d", "Delete task"),
            ("m", "Move task (j/k, Enter to drop)"),
            ("C", "Clear all tasks"),
        ],
    ),
    (
        "Other",
        &[
            ("t", "Toggle theme"),
            ("?", "Close this help"),
            ("q/Esc", "Quit"),
        ],
    ),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let p = app.theme.palette();
    let bg = p.surface;
    let key_style = Style::default()
        .fg(p.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(p.text).bg(bg);
    let header_style = Style::default()
        .fg(p.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(format!(" {}", section), header_style)));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<10}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

/// A rect of `percent_x` x `percent_y` centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Drag handle drawn before every task
const GRIP: &str = "\u{22EE}\u{22EE}";

/// Cells before the title: ` ⋮⋮ [ ] `
const PREFIX_WIDTH: usize = 8;

/// Render the task list in display order, keeping the cursor row visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let p = app.theme.palette().clone();
    let bg = p.surface;
    let height = area.height as usize;
    let width = area.width as usize;

    if app.store.is_empty() {
        let placeholder = Line::from(Span::styled(
            " Empty task list",
            Style::default().fg(p.dim).bg(bg),
        ));
        frame.render_widget(
            Paragraph::new(placeholder).style(Style::default().bg(bg)),
            area,
        );
        return;
    }
    if height == 0 {
        return;
    }

    // Adjust scroll so the cursor stays on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let order = app.display_order();
    let tasks = app.store.tasks();
    let held = app.move_state.map(|mv| mv.to);
    let editing = (app.mode == Mode::Edit).then_some(app.edit_target).flatten();

    let mut lines: Vec<Line> = Vec::new();
    let mut edit_row = None;
    for (row, &index) in order
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let task = &tasks[index];
        let is_cursor = row == app.cursor;
        let is_held = app.mode == Mode::Move && held == Some(row);
        let is_editing = editing == Some(task.id);
        if is_editing {
            edit_row = Some(row - app.scroll_offset);
        }

        let row_bg = if is_cursor { p.selection_bg } else { bg };
        let title = if is_editing {
            app.edit_buffer.as_str()
        } else {
            task.title.as_str()
        };
        lines.push(task_line(task, title, width, row_bg, is_held, is_editing, &p));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if let Some(row) = edit_row {
        let col = PREFIX_WIDTH
            + unicode::byte_offset_to_display_col(&app.edit_buffer, app.edit_cursor);
        let x = area.x + (col as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y + row as u16));
    }
}

fn task_line<'a>(
    task: &Task,
    title: &str,
    width: usize,
    row_bg: ratatui::style::Color,
    is_held: bool,
    is_editing: bool,
    p: &crate::tui::theme::Palette,
) -> Line<'a> {
    let grip_style = if is_held {
        Style::default()
            .fg(p.accent)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.dim).bg(row_bg)
    };
    let check_style = Style::default()
        .fg(if task.completed { p.done } else { p.accent })
        .bg(row_bg);
    let mut title_style = Style::default().fg(p.text).bg(row_bg);
    if task.completed && !is_editing {
        title_style = title_style.fg(p.done).add_modifier(Modifier::CROSSED_OUT);
    }
    if is_held {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let title = if is_editing {
        title.to_string()
    } else {
        unicode::truncate_to_width(title, width.saturating_sub(PREFIX_WIDTH))
    };
    let used = PREFIX_WIDTH + unicode::display_width(&title);

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(row_bg)),
        Span::styled(GRIP, grip_style),
        Span::styled(" ", Style::default().bg(row_bg)),
        Span::styled(task.checkbox(), check_style),
        Span::styled(" ", Style::default().bg(row_bg)),
        Span::styled(title, title_style),
    ];
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(row_bg),
        ));
    }
    Line::from(spans)
}

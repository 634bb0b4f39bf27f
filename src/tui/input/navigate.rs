use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, MoveState};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything but its close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,

        // Cursor
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Task actions
        (_, KeyCode::Char('a')) => begin_add(app),
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => begin_edit(app),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => toggle_cursor_task(app),
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => delete_cursor_task(app),
        (_, KeyCode::Char('m')) => begin_move(app),
        (_, KeyCode::Char('C')) => {
            if !app.store.is_empty() {
                app.mode = Mode::ConfirmClear;
            }
        }

        (_, KeyCode::Char('t')) => app.theme.toggle(),
        (_, KeyCode::Char('?')) => app.show_help = true,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.store.len();
    if len == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}

fn begin_add(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = None;
    app.mode = Mode::Add;
}

fn begin_edit(app: &mut App) {
    let Some(task) = app.cursor_task() else {
        return;
    };
    let (id, title) = (task.id, task.title.clone());
    app.edit_cursor = title.len();
    app.edit_buffer = title;
    app.edit_target = Some(id);
    app.mode = Mode::Edit;
}

fn toggle_cursor_task(app: &mut App) {
    if let Some(id) = app.cursor_task().map(|t| t.id) {
        let result = app.store.toggle_completed(id);
        app.report(result);
    }
}

fn delete_cursor_task(app: &mut App) {
    if let Some(id) = app.cursor_task().map(|t| t.id) {
        let result = app.store.delete(id);
        app.report(result);
        app.clamp_cursor();
    }
}

fn begin_move(app: &mut App) {
    if app.cursor < app.store.len() {
        app.move_state = Some(MoveState {
            from: app.cursor,
            to: app.cursor,
        });
        app.mode = Mode::Move;
    }
}

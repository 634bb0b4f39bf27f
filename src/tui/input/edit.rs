use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::clean_title;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Single-line editor shared by Add and Edit modes
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => finish(app),
        (_, KeyCode::Enter) => commit(app),

        // Cursor movement
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        (_, KeyCode::Home) => app.edit_cursor = 0,
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.edit_cursor = 0,
        (_, KeyCode::End) => app.edit_cursor = app.edit_buffer.len(),
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = app.edit_buffer.len();
        }

        // Deletion
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.replace_range(..app.edit_cursor, "");
            app.edit_cursor = 0;
        }

        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Save the buffer: append a task in Add mode, rename in Edit mode.
/// Blank input is ignored and the editor stays open.
fn commit(app: &mut App) {
    let Some(title) = clean_title(&app.edit_buffer) else {
        app.notify("title cannot be empty");
        return;
    };

    match (app.mode, app.edit_target) {
        (Mode::Add, _) => {
            let result = app.store.add(title);
            if let Some(id) = app.report(result) {
                app.select_task(id);
            }
        }
        (Mode::Edit, Some(id)) => {
            let result = app.store.edit(id, &title);
            app.report(result);
        }
        _ => {}
    }
    finish(app);
}

fn finish(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = None;
    app.mode = Mode::Navigate;
}

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// `y` clears every task; anything else backs out
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    app.mode = Mode::Navigate;
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        let count = app.store.len();
        let result = app.store.clear();
        if app.report(result).is_some() {
            app.notify(format!("cleared {} task(s)", count));
        }
        app.clamp_cursor();
        app.scroll_offset = 0;
    }
}

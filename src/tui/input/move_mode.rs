use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Move mode: the held task travels through the preview order and is
/// written to the store once, on drop.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    let Some(mut mv) = app.move_state else {
        app.mode = Mode::Navigate;
        return;
    };
    let last = app.store.len().saturating_sub(1);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => mv.to = (mv.to + 1).min(last),
        KeyCode::Char('k') | KeyCode::Up => mv.to = mv.to.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => mv.to = 0,
        KeyCode::Char('G') | KeyCode::End => mv.to = last,
        KeyCode::Enter | KeyCode::Char('m') => {
            drop_task(app, mv.from, mv.to);
            return;
        }
        KeyCode::Esc => {
            app.cursor = mv.from;
            app.move_state = None;
            app.mode = Mode::Navigate;
            return;
        }
        _ => return,
    }

    app.move_state = Some(mv);
    app.cursor = mv.to;
}

fn drop_task(app: &mut App, from: usize, to: usize) {
    app.move_state = None;
    app.mode = Mode::Navigate;
    if from == to {
        app.cursor = from;
        return;
    }
    let result = app.store.reorder(from, to);
    app.report(result);
    app.cursor = to;
    app.clamp_cursor();
}

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::{KeyValueStore, MemoryStore};
use crate::model::config::Config;
use crate::ops::task_store::TaskStore;
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}

/// An App over an in-memory store holding `(title, completed)` tasks in order.
pub fn app_with_tasks(tasks: &[(&str, bool)]) -> App {
    let storage: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let mut store = TaskStore::load(storage, "tasks");
    for (title, completed) in tasks {
        let id = store.add(*title).unwrap();
        if *completed {
            store.toggle_completed(id).unwrap();
        }
    }
    App::new(store, &Config::default())
}

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::storage::{FileStore, KeyValueStore, StorageError};
use crate::io::{config_io, data_dir};
use crate::model::config::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::task_store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task title
    Add,
    /// Editing the title of `App::edit_target`
    Edit,
    /// Holding a task to drop it somewhere else
    Move,
    /// Waiting for y/n before clearing the list
    ConfirmClear,
}

/// A task picked up in move mode. Indices are sequence positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveState {
    pub from: usize,
    pub to: usize,
}

/// One-line message in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub store: TaskStore<Box<dyn KeyValueStore>>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    /// Cursor index into the display order
    pub cursor: usize,
    /// First visible list row
    pub scroll_offset: usize,
    /// Single-line editor used by Add and Edit modes
    pub edit_buffer: String,
    /// Byte offset of the editor cursor
    pub edit_cursor: usize,
    pub edit_target: Option<TaskId>,
    pub move_state: Option<MoveState>,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: TaskStore<Box<dyn KeyValueStore>>, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            move_state: None,
            status: None,
        }
    }

    /// Sequence indices in the order they are drawn.
    ///
    /// Outside move mode this is the sequence order. In move mode the held
    /// task is shown at its pending drop position; the store itself is not
    /// touched until the drop.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.store.len()).collect();
        if let Some(mv) = self.move_state
            && mv.from < order.len()
        {
            let held = order.remove(mv.from);
            order.insert(mv.to.min(order.len()), held);
        }
        order
    }

    /// Task under the cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        let order = self.display_order();
        let index = *order.get(self.cursor)?;
        self.store.tasks().get(index)
    }

    /// Keep the cursor on a real row after the list shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Put the cursor on the task with `id`, if it still exists
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(pos) = self.store.position(id) {
            self.cursor = pos;
        }
    }

    /// Surface a storage failure in the status row. Returns the success value.
    pub fn report<T>(&mut self, result: Result<T, StorageError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(error = %e, "write failed");
                self.status = Some(StatusMessage {
                    text: format!("not saved: {}", e),
                    is_error: true,
                });
                None
            }
        }
    }

    /// Transient informational message
    pub fn notify(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }
}

/// Run the TUI application
pub fn run(data_dir_flag: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = data_dir::resolve(data_dir_flag);
    crate::logging::init_file(&data_dir)?;
    let config = config_io::read_config(&data_dir)?;

    let storage: Box<dyn KeyValueStore> = Box::new(FileStore::new(&data_dir));
    let store = TaskStore::load(storage, config.storage.key.clone());
    tracing::info!(data_dir = %data_dir.display(), tasks = store.len(), "starting tui");

    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

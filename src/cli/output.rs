use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub position: usize,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct CountJson {
    pub remaining: usize,
    pub completed: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct AddedJson {
    pub id: u64,
}

/// `position` is 1-based
pub fn task_to_json(position: usize, task: &Task) -> TaskJson {
    TaskJson {
        position,
        id: task.id.0,
        title: task.title.clone(),
        completed: task.completed,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// `  2. [x] 1712345678901  Buy milk`
pub fn format_task_line(position: usize, task: &Task, position_width: usize) -> String {
    format!(
        "{:>width$}. {} {}  {}",
        position,
        task.checkbox(),
        task.id,
        task.title,
        width = position_width
    )
}

/// Numbered list of `(position, task)` pairs
pub fn format_task_list(tasks: &[(usize, &Task)]) -> Vec<String> {
    let width = tasks
        .iter()
        .map(|(pos, _)| pos.to_string().len())
        .max()
        .unwrap_or(1);
    tasks
        .iter()
        .map(|(pos, task)| format_task_line(*pos, task, width))
        .collect()
}

/// Footer under the list, singular for one
pub fn format_remaining(remaining: usize) -> String {
    if remaining == 1 {
        "1 task left".to_string()
    } else {
        format!("{} tasks left", remaining)
    }
}

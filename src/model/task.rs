use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity key for a task. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// A single to-do item.
///
/// Serialized as `{"id": <number>, "title": <string>, "completed": <bool>}`.
/// Unknown fields are ignored on read and a missing `completed` reads as false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Copy of this task with a different title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Copy of this task with `completed` flipped
    pub fn toggled(&self) -> Self {
        Task {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// The checkbox shown in lists
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Trim a user-entered title; None when nothing is left.
///
/// The store accepts any title, so input surfaces call this first.
pub fn clean_title(input: &str) -> Option<String> {
    let title = input.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

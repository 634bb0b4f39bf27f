use std::path::Path;

use tracing::{debug, warn};

use crate::io::storage::{FileStore, KeyValueStore, StorageError};
use crate::model::config::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::ids::IdGenerator;

/// The ordered task sequence, mirrored to a key-value store.
///
/// Every mutating method updates memory first, then writes the whole
/// sequence under `key`. A failed write is returned but the in-memory change
/// stays. Lookups by an unknown id are no-ops and return `Ok(false)`.
pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load the sequence stored under `key`. Anything missing or unreadable
    /// starts the store empty.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
                Ok(Some(tasks)) => tasks,
                Ok(None) => Vec::new(),
                Err(e) => {
                    warn!(key = %key, error = %e, "stored tasks unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "could not read stored tasks, starting empty");
                Vec::new()
            }
        };
        debug!(key = %key, count = tasks.len(), "loaded tasks");
        let ids = IdGenerator::seeded(tasks.iter().map(|t| &t.id));
        TaskStore {
            storage,
            key,
            tasks,
            ids,
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new task and return its id. The title is taken as-is.
    pub fn add(&mut self, title: impl Into<String>) -> Result<TaskId, StorageError> {
        let id = match self.ids.next_id() {
            Some(id) => id,
            None => {
                let id = self.smallest_unused_id();
                warn!(%id, "id space exhausted, reusing a free id");
                id
            }
        };
        self.tasks.push(Task::new(id, title));
        self.save()?;
        Ok(id)
    }

    /// Replace the title of the task with `id`
    pub fn edit(&mut self, id: TaskId, title: &str) -> Result<bool, StorageError> {
        let mut found = false;
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            *task = task.with_title(title);
            found = true;
        }
        self.save()?;
        Ok(found)
    }

    /// Remove the task with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: TaskId) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        self.save()?;
        Ok(removed)
    }

    /// Flip the completed flag of the task with `id`
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, StorageError> {
        let mut found = false;
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            *task = task.toggled();
            found = true;
        }
        self.save()?;
        Ok(found)
    }

    /// Remove every task
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.tasks.clear();
        self.save()
    }

    /// Move the task at `from` to `to`, shifting the tasks in between.
    ///
    /// `from` out of range leaves the sequence alone and skips the write.
    /// `to` past the end is clamped to the last position.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<bool, StorageError> {
        if from >= self.tasks.len() {
            debug!(from, len = self.tasks.len(), "reorder source out of range, ignored");
            return Ok(false);
        }
        let to = to.min(self.tasks.len() - 1);
        if from != to {
            let task = self.tasks.remove(from);
            self.tasks.insert(to, task);
        }
        self.save()?;
        Ok(true)
    }

    /// Lowest positive id not held by any task
    fn smallest_unused_id(&self) -> TaskId {
        let mut used: Vec<u64> = self.tasks.iter().map(|t| t.id.0).collect();
        used.sort_unstable();
        used.dedup();
        let mut candidate = 1;
        for id in used {
            if id > candidate {
                break;
            }
            if id == candidate {
                candidate += 1;
            }
        }
        TaskId(candidate)
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.tasks)?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Index of the task with `id` in the sequence
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Number of tasks not yet completed
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    pub fn remaining_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl TaskStore<FileStore> {
    /// Open the file-backed store in `data_dir` under the configured key
    pub fn open(data_dir: &Path, config: &Config) -> Self {
        Self::load(FileStore::new(data_dir), config.storage.key.clone())
    }
}

use chrono::Utc;

use crate::model::task::TaskId;

/// Allocates task ids.
///
/// Ids are millisecond timestamps when the clock allows it, but every id is
/// strictly greater than the previous one and than any id seen at seeding, so
/// two tasks created in the same millisecond (or after a clock step back)
/// still get distinct ids. Once `u64::MAX` has been handed out or seen the
/// generator is exhausted and returns None.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// A generator that will never hand out any of `existing`
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a TaskId>) -> Self {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        IdGenerator { last }
    }

    /// Next id based on the wall clock
    pub fn next_id(&mut self) -> Option<TaskId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id given the current time in milliseconds
    pub fn next_at(&mut self, now_millis: u64) -> Option<TaskId> {
        let id = now_millis.max(self.last.checked_add(1)?);
        self.last = id;
        Some(TaskId(id))
    }
}

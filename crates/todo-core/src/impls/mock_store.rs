//! MockStore - 何も保存しないストア
//!
//! `add` は task を組み立てて返すだけ。`get` は既知の ID だけを解決します。

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Task, TaskId, TodoError};
use crate::ports::{Clock, IdGenerator, SystemClock, TaskAdder, TaskGetter, UlidGenerator, validate_note};

/// The only key `MockStore::get` resolves.
pub const KNOWN_TASK_ID: &str = "6eb69ac1-14fb-48b5-9c06-a82670342384";

/// Accepts tasks without storing them; knows exactly one task.
pub struct MockStore {
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_parts(SystemClock, UlidGenerator::new(SystemClock))
    }

    pub fn with_parts(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    /// The task behind [`KNOWN_TASK_ID`].
    pub fn known_task() -> Task {
        Task::new(TaskId::new(KNOWN_TASK_ID), "Take the umbrella ☔", known_task_time())
    }
}

fn known_task_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 4, 23, 11, 4, 0)
        .single()
        .unwrap_or_default()
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskAdder for MockStore {
    async fn add(&self, note: &str) -> Result<Task, TodoError> {
        validate_note(note)?;
        let task = Task::new(self.ids.generate_task_id(), note, self.clock.now());
        tracing::debug!(task_id = %task.id, "mock store created task");
        Ok(task)
    }
}

#[async_trait]
impl TaskGetter for MockStore {
    async fn get(&self, key: &str) -> Result<Task, TodoError> {
        if key != KNOWN_TASK_ID {
            return Err(TodoError::unknown_task(key));
        }
        Ok(Self::known_task())
    }
}

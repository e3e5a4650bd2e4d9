//! InMemoryTaskStore - 開発用の正本
//!
//! `add` した task を HashMap に保持し、`get` で引けるようにします。
//! プロセスを跨いでは残りません。

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{Task, TaskId, TodoError};
use crate::ports::{Clock, IdGenerator, SystemClock, TaskAdder, TaskGetter, UlidGenerator, validate_note};

pub struct InMemoryTaskStore {
    tasks: Mutex<HashMap<TaskId, Task>>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::with_parts(SystemClock, UlidGenerator::new(SystemClock))
    }

    pub fn with_parts(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    /// Number of stored tasks. Still readable after a writer panicked.
    pub fn len(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskAdder for InMemoryTaskStore {
    async fn add(&self, note: &str) -> Result<Task, TodoError> {
        validate_note(note)?;
        let task = Task::new(self.ids.generate_task_id(), note, self.clock.now());

        let mut tasks = self
            .tasks
            .lock()
            .map_err(|e| TodoError::store(format!("task map lock poisoned: {e}")))?;
        tasks.insert(task.id.clone(), task.clone());
        tracing::debug!(task_id = %task.id, total = tasks.len(), "stored task");
        Ok(task)
    }
}

#[async_trait]
impl TaskGetter for InMemoryTaskStore {
    async fn get(&self, key: &str) -> Result<Task, TodoError> {
        let tasks = self
            .tasks
            .lock()
            .map_err(|e| TodoError::store(format!("task map lock poisoned: {e}")))?;
        tasks
            .get(&TaskId::new(key))
            .cloned()
            .ok_or_else(|| TodoError::unknown_task(key))
    }
}

//! TaskStore port - ドメイン協調者（task の追加と取得）
//!
//! Any store that honours these failure contracts can sit behind the
//! `add-task` / `get-task` functions unchanged:
//! - `add` rejects an empty or whitespace-only note with `TodoError::Validation`
//! - `get` rejects an unresolvable key with `TodoError::UnknownTask(key)`
//!
//! Other failures should be `TodoError::Store`; they surface as
//! `APPLICATION_ERROR`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Task, TodoError};

/// Reason used when a note is empty.
pub const MISSING_NOTE: &str = "missing note value";

#[async_trait]
pub trait TaskAdder: Send + Sync {
    async fn add(&self, note: &str) -> Result<Task, TodoError>;
}

#[async_trait]
pub trait TaskGetter: Send + Sync {
    async fn get(&self, key: &str) -> Result<Task, TodoError>;
}

/// Both capabilities.
pub trait TaskStore: TaskAdder + TaskGetter {}

impl<T: TaskAdder + TaskGetter> TaskStore for T {}

#[async_trait]
impl<T: TaskAdder + ?Sized> TaskAdder for Arc<T> {
    async fn add(&self, note: &str) -> Result<Task, TodoError> {
        (**self).add(note).await
    }
}

#[async_trait]
impl<T: TaskGetter + ?Sized> TaskGetter for Arc<T> {
    async fn get(&self, key: &str) -> Result<Task, TodoError> {
        (**self).get(key).await
    }
}

/// Shared note check for store implementations.
pub fn validate_note(note: &str) -> Result<(), TodoError> {
    if note.trim().is_empty() {
        return Err(TodoError::validation(MISSING_NOTE));
    }
    Ok(())
}

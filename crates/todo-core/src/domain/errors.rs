//! Errors - ドメイン操作が返す失敗
//!
//! The classifier dispatches on [`FailureKind`], never on message text. Adding
//! a variant to [`TodoError`] forces a decision in [`TodoError::kind`].

use thiserror::Error;

/// Failure raised by a domain collaborator (a task store).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Input broke a domain invariant, e.g. an empty note.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The lookup key does not resolve to a task.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// Anything else the store could not do.
    #[error("store failure: {0}")]
    Store(String),
}

/// Operational classification of a [`TodoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Validation,
    NotFound,
    Internal,
}

impl TodoError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn unknown_task(key: impl Into<String>) -> Self {
        Self::UnknownTask(key.into())
    }

    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store(detail.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::UnknownTask(_) => FailureKind::NotFound,
            Self::Store(_) => FailureKind::Internal,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == FailureKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == FailureKind::NotFound
    }
}

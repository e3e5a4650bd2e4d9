//! Classifier - ドメインの失敗を ErrorCode に写像する
//!
//! | FailureKind | code | public_message |
//! |---|---|---|
//! | Validation | `INVALID_INPUT` | registry default |
//! | NotFound (mapping given) | mapping code, e.g. `TASK_NOT_FOUND` | mapping message |
//! | NotFound (no mapping) | `APPLICATION_ERROR` | registry default |
//! | Internal | `APPLICATION_ERROR` | registry default |
//!
//! Decode failures never reach the classifier; the adapter maps them to
//! `BAD_INPUT` before the handler runs.

use std::borrow::Cow;

use crate::domain::{FailureKind, TodoError};
use crate::envelope::{ErrorCode, LambdaError};

/// Explicit code and message for a not-found failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundMapping {
    pub code: ErrorCode,
    pub public_message: Cow<'static, str>,
}

/// Per-function failure classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    not_found: Option<NotFoundMapping>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify not-found failures with an explicit code and message instead
    /// of the `APPLICATION_ERROR` fallback.
    pub fn with_not_found(
        mut self,
        code: ErrorCode,
        public_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.not_found = Some(NotFoundMapping {
            code,
            public_message: public_message.into(),
        });
        self
    }

    pub fn not_found(&self) -> Option<&NotFoundMapping> {
        self.not_found.as_ref()
    }

    /// Success passes through untouched; every failure becomes exactly one
    /// envelope.
    pub fn classify<T>(&self, outcome: Result<T, TodoError>) -> Result<T, LambdaError> {
        outcome.map_err(|err| self.envelope(err))
    }

    pub fn envelope(&self, err: TodoError) -> LambdaError {
        match (err.kind(), &self.not_found) {
            (FailureKind::Validation, _) => LambdaError::coded(Box::new(err), ErrorCode::InvalidInput),
            (FailureKind::NotFound, Some(mapping)) => LambdaError::new(
                Box::new(err),
                mapping.code.clone(),
                mapping.public_message.to_string(),
            ),
            (FailureKind::NotFound, None) | (FailureKind::Internal, _) => {
                LambdaError::coded(Box::new(err), ErrorCode::ApplicationError)
            }
        }
    }
}

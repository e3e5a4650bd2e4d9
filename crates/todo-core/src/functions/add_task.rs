//! add-task: `{"note": string}` -> Task
//!
//! A missing or `null` note decodes as empty and is rejected by the store, so
//! `{}` and `{"note": null}` are `INVALID_INPUT`, not `BAD_INPUT`. The key is
//! matched without regard to case.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use super::field::string_field;
use crate::domain::{Task, TodoError};
use crate::ports::TaskAdder;
use crate::typed::{Handler, Request};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddTask {
    pub note: String,
}

impl<'de> Deserialize<'de> for AddTask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_field(deserializer, "note").map(|note| Self { note })
    }
}

impl Request for AddTask {
    const FUNCTION: &'static str = "add-task";
}

pub struct AddTaskHandler<S> {
    store: S,
}

impl<S: TaskAdder> AddTaskHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: TaskAdder> Handler<AddTask> for AddTaskHandler<S> {
    type Response = Task;

    async fn handle(&self, request: AddTask) -> Result<Task, TodoError> {
        self.store.add(&request.note).await
    }
}

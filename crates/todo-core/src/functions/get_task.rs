//! get-task: `{"task": string}` -> Task
//!
//! Not-found is the one failure with an explicit code: `TASK_NOT_FOUND` /
//! `Task not found`.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use super::field::string_field;
use crate::domain::{Task, TodoError};
use crate::envelope::ErrorCode;
use crate::ports::TaskGetter;
use crate::typed::{Classifier, Handler, Request};

pub const TASK_NOT_FOUND: ErrorCode = ErrorCode::custom("TASK_NOT_FOUND");
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetTask {
    pub task: String,
}

impl<'de> Deserialize<'de> for GetTask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_field(deserializer, "task").map(|task| Self { task })
    }
}

impl Request for GetTask {
    const FUNCTION: &'static str = "get-task";
}

pub struct GetTaskHandler<S> {
    store: S,
}

impl<S: TaskGetter> GetTaskHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: TaskGetter> Handler<GetTask> for GetTaskHandler<S> {
    type Response = Task;

    async fn handle(&self, request: GetTask) -> Result<Task, TodoError> {
        self.store.get(&request.task).await
    }

    fn classifier(&self) -> Classifier {
        Classifier::new().with_not_found(TASK_NOT_FOUND, TASK_NOT_FOUND_MESSAGE)
    }
}

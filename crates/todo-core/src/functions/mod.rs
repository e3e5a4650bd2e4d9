//! Functions exposed to the runtime.

pub mod add_task;
mod field;
pub mod get_task;

pub use self::add_task::{AddTask, AddTaskHandler};
pub use self::get_task::{GetTask, GetTaskHandler, TASK_NOT_FOUND, TASK_NOT_FOUND_MESSAGE};

//! Domain model (task, ids, domain failures).

pub mod errors;
pub mod task;

pub use self::errors::{FailureKind, TodoError};
pub use self::task::{Task, TaskId};

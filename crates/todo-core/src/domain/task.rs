use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque task identifier. Allocated by the store, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A to-do item.
///
/// Invariant: `created_at <= updated_at`. Timestamps serialize as RFC 3339
/// in UTC, e.g. `2018-04-23T11:04:00Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub done: bool,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// A fresh, not yet done task created at `now`.
    pub fn new(id: TaskId, note: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            done: false,
            note: note.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn task_json_field_set() {
        let at = Utc.with_ymd_and_hms(2018, 4, 23, 11, 4, 0).unwrap();
        let task = Task::new(TaskId::new("6eb69ac1-14fb-48b5-9c06-a82670342384"), "Take the umbrella ☔", at);

        let v = serde_json::to_value(&task).unwrap();
        assert_eq!(
            v,
            json!({
                "id": "6eb69ac1-14fb-48b5-9c06-a82670342384",
                "done": false,
                "note": "Take the umbrella ☔",
                "created_at": "2018-04-23T11:04:00Z",
                "updated_at": "2018-04-23T11:04:00Z"
            })
        );
    }

    #[test]
    fn new_task_is_not_done_and_unmodified() {
        let task = Task::new(TaskId::new("t"), "foo", Utc::now());
        assert!(!task.done);
        assert_eq!(task.created_at, task.updated_at);
    }
}

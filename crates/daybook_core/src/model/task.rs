//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its category newtype.
//!
//! # Invariants
//! - `id` is stable and never reused for another task, even after removals.
//! - `created_at` is immutable metadata; it does not drive ordering.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::now_epoch_ms;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Task category label.
///
/// The set of valid categories is configuration
/// ([`RepositoryConfig::categories`](crate::repo::RepositoryConfig)), not a
/// closed enum: deployments of the original tracker disagreed on the set
/// (Personal/School/Work vs a single Home section).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Persisted task record.
///
/// Field names serialize in camelCase so the stored JSON stays byte-for-byte
/// compatible with the historical collection layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID, assigned at creation.
    pub id: TaskId,
    /// User-entered description. Non-empty; enforced at the command layer.
    pub text: String,
    /// Section this task belongs to.
    pub category: Category,
    /// Completion flag, starts `false`.
    pub done: bool,
    /// Creation time in epoch milliseconds. Display never shows it directly.
    pub created_at: i64,
}

impl Task {
    /// Creates a task with a fresh id and the current timestamp.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category,
            done: false,
            created_at: now_epoch_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Task};

    #[test]
    fn new_task_starts_open_with_unique_id() {
        let a = Task::new("read mail", Category::from("Personal"));
        let b = Task::new("read mail", Category::from("Personal"));
        assert!(!a.done);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn task_serializes_with_camel_case_fields() {
        let task = Task::new("essay draft", Category::from("School"));
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"category\":\"School\""));
    }
}

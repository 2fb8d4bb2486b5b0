//! Journal entry domain model.
//!
//! # Invariants
//! - `date` is a user-supplied `YYYY-MM-DD` string and drives display order.
//! - `created_at` records when the entry was written; it is not a sort key.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::now_epoch_ms;

/// Stable identifier for a journal entry.
pub type EntryId = Uuid;

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Returns whether `value` has the `YYYY-MM-DD` shape journal dates require.
///
/// Shape-only check: the original input came from a date picker, so
/// out-of-range components never reached storage and are not re-validated.
pub fn is_valid_entry_date(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

/// Persisted journal entry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Stable global ID, assigned at creation.
    pub id: EntryId,
    /// Calendar date the entry is about, `YYYY-MM-DD`.
    pub date: String,
    /// User-entered body. Non-empty; enforced at the command layer.
    pub text: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

impl JournalEntry {
    /// Creates an entry with a fresh id and the current timestamp.
    pub fn new(date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: date.into(),
            text: text.into(),
            created_at: now_epoch_ms(),
        }
    }
}

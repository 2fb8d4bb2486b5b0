//! Domain records persisted by the daybook core.
//!
//! # Responsibility
//! - Define the canonical task, journal, theme and quote-rotation shapes.
//! - Keep the persisted JSON layout stable across loads.
//!
//! # Invariants
//! - Every task and journal entry carries a stable id that is never reused.
//! - Insertion order of the task collection is authoritative for display;
//!   `created_at` is metadata, never a sort key.

pub mod journal;
pub mod quote;
pub mod task;
pub mod theme;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds.
///
/// Clamped to zero for clocks set before the epoch rather than panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

//! Core domain logic for Daybook, a local-first task and journal tracker.
//! This crate is the single source of truth for state, persistence and
//! view derivation; rendering and input collection live with the caller.

pub mod db;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::journal::{is_valid_entry_date, EntryId, JournalEntry};
pub use model::quote::{QuoteRotation, DEFAULT_QUOTE_POOL};
pub use model::task::{Category, Task, TaskId};
pub use model::theme::Theme;
pub use projection::{
    count_label, escape_html, project_counts, project_journal, project_tasks, DashboardCounts,
    RECENT_TASK_LIMIT,
};
pub use repo::{Collection, Repository, RepositoryConfig, StorageKeys};
pub use service::{CommandOutcome, DaybookService};
pub use store::{
    BackendError, KeyValueBackend, MemoryBackend, ReadOutcome, SqliteBackend, StoreAdapter,
    WriteOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

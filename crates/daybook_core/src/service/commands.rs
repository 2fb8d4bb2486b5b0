//! Mutation commands.
//!
//! Every command is one indivisible transition: validate, mutate the
//! in-memory collection, commit the whole collection, return. Validation
//! failures and lookup misses are silent no-ops by design — the source
//! system never surfaced them — but each command still reports an outcome
//! value so the no-op path is assertable in tests.

use log::debug;
use rusqlite::Connection;
use std::path::Path;

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::model::journal::{is_valid_entry_date, EntryId, JournalEntry};
use crate::model::task::{Category, Task, TaskId};
use crate::model::theme::Theme;
use crate::repo::{Collection, Repository, RepositoryConfig};
use crate::store::{KeyValueBackend, SqliteBackend, StoreAdapter};

/// Whether a command changed state. Ignorable by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Validation failed or the target id does not exist; nothing changed.
    Ignored,
}

/// Command entry points over a loaded repository.
pub struct DaybookService<B: KeyValueBackend> {
    repo: Repository<B>,
}

impl DaybookService<SqliteBackend> {
    /// Opens (or creates) a storage file and loads the default-config
    /// repository from it.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::from_connection(open_db(path)?, RepositoryConfig::default()))
    }

    /// In-memory storage, mainly for tests and previews.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(
            open_db_in_memory()?,
            RepositoryConfig::default(),
        ))
    }

    /// Wires a bootstrapped connection into a loaded service.
    pub fn from_connection(conn: Connection, config: RepositoryConfig) -> Self {
        let store = StoreAdapter::new(SqliteBackend::new(conn));
        Self::new(Repository::load(store, config))
    }
}

impl<B: KeyValueBackend> DaybookService<B> {
    pub fn new(repo: Repository<B>) -> Self {
        Self { repo }
    }

    /// Read access to the repository snapshot, for projections.
    pub fn repo(&self) -> &Repository<B> {
        &self.repo
    }

    /// Adds a task. Text that trims to empty is ignored; an unknown or
    /// absent category falls back to the configured default.
    pub fn add_task(&mut self, text: &str, category: Option<&str>) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=add_task module=service status=ignored reason=empty_text");
            return None;
        }

        let category = category
            .map(Category::from)
            .filter(|candidate| self.repo.is_known_category(candidate))
            .unwrap_or_else(|| self.repo.default_category());

        let task = Task::new(text, category);
        let id = task.id;
        self.repo.push_task(task);
        self.repo.commit(Collection::Tasks);
        Some(id)
    }

    /// Removes the task with `id`. A missing id is a no-op.
    pub fn remove_task(&mut self, id: TaskId) -> CommandOutcome {
        if !self.repo.remove_task(id) {
            return CommandOutcome::Ignored;
        }
        self.repo.commit(Collection::Tasks);
        CommandOutcome::Applied
    }

    /// Sets the `done` flag on the task with `id`. A missing id is a no-op.
    pub fn set_task_done(&mut self, id: TaskId, done: bool) -> CommandOutcome {
        if !self.repo.set_task_done(id, done) {
            return CommandOutcome::Ignored;
        }
        self.repo.commit(Collection::Tasks);
        CommandOutcome::Applied
    }

    /// Adds a journal entry. Ignored when the date is not `YYYY-MM-DD` or
    /// the text trims to empty.
    pub fn add_journal_entry(&mut self, date: &str, text: &str) -> Option<EntryId> {
        let text = text.trim();
        if text.is_empty() || !is_valid_entry_date(date) {
            debug!("event=add_journal_entry module=service status=ignored reason=invalid_input");
            return None;
        }

        let entry = JournalEntry::new(date, text);
        let id = entry.id;
        self.repo.push_entry(entry);
        self.repo.commit(Collection::Journal);
        Some(id)
    }

    /// Flips the theme and returns the new value so the caller can restyle.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.repo.theme().toggled();
        self.repo.set_theme(next);
        self.repo.commit(Collection::Theme);
        next
    }

    /// Empties tasks, journal and theme and deletes their storage keys.
    ///
    /// Destructive; the caller is expected to have confirmed with the user
    /// before invoking this.
    pub fn clear_all(&mut self) {
        self.repo.clear_all();
    }

    /// Returns the next quote in the rotation, persisting the new cursor.
    /// `None` only when the configured pool is empty.
    pub fn advance_quote(&mut self) -> Option<String> {
        let quote = self.repo.next_quote()?.to_string();
        self.repo.commit(Collection::Quotes);
        Some(quote)
    }
}

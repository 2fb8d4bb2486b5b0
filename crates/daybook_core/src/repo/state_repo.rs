//! Domain state repository.
//!
//! Holds the four collections (tasks, journal, theme, quote rotation),
//! loads them wholesale at start and commits them wholesale after every
//! mutation. Loading never fails: absence and corruption both degrade to
//! the collection's default.

use log::info;

use crate::model::journal::JournalEntry;
use crate::model::quote::{QuoteRotation, DEFAULT_QUOTE_POOL};
use crate::model::task::{Category, Task, TaskId};
use crate::model::theme::Theme;
use crate::store::{KeyValueBackend, StoreAdapter, WriteOutcome};

/// Names of the underlying storage keys, one per persisted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub journal: String,
    pub theme: String,
    pub quote_order: String,
    pub quote_cursor: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "daybook.tasks".to_string(),
            journal: "daybook.journal".to_string(),
            theme: "daybook.theme".to_string(),
            quote_order: "daybook.quoteOrder".to_string(),
            quote_cursor: "daybook.quoteIndex".to_string(),
        }
    }
}

/// Deployment-level configuration: key names, the valid category set and
/// the quote pool. Everything else about the repository is behavior.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    pub keys: StorageKeys,
    pub categories: Vec<Category>,
    pub quote_pool: Vec<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            categories: ["Personal", "School", "Work"]
                .into_iter()
                .map(Category::from)
                .collect(),
            quote_pool: DEFAULT_QUOTE_POOL.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// One persisted collection, as named in commit calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tasks,
    Journal,
    Theme,
    Quotes,
}

/// Single owner of the in-memory state backing every view.
///
/// Concurrent contexts over the same backend are uncoordinated: each loads
/// its own snapshot, and the later commit to a key silently overwrites the
/// earlier one (last write wins). That matches the source system and is
/// pinned by tests rather than reconciled.
pub struct Repository<B: KeyValueBackend> {
    store: StoreAdapter<B>,
    config: RepositoryConfig,
    tasks: Vec<Task>,
    journal: Vec<JournalEntry>,
    theme: Theme,
    rotation: QuoteRotation,
}

impl<B: KeyValueBackend> Repository<B> {
    /// Loads every collection from the adapter, defaulting whatever is
    /// absent or corrupt. Called once per context at start.
    pub fn load(store: StoreAdapter<B>, config: RepositoryConfig) -> Self {
        let keys = &config.keys;
        let tasks: Vec<Task> = store.get_or(&keys.tasks, Vec::new());
        let journal: Vec<JournalEntry> = store.get_or(&keys.journal, Vec::new());
        let theme = Theme::from_stored(&store.get_or(&keys.theme, String::new()));
        let order: Vec<usize> = store.get_or(&keys.quote_order, Vec::new());
        let cursor: usize = store.get_or(&keys.quote_cursor, 0);
        let rotation = QuoteRotation::from_stored(order, cursor, config.quote_pool.len());

        info!(
            "event=repo_load module=repo status=ok tasks={} journal={} theme={:?}",
            tasks.len(),
            journal.len(),
            theme
        );

        Self {
            store,
            config,
            tasks,
            journal,
            theme,
            rotation,
        }
    }

    /// Writes the named collection back in full.
    pub fn commit(&self, collection: Collection) -> WriteOutcome {
        let keys = &self.config.keys;
        match collection {
            Collection::Tasks => self.store.set(&keys.tasks, &self.tasks),
            Collection::Journal => self.store.set(&keys.journal, &self.journal),
            Collection::Theme => self.store.set(&keys.theme, &self.theme.to_stored()),
            Collection::Quotes => {
                let order = self.store.set(&keys.quote_order, &self.rotation.order());
                let cursor = self.store.set(&keys.quote_cursor, &self.rotation.cursor());
                if order == WriteOutcome::Written && cursor == WriteOutcome::Written {
                    WriteOutcome::Written
                } else {
                    WriteOutcome::Dropped
                }
            }
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    pub fn quote_pool(&self) -> &[String] {
        &self.config.quote_pool
    }

    /// The configured default category, used when a command names none.
    pub fn default_category(&self) -> Category {
        self.config
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| Category::from("Personal"))
    }

    /// Whether `category` is one of the configured set.
    pub fn is_known_category(&self, category: &Category) -> bool {
        self.config.categories.contains(category)
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub(crate) fn set_task_done(&mut self, id: TaskId, done: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_entry(&mut self, entry: JournalEntry) {
        self.journal.push(entry);
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Picks the next quote from the rotation, reshuffling at cycle end.
    pub(crate) fn next_quote(&mut self) -> Option<&str> {
        let mut rng = rand::rng();
        let index = self
            .rotation
            .advance(self.config.quote_pool.len(), &mut rng)?;
        self.config.quote_pool.get(index).map(String::as_str)
    }

    /// Empties tasks, journal and theme and removes their keys outright,
    /// leaving the store indistinguishable from one never written to.
    pub(crate) fn clear_all(&mut self) {
        self.tasks.clear();
        self.journal.clear();
        self.theme = Theme::Light;

        let keys = &self.config.keys;
        self.store.remove(&keys.tasks);
        self.store.remove(&keys.journal);
        self.store.remove(&keys.theme);
        info!("event=repo_clear module=repo status=ok");
    }
}

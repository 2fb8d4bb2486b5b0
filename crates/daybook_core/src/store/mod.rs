//! Persistent key-value store adapter.
//!
//! # Responsibility
//! - Define the synchronous string key-value backend contract.
//! - Layer the JSON codec and fallback-on-failure semantics on top of it.
//!
//! # Invariants
//! - A failed read degrades to the caller-supplied fallback, never an error.
//! - A failed write is dropped whole; the prior value under the key stays
//!   untouched. Callers never branch on the outcome of a write.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

pub type BackendResult<T> = Result<T, BackendError>;

/// Failure reported by a key-value backend.
#[derive(Debug)]
pub enum BackendError {
    /// The write would exceed the backend's capacity budget.
    QuotaExceeded { requested: usize, budget: usize },
    Sqlite(rusqlite::Error),
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded { requested, budget } => {
                write!(f, "write of {requested} bytes exceeds budget of {budget} bytes")
            }
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::QuotaExceeded { .. } => None,
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for BackendError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string key-value storage, in the mold of web local storage.
///
/// Implementations may be capacity-bounded; a rejected write must leave any
/// prior value under the key intact.
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> BackendResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> BackendResult<()>;
    fn remove_item(&self, key: &str) -> BackendResult<()>;
}

/// How a read resolved. Lets tests assert on the degrade path directly;
/// regular callers go through [`StoreAdapter::get_or`] and never see it.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    Loaded(T),
    /// Key absent, or the backend itself failed.
    Missing,
    /// Stored bytes exist but do not decode as the requested shape.
    Corrupt,
}

/// How a write resolved. Deliberately ignorable: the external contract is
/// that writes never surface failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Dropped,
}

/// JSON codec over a [`KeyValueBackend`].
pub struct StoreAdapter<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> StoreAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads and decodes the value under `key`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> ReadOutcome<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ReadOutcome::Missing,
            Err(err) => {
                warn!("event=store_read module=store status=degraded key={key} error={err}");
                return ReadOutcome::Missing;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => ReadOutcome::Loaded(value),
            Err(err) => {
                warn!("event=store_read module=store status=corrupt key={key} error={err}");
                ReadOutcome::Corrupt
            }
        }
    }

    /// Reads the value under `key`, or returns `fallback` on absence,
    /// corruption, or backend failure.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.read(key) {
            ReadOutcome::Loaded(value) => value,
            ReadOutcome::Missing | ReadOutcome::Corrupt => fallback,
        }
    }

    /// Encodes `value` and writes it under `key`. Failures are dropped.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> WriteOutcome {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("event=store_write module=store status=dropped key={key} error={err}");
                return WriteOutcome::Dropped;
            }
        };
        match self.backend.set_item(key, &encoded) {
            Ok(()) => WriteOutcome::Written,
            Err(err) => {
                warn!("event=store_write module=store status=dropped key={key} error={err}");
                WriteOutcome::Dropped
            }
        }
    }

    /// Removes `key` entirely, distinct from writing an empty value.
    pub fn remove(&self, key: &str) -> WriteOutcome {
        match self.backend.remove_item(key) {
            Ok(()) => WriteOutcome::Written,
            Err(err) => {
                warn!("event=store_remove module=store status=dropped key={key} error={err}");
                WriteOutcome::Dropped
            }
        }
    }
}

//! In-memory key-value backend.
//!
//! Clones share one map, which lets tests model two page contexts loaded
//! against the same storage. Single-threaded by design, like the rest of
//! the core, so plain `Rc`/`RefCell` suffice.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{BackendError, BackendResult, KeyValueBackend};

/// Shared in-memory backend with an optional byte budget.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<HashMap<String, String>>>,
    budget: Option<usize>,
}

impl MemoryBackend {
    /// Unbounded backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once total stored bytes would exceed
    /// `budget`, mimicking a storage quota.
    pub fn with_budget(budget: usize) -> Self {
        Self {
            inner: Rc::default(),
            budget: Some(budget),
        }
    }

    fn stored_bytes_excluding(&self, key: &str) -> usize {
        self.inner
            .borrow()
            .iter()
            .filter(|(stored_key, _)| stored_key.as_str() != key)
            .map(|(stored_key, value)| stored_key.len() + value.len())
            .sum()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> BackendResult<Option<String>> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> BackendResult<()> {
        if let Some(budget) = self.budget {
            let requested = self.stored_bytes_excluding(key) + key.len() + value.len();
            if requested > budget {
                return Err(BackendError::QuotaExceeded { requested, budget });
            }
        }
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BackendResult<()> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

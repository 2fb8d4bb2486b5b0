//! Repository layer: single authority over the persisted collections.
//!
//! # Responsibility
//! - Own the in-memory collections and mediate every read/write through
//!   the store adapter.
//!
//! # Invariants
//! - No other component holds a mutable reference to a collection.
//! - A commit is a whole-collection overwrite, never an incremental append.

mod state_repo;

pub use state_repo::{Collection, Repository, RepositoryConfig, StorageKeys};

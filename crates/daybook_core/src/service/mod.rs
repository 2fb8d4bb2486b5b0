//! Use-case services over the repository.
//!
//! # Responsibility
//! - Provide the mutation commands callers invoke from event handlers.
//! - Keep validation at this boundary; the repository trusts its inputs.

mod commands;

pub use commands::{CommandOutcome, DaybookService};

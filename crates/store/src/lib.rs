//! `jobtrackr-store` — the job-application store and its persistence slot.
//!
//! [`JobStore`] owns an in-memory ordered collection of records, mirrored to
//! a single [`PersistenceSlot`] after every mutation. All operations are
//! synchronous and run to completion; errors come back as return values, and
//! the in-memory collection stays authoritative when a save fails.

pub mod error;
pub mod slot;
pub mod store;

pub use error::{ImportError, SlotError, StoreError};
pub use slot::{InMemorySlot, JsonFileSlot, PersistenceSlot, SLOT_FILE_NAME};
pub use store::{CountSummary, EXPORT_FILE_NAME, JobStore, Statistics};

#[cfg(test)]
mod integration_tests;

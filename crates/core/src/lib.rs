//! `jobtrackr-core` — domain foundation for the job-application tracker.
//!
//! This crate contains **pure domain** types and rules (no IO, no storage):
//! the record model, identifiers, status lifecycle, filters, and field
//! validation.

pub mod error;
pub mod filter;
pub mod id;
pub mod record;
pub mod status;

pub use error::ValidationErrors;
pub use filter::StatusFilter;
pub use id::JobId;
pub use record::{JobDraft, JobRecord, ValidatedJob, fields};
pub use status::{ParseStatusError, Status};

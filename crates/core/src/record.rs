//! The job-application record and its validation rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::id::JobId;
use crate::status::Status;

/// Wire field names, shared by storage, validation errors, and presentation.
pub mod fields {
    pub const COMPANY_NAME: &str = "companyName";
    pub const JOB_TITLE: &str = "jobTitle";
    pub const DATE_APPLIED: &str = "dateApplied";
    pub const STATUS: &str = "status";
}

/// One tracked job application.
///
/// Serializes with the original wire field names (`companyName`, `jobTitle`,
/// ...) so stored slots and exported backups stay interchangeable with
/// earlier backups. Unknown fields in stored blobs are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Immutable, unique across the collection.
    pub id: JobId,
    pub company_name: String,
    pub job_title: String,
    pub date_applied: NaiveDate,
    pub status: Status,
    /// Set once at creation; updates carry it over untouched.
    pub date_created: DateTime<Utc>,
}

impl JobRecord {
    /// Long-form rendering of the application date ("January 5, 2026").
    ///
    /// Display only; the stored value stays an ISO 8601 date.
    pub fn applied_on_display(&self) -> String {
        self.date_applied.format("%B %-d, %Y").to_string()
    }
}

/// Raw field input from the presentation layer, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDraft {
    pub company_name: String,
    pub job_title: String,
    pub date_applied: String,
    pub status: String,
}

/// A draft that passed validation: display strings trimmed and non-empty,
/// date and status parsed into their typed forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedJob {
    pub company_name: String,
    pub job_title: String,
    pub date_applied: NaiveDate,
    pub status: Status,
}

impl JobDraft {
    /// Pre-fill a draft from an existing record (edit flows).
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            company_name: record.company_name.clone(),
            job_title: record.job_title.clone(),
            date_applied: record.date_applied.to_string(),
            status: record.status.as_str().to_owned(),
        }
    }

    /// Check the four required fields and parse the typed ones.
    ///
    /// All failing fields are reported together, keyed by wire field name.
    /// No collection state is touched here; callers abort on `Err`.
    pub fn validate(&self) -> Result<ValidatedJob, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            errors.push(fields::COMPANY_NAME, "Company Name is required.");
        }

        let job_title = self.job_title.trim();
        if job_title.is_empty() {
            errors.push(fields::JOB_TITLE, "Job Title is required.");
        }

        let date_raw = self.date_applied.trim();
        let date_applied = if date_raw.is_empty() {
            errors.push(fields::DATE_APPLIED, "Date Applied is required.");
            None
        } else {
            match date_raw.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(fields::DATE_APPLIED, "Please enter a valid date.");
                    None
                }
            }
        };

        let status_raw = self.status.trim();
        let status = if status_raw.is_empty() {
            errors.push(fields::STATUS, "Status is required.");
            None
        } else {
            match status_raw.parse::<Status>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.push(fields::STATUS, "Please select a valid status.");
                    None
                }
            }
        };

        match (date_applied, status) {
            (Some(date_applied), Some(status)) if errors.is_empty() => Ok(ValidatedJob {
                company_name: company_name.to_owned(),
                job_title: job_title.to_owned(),
                date_applied,
                status,
            }),
            _ => Err(errors),
        }
    }
}

impl ValidatedJob {
    /// Materialize a brand-new record: fresh id, creation timestamp now.
    pub fn into_new_record(self) -> JobRecord {
        JobRecord {
            id: JobId::generate(),
            company_name: self.company_name,
            job_title: self.job_title,
            date_applied: self.date_applied,
            status: self.status,
            date_created: Utc::now(),
        }
    }

    /// Materialize a replacement for `existing`, keeping its identity:
    /// `id` and `date_created` are carried over, everything else replaced.
    pub fn into_update_of(self, existing: &JobRecord) -> JobRecord {
        JobRecord {
            id: existing.id.clone(),
            company_name: self.company_name,
            job_title: self.job_title,
            date_applied: self.date_applied,
            status: self.status,
            date_created: existing.date_created,
        }
    }
}

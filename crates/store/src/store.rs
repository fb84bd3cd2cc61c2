//! The job-application store.

use serde::Serialize;

use jobtrackr_core::{JobDraft, JobId, JobRecord, Status, StatusFilter};

use crate::error::{ImportError, StoreError};
use crate::slot::PersistenceSlot;

/// Suggested file name for exported backups.
pub const EXPORT_FILE_NAME: &str = "jobtracker_backup.json";

/// In-memory ordered collection of job applications, mirrored to one
/// persistence slot.
///
/// Newest records sit at the front. The store is the single owner of the
/// collection: mutations take `&mut self`, run to completion, and persist
/// before returning. When a save fails the in-memory state stays
/// authoritative and the error is returned for the caller to surface.
#[derive(Debug)]
pub struct JobStore {
    records: Vec<JobRecord>,
    filter: StatusFilter,
    slot: Box<dyn PersistenceSlot>,
}

/// Human-facing summary of how many records the active filter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    count: usize,
    filter: StatusFilter,
}

impl CountSummary {
    pub fn count(&self) -> usize {
        self.count
    }

    /// "No applications" / "1 application" / "N applications", with the
    /// filter name in parentheses when a status filter is active.
    pub fn label(&self) -> String {
        let mut label = match self.count {
            0 => "No applications".to_owned(),
            1 => "1 application".to_owned(),
            n => format!("{n} applications"),
        };
        if let StatusFilter::Only(status) = self.filter {
            label.push_str(&format!(" ({})", status.as_str()));
        }
        label
    }
}

impl core::fmt::Display for CountSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Per-status counts over the full (unfiltered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl Statistics {
    pub fn for_status(&self, status: Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interview => self.interview,
            Status::Offer => self.offer,
            Status::Rejected => self.rejected,
        }
    }
}

impl JobStore {
    /// Open a store over the given slot, loading whatever it holds.
    ///
    /// A failing load starts the store empty with a warning; the slot
    /// contract already degrades absence and corruption to an empty
    /// collection. The filter starts unrestricted.
    pub fn open(slot: impl PersistenceSlot + 'static) -> Self {
        let slot: Box<dyn PersistenceSlot> = Box::new(slot);
        let records = match slot.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "slot load failed; starting empty");
                Vec::new()
            }
        };
        Self {
            records,
            filter: StatusFilter::All,
            slot,
        }
    }

    /// Validate the draft and prepend a new record.
    ///
    /// On validation failure nothing is mutated. On save failure the record
    /// is still in memory; see [`StoreError::Persistence`].
    pub fn create(&mut self, draft: &JobDraft) -> Result<JobRecord, StoreError> {
        let record = draft.validate()?.into_new_record();
        self.records.insert(0, record.clone());
        tracing::debug!(id = %record.id, company = %record.company_name, "created record");
        self.persist()?;
        Ok(record)
    }

    /// Validate the draft and replace the record with the given id.
    ///
    /// `id` and `date_created` are carried over from the existing record.
    /// An absent id is a silent no-op (`Ok(None)`, nothing persisted).
    pub fn update(&mut self, id: &JobId, draft: &JobDraft) -> Result<Option<JobRecord>, StoreError> {
        let validated = draft.validate()?;
        let Some(existing) = self.records.iter_mut().find(|r| &r.id == id) else {
            return Ok(None);
        };
        let replacement = validated.into_update_of(existing);
        *existing = replacement.clone();
        tracing::debug!(id = %replacement.id, "updated record");
        self.persist()?;
        Ok(Some(replacement))
    }

    /// Remove the record with the given id, if present. Idempotent: an
    /// absent id returns `Ok(false)` without persisting.
    pub fn remove(&mut self, id: &JobId) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        tracing::debug!(id = %id, "removed record");
        self.persist()?;
        Ok(true)
    }

    /// Set the active filter. Never mutates the collection.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Records visible under the active filter, in collection order.
    pub fn filtered(&self) -> Vec<&JobRecord> {
        self.records
            .iter()
            .filter(|r| self.filter.matches(r.status))
            .collect()
    }

    /// How many records the active filter shows, with a display label.
    pub fn count(&self) -> CountSummary {
        CountSummary {
            count: self.filtered().len(),
            filter: self.filter,
        }
    }

    /// Per-status counts over the full collection, ignoring the filter.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total: self.records.len(),
            ..Statistics::default()
        };
        for record in &self.records {
            match record.status {
                Status::Applied => stats.applied += 1,
                Status::Interview => stats.interview += 1,
                Status::Offer => stats.offer += 1,
                Status::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    /// Pretty-printed JSON snapshot of the full collection, for backup
    /// downloads (see [`EXPORT_FILE_NAME`]). No mutation.
    pub fn export_all(&self) -> Result<String, StoreError> {
        let blob = serde_json::to_string_pretty(&self.records)
            .map_err(crate::error::SlotError::from)?;
        Ok(blob)
    }

    /// Replace the entire collection with the parsed payload (pure
    /// overwrite, no merge), then persist. Returns the imported count.
    ///
    /// Any failure leaves the existing collection untouched: the payload
    /// must parse as a JSON array whose entries are well-formed records.
    pub fn import_all(&mut self, payload: &str) -> Result<usize, StoreError> {
        let value: serde_json::Value =
            serde_json::from_str(payload).map_err(ImportError::Parse)?;
        let serde_json::Value::Array(entries) = value else {
            return Err(ImportError::NotAnArray.into());
        };

        let mut imported = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let record = serde_json::from_value(entry)
                .map_err(|source| ImportError::MalformedRecord { index, source })?;
            imported.push(record);
        }

        let count = imported.len();
        self.records = imported;
        tracing::info!(count, "imported collection");
        self.persist()?;
        Ok(count)
    }

    /// Best-effort persist of the current collection, for host
    /// suspension/termination hooks.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.persist()
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn get(&self, id: &JobId) -> Option<&JobRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Err(err) = self.slot.save(&self.records) {
            tracing::error!(error = %err, "save failed; in-memory state remains authoritative");
            return Err(StoreError::Persistence(err));
        }
        Ok(())
    }
}

//! Persistence-slot implementations.
//!
//! A slot is one named storage location holding the entire collection as a
//! serialized JSON array. The contract degrades gracefully: a missing or
//! corrupt slot loads as empty, and individually malformed entries are
//! dropped with a warning rather than failing the whole load.

use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use jobtrackr_core::JobRecord;

use crate::error::SlotError;

/// Default slot file name, mirroring the original storage key.
pub const SLOT_FILE_NAME: &str = "jobtracker_jobs.json";

/// The storage contract consumed by the store.
pub trait PersistenceSlot: std::fmt::Debug {
    /// Load the full collection. Absence yields an empty collection.
    fn load(&self) -> Result<Vec<JobRecord>, SlotError>;

    /// Replace the slot contents with the given collection.
    fn save(&self, records: &[JobRecord]) -> Result<(), SlotError>;
}

impl<S: PersistenceSlot + ?Sized> PersistenceSlot for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<JobRecord>, SlotError> {
        (**self).load()
    }

    fn save(&self, records: &[JobRecord]) -> Result<(), SlotError> {
        (**self).save(records)
    }
}

/// Slot backed by a single JSON file.
///
/// `save` writes through a temp file and renames it into place, so a failed
/// write never truncates an existing slot.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Slot at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot under a data directory, using [`SLOT_FILE_NAME`].
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SLOT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceSlot for JsonFileSlot {
    fn load(&self) -> Result<Vec<JobRecord>, SlotError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(SlotError::io(&self.path, err)),
        };

        let entries = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "slot blob is not a JSON array; loading empty"
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "slot blob is corrupt; loading empty"
                );
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<JobRecord>(entry) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(index, error = %err, "dropping malformed stored record");
                }
            }
        }
        Ok(records)
    }

    fn save(&self, records: &[JobRecord]) -> Result<(), SlotError> {
        let blob = serde_json::to_string(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| SlotError::io(parent, err))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, blob).map_err(|err| SlotError::io(&tmp, err))?;
        std::fs::rename(&tmp, &self.path).map_err(|err| SlotError::io(&self.path, err))?;
        Ok(())
    }
}

/// In-memory slot for tests and development.
///
/// Share it via `Arc` to simulate a restart: two stores opened over the same
/// slot see the same contents. Saves can be toggled off to exercise the
/// persistence-error path.
#[derive(Debug, Default)]
pub struct InMemorySlot {
    records: RwLock<Vec<JobRecord>>,
    fail_saves: AtomicBool,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<JobRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Current slot contents.
    pub fn snapshot(&self) -> Vec<JobRecord> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }
}

impl PersistenceSlot for InMemorySlot {
    fn load(&self) -> Result<Vec<JobRecord>, SlotError> {
        let records = self
            .records
            .read()
            .map_err(|_| SlotError::unavailable("lock poisoned"))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[JobRecord]) -> Result<(), SlotError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SlotError::unavailable("saves disabled"));
        }
        let mut slot = self
            .records
            .write()
            .map_err(|_| SlotError::unavailable("lock poisoned"))?;
        *slot = records.to_vec();
        Ok(())
    }
}

//! Record identifiers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque unique identifier of a job-application record.
///
/// Generated ids are UUIDv7 strings (millisecond timestamp plus random tail),
/// so ids sort roughly by creation time and two calls in the same process do
/// not collide in practice. The type itself accepts any non-blank string, so
/// backups produced under other id schemes remain loadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("job id cannot be blank")]
pub struct BlankIdError;

impl JobId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for JobId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for JobId {
    type Err = BlankIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(BlankIdError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = JobId::generate();
        let b = JobId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn accepts_foreign_id_schemes() {
        let id: JobId = "job_1717000000000_x9k2mfa01".parse().unwrap();
        assert_eq!(id.as_str(), "job_1717000000000_x9k2mfa01");
    }

    #[test]
    fn rejects_blank_ids() {
        assert!("   ".parse::<JobId>().is_err());
        assert!(serde_json::from_str::<JobId>("\"\"").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: JobId = "abc".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}

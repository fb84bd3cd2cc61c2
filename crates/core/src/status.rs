//! Application status lifecycle.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle stage of a tracked application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Applied,
    Interview,
    Offer,
    Rejected,
}

/// A status string that names no known variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl Status {
    /// Every variant, in lifecycle order.
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interview,
        Status::Offer,
        Status::Rejected,
    ];

    /// Wire/storage name (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "applied",
            Status::Interview => "interview",
            Status::Offer => "offer",
            Status::Rejected => "rejected",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(Status::Applied),
            "interview" => Ok(Status::Interview),
            "offer" => Ok(Status::Offer),
            "rejected" => Ok(Status::Rejected),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

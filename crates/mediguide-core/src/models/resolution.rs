//! Resolution outcomes.

use serde::{Deserialize, Serialize};

use super::MedicineRecord;

/// Observable outcome of a lookup, from any strategy.
///
/// Individual transport failures are never surfaced to the caller; they
/// collapse into `NotFound` with `degraded` set, so the caller can still
/// distinguish "no such medicine" copy from "database unreachable" copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Resolution {
    /// A fully populated record was resolved.
    Found(MedicineRecord),
    /// Nothing resolved. `degraded` is true when at least one attempt
    /// failed in transport rather than returning an empty result set.
    NotFound { degraded: bool },
}

impl Resolution {
    /// Not-found outcome with no transport failures observed.
    pub fn not_found() -> Self {
        Resolution::NotFound { degraded: false }
    }

    /// The resolved record, if any.
    pub fn record(&self) -> Option<&MedicineRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Whether a record was resolved.
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Whether any transport failure occurred during the attempt sequence.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Resolution::NotFound { degraded: true })
    }

    /// Consume into an optional record, the caller-facing collapse.
    pub fn into_record(self) -> Option<MedicineRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound { .. } => None,
        }
    }
}

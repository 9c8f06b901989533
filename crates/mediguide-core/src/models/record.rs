//! Canonical medicine record.

use serde::{Deserialize, Serialize};

/// A fully populated medicine record, immutable once constructed.
///
/// Every field is free text and non-empty in a successfully resolved record;
/// partial records never exist. Serialized field names are camelCase, the
/// shape the presentation layer consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    /// Display name, e.g. "Paracetamol (Acetaminophen)"
    pub name: String,
    /// What the medicine is and how it works
    pub description: String,
    /// Dosing and administration guidance
    pub how_to_use: String,
    /// Indications — what it is taken for
    pub when_to_use: String,
    /// Known adverse reactions
    pub side_effects: String,
    /// Warnings, with drug interactions appended when known
    pub warnings: String,
}

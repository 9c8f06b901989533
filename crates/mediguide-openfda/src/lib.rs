//! MediGuide openFDA Lookup
//!
//! Remote half of the medicine lookup assistant: resolves free-text queries
//! against the openFDA drug label database and shapes the inconsistently
//! populated label records into canonical medicine records.
//!
//! # Architecture
//!
//! ```text
//! free-text query
//!       │
//!       ▼
//! ┌──────────────────┐
//! │ AliasTable        │  candidate terms, query first
//! │ (mediguide-core)  │
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐   per term: Exact → Broad → Substance
//! │ OpenFdaLookup     │──────────────────────────────────────┐
//! │ (sequential,      │   transport failure: log, move on    │
//! │  first match wins)│◀─────────────────────────────────────┘
//! └────────┬─────────┘
//!          ▼ first non-empty result set
//! ┌──────────────────┐
//! │ normalize_label   │  field-by-field fallback chains,
//! │                   │  bounded text shaping
//! └────────┬─────────┘
//!          ▼
//!   Resolution::Found(MedicineRecord)
//!   Resolution::NotFound { degraded }
//! ```
//!
//! # Modules
//!
//! - [`label`]: Raw label record types from the endpoint
//! - [`query`]: The ordered search-expression shapes
//! - [`client`]: reqwest transport behind the [`LabelFetch`] seam
//! - [`lookup`]: Sequential fallback search and suggestions
//! - [`normalize`]: Raw label → canonical record shaping
//! - [`assistant`]: Offline/remote composition and chat copy

pub mod assistant;
pub mod client;
pub mod label;
pub mod lookup;
pub mod normalize;
pub mod query;

// Re-export commonly used types
pub use assistant::{LookupPolicy, MediGuide};
pub use client::{ClientConfig, LabelFetch, LookupError, OpenFdaClient};
pub use label::{LabelResponse, LabelResult, OpenFdaFields};
pub use lookup::{LookupConfig, OpenFdaLookup};
pub use normalize::normalize_label;
pub use query::QueryShape;

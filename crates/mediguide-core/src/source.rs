//! Common interface over resolution strategies.

use std::future::Future;

use crate::models::Resolution;

/// A source that resolves free-text medicine queries.
///
/// Implemented by the offline [`StaticCatalog`](crate::StaticCatalog), by
/// the remote label lookup, and by their composition, so callers depend on
/// one contract regardless of strategy. Transport failures never cross this
/// boundary; they collapse into the [`Resolution`] outcome.
pub trait MedicineSource {
    /// Resolve a free-text query to a record or an explicit not-found.
    fn lookup(&self, query: &str) -> impl Future<Output = Resolution> + Send;
}

//! Sequential fallback search over the label database.
//!
//! Attempts run strictly one at a time — candidate terms in expansion
//! order, each against every [`QueryShape`] in priority order — so at most
//! one request is in flight per query. The first non-empty result set wins;
//! there is no scoring. Worst case is `terms × 3` attempts, which is why
//! the whole sequence runs under an overall deadline.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use mediguide_core::text::normalize_query;
use mediguide_core::{AliasTable, MedicineSource, Resolution};

use crate::client::LabelFetch;
use crate::normalize::normalize_label;
use crate::query::{prefix_expression, QueryShape};

/// Result limit for resolution attempts.
const RESOLVE_LIMIT: usize = 1;

/// Result limit for suggestion lookups.
const SUGGEST_LIMIT: usize = 5;

/// Minimum partial-query length for suggestions.
const SUGGEST_MIN_CHARS: usize = 2;

/// Search configuration.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Overall deadline for one query's full attempt sequence.
    pub query_deadline: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            query_deadline: Duration::from_secs(30),
        }
    }
}

/// Remote lookup over any [`LabelFetch`] transport.
#[derive(Debug, Clone)]
pub struct OpenFdaLookup<F> {
    fetcher: F,
    aliases: AliasTable,
    config: LookupConfig,
}

impl<F: LabelFetch + Sync> OpenFdaLookup<F> {
    /// Lookup with the builtin alias table and default configuration.
    pub fn new(fetcher: F) -> Self {
        Self::with_parts(fetcher, AliasTable::builtin(), LookupConfig::default())
    }

    /// Lookup over explicit parts.
    pub fn with_parts(fetcher: F, aliases: AliasTable, config: LookupConfig) -> Self {
        Self {
            fetcher,
            aliases,
            config,
        }
    }

    /// Resolve a query against the label database.
    ///
    /// Individual attempt failures are logged and skipped, never surfaced;
    /// the outcome carries only whether any of them happened. Past the
    /// deadline, remaining attempts are abandoned and the query reports
    /// not-found on a degraded path.
    pub async fn search(&self, query: &str) -> Resolution {
        match tokio::time::timeout(self.config.query_deadline, self.search_terms(query)).await {
            Ok(resolution) => resolution,
            Err(_) => {
                warn!(
                    query,
                    deadline_secs = self.config.query_deadline.as_secs(),
                    "label search deadline expired"
                );
                Resolution::NotFound { degraded: true }
            }
        }
    }

    async fn search_terms(&self, query: &str) -> Resolution {
        let mut degraded = false;

        for term in self.aliases.expand(query) {
            for shape in QueryShape::ALL {
                let search = shape.expression(&term);
                match self.fetcher.fetch_label(&search, RESOLVE_LIMIT).await {
                    Ok(response) => {
                        if let Some(first) = response.results.first() {
                            return Resolution::Found(normalize_label(first, query));
                        }
                        debug!(term = %term, shape = ?shape, "label attempt returned no results");
                    }
                    Err(error) => {
                        warn!(term = %term, shape = ?shape, error = %error, "label attempt failed");
                        degraded = true;
                    }
                }
            }
        }

        Resolution::NotFound { degraded }
    }

    /// Display-name suggestions for a partial query.
    ///
    /// One prefix search; brand then generic names collected across the
    /// results, deduplicated, capped at five. Short input or any failure
    /// yields an empty list.
    pub async fn suggestions(&self, partial: &str) -> Vec<String> {
        let normalized = normalize_query(partial);
        if normalized.chars().count() < SUGGEST_MIN_CHARS {
            return Vec::new();
        }

        let search = prefix_expression(&normalized);
        let response = match self.fetcher.fetch_label(&search, SUGGEST_LIMIT).await {
            Ok(response) => response,
            Err(error) => {
                debug!(partial = %normalized, error = %error, "suggestion lookup failed");
                return Vec::new();
            }
        };

        let mut seen = std::collections::HashSet::new();
        let mut suggestions = Vec::new();
        for result in &response.results {
            let names = [
                result.openfda.brand_name.first(),
                result.openfda.generic_name.first(),
            ];
            for name in names.into_iter().flatten() {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                if seen.insert(name.to_ascii_lowercase()) {
                    suggestions.push(name.to_string());
                }
            }
        }
        suggestions.truncate(SUGGEST_LIMIT);
        suggestions
    }
}

impl<F: LabelFetch + Sync> MedicineSource for OpenFdaLookup<F> {
    fn lookup(&self, query: &str) -> impl Future<Output = Resolution> + Send {
        self.search(query)
    }
}

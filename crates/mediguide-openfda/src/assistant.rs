//! The composed lookup assistant.
//!
//! Ties the offline catalog and the remote label lookup together behind a
//! single asynchronous entry point and renders the chat copy for each
//! outcome. The presentation layer calls [`MediGuide::ask`] with a raw
//! string and never sees a transport error.

use std::future::Future;

use mediguide_core::{MedicineSource, Resolution, StaticCatalog};

use crate::client::{LabelFetch, LookupError, OpenFdaClient};
use crate::lookup::OpenFdaLookup;

/// Which strategies a query runs through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Offline catalog only.
    StaticOnly,
    /// Remote label database only.
    RemoteOnly,
    /// Catalog first as the fast offline path, remote on a miss.
    #[default]
    StaticFirst,
}

/// Caller-facing assistant over both resolution strategies.
#[derive(Debug, Clone)]
pub struct MediGuide<F = OpenFdaClient> {
    catalog: StaticCatalog,
    remote: OpenFdaLookup<F>,
    policy: LookupPolicy,
}

impl MediGuide<OpenFdaClient> {
    /// Assistant over the live endpoint with builtin tables and the
    /// default policy.
    pub fn new() -> Result<Self, LookupError> {
        Ok(Self::with_parts(
            StaticCatalog::builtin(),
            OpenFdaLookup::new(OpenFdaClient::new()?),
            LookupPolicy::default(),
        ))
    }
}

impl<F: LabelFetch + Sync> MediGuide<F> {
    /// Assistant over explicit parts.
    pub fn with_parts(
        catalog: StaticCatalog,
        remote: OpenFdaLookup<F>,
        policy: LookupPolicy,
    ) -> Self {
        Self {
            catalog,
            remote,
            policy,
        }
    }

    /// Resolve a free-text query according to the configured policy.
    pub async fn ask(&self, query: &str) -> Resolution {
        match self.policy {
            LookupPolicy::StaticOnly => self.catalog.lookup(query).await,
            LookupPolicy::RemoteOnly => self.remote.search(query).await,
            LookupPolicy::StaticFirst => {
                let offline = self.catalog.lookup(query).await;
                if offline.is_found() {
                    offline
                } else {
                    self.remote.search(query).await
                }
            }
        }
    }

    /// Chat copy for an outcome.
    ///
    /// The two not-found variants stay distinct: nothing matched versus
    /// the database being unreachable.
    pub fn reply(&self, query: &str, resolution: &Resolution) -> String {
        match resolution {
            Resolution::Found(record) => {
                format!("Here's the information about {}:", record.name)
            }
            Resolution::NotFound { degraded: true } => format!(
                "I'm having trouble reaching the medicine database while looking up \"{query}\". \
                 Please check your connection and try again."
            ),
            Resolution::NotFound { degraded: false } => format!(
                "I couldn't find specific information about \"{query}\". Please try searching \
                 for common medicines like {}. You can also ask me general questions about \
                 medicine usage.",
                example_names(&self.catalog)
            ),
        }
    }
}

impl<F: LabelFetch + Sync> MedicineSource for MediGuide<F> {
    fn lookup(&self, query: &str) -> impl Future<Output = Resolution> + Send {
        self.ask(query)
    }
}

/// Up to five catalog display names as an "A, B, C, D, or E" list.
fn example_names(catalog: &StaticCatalog) -> String {
    let names: Vec<String> = catalog.display_names().into_iter().take(5).collect();
    match names.as_slice() {
        [] => "Paracetamol or Ibuprofen".to_string(),
        [only] => only.clone(),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}

//! End-to-end tests for the remote lookup flow.
//!
//! The transport is scripted through the [`LabelFetch`] seam, so these
//! exercise the real search loop — expansion order, shape priority,
//! first-match-wins, failure recovery, deadlines — without a network.

use std::collections::VecDeque;
use std::future::{ready, Future};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use mediguide_core::aliases::AliasEntry;
use mediguide_core::{AliasTable, MedicineSource, Resolution, StaticCatalog};
use mediguide_openfda::{
    LabelFetch, LabelResponse, LookupConfig, LookupError, LookupPolicy, MediGuide, OpenFdaLookup,
    QueryShape,
};

/// One recorded fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Attempt {
    search: String,
    limit: usize,
}

#[derive(Default)]
struct ScriptState {
    responses: Mutex<VecDeque<Result<LabelResponse, LookupError>>>,
    attempts: Mutex<Vec<Attempt>>,
}

/// Scripted transport: pops one outcome per attempt, records every call.
/// An exhausted script keeps returning empty result sets.
#[derive(Clone, Default)]
struct ScriptedFetch {
    state: Arc<ScriptState>,
}

impl ScriptedFetch {
    fn new(responses: Vec<Result<LabelResponse, LookupError>>) -> Self {
        Self {
            state: Arc::new(ScriptState {
                responses: Mutex::new(responses.into()),
                attempts: Mutex::new(Vec::new()),
            }),
        }
    }

    fn attempts(&self) -> Vec<Attempt> {
        self.state.attempts.lock().unwrap().clone()
    }

    fn attempt_count(&self) -> usize {
        self.state.attempts.lock().unwrap().len()
    }
}

impl LabelFetch for ScriptedFetch {
    fn fetch_label(
        &self,
        search: &str,
        limit: usize,
    ) -> impl Future<Output = Result<LabelResponse, LookupError>> + Send {
        self.state.attempts.lock().unwrap().push(Attempt {
            search: search.to_string(),
            limit,
        });
        let outcome = self
            .state
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(LabelResponse::default()));
        ready(outcome)
    }
}

/// Transport that never answers inside any reasonable deadline.
#[derive(Clone)]
struct SlowFetch;

impl LabelFetch for SlowFetch {
    fn fetch_label(
        &self,
        _search: &str,
        _limit: usize,
    ) -> impl Future<Output = Result<LabelResponse, LookupError>> + Send {
        async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(LabelResponse::default())
        }
    }
}

fn advil_response() -> LabelResponse {
    serde_json::from_value(json!({
        "results": [{
            "openfda": {
                "brand_name": ["Advil"],
                "generic_name": ["Ibuprofen"]
            },
            "purpose": ["Pain reliever. Fever reducer."]
        }]
    }))
    .unwrap()
}

fn transport_error() -> LookupError {
    LookupError::Api("connection reset".into())
}

fn lookup_with(fetch: ScriptedFetch, aliases: AliasTable) -> OpenFdaLookup<ScriptedFetch> {
    OpenFdaLookup::with_parts(fetch, aliases, LookupConfig::default())
}

#[tokio::test]
async fn test_first_shape_hit_wins_immediately() {
    let fetch = ScriptedFetch::new(vec![Ok(advil_response())]);
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    let resolution = lookup.search("advil").await;

    let record = resolution.record().expect("should resolve");
    assert_eq!(record.name, "Advil (Ibuprofen)");

    let attempts = fetch.attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].search, QueryShape::Exact.expression("advil"));
    assert_eq!(attempts[0].limit, 1);
}

#[tokio::test]
async fn test_search_widens_across_shapes_then_terms() {
    // rimadyl expands to [rimadyl, carprofen, novox]; the first term's three
    // shapes come up empty, so the hit lands on carprofen's exact shape.
    let aliases = AliasTable::with_entries(vec![AliasEntry {
        key: "carprofen".into(),
        aliases: vec!["rimadyl".into(), "novox".into()],
    }]);
    let fetch = ScriptedFetch::new(vec![
        Ok(LabelResponse::default()),
        Ok(LabelResponse::default()),
        Ok(LabelResponse::default()),
        Ok(advil_response()),
    ]);
    let lookup = lookup_with(fetch.clone(), aliases);

    let resolution = lookup.search("rimadyl").await;
    assert!(resolution.is_found());

    let attempts = fetch.attempts();
    assert_eq!(attempts.len(), 4);
    assert_eq!(attempts[0].search, QueryShape::Exact.expression("rimadyl"));
    assert_eq!(attempts[1].search, QueryShape::Broad.expression("rimadyl"));
    assert_eq!(
        attempts[2].search,
        QueryShape::Substance.expression("rimadyl")
    );
    assert_eq!(
        attempts[3].search,
        QueryShape::Exact.expression("carprofen")
    );
}

#[tokio::test]
async fn test_nonsense_query_exhausts_all_shapes_cleanly() {
    // No alias entry matches, so the term list is just the query itself:
    // three attempts, all empty, no failures.
    let fetch = ScriptedFetch::new(Vec::new());
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    let resolution = lookup.search("floopazine").await;

    assert_eq!(resolution, Resolution::NotFound { degraded: false });
    assert_eq!(fetch.attempt_count(), 3);
}

#[tokio::test]
async fn test_transport_failures_are_recovered_and_flagged() {
    let fetch = ScriptedFetch::new(vec![
        Err(transport_error()),
        Err(transport_error()),
        Err(transport_error()),
    ]);
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    let resolution = lookup.search("floopazine").await;

    assert_eq!(resolution, Resolution::NotFound { degraded: true });
    assert_eq!(fetch.attempt_count(), 3);
}

#[tokio::test]
async fn test_failed_attempt_does_not_abort_the_search() {
    let fetch = ScriptedFetch::new(vec![Err(transport_error()), Ok(advil_response())]);
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    let resolution = lookup.search("floopazine").await;

    assert!(resolution.is_found());
    assert_eq!(fetch.attempt_count(), 2);
}

#[tokio::test]
async fn test_mixed_empty_and_failed_attempts_flag_degraded() {
    let fetch = ScriptedFetch::new(vec![
        Ok(LabelResponse::default()),
        Err(transport_error()),
        Ok(LabelResponse::default()),
    ]);
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    let resolution = lookup.search("floopazine").await;

    assert_eq!(resolution, Resolution::NotFound { degraded: true });
}

#[tokio::test]
async fn test_deadline_abandons_remaining_attempts() {
    let lookup = OpenFdaLookup::with_parts(
        SlowFetch,
        AliasTable::builtin(),
        LookupConfig {
            query_deadline: Duration::from_millis(50),
        },
    );

    let resolution = lookup.search("paracetamol").await;

    assert_eq!(resolution, Resolution::NotFound { degraded: true });
}

#[tokio::test]
async fn test_suggestions_dedupe_brand_and_generic_names() {
    let response: LabelResponse = serde_json::from_value(json!({
        "results": [
            { "openfda": { "brand_name": ["Tylenol"], "generic_name": ["Acetaminophen"] } },
            { "openfda": { "brand_name": ["Tylenol PM"], "generic_name": ["ACETAMINOPHEN"] } }
        ]
    }))
    .unwrap();
    let fetch = ScriptedFetch::new(vec![Ok(response)]);
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    let suggestions = lookup.suggestions("Ty").await;

    assert_eq!(suggestions, vec!["Tylenol", "Acetaminophen", "Tylenol PM"]);
    let attempts = fetch.attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].search, "openfda.brand_name:ty*");
    assert_eq!(attempts[0].limit, 5);
}

#[tokio::test]
async fn test_suggestions_cap_at_five() {
    let response: LabelResponse = serde_json::from_value(json!({
        "results": [
            { "openfda": { "brand_name": ["A1"], "generic_name": ["G1"] } },
            { "openfda": { "brand_name": ["A2"], "generic_name": ["G2"] } },
            { "openfda": { "brand_name": ["A3"], "generic_name": ["G3"] } }
        ]
    }))
    .unwrap();
    let fetch = ScriptedFetch::new(vec![Ok(response)]);
    let lookup = lookup_with(fetch, AliasTable::builtin());

    let suggestions = lookup.suggestions("an").await;
    assert_eq!(suggestions.len(), 5);
}

#[tokio::test]
async fn test_suggestions_short_input_skips_the_network() {
    let fetch = ScriptedFetch::new(Vec::new());
    let lookup = lookup_with(fetch.clone(), AliasTable::builtin());

    assert!(lookup.suggestions("t").await.is_empty());
    assert!(lookup.suggestions("  ").await.is_empty());
    assert_eq!(fetch.attempt_count(), 0);
}

#[tokio::test]
async fn test_suggestions_swallow_failures() {
    let fetch = ScriptedFetch::new(vec![Err(transport_error())]);
    let lookup = lookup_with(fetch, AliasTable::builtin());

    assert!(lookup.suggestions("tylenol").await.is_empty());
}

#[tokio::test]
async fn test_static_first_policy_prefers_the_catalog() {
    let fetch = ScriptedFetch::new(Vec::new());
    let guide = MediGuide::with_parts(
        StaticCatalog::builtin(),
        lookup_with(fetch.clone(), AliasTable::builtin()),
        LookupPolicy::StaticFirst,
    );

    let resolution = guide.ask("paracetamol").await;

    assert_eq!(
        resolution.record().unwrap().name,
        "Paracetamol (Acetaminophen)"
    );
    assert_eq!(fetch.attempt_count(), 0);
}

#[tokio::test]
async fn test_static_first_policy_falls_back_to_remote() {
    let fetch = ScriptedFetch::new(vec![Ok(advil_response())]);
    let guide = MediGuide::with_parts(
        StaticCatalog::builtin(),
        lookup_with(fetch.clone(), AliasTable::builtin()),
        LookupPolicy::StaticFirst,
    );

    let resolution = guide.ask("floopazine").await;

    assert!(resolution.is_found());
    assert_eq!(fetch.attempt_count(), 1);
}

#[tokio::test]
async fn test_static_only_policy_never_touches_the_network() {
    let fetch = ScriptedFetch::new(Vec::new());
    let guide = MediGuide::with_parts(
        StaticCatalog::builtin(),
        lookup_with(fetch.clone(), AliasTable::builtin()),
        LookupPolicy::StaticOnly,
    );

    let resolution = guide.ask("floopazine").await;

    assert_eq!(resolution, Resolution::NotFound { degraded: false });
    assert_eq!(fetch.attempt_count(), 0);
}

#[tokio::test]
async fn test_remote_only_policy_skips_the_catalog() {
    // "paracetamol" would hit the catalog; remote-only goes to the wire,
    // trying every expanded term (paracetamol, acetaminophen, tylenol).
    let fetch = ScriptedFetch::new(Vec::new());
    let guide = MediGuide::with_parts(
        StaticCatalog::builtin(),
        lookup_with(fetch.clone(), AliasTable::builtin()),
        LookupPolicy::RemoteOnly,
    );

    let resolution = guide.ask("paracetamol").await;

    assert_eq!(resolution, Resolution::NotFound { degraded: false });
    assert_eq!(fetch.attempt_count(), 9);
}

#[tokio::test]
async fn test_reply_copy_covers_all_outcomes() {
    let fetch = ScriptedFetch::new(Vec::new());
    let guide = MediGuide::with_parts(
        StaticCatalog::builtin(),
        lookup_with(fetch, AliasTable::builtin()),
        LookupPolicy::StaticOnly,
    );

    let found = guide.ask("ibuprofen").await;
    assert_eq!(
        guide.reply("ibuprofen", &found),
        "Here's the information about Ibuprofen:"
    );

    let not_found = Resolution::NotFound { degraded: false };
    let reply = guide.reply("floopazine", &not_found);
    assert!(reply.contains("couldn't find specific information about \"floopazine\""));
    assert!(reply.contains("Paracetamol, Ibuprofen, Aspirin, Amoxicillin, or Omeprazole"));

    let degraded = Resolution::NotFound { degraded: true };
    let reply = guide.reply("aspirin", &degraded);
    assert!(reply.contains("trouble reaching the medicine database"));
    assert!(reply.contains("try again"));
}

#[tokio::test]
async fn test_assistant_is_usable_through_the_source_trait() {
    async fn resolve_via<S: MedicineSource>(source: &S, query: &str) -> Resolution {
        source.lookup(query).await
    }

    let fetch = ScriptedFetch::new(Vec::new());
    let guide = MediGuide::with_parts(
        StaticCatalog::builtin(),
        lookup_with(fetch, AliasTable::builtin()),
        LookupPolicy::StaticOnly,
    );

    let resolution = resolve_via(&guide, "aspirin").await;
    assert!(resolution.is_found());
}

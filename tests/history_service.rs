//! Integration tests for `HistoryService` over in-memory and mocked sources.

use std::{io, sync::Arc};

use async_trait::async_trait;
use docent::transcript::{
    adapters::memory::InMemoryHistorySource,
    config::TranscriptConfig,
    domain::{PersistedEvent, Role},
    error::{HistoryError, ReconstructionError, SourceError},
    ports::history::{HistorySource, SourceResult},
    services::HistoryService,
};
use mockable::DefaultClock;
use mockall::mock;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mock! {
    Source {}

    #[async_trait]
    impl HistorySource for Source {
        async fn fetch_events(&self) -> SourceResult<Vec<PersistedEvent>>;
    }
}

/// Provides a tokio runtime for async operations in tests.
#[fixture]
fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

fn sample_events() -> Vec<PersistedEvent> {
    vec![
        PersistedEvent::new("2", "s", r#"{"type":"ai","data":{"content":"Hello"}}"#),
        PersistedEvent::new("1", "s", r#"{"type":"human","data":{"content":"Hi"}}"#),
        PersistedEvent::new("3", "s", "{oops"),
    ]
}

// ============================================================================
// In-memory source
// ============================================================================

#[rstest]
fn load_reconstructs_fetched_history(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime");
    let source = Arc::new(InMemoryHistorySource::with_events(sample_events()));
    let service = HistoryService::new(source);

    let transcript = rt.block_on(service.load()).expect("history loads");

    let ids: Vec<&str> = transcript
        .messages()
        .iter()
        .map(|m| m.id().as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[rstest]
fn load_of_empty_source_is_empty(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime");
    let service = HistoryService::new(Arc::new(InMemoryHistorySource::new()));

    let transcript = rt.block_on(service.load()).expect("history loads");

    assert!(transcript.is_empty());
}

#[rstest]
fn load_applies_configuration(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime");
    let config = TranscriptConfig {
        human_discriminants: vec!["ai".to_owned()],
        failure_reply: "Unavailable.".to_owned(),
    };
    let source = Arc::new(InMemoryHistorySource::with_events(sample_events()));
    let service = HistoryService::with_config(source, config);

    let mut transcript = rt.block_on(service.load()).expect("history loads");

    let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role()).collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User]);

    transcript.record_failure(&DefaultClock);
    assert_eq!(
        transcript.last().map(|m| m.content()),
        Some("Unavailable.")
    );
}

#[rstest]
fn load_reports_duplicate_ids(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime");
    let source = Arc::new(InMemoryHistorySource::with_events(vec![
        PersistedEvent::new("1", "s", r#"{"type":"human"}"#),
        PersistedEvent::new("1", "s", r#"{"type":"ai"}"#),
    ]));
    let service = HistoryService::new(source);

    let result = rt.block_on(service.load());

    assert!(matches!(
        result,
        Err(HistoryError::Reconstruction(
            ReconstructionError::DuplicateEventId { .. }
        ))
    ));
}

// ============================================================================
// Mocked source
// ============================================================================

#[rstest]
#[case::unauthorised(SourceError::Unauthorized)]
#[case::unavailable(SourceError::unavailable("connection refused"))]
fn load_propagates_source_errors(runtime: io::Result<Runtime>, #[case] error: SourceError) {
    let rt = runtime.expect("runtime");
    let mut source = MockSource::new();
    let returned = error.clone();
    source
        .expect_fetch_events()
        .times(1)
        .returning(move || Err(returned.clone()));
    let service = HistoryService::new(Arc::new(source));

    let result = rt.block_on(service.load());

    assert_eq!(result.err(), Some(HistoryError::Source(error)));
}

#[rstest]
fn load_fetches_once_per_call(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime");
    let mut source = MockSource::new();
    source
        .expect_fetch_events()
        .times(2)
        .returning(|| Ok(sample_events()));
    let service = HistoryService::new(Arc::new(source));

    let first = rt.block_on(service.load()).expect("first load");
    let second = rt.block_on(service.load()).expect("second load");

    assert_eq!(first, second);
}

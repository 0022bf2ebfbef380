//! Unit tests for the `Transcript` aggregate.

use crate::transcript::{
    domain::{
        DEFAULT_FAILURE_REPLY, Message, PersistedEvent, QueryReply, Role, ToolInvocation,
        Transcript,
    },
    error::{DecodeError, TranscriptError},
    services::reconstruct,
};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn transcript() -> Transcript {
    Transcript::new()
}

fn roles(transcript: &Transcript) -> Vec<Role> {
    transcript.messages().iter().map(Message::role).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_transcript_is_empty() {
    let transcript = Transcript::new();

    assert!(transcript.is_empty());
    assert_eq!(transcript.len(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn default_matches_new() {
    assert_eq!(Transcript::default(), Transcript::new());
}

#[test]
fn from_messages_keeps_reconstructed_order() {
    let events = vec![
        PersistedEvent::new("2", "s", r#"{"type":"ai","content":"a"}"#),
        PersistedEvent::new("1", "s", r#"{"type":"human","content":"q"}"#),
    ];
    let messages = reconstruct(&events).expect("well-formed batch");

    let transcript = Transcript::from_messages(messages);

    assert_eq!(roles(&transcript), vec![Role::User, Role::Assistant]);
    assert_eq!(transcript.last().map(|m| m.id().as_str()), Some("2"));
}

// ============================================================================
// push_user
// ============================================================================

#[rstest]
fn push_user_trims_and_appends(mut transcript: Transcript, clock: DefaultClock) {
    let before = Utc::now();

    let id = transcript
        .push_user("  What is chapter 2 about?\n", &clock)
        .expect("non-empty query");

    let message = transcript.last().expect("appended message");
    assert_eq!(message.id(), &id);
    assert_eq!(message.role(), Role::User);
    assert_eq!(message.content(), "What is chapter 2 about?");
    assert!(message.tool_calls().is_empty());
    assert!(message.sent_at().is_some_and(|sent_at| sent_at >= before));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn push_user_rejects_blank_queries(
    mut transcript: Transcript,
    clock: DefaultClock,
    #[case] query: &str,
) {
    assert_eq!(
        transcript.push_user(query, &clock),
        Err(TranscriptError::EmptyQuery)
    );
    assert!(transcript.is_empty());
}

#[rstest]
fn appended_messages_get_distinct_ids(mut transcript: Transcript, clock: DefaultClock) {
    let first = transcript.push_user("one", &clock).expect("non-empty query");
    let second = transcript.push_user("two", &clock).expect("non-empty query");

    assert_ne!(first, second);
}

// ============================================================================
// Replies and failures
// ============================================================================

#[rstest]
fn record_reply_appends_answer_and_tool_calls(mut transcript: Transcript, clock: DefaultClock) {
    let calls = vec![ToolInvocation::new("RAGRetriever", json!({"query": "x"}))];
    transcript.push_user("q", &clock).expect("non-empty query");

    transcript.record_reply(QueryReply::new("**Answer**", calls.clone()), &clock);

    let reply = transcript.last().expect("reply");
    assert!(reply.is_assistant());
    assert_eq!(reply.content(), "**Answer**");
    assert_eq!(reply.tool_calls(), calls.as_slice());
    assert_eq!(roles(&transcript), vec![Role::User, Role::Assistant]);
}

#[rstest]
fn record_failure_uses_default_text(mut transcript: Transcript, clock: DefaultClock) {
    transcript.record_failure(&clock);

    let failure = transcript.last().expect("failure reply");
    assert_eq!(failure.role(), Role::Assistant);
    assert_eq!(failure.content(), DEFAULT_FAILURE_REPLY);
    assert!(failure.tool_calls().is_empty());
}

#[rstest]
fn record_failure_uses_configured_text(clock: DefaultClock) {
    let mut transcript = Transcript::new().with_failure_reply("Try later.");

    transcript.record_failure(&clock);

    assert_eq!(transcript.last().map(Message::content), Some("Try later."));
}

#[rstest]
#[case::reply(Ok(QueryReply::new("fine", Vec::new())), "fine")]
#[case::server_error(Err(DecodeError::ServerReported("quota".to_owned())), DEFAULT_FAILURE_REPLY)]
#[case::malformed(Err(DecodeError::malformed("eof")), DEFAULT_FAILURE_REPLY)]
fn record_outcome_falls_back_on_error(
    mut transcript: Transcript,
    clock: DefaultClock,
    #[case] outcome: Result<QueryReply, DecodeError>,
    #[case] expected: &str,
) {
    let id = transcript.record_outcome(outcome, &clock);

    let message = transcript.last().expect("assistant message");
    assert_eq!(message.id(), &id);
    assert!(message.is_assistant());
    assert_eq!(message.content(), expected);
}

// ============================================================================
// clear
// ============================================================================

#[rstest]
fn clear_removes_all_messages(mut transcript: Transcript, clock: DefaultClock) {
    transcript.push_user("q", &clock).expect("non-empty query");
    transcript.record_failure(&clock);

    transcript.clear();

    assert!(transcript.is_empty());
}

#[rstest]
fn clear_keeps_failure_reply(clock: DefaultClock) {
    let mut transcript = Transcript::new().with_failure_reply("custom");
    transcript.clear();

    transcript.record_failure(&clock);

    assert_eq!(transcript.last().map(Message::content), Some("custom"));
}

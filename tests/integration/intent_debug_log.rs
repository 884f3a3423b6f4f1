use anyhow::Result;
use serde_json::Map;
use ssmlbase::chat::{ConversationTurns, IntentDispatcher, IntentOutcome, IntentRequest};
use ssmlbase::log::IntentLog;
use std::fs;
use std::thread;

use crate::IntegrationHarness;

#[test]
fn debug_log_records_turns_and_rejections() -> Result<()> {
    let harness = IntegrationHarness::new();
    let log = IntentLog::open(harness.workspace_path().join("logs").join("intents.jsonl"))?;
    let dispatcher = IntentDispatcher::shared().with_log(log.clone());

    let mut turns = ConversationTurns::new();
    let request = IntentRequest::with_params("Choose Example", [("element", "sub")]);
    let dispatched = dispatcher.dispatch(&request, &mut turns)?;
    assert!(dispatched.log_error.is_none());
    assert!(dispatcher
        .dispatch_named("Order Pizza", Map::new(), &mut turns)
        .is_err());

    let records = log.read_all()?;
    assert_eq!(records.len(), 2, "Expected answered and rejected records: {records:?}");
    assert_eq!(records[0].request_id, request.request_id);
    assert_eq!(records[0].outcome, IntentOutcome::Answered);
    assert_eq!(records[0].turns, turns.turns());
    assert_eq!(records[1].intent, "Order Pizza");
    assert_eq!(records[1].outcome, IntentOutcome::Rejected);
    assert!(records[1].turns.is_empty());
    Ok(())
}

#[test]
fn concurrent_dispatches_keep_one_record_per_line() -> Result<()> {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 300;

    let harness = IntegrationHarness::new();
    let log = IntentLog::open(harness.workspace_path().join("logs").join("intents.jsonl"))?;
    let dispatcher = IntentDispatcher::shared().with_log(log.clone());

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let dispatcher = &dispatcher;
            scope.spawn(move || {
                for _ in 0..PER_THREAD {
                    let mut turns = ConversationTurns::new();
                    let dispatched = dispatcher
                        .dispatch_named("Welcome", Map::new(), &mut turns)
                        .expect("welcome dispatches");
                    assert!(dispatched.log_error.is_none());
                    assert_eq!(turns.len(), 2);
                }
            });
        }
    });

    let records = log.read_all()?;
    assert_eq!(records.len(), THREADS * PER_THREAD);
    assert!(records
        .iter()
        .all(|record| record.intent == "Welcome" && record.turns.len() == 2));
    Ok(())
}

#[test]
fn failed_log_write_still_answers() -> Result<()> {
    let harness = IntegrationHarness::new();
    let log_path = harness.workspace_path().join("logs").join("intents.jsonl");
    let log = IntentLog::open(&log_path)?;
    fs::remove_file(&log_path)?;
    fs::create_dir(&log_path)?;
    let dispatcher = IntentDispatcher::shared().with_log(log);

    let mut turns = ConversationTurns::new();
    let dispatched = dispatcher.dispatch_named("Welcome", Map::new(), &mut turns)?;
    assert_eq!(dispatched.outcome, IntentOutcome::Answered);
    assert_eq!(turns.len(), 2, "Turns should still be spoken: {turns:?}");
    let err = dispatched.log_error.expect("log write into a directory fails");
    assert!(err.to_string().contains("intent log"), "{err:#}");
    Ok(())
}

use ssmlbase::chat::{ConversationTurns, IntentDispatcher, IntentOutcome, IntentRequest};
use std::path::Path;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }
}

/// Dispatches one request against the shared catalog and returns the turns.
pub fn run_intent(request: &IntentRequest) -> (IntentOutcome, Vec<String>) {
    let dispatcher = IntentDispatcher::shared();
    let mut turns = ConversationTurns::new();
    let dispatched = dispatcher
        .dispatch(request, &mut turns)
        .expect("standard intents dispatch");
    (dispatched.outcome, turns.into_turns())
}

mod config_workspace;
mod intent_choose_example;
mod intent_debug_log;
mod intent_welcome_fallback;

use super::payload::IntentRequest;
use super::registry::IntentRegistry;
use super::IntentOutcome;
use crate::catalog::ResponseCatalog;
use crate::chat::Conversation;
use crate::log::{IntentLog, IntentLogRecord};
use anyhow::{bail, Result};
use serde_json::{Map, Value};

/// A handled intent. The turns are already spoken when this is returned, so a
/// failed intent log write is reported alongside the outcome instead of
/// replacing it.
#[derive(Debug)]
pub struct Dispatched {
    pub outcome: IntentOutcome,
    pub log_error: Option<anyhow::Error>,
}

/// Routes intent requests to their handlers against a read-only catalog.
///
/// Holds no mutable state, so one dispatcher can serve concurrent requests.
#[derive(Clone)]
pub struct IntentDispatcher<'a> {
    catalog: &'a ResponseCatalog,
    registry: IntentRegistry,
    log: Option<IntentLog>,
}

impl<'a> IntentDispatcher<'a> {
    pub fn new(catalog: &'a ResponseCatalog) -> Self {
        Self::with_registry(catalog, IntentRegistry::standard())
    }

    pub fn with_registry(catalog: &'a ResponseCatalog, registry: IntentRegistry) -> Self {
        Self {
            catalog,
            registry,
            log: None,
        }
    }

    /// Records every dispatch, including rejected ones, in `log`.
    pub fn with_log(mut self, log: IntentLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        self.catalog
    }

    pub fn intents(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn dispatch(
        &self,
        request: &IntentRequest,
        conv: &mut dyn Conversation,
    ) -> Result<Dispatched> {
        let Some(handler) = self.registry.get(&request.intent) else {
            // The unknown intent is the error worth reporting; a failed log
            // write for it is dropped.
            let _ = self.record(request, IntentOutcome::Rejected, Vec::new());
            bail!("No handler registered for intent `{}`", request.intent);
        };
        if self.log.is_none() {
            return Ok(Dispatched {
                outcome: handler(self.catalog, request, conv),
                log_error: None,
            });
        }
        let mut recorder = RecordingConversation {
            inner: conv,
            turns: Vec::new(),
        };
        let outcome = handler(self.catalog, request, &mut recorder);
        let log_error = self.record(request, outcome, recorder.turns).err();
        Ok(Dispatched { outcome, log_error })
    }

    pub fn dispatch_named(
        &self,
        intent: &str,
        parameters: Map<String, Value>,
        conv: &mut dyn Conversation,
    ) -> Result<Dispatched> {
        self.dispatch(&IntentRequest::new(intent, parameters), conv)
    }

    fn record(
        &self,
        request: &IntentRequest,
        outcome: IntentOutcome,
        turns: Vec<String>,
    ) -> Result<()> {
        match &self.log {
            Some(log) => log.append(&IntentLogRecord::new(request, outcome, turns)),
            None => Ok(()),
        }
    }
}

impl IntentDispatcher<'static> {
    /// Dispatcher over the process-wide catalog.
    pub fn shared() -> Self {
        Self::new(ResponseCatalog::shared())
    }
}

struct RecordingConversation<'c> {
    inner: &'c mut dyn Conversation,
    turns: Vec<String>,
}

impl Conversation for RecordingConversation<'_> {
    fn ask(&mut self, turn: String) {
        self.turns.push(turn.clone());
        self.inner.ask(turn);
    }
}

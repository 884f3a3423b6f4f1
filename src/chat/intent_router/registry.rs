//! Intent handler table.

use super::handlers;
use super::payload::IntentRequest;
use super::IntentOutcome;
use crate::catalog::ResponseCatalog;
use crate::chat::Conversation;
use anyhow::{bail, Result};
use std::collections::HashMap;

/// Handler invoked for one intent name.
pub type IntentHandler =
    fn(&ResponseCatalog, &IntentRequest, &mut dyn Conversation) -> IntentOutcome;

/// Intents answered by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Welcome,
    Fallback,
    ChooseExample,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::Welcome, Intent::Fallback, Intent::ChooseExample];

    /// Name the platform uses for the intent.
    pub fn name(self) -> &'static str {
        match self {
            Intent::Welcome => "Welcome",
            Intent::Fallback => "Fallback",
            Intent::ChooseExample => "Choose Example",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.name() == name)
    }

    pub fn handler(self) -> IntentHandler {
        match self {
            Intent::Welcome => handlers::welcome,
            Intent::Fallback => handlers::fallback,
            Intent::ChooseExample => handlers::choose_example,
        }
    }
}

/// Registry mapping intent names to handlers. Read-only once built.
#[derive(Clone)]
pub struct IntentRegistry {
    handlers: HashMap<String, IntentHandler>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry holding the `Welcome`, `Fallback` and `Choose Example` handlers.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for intent in Intent::ALL {
            registry.handlers.insert(intent.name().into(), intent.handler());
        }
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, handler: IntentHandler) -> Result<()> {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            bail!("Intent handler for `{}` already registered", name);
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<IntentHandler> {
        self.handlers.get(name).copied()
    }

    /// Registered intent names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

pub mod intent_router;

pub use intent_router::{
    Dispatched, Intent, IntentDispatcher, IntentHandler, IntentOutcome, IntentRegistry,
    IntentRequest, ELEMENT_PARAM,
};

/// Output channel exposed by the conversational platform.
///
/// Each call appends one output turn; turns are spoken in call order.
pub trait Conversation {
    fn ask(&mut self, turn: String);
}

/// In-memory accumulator of output turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationTurns {
    turns: Vec<String>,
}

impl ConversationTurns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[String] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn into_turns(self) -> Vec<String> {
        self.turns
    }
}

impl Conversation for ConversationTurns {
    fn ask(&mut self, turn: String) {
        self.turns.push(turn);
    }
}

impl Conversation for Vec<String> {
    fn ask(&mut self, turn: String) {
        self.push(turn);
    }
}

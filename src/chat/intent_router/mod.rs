pub mod dispatcher;
pub mod handlers;
pub mod payload;
pub mod registry;

pub use dispatcher::{Dispatched, IntentDispatcher};
pub use payload::{IntentRequest, ELEMENT_PARAM};
pub use registry::{Intent, IntentHandler, IntentRegistry};

use serde::{Deserialize, Serialize};

/// How an intent invocation was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentOutcome {
    /// The requested content was spoken.
    Answered,
    /// The apology and the examples list were spoken instead.
    FellBack,
    /// No handler is registered for the intent name; nothing was spoken.
    Rejected,
}

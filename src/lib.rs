pub mod catalog;
pub mod chat;
pub mod config;
pub mod log;
pub mod markup;

// Re-export commonly used types for convenience.
pub use catalog::ResponseCatalog;
pub use chat::{Conversation, ConversationTurns, IntentDispatcher, IntentOutcome, IntentRequest};
pub use config::AppConfig;
pub use markup::{render, Template};

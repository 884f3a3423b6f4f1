//! Intent request definitions handed over by the conversational platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Parameter naming the requested topic on `Choose Example`.
pub const ELEMENT_PARAM: &str = "element";

/// A recognized intent plus the parameters the platform extracted for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    #[serde(default = "Uuid::new_v4")]
    pub request_id: Uuid,
    pub intent: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl IntentRequest {
    pub fn new(intent: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            intent: intent.into(),
            parameters,
            received_at: Utc::now(),
        }
    }

    /// Request carrying only string parameters.
    pub fn with_params<K, V, I>(intent: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let parameters = params
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();
        Self::new(intent, parameters)
    }

    /// Returns the parameter as text when it is set and truthy.
    ///
    /// Missing, `null`, `false`, `0` and empty strings all count as unset.
    /// Only strings are usable as text; other truthy values yield `None`.
    pub fn text_param(&self, key: &str) -> Option<&str> {
        match self.parameters.get(key) {
            Some(value) if is_truthy(value) => value.as_str(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// The standard response wrapper returned for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded body.
    pub body: String,
}

impl Envelope {
    /// Envelope whose body is `{"message": <message>}`.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        let mut body = serde_json::Map::new();
        body.insert("message".to_string(), Value::String(message.into()));
        build_response(status_code, Some(&Value::Object(body)))
    }

    /// Parses the body back into a JSON value.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Builds a response envelope.
///
/// The body is the JSON encoding of `body`, or `{}` when absent. Headers are
/// fixed: JSON content type and a permissive CORS origin.
pub fn build_response(status_code: u16, body: Option<&Value>) -> Envelope {
    let headers = BTreeMap::from([
        ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ]);

    let body = body
        .map(Value::to_string)
        .unwrap_or_else(|| "{}".to_string());

    Envelope {
        status_code,
        headers,
        body,
    }
}

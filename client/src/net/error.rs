//! API error type and banner message extraction.
//!
//! ERROR HANDLING
//! ==============
//! Backends disagree on error bodies. The message shown to the user is taken
//! from the first usable field in `message`, `error`, `detail`, `details`,
//! looking one level into nested objects, and falls back to the serialized body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

const MESSAGE_FIELDS: [&str; 4] = ["message", "error", "detail", "details"];

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{}", response_message(*status, data))]
    Response { status: u16, data: Value },

    /// A success response whose body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),

    /// No HTTP transport outside the browser.
    #[error("API not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a response error from a status and raw body text.
    ///
    /// Bodies that are not JSON are kept as a JSON string.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let data = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()));
        Self::Response { status, data }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Response { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Text for the UI error banner.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

fn response_message(status: u16, data: &Value) -> String {
    format!("Error {status}: {}", extract_message(data))
}

/// Pull a human-readable message out of an error body.
#[must_use]
pub fn extract_message(data: &Value) -> String {
    match data {
        Value::Null => "request failed".to_owned(),
        Value::String(s) if s.trim().is_empty() => "request failed".to_owned(),
        Value::String(s) => s.clone(),
        Value::Object(_) => find_field(data, true).unwrap_or_else(|| data.to_string()),
        other => other.to_string(),
    }
}

fn find_field(data: &Value, descend: bool) -> Option<String> {
    let obj = data.as_object()?;
    // A nested object with no message of its own only wins if no later field does.
    let mut unresolved = None;
    for field in MESSAGE_FIELDS {
        match obj.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => {}
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Object(nested)) if nested.is_empty() => {}
            Some(Value::Array(list)) if list.is_empty() => {}
            Some(nested @ Value::Object(_)) if descend => {
                if let Some(found) = find_field(nested, false) {
                    return Some(found);
                }
                unresolved.get_or_insert_with(|| nested.to_string());
            }
            Some(Value::Object(_)) => {}
            Some(other) => return Some(other.to_string()),
        }
    }
    unresolved
}

//! Error taxonomy for the API client.
//!
//! Every failure is recoverable: pages convert an `ApiError` into an
//! error-message signal and render it. Helpers pull the backend's
//! field-keyed 400 bodies and the review uniqueness violation out of the
//! response body so pages can show them verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// A failed API call.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Transport failure before any HTTP status was received.
    Network(String),
    /// Non-success HTTP status, with the JSON body when one was readable.
    Status { status: u16, body: serde_json::Value },
    /// Response arrived but could not be decoded into the expected shape.
    Decode(String),
    /// Browser-only call made outside the browser (SSR or tests).
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The backend's top-level `detail` message, if the body carries one.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => body
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            _ => None,
        }
    }

    /// `detail` when present, otherwise the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or_else(|| fallback.to_owned())
    }

    /// Field-keyed validation messages from a 400 body, in key order.
    /// Array values are joined with `", "`; scalar values pass through.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        let Self::Status { body, .. } = self else {
            return Vec::new();
        };
        let Some(map) = body.as_object() else {
            return Vec::new();
        };
        map.iter()
            .map(|(key, value)| (key.clone(), join_messages(value)))
            .collect()
    }

    /// Whether this is the backend's one-review-per-user-per-media
    /// uniqueness violation (a 400 whose `non_field_errors` mention the
    /// unique set constraint).
    pub fn is_duplicate_review(&self) -> bool {
        let Self::Status { status: 400, body } = self else {
            return false;
        };
        body.get("non_field_errors")
            .map(join_messages)
            .is_some_and(|msg| msg.contains("unique set"))
    }
}

fn join_messages(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status { status, .. } => write!(f, "request failed: {status}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Unavailable => write!(f, "not available on server"),
        }
    }
}

impl std::error::Error for ApiError {}

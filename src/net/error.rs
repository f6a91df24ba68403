//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! The gateway classifies every failed call into one `ApiError`, shows its
//! `notice_message` once, then returns it. Callers treat any `Err` as already
//! reported and only undo local UI state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("session expired")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("bad request: {}", .detail.as_deref().unwrap_or("no detail"))]
    BadRequest { detail: Option<String> },
    #[error("internal server error")]
    Server,
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("request rejected: {message}")]
    Rejected { code: Option<String>, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Map a non-2xx status and its body to an error. `None` for 2xx.
    pub fn from_status(status: u16, body: &str) -> Option<Self> {
        if (200..300).contains(&status) {
            return None;
        }
        Some(match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 => Self::BadRequest { detail: detail_text(body) },
            500 => Self::Server,
            _ => Self::Status { status, detail: detail_text(body) },
        })
    }

    /// Text for the toast shown when this error is reported.
    pub fn notice_message(&self) -> String {
        match self {
            Self::Unauthorized => "Session expired, please sign in again.".to_owned(),
            Self::Forbidden => "You do not have permission to perform this action.".to_owned(),
            Self::NotFound => "The requested resource was not found.".to_owned(),
            Self::BadRequest { detail: Some(detail) } => format!("Bad request: {detail}"),
            Self::BadRequest { detail: None } => "Bad request.".to_owned(),
            Self::Server => "Server error, please try again later.".to_owned(),
            Self::Status { detail: Some(detail), .. } => format!("Request failed: {detail}"),
            Self::Status { status, detail: None } => format!("Request failed ({status})."),
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => "Network error, please check your connection.".to_owned(),
            Self::Decode(_) => "Unexpected response from server.".to_owned(),
            Self::Encode(_) => "Could not prepare the request.".to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// 500 and every other 5xx.
    pub fn is_server_fault(&self) -> bool {
        match self {
            Self::Server => true,
            Self::Status { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }
}

/// Server-supplied explanation from an error body.
///
/// Reads `detail` (a string, or a list of validation entries whose `msg`
/// fields are joined), falling back to `message`.
pub fn detail_text(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = match value.get("detail") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(entries)) => {
            let parts: Vec<&str> = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(s) => Some(s.as_str()),
                    other => other.get("msg").and_then(Value::as_str),
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
    .or_else(|| value.get("message").and_then(Value::as_str).map(str::to_owned))?;

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

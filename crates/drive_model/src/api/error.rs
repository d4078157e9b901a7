//! Error taxonomy shared by every [`DriveApi`](super::service::DriveApi) adapter.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure of a backend request.
pub enum ApiError {
    /// The session token is missing or was rejected (HTTP 401).
    #[error("authorization required")]
    Unauthorized,
    /// The user may not access the resource (HTTP 403).
    #[error("access to the file is denied")]
    Forbidden,
    /// The resource does not exist (HTTP 404).
    #[error("file not found on server")]
    NotFound,
    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, when present.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A download completed with an empty body.
    #[error("received an empty file")]
    EmptyDownload,
    /// The operation has no implementation on the current target.
    #[error("{0} is not supported on this target")]
    Unsupported(&'static str),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<Value>,
}

impl ApiError {
    /// Maps a non-success status and its raw body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::Status {
                status,
                message: parse_error_message(body),
            },
        }
    }

    /// HTTP status behind the error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|status| status >= 500)
    }

    /// Message supplied by the server in the error body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text shown to the user: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Extracts the `message` field from a JSON error body.
///
/// Validation errors carry a list of messages; those are joined with `"; "`.
pub fn parse_error_message(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match body.message? {
        Value::String(message) => message,
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!message.trim().is_empty()).then_some(message)
}

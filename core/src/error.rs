//! Error type for the request hook and the task store client.
//!
//! # Design
//! Callers only ever show one kind of failure ("request failed"), but the
//! variants keep the cause so logs and tests can tell a bad status from a
//! broken connection. `message()` is what ends up in `RequestState::error`.

use thiserror::Error;

/// Message stored when the server answers with a non-2xx status.
pub const REQUEST_FAILED: &str = "Request failed!";

/// Message stored when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum RequestError {
    /// The server returned a status outside 200..=299.
    #[error("{}", REQUEST_FAILED)]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON shape the caller expected.
    #[error("{0}")]
    Deserialization(String),

    /// The request body could not be serialized to JSON.
    #[error("{0}")]
    Serialization(String),

    #[error("unsupported HTTP method: {0}")]
    InvalidMethod(String),
}

impl RequestError {
    /// Human-readable message, falling back to `FALLBACK_MESSAGE` when the
    /// underlying error has no text.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

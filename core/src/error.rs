//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers
//! handle them: "the resource does not exist" and "the server rejected the
//! input" (with the server's own message, e.g. "Title is required") are
//! both expected, recoverable outcomes. All other non-2xx responses land
//! in `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 with a validation message.
    #[error("{0}")]
    Validation(String),

    /// The server returned a non-2xx status other than 400/404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

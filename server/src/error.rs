//! Error taxonomy for the todo service.
//!
//! # Design
//! Two expected, recoverable failures exist: bad input (`Validation`) and
//! an unknown id (`NotFound`). Both map to a status code plus a
//! `{"error": message}` JSON body via `IntoResponse`, so handlers can
//! return `Result<_, TodoError>` and stay thin. Anything unexpected is
//! left to axum's own 500 path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures produced by `TodoService` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// The request input is missing or malformed (for example a blank
    /// title). Rendered as 400.
    #[error("{0}")]
    Validation(String),

    /// No todo with the requested id exists. Rendered as 404.
    #[error("Todo not found")]
    NotFound,
}

impl TodoError {
    /// Shorthand for the one validation failure every mutation shares.
    pub fn title_required() -> Self {
        Self::Validation("Title is required".to_string())
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = match self {
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

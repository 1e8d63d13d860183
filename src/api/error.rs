//! HTTP error responses.
//!
//! Handlers log the underlying cause themselves; clients only ever see the
//! status code and a short generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::payload::MessageResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed input, rejected before any downstream call
    BadRequest(&'static str),
    /// Existence pre-check came back false
    NotFound,
    /// Storage or enrichment failure
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
            Self::NotFound => "song with this id isn't present",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse {
            code: status.as_u16(),
            message: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

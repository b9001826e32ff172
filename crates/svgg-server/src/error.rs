//! Plain-text error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use svgg_core::SvggError;

/// Body returned for every server-side fault.
pub const SERVER_ERROR_BODY: &str = "server error";

/// API error with status code and message.
///
/// For server faults `message` is only logged; the client sees
/// [`SERVER_ERROR_BODY`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Self {
        Self { status, code, message: msg.into() }
    }
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", msg)
    }
    pub fn payload_too_large(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", msg)
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
    }

    pub fn is_server_fault(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            tracing::error!(code = self.code, status = %self.status, "{}", self.message);
            (self.status, SERVER_ERROR_BODY).into_response()
        } else {
            tracing::warn!(code = self.code, status = %self.status, "{}", self.message);
            (self.status, self.message).into_response()
        }
    }
}

impl From<SvggError> for ApiError {
    fn from(err: SvggError) -> Self {
        match &err {
            SvggError::PayloadTooLarge { .. } => ApiError::payload_too_large(err.to_string()),
            _ if err.is_client_fault() => ApiError::bad_request(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        ApiError::internal(format!("template error: {err:#}"))
    }
}

//! Mapping of resolver errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use platereader_core::ResolveError;

use super::json::{ErrorResponse, Utf8Json};

/// A [`ResolveError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub ResolveError);

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ResolveError::Download { .. } => StatusCode::GATEWAY_TIMEOUT,
            ResolveError::RecognizerUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Utf8Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

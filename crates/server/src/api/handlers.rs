use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Query},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use platereader_core::ResolveError;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::json::{ErrorResponse, Utf8Json};
use crate::metrics::encode_metrics;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Utf8Json<HealthResponse> {
    Utf8Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Prometheus text exposition.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}

/// GET /?user=<name>
pub async fn hello(Query(params): Query<HashMap<String, String>>) -> Result<Html<String>, ApiError> {
    let user = params
        .get("user")
        .ok_or(ResolveError::MissingParameter("user"))?;

    Ok(Html(format!(
        "<h1 style=\"color:red;\"><center>Hello {}!</center></h1>",
        html_escape::encode_text(user)
    )))
}

#[derive(Serialize)]
pub struct GreetingResponse {
    pub result: String,
}

/// POST /greeting with `{"user": ...}`
pub async fn greeting(payload: Result<Json<Value>, JsonRejection>) -> Response {
    let Ok(Json(payload)) = payload else {
        return ApiError(ResolveError::NotJson).into_response();
    };

    let user = match payload.get("user") {
        Some(Value::String(user)) => user.clone(),
        Some(other) => other.to_string(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Utf8Json(ErrorResponse::new("field \"user\" not found")),
            )
                .into_response()
        }
    };

    Utf8Json(GreetingResponse {
        result: format!("Hello {}", user),
    })
    .into_response()
}

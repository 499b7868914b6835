use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use bytes::Bytes;
use platereader_core::{BatchItemResult, BatchRequest, PlateReading, ResolveError};
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use super::json::Utf8Json;
use crate::state::AppState;

/// POST /readPlateNumber
pub async fn read_plate_number(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Utf8Json<PlateReading>, ApiError> {
    debug!(size = body.len(), "Reading plate from uploaded image");
    let reading = state.resolver().read_direct(body).await?;
    Ok(Utf8Json(reading))
}

/// GET /externalReadPlateNumber?image_id=<int>
pub async fn external_read_plate_number(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Utf8Json<PlateReading>, ApiError> {
    let image_id = params.get("image_id").map(String::as_str);
    let reading = state.resolver().read_external(image_id).await?;
    Ok(Utf8Json(reading))
}

/// POST /externalBatchReadPlateNumbers
pub async fn external_batch_read_plate_numbers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Utf8Json<Vec<BatchItemResult>>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected batch body");
        ResolveError::NotJson
    })?;

    let request = BatchRequest::from_value(payload)?;
    let results = state.resolver().read_external_batch(request).await;
    Ok(Utf8Json(results))
}

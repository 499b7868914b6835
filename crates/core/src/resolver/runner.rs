use std::sync::Arc;

use bytes::Bytes;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::metrics::{BATCH_ITEMS, BATCH_SIZE, RECOGNITIONS};
use crate::provider::ImageProvider;
use crate::recognizer::{PlateReader, RecognizeError};

use super::types::{batch_image_id, query_image_id};
use super::{BatchItemResult, BatchRequest, PlateReading, ResolveError};

/// Default number of batch items processed at once.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

const IMAGE_ID_PARAM: &str = "image_id";
const NOT_AN_INTEGER: &str = "Image ID must be an integer";

/// Drives the image provider and the recognizer for each request shape.
///
/// Holds only read-only collaborators, so one instance serves all requests.
pub struct PlateResolver {
    provider: Arc<dyn ImageProvider>,
    reader: Arc<dyn PlateReader>,
    batch_concurrency: usize,
}

impl PlateResolver {
    pub fn new(provider: Arc<dyn ImageProvider>, reader: Arc<dyn PlateReader>) -> Self {
        Self {
            provider,
            reader,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Set how many batch items may be in flight at once (minimum 1).
    pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    /// Read a plate from image bytes supplied directly by the caller.
    pub async fn read_direct(&self, image: Bytes) -> Result<PlateReading, ResolveError> {
        match self.recognize(image).await {
            Ok(plate_number) => Ok(PlateReading { plate_number }),
            Err(RecognizeError::InvalidImage) => {
                error!("Uploaded image could not be read");
                Err(ResolveError::InvalidImage)
            }
            Err(RecognizeError::Unavailable(cause)) => {
                error!(error = %cause, "Recognizer unavailable for uploaded image");
                Err(ResolveError::RecognizerUnavailable(cause))
            }
        }
    }

    /// Read a plate from a provider image named by a textual `image_id`.
    pub async fn read_external(&self, image_id: Option<&str>) -> Result<PlateReading, ResolveError> {
        let image_id = query_image_id(image_id, IMAGE_ID_PARAM)?;

        let image = self.provider.fetch(image_id).await.map_err(|source| {
            error!(image_id, error = %source, "Error downloading image");
            ResolveError::Download { image_id, source }
        })?;

        match self.recognize(image).await {
            Ok(plate_number) => Ok(PlateReading { plate_number }),
            Err(RecognizeError::InvalidImage) => {
                error!(image_id, "Invalid image (unreadable format)");
                Err(ResolveError::InvalidImageFormat)
            }
            Err(RecognizeError::Unavailable(cause)) => {
                error!(image_id, error = %cause, "Recognizer unavailable");
                Err(ResolveError::RecognizerUnavailable(cause))
            }
        }
    }

    /// Read plates for every entry of a batch.
    ///
    /// Entries are processed concurrently but the result has exactly one
    /// entry per input, in input order. A failing entry never affects the
    /// others.
    pub async fn read_external_batch(&self, request: BatchRequest) -> Vec<BatchItemResult> {
        let total = request.image_ids.len();
        BATCH_SIZE.with_label_values(&[]).observe(total as f64);
        debug!(total, concurrency = self.batch_concurrency, "Processing batch");

        let results: Vec<BatchItemResult> = stream::iter(request.image_ids)
            .map(|raw| self.resolve_item(raw))
            .buffered(self.batch_concurrency)
            .collect()
            .await;

        let failed = results.iter().filter(|r| r.is_error()).count();
        BATCH_ITEMS
            .with_label_values(&["ok"])
            .inc_by((total - failed) as u64);
        BATCH_ITEMS.with_label_values(&["error"]).inc_by(failed as u64);
        info!(total, failed, "Batch processed");

        results
    }

    async fn resolve_item(&self, raw: Value) -> BatchItemResult {
        let Some(image_id) = batch_image_id(&raw) else {
            debug!(image_id = %raw, "Skipping non-integer batch entry");
            return BatchItemResult::error(raw, NOT_AN_INTEGER);
        };

        let image = match self.provider.fetch(image_id).await {
            Ok(image) => image,
            Err(e) => {
                warn!(image_id, error = %e, "Batch entry download failed");
                return BatchItemResult::error(raw, e.to_string());
            }
        };

        match self.recognize(image).await {
            Ok(plate_number) => BatchItemResult::plate(raw, plate_number),
            Err(RecognizeError::InvalidImage) => {
                error!(image_id, "Invalid image (unreadable format)");
                BatchItemResult::error(raw, ResolveError::InvalidImageFormat.to_string())
            }
            Err(e) => {
                error!(image_id, error = %e, "Recognizer unavailable");
                BatchItemResult::error(raw, e.to_string())
            }
        }
    }

    async fn recognize(&self, image: Bytes) -> Result<String, RecognizeError> {
        let result = self.reader.read_text(image).await;
        let label = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        RECOGNITIONS.with_label_values(&[label]).inc();
        result
    }
}

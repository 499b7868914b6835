//! Client for a recognition model served over HTTP.
//!
//! The model endpoint receives the raw image as `application/octet-stream`
//! and answers with `{"plate_number": "..."}`. A 400, 415 or 422 answer means
//! the model could not interpret the bytes as an image.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::RecognizerConfig;
use crate::provider::error_chain;

use super::{PlateReader, RecognizeError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    plate_number: String,
}

/// Remote recognition model client.
pub struct HttpPlateReader {
    client: Client,
    url: String,
}

impl HttpPlateReader {
    /// Create a new client for the configured model endpoint.
    pub fn new(config: &RecognizerConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::try_from_secs_f64(config.timeout_secs).unwrap_or(DEFAULT_TIMEOUT);
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl PlateReader for HttpPlateReader {
    async fn read_text(&self, image: Bytes) -> Result<String, RecognizeError> {
        debug!(url = %self.url, size = image.len(), "Sending image to recognizer");

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await
            .map_err(|e| {
                let cause = error_chain(&e);
                warn!(url = %self.url, error = %cause, "Recognizer request failed");
                RecognizeError::Unavailable(cause)
            })?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST
                | StatusCode::UNSUPPORTED_MEDIA_TYPE
                | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            return Err(RecognizeError::InvalidImage);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %self.url, status = status.as_u16(), "Recognizer returned an error");
            return Err(RecognizeError::Unavailable(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let recognition: RecognitionResponse = response.json().await.map_err(|e| {
            RecognizeError::Unavailable(format!("Failed to parse recognizer response: {}", e))
        })?;

        Ok(recognition.plate_number)
    }
}

//! Plate recognition boundary.
//!
//! The recognition model itself lives outside this crate. [`PlateReader`] is
//! the seam the resolver talks to; adapters are provided for an in-process
//! model ([`BlockingPlateReader`]) and for a model served over HTTP
//! ([`HttpPlateReader`]).

mod blocking;
mod http;

pub use blocking::{BlockingPlateReader, PlateModel};
pub use http::HttpPlateReader;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while reading a plate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecognizeError {
    /// The bytes could not be interpreted as an image.
    #[error("invalid image")]
    InvalidImage,

    /// The model could not be reached or failed internally.
    #[error("recognizer unavailable: {0}")]
    Unavailable(String),
}

impl RecognizeError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RecognizeError::InvalidImage => "invalid_image",
            RecognizeError::Unavailable(_) => "unavailable",
        }
    }
}

/// Reads plate text from raw image bytes.
#[async_trait]
pub trait PlateReader: Send + Sync {
    /// Returns the plate text found in the image.
    async fn read_text(&self, image: Bytes) -> Result<String, RecognizeError>;
}

//! Remote image provider integration.
//!
//! Images are addressed by an integer identifier and downloaded over HTTP.
//! Every way a download can go wrong is reported as a [`FetchError`].

mod http;

pub use http::HttpImageProvider;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Identifier of an image in the provider's store.
pub type ImageId = i64;

/// Errors that can occur when downloading an image.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The provider answered with a non-2xx status.
    #[error("Failed to get image {image_id}, status code {status}")]
    Status { image_id: ImageId, status: u16 },

    /// The request did not complete within the configured timeout.
    #[error("Exception while downloading image {image_id}: {cause}")]
    Timeout { image_id: ImageId, cause: String },

    /// Connection refused, DNS failure, reset, or a broken response body.
    #[error("Exception while downloading image {image_id}: {cause}")]
    Transport { image_id: ImageId, cause: String },
}

impl FetchError {
    /// Identifier of the image that failed to download.
    pub fn image_id(&self) -> ImageId {
        match self {
            FetchError::Status { image_id, .. }
            | FetchError::Timeout { image_id, .. }
            | FetchError::Transport { image_id, .. } => *image_id,
        }
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Transport { .. } => "transport",
        }
    }
}

/// Source of raw image bytes.
///
/// Implementations make a single attempt per call; retries are not the
/// provider's concern.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Download the image with the given identifier.
    async fn fetch(&self, image_id: ImageId) -> Result<Bytes, FetchError>;
}

/// Render an error together with its source chain.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}

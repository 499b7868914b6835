use thiserror::Error;

use crate::provider::{FetchError, ImageId};

/// Errors that end a single-image request or a whole batch request.
///
/// Per-item batch failures are never reported through this type; they are
/// embedded in the batch result instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A required query parameter is absent or empty.
    #[error("Parameter \"{0}\" is required")]
    MissingParameter(&'static str),

    /// A query parameter is present but not an integer.
    #[error("Parameter \"{0}\" must be an integer")]
    InvalidParameter(&'static str),

    /// The request body is not JSON.
    #[error("Request must be JSON")]
    NotJson,

    /// A required body field is absent.
    #[error("Missing \"{0}\" in request body")]
    MissingField(&'static str),

    /// A body field that must be a list is something else.
    #[error("\"{0}\" must be a list")]
    NotAList(&'static str),

    /// Image uploaded directly could not be read.
    #[error("invalid image")]
    InvalidImage,

    /// Image downloaded from the provider could not be read.
    #[error("invalid image format")]
    InvalidImageFormat,

    /// The provider could not deliver the image.
    #[error("Error downloading image {image_id}: {source}")]
    Download {
        image_id: ImageId,
        #[source]
        source: FetchError,
    },

    /// The recognition model could not be reached.
    #[error("recognizer unavailable: {0}")]
    RecognizerUnavailable(String),
}

impl ResolveError {
    /// Whether the caller is at fault (maps to a 400 at the HTTP boundary).
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            ResolveError::Download { .. } | ResolveError::RecognizerUnavailable(_)
        )
    }
}

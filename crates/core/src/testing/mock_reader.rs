//! Mock plate reader for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::recognizer::{PlateReader, RecognizeError};

/// Mock implementation of the PlateReader trait.
///
/// Recognizes exactly the images it was taught; any other bytes are an
/// invalid image. `set_unavailable` makes every read fail as if the model
/// were down.
#[derive(Debug, Default)]
pub struct MockPlateReader {
    plates: Arc<RwLock<HashMap<Bytes, String>>>,
    unavailable: Arc<RwLock<Option<String>>>,
    reads: Arc<RwLock<usize>>,
}

impl MockPlateReader {
    /// Create a new mock reader that knows no plates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize `image` as `plate`.
    pub async fn add_plate(&self, image: Bytes, plate: &str) {
        self.plates.write().await.insert(image, plate.to_string());
    }

    /// Fail every read with `RecognizeError::Unavailable(cause)`.
    pub async fn set_unavailable(&self, cause: &str) {
        *self.unavailable.write().await = Some(cause.to_string());
    }

    /// Number of reads performed.
    pub async fn read_count(&self) -> usize {
        *self.reads.read().await
    }
}

#[async_trait]
impl PlateReader for MockPlateReader {
    async fn read_text(&self, image: Bytes) -> Result<String, RecognizeError> {
        *self.reads.write().await += 1;

        if let Some(cause) = self.unavailable.read().await.as_ref() {
            return Err(RecognizeError::Unavailable(cause.clone()));
        }

        self.plates
            .read()
            .await
            .get(&image)
            .cloned()
            .ok_or(RecognizeError::InvalidImage)
    }
}

//! Mock image provider for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::provider::{FetchError, ImageId, ImageProvider};

/// Mock implementation of the ImageProvider trait.
///
/// Provides controllable behavior for testing:
/// - Serve configured images by id (unknown ids answer with a 404 status error)
/// - Fail specific ids with a chosen error
/// - Delay specific ids to shuffle completion order
/// - Record fetched ids for assertions
///
/// # Example
///
/// ```rust,ignore
/// use platereader_core::testing::{fixtures, MockImageProvider};
///
/// let provider = MockImageProvider::new();
/// provider.add_image(1, fixtures::image_bytes("car-1")).await;
///
/// let bytes = provider.fetch(1).await?;
/// assert_eq!(provider.fetched_ids().await, vec![1]);
/// ```
#[derive(Debug, Default)]
pub struct MockImageProvider {
    /// Images by id.
    images: Arc<RwLock<HashMap<ImageId, Bytes>>>,
    /// Errors returned for specific ids (checked before images).
    errors: Arc<RwLock<HashMap<ImageId, FetchError>>>,
    /// Artificial latency per id.
    delays: Arc<RwLock<HashMap<ImageId, Duration>>>,
    /// Ids in the order fetches started.
    fetched: Arc<RwLock<Vec<ImageId>>>,
}

impl MockImageProvider {
    /// Create a new empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `image` for `image_id`.
    pub async fn add_image(&self, image_id: ImageId, image: Bytes) {
        self.images.write().await.insert(image_id, image);
    }

    /// Fail every fetch of `image_id` with `error`.
    pub async fn set_error(&self, image_id: ImageId, error: FetchError) {
        self.errors.write().await.insert(image_id, error);
    }

    /// Delay every fetch of `image_id`.
    pub async fn set_delay(&self, image_id: ImageId, delay: Duration) {
        self.delays.write().await.insert(image_id, delay);
    }

    /// Ids fetched so far.
    pub async fn fetched_ids(&self) -> Vec<ImageId> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn fetch(&self, image_id: ImageId) -> Result<Bytes, FetchError> {
        self.fetched.write().await.push(image_id);

        let delay = self.delays.read().await.get(&image_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.errors.read().await.get(&image_id) {
            return Err(err.clone());
        }

        self.images
            .read()
            .await
            .get(&image_id)
            .cloned()
            .ok_or(FetchError::Status {
                image_id,
                status: 404,
            })
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use super::{PlateReader, RecognizeError};

/// A synchronous, CPU-bound recognition model.
pub trait PlateModel: Send + Sync + 'static {
    fn read_text(&self, image: &[u8]) -> Result<String, RecognizeError>;
}

impl<F> PlateModel for F
where
    F: Fn(&[u8]) -> Result<String, RecognizeError> + Send + Sync + 'static,
{
    fn read_text(&self, image: &[u8]) -> Result<String, RecognizeError> {
        self(image)
    }
}

/// Runs an in-process model on the blocking thread pool so recognition
/// never stalls the async workers.
pub struct BlockingPlateReader<M> {
    model: Arc<M>,
}

impl<M: PlateModel> BlockingPlateReader<M> {
    pub fn new(model: M) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}

#[async_trait]
impl<M: PlateModel> PlateReader for BlockingPlateReader<M> {
    async fn read_text(&self, image: Bytes) -> Result<String, RecognizeError> {
        let model = Arc::clone(&self.model);
        tokio::task::spawn_blocking(move || model.read_text(&image))
            .await
            .map_err(|e| RecognizeError::Unavailable(format!("recognition task failed: {}", e)))?
    }
}

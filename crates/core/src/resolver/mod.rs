//! Plate resolution: request validation, image download, recognition and
//! batch aggregation.

mod error;
mod runner;
mod types;

pub use error::ResolveError;
pub use runner::{PlateResolver, DEFAULT_BATCH_CONCURRENCY};
pub use types::{batch_image_id, query_image_id, BatchItemResult, BatchRequest, PlateReading};

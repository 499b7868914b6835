pub mod config;
pub mod metrics;
pub mod provider;
pub mod recognizer;
pub mod resolver;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, BatchConfig, Config, ConfigError,
    ProviderConfig, RecognizerConfig, ServerConfig,
};
pub use provider::{FetchError, HttpImageProvider, ImageId, ImageProvider};
pub use recognizer::{
    BlockingPlateReader, HttpPlateReader, PlateModel, PlateReader, RecognizeError,
};
pub use resolver::{
    BatchItemResult, BatchRequest, PlateReading, PlateResolver, ResolveError,
    DEFAULT_BATCH_CONCURRENCY,
};

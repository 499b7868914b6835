use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Provider base URL is an http(s) URL
/// - Timeouts are positive and finite
/// - Recognizer URL is set
/// - Batch concurrency is at least 1
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let base_url = config.provider.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "provider.base_url must be an http(s) URL, got '{}'",
            base_url
        )));
    }

    validate_timeout("provider.timeout_secs", config.provider.timeout_secs)?;

    if config.recognizer.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "recognizer.url cannot be empty".to_string(),
        ));
    }

    validate_timeout("recognizer.timeout_secs", config.recognizer.timeout_secs)?;

    if config.batch.concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "batch.concurrency must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_timeout(field: &str, secs: f64) -> Result<(), ConfigError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a positive number of seconds",
            field
        )));
    }
    Ok(())
}

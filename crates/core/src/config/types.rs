use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub recognizer: RecognizerConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Remote image provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Provider root URL (e.g., "http://images.local:8080"); images live under `/images/{id}`
    pub base_url: String,
    /// Per-request timeout in seconds (default: 5.0)
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: f64,
}

fn default_provider_timeout() -> f64 {
    5.0
}

/// Recognition model endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecognizerConfig {
    /// Endpoint that accepts raw image bytes and answers with the plate text
    pub url: String,
    /// Per-request timeout in seconds (default: 30.0)
    #[serde(default = "default_recognizer_timeout")]
    pub timeout_secs: f64,
}

fn default_recognizer_timeout() -> f64 {
    30.0
}

/// Batch endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Maximum number of batch items fetched and recognized at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    8
}

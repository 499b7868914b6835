//! HTTP image provider client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::ProviderConfig;
use crate::metrics::{IMAGE_FETCHES, IMAGE_FETCH_DURATION};

use super::{error_chain, FetchError, ImageId, ImageProvider};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Downloads images from `{base_url}/images/{id}`.
pub struct HttpImageProvider {
    client: Client,
    base_url: String,
}

impl HttpImageProvider {
    /// Create a new provider client with the configured timeout.
    pub fn new(config: &ProviderConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::try_from_secs_f64(config.timeout_secs).unwrap_or(DEFAULT_TIMEOUT);
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the image with the given identifier.
    pub fn image_url(&self, image_id: ImageId) -> String {
        format!("{}/images/{}", self.base_url, image_id)
    }

    async fn download(&self, image_id: ImageId, url: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(image_id, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                image_id,
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| request_error(image_id, &e))
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    async fn fetch(&self, image_id: ImageId) -> Result<Bytes, FetchError> {
        let url = self.image_url(image_id);
        let started = Instant::now();

        let result = self.download(image_id, &url).await;

        let label = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        IMAGE_FETCHES.with_label_values(&[label]).inc();
        IMAGE_FETCH_DURATION
            .with_label_values(&[label])
            .observe(started.elapsed().as_secs_f64());

        match &result {
            Ok(bytes) => debug!(image_id, url = %url, size = bytes.len(), "Image downloaded"),
            Err(e) => error!(image_id, url = %url, error = %e, "Image download failed"),
        }

        result
    }
}

fn request_error(image_id: ImageId, err: &reqwest::Error) -> FetchError {
    let cause = error_chain(err);
    if err.is_timeout() {
        FetchError::Timeout { image_id, cause }
    } else {
        FetchError::Transport { image_id, cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: &str) -> HttpImageProvider {
        HttpImageProvider::new(&ProviderConfig {
            base_url: base_url.to_string(),
            timeout_secs: 1.0,
        })
        .unwrap()
    }

    #[test]
    fn test_image_url() {
        let provider = provider("http://images.local:8080");
        assert_eq!(provider.image_url(17), "http://images.local:8080/images/17");
    }

    #[test]
    fn test_image_url_trims_trailing_slash() {
        let provider = provider("http://images.local/");
        assert_eq!(provider.image_url(5), "http://images.local/images/5");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let provider = provider(&format!("http://127.0.0.1:{}", port));
        let err = provider.fetch(11).await.unwrap_err();
        assert_eq!(err.image_id(), 11);
        assert!(matches!(
            err,
            FetchError::Transport { .. } | FetchError::Timeout { .. }
        ));
        assert!(err.to_string().contains("image 11"));
    }
}

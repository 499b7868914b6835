//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock image provider and a mock plate reader injected, so every
//! endpoint can be exercised without external infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use platereader_core::testing::{MockImageProvider, MockPlateReader};
use platereader_core::{ImageProvider, PlateReader, PlateResolver};
use platereader_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use platereader_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read_plate() {
///     let fixture = TestFixture::new();
///     let image = fixture.with_plate(1, "car-1", "A123BC").await;
///
///     let response = fixture.post_bytes("/readPlateNumber", image).await;
///     assert_eq!(response.body["plate_number"], "A123BC");
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock image provider - configure images, errors and delays per id
    pub provider: Arc<MockImageProvider>,
    /// Mock plate reader - configure recognized plates
    pub reader: Arc<MockPlateReader>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    /// Parsed JSON body, `Value::Null` when the body is empty or not JSON.
    pub body: Value,
    pub raw: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }
}

impl TestFixture {
    /// Create a new test fixture with empty mocks.
    pub fn new() -> Self {
        Self::with_batch_concurrency(platereader_core::DEFAULT_BATCH_CONCURRENCY)
    }

    /// Create a test fixture with a custom batch fan-out.
    pub fn with_batch_concurrency(concurrency: usize) -> Self {
        let provider = Arc::new(MockImageProvider::new());
        let reader = Arc::new(MockPlateReader::new());

        let resolver = PlateResolver::new(
            Arc::clone(&provider) as Arc<dyn ImageProvider>,
            Arc::clone(&reader) as Arc<dyn PlateReader>,
        )
        .with_batch_concurrency(concurrency);

        let router = create_router(Arc::new(AppState::new(resolver)));

        Self {
            router,
            provider,
            reader,
        }
    }

    /// Register an image for `image_id` that reads as `plate`; returns its bytes.
    pub async fn with_plate(&self, image_id: i64, label: &str, plate: &str) -> Bytes {
        let image = fixtures::image_bytes(label);
        self.provider.add_image(image_id, image.clone()).await;
        self.reader.add_plate(image.clone(), plate).await;
        image
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::builder().method("GET").uri(path), Body::empty())
            .await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.post_with_content_type(path, bytes, "application/json")
            .await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.post_with_content_type(path, body.to_string(), "application/json")
            .await
    }

    /// Send a POST request with an image payload.
    pub async fn post_bytes(&self, path: &str, body: Bytes) -> TestResponse {
        self.post_with_content_type(path, body, "application/octet-stream")
            .await
    }

    /// Send a POST request with custom content type (for testing wrong content types).
    pub async fn post_with_content_type(
        &self,
        path: &str,
        body: impl Into<Body>,
        content_type: &str,
    ) -> TestResponse {
        let builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, content_type);
        self.send(builder, body.into()).await
    }

    async fn send(&self, builder: axum::http::request::Builder, body: Body) -> TestResponse {
        let request = builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let raw = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if raw.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&raw).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            content_type,
            body,
            raw,
        }
    }
}

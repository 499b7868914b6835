//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external collaborators
//! (image provider and recognition model), allowing the whole request path
//! to be exercised without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use platereader_core::testing::{fixtures, MockImageProvider, MockPlateReader};
//!
//! let provider = MockImageProvider::new();
//! let reader = MockPlateReader::new();
//!
//! let image = fixtures::image_bytes("car-1");
//! provider.add_image(1, image.clone()).await;
//! reader.add_plate(image, "A123BC").await;
//! ```

mod mock_provider;
mod mock_reader;

pub use mock_provider::MockImageProvider;
pub use mock_reader::MockPlateReader;

/// Test fixtures and helper functions.
pub mod fixtures {
    use bytes::Bytes;

    /// Fake JPEG payload: a JPEG SOI marker followed by `label`.
    ///
    /// Distinct labels give distinct byte sequences, which is all the mock
    /// reader needs to tell images apart.
    pub fn image_bytes(label: &str) -> Bytes {
        let mut data = vec![0xff, 0xd8, 0xff, 0xe0];
        data.extend_from_slice(label.as_bytes());
        Bytes::from(data)
    }
}

//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Image provider fetches (outcome, latency)
//! - Plate recognition (outcome)
//! - Batch requests (size)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Image Provider Metrics
// =============================================================================

/// Image fetches by outcome.
pub static IMAGE_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "platereader_image_fetches_total",
            "Image fetches from the provider",
        ),
        &["result"], // "ok", "status", "timeout", "transport"
    )
    .unwrap()
});

/// Image fetch duration in seconds.
pub static IMAGE_FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "platereader_image_fetch_duration_seconds",
            "Duration of image fetches from the provider",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["result"],
    )
    .unwrap()
});

// =============================================================================
// Recognition Metrics
// =============================================================================

/// Recognitions by outcome.
pub static RECOGNITIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "platereader_recognitions_total",
            "Plate recognition attempts",
        ),
        &["result"], // "ok", "invalid_image", "unavailable"
    )
    .unwrap()
});

// =============================================================================
// Batch Metrics
// =============================================================================

/// Items per batch request.
pub static BATCH_SIZE: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "platereader_batch_size",
            "Number of image ids per batch request",
        )
        .buckets(vec![1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        &[],
    )
    .unwrap()
});

/// Batch items by outcome.
pub static BATCH_ITEMS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("platereader_batch_items_total", "Batch items by outcome"),
        &["result"], // "ok", "error"
    )
    .unwrap()
});

/// All core metrics, for registration by the server.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(IMAGE_FETCHES.clone()),
        Box::new(IMAGE_FETCH_DURATION.clone()),
        Box::new(RECOGNITIONS.clone()),
        Box::new(BATCH_SIZE.clone()),
        Box::new(BATCH_ITEMS.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        IMAGE_FETCHES.with_label_values(&["ok"]).inc();
        RECOGNITIONS.with_label_values(&["invalid_image"]).inc();

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"platereader_image_fetches_total".to_string()));
        assert!(names.contains(&"platereader_recognitions_total".to_string()));
    }
}

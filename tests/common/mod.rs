//! Shared utilities for integration tests.

use std::sync::Arc;

use fieldlog::emit::MemorySink;
use fieldlog::{Level, Logger, Settings};
use regex::Regex;

/// A logger writing to an in-memory sink at the given threshold.
#[allow(dead_code)]
pub fn capture_logger(min_level: Level) -> (Arc<Logger>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let settings = Settings::default()
        .with_destination(sink.clone())
        .with_min_level(min_level)
        .with_version("test-version");
    (Arc::new(Logger::new(settings)), sink)
}

/// Lowercase UUID v4 with an RFC 4122 variant.
#[allow(dead_code)]
pub fn is_uuid_v4(id: &str) -> bool {
    let pattern =
        Regex::new("^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$").unwrap();
    pattern.is_match(id)
}

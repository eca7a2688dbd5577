//! Propagation carriers.
//!
//! A carrier is whatever the calling framework threads through a request:
//! RPC metadata, HTTP headers, task-local state. The core only needs to read
//! one key from either side and write it to the outgoing side.

use std::collections::HashMap;

use axum::http::{HeaderMap, HeaderValue};

/// Read/write access to correlation keys on a propagation context.
pub trait Carrier {
    /// Value received from the caller, if any.
    fn incoming(&self, key: &str) -> Option<&str>;

    /// Value already staged for downstream calls, if any.
    fn outgoing(&self, key: &str) -> Option<&str>;

    /// Stage a value for downstream calls.
    fn set_outgoing(&mut self, key: &str, value: &str);
}

/// Metadata-style carrier with separate incoming and outgoing maps.
///
/// Keys are case-insensitive and stored lowercase; each key may hold several
/// values, the first one wins on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    incoming: HashMap<String, Vec<String>>,
    outgoing: HashMap<String, Vec<String>>,
}

impl RequestContext {
    /// An empty context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context as seen by a server that received `key: value`.
    pub fn with_incoming(mut self, key: &str, value: impl Into<String>) -> Self {
        self.incoming
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Append `key: value` to the outgoing metadata.
    pub fn append_outgoing(mut self, key: &str, value: impl Into<String>) -> Self {
        self.outgoing
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// All outgoing values staged under `key`.
    pub fn outgoing_values(&self, key: &str) -> &[String] {
        self.outgoing
            .get(&key.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Carrier for RequestContext {
    fn incoming(&self, key: &str) -> Option<&str> {
        first(&self.incoming, key)
    }

    fn outgoing(&self, key: &str) -> Option<&str> {
        first(&self.outgoing, key)
    }

    fn set_outgoing(&mut self, key: &str, value: &str) {
        self.outgoing
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
}

fn first<'a>(map: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    map.get(&key.to_ascii_lowercase())
        .and_then(|values| values.first())
        .map(String::as_str)
}

/// HTTP headers carry both directions in one map.
impl Carrier for HeaderMap {
    fn incoming(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.to_str().ok())
    }

    fn outgoing(&self, key: &str) -> Option<&str> {
        self.incoming(key)
    }

    fn set_outgoing(&mut self, key: &str, value: &str) {
        let name = match axum::http::HeaderName::from_bytes(key.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "invalid correlation header name");
                return;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.insert(name, value);
            }
            Err(e) => tracing::warn!(key = %key, error = %e, "invalid correlation header value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_sides() {
        let ctx = RequestContext::background()
            .with_incoming("X-Request-Id", "in")
            .append_outgoing("x-request-id", "out");

        assert_eq!(ctx.incoming("x-request-id"), Some("in"));
        assert_eq!(ctx.outgoing("X-REQUEST-ID"), Some("out"));
        assert_eq!(ctx.incoming("other"), None);
    }

    #[test]
    fn test_first_value_wins() {
        let mut ctx = RequestContext::background().append_outgoing("k", "one");
        ctx.set_outgoing("k", "two");
        assert_eq!(ctx.outgoing("k"), Some("one"));
        assert_eq!(ctx.outgoing_values("k"), ["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_header_map_carrier() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.incoming("x-request-id"), None);

        headers.set_outgoing("x-request-id", "abc");
        assert_eq!(headers.incoming("x-request-id"), Some("abc"));
        assert_eq!(headers.outgoing("x-request-id"), Some("abc"));

        // non-visible ASCII is not a valid header value
        headers.set_outgoing("x-request-id", "bad\nvalue");
        assert_eq!(headers.incoming("x-request-id"), Some("abc"));
    }
}

//! `x-request-id` header helpers.

use std::borrow::Cow;

use axum::http::{HeaderMap, HeaderValue};

use crate::correlation::extract::new_request_id;
use crate::correlation::REQUEST_ID_HEADER;

/// Length of a hyphenated UUID; longer header values are cut to this.
pub const MAX_REQUEST_ID_LEN: usize = 36;

/// Raw `x-request-id` header value, if present. Bytes that are not UTF-8
/// come back as U+FFFD.
pub fn request_id_header(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    headers
        .get(REQUEST_ID_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
}

/// Request id to use for an inbound request.
///
/// Takes the header value, truncated to 36 characters. A missing or empty
/// header yields a freshly generated id.
pub fn request_id_from_headers(headers: &HeaderMap) -> String {
    match request_id_header(headers) {
        Some(id) if !id.is_empty() => truncate_request_id(&id).to_string(),
        _ => new_request_id(),
    }
}

/// Add or replace the `x-request-id` header.
pub fn set_request_id_header(headers: &mut HeaderMap, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        Err(e) => tracing::warn!(error = %e, "request id is not a valid header value"),
    }
}

fn truncate_request_id(id: &str) -> &str {
    match id.char_indices().nth(MAX_REQUEST_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

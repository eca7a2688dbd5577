//! HTTP glue.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → trace_request_id (ensure x-request-id header, truncate/generate)
//!     → log_request (info record: method, path, query, body, request_id)
//!     → application handler
//! ```
//!
//! # Design Decisions
//! - Plain `axum::middleware` functions; compose with `from_fn` / `from_fn_with_state`
//! - The request id travels in the header map, which is itself a carrier

pub mod middleware;

pub use middleware::{log_request, trace_request_id, MAX_LOGGED_BODY};

//! Request correlation.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → header.rs (read / truncate / generate x-request-id)
//!     → carrier.rs (RequestContext or HeaderMap holds the id)
//!     → extract.rs (incoming → outgoing → generated)
//!     → record field `request_id`
//! ```
//!
//! # Design Decisions
//! - The id is generated at most once per carrier; re-extracting is stable
//! - Carriers belong to the calling framework; the core only reads and stages

pub mod carrier;
pub mod extract;
pub mod header;

/// Well-known correlation key, used as carrier key and HTTP header name.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub use carrier::{Carrier, RequestContext};
pub use extract::{add_to_context, extract, inject_into, new_request_id};
pub use header::{request_id_from_headers, request_id_header, set_request_id_header};

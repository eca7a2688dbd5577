//! Correlation id extraction and injection.

use uuid::Uuid;

use crate::correlation::carrier::Carrier;
use crate::correlation::REQUEST_ID_HEADER;
use crate::record::fields::{Fields, REQUEST_ID_KEY};

/// Generate a fresh correlation id (UUID v4, lowercase hyphenated).
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Find the request id on `carrier`, or mint one and stage it outgoing.
///
/// Incoming values take precedence over outgoing ones. The returned carrier
/// is the one to keep propagating.
pub fn extract<C: Carrier>(mut carrier: C) -> (C, String) {
    if let Some(id) = carrier.incoming(REQUEST_ID_HEADER) {
        let id = id.to_string();
        return (carrier, id);
    }

    if let Some(id) = carrier.outgoing(REQUEST_ID_HEADER) {
        let id = id.to_string();
        return (carrier, id);
    }

    let id = new_request_id();
    carrier.set_outgoing(REQUEST_ID_HEADER, &id);
    (carrier, id)
}

/// Stamp `request_id` on `fields` from `carrier`.
pub fn inject_into<C: Carrier>(fields: &mut Fields, carrier: C) -> C {
    let (carrier, id) = extract(carrier);
    fields.insert(REQUEST_ID_KEY, id);
    carrier
}

/// Stage `request_id` on `carrier` for downstream calls.
pub fn add_to_context<C: Carrier>(mut carrier: C, request_id: &str) -> C {
    carrier.set_outgoing(REQUEST_ID_HEADER, request_id);
    carrier
}

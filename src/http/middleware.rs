//! Request-id and request-logging middleware.

use std::sync::Arc;

use axum::{
    body::{Body, HttpBody},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::correlation::{request_id_from_headers, set_request_id_header};
use crate::emit::Logger;
use crate::record::{Fields, Level};

/// Largest request body buffered for logging.
pub const MAX_LOGGED_BODY: usize = 1024 * 1024;

/// Make sure the request carries `x-request-id` before it reaches `next`.
///
/// An existing header longer than a UUID is truncated; a missing one is
/// generated.
pub async fn trace_request_id(mut request: Request, next: Next) -> Response {
    let request_id = request_id_from_headers(request.headers());
    set_request_id_header(request.headers_mut(), &request_id);
    next.run(request).await
}

/// Log the incoming request at info, then forward it unchanged.
///
/// The body is copied into the record only when its size is known to be at
/// most [`MAX_LOGGED_BODY`]; larger or unbounded bodies are forwarded as-is
/// and logged without `RequestBody`. Nothing here alters the response.
///
/// Use with `axum::middleware::from_fn_with_state(logger, log_request)`.
pub async fn log_request(
    State(logger): State<Arc<Logger>>,
    request: Request,
    next: Next,
) -> Response {
    if !logger.enabled(Level::Info) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();

    let details = Fields::new()
        .with("Method", parts.method.as_str())
        .with("RequestPath", parts.uri.path())
        .with("RequestQuery", parts.uri.query().unwrap_or_default());

    let fits = body
        .size_hint()
        .upper()
        .is_some_and(|upper| upper <= MAX_LOGGED_BODY as u64);
    if !fits {
        logger.log_fields_traced(Level::Info, parts.headers.clone(), details, &[]);
        return next.run(Request::from_parts(parts, body)).await;
    }

    let body = match axum::body::to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => {
            let details =
                details.with("RequestBody", String::from_utf8_lossy(&bytes).into_owned());
            logger.log_fields_traced(Level::Info, parts.headers.clone(), details, &[]);
            Body::from(bytes)
        }
        Err(e) => {
            logger.log_fields_traced(Level::Error, parts.headers.clone(), details, &[Some(&e)]);
            Body::empty()
        }
    };

    next.run(Request::from_parts(parts, body)).await
}

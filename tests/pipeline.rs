//! End-to-end tests for the gate-and-emit pipeline.

use fieldlog::correlation::{extract, RequestContext, REQUEST_ID_HEADER};
use fieldlog::{Fields, Level, Outcome};
use serde_json::json;

mod common;

#[test]
fn test_cumulative_gated_at_info() {
    let (logger, sink) = common::capture_logger(Level::Info);
    let details = Fields::new().with("Test", "Foo");

    let outcome = logger.with_fields(&details).debug("debug message");
    assert_eq!(outcome, Outcome::Dropped);
    assert!(sink.lines().is_empty());

    let outcome = logger.with_fields(&details).info("info message");
    assert_eq!(outcome, Outcome::Emitted);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#""Test":"Foo""#));
    assert!(lines[0].contains(r#""severity":"info""#));
}

#[test]
fn test_stateless_format_at_debug_threshold() {
    let (logger, sink) = common::capture_logger(Level::Debug);
    logger.log_fmt(Level::Info, format_args!("Sending: {}", "X"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#""msg":"Sending: X""#));
}

#[test]
fn test_every_record_has_base_keys() {
    let (logger, sink) = common::capture_logger(Level::Debug);
    logger.log_values(Level::Debug, &[&"a", &1]);
    logger.entry().with("k", "v").errorw(Fields::new().with("extra", true));
    logger.log_fields(Level::Info, Fields::new().with("only", "fields"));

    let records = sink.records();
    assert_eq!(records.len(), 3);
    for record in &records {
        assert!(record["severity"].is_string());
        assert!(record["time"].is_string());
        assert_eq!(record["v"], json!("test-version"));
    }
    assert_eq!(records[0]["msg"], json!("a, 1"));
}

#[test]
fn test_int_values_keep_their_type() {
    let (logger, sink) = common::capture_logger(Level::Info);
    logger.with_fields(&Fields::new().with("Test", 1)).error("error message");
    assert!(sink.lines()[0].contains(r#""Test":1"#));
    assert!(sink.lines()[0].contains(r#""severity":"error""#));
}

#[test]
fn test_tracing_fields_in_record() {
    let (logger, sink) = common::capture_logger(Level::Debug);
    let ctx = RequestContext::background().append_outgoing(REQUEST_ID_HEADER, "fake-request-id");

    let (mut entry, ctx) = logger.with_tracing(ctx, &Fields::new().with("Test", 1));
    entry.info("info message");

    assert!(sink.lines()[0].contains(r#""request_id":"fake-request-id""#));
    let (_, id) = extract(ctx);
    assert_eq!(id, "fake-request-id");
}

#[test]
fn test_extractor_properties() {
    let ctx = RequestContext::background().with_incoming(REQUEST_ID_HEADER, "abc-123");
    let (_, id) = extract(ctx);
    assert_eq!(id, "abc-123");

    let (ctx, id) = extract(RequestContext::background());
    assert!(common::is_uuid_v4(&id), "unexpected id {}", id);
    let (_, again) = extract(ctx);
    assert_eq!(again, id);
}

#[test]
fn test_errors_with_tracing() {
    let (logger, sink) = common::capture_logger(Level::Info);
    let foop = std::io::Error::other("foop");
    let blarg = std::io::Error::other("blarg");
    let ctx = RequestContext::background().append_outgoing(REQUEST_ID_HEADER, "fake-request-id");

    logger.log_fields_traced(
        Level::Info,
        ctx,
        Fields::new().with("Test", "Foo"),
        &[None, Some(&foop), None, Some(&blarg)],
    );

    let line = &sink.lines()[0];
    assert!(line.contains(r#""Error":"foop, blarg""#));
    assert!(line.contains(r#""request_id":"fake-request-id""#));
}

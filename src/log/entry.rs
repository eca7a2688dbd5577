//! Cumulative logging.
//!
//! An [`Entry`] keeps its fields across calls. Each terminal call stamps
//! `severity` (and `msg`) and runs the record through the gate, leaving the
//! fields in place for the next one.

use std::error::Error;
use std::fmt;

use serde_json::Value;

use crate::correlation::{inject_into, Carrier};
use crate::emit::{Logger, Outcome};
use crate::record::{Fields, Level};

/// Fields bound to a logger.
#[derive(Debug)]
pub struct Entry<'a> {
    logger: &'a Logger,
    fields: Fields,
}

impl<'a> Entry<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self::from_fields(logger, Fields::new())
    }

    /// Wrap owned fields. No copy is made.
    pub fn from_fields(logger: &'a Logger, fields: Fields) -> Self {
        Self { logger, fields }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key, value);
        self
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Log `msg` at `level`.
    pub fn log(&mut self, level: Level, msg: impl Into<String>) -> Outcome {
        self.fields.set_severity(level).set_message(msg);
        self.logger.emit(&mut self.fields)
    }

    /// Log a formatted message at `level`.
    pub fn logf(&mut self, level: Level, args: fmt::Arguments<'_>) -> Outcome {
        self.log(level, args.to_string())
    }

    /// Fold `details` into the entry and log at `level`.
    pub fn logw(&mut self, level: Level, details: Fields) -> Outcome {
        self.fields.merge(details);
        self.fields.set_severity(level);
        self.logger.emit(&mut self.fields)
    }

    pub fn debug(&mut self, msg: impl Into<String>) -> Outcome {
        self.log(Level::Debug, msg)
    }

    pub fn debugf(&mut self, args: fmt::Arguments<'_>) -> Outcome {
        self.logf(Level::Debug, args)
    }

    pub fn debugw(&mut self, details: Fields) -> Outcome {
        self.logw(Level::Debug, details)
    }

    pub fn info(&mut self, msg: impl Into<String>) -> Outcome {
        self.log(Level::Info, msg)
    }

    pub fn infof(&mut self, args: fmt::Arguments<'_>) -> Outcome {
        self.logf(Level::Info, args)
    }

    pub fn infow(&mut self, details: Fields) -> Outcome {
        self.logw(Level::Info, details)
    }

    pub fn error(&mut self, msg: impl Into<String>) -> Outcome {
        self.log(Level::Error, msg)
    }

    pub fn errorf(&mut self, args: fmt::Arguments<'_>) -> Outcome {
        self.logf(Level::Error, args)
    }

    pub fn errorw(&mut self, details: Fields) -> Outcome {
        self.logw(Level::Error, details)
    }
}

impl Logger {
    /// An empty cumulative entry.
    pub fn entry(&self) -> Entry<'_> {
        Entry::new(self)
    }

    /// An entry over a copy of `details`; the caller's set is never touched.
    pub fn with_fields(&self, details: &Fields) -> Entry<'_> {
        Entry::from_fields(self, details.clone())
    }

    /// Like [`Logger::with_fields`], with the non-`None` errors joined under
    /// `Error` in the copy.
    pub fn with_fields_and_errors(
        &self,
        details: &Fields,
        errors: &[Option<&dyn Error>],
    ) -> Entry<'_> {
        let mut fields = details.clone();
        fields.attach_errors(errors.iter().copied());
        Entry::from_fields(self, fields)
    }

    /// Like [`Logger::with_fields`], plus `request_id` taken from `carrier`.
    /// Returns the carrier to keep propagating.
    pub fn with_tracing<C: Carrier>(&self, carrier: C, details: &Fields) -> (Entry<'_>, C) {
        self.with_tracing_and_errors(carrier, details, &[])
    }

    pub fn with_tracing_and_errors<C: Carrier>(
        &self,
        carrier: C,
        details: &Fields,
        errors: &[Option<&dyn Error>],
    ) -> (Entry<'_>, C) {
        let mut fields = details.clone();
        fields.attach_errors(errors.iter().copied());
        let carrier = inject_into(&mut fields, carrier);
        (Entry::from_fields(self, fields), carrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::{RequestContext, REQUEST_ID_HEADER};
    use crate::emit::{MemorySink, Settings};
    use serde_json::json;
    use std::io;
    use std::sync::Arc;

    fn logger_with(min_level: Level) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let settings = Settings::default()
            .with_destination(sink.clone())
            .with_min_level(min_level);
        (Logger::new(settings), sink)
    }

    #[test]
    fn test_terminal_levels() {
        let (logger, sink) = logger_with(Level::Debug);
        let mut entry = logger.entry().with("Test", 1);

        entry.debug("debug message");
        entry.info("info message");
        entry.error("error message");

        let records = sink.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["severity"], json!("debug"));
        assert_eq!(records[1]["msg"], json!("info message"));
        assert_eq!(records[2]["severity"], json!("error"));
        assert!(records.iter().all(|r| r["Test"] == json!(1)));
    }

    #[test]
    fn test_format_directive() {
        let (logger, sink) = logger_with(Level::Info);
        logger
            .entry()
            .with("Test", "Foo")
            .infof(format_args!("Sending: {}", "template info message"));

        let record = &sink.records()[0];
        assert_eq!(record["msg"], json!("Sending: template info message"));
        assert_eq!(record["Test"], json!("Foo"));
    }

    #[test]
    fn test_wrapper_accumulates() {
        let (logger, sink) = logger_with(Level::Info);
        let mut entry = logger.entry();
        entry.infow(Fields::new().with("a", 1));
        entry.errorw(Fields::new().with("b", 2));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert!(records[0].get("b").is_none());
        assert_eq!(records[1]["a"], json!(1));
        assert_eq!(records[1]["b"], json!(2));
        assert_eq!(records[1]["severity"], json!("error"));
    }

    #[test]
    fn test_gated_entry_writes_nothing() {
        let (logger, sink) = logger_with(Level::Info);
        let outcome = logger.entry().with("Test", "Foo").debug("debug message");
        assert_eq!(outcome, Outcome::Dropped);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_with_fields_copies() {
        let (logger, _sink) = logger_with(Level::Info);
        let details = Fields::new().with("Test", "Foo");
        let mut entry = logger.with_fields(&details);
        entry.info("message");

        assert_eq!(details.len(), 1);
        assert!(entry.fields().contains_key("severity"));
    }

    #[test]
    fn test_errors_reach_the_copy() {
        let (logger, sink) = logger_with(Level::Info);
        let details = Fields::new().with("Test", "Foo");
        let foop = io::Error::other("foop");
        let blarg = io::Error::other("blarg");

        let (mut entry, _) = logger.with_tracing_and_errors(
            RequestContext::background().append_outgoing(REQUEST_ID_HEADER, "fake-request-id"),
            &details,
            &[None, Some(&foop), None, Some(&blarg)],
        );
        entry.info("info message");

        assert!(!details.contains_key("Error"));
        let record = &sink.records()[0];
        assert_eq!(record["Error"], json!("foop, blarg"));
        assert_eq!(record["request_id"], json!("fake-request-id"));
    }

    #[test]
    fn test_all_none_errors_leave_no_key() {
        let (logger, sink) = logger_with(Level::Info);
        logger
            .with_fields_and_errors(&Fields::new(), &[None, None])
            .info("clean");
        assert!(sink.records()[0].get("Error").is_none());
    }

    #[test]
    fn test_with_tracing_generates_id() {
        let (logger, _sink) = logger_with(Level::Info);
        let (entry, ctx) = logger.with_tracing(RequestContext::background(), &Fields::new());
        let id = entry.fields().get("request_id").and_then(Value::as_str).unwrap();
        assert_eq!(ctx.outgoing(REQUEST_ID_HEADER), Some(id));
    }
}

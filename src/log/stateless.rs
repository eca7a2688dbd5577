//! One-shot logging.
//!
//! Text records are assembled in a pooled scratch payload that is cleared
//! and returned as soon as the record has been gated and written.

use std::error::Error;
use std::fmt;

use crate::correlation::{inject_into, Carrier, RequestContext};
use crate::emit::{Logger, Outcome};
use crate::record::{Fields, Level};

impl Logger {
    /// Log the values' `Display` forms joined with `", "`.
    pub fn log_values(&self, level: Level, values: &[&dyn fmt::Display]) -> Outcome {
        let msg = values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.log_text(level, RequestContext::background(), msg)
    }

    /// Log a formatted message.
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) -> Outcome {
        self.log_fmt_traced(level, RequestContext::background(), args)
    }

    /// Log a formatted message with `request_id` taken from `carrier`.
    pub fn log_fmt_traced<C: Carrier>(
        &self,
        level: Level,
        carrier: C,
        args: fmt::Arguments<'_>,
    ) -> Outcome {
        self.log_text(level, carrier, args.to_string())
    }

    /// Log caller-owned fields at `level`.
    pub fn log_fields(&self, level: Level, mut fields: Fields) -> Outcome {
        fields.set_severity(level);
        self.emit(&mut fields)
    }

    /// Log caller-owned fields with errors and `request_id` attached.
    pub fn log_fields_traced<C: Carrier>(
        &self,
        level: Level,
        carrier: C,
        mut fields: Fields,
        errors: &[Option<&dyn Error>],
    ) -> Outcome {
        fields.attach_errors(errors.iter().copied());
        fields.set_severity(level);
        inject_into(&mut fields, carrier);
        self.emit(&mut fields)
    }

    fn log_text<C: Carrier>(&self, level: Level, carrier: C, msg: String) -> Outcome {
        let mut scratch = self.pool().checkout();
        scratch.set_severity(level).set_message(msg);
        inject_into(&mut scratch, carrier);
        self.emit(&mut scratch)
    }
}

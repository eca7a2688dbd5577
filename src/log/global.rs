//! The process-wide logger and its free-function entry points.
//!
//! The global logger starts with records going to stdout at info and above.
//! Call [`configure`] once at startup; later calls are safe but affect every
//! thread immediately.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::Options;
use crate::correlation::Carrier;
use crate::emit::{Logger, Outcome, Settings};
use crate::log::entry::Entry;
use crate::record::{Fields, Level};

static GLOBAL: OnceLock<Arc<Logger>> = OnceLock::new();

fn handle() -> &'static Arc<Logger> {
    GLOBAL.get_or_init(|| Arc::new(Logger::default()))
}

/// The process-wide logger.
pub fn global() -> &'static Logger {
    handle()
}

/// A shared handle to the process-wide logger, e.g. for middleware state.
pub fn shared() -> Arc<Logger> {
    handle().clone()
}

/// Reconfigure the process-wide logger from options.
pub fn configure(options: &Options) {
    global().configure(options);
}

/// Replace the process-wide logger's settings.
pub fn reconfigure(settings: Settings) {
    global().reconfigure(settings);
}

/// An empty cumulative entry on the global logger.
pub fn new_entry() -> Entry<'static> {
    global().entry()
}

pub fn with_fields(details: &Fields) -> Entry<'static> {
    global().with_fields(details)
}

pub fn with_fields_and_errors(details: &Fields, errors: &[Option<&dyn Error>]) -> Entry<'static> {
    global().with_fields_and_errors(details, errors)
}

pub fn with_tracing<C: Carrier>(carrier: C, details: &Fields) -> (Entry<'static>, C) {
    global().with_tracing(carrier, details)
}

pub fn with_tracing_and_errors<C: Carrier>(
    carrier: C,
    details: &Fields,
    errors: &[Option<&dyn Error>],
) -> (Entry<'static>, C) {
    global().with_tracing_and_errors(carrier, details, errors)
}

/// Log values at debug, joined with `", "`.
pub fn debug(values: &[&dyn fmt::Display]) -> Outcome {
    global().log_values(Level::Debug, values)
}

pub fn debugf(args: fmt::Arguments<'_>) -> Outcome {
    global().log_fmt(Level::Debug, args)
}

pub fn debugft<C: Carrier>(carrier: C, args: fmt::Arguments<'_>) -> Outcome {
    global().log_fmt_traced(Level::Debug, carrier, args)
}

pub fn debugw(fields: Fields) -> Outcome {
    global().log_fields(Level::Debug, fields)
}

pub fn debug_with_tracing<C: Carrier>(
    carrier: C,
    fields: Fields,
    errors: &[Option<&dyn Error>],
) -> Outcome {
    global().log_fields_traced(Level::Debug, carrier, fields, errors)
}

/// Log values at info, joined with `", "`.
pub fn info(values: &[&dyn fmt::Display]) -> Outcome {
    global().log_values(Level::Info, values)
}

pub fn infof(args: fmt::Arguments<'_>) -> Outcome {
    global().log_fmt(Level::Info, args)
}

pub fn infoft<C: Carrier>(carrier: C, args: fmt::Arguments<'_>) -> Outcome {
    global().log_fmt_traced(Level::Info, carrier, args)
}

pub fn infow(fields: Fields) -> Outcome {
    global().log_fields(Level::Info, fields)
}

pub fn info_with_tracing<C: Carrier>(
    carrier: C,
    fields: Fields,
    errors: &[Option<&dyn Error>],
) -> Outcome {
    global().log_fields_traced(Level::Info, carrier, fields, errors)
}

/// Log values at error, joined with `", "`.
pub fn error(values: &[&dyn fmt::Display]) -> Outcome {
    global().log_values(Level::Error, values)
}

pub fn errorf(args: fmt::Arguments<'_>) -> Outcome {
    global().log_fmt(Level::Error, args)
}

pub fn errorft<C: Carrier>(carrier: C, args: fmt::Arguments<'_>) -> Outcome {
    global().log_fmt_traced(Level::Error, carrier, args)
}

pub fn errorw(fields: Fields) -> Outcome {
    global().log_fields(Level::Error, fields)
}

pub fn error_with_tracing<C: Carrier>(
    carrier: C,
    fields: Fields,
    errors: &[Option<&dyn Error>],
) -> Outcome {
    global().log_fields_traced(Level::Error, carrier, fields, errors)
}

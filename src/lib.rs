//! Structured, leveled JSON logging for network services.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller data ──copy──▶ Entry (cumulative) ───┐
//!                                               │
//!   info!/infof!/infoft! ──▶ ScratchPool ───────┤
//!                                               ▼
//!   carrier (headers, ──▶ correlation ──▶ Fields { severity, msg, request_id, Error, .. }
//!   RPC metadata)                               │
//!                                               ▼
//!                        emit::Logger: time + v ──▶ gate (min level) ──▶ one JSON line ──▶ Sink
//!                                               │
//!                                               └──▶ dropped (no I/O)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use fieldlog::{Fields, Options, RequestContext};
//!
//! fieldlog::configure(&Options {
//!     enabled: true,
//!     app_version: "1.4.0".into(),
//!     log_level: "Debug".into(),
//! });
//!
//! fieldlog::with_fields(&Fields::new().with("user", 42)).info("signed in");
//! fieldlog::infof!("Sending: {}", "X");
//! fieldlog::infoft!(RequestContext::background(), "{} bytes", 512);
//! ```

// Record model
pub mod error;
pub mod record;

// Correlation and configuration
pub mod config;
pub mod correlation;

// Pipeline and entry points
pub mod emit;
pub mod log;

// Cross-cutting concerns
pub mod http;
pub mod observability;

pub use config::Options;
pub use correlation::{Carrier, RequestContext, REQUEST_ID_HEADER};
pub use emit::{Logger, Outcome, Settings, Sink};
pub use error::{LogError, LogResult};
pub use log::global::*;
pub use log::Entry;
pub use record::{Fields, Level};

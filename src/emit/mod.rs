//! Gate-and-emit subsystem.
//!
//! # Data Flow
//! ```text
//! Fields (severity, msg, ...)
//!     → logger.rs: add base fields (time, v)
//!     → logger.rs: resolve severity, compare with Settings::min_level
//!         below → Dropped (no I/O)
//!         else  → encode in memory, one write
//!     → sink.rs (stdout, discard, memory, any writer)
//! ```
//!
//! # Design Decisions
//! - One record, one write; records never interleave
//! - Failures are diagnostics, never caller errors
//! - Settings swap atomically, so reconfiguring under load is safe

pub mod logger;
pub mod sink;

pub use logger::{Logger, Outcome, Settings};
pub use sink::{DiscardSink, MemorySink, Sink, StdoutSink, WriterSink};

//! Observability of the logger itself.
//!
//! # Data Flow
//! ```text
//! pipeline failures / severity fallbacks
//!     → diagnostics.rs (tracing events on stderr)
//!     → metrics.rs (counters)
//! ```
//!
//! # Design Decisions
//! - Diagnostics go to stderr so they never mix with records on stdout
//! - No exporter is bundled; the host application installs one

pub mod diagnostics;
pub mod metrics;

pub use diagnostics::init_diagnostics;

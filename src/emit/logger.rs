//! Severity gate and record emission.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::Options;
use crate::error::LogResult;
use crate::emit::sink::{DiscardSink, Sink, StdoutSink};
use crate::observability::metrics;
use crate::record::{Fields, Level, ScratchPool};

/// Where records go, which ones pass, and the version stamped on each.
#[derive(Clone)]
pub struct Settings {
    /// Record destination.
    pub destination: Arc<dyn Sink>,

    /// Records ranked below this are dropped.
    pub min_level: Level,

    /// Application version written as `v`.
    pub version: String,
}

impl Settings {
    /// Settings for `options`. Enabled logging writes to stdout, disabled
    /// logging to a discard sink.
    pub fn from_options(options: &Options) -> Self {
        let destination: Arc<dyn Sink> = if options.enabled {
            Arc::new(StdoutSink)
        } else {
            Arc::new(DiscardSink)
        };

        Self {
            destination,
            min_level: options.level(),
            version: options.app_version.clone(),
        }
    }

    /// Replace the destination.
    pub fn with_destination(mut self, destination: Arc<dyn Sink>) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            destination: Arc::new(StdoutSink),
            min_level: Level::Info,
            version: String::new(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("min_level", &self.min_level)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// What happened to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Written to the destination.
    Emitted,
    /// Below the minimum severity; nothing was written.
    Dropped,
    /// Passed the gate but could not be encoded or written.
    Lost,
}

/// A logger: settings plus the scratch pool for stateless calls.
///
/// Settings sit behind an `ArcSwap`, so reconfiguring is safe while other
/// threads are logging; each record sees one consistent snapshot.
pub struct Logger {
    settings: ArcSwap<Settings>,
    pool: ScratchPool,
}

impl Logger {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
            pool: ScratchPool::new(),
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::new(Settings::from_options(options))
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    /// Swap in new settings.
    pub fn reconfigure(&self, settings: Settings) {
        tracing::debug!(
            min_level = %settings.min_level,
            version = %settings.version,
            "Logger reconfigured"
        );
        self.settings.store(Arc::new(settings));
    }

    /// Reconfigure from options. Unknown level names fall back to info.
    pub fn configure(&self, options: &Options) {
        self.reconfigure(Settings::from_options(options));
    }

    pub fn pool(&self) -> &ScratchPool {
        &self.pool
    }

    /// Whether a record at `level` would pass the gate right now.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.settings.load().min_level
    }

    /// Stamp base fields, gate on severity, and write `fields` as one line.
    ///
    /// Never fails: encode and write errors are reported as diagnostics and
    /// the record is lost. Dropped records leave no trace.
    pub fn emit(&self, fields: &mut Fields) -> Outcome {
        let settings = self.settings.load();
        fields.add_base_fields(&settings.version);

        let level = fields.resolve_severity();
        if level < settings.min_level {
            return Outcome::Dropped;
        }

        match write_line(&settings, fields) {
            Ok(()) => {
                metrics::record_emitted(level);
                Outcome::Emitted
            }
            Err(e) => {
                tracing::error!(error = %e, "logging through fieldlog: record lost");
                metrics::record_lost(e.kind());
                Outcome::Lost
            }
        }
    }
}

fn write_line(settings: &Settings, fields: &Fields) -> LogResult<()> {
    let line = fields.encode_line()?;
    settings.destination.write_record(&line)?;
    Ok(())
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &*self.settings.load())
            .field("idle_scratch", &self.pool.idle())
            .finish()
    }
}

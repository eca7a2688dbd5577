//! The per-record key/value payload.

use std::collections::hash_map::{self, HashMap};
use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{LogError, LogResult};
use crate::observability::metrics;
use crate::record::level::Level;

pub const SEVERITY_KEY: &str = "severity";
pub const MESSAGE_KEY: &str = "msg";
pub const TIME_KEY: &str = "time";
pub const VERSION_KEY: &str = "v";
pub const REQUEST_ID_KEY: &str = "request_id";
pub const ERROR_KEY: &str = "Error";

/// Key/value payload of one record.
///
/// Serializes as a flat JSON object. Key order is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fields {
    inner: HashMap<String, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.inner.insert(key.into(), value.into());
        self
    }

    /// Insert any serializable value, e.g. a request or response struct.
    pub fn try_insert<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> LogResult<&mut Self> {
        let value = serde_json::to_value(value)?;
        self.inner.insert(key.into(), value);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.inner.iter()
    }

    /// Fold `other` into `self`; keys already present are overwritten.
    pub fn merge(&mut self, other: Fields) {
        self.inner.extend(other.inner);
    }

    /// Store the non-empty errors, joined with `", "`, under `Error`.
    ///
    /// `None` entries are skipped. When nothing is left the key is not
    /// touched.
    pub fn attach_errors<I, E>(&mut self, errors: I)
    where
        I: IntoIterator<Item = Option<E>>,
        E: fmt::Display,
    {
        let rendered: Vec<String> = errors
            .into_iter()
            .flatten()
            .map(|err| err.to_string())
            .collect();

        if !rendered.is_empty() {
            self.inner
                .insert(ERROR_KEY.to_string(), Value::String(rendered.join(", ")));
        }
    }

    /// Stamp `time` and the application version `v`.
    pub fn add_base_fields(&mut self, version: &str) {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
        self.inner.insert(TIME_KEY.to_string(), Value::String(now));
        self.inner
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
    }

    pub fn set_severity(&mut self, level: Level) -> &mut Self {
        self.inner
            .insert(SEVERITY_KEY.to_string(), Value::String(level.as_str().to_string()));
        self
    }

    pub fn set_message(&mut self, msg: impl Into<String>) -> &mut Self {
        self.inner
            .insert(MESSAGE_KEY.to_string(), Value::String(msg.into()));
        self
    }

    /// Parse the `severity` field.
    pub fn severity(&self) -> LogResult<Level> {
        match self.inner.get(SEVERITY_KEY) {
            Some(Value::String(s)) => s.parse(),
            _ => Err(LogError::MissingSeverity),
        }
    }

    /// Severity used by the gate. Falls back to [`Level::Info`] when the field
    /// is absent or not a level name.
    pub fn resolve_severity(&self) -> Level {
        match self.severity() {
            Ok(level) => level,
            Err(e) => {
                tracing::warn!(error = %e, "checking log message severity level, defaulting to info");
                metrics::record_severity_fallback();
                Level::Info
            }
        }
    }

    /// Encode as one JSON object followed by a newline.
    pub fn encode_line(&self) -> LogResult<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }

    /// Remove every key, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl From<HashMap<String, Value>> for Fields {
    fn from(inner: HashMap<String, Value>) -> Self {
        Self { inner }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

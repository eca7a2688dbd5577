//! Logger metrics.
//!
//! # Metrics
//! - `fieldlog_records_emitted_total` (counter): records written, by severity
//! - `fieldlog_records_lost_total` (counter): encode/write failures, by reason
//! - `fieldlog_severity_fallback_total` (counter): records defaulted to info

use metrics::counter;

use crate::record::level::Level;

pub fn record_emitted(level: Level) {
    counter!("fieldlog_records_emitted_total", "severity" => level.as_str()).increment(1);
}

pub fn record_lost(reason: &'static str) {
    counter!("fieldlog_records_lost_total", "reason" => reason).increment(1);
}

pub fn record_severity_fallback() {
    counter!("fieldlog_severity_fallback_total").increment(1);
}

#[cfg(test)]
pub(crate) mod capture {
    use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
    use parking_lot::Mutex;

    /// Recorder that remembers the name of every counter touched.
    #[derive(Default)]
    pub(crate) struct CounterNames(Mutex<Vec<String>>);

    impl CounterNames {
        pub(crate) fn names(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    impl Recorder for CounterNames {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.0.lock().push(key.name().to_string());
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }
}

//! Stopwatch scopes and performance monitors.
//!
//! Timing is purely observational: a [`Stopwatch`] reports its elapsed time to
//! a [`PerformanceMonitor`] and to the `tracing` stream, and nothing in the
//! engine reads the measurements back.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tabsort_contracts::performance::PerformanceMonitor;
use tracing::debug;

/// Samples kept per tag by [`RecordingPerformanceMonitor`].
const DEFAULT_HISTORY: usize = 100;

/// Named timing scope. Reports on [`Stopwatch::stop`] or when dropped,
/// whichever comes first.
pub struct Stopwatch<'a> {
    monitor: &'a dyn PerformanceMonitor,
    tag: &'a str,
    started: Instant,
    reported: bool,
}

impl fmt::Debug for Stopwatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("tag", &self.tag)
            .field("elapsed_us", &self.started.elapsed().as_micros())
            .field("reported", &self.reported)
            .finish()
    }
}

impl<'a> Stopwatch<'a> {
    pub fn start(monitor: &'a dyn PerformanceMonitor, tag: &'a str) -> Self {
        Self {
            monitor,
            tag,
            started: Instant::now(),
            reported: false,
        }
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the scope now and return the reported duration.
    pub fn stop(mut self) -> Duration {
        self.report()
    }

    fn report(&mut self) -> Duration {
        let elapsed = self.started.elapsed();
        if !self.reported {
            self.reported = true;
            debug!(
                tag = self.tag,
                elapsed_us = elapsed.as_micros() as u64,
                "stopwatch scope finished"
            );
            self.monitor.record(self.tag, elapsed);
        }
        elapsed
    }
}

impl Drop for Stopwatch<'_> {
    fn drop(&mut self) {
        self.report();
    }
}

/// Discards every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPerformanceMonitor;

impl PerformanceMonitor for NoopPerformanceMonitor {
    fn record(&self, _tag: &str, _elapsed: Duration) {}
}

/// Keeps a bounded history of samples per tag.
pub struct RecordingPerformanceMonitor {
    history: usize,
    samples: RwLock<HashMap<String, VecDeque<Duration>>>,
}

impl fmt::Debug for RecordingPerformanceMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = self
            .samples
            .read()
            .map(|samples| samples.len())
            .unwrap_or(0);

        f.debug_struct("RecordingPerformanceMonitor")
            .field("history", &self.history)
            .field("tags", &tags)
            .finish()
    }
}

impl Default for RecordingPerformanceMonitor {
    fn default() -> Self {
        Self::with_history(DEFAULT_HISTORY)
    }
}

impl RecordingPerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `history` samples per tag (at least one).
    pub fn with_history(history: usize) -> Self {
        Self {
            history: history.max(1),
            samples: RwLock::new(HashMap::new()),
        }
    }

    /// Recorded samples for `tag`, oldest first.
    pub fn samples(&self, tag: &str) -> Vec<Duration> {
        self.samples
            .read()
            .ok()
            .and_then(|samples| {
                samples.get(tag).map(|s| s.iter().copied().collect())
            })
            .unwrap_or_default()
    }

    pub fn count(&self, tag: &str) -> usize {
        self.samples
            .read()
            .ok()
            .and_then(|samples| samples.get(tag).map(VecDeque::len))
            .unwrap_or(0)
    }

    pub fn total(&self, tag: &str) -> Duration {
        self.samples(tag).into_iter().sum()
    }
}

impl PerformanceMonitor for RecordingPerformanceMonitor {
    fn record(&self, tag: &str, elapsed: Duration) {
        if let Ok(mut samples) = self.samples.write() {
            let entry = samples.entry(tag.to_string()).or_default();
            entry.push_back(elapsed);
            if entry.len() > self.history {
                entry.pop_front();
            }
        }
    }
}

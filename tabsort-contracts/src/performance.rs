use std::time::Duration;

/// Sink for timing samples of named processing scopes. Purely
/// observational: implementations must not influence the measured work.
pub trait PerformanceMonitor: Send + Sync {
    fn record(&self, tag: &str, elapsed: Duration);
}

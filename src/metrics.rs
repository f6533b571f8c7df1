//! Observability hook for query resolution.

use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// Metrics observer for the resolver.
pub trait MatchMetrics: Send + Sync {
    /// Called once per [`resolve`](crate::Resolver::resolve) with the wall
    /// latency, the number of query tokens, and how many accepted names the
    /// resolution produced.
    fn record_resolve(&self, latency: Duration, token_count: usize, accepted_count: usize);
}

/// Install or clear the global match metrics recorder.
///
/// Typically done once during service startup so all resolver calls share
/// the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

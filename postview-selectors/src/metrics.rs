//! Selector metrics
//!
//! Every selector instance counts its own hits, misses and recompute time.
//! Instances created through a [`MetricsRegistry`] share one counter set
//! per selector name instead, so reports can aggregate across call sites.
//! Counters are observational only and never influence cache decisions.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Counters for one selector (or one selector name, when shared)
#[derive(Debug)]
pub struct SelectorMetrics {
    pub selector_name: &'static str,

    pub hit_count: AtomicU64,

    pub miss_count: AtomicU64,

    /// Total time spent recomputing (nanoseconds)
    pub total_compute_time_ns: AtomicU64,
}

impl SelectorMetrics {
    pub fn new(selector_name: &'static str) -> Self {
        SelectorMetrics {
            selector_name,
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
            total_compute_time_ns: AtomicU64::new(0),
        }
    }

    pub fn record_hit(&self) {
        self.hit_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a miss together with the time spent recomputing
    pub fn record_miss(&self, duration: Duration) {
        self.miss_count.fetch_add(1, Ordering::Relaxed);
        self.total_compute_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.hit_count.store(0, Ordering::Relaxed);
        self.miss_count.store(0, Ordering::Relaxed);
        self.total_compute_time_ns.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            selector_name: self.selector_name,
            hits: self.hit_count.load(Ordering::Relaxed),
            misses: self.miss_count.load(Ordering::Relaxed),
            total_time_ns: self.total_compute_time_ns.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of selector counters
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    pub selector_name: &'static str,
    pub hits: u64,
    pub misses: u64,
    pub total_time_ns: u64,
}

impl MetricsSnapshot {
    /// Cache hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Average recompute time per miss
    pub fn avg_compute_time(&self) -> Duration {
        if self.misses == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(self.total_time_ns / self.misses)
        }
    }
}

impl std::fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selector: {}", self.selector_name)?;
        writeln!(
            f,
            "  Hits: {} | Misses: {} | Hit Rate: {:.1}%",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )?;
        writeln!(
            f,
            "  Avg Compute: {:.3}ms | Total Compute: {:.3}ms",
            self.avg_compute_time().as_secs_f64() * 1000.0,
            Duration::from_nanos(self.total_time_ns).as_secs_f64() * 1000.0
        )?;
        Ok(())
    }
}

/// Shared counters keyed by selector name
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    metrics: DashMap<&'static str, Arc<SelectorMetrics>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the counters for a selector name
    pub fn metrics_for(&self, selector_name: &'static str) -> Arc<SelectorMetrics> {
        Arc::clone(
            self.metrics
                .entry(selector_name)
                .or_insert_with(|| Arc::new(SelectorMetrics::new(selector_name)))
                .value(),
        )
    }

    /// Snapshots of every registered selector, sorted by name
    pub fn snapshots(&self) -> Vec<MetricsSnapshot> {
        let mut snapshots: Vec<_> = self
            .metrics
            .iter()
            .map(|entry| entry.value().snapshot())
            .collect();
        snapshots.sort_by_key(|s| s.selector_name);
        snapshots
    }

    pub fn reset(&self) {
        for entry in self.metrics.iter() {
            entry.value().reset();
        }
    }
}

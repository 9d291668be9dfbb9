//! Lookup metrics.
//!
//! Counters for translation lookups and writes served by the catalog.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Number of lookup requests (single key or filtered)
    lookups: AtomicUsize,

    /// Lookups that returned at least one translation
    hits: AtomicUsize,

    /// Lookups that returned nothing
    misses: AtomicUsize,

    /// Translations written
    writes: AtomicUsize,

    /// Translations deleted
    deletes: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::default)
    }

    /// Record a lookup and whether it found anything.
    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if found {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let hits = self.hits.load(Ordering::Relaxed);
        let hit_rate = if lookups > 0 {
            (hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            hits,
            misses: self.misses.load(Ordering::Relaxed),
            hit_rate,
            writes: self.writes.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of the lookup counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub hits: usize,
    pub misses: usize,
    /// Percentage of lookups that found something (0.0 - 100.0)
    pub hit_rate: f64,
    pub writes: usize,
    pub deletes: usize,
}

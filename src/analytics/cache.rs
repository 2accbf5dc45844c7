//! TTL cache in front of an analytics provider.
//!
//! The cache is owned by whoever constructs it and passed in where needed;
//! there is no process-wide instance. Backed by [`moka`] so expired entries
//! are evicted without a sweeper of our own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use crate::analytics::provider::AnalyticsProvider;
use crate::domain::AnalyticsRecord;
use crate::error::Result;

/// Default lifetime of a cached entry
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Most channels kept at once
const MAX_CACHE_ENTRIES: u64 = 1024;

/// Hit/miss counters for a cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Caches `fetch` results per channel for `ttl`.
///
/// Absent records are cached too; errors are not, so the next call retries.
pub struct CachedAnalyticsProvider<P> {
    inner: P,
    ttl: Duration,
    entries: Cache<String, Option<AnalyticsRecord>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<P: AnalyticsProvider> CachedAnalyticsProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(ttl)
            .build();
        Self {
            inner,
            ttl,
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop one channel's entry
    pub async fn invalidate(&self, channel: &str) {
        self.entries.invalidate(channel).await;
    }

    /// Drop every entry; counters are kept
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Number of live entries after pending evictions have run
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[async_trait]
impl<P: AnalyticsProvider> AnalyticsProvider for CachedAnalyticsProvider<P> {
    async fn fetch(&self, channel: &str) -> Result<Option<AnalyticsRecord>> {
        if let Some(record) = self.entries.get(channel).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(channel, "Analytics cache hit");
            return Ok(record);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(channel, "Analytics cache miss");
        let record = self.inner.fetch(channel).await?;
        self.entries.insert(channel.to_string(), record.clone()).await;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::provider::StaticAnalyticsProvider;
    use crate::error::PlannerError;
    use std::sync::atomic::AtomicUsize;

    fn provider() -> StaticAnalyticsProvider {
        StaticAnalyticsProvider::new(vec![AnalyticsRecord::new("rust").with_best_hour(9)])
    }

    struct FailingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AnalyticsProvider for FailingProvider {
        async fn fetch(&self, _channel: &str) -> Result<Option<AnalyticsRecord>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Err(PlannerError::Analytics("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_second_fetch_hits_cache() {
        let cache = CachedAnalyticsProvider::new(provider(), DEFAULT_CACHE_TTL);
        let first = cache.fetch("rust").await.unwrap();
        let second = cache.fetch("rust").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.inner().fetch_count(), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_absent_record_is_cached() {
        let cache = CachedAnalyticsProvider::new(provider(), DEFAULT_CACHE_TTL);
        assert!(cache.fetch("golang").await.unwrap().is_none());
        assert!(cache.fetch("golang").await.unwrap().is_none());
        assert_eq!(cache.inner().fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_refetched() {
        let cache = CachedAnalyticsProvider::new(provider(), Duration::from_millis(50));
        cache.fetch("rust").await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.fetch("rust").await.unwrap();
        assert_eq!(cache.inner().fetch_count(), 2);
        assert_eq!(cache.stats().misses, 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = CachedAnalyticsProvider::new(provider(), DEFAULT_CACHE_TTL);
        cache.fetch("rust").await.unwrap();
        cache.invalidate("rust").await;
        cache.fetch("rust").await.unwrap();
        assert_eq!(cache.inner().fetch_count(), 2);

        cache.clear();
        assert_eq!(cache.entry_count().await, 0);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = CachedAnalyticsProvider::new(
            FailingProvider {
                calls: AtomicUsize::new(0),
            },
            DEFAULT_CACHE_TTL,
        );
        assert!(cache.fetch("rust").await.is_err());
        assert!(cache.fetch("rust").await.is_err());
        assert_eq!(cache.inner().calls.load(Ordering::Relaxed), 2);
        assert_eq!(cache.stats().misses, 2);
    }
}

//! Analytics collaborator
//!
//! Providers hand back an optional `AnalyticsRecord` per channel. Fetching
//! happens before generation; a failed or missing fetch only means the
//! channel is planned with default hours.

pub mod cache;
pub mod provider;

pub use cache::{CacheStats, CachedAnalyticsProvider, DEFAULT_CACHE_TTL};
pub use provider::{AnalyticsProvider, FileAnalyticsProvider, StaticAnalyticsProvider, parse_records};

use futures::future::join_all;

use crate::domain::AnalyticsRecord;

/// Fetch analytics for every channel concurrently.
///
/// Returned records carry the channel name they were requested for.
/// Failures are logged and skipped.
pub async fn gather_analytics<P>(provider: &P, channels: &[String]) -> Vec<AnalyticsRecord>
where
    P: AnalyticsProvider + ?Sized,
{
    let fetches = channels.iter().map(|channel| async move { (channel, provider.fetch(channel).await) });

    let mut records = Vec::with_capacity(channels.len());
    for (channel, result) in join_all(fetches).await {
        match result {
            Ok(Some(mut record)) => {
                record.channel = channel.clone();
                records.push(record);
            }
            Ok(None) => log::debug!("No analytics for '{}', using defaults", channel),
            Err(e) => log::warn!("Analytics fetch failed for '{}', using defaults: {}", channel, e),
        }
    }
    records
}

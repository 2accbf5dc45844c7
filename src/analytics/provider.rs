use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{AnalyticsRecord, DEFAULT_DISPLAY_PREFIX, normalize_channel};
use crate::error::Result;

/// Source of per-channel activity statistics.
///
/// `Ok(None)` means the channel has no statistics; callers plan with
/// defaults in that case.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    async fn fetch(&self, channel: &str) -> Result<Option<AnalyticsRecord>>;
}

/// In-memory records keyed by normalized channel name
#[derive(Debug, Default)]
pub struct StaticAnalyticsProvider {
    records: HashMap<String, AnalyticsRecord>,
    fetches: AtomicUsize,
}

impl StaticAnalyticsProvider {
    pub fn new(records: impl IntoIterator<Item = AnalyticsRecord>) -> Self {
        Self::with_prefix(records, DEFAULT_DISPLAY_PREFIX)
    }

    /// Key records by channel after stripping `prefix`; unusable names are dropped
    pub fn with_prefix(records: impl IntoIterator<Item = AnalyticsRecord>, prefix: &str) -> Self {
        let records = records
            .into_iter()
            .filter_map(|record| normalize_channel(&record.channel, prefix).map(|channel| (channel, record)))
            .collect();
        Self {
            records,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of `fetch` calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AnalyticsProvider for StaticAnalyticsProvider {
    async fn fetch(&self, channel: &str) -> Result<Option<AnalyticsRecord>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.get(channel).cloned())
    }
}

/// Records stored as a JSON or YAML list on disk.
///
/// The file is re-read on every fetch so edits show up without a restart;
/// wrap it in a `CachedAnalyticsProvider` to bound the reads.
#[derive(Debug, Clone)]
pub struct FileAnalyticsProvider {
    path: PathBuf,
    prefix: String,
}

impl FileAnalyticsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            prefix: DEFAULT_DISPLAY_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every record in the file
    pub async fn load(&self) -> Result<Vec<AnalyticsRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_records(&self.path, &content)
    }
}

#[async_trait]
impl AnalyticsProvider for FileAnalyticsProvider {
    async fn fetch(&self, channel: &str) -> Result<Option<AnalyticsRecord>> {
        let records = self.load().await?;
        Ok(records
            .into_iter()
            .find(|record| normalize_channel(&record.channel, &self.prefix).as_deref() == Some(channel)))
    }
}

/// Parse a record list, choosing YAML or JSON by file extension
pub fn parse_records(path: &Path, content: &str) -> Result<Vec<AnalyticsRecord>> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    if is_yaml {
        Ok(serde_yaml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

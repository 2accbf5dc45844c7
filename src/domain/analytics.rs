//! Per-channel activity statistics consumed by the slot resolver.

use serde::{Deserialize, Serialize};

/// Weekday rows in an activity heatmap
pub const WEEKDAYS: usize = 7;
/// Hour columns in an activity heatmap
pub const HOURS_PER_DAY: usize = 24;

/// Activity statistics for one channel.
///
/// Field names follow the stored statistics shape; the aliases accept the
/// older `subreddit`/`best_posting_*`/`activity_heatmap` spelling. Values are
/// kept raw and sanitized by the accessor methods, so a stale or malformed
/// record degrades to "no preference" instead of failing to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    #[serde(default, alias = "subreddit", alias = "subreddit_name")]
    pub channel: String,

    #[serde(default, alias = "best_posting_hour")]
    pub best_hour: Option<i64>,

    #[serde(default, alias = "best_posting_day")]
    pub best_weekday: Option<i64>,

    #[serde(default, alias = "activity_heatmap")]
    pub hourly_activity_heatmap: Option<Vec<Vec<Option<f64>>>>,
}

impl AnalyticsRecord {
    /// Create an empty record for a channel
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            ..Self::default()
        }
    }

    pub fn with_best_hour(mut self, hour: i64) -> Self {
        self.best_hour = Some(hour);
        self
    }

    pub fn with_best_weekday(mut self, weekday: i64) -> Self {
        self.best_weekday = Some(weekday);
        self
    }

    pub fn with_heatmap(mut self, heatmap: Vec<Vec<f64>>) -> Self {
        self.hourly_activity_heatmap = Some(heatmap.into_iter().map(|row| row.into_iter().map(Some).collect()).collect());
        self
    }

    /// Best posting hour, if present and within 0..24
    pub fn hour(&self) -> Option<u32> {
        self.best_hour
            .filter(|h| (0..HOURS_PER_DAY as i64).contains(h))
            .map(|h| h as u32)
    }

    /// Best posting weekday (0 = Sunday), if present and within 0..7
    pub fn weekday(&self) -> Option<u32> {
        self.best_weekday
            .filter(|d| (0..WEEKDAYS as i64).contains(d))
            .map(|d| d as u32)
    }

    /// Heatmap with missing, negative or non-finite cells read as zero.
    ///
    /// Rows beyond the seventh and columns beyond the 24th are ignored.
    /// Returns `None` when no heatmap is present or it has no rows.
    pub fn heatmap(&self) -> Option<Vec<[f64; HOURS_PER_DAY]>> {
        let raw = self.hourly_activity_heatmap.as_ref()?;
        if raw.is_empty() {
            return None;
        }

        let rows = raw
            .iter()
            .take(WEEKDAYS)
            .map(|row| {
                let mut cells = [0.0; HOURS_PER_DAY];
                for (hour, value) in row.iter().take(HOURS_PER_DAY).enumerate() {
                    cells[hour] = match value {
                        Some(v) if v.is_finite() && *v > 0.0 => *v,
                        _ => 0.0,
                    };
                }
                cells
            })
            .collect();
        Some(rows)
    }
}

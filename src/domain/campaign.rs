//! Campaign inputs: reputation tier, content category and the validated config.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::channel::normalize_channels;
use crate::error::{PlannerError, Result};

/// Shortest campaign accepted
pub const MIN_TOTAL_DAYS: u32 = 7;
/// Longest campaign accepted
pub const MAX_TOTAL_DAYS: u32 = 90;
/// Campaign length when none is given
pub const DEFAULT_TOTAL_DAYS: u32 = 14;
/// Most channels one campaign may target
pub const MAX_CHANNELS: usize = 5;
/// Prefix stripped from channel names and used when displaying them
pub const DEFAULT_DISPLAY_PREFIX: &str = "r/";

/// Account standing, 1 (new/low) to 5 (established).
///
/// Lower tiers get a longer engagement warm-up and a slower AMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ReputationTier(u8);

impl ReputationTier {
    pub fn new(tier: i64) -> Result<Self> {
        if (1..=5).contains(&tier) {
            Ok(Self(tier as u8))
        } else {
            Err(PlannerError::InvalidTier(tier))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Days of engagement-only warm-up before the first launch
    pub fn engagement_days(self) -> u32 {
        match self.0 {
            1 => 5,
            2 => 4,
            3 => 3,
            4 => 2,
            _ => 1,
        }
    }

    /// Days between the milestone and the AMA
    pub fn ama_offset_range(self) -> RangeInclusive<u32> {
        match self.0 {
            1 => 5..=7,
            2 => 4..=6,
            3 => 3..=5,
            4 => 2..=4,
            _ => 2..=3,
        }
    }
}

impl TryFrom<i64> for ReputationTier {
    type Error = PlannerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ReputationTier> for i64 {
    fn from(tier: ReputationTier) -> Self {
        tier.0 as i64
    }
}

impl fmt::Display for ReputationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content category that gates template availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Saas,
    Education,
    Skincare,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Saas => "saas",
            Category::Education => "education",
            Category::Skincare => "skincare",
        }
    }

    /// Parse an optional category where `none` and the empty string mean "no category"
    pub fn parse_optional(value: &str) -> Result<Option<Self>> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "saas" => Ok(Category::Saas),
            "education" => Ok(Category::Education),
            "skincare" => Ok(Category::Skincare),
            other => Err(PlannerError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated campaign input as received from a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub channels: Vec<String>,
    pub reputation_tier: i64,
    #[serde(default)]
    pub total_days: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default = "default_display_prefix")]
    pub display_prefix: String,
    #[serde(default = "default_max_channels")]
    pub max_channels: usize,
}

fn default_display_prefix() -> String {
    DEFAULT_DISPLAY_PREFIX.to_string()
}

fn default_max_channels() -> usize {
    MAX_CHANNELS
}

impl CampaignRequest {
    pub fn new(channels: Vec<String>, reputation_tier: i64) -> Self {
        Self {
            channels,
            reputation_tier,
            total_days: None,
            category: None,
            start_date: None,
            display_prefix: default_display_prefix(),
            max_channels: default_max_channels(),
        }
    }

    /// Check and normalize the request into a config the scheduler can trust.
    ///
    /// A missing start date means "today" in UTC.
    pub fn validate(self) -> Result<CampaignConfig> {
        let (channels, rejected) = normalize_channels(&self.channels, &self.display_prefix);
        if let Some(bad) = rejected.first() {
            return Err(PlannerError::InvalidChannel(bad.clone()));
        }
        if channels.is_empty() {
            return Err(PlannerError::NoChannels);
        }
        let max = self.max_channels.clamp(1, MAX_CHANNELS);
        if channels.len() > max {
            return Err(PlannerError::TooManyChannels {
                count: channels.len(),
                max,
            });
        }

        let tier = ReputationTier::new(self.reputation_tier)?;

        let total_days = self.total_days.unwrap_or(DEFAULT_TOTAL_DAYS as i64);
        if !(MIN_TOTAL_DAYS as i64..=MAX_TOTAL_DAYS as i64).contains(&total_days) {
            return Err(PlannerError::InvalidDuration(total_days));
        }

        let category = match self.category.as_deref() {
            Some(raw) => Category::parse_optional(raw)?,
            None => None,
        };

        Ok(CampaignConfig {
            channels,
            tier,
            total_days: total_days as u32,
            category,
            start_date: self.start_date.unwrap_or_else(|| Utc::now().date_naive()),
            display_prefix: self.display_prefix,
        })
    }
}

/// Validated campaign parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Normalized, deduplicated, 1..=5 entries
    pub channels: Vec<String>,
    pub tier: ReputationTier,
    /// 7..=90
    pub total_days: u32,
    pub category: Option<Category>,
    /// Day 0 of the campaign (UTC calendar date)
    pub start_date: NaiveDate,
    pub display_prefix: String,
}

impl CampaignConfig {
    /// Channel name as shown to the operator, e.g. `r/rust`
    pub fn display_channel(&self, channel: &str) -> String {
        format!("{}{}", self.display_prefix, channel)
    }

    /// First configured channel; templates greet it by name
    pub fn primary_channel(&self) -> &str {
        self.channels.first().map(String::as_str).unwrap_or_default()
    }

    pub fn single_channel(&self) -> bool {
        self.channels.len() == 1
    }

    /// Absolute UTC instant of `hour`:00 on campaign day `day`
    pub fn instant(&self, day: u32, hour: u32) -> DateTime<Utc> {
        let midnight = self.start_date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        midnight + Duration::days(day as i64) + Duration::hours(hour as i64)
    }

    /// Weekday of campaign day `day`, 0 = Sunday
    pub fn weekday_of(&self, day: u32) -> u32 {
        (self.start_date + Duration::days(day as i64))
            .weekday()
            .num_days_from_sunday()
    }
}

//! Domain types for the campaign planner
//!
//! - Channel normalization
//! - AnalyticsRecord: per-channel activity statistics
//! - ReputationTier, Category, CampaignRequest/CampaignConfig: campaign inputs
//! - CampaignTask, ContentKind, TemplateKind, TaskStatus: placed tasks
//! - Phase, PhaseTask, TaskDetails: the output handed to storage

pub mod analytics;
pub mod campaign;
pub mod channel;
pub mod phase;
pub mod task;

pub use analytics::{AnalyticsRecord, HOURS_PER_DAY, WEEKDAYS};
pub use campaign::{
    CampaignConfig, CampaignRequest, Category, DEFAULT_DISPLAY_PREFIX, DEFAULT_TOTAL_DAYS, MAX_CHANNELS,
    MAX_TOTAL_DAYS, MIN_TOTAL_DAYS, ReputationTier,
};
pub use channel::{normalize_channel, normalize_channels};
pub use phase::{Phase, PhaseTask, TaskDetails};
pub use task::{CampaignTask, ContentKind, TaskStatus, TemplateKind};

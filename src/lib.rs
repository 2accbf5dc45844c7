//! Campaign Planner - a constraint-aware posting schedule generator
//!
//! Given a set of channels, the operator's reputation tier, optional
//! per-channel activity analytics and a campaign length, the planner places
//! engagement tasks and a launch → milestone → AMA chain per channel on a
//! day/hour grid, attaches a deterministic content template to each post and
//! groups the result into ordered phases.
//!
//! ```ignore
//! use campaign_planner::{CampaignPlan, CampaignRequest};
//!
//! let config = CampaignRequest::new(vec!["rust".into()], 3).validate()?;
//! let plan = CampaignPlan::generate(&config, Vec::new(), 42);
//! ```

pub mod analytics;
pub mod domain;
pub mod error;
pub mod id;
pub mod plan;
pub mod progress;
pub mod scheduler;
pub mod templates;

pub use domain::{
    AnalyticsRecord, CampaignConfig, CampaignRequest, CampaignTask, Category, ContentKind, Phase, PhaseTask,
    ReputationTier, TaskStatus, TemplateKind,
};
pub use error::{PlannerError, Result};
pub use plan::{CampaignPlan, CampaignPlanBuilder};

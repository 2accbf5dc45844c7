//! Campaign plan generation
//!
//! - **builder**: engagement seeding and the per-channel post chain
//! - **phases**: grouping and ordering of placed tasks
//! - **digest**: content hash for comparing generated plans

pub mod builder;
pub mod digest;
pub mod phases;

pub use builder::CampaignPlanBuilder;
pub use digest::digest;
pub use phases::{assemble_phases, sort_phases};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::domain::{AnalyticsRecord, CampaignConfig, Category, Phase, PhaseTask, ReputationTier};
use crate::error::Result;

/// A generated plan plus the inputs needed to replay it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPlan {
    pub channels: Vec<String>,
    pub reputation_tier: ReputationTier,
    pub total_days: u32,
    #[serde(default)]
    pub category: Option<Category>,
    pub start_date: NaiveDate,
    pub seed: u64,
    pub phases: Vec<Phase>,
}

impl CampaignPlan {
    /// Generate a plan with a `StdRng` seeded from `seed`
    pub fn generate(
        config: &CampaignConfig,
        analytics: impl IntoIterator<Item = AnalyticsRecord>,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let phases = CampaignPlanBuilder::new(config).with_analytics(analytics).build(&mut rng);
        log::info!(
            "Generated {} phases for {} channel(s) over {} days (seed {})",
            phases.len(),
            config.channels.len(),
            config.total_days,
            seed
        );

        Self {
            channels: config.channels.clone(),
            reputation_tier: config.tier,
            total_days: config.total_days,
            category: config.category,
            start_date: config.start_date,
            seed,
            phases,
        }
    }

    /// All tasks across phases, in phase order
    pub fn tasks(&self) -> impl Iterator<Item = &PhaseTask> {
        self.phases.iter().flat_map(|p| p.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.tasks().count()
    }

    /// Digest of the phase list only, so status edits change it but metadata does not
    pub fn digest(&self) -> Result<String> {
        digest(&self.phases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CampaignRequest;

    fn config() -> CampaignConfig {
        let mut req = CampaignRequest::new(vec!["rust".to_string(), "golang".to_string()], 2);
        req.total_days = Some(28);
        req.start_date = NaiveDate::from_ymd_opt(2025, 3, 3);
        req.validate().unwrap()
    }

    #[test]
    fn test_generate_records_inputs() {
        let config = config();
        let plan = CampaignPlan::generate(&config, Vec::new(), 99);
        assert_eq!(plan.seed, 99);
        assert_eq!(plan.channels, config.channels);
        assert_eq!(plan.total_days, 28);
        // 4 engagement tasks + 3 posts per channel
        assert_eq!(plan.task_count(), 10);
    }

    #[test]
    fn test_same_seed_same_digest() {
        let config = config();
        let a = CampaignPlan::generate(&config, Vec::new(), 5);
        let b = CampaignPlan::generate(&config, Vec::new(), 5);
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }

    #[test]
    fn test_plan_round_trips_through_json() {
        let plan = CampaignPlan::generate(&config(), Vec::new(), 11);
        let json = serde_json::to_string(&plan).unwrap();
        let back: CampaignPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}

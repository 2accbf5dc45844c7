//! Drives one generation call: engagement seeding, then a
//! launch → milestone → AMA chain per channel.

use std::collections::HashMap;

use rand::Rng;

use crate::domain::{AnalyticsRecord, CampaignConfig, CampaignTask, ContentKind, Phase, TemplateKind, normalize_channel};
use crate::plan::phases::assemble_phases;
use crate::scheduler::GreedySlotScheduler;

/// Days added to the launch day for the milestone's desired day
const MILESTONE_OFFSET_DAYS: std::ops::RangeInclusive<u32> = 3..=5;
/// Gap between a milestone and the one that replaces a disallowed AMA
const EXTRA_MILESTONE_OFFSET_DAYS: u32 = 2;

/// Builds the schedule for one validated campaign
#[derive(Debug, Clone)]
pub struct CampaignPlanBuilder<'c> {
    config: &'c CampaignConfig,
    analytics: HashMap<String, AnalyticsRecord>,
}

impl<'c> CampaignPlanBuilder<'c> {
    pub fn new(config: &'c CampaignConfig) -> Self {
        Self {
            config,
            analytics: HashMap::new(),
        }
    }

    /// Attach analytics records.
    ///
    /// Records are keyed by their normalized channel name; records for
    /// channels outside the campaign are ignored and later duplicates win.
    pub fn with_analytics(mut self, records: impl IntoIterator<Item = AnalyticsRecord>) -> Self {
        for record in records {
            match normalize_channel(&record.channel, &self.config.display_prefix) {
                Some(channel) if self.config.channels.contains(&channel) => {
                    self.analytics.insert(channel, record);
                }
                _ => log::debug!("Ignoring analytics for unknown channel '{}'", record.channel),
            }
        }
        self
    }

    pub fn analytics(&self) -> &HashMap<String, AnalyticsRecord> {
        &self.analytics
    }

    /// Place every task, in placement order.
    ///
    /// `rng` only drives the milestone and AMA offsets; the same seed and
    /// inputs always give the same schedule.
    pub fn schedule<R: Rng>(&self, rng: &mut R) -> Vec<CampaignTask> {
        let config = self.config;
        let total_days = config.total_days;
        let engagement_days = config.tier.engagement_days();
        let seeded_days = engagement_days.min(total_days);

        let mut scheduler = GreedySlotScheduler::new(config, &self.analytics);

        for day in 0..seeded_days {
            let channel = &config.channels[day as usize % config.channels.len()];
            let title = format!("Engage: Comment and contribute to {}", config.display_channel(channel));
            scheduler.place_engagement(day, seeded_days, channel, title);
        }

        let ama_allowed = scheduler.selector().supports(TemplateKind::Ama);
        let ama_offsets = config.tier.ama_offset_range();

        for channel in &config.channels {
            let display = config.display_channel(channel);
            let milestone_title = format!("Milestone update in {}", display);

            let launch_day = scheduler
                .place(engagement_days, channel, ContentKind::Launch, format!("Launch post in {}", display), true)
                .scheduled_day;

            let milestone_desired = (launch_day + rng.random_range(MILESTONE_OFFSET_DAYS)).min(total_days - 2);
            let milestone_day = scheduler
                .place(milestone_desired, channel, ContentKind::Milestone, milestone_title.clone(), true)
                .scheduled_day;

            if ama_allowed {
                let ama_desired = (milestone_day + rng.random_range(ama_offsets.clone())).min(total_days - 1);
                scheduler.place(ama_desired, channel, ContentKind::Ama, format!("AMA in {}", display), true);
            } else {
                let extra_desired = (milestone_day + EXTRA_MILESTONE_OFFSET_DAYS).min(total_days - 1);
                scheduler.place(extra_desired, channel, ContentKind::Milestone, milestone_title, true);
            }
        }

        if scheduler.forced_placements() > 0 {
            log::warn!(
                "{} of {} tasks were forced past the scheduling constraints",
                scheduler.forced_placements(),
                scheduler.tasks().len()
            );
        }

        scheduler.into_tasks()
    }

    /// Place every task and group the result into ordered phases
    pub fn build<R: Rng>(&self, rng: &mut R) -> Vec<Phase> {
        let tasks = self.schedule(rng);
        assemble_phases(self.config, &tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CampaignRequest;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(channels: &[&str], tier: i64, days: i64, category: Option<&str>) -> CampaignConfig {
        let mut req = CampaignRequest::new(channels.iter().map(|c| c.to_string()).collect(), tier);
        req.total_days = Some(days);
        req.category = category.map(str::to_string);
        req.start_date = NaiveDate::from_ymd_opt(2025, 1, 6);
        req.validate().unwrap()
    }

    fn kinds(tasks: &[CampaignTask]) -> Vec<ContentKind> {
        tasks.iter().map(|t| t.content_kind).collect()
    }

    #[test]
    fn test_single_channel_worked_example() {
        let config = config(&["test"], 3, 14, None);
        let tasks = CampaignPlanBuilder::new(&config).schedule(&mut StdRng::seed_from_u64(7));

        assert_eq!(
            kinds(&tasks),
            vec![
                ContentKind::Engagement,
                ContentKind::Engagement,
                ContentKind::Engagement,
                ContentKind::Launch,
                ContentKind::Milestone,
                ContentKind::Ama,
            ]
        );
        let engagement: Vec<(u32, u32)> = tasks[..3].iter().map(|t| (t.scheduled_day, t.scheduled_hour)).collect();
        assert_eq!(engagement, vec![(0, 12), (1, 12), (2, 12)]);
        assert_eq!(tasks[0].title, "Engage: Comment and contribute to r/test");
        assert_eq!(tasks[3].id, "post_4");
        assert!(tasks[3].scheduled_day >= 3);
        assert!(tasks[4].scheduled_day >= tasks[3].scheduled_day + 3);
        assert!(tasks.iter().all(|t| t.scheduled_day < 14));
    }

    #[test]
    fn test_engagement_round_robin() {
        let config = config(&["a", "b"], 1, 30, None);
        let tasks = CampaignPlanBuilder::new(&config).schedule(&mut StdRng::seed_from_u64(1));
        let channels: Vec<&str> = tasks
            .iter()
            .filter(|t| t.content_kind == ContentKind::Engagement)
            .map(|t| t.channel.as_str())
            .collect();
        assert_eq!(channels, vec!["a", "b", "a", "b", "a"]);
    }

    #[test]
    fn test_skincare_gets_second_milestone() {
        let config = config(&["glow"], 2, 21, Some("skincare"));
        let tasks = CampaignPlanBuilder::new(&config).schedule(&mut StdRng::seed_from_u64(3));
        assert!(tasks.iter().all(|t| t.content_kind != ContentKind::Ama));
        let milestones: Vec<&CampaignTask> =
            tasks.iter().filter(|t| t.content_kind == ContentKind::Milestone).collect();
        assert_eq!(milestones.len(), 2);
        assert!(milestones[1].scheduled_day >= milestones[0].scheduled_day);
    }

    #[test]
    fn test_short_campaign_caps_desired_days() {
        let config = config(&["a"], 1, 7, None);
        for seed in 0..10 {
            let tasks = CampaignPlanBuilder::new(&config).schedule(&mut StdRng::seed_from_u64(seed));
            assert_eq!(tasks.len(), 8);
            assert!(tasks.iter().all(|t| t.scheduled_day < 7 && t.scheduled_hour < 24));
        }
    }

    #[test]
    fn test_with_analytics_filters_unknown_channels() {
        let config = config(&["rust"], 3, 14, None);
        let builder = CampaignPlanBuilder::new(&config).with_analytics(vec![
            AnalyticsRecord::new("r/Rust").with_best_hour(9),
            AnalyticsRecord::new("golang").with_best_hour(10),
        ]);
        assert_eq!(builder.analytics().len(), 1);
        assert!(builder.analytics().contains_key("rust"));
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let config = config(&["a", "b", "c"], 4, 30, Some("saas"));
        let builder = CampaignPlanBuilder::new(&config);
        let first = builder.schedule(&mut StdRng::seed_from_u64(42));
        let second = builder.schedule(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}

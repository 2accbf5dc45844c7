//! Greedy single-task placement with layered fallback.
//!
//! `place` walks three passes and stops at the first feasible slot:
//! 1. every prioritized hour, trying preferred-weekday days first, then the
//!    remaining days, from the desired day to the end of the campaign
//! 2. the channel's base hours on every day from the desired day onward
//! 3. forced placement at hour 12 on the desired day, bypassing soft
//!    constraints so generation always terminates

use std::collections::HashMap;

use crate::domain::{AnalyticsRecord, CampaignConfig, CampaignTask, ContentKind, TaskStatus, TemplateKind};
use crate::id::{engagement_task_id, post_task_id};
use crate::scheduler::capacity::CapacityTracker;
use crate::scheduler::preference::{SlotPreference, resolve};
use crate::templates::TemplateSelector;

/// Hour used by a forced placement.
pub const FORCED_HOUR: u32 = 12;

/// Which pass produced a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPass {
    Preferred,
    BaseHours,
    Forced,
}

/// Places tasks one at a time for a single generation call
pub struct GreedySlotScheduler<'c> {
    config: &'c CampaignConfig,
    selector: TemplateSelector,
    preferences: HashMap<String, SlotPreference>,
    capacity: CapacityTracker,
    tasks: Vec<CampaignTask>,
    forced: usize,
}

impl<'c> GreedySlotScheduler<'c> {
    /// Create a scheduler; `analytics` is keyed by normalized channel name.
    pub fn new(config: &'c CampaignConfig, analytics: &HashMap<String, AnalyticsRecord>) -> Self {
        let preferences = config
            .channels
            .iter()
            .map(|channel| (channel.clone(), resolve(analytics.get(channel))))
            .collect();

        Self {
            config,
            selector: TemplateSelector::new(config.category),
            preferences,
            capacity: CapacityTracker::new(config.total_days, config.channels.len()),
            tasks: Vec::new(),
            forced: 0,
        }
    }

    pub fn preference(&self, channel: &str) -> SlotPreference {
        self.preferences.get(channel).cloned().unwrap_or_default()
    }

    pub fn selector(&self) -> &TemplateSelector {
        &self.selector
    }

    pub fn capacity(&self) -> &CapacityTracker {
        &self.capacity
    }

    pub fn tasks(&self) -> &[CampaignTask] {
        &self.tasks
    }

    /// Number of placements that had to bypass the soft constraints
    pub fn forced_placements(&self) -> usize {
        self.forced
    }

    pub fn into_tasks(self) -> Vec<CampaignTask> {
        self.tasks
    }

    /// Place one post for `channel` no earlier than `desired_day`.
    pub fn place(
        &mut self,
        desired_day: u32,
        channel: &str,
        kind: ContentKind,
        title: impl Into<String>,
        ignore_cooldown: bool,
    ) -> &CampaignTask {
        let id = post_task_id(self.tasks.len() + 1);
        let (day, hour, pass) = self.find_slot(desired_day, channel, ignore_cooldown);
        self.record(id, day, hour, channel, kind, title.into(), pass)
    }

    /// Place the engagement task seeded for campaign day `seed_day`.
    ///
    /// Tries the channel's first base hour on `seed_day` and up to
    /// `search_days - 1` following days; if all of those are taken the
    /// regular layered search takes over.
    pub fn place_engagement(
        &mut self,
        seed_day: u32,
        search_days: u32,
        channel: &str,
        title: impl Into<String>,
    ) -> &CampaignTask {
        let id = engagement_task_id(seed_day);
        let hour = self.preference(channel).base_hours.first().copied().unwrap_or(FORCED_HOUR);
        let last_day = self.config.total_days.saturating_sub(1);

        let found = (0..search_days.max(1))
            .map(|offset| (seed_day + offset).min(last_day))
            .find(|&day| self.capacity.can_place(day, hour, channel, false));

        let (day, hour, pass) = match found {
            Some(day) => (day, hour, PlacementPass::Preferred),
            None => self.find_slot(seed_day, channel, false),
        };
        self.record(id, day, hour, channel, ContentKind::Engagement, title.into(), pass)
    }

    fn find_slot(&self, desired_day: u32, channel: &str, ignore_cooldown: bool) -> (u32, u32, PlacementPass) {
        let pref = self.preference(channel);
        let total_days = self.config.total_days;
        let start = desired_day.min(total_days.saturating_sub(1));
        let days = self.candidate_days(start, pref.preferred_weekday);

        for &hour in &pref.prioritized_hours {
            for &day in &days {
                if self.capacity.can_place(day, hour, channel, ignore_cooldown) {
                    return (day, hour, PlacementPass::Preferred);
                }
            }
        }

        for day in start..total_days {
            for &hour in &pref.base_hours {
                if self.capacity.can_place(day, hour, channel, ignore_cooldown) {
                    return (day, hour, PlacementPass::BaseHours);
                }
            }
        }

        (start, FORCED_HOUR, PlacementPass::Forced)
    }

    /// Days from `start` to the end: preferred weekdays first, then the rest, each ascending
    fn candidate_days(&self, start: u32, preferred_weekday: u32) -> Vec<u32> {
        let (mut preferred, other): (Vec<u32>, Vec<u32>) =
            (start..self.config.total_days).partition(|&day| self.config.weekday_of(day) == preferred_weekday);
        preferred.extend(other);
        preferred
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        &mut self,
        id: String,
        day: u32,
        hour: u32,
        channel: &str,
        kind: ContentKind,
        title: String,
        pass: PlacementPass,
    ) -> &CampaignTask {
        self.capacity.commit(day, hour, channel);

        if pass == PlacementPass::Forced {
            self.forced += 1;
            tracing::warn!(task = %id, channel, day, hour, kind = %kind, "No feasible slot, forcing placement");
        } else {
            tracing::debug!(task = %id, channel, day, hour, kind = %kind, pass = ?pass, "Placed task");
        }

        let greeting = self.config.display_channel(self.config.primary_channel());
        let content_template = kind
            .template_kind()
            .and_then(|template| self.selector.render(template, &title, Some(&greeting)));

        self.tasks.push(CampaignTask {
            id,
            content_kind: kind,
            title,
            channel: channel.to_string(),
            scheduled_day: day,
            scheduled_hour: hour,
            scheduled_at: self.config.instant(day, hour),
            status: TaskStatus::Pending,
            content_template,
            template_category: TemplateKind::for_category(self.config.category),
        });
        &self.tasks[self.tasks.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CampaignRequest;
    use chrono::NaiveDate;

    // 2025-01-06 is a Monday, so Thursday is day 3
    fn config(channels: &[&str], days: i64) -> CampaignConfig {
        let mut req = CampaignRequest::new(channels.iter().map(|c| c.to_string()).collect(), 3);
        req.total_days = Some(days);
        req.start_date = NaiveDate::from_ymd_opt(2025, 1, 6);
        req.validate().unwrap()
    }

    #[test]
    fn test_candidate_days_prefer_weekday() {
        let config = config(&["a"], 14);
        let scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        let days = scheduler.candidate_days(2, 4);
        assert_eq!(&days[..2], &[3, 10]);
        assert_eq!(&days[2..], &[2, 4, 5, 6, 7, 8, 9, 11, 12, 13]);
    }

    #[test]
    fn test_first_placement_uses_top_hour_on_preferred_day() {
        let config = config(&["a"], 14);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        let task = scheduler.place(0, "a", ContentKind::Launch, "Launch post in r/a", true);
        assert_eq!((task.scheduled_day, task.scheduled_hour), (3, 21));
        assert_eq!(task.id, "post_1");
        assert_eq!(task.scheduled_at.to_rfc3339(), "2025-01-09T21:00:00+00:00");
        assert!(task.content_template.is_some());
    }

    #[test]
    fn test_hour_major_search() {
        let config = config(&["a"], 14);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        scheduler.place(0, "a", ContentKind::Launch, "one", true);
        // 21:00 is still open on the next Thursday, so the hour wins over the day
        let second = scheduler.place(0, "a", ContentKind::Milestone, "two", true);
        assert_eq!((second.scheduled_day, second.scheduled_hour), (10, 21));
    }

    #[test]
    fn test_analytics_hour_and_weekday() {
        let config = config(&["a"], 14);
        let mut analytics = HashMap::new();
        analytics.insert(
            "a".to_string(),
            AnalyticsRecord::new("a").with_best_hour(9).with_best_weekday(5),
        );
        let mut scheduler = GreedySlotScheduler::new(&config, &analytics);
        let task = scheduler.place(0, "a", ContentKind::Launch, "x", true);
        // Friday is day 4
        assert_eq!((task.scheduled_day, task.scheduled_hour), (4, 9));
    }

    #[test]
    fn test_never_before_desired_day() {
        let config = config(&["a"], 14);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        let task = scheduler.place(11, "a", ContentKind::Ama, "x", true);
        assert!(task.scheduled_day >= 11);
        assert!(task.scheduled_day < 14);
    }

    #[test]
    fn test_forced_placement_when_full() {
        let config = config(&["a", "b"], 7);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        for n in 0..20 {
            scheduler.place(6, "a", ContentKind::Milestone, format!("m{}", n), true);
        }
        assert!(scheduler.forced_placements() > 0);
        for task in scheduler.tasks() {
            assert_eq!(task.scheduled_day, 6);
        }
        // Day 6 can hold two real placements at most
        assert_eq!(scheduler.tasks().len() - scheduler.forced_placements(), 2);
    }

    #[test]
    fn test_engagement_uses_first_base_hour() {
        let config = config(&["a"], 14);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        let task = scheduler.place_engagement(0, 3, "a", "Engage");
        assert_eq!(task.id, "engagement_1");
        assert_eq!((task.scheduled_day, task.scheduled_hour), (0, 12));
        assert_eq!(task.content_template, None);
        assert_eq!(task.content_kind, ContentKind::Engagement);
    }

    #[test]
    fn test_engagement_searches_forward_when_taken() {
        let config = config(&["a", "b"], 14);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        scheduler.place_engagement(0, 3, "a", "Engage a");
        // Same seed day again: 12:00 on day 0 is reserved, day 1 is free
        let task = scheduler.place_engagement(0, 3, "b", "Engage b");
        assert_eq!((task.scheduled_day, task.scheduled_hour), (1, 12));
    }

    #[test]
    fn test_engagement_respects_channel_cooldown() {
        let config = config(&["a", "b"], 14);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        scheduler.place_engagement(0, 3, "a", "Engage a");
        // Days 2-4 are within a week of day 0, so the general search moves to the next Thursday
        let task = scheduler.place_engagement(2, 3, "a", "Engage a again");
        assert_eq!((task.scheduled_day, task.scheduled_hour), (10, 21));
        assert_eq!(scheduler.capacity().last_post_day("a"), Some(10));
        assert_eq!(scheduler.forced_placements(), 0);
    }

    #[test]
    fn test_generic_template_greets_primary_channel() {
        let config = config(&["first", "second"], 30);
        let mut scheduler = GreedySlotScheduler::new(&config, &HashMap::new());
        let task = scheduler.place(5, "second", ContentKind::Launch, "Launch post in r/second", true);
        let text = task.content_template.as_deref().unwrap();
        assert!(text.contains("Hi r/first,"));
        assert_eq!(task.template_category, TemplateKind::Journey);
    }
}

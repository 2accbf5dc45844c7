//! Groups placed tasks into the phase list handed to storage.

use crate::domain::{CampaignConfig, CampaignTask, ContentKind, Phase, PhaseTask};
use crate::id::{indexed_phase_id, phase_id};
use crate::templates::get_details;

fn tasks_of<'t>(tasks: &'t [CampaignTask], channel: &str, kind: ContentKind) -> Vec<&'t CampaignTask> {
    tasks
        .iter()
        .filter(|t| t.channel == channel && t.content_kind == kind)
        .collect()
}

fn phase_tasks(tasks: &[&CampaignTask]) -> Vec<PhaseTask> {
    tasks
        .iter()
        .map(|task| PhaseTask::from_task(task, get_details(task.content_kind)))
        .collect()
}

fn first_day_label(tasks: &[&CampaignTask]) -> String {
    let first = tasks.iter().map(|t| t.scheduled_day).min().unwrap_or(0);
    format!("Day {}", first + 1)
}

fn phase(id: String, title: String, label: String, description: String, tasks: &[&CampaignTask]) -> Phase {
    Phase {
        id,
        title,
        day_range_label: label,
        description,
        tasks: phase_tasks(tasks),
        completed: false,
    }
}

/// Build the ordered phase list.
///
/// Per channel: one engagement phase (present even if empty), one launch
/// phase, then milestone and AMA phases alternating in chain order. The
/// result is sorted by each phase's earliest task; empty phases go last.
pub fn assemble_phases(config: &CampaignConfig, tasks: &[CampaignTask]) -> Vec<Phase> {
    let engagement_days = config.tier.engagement_days().min(config.total_days);
    let mut phases = Vec::new();

    for channel in &config.channels {
        let display = config.display_channel(channel);

        phases.push(phase(
            phase_id("engage", channel),
            format!("Community Engagement in {}", display),
            format!("Days 1-{}", engagement_days),
            format!("Engage authentically with {}", display),
            &tasks_of(tasks, channel, ContentKind::Engagement),
        ));

        let launches = tasks_of(tasks, channel, ContentKind::Launch);
        if !launches.is_empty() {
            phases.push(phase(
                phase_id("launch", channel),
                format!("Launch in {}", display),
                first_day_label(&launches),
                format!("Introduce your project in {}", display),
                &launches,
            ));
        }

        let milestones = tasks_of(tasks, channel, ContentKind::Milestone);
        let amas = tasks_of(tasks, channel, ContentKind::Ama);
        for index in 0..milestones.len().max(amas.len()) {
            if let Some(milestone) = milestones.get(index) {
                let group = [*milestone];
                phases.push(phase(
                    indexed_phase_id("milestone", channel, index),
                    format!("Milestone Update in {}", display),
                    first_day_label(&group),
                    "Share progress and results".to_string(),
                    &group,
                ));
            }
            if let Some(ama) = amas.get(index) {
                let group = [*ama];
                phases.push(phase(
                    indexed_phase_id("ama", channel, index),
                    format!("AMA in {}", display),
                    first_day_label(&group),
                    "Host an AMA to engage deeply".to_string(),
                    &group,
                ));
            }
        }
    }

    sort_phases(&mut phases);
    phases
}

/// Stable sort by earliest scheduled instant, phases without tasks last
pub fn sort_phases(phases: &mut [Phase]) {
    phases.sort_by_key(|p| {
        let earliest = p.earliest_scheduled_at();
        (earliest.is_none(), earliest)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampaignRequest, TaskStatus, TemplateKind};
    use chrono::NaiveDate;

    fn config(channels: &[&str]) -> CampaignConfig {
        let mut req = CampaignRequest::new(channels.iter().map(|c| c.to_string()).collect(), 3);
        req.total_days = Some(14);
        req.start_date = NaiveDate::from_ymd_opt(2025, 1, 6);
        req.validate().unwrap()
    }

    fn task(config: &CampaignConfig, id: &str, channel: &str, kind: ContentKind, day: u32, hour: u32) -> CampaignTask {
        CampaignTask {
            id: id.to_string(),
            content_kind: kind,
            title: format!("{} {}", kind, channel),
            channel: channel.to_string(),
            scheduled_day: day,
            scheduled_hour: hour,
            scheduled_at: config.instant(day, hour),
            status: TaskStatus::Pending,
            content_template: None,
            template_category: TemplateKind::Journey,
        }
    }

    #[test]
    fn test_phases_sorted_by_earliest_task() {
        let config = config(&["a", "b"]);
        let tasks = vec![
            task(&config, "engagement_1", "a", ContentKind::Engagement, 0, 12),
            task(&config, "post_2", "a", ContentKind::Launch, 5, 21),
            task(&config, "post_3", "b", ContentKind::Launch, 3, 21),
            task(&config, "post_4", "a", ContentKind::Milestone, 9, 21),
            task(&config, "post_5", "a", ContentKind::Ama, 12, 18),
        ];
        let phases = assemble_phases(&config, &tasks);
        let ids: Vec<&str> = phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["engage_a", "launch_b", "launch_a", "milestone_a_0", "ama_a_0", "engage_b"]
        );
    }

    #[test]
    fn test_empty_engagement_phase_sorts_last() {
        let config = config(&["a", "b"]);
        let tasks = vec![task(&config, "engagement_1", "a", ContentKind::Engagement, 0, 12)];
        let phases = assemble_phases(&config, &tasks);
        let last = phases.last().unwrap();
        assert_eq!(last.id, "engage_b");
        assert!(last.tasks.is_empty());
    }

    #[test]
    fn test_labels_and_details() {
        let config = config(&["a"]);
        let tasks = vec![
            task(&config, "engagement_1", "a", ContentKind::Engagement, 0, 12),
            task(&config, "post_2", "a", ContentKind::Launch, 3, 21),
        ];
        let phases = assemble_phases(&config, &tasks);
        assert_eq!(phases[0].day_range_label, "Days 1-3");
        assert_eq!(phases[0].title, "Community Engagement in r/a");
        assert_eq!(phases[1].day_range_label, "Day 4");
        assert_eq!(phases[1].description, "Introduce your project in r/a");
        assert!(!phases[1].tasks[0].details.is_empty());
        assert!(phases[0].tasks[0].details.is_empty());
        assert!(phases.iter().all(|p| !p.completed));
    }

    #[test]
    fn test_second_milestone_gets_its_own_phase() {
        let config = config(&["a"]);
        let tasks = vec![
            task(&config, "post_1", "a", ContentKind::Launch, 3, 21),
            task(&config, "post_2", "a", ContentKind::Milestone, 7, 21),
            task(&config, "post_3", "a", ContentKind::Milestone, 9, 21),
        ];
        let phases = assemble_phases(&config, &tasks);
        let ids: Vec<&str> = phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["launch_a", "milestone_a_0", "milestone_a_1", "engage_a"]);
    }
}

//! Task-status feedback on a stored phase list.
//!
//! Generation never calls into this module; it serves the collaborator that
//! records what the operator actually did.

use std::fmt;

use serde::Serialize;

use crate::domain::{Phase, PhaseTask, TaskStatus};
use crate::error::{PlannerError, Result};

/// Set the status of task `task_id`.
///
/// Keeps the task's `completed` flag in sync, and marks a phase completed
/// once none of its tasks are pending.
pub fn update_task_status<'p>(phases: &'p mut [Phase], task_id: &str, status: TaskStatus) -> Result<&'p PhaseTask> {
    let (phase_idx, task_idx) = phases
        .iter()
        .enumerate()
        .find_map(|(p, phase)| phase.tasks.iter().position(|t| t.id == task_id).map(|t| (p, t)))
        .ok_or_else(|| PlannerError::TaskNotFound(task_id.to_string()))?;

    let phase = &mut phases[phase_idx];
    let task = &mut phase.tasks[task_idx];
    log::info!("Task {} status {} -> {}", task.id, task.status, status);
    task.status = status;
    task.completed = status == TaskStatus::Completed;
    phase.completed = phase.tasks.iter().all(|t| t.status.is_terminal());

    Ok(&phases[phase_idx].tasks[task_idx])
}

/// Task counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub skipped: usize,
    pub phases_completed: usize,
    pub phases_total: usize,
}

impl ProgressSummary {
    /// Share of tasks no longer pending, 0.0 to 1.0
    pub fn done_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed + self.skipped) as f64 / self.total as f64
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tasks done ({} completed, {} skipped, {} pending), {}/{} phases complete",
            self.completed + self.skipped,
            self.total,
            self.completed,
            self.skipped,
            self.pending,
            self.phases_completed,
            self.phases_total
        )
    }
}

pub fn summary(phases: &[Phase]) -> ProgressSummary {
    let mut summary = ProgressSummary {
        phases_total: phases.len(),
        ..ProgressSummary::default()
    };
    for phase in phases {
        if phase.completed {
            summary.phases_completed += 1;
        }
        for task in &phase.tasks {
            summary.total += 1;
            match task.status {
                TaskStatus::Pending => summary.pending += 1,
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::Skipped => summary.skipped += 1,
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampaignRequest, CampaignTask, ContentKind, TaskDetails, TemplateKind};
    use chrono::NaiveDate;

    fn phases() -> Vec<Phase> {
        let mut req = CampaignRequest::new(vec!["a".to_string()], 3);
        req.start_date = NaiveDate::from_ymd_opt(2025, 1, 6);
        let config = req.validate().unwrap();

        let task = |id: &str, day: u32| {
            let task = CampaignTask {
                id: id.to_string(),
                content_kind: ContentKind::Engagement,
                title: "Engage".to_string(),
                channel: "a".to_string(),
                scheduled_day: day,
                scheduled_hour: 12,
                scheduled_at: config.instant(day, 12),
                status: TaskStatus::Pending,
                content_template: None,
                template_category: TemplateKind::Journey,
            };
            PhaseTask::from_task(&task, TaskDetails::default())
        };

        vec![Phase {
            id: "engage_a".to_string(),
            title: "Community Engagement in r/a".to_string(),
            day_range_label: "Days 1-2".to_string(),
            description: String::new(),
            tasks: vec![task("engagement_1", 0), task("engagement_2", 1)],
            completed: false,
        }]
    }

    #[test]
    fn test_update_syncs_completed_flag() {
        let mut phases = phases();
        let task = update_task_status(&mut phases, "engagement_1", TaskStatus::Completed).unwrap();
        assert!(task.completed);
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(!phases[0].completed);

        let task = update_task_status(&mut phases, "engagement_1", TaskStatus::Pending).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_phase_completes_when_no_task_pending() {
        let mut phases = phases();
        update_task_status(&mut phases, "engagement_1", TaskStatus::Completed).unwrap();
        update_task_status(&mut phases, "engagement_2", TaskStatus::Skipped).unwrap();
        assert!(phases[0].completed);

        let s = summary(&phases);
        assert_eq!(s.total, 2);
        assert_eq!(s.completed, 1);
        assert_eq!(s.skipped, 1);
        assert_eq!(s.pending, 0);
        assert_eq!(s.phases_completed, 1);
        assert_eq!(s.done_ratio(), 1.0);
    }

    #[test]
    fn test_unknown_task() {
        let mut phases = phases();
        let err = update_task_status(&mut phases, "post_99", TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, PlannerError::TaskNotFound(id) if id == "post_99"));
    }

    #[test]
    fn test_summary_display() {
        let s = summary(&phases());
        assert_eq!(s.to_string(), "0/2 tasks done (0 completed, 0 skipped, 2 pending), 0/1 phases complete");
        assert_eq!(summary(&[]).done_ratio(), 0.0);
    }
}

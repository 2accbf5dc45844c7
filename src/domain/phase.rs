//! Output shape: named phases grouping scheduled tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::task::{CampaignTask, ContentKind, TaskStatus, TemplateKind};

/// Checklist, guide and tip shown next to a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub checklist: Vec<String>,
    pub step_by_step: Vec<String>,
    pub posting_tips: String,
}

impl TaskDetails {
    pub fn is_empty(&self) -> bool {
        self.checklist.is_empty() && self.step_by_step.is_empty() && self.posting_tips.is_empty()
    }
}

/// A task as handed to storage and the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTask {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(default)]
    pub status: TaskStatus,
    pub channel: String,
    pub scheduled_day: u32,
    pub scheduled_hour: u32,
    pub scheduled_at: DateTime<Utc>,
    pub content_kind: ContentKind,
    pub template_category: TemplateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_template: Option<String>,
    #[serde(default)]
    pub details: TaskDetails,
}

impl PhaseTask {
    pub fn from_task(task: &CampaignTask, details: TaskDetails) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            completed: task.status == TaskStatus::Completed,
            status: task.status,
            channel: task.channel.clone(),
            scheduled_day: task.scheduled_day,
            scheduled_hour: task.scheduled_hour,
            scheduled_at: task.scheduled_at,
            content_kind: task.content_kind,
            template_category: task.template_category,
            post_template: task.content_template.clone(),
            details,
        }
    }
}

/// A named group of tasks presented together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub day_range_label: String,
    pub description: String,
    pub tasks: Vec<PhaseTask>,
    pub completed: bool,
}

impl Phase {
    /// Earliest scheduled instant among the phase's tasks
    pub fn earliest_scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.tasks.iter().map(|t| t.scheduled_at).min()
    }
}

//! Scheduled campaign tasks and their kinds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::campaign::Category;
use crate::error::{PlannerError, Result};

/// The role a scheduled task plays in the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Trust-building activity before any promotion
    Engagement,
    Launch,
    Milestone,
    Ama,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Engagement => "engagement",
            ContentKind::Launch => "launch",
            ContentKind::Milestone => "milestone",
            ContentKind::Ama => "ama",
        }
    }

    /// Template bucket for this kind, if it carries a post template
    pub fn template_kind(&self) -> Option<TemplateKind> {
        match self {
            ContentKind::Engagement => None,
            ContentKind::Launch => Some(TemplateKind::Launch),
            ContentKind::Milestone => Some(TemplateKind::Milestone),
            ContentKind::Ama => Some(TemplateKind::Ama),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template buckets, including the content-only kinds that are never scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Launch,
    Milestone,
    Ama,
    Value,
    Journey,
    Resource,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::Launch,
        TemplateKind::Milestone,
        TemplateKind::Ama,
        TemplateKind::Value,
        TemplateKind::Journey,
        TemplateKind::Resource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Launch => "launch",
            TemplateKind::Milestone => "milestone",
            TemplateKind::Ama => "ama",
            TemplateKind::Value => "value",
            TemplateKind::Journey => "journey",
            TemplateKind::Resource => "resource",
        }
    }

    /// The content style a category leans on, recorded on every task
    pub fn for_category(category: Option<Category>) -> Self {
        match category {
            Some(Category::Saas) => TemplateKind::Launch,
            Some(Category::Education) => TemplateKind::Resource,
            Some(Category::Skincare) => TemplateKind::Value,
            None => TemplateKind::Journey,
        }
    }
}

impl FromStr for TemplateKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| PlannerError::InvalidKind(s.to_string()))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status; only the external status collaborator moves it off `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
    Skipped,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Skipped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Skipped => "skipped",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" | "complete" | "done" => Ok(TaskStatus::Completed),
            "skipped" | "skip" => Ok(TaskStatus::Skipped),
            _ => Err(PlannerError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignTask {
    pub id: String,
    pub content_kind: ContentKind,
    pub title: String,
    pub channel: String,
    /// 0-based offset from the campaign start, always < total_days
    pub scheduled_day: u32,
    /// 0..24, UTC
    pub scheduled_hour: u32,
    pub scheduled_at: DateTime<Utc>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_template: Option<String>,
    pub template_category: TemplateKind,
}

impl CampaignTask {
    /// Hours since campaign start; used for the global separation check
    pub fn absolute_hour(&self) -> i64 {
        self.scheduled_day as i64 * 24 + self.scheduled_hour as i64
    }
}

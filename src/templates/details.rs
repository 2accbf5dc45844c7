//! Fixed per-kind posting guidance, independent of category.

use crate::domain::{ContentKind, TaskDetails, TemplateKind};

fn details(checklist: &[&str], step_by_step: &[&str], posting_tips: &str) -> TaskDetails {
    TaskDetails {
        checklist: checklist.iter().map(|s| s.to_string()).collect(),
        step_by_step: step_by_step.iter().map(|s| s.to_string()).collect(),
        posting_tips: posting_tips.to_string(),
    }
}

/// Checklist, step-by-step guide and posting tip for a content kind.
///
/// Engagement tasks get empty details.
pub fn get_details(kind: ContentKind) -> TaskDetails {
    match kind {
        ContentKind::Launch => details(
            &["Read rules", "Proper flair", "Short intro"],
            &["Draft", "Proofread", "Post at peak hour"],
            "Be specific and honest.",
        ),
        ContentKind::Milestone => details(
            &["Real numbers", "2 concrete changes"],
            &["Headline with milestone", "List changes", "Invite questions"],
            "Avoid overclaiming.",
        ),
        ContentKind::Ama => details(
            &["Pick time", "Prepare topics"],
            &["Announce", "Answer quickly", "Summarize later"],
            "Use bullet points.",
        ),
        ContentKind::Engagement => TaskDetails::default(),
    }
}

/// Details for a template kind; content-only kinds have none
pub fn get_template_details(kind: TemplateKind) -> Option<TaskDetails> {
    match kind {
        TemplateKind::Launch => Some(get_details(ContentKind::Launch)),
        TemplateKind::Milestone => Some(get_details(ContentKind::Milestone)),
        TemplateKind::Ama => Some(get_details(ContentKind::Ama)),
        TemplateKind::Value | TemplateKind::Journey | TemplateKind::Resource => None,
    }
}

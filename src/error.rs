//! Error types for the campaign planner
//!
//! Centralized error handling using thiserror. The scheduling core itself is
//! infallible; these errors come from request validation, analytics loading
//! and the task-status feedback path.

use thiserror::Error;

/// All error types that can occur in the planner
#[derive(Debug, Error)]
pub enum PlannerError {
    /// No channels left after normalization
    #[error("No channels configured")]
    NoChannels,

    /// A channel name that normalizes to something unusable
    #[error("Invalid channel: {0}")]
    InvalidChannel(String),

    /// More channels than a single campaign may target
    #[error("Too many channels: {count} (max {max})")]
    TooManyChannels { count: usize, max: usize },

    /// Reputation tier outside 1..=5
    #[error("Invalid reputation tier: {0} (expected 1-5)")]
    InvalidTier(i64),

    /// Campaign length outside 7..=90 days
    #[error("Invalid campaign length: {0} days (expected 7-90)")]
    InvalidDuration(i64),

    /// Unknown content category
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unknown content kind
    #[error("Invalid content kind: {0}")]
    InvalidKind(String),

    /// Unknown task status
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Task id not present in the phase list
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Analytics collaborator failure
    #[error("Analytics error: {0}")]
    Analytics(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

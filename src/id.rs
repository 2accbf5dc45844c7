//! ID generation utilities
//!
//! Task and phase ids are derived from placement order and channel names so
//! they are unique and stable within one generation call.

use rand::Rng;

/// Id for the engagement task seeded on campaign day `day` (0-based)
///
/// Format: `engagement_{day + 1}`
pub fn engagement_task_id(day: u32) -> String {
    format!("engagement_{}", day + 1)
}

/// Id for the `ordinal`-th placed task (1-based)
///
/// Format: `post_{ordinal}`
pub fn post_task_id(ordinal: usize) -> String {
    format!("post_{}", ordinal)
}

/// Id for a phase that appears once per channel
///
/// Format: `{prefix}_{channel}`
pub fn phase_id(prefix: &str, channel: &str) -> String {
    format!("{}_{}", prefix, channel)
}

/// Id for a phase that may repeat per channel
///
/// Format: `{prefix}_{channel}_{index}`
pub fn indexed_phase_id(prefix: &str, channel: &str, index: usize) -> String {
    format!("{}_{}_{}", prefix, channel, index)
}

/// Draw a fresh seed for callers that did not supply one
pub fn generate_seed() -> u64 {
    rand::rng().random()
}

//! Slot scheduling for campaign tasks.
//!
//! This module provides:
//! - **Preferences**: per-channel base hours, prioritized hours and preferred
//!   weekday resolved from optional analytics.
//! - **Capacity**: the per-generation tracker enforcing the daily cap, hour
//!   gaps, reserved slots and channel cooldowns.
//! - **Placement**: the greedy scheduler that places one task at a time with
//!   a layered fallback and never fails.
//!
//! # Example
//!
//! ```ignore
//! use campaign_planner::scheduler::GreedySlotScheduler;
//!
//! let mut scheduler = GreedySlotScheduler::new(&config, &analytics);
//! let launch = scheduler.place(3, "rust", ContentKind::Launch, "Launch post in r/rust", true);
//! ```

pub mod capacity;
pub mod placement;
pub mod preference;

pub use capacity::{
    CHANNEL_COOLDOWN_DAYS, CapacityTracker, MAX_TASKS_PER_DAY, MIN_GLOBAL_GAP_HOURS, MIN_SAME_DAY_GAP_HOURS,
};
pub use placement::{FORCED_HOUR, GreedySlotScheduler, PlacementPass};
pub use preference::{
    BASE_HOUR_SPACING, DEFAULT_BASE_HOURS, DEFAULT_WEEKDAY, FALLBACK_HOURS, SlotPreference, busiest_weekday,
    rank_hours, resolve,
};

//! Per-generation placement bookkeeping.
//!
//! A fresh tracker is allocated for every generation call and never shared,
//! so concurrent generations need no coordination.

use std::collections::{HashMap, HashSet};

/// Most tasks placed on one campaign day, across all channels.
pub const MAX_TASKS_PER_DAY: u32 = 2;
/// Minimum hour distance between two tasks on the same day.
pub const MIN_SAME_DAY_GAP_HOURS: u32 = 6;
/// Minimum absolute distance between any two tasks.
pub const MIN_GLOBAL_GAP_HOURS: i64 = 3;
/// Minimum days between two tasks on the same channel.
pub const CHANNEL_COOLDOWN_DAYS: i64 = 7;

/// Tracks what has been placed so far in one generation
#[derive(Debug, Clone)]
pub struct CapacityTracker {
    total_days: u32,
    single_channel: bool,
    tasks_per_day: Vec<u32>,
    hours_per_day: Vec<Vec<u32>>,
    last_post_day: HashMap<String, u32>,
    reserved: HashSet<(u32, u32)>,
    /// Absolute hours (day * 24 + hour) of every placement
    placed: Vec<i64>,
}

impl CapacityTracker {
    pub fn new(total_days: u32, channel_count: usize) -> Self {
        Self {
            total_days,
            single_channel: channel_count == 1,
            tasks_per_day: vec![0; total_days as usize],
            hours_per_day: vec![Vec::new(); total_days as usize],
            last_post_day: HashMap::new(),
            reserved: HashSet::new(),
            placed: Vec::new(),
        }
    }

    /// Check whether a task for `channel` may go at (`day`, `hour`).
    ///
    /// All of these must hold:
    /// - the day has fewer than 2 tasks
    /// - the channel's last task is at least 7 days earlier (unless cooldown
    ///   is ignored or it is the only channel); any earlier day is rejected
    /// - the (day, hour) pair is free
    /// - the slot is at least 3 hours from every placed task
    /// - the hour is at least 6 hours from every hour already used that day
    pub fn can_place(&self, day: u32, hour: u32, channel: &str, ignore_cooldown: bool) -> bool {
        if day >= self.total_days || hour >= 24 {
            return false;
        }
        let idx = day as usize;

        if self.tasks_per_day[idx] >= MAX_TASKS_PER_DAY {
            return false;
        }

        if !ignore_cooldown
            && !self.single_channel
            && let Some(&last) = self.last_post_day.get(channel)
            && (day as i64 - last as i64) < CHANNEL_COOLDOWN_DAYS
        {
            return false;
        }

        if self.reserved.contains(&(day, hour)) {
            return false;
        }

        let absolute = absolute_hour(day, hour);
        if self.placed.iter().any(|p| (p - absolute).abs() < MIN_GLOBAL_GAP_HOURS) {
            return false;
        }

        self.hours_per_day[idx]
            .iter()
            .all(|used| used.abs_diff(hour) >= MIN_SAME_DAY_GAP_HOURS)
    }

    /// Record a placement of any kind, restarting the channel's cooldown.
    ///
    /// Forced placements may land on a reserved (day, hour); they still count
    /// toward the day and the cooldown. Returns whether the slot was free.
    pub fn commit(&mut self, day: u32, hour: u32, channel: &str) -> bool {
        if day >= self.total_days {
            return false;
        }

        let idx = day as usize;
        self.tasks_per_day[idx] += 1;
        self.hours_per_day[idx].push(hour);
        self.placed.push(absolute_hour(day, hour));
        self.last_post_day.insert(channel.to_string(), day);
        self.reserved.insert((day, hour))
    }

    pub fn tasks_on(&self, day: u32) -> u32 {
        self.tasks_per_day.get(day as usize).copied().unwrap_or(0)
    }

    pub fn hours_on(&self, day: u32) -> &[u32] {
        self.hours_per_day.get(day as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_post_day(&self, channel: &str) -> Option<u32> {
        self.last_post_day.get(channel).copied()
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}

fn absolute_hour(day: u32, hour: u32) -> i64 {
    day as i64 * 24 + hour as i64
}

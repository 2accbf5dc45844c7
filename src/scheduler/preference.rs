//! Slot preferences derived from channel analytics.
//!
//! Each channel gets:
//! - a base set of 3 hours (best hour and its +6/+12 companions, the 3 busiest
//!   heatmap hours, or a fixed default)
//! - a prioritized hour list: best hour, then every hour by heatmap activity,
//!   then the evening fallbacks, deduplicated
//! - a preferred weekday (best weekday, busiest heatmap row, or mid-week)

use crate::domain::{AnalyticsRecord, HOURS_PER_DAY};

/// Base hours when a channel has no analytics.
pub const DEFAULT_BASE_HOURS: [u32; 3] = [12, 18, 20];
/// Hours appended to every prioritized list.
pub const FALLBACK_HOURS: [u32; 3] = [21, 18, 12];
/// Thursday (0 = Sunday).
pub const DEFAULT_WEEKDAY: u32 = 4;
/// Spacing between the best hour and its companions in the base set.
pub const BASE_HOUR_SPACING: u32 = 6;

/// Where and when a channel would like its posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPreference {
    /// The channel's 3 core hours, used by the fallback pass
    pub base_hours: Vec<u32>,
    /// Every hour worth trying, best first
    pub prioritized_hours: Vec<u32>,
    /// 0 = Sunday
    pub preferred_weekday: u32,
}

impl Default for SlotPreference {
    fn default() -> Self {
        resolve(None)
    }
}

/// Rank all 24 hours by summed activity across the heatmap rows.
///
/// Descending by sum; ties keep the lower hour first.
pub fn rank_hours(heatmap: &[[f64; HOURS_PER_DAY]]) -> Vec<u32> {
    let mut sums = [0.0_f64; HOURS_PER_DAY];
    for row in heatmap {
        for (hour, value) in row.iter().enumerate() {
            sums[hour] += value;
        }
    }

    let mut hours: Vec<u32> = (0..HOURS_PER_DAY as u32).collect();
    // sort_by is stable, so equal sums stay in ascending hour order
    hours.sort_by(|a, b| sums[*b as usize].total_cmp(&sums[*a as usize]));
    hours
}

/// Weekday row with the largest total activity; the first row wins ties.
pub fn busiest_weekday(heatmap: &[[f64; HOURS_PER_DAY]]) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for (day, row) in heatmap.iter().enumerate() {
        let total: f64 = row.iter().sum();
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((day as u32, total)),
        }
    }
    best.map(|(day, _)| day)
}

/// Resolve a channel's slot preference from its optional analytics.
pub fn resolve(record: Option<&AnalyticsRecord>) -> SlotPreference {
    let best_hour = record.and_then(AnalyticsRecord::hour);
    let heatmap = record.and_then(AnalyticsRecord::heatmap);
    let ranked = heatmap.as_deref().map(rank_hours).unwrap_or_default();

    let base_hours = match best_hour {
        Some(hour) => vec![
            hour,
            (hour + BASE_HOUR_SPACING) % 24,
            (hour + 2 * BASE_HOUR_SPACING) % 24,
        ],
        None if !ranked.is_empty() => ranked.iter().take(3).copied().collect(),
        None => DEFAULT_BASE_HOURS.to_vec(),
    };

    let mut prioritized_hours: Vec<u32> = Vec::with_capacity(HOURS_PER_DAY + 1);
    let candidates = best_hour.into_iter().chain(ranked.iter().copied()).chain(FALLBACK_HOURS);
    for hour in candidates {
        if !prioritized_hours.contains(&hour) {
            prioritized_hours.push(hour);
        }
    }

    let preferred_weekday = record
        .and_then(AnalyticsRecord::weekday)
        .or_else(|| heatmap.as_deref().and_then(busiest_weekday))
        .unwrap_or(DEFAULT_WEEKDAY);

    SlotPreference {
        base_hours,
        prioritized_hours,
        preferred_weekday,
    }
}

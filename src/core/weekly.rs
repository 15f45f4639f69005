//! Weekly release-cadence detection
//!
//! A show is "weekly" when every one of its opportunity timestamps
//! falls on the same UTC weekday and hour:minute as its earliest one.
//! The gap between consecutive events is deliberately not checked, so
//! two events 14 days apart at the same slot still qualify.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::core::types::DownloadEvent;

/// A show together with its recurring UTC slot, e.g. "Thu 08:53".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeeklySchedule {
    pub(crate) show_id: String,
    pub(crate) slot: String,
}

/// Find all shows with a weekly cadence, sorted by show id.
pub(crate) fn weekly_shows(events: &[DownloadEvent]) -> Vec<WeeklySchedule> {
    let mut show_times: HashMap<&str, Vec<DateTime<Utc>>> = HashMap::new();

    for event in events {
        for opportunity in &event.opportunities {
            show_times
                .entry(event.show_id.as_str())
                .or_default()
                .push(opportunity.event_time);
        }
    }

    let mut schedules: Vec<WeeklySchedule> = show_times
        .into_iter()
        .filter_map(|(show_id, mut times)| {
            times.sort();
            is_weekly(&times).then(|| WeeklySchedule {
                show_id: show_id.to_string(),
                slot: format_slot(times[0]),
            })
        })
        .collect();

    schedules.sort_by(|a, b| a.show_id.cmp(&b.show_id));
    schedules
}

/// (weekday, hour, minute) of a UTC timestamp.
fn slot_of(time: DateTime<Utc>) -> (Weekday, u32, u32) {
    (time.weekday(), time.hour(), time.minute())
}

/// `times` must already be sorted ascending; the earliest entry is the
/// reference slot.
fn is_weekly(times: &[DateTime<Utc>]) -> bool {
    if times.len() < 2 {
        return false;
    }
    let reference = slot_of(times[0]);
    times[1..].iter().all(|t| slot_of(*t) == reference)
}

fn format_slot(time: DateTime<Utc>) -> String {
    time.format("%a %H:%M").to_string()
}

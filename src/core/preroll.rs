//! Per-show preroll opportunity counts

use std::collections::HashMap;

use crate::core::types::DownloadEvent;

/// Count, per show, the opportunities whose position tags contain
/// "preroll". Result is sorted descending by count; shows without a
/// single match never appear. Tie order is unspecified.
pub(crate) fn preroll_counts(events: &[DownloadEvent]) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();

    for event in events {
        for opportunity in &event.opportunities {
            if opportunity.is_preroll() {
                *counts.entry(event.show_id.as_str()).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(show, count)| (show.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

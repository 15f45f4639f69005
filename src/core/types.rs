//! Typed record model shared by all aggregations
//!
//! Built once by the loader; nothing mutates these after load.

use chrono::{DateTime, Utc};

/// One podcast download event, one per input line.
#[derive(Debug, Clone)]
pub(crate) struct DownloadEvent {
    pub(crate) show_id: String,
    pub(crate) city: String,
    pub(crate) device_type: String,
    pub(crate) opportunities: Vec<Opportunity>,
}

/// One ad-insertion slot attached to a download event.
#[derive(Debug, Clone)]
pub(crate) struct Opportunity {
    /// Original event time, UTC (converted from epoch milliseconds at load).
    pub(crate) event_time: DateTime<Utc>,
    /// Position tags from `aw_0_ais.adBreakIndex`; empty when the field was absent.
    pub(crate) ad_break_positions: Vec<String>,
}

impl Opportunity {
    pub(crate) fn is_preroll(&self) -> bool {
        self.ad_break_positions.iter().any(|p| p == "preroll")
    }
}

impl DownloadEvent {
    /// Case-insensitive city match.
    pub(crate) fn is_from_city(&self, city: &str) -> bool {
        self.city.eq_ignore_ascii_case(city)
    }
}

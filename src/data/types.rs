//! Wire types mirroring the download-log JSON lines
//!
//! Required fields are still `Option` here; the loader validates them
//! into the core model once, with line numbers, instead of re-checking
//! at every access site.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "downloadIdentifier")]
    pub(crate) download_identifier: Option<RawDownloadIdentifier>,
    pub(crate) city: Option<String>,
    #[serde(rename = "deviceType")]
    pub(crate) device_type: Option<String>,
    #[serde(default)]
    pub(crate) opportunities: Vec<RawOpportunity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDownloadIdentifier {
    #[serde(rename = "showId")]
    pub(crate) show_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOpportunity {
    /// Epoch milliseconds, UTC.
    #[serde(rename = "originalEventTime")]
    pub(crate) original_event_time: i64,
    #[serde(rename = "positionUrlSegments", default)]
    pub(crate) position_url_segments: RawPositionUrlSegments,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPositionUrlSegments {
    #[serde(rename = "aw_0_ais.adBreakIndex")]
    pub(crate) ad_break_index: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_parses() {
        let line = r#"{"downloadIdentifier":{"showId":"show-1"},"city":"Berlin","deviceType":"desktop","opportunities":[{"originalEventTime":1676531580000,"positionUrlSegments":{"aw_0_ais.adBreakIndex":["preroll","midroll"]}}]}"#;
        let record: RawRecord = serde_json::from_str(line).unwrap();
        assert_eq!(
            record.download_identifier.unwrap().show_id.as_deref(),
            Some("show-1")
        );
        assert_eq!(record.city.as_deref(), Some("Berlin"));
        assert_eq!(record.device_type.as_deref(), Some("desktop"));
        assert_eq!(record.opportunities.len(), 1);
        let opp = &record.opportunities[0];
        assert_eq!(opp.original_event_time, 1676531580000);
        assert_eq!(
            opp.position_url_segments.ad_break_index.as_deref(),
            Some(&["preroll".to_string(), "midroll".to_string()][..])
        );
    }

    #[test]
    fn absent_ad_break_index_is_none() {
        let line = r#"{"downloadIdentifier":{"showId":"s"},"city":"c","deviceType":"d","opportunities":[{"originalEventTime":0,"positionUrlSegments":{}}]}"#;
        let record: RawRecord = serde_json::from_str(line).unwrap();
        assert!(record.opportunities[0]
            .position_url_segments
            .ad_break_index
            .is_none());
    }

    #[test]
    fn absent_position_url_segments_defaults() {
        let line = r#"{"downloadIdentifier":{"showId":"s"},"city":"c","deviceType":"d","opportunities":[{"originalEventTime":0}]}"#;
        let record: RawRecord = serde_json::from_str(line).unwrap();
        assert!(record.opportunities[0]
            .position_url_segments
            .ad_break_index
            .is_none());
    }

    #[test]
    fn absent_opportunities_defaults_to_empty() {
        let line = r#"{"downloadIdentifier":{"showId":"s"},"city":"c","deviceType":"d"}"#;
        let record: RawRecord = serde_json::from_str(line).unwrap();
        assert!(record.opportunities.is_empty());
    }

    #[test]
    fn opportunity_without_event_time_is_rejected() {
        let line = r#"{"downloadIdentifier":{"showId":"s"},"city":"c","deviceType":"d","opportunities":[{"positionUrlSegments":{}}]}"#;
        assert!(serde_json::from_str::<RawRecord>(line).is_err());
    }
}

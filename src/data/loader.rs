//! Strict line-by-line loader for download logs
//!
//! Every line must parse and carry the required identity fields; the
//! first bad line aborts the load with its line number. Blank lines
//! are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::DateTime;

use crate::core::{DownloadEvent, Opportunity};
use crate::data::types::{RawOpportunity, RawRecord};
use crate::error::AppError;

pub(crate) fn load_events(path: &Path) -> Result<Vec<DownloadEvent>, AppError> {
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(parse_line(&line, line_no)?);
    }
    Ok(events)
}

fn parse_line(line: &str, line_no: usize) -> Result<DownloadEvent, AppError> {
    let record: RawRecord = serde_json::from_str(line)
        .map_err(|source| AppError::MalformedRecord { line: line_no, source })?;

    let show_id = record
        .download_identifier
        .and_then(|id| id.show_id)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingField {
            line: line_no,
            field: "showId",
        })?;
    let city = record
        .city
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingField {
            line: line_no,
            field: "city",
        })?;
    let device_type = record
        .device_type
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingField {
            line: line_no,
            field: "deviceType",
        })?;

    let opportunities = record
        .opportunities
        .into_iter()
        .map(|raw| convert_opportunity(raw, line_no))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DownloadEvent {
        show_id,
        city,
        device_type,
        opportunities,
    })
}

fn convert_opportunity(raw: RawOpportunity, line_no: usize) -> Result<Opportunity, AppError> {
    let event_time = DateTime::from_timestamp_millis(raw.original_event_time).ok_or(
        AppError::InvalidTimestamp {
            line: line_no,
            value: raw.original_event_time,
        },
    )?;
    Ok(Opportunity {
        event_time,
        ad_break_positions: raw.position_url_segments.ad_break_index.unwrap_or_default(),
    })
}

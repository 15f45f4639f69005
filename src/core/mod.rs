//! Core module - typed record model and the four aggregations

mod frequency;
mod preroll;
mod types;
mod weekly;

pub(crate) use frequency::{count_by, count_by_filtered, most_frequent};
pub(crate) use preroll::preroll_counts;
pub(crate) use types::{DownloadEvent, Opportunity};
pub(crate) use weekly::{WeeklySchedule, weekly_shows};

mod format;
mod json;
mod table;

pub(crate) use json::{preroll_json, summary_json, top_device_json, top_show_json, weekly_json};
pub(crate) use table::{print_preroll_table, print_top_device, print_top_show, print_weekly_table};

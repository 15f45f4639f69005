//! Table and summary-line rendering for the four reports

use crate::core::WeeklySchedule;
use crate::output::format::{create_styled_table, format_number, header_cell, right_cell};

pub(crate) fn print_top_show(show_id: &str, count: u64, city: Option<&str>) {
    match city {
        Some(city) => println!(
            "Most downloaded show in {city}: {show_id} ({} downloads)",
            format_number(count)
        ),
        None => println!(
            "Most downloaded show: {show_id} ({} downloads)",
            format_number(count)
        ),
    }
}

pub(crate) fn print_top_device(device_type: &str, count: u64) {
    println!(
        "Most used device: {device_type} ({} downloads)",
        format_number(count)
    );
}

pub(crate) fn print_preroll_table(rows: &[(String, u64)], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Show Id", use_color),
        header_cell("Preroll Opportunities", use_color),
    ]);
    for (show_id, count) in rows {
        table.add_row(vec![
            comfy_table::Cell::new(show_id),
            right_cell(&format_number(*count)),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_weekly_table(schedules: &[WeeklySchedule], use_color: bool) {
    if schedules.is_empty() {
        println!("No weekly shows found.");
        return;
    }
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Show Id", use_color),
        header_cell("Schedule (UTC)", use_color),
    ]);
    for schedule in schedules {
        table.add_row(vec![schedule.show_id.as_str(), schedule.slot.as_str()]);
    }
    println!("{table}");
}

//! Command dispatch over the loaded record set

use crate::cli::{Cli, Commands};
use crate::core::{
    DownloadEvent, count_by, count_by_filtered, most_frequent, preroll_counts, weekly_shows,
};
use crate::data::load_events;
use crate::error::AppError;
use crate::output::{
    preroll_json, print_preroll_table, print_top_device, print_top_show, print_weekly_table,
    summary_json, top_device_json, top_show_json, weekly_json,
};

struct CommandContext<'a> {
    events: &'a [DownloadEvent],
    json: bool,
    use_color: bool,
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let input = cli.input.as_deref().ok_or(AppError::MissingInput)?;
    let events = load_events(input)?;

    let ctx = CommandContext {
        events: &events,
        json: cli.json,
        use_color: cli.use_color(),
    };

    match &cli.command {
        Some(Commands::TopShow { city }) => handle_top_show(&ctx, city.as_deref()),
        Some(Commands::TopDevice) => handle_top_device(&ctx),
        Some(Commands::Preroll) => {
            handle_preroll(&ctx);
            Ok(())
        }
        Some(Commands::Weekly) => {
            handle_weekly(&ctx);
            Ok(())
        }
        Some(Commands::Summary) | None => handle_summary(&ctx),
    }
}

fn handle_top_show(ctx: &CommandContext<'_>, city: Option<&str>) -> Result<(), AppError> {
    let counts = match city {
        Some(city) => count_by_filtered(
            ctx.events,
            |e: &DownloadEvent| e.show_id.clone(),
            |e| e.is_from_city(city),
        ),
        None => count_by(ctx.events, |e: &DownloadEvent| e.show_id.clone()),
    };
    let (show_id, count) = most_frequent(&counts)?;

    if ctx.json {
        println!("{}", top_show_json(&show_id, count, city));
    } else {
        print_top_show(&show_id, count, city);
    }
    Ok(())
}

fn handle_top_device(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let counts = count_by(ctx.events, |e: &DownloadEvent| e.device_type.clone());
    let (device_type, count) = most_frequent(&counts)?;

    if ctx.json {
        println!("{}", top_device_json(&device_type, count));
    } else {
        print_top_device(&device_type, count);
    }
    Ok(())
}

fn handle_preroll(ctx: &CommandContext<'_>) {
    let ranked = preroll_counts(ctx.events);
    if ctx.json {
        println!("{}", preroll_json(&ranked));
    } else {
        print_preroll_table(&ranked, ctx.use_color);
    }
}

fn handle_weekly(ctx: &CommandContext<'_>) {
    let schedules = weekly_shows(ctx.events);
    if ctx.json {
        println!("{}", weekly_json(&schedules));
    } else {
        print_weekly_table(&schedules, ctx.use_color);
    }
}

fn handle_summary(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.json {
        let (show_id, show_count) =
            most_frequent(&count_by(ctx.events, |e: &DownloadEvent| e.show_id.clone()))?;
        let (device_type, device_count) = most_frequent(&count_by(ctx.events, |e: &DownloadEvent| {
            e.device_type.clone()
        }))?;
        let ranked = preroll_counts(ctx.events);
        let schedules = weekly_shows(ctx.events);
        println!(
            "{}",
            summary_json(
                (&show_id, show_count),
                (&device_type, device_count),
                &ranked,
                &schedules,
            )
        );
        return Ok(());
    }

    handle_top_show(ctx, None)?;
    handle_top_device(ctx)?;
    handle_preroll(ctx);
    handle_weekly(ctx);
    Ok(())
}

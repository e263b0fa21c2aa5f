mod grid;
mod history;
mod summary;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Utc};
use clap::Parser;
use swimtimes_core::time::{day_name, short_day_name};
use swimtimes_core::{
    current_slot, load_schedule_config, parse_day, AppPaths, FileRecordRepository, RecordService,
    ScheduleBuilder, ScheduleStructure, WeeklyScheduleConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swimtimes")]
#[command(about = "Pool occupancy ratings and quiet times", long_about = None)]
struct Cli {
    /// Directory holding the rating store (default: ~/.swimtimes)
    #[arg(long, global = true, env = "SWIMTIMES_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Weekly schedule config (default: <data-dir>/schedule.json)
    #[arg(long, global = true, env = "SWIMTIMES_SCHEDULE")]
    schedule: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the weekly occupancy grid
    Grid,
    /// List the slots of every open day
    Schedule,
    /// Rate a slot (usage: rate mon 18:30 4)
    Rate {
        /// Day index (0 = Sunday) or name
        day: String,
        /// Slot start time (HH:MM)
        time: String,
        /// 1 (empty) to 5 (full)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// Rate the slot we are in right now
    Now {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// Show the ratings of one slot, newest first
    History {
        day: String,
        time: String,
    },
    /// Delete a rating by ID
    Delete {
        id: String,
    },
    /// Quiet time, busy time and average occupancy for a day
    Summary {
        /// Day index or name (default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// Dump per-slot stats as JSON
    Stats,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn today() -> u8 {
    Local::now().weekday().num_days_from_sunday() as u8
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = AppPaths::resolve(cli.data_dir, cli.schedule)?;
    let config = load_schedule_config(&paths.schedule_file)?;
    let builder = ScheduleBuilder::new(WeeklyScheduleConfig::default());
    let schedule = builder
        .build(config.as_ref())
        .with_context(|| format!("Invalid schedule configuration ({})", paths.schedule_file.display()))?;
    let slot_duration = builder.effective(config.as_ref()).slot_duration_minutes;

    let service = RecordService::new(FileRecordRepository::new(Some(paths.data_dir.clone()))?);

    match cli.command.unwrap_or(Commands::Grid) {
        Commands::Grid => {
            let stats = service.stats()?;
            grid::show_grid(&schedule, &stats);
        }
        Commands::Schedule => {
            print_schedule(&schedule);
        }
        Commands::Rate { day, time, rating } => {
            let day = parse_day(&day)?;
            rate(&service, &schedule, day, &time, rating)?;
        }
        Commands::Now { rating } => {
            let (day, time) = current_slot(Local::now().naive_local(), slot_duration)?;
            rate(&service, &schedule, day, &time, rating)?;
        }
        Commands::History { day, time } => {
            let day = parse_day(&day)?;
            let records = service.slot_history(day, &time)?;
            history::show_history(day, &time, &records);
        }
        Commands::Delete { id } => {
            if service.remove(&id)? {
                println!("Rating {} deleted.", id);
            } else {
                println!("No rating with ID {}.", id);
            }
        }
        Commands::Summary { day } => {
            let day = match day {
                Some(d) => parse_day(&d)?,
                None => today(),
            };
            summary::show_summary(&service.day_summary(day)?);
        }
        Commands::Stats => {
            let stats: BTreeMap<_, _> = service.stats()?.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

fn rate(
    service: &RecordService<FileRecordRepository>,
    schedule: &ScheduleStructure,
    day: u8,
    time: &str,
    rating: u8,
) -> Result<()> {
    let day_label = day_name(day).unwrap_or("?");
    if !schedule.contains(day, time) {
        println!("Warning: {} {} is not a slot in the current schedule.", day_label, time);
    }

    let created = service.add_rating(rating, day, time, Utc::now())?;
    println!(
        "Saved rating {} for {} at {} (ID: {})",
        created.rating, day_label, created.time, created.id
    );
    Ok(())
}

fn print_schedule(schedule: &ScheduleStructure) {
    if schedule.days().next().is_none() {
        println!("The pool is closed all week.");
        return;
    }
    for day in schedule.days() {
        let label = short_day_name(day).unwrap_or("?");
        match schedule.slots(day) {
            Some(slots) if !slots.is_empty() => println!("{:<4} {}", label, slots.join(" ")),
            _ => println!("{:<4} (no slots)", label),
        }
    }
}

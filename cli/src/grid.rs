use swimtimes_core::time::short_day_name;
use swimtimes_core::{ScheduleStructure, SlotKey, StatsMap};
use tabled::builder::Builder;
use tabled::settings::object::{Cell, Rows};
use tabled::settings::{Color, Modify, Style};

const NO_DATA: &str = "·";
const UNAVAILABLE: &str = "";

/// Buckets an average into 0 (empty) ..= 4 (full).
fn heat_level(average: f64) -> usize {
    if average <= 1.5 {
        0
    } else if average <= 2.5 {
        1
    } else if average <= 3.5 {
        2
    } else if average <= 4.5 {
        3
    } else {
        4
    }
}

fn heat_color(level: usize) -> Color {
    match level {
        0 => Color::FG_CYAN,
        1 => Color::FG_GREEN,
        2 => Color::FG_YELLOW,
        3 => Color::FG_RED,
        _ => Color::FG_MAGENTA,
    }
}

pub fn show_grid(schedule: &ScheduleStructure, stats: &StatsMap) {
    if schedule.is_empty() {
        println!("No open slots in the schedule.");
        return;
    }

    let days: Vec<u8> = schedule.days().collect();
    let times = schedule.all_times();

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(days.iter().map(|&d| short_day_name(d).unwrap_or("?").to_string()));
    builder.push_record(header);

    // (row, column, color) for cells with data; row 0 is the header.
    let mut heat = Vec::new();

    for (i, time) in times.iter().enumerate() {
        let mut row = vec![time.clone()];
        for (j, &day) in days.iter().enumerate() {
            if !schedule.contains(day, time) {
                row.push(UNAVAILABLE.to_string());
                continue;
            }
            let average = stats
                .get(&SlotKey::new(day, time.as_str()))
                .and_then(|s| s.average());
            match average {
                Some(avg) => {
                    row.push(format!("{:.1}", avg));
                    heat.push((i + 1, j + 1, heat_color(heat_level(avg))));
                }
                None => row.push(NO_DATA.to_string()),
            }
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    for (row, col, color) in heat {
        table.with(Modify::new(Cell::new(row, col)).with(color));
    }

    println!("{}", table);
    println!("1 = empty, 5 = full, {} = no reports yet", NO_DATA);
}

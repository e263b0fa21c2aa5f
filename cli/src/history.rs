use chrono::{DateTime, Local};
use swimtimes_core::time::day_name;
use swimtimes_core::RatingRecord;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Reported")]
    reported: String,
    #[tabled(rename = "Rating")]
    rating: u8,
    #[tabled(rename = "ID")]
    id: String,
}

fn format_capture_time(record: &RatingRecord) -> String {
    record
        .captured_at()
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn show_history(day: u8, time: &str, records: &[RatingRecord]) {
    println!(
        "\x1b[1;36m{} at {}\x1b[0m",
        day_name(day).unwrap_or("?"),
        time
    );

    if records.is_empty() {
        println!("No ratings yet.");
        return;
    }

    // Full IDs: they are what `delete` takes.
    let rows: Vec<HistoryRow> = records
        .iter()
        .map(|r| HistoryRow {
            reported: format_capture_time(r),
            rating: r.rating,
            id: r.id.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

use swimtimes_core::time::day_name;
use swimtimes_core::{DaySummary, SlotAverage};

const NO_DATA: &str = "No data yet";

fn slot_card(title: &str, day: &str, slot: Option<&SlotAverage>) {
    match slot {
        Some(s) => println!(
            "{} ({}): {}  (average occupancy {:.1})",
            title, day, s.time, s.average
        ),
        None => println!("{} ({}): -  ({})", title, day, NO_DATA),
    }
}

pub fn show_summary(summary: &DaySummary) {
    let day = day_name(summary.day).unwrap_or("?");

    slot_card("Quiet time", day, summary.best.as_ref());
    slot_card("Busy time", day, summary.worst.as_ref());

    match summary.overall_average {
        Some(avg) => println!(
            "Average occupancy ({}): {:.1}  ({} reports)",
            day, avg, summary.sample_count
        ),
        None => println!("Average occupancy ({}): -  ({})", day, NO_DATA),
    }
}

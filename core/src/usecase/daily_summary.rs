use crate::model::stats::{DaySummary, SlotAverage, StatsMap};

/// Quietest slot, busiest slot and count-weighted average for one day.
///
/// Only slots of `day` with at least one report take part. Ties on the
/// average go to the earliest slot time, for both best and worst.
pub fn summarize(stats: &StatsMap, day: u8) -> DaySummary {
    let mut entries: Vec<SlotAverage> = stats
        .iter()
        .filter(|(key, slot)| key.day == day && slot.count >= 1)
        .filter_map(|(key, slot)| {
            slot.average().map(|average| SlotAverage {
                time: key.time.clone(),
                average,
                count: slot.count,
            })
        })
        .collect();

    if entries.is_empty() {
        return DaySummary::empty(day);
    }

    entries.sort_by(|a, b| a.time.cmp(&b.time));

    let mut best = &entries[0];
    let mut worst = &entries[0];
    for entry in &entries[1..] {
        if entry.average < best.average {
            best = entry;
        }
        if entry.average > worst.average {
            worst = entry;
        }
    }

    let weighted_sum: f64 = entries.iter().map(|e| e.average * f64::from(e.count)).sum();
    let sample_count: u32 = entries.iter().map(|e| e.count).sum();

    DaySummary {
        day,
        best: Some(best.clone()),
        worst: Some(worst.clone()),
        overall_average: Some(weighted_sum / f64::from(sample_count)),
        sample_count,
    }
}

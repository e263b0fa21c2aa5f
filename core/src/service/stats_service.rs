use crate::model::record::RatingRecord;
use crate::model::stats::{SlotKey, SlotStats, StatsMap};

/// Groups ratings by the `(day, time)` stored on each record.
///
/// Keys are taken as reported; a record for a slot that is not in the
/// current schedule still gets an entry. Consumers look up only the cells
/// they draw.
pub fn aggregate(records: &[RatingRecord]) -> StatsMap {
    let mut stats = StatsMap::new();
    for record in records {
        stats
            .entry(SlotKey::new(record.day, record.time.as_str()))
            .or_insert_with(SlotStats::default)
            .add(record.rating);
    }
    tracing::debug!(records = records.len(), slots = stats.len(), "aggregated ratings");
    stats
}

/// Ratings for one slot, newest capture first. Equal timestamps are ordered
/// by id.
pub fn filter_slot_history<'a>(
    records: &'a [RatingRecord],
    day: u8,
    time: &str,
) -> Vec<&'a RatingRecord> {
    let mut history: Vec<&RatingRecord> = records
        .iter()
        .filter(|r| r.day == day && r.time == time)
        .collect();
    history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
    history
}

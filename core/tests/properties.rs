use proptest::prelude::*;
use swimtimes_core::time::{format_clock, parse_clock};
use swimtimes_core::{aggregate, generate_slots, summarize, RatingRecord, ScheduleBuilder, SlotKey};

fn arb_record() -> impl Strategy<Value = RatingRecord> {
    (
        "[a-z0-9]{8}",
        1u8..=5,
        0i64..2_000_000_000_000,
        0u8..=6,
        prop::sample::select(vec!["08:00", "08:30", "09:00", "12:30", "21:30"]),
    )
        .prop_map(|(id, rating, timestamp, day, time)| RatingRecord {
            id,
            rating,
            timestamp,
            day,
            time: time.to_string(),
        })
}

proptest! {
    #[test]
    fn slots_increase_by_exactly_the_duration(
        open in 0u32..(24 * 60),
        length in 0u32..(24 * 60),
        duration in 1u32..240,
    ) {
        let close = (open + length).min(24 * 60 - 1);
        let slots = generate_slots(Some(&format_clock(open)), Some(&format_clock(close)), duration).unwrap();

        prop_assert!(!slots.is_empty());
        let minutes: Vec<u32> = slots.iter().map(|s| parse_clock(s).unwrap()).collect();
        prop_assert_eq!(minutes[0], open);
        for pair in minutes.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], duration);
        }
        prop_assert!(*minutes.last().unwrap() <= close);
        prop_assert!(minutes.last().unwrap() + duration > close);
    }

    #[test]
    fn aggregate_ignores_record_order(records in prop::collection::vec(arb_record(), 0..60), seed in any::<u64>()) {
        let mut shuffled = records.clone();
        // Deterministic rotation plus reversal stands in for a shuffle.
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
        }
        shuffled.reverse();

        prop_assert_eq!(aggregate(&records), aggregate(&shuffled));
    }

    #[test]
    fn aggregate_counts_and_sums_match_records(records in prop::collection::vec(arb_record(), 0..60)) {
        let stats = aggregate(&records);
        for (key, slot) in &stats {
            let matching: Vec<&RatingRecord> = records
                .iter()
                .filter(|r| r.day == key.day && r.time == key.time)
                .collect();
            prop_assert_eq!(slot.count as usize, matching.len());
            prop_assert_eq!(slot.sum, matching.iter().map(|r| u32::from(r.rating)).sum::<u32>());
        }
        let total: u32 = stats.values().map(|s| s.count).sum();
        prop_assert_eq!(total as usize, records.len());
    }

    #[test]
    fn overall_average_equals_mean_of_day_ratings(records in prop::collection::vec(arb_record(), 1..60), day in 0u8..=6) {
        let summary = summarize(&aggregate(&records), day);
        let ratings: Vec<f64> = records.iter().filter(|r| r.day == day).map(|r| f64::from(r.rating)).collect();

        if ratings.is_empty() {
            prop_assert!(summary.overall_average.is_none());
            prop_assert!(summary.best.is_none() && summary.worst.is_none());
        } else {
            let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
            prop_assert!((summary.overall_average.unwrap() - mean).abs() < 1e-9);
            prop_assert!(summary.best.unwrap().average <= summary.worst.unwrap().average);
        }
    }
}

#[test]
fn default_schedule_with_no_records_has_no_data_anywhere() {
    let schedule = ScheduleBuilder::default().build(None).unwrap();
    let stats = aggregate(&[]);

    assert!(stats.is_empty());
    for day in schedule.days() {
        for time in schedule.slots(day).unwrap() {
            let average = stats.get(&SlotKey::new(day, time.as_str())).and_then(|s| s.average());
            assert!(average.is_none());
        }
    }
}

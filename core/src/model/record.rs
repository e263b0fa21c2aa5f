use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One self-reported occupancy rating.
///
/// `timestamp` is the capture time in epoch milliseconds; the rated slot is
/// `(day, time)` and is independent of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RatingRecord {
    pub id: String,
    pub rating: u8,
    pub timestamp: i64,
    pub day: u8,
    pub time: String,
}

impl RatingRecord {
    pub fn new(rating: u8, day: u8, time: &str, captured_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            rating,
            timestamp: captured_at.timestamp_millis(),
            day,
            time: time.to_string(),
        }
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Decodes stored entries one by one. Entries missing required fields are
/// skipped with a warning instead of failing the whole list.
pub fn parse_records(values: Vec<Value>) -> Vec<RatingRecord> {
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RatingRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(index, error = %e, "skipping malformed rating record"),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_ids_are_unique() {
        let now = Utc::now();
        let a = RatingRecord::new(3, 1, "08:00", now);
        let b = RatingRecord::new(3, 1, "08:00", now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.timestamp, now.timestamp_millis());
        assert_eq!(a.captured_at().map(|t| t.timestamp_millis()), Some(a.timestamp));
    }

    #[test]
    fn test_parse_records_skips_malformed() {
        let values = vec![
            json!({"id": "a", "rating": 3, "timestamp": 1000, "day": 1, "time": "08:00"}),
            json!({"id": "b", "rating": 4, "timestamp": 2000}),
            json!({"id": "c", "rating": 2, "timestamp": 3000, "day": -1, "time": "08:00"}),
            json!("garbage"),
            json!({"id": "d", "rating": 5, "timestamp": 4000, "day": 9, "time": "whenever"}),
        ];
        let records = parse_records(values);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }
}

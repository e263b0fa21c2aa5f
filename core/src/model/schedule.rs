use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SLOT_DURATION_MINUTES: u32 = 30;

/// Opening window for one day. A day missing either bound is closed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DayHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl DayHours {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: Some(open.to_string()),
            close: Some(close.to_string()),
        }
    }

    pub fn is_open(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.open) && set(&self.close)
    }
}

/// Weekly opening hours keyed by day index (0 = Sunday .. 6 = Saturday).
///
/// On disk this is `{"schedule": {"1": {"open": "08:00", "close": "22:00"}},
/// "slotDurationMinutes": 30}`. A file without `schedule` gets the default
/// weekly hours; one without `slotDurationMinutes` gets 30 minutes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScheduleConfig {
    #[serde(default = "default_weekly_hours")]
    pub schedule: BTreeMap<u8, DayHours>,
    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: u32,
}

/// Monday to Friday 08:00-22:00, Saturday 09:00-20:00, Sunday closed,
/// 30 minute slots.
impl Default for WeeklyScheduleConfig {
    fn default() -> Self {
        Self {
            schedule: default_weekly_hours(),
            slot_duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
        }
    }
}

fn default_weekly_hours() -> BTreeMap<u8, DayHours> {
    let mut hours = BTreeMap::new();
    for day in 1..=5 {
        hours.insert(day, DayHours::new("08:00", "22:00"));
    }
    hours.insert(6, DayHours::new("09:00", "20:00"));
    hours
}

fn default_slot_duration() -> u32 {
    DEFAULT_SLOT_DURATION_MINUTES
}

/// Slot start times per open day, in generation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleStructure {
    days: BTreeMap<u8, Vec<String>>,
}

impl ScheduleStructure {
    pub fn new(days: BTreeMap<u8, Vec<String>>) -> Self {
        Self { days }
    }

    pub fn slots(&self, day: u8) -> Option<&[String]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Days present in the schedule, ascending.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.keys().copied()
    }

    pub fn contains(&self, day: u8, time: &str) -> bool {
        self.slots(day).is_some_and(|slots| slots.iter().any(|t| t == time))
    }

    /// Sorted, de-duplicated union of slot times across all days.
    pub fn all_times(&self) -> Vec<String> {
        let mut times: Vec<String> = self.days.values().flatten().cloned().collect();
        times.sort();
        times.dedup();
        times
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json_with_string_day_keys() {
        let json = r#"{
            "schedule": {
                "1": { "open": "08:00", "close": "09:00" },
                "0": { "open": "10:00" }
            },
            "slotDurationMinutes": 15
        }"#;
        let config: WeeklyScheduleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.slot_duration_minutes, 15);
        assert!(config.schedule[&1].is_open());
        assert!(!config.schedule[&0].is_open());
    }

    #[test]
    fn test_config_missing_fields_fall_back() {
        let config: WeeklyScheduleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WeeklyScheduleConfig::default());

        let config: WeeklyScheduleConfig =
            serde_json::from_str(r#"{"slotDurationMinutes": 60}"#).unwrap();
        assert_eq!(config.slot_duration_minutes, 60);
        assert_eq!(config.schedule.len(), 6);
        assert!(!config.schedule.contains_key(&0));
    }

    #[test]
    fn test_all_times_is_sorted_union() {
        let mut days = BTreeMap::new();
        days.insert(1, vec!["08:00".to_string(), "08:30".to_string()]);
        days.insert(6, vec!["07:30".to_string(), "08:00".to_string()]);
        let schedule = ScheduleStructure::new(days);

        assert_eq!(schedule.all_times(), vec!["07:30", "08:00", "08:30"]);
        assert!(schedule.contains(6, "07:30"));
        assert!(!schedule.contains(1, "07:30"));
        assert!(!schedule.contains(3, "08:00"));
    }
}

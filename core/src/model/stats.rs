use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One cell of the schedule grid. Serialises as `"<day>-<time>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SlotKey {
    pub day: u8,
    pub time: String,
}

impl SlotKey {
    pub fn new(day: u8, time: impl Into<String>) -> Self {
        Self {
            day,
            time: time.into(),
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.time)
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s
            .split_once('-')
            .ok_or_else(|| format!("slot key '{}' is not <day>-<time>", s))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| format!("slot key '{}' has a non-numeric day", s))?;
        Ok(SlotKey::new(day, time))
    }
}

impl From<SlotKey> for String {
    fn from(key: SlotKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for SlotKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotStats {
    pub sum: u32,
    pub count: u32,
}

impl SlotStats {
    pub fn add(&mut self, rating: u8) {
        self.sum += u32::from(rating);
        self.count += 1;
    }

    /// `None` when the slot has no reports.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(f64::from(self.sum) / f64::from(self.count))
        }
    }
}

pub type StatsMap = HashMap<SlotKey, SlotStats>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SlotAverage {
    pub time: String,
    pub average: f64,
    pub count: u32,
}

/// Quietest and busiest slot of a day plus the day's overall average.
/// All three are `None` when the day has no reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day: u8,
    pub best: Option<SlotAverage>,
    pub worst: Option<SlotAverage>,
    pub overall_average: Option<f64>,
    pub sample_count: u32,
}

impl DaySummary {
    pub fn empty(day: u8) -> Self {
        Self {
            day,
            best: None,
            worst: None,
            overall_average: None,
            sample_count: 0,
        }
    }
}

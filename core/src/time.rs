use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::ScheduleError;

pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
pub const SHORT_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MINUTES_PER_HOUR: u32 = 60;

pub fn day_name(day: u8) -> Option<&'static str> {
    DAYS.get(day as usize).copied()
}

pub fn short_day_name(day: u8) -> Option<&'static str> {
    SHORT_DAYS.get(day as usize).copied()
}

/// Parses `HH:MM` (24-hour) into minutes since midnight.
pub fn parse_clock(input: &str) -> Result<u32, ScheduleError> {
    let time = NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(input.to_string()))?;
    Ok(time.hour() * MINUTES_PER_HOUR + time.minute())
}

/// Formats minutes since midnight as zero-padded `HH:MM`. Hours are not
/// wrapped at 24.
pub fn format_clock(minutes: u32) -> String {
    format!(
        "{:02}:{:02}",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

/// Slot start times for one day, from `open` up to and including `close`.
///
/// A day with `open` or `close` missing (or blank) is closed and yields no
/// slots, as does a window with `open` after `close`. Slots never wrap past
/// midnight: once the running time passes `close` generation stops.
pub fn generate_slots(
    open: Option<&str>,
    close: Option<&str>,
    slot_duration_minutes: u32,
) -> Result<Vec<String>, ScheduleError> {
    if slot_duration_minutes == 0 {
        return Err(ScheduleError::ZeroSlotDuration);
    }

    fn present(s: Option<&str>) -> Option<&str> {
        s.filter(|v| !v.trim().is_empty())
    }
    let (Some(open), Some(close)) = (present(open), present(close)) else {
        return Ok(Vec::new());
    };

    let start = parse_clock(open)?;
    let end = parse_clock(close)?;

    let mut slots = Vec::new();
    let mut current = start;
    // Inclusive boundary: a slot starting exactly at `close` is still emitted.
    while current <= end {
        slots.push(format_clock(current));
        current += slot_duration_minutes;
    }

    Ok(slots)
}

/// The slot a rating taken at `now` belongs to: the local weekday and the
/// time of day floored to a multiple of the slot duration.
pub fn current_slot(
    now: NaiveDateTime,
    slot_duration_minutes: u32,
) -> Result<(u8, String), ScheduleError> {
    if slot_duration_minutes == 0 {
        return Err(ScheduleError::ZeroSlotDuration);
    }
    let day = now.weekday().num_days_from_sunday() as u8;
    let minute_of_day = now.hour() * MINUTES_PER_HOUR + now.minute();
    let floored = minute_of_day - minute_of_day % slot_duration_minutes;
    Ok((day, format_clock(floored)))
}

/// Accepts a day index (`0` = Sunday .. `6` = Saturday) or a weekday name
/// (`mon`, `Monday`, ...).
pub fn parse_day(input: &str) -> Result<u8> {
    let input = input.trim();
    if let Ok(index) = input.parse::<u8>() {
        if (index as usize) < DAYS.len() {
            return Ok(index);
        }
        return Err(anyhow!("Day index out of range (0-6): {}", index));
    }

    input
        .parse::<Weekday>()
        .map(|w| w.num_days_from_sunday() as u8)
        .map_err(|_| anyhow!("Invalid day: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generate_inclusive_boundary() {
        let slots = generate_slots(Some("08:00"), Some("09:00"), 30).unwrap();
        assert_eq!(slots, vec!["08:00", "08:30", "09:00"]);
    }

    #[test]
    fn test_generate_boundary_not_on_step() {
        let slots = generate_slots(Some("08:00"), Some("08:45"), 30).unwrap();
        assert_eq!(slots, vec!["08:00", "08:30"]);
    }

    #[test]
    fn test_generate_carries_minutes_into_hours() {
        let slots = generate_slots(Some("07:45"), Some("10:00"), 50).unwrap();
        assert_eq!(slots, vec!["07:45", "08:35", "09:25"]);
    }

    #[test]
    fn test_generate_closed_day() {
        assert!(generate_slots(None, Some("09:00"), 30).unwrap().is_empty());
        assert!(generate_slots(Some("08:00"), None, 30).unwrap().is_empty());
        assert!(generate_slots(Some(""), Some("09:00"), 30).unwrap().is_empty());
        assert!(generate_slots(Some("08:00"), Some("  "), 30).unwrap().is_empty());
    }

    #[test]
    fn test_generate_open_after_close_is_empty() {
        assert!(generate_slots(Some("10:00"), Some("09:00"), 30).unwrap().is_empty());
    }

    #[test]
    fn test_generate_stops_before_midnight() {
        let slots = generate_slots(Some("22:00"), Some("23:59"), 90).unwrap();
        assert_eq!(slots, vec!["22:00", "23:30"]);
    }

    #[test]
    fn test_generate_rejects_malformed_time() {
        assert_eq!(
            generate_slots(Some("8h"), Some("09:00"), 30),
            Err(ScheduleError::InvalidTime("8h".to_string()))
        );
        assert!(generate_slots(Some("08:00"), Some("25:00"), 30).is_err());
    }

    #[test]
    fn test_generate_rejects_zero_duration() {
        assert_eq!(
            generate_slots(Some("08:00"), Some("09:00"), 0),
            Err(ScheduleError::ZeroSlotDuration)
        );
    }

    #[test]
    fn test_current_slot_floors_to_duration() {
        // 2026-10-19 is a Monday
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(17, 44, 10)
            .unwrap();
        assert_eq!(current_slot(at, 30).unwrap(), (1, "17:30".to_string()));
        assert_eq!(current_slot(at, 15).unwrap(), (1, "17:30".to_string()));
        assert_eq!(current_slot(at, 60).unwrap(), (1, "17:00".to_string()));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("0").unwrap(), 0);
        assert_eq!(parse_day("6").unwrap(), 6);
        assert_eq!(parse_day("mon").unwrap(), 1);
        assert_eq!(parse_day("Saturday").unwrap(), 6);
        assert_eq!(parse_day("sun").unwrap(), 0);
        assert!(parse_day("7").is_err());
        assert!(parse_day("someday").is_err());
    }
}

use thiserror::Error;

/// Misconfiguration of the weekly schedule. Always surfaced to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("invalid opening hours for {day_name}: '{value}' is not HH:MM")]
    InvalidDayHours {
        day: u8,
        day_name: &'static str,
        value: String,
    },

    #[error("slot duration must be greater than zero minutes")]
    ZeroSlotDuration,
}

/// Rejected rating submission. Nothing is persisted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("day must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidDay(u8),

    #[error("invalid slot time '{0}': expected HH:MM")]
    InvalidTime(String),
}

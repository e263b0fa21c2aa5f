use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::error::RecordError;
use crate::model::record::RatingRecord;
use crate::model::stats::{DaySummary, StatsMap};
use crate::repository::RecordRepository;
use crate::service::stats_service::{aggregate, filter_slot_history};
use crate::time::{format_clock, parse_clock, DAYS};
use crate::usecase::daily_summary::summarize;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub struct RecordService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new rating captured at `captured_at`.
    pub fn add_rating(
        &self,
        rating: u8,
        day: u8,
        time: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<RatingRecord> {
        validate_submission(rating, day, time)?;
        let record = RatingRecord::new(rating, day, time, captured_at);
        tracing::info!(id = %record.id, rating, day, time, "recording rating");
        self.repo.append(record)
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        let removed = self.repo.delete_by_id(id)?;
        if removed {
            tracing::info!(id, "deleted rating");
        } else {
            tracing::debug!(id, "no rating with this id");
        }
        Ok(removed)
    }

    pub fn stats(&self) -> Result<StatsMap> {
        Ok(aggregate(&self.repo.list()?))
    }

    pub fn slot_history(&self, day: u8, time: &str) -> Result<Vec<RatingRecord>> {
        let records = self.repo.list()?;
        Ok(filter_slot_history(&records, day, time).into_iter().cloned().collect())
    }

    pub fn day_summary(&self, day: u8) -> Result<DaySummary> {
        Ok(summarize(&self.stats()?, day))
    }
}

pub fn validate_submission(rating: u8, day: u8, time: &str) -> Result<(), RecordError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(RecordError::InvalidRating(rating));
    }
    if day as usize >= DAYS.len() {
        return Err(RecordError::InvalidDay(day));
    }
    // Only the zero-padded form matches a generated slot.
    let canonical = parse_clock(time).map(format_clock).ok();
    if canonical.as_deref() != Some(time) {
        return Err(RecordError::InvalidTime(time.to_string()));
    }
    Ok(())
}

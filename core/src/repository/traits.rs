use crate::model::record::RatingRecord;
use anyhow::Result;

/// Append-only rating store with delete-by-id.
pub trait RecordRepository {
    /// Snapshot of all well-formed records.
    fn list(&self) -> Result<Vec<RatingRecord>>;
    fn append(&self, record: RatingRecord) -> Result<RatingRecord>;
    /// Returns whether a record with `id` existed.
    fn delete_by_id(&self, id: &str) -> Result<bool>;
}

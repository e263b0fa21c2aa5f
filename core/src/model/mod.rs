pub mod record;
pub mod schedule;
pub mod stats;

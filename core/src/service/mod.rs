pub mod record_service;
pub mod schedule_builder;
pub mod stats_service;

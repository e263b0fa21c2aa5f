pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{load_schedule_config, AppPaths};
pub use error::{RecordError, ScheduleError};
pub use model::record::RatingRecord;
pub use model::schedule::{DayHours, ScheduleStructure, WeeklyScheduleConfig};
pub use model::stats::{DaySummary, SlotAverage, SlotKey, SlotStats, StatsMap};
pub use repository::{FileRecordRepository, RecordRepository};
pub use service::record_service::RecordService;
pub use service::schedule_builder::ScheduleBuilder;
pub use service::stats_service::{aggregate, filter_slot_history};
pub use time::{current_slot, generate_slots, parse_day};
pub use usecase::daily_summary::summarize;

pub mod daily_summary;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::model::schedule::WeeklyScheduleConfig;

pub const DATA_DIR_NAME: &str = ".swimtimes";
pub const SCHEDULE_FILE_NAME: &str = "schedule.json";

/// `~/.swimtimes`
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Where the record store and the schedule config live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub schedule_file: PathBuf,
}

impl AppPaths {
    /// Explicit paths win; otherwise the data dir defaults to `~/.swimtimes`
    /// and the schedule file to `<data_dir>/schedule.json`.
    pub fn resolve(data_dir: Option<PathBuf>, schedule_file: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let schedule_file = schedule_file.unwrap_or_else(|| data_dir.join(SCHEDULE_FILE_NAME));
        Ok(Self {
            data_dir,
            schedule_file,
        })
    }
}

/// Reads a schedule config. A missing file means "no config"; a file that
/// does not parse is an error.
pub fn load_schedule_config(path: &Path) -> Result<Option<WeeklyScheduleConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no schedule config, using default");
            return Ok(None);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid schedule config in {}", path.display()))?;
    Ok(Some(config))
}

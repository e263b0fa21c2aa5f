use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;

use crate::config::default_data_dir;
use crate::model::record::{parse_records, RatingRecord};
use crate::repository::traits::RecordRepository;

pub const DEFAULT_FILE_NAME: &str = "swim_db.json";

/// Ratings stored as a pretty-printed JSON array.
///
/// A missing or blank file reads as an empty store. A file that is not a
/// JSON array is copied to `<file>.backup.<epoch-ms>` and reset.
#[derive(Clone)]
pub struct FileRecordRepository {
    file_path: PathBuf,
}

impl FileRecordRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create data directory {}", path.display()))?;
        path.push(DEFAULT_FILE_NAME);

        let repo = FileRecordRepository { file_path: path };
        if !repo.file_path.exists() {
            repo.write_values(&[])?;
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_values(&self) -> Result<Vec<Value>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.file_path.display(), "record store was deleted, recreating");
                self.write_values(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.file_path.display()))
            }
        };

        if content.trim().is_empty() {
            self.write_values(&[])?;
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Value>>(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                tracing::error!(path = %self.file_path.display(), error = %e, "record store is not a JSON array");
                self.backup_corrupted();
                self.write_values(&[])?;
                Ok(Vec::new())
            }
        }
    }

    fn backup_corrupted(&self) {
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".backup.{}", Utc::now().timestamp_millis()));
        let backup = PathBuf::from(backup);

        match fs::copy(&self.file_path, &backup) {
            Ok(_) => tracing::warn!(backup = %backup.display(), "backed up corrupted record store"),
            Err(e) => tracing::error!(error = %e, "failed to back up corrupted record store"),
        }
    }

    fn write_values(&self, values: &[Value]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)?;
        writer.flush()?;
        Ok(())
    }
}

impl RecordRepository for FileRecordRepository {
    fn list(&self) -> Result<Vec<RatingRecord>> {
        Ok(parse_records(self.read_values()?))
    }

    fn append(&self, record: RatingRecord) -> Result<RatingRecord> {
        // Raw values are kept so unreadable entries survive the rewrite.
        let mut values = self.read_values()?;
        values.push(serde_json::to_value(&record)?);
        self.write_values(&values)?;
        Ok(record)
    }

    fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut values = self.read_values()?;
        let initial_len = values.len();
        values.retain(|v| v.get("id").and_then(Value::as_str) != Some(id));

        if values.len() == initial_len {
            return Ok(false);
        }

        self.write_values(&values)?;
        Ok(true)
    }
}

//! Append-only log of which suggested line the writer picked.
//!
//! One JSON object per line (`line_preferences.jsonl`), suitable for building
//! a preference dataset later.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub const PREFERENCES_FILE_NAME: &str = "line_preferences.jsonl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub current_text: String,
    pub alternatives: Vec<String>,
    pub chosen: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("No preferences file found")]
    Missing,
    #[error("preference encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("preference storage error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct PreferenceLog {
    path: PathBuf,
    /// Keeps concurrent appends from interleaving partial lines.
    append_lock: Mutex<()>,
}

impl PreferenceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), append_lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a JSON line, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    pub async fn append(&self, record: &PreferenceRecord) -> Result<(), PreferenceError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.append_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }

    /// Raw log contents.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Missing`] if nothing has been recorded yet.
    pub async fn read_all(&self) -> Result<Vec<u8>, PreferenceError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PreferenceError::Missing),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

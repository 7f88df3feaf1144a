//! File-backed poem storage.
//!
//! DESIGN
//! ======
//! Each poem is one text file named `<YYYYmmddHHMMSS>-<id>-<slug>.txt` under
//! the poems directory. The name alone carries everything the list view needs
//! except the first line, so listing never parses content beyond line one.
//! Saving deletes every older file for the same id before writing, so at most
//! one version exists per id. Ids may not contain `-`, which keeps the
//! three-way split of the file stem unambiguous.

use std::path::{Path, PathBuf};

use serde::Serialize;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tokio::sync::Mutex;

const MAX_ID_LEN: usize = 64;
const SLUG_SOURCE_CHARS: usize = 50;
const POEM_EXT: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum PoemError {
    #[error("Empty poem")]
    Empty,
    #[error("No poem ID provided")]
    MissingId,
    #[error("Invalid poem ID: {0}")]
    InvalidId(String),
    #[error("Poem not found")]
    NotFound(String),
    #[error("poem storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of the poem list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemSummary {
    pub id: String,
    pub first_line: String,
    /// Save time as `YYYY-MM-DDTHH:MM:SS` (UTC).
    pub created: String,
    pub filename: String,
}

/// Parsed form of a poem file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemFileName {
    pub saved_at: PrimitiveDateTime,
    pub id: String,
}

pub struct PoemStore {
    dir: PathBuf,
    /// Serializes saves so delete-then-write is not interleaved.
    write_lock: Mutex<()>,
}

impl PoemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), write_lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save `content` as the only version of poem `id`. Returns the file name.
    ///
    /// # Errors
    ///
    /// Returns [`PoemError::Empty`] for blank content, an id error for a
    /// missing or malformed id, or [`PoemError::Io`] on filesystem failure.
    pub async fn save(&self, id: &str, content: &str) -> Result<String, PoemError> {
        self.save_at(id, content, OffsetDateTime::now_utc()).await
    }

    async fn save_at(&self, id: &str, content: &str, now: OffsetDateTime) -> Result<String, PoemError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(PoemError::Empty);
        }
        validate_id(id)?;

        let first_line: String = content
            .split('\n')
            .next()
            .unwrap_or_default()
            .chars()
            .take(SLUG_SOURCE_CHARS)
            .collect();
        let filename = poem_file_name(now, id, &slugify(&first_line));

        let _guard = self.write_lock.lock().await;
        tokio::fs::create_dir_all(&self.dir).await?;
        for old in self.files_for(id).await? {
            tokio::fs::remove_file(self.dir.join(&old)).await?;
            tracing::debug!(poem_id = %id, file = %old, "removed previous poem version");
        }
        tokio::fs::write(self.dir.join(&filename), content).await?;
        tracing::info!(poem_id = %id, file = %filename, "poem saved");
        Ok(filename)
    }

    /// All saved poems, newest first. Malformed file names are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PoemError::Io`] if the directory cannot be created or read.
    pub async fn list(&self) -> Result<Vec<PoemSummary>, PoemError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let mut names = self.poem_file_names().await?;
        names.sort_unstable_by(|a, b| b.cmp(a));

        let mut poems = Vec::with_capacity(names.len());
        for name in names {
            let Some(parsed) = parse_file_name(&name) else {
                tracing::warn!(file = %name, "skipping malformed poem file");
                continue;
            };
            let content = match tokio::fs::read_to_string(self.dir.join(&name)).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "skipping unreadable poem file");
                    continue;
                }
            };
            poems.push(PoemSummary {
                id: parsed.id,
                first_line: content.lines().next().unwrap_or_default().trim().to_owned(),
                created: format_created(parsed.saved_at),
                filename: name,
            });
        }
        Ok(poems)
    }

    /// Content of poem `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PoemError::NotFound`] if no file exists for `id`, including
    /// ids that could never have been saved.
    pub async fn get(&self, id: &str) -> Result<String, PoemError> {
        let Some(name) = self.files_for(id).await?.into_iter().max() else {
            return Err(PoemError::NotFound(id.to_owned()));
        };
        Ok(tokio::fs::read_to_string(self.dir.join(name)).await?)
    }

    async fn poem_file_names(&self) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if Path::new(&name).extension().is_some_and(|ext| ext == POEM_EXT) {
                names.push(name);
            }
        }
        Ok(names)
    }

    async fn files_for(&self, id: &str) -> std::io::Result<Vec<String>> {
        let names = match self.poem_file_names().await {
            Ok(names) => names,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        Ok(names
            .into_iter()
            .filter(|name| parse_file_name(name).is_some_and(|p| p.id == id))
            .collect())
    }
}

/// Ids are 1..=64 chars of `[A-Za-z0-9_]`.
///
/// # Errors
///
/// Returns [`PoemError::MissingId`] for an empty id or
/// [`PoemError::InvalidId`] for anything else outside the allowed set.
pub fn validate_id(id: &str) -> Result<(), PoemError> {
    if id.is_empty() {
        return Err(PoemError::MissingId);
    }
    if id.len() > MAX_ID_LEN || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PoemError::InvalidId(id.to_owned()));
    }
    Ok(())
}

/// Lowercase ASCII slug with non-Latin text transliterated, so "Café"
/// becomes "cafe". Separator runs collapse to a single `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

#[must_use]
pub fn poem_file_name(now: OffsetDateTime, id: &str, slug: &str) -> String {
    let stamp = now
        .format(format_description!("[year][month][day][hour][minute][second]"))
        .unwrap_or_default();
    format!("{stamp}-{id}-{slug}.{POEM_EXT}")
}

/// Parse `<timestamp>-<id>-<slug>.txt`. The slug may be empty.
#[must_use]
pub fn parse_file_name(name: &str) -> Option<PoemFileName> {
    let stem = name.strip_suffix(".txt")?;
    let mut parts = stem.splitn(3, '-');
    let stamp = parts.next()?;
    let id = parts.next()?;
    if validate_id(id).is_err() {
        return None;
    }
    let saved_at =
        PrimitiveDateTime::parse(stamp, format_description!("[year][month][day][hour][minute][second]")).ok()?;
    Some(PoemFileName { saved_at, id: id.to_owned() })
}

fn format_created(saved_at: PrimitiveDateTime) -> String {
    saved_at
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "poems_test.rs"]
mod tests;

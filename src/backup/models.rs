// src/backup/models.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Bookmark, BookmarkWithChapterInfo};
use crate::error::AppResult;

const MILLIS_PER_SECOND: i64 = 1000;

/// A bookmark as written to a backup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupBookmark {
    pub chapter_url: String,

    /// Informational; restore matches on `chapter_url`
    #[serde(default)]
    pub chapter_number: f64,

    #[serde(default)]
    pub page_index: Option<i32>,

    #[serde(default)]
    pub note: Option<String>,

    /// Seconds since the epoch
    #[serde(default)]
    pub last_modified_at: i64,
}

impl BackupBookmark {
    /// Bookmark for a resolved chapter, timestamp back in milliseconds
    ///
    /// `None` when the timestamp is negative or does not fit in milliseconds.
    pub fn to_bookmark(&self, manga_id: i64, chapter_id: i64) -> Option<Bookmark> {
        let last_modified_at = self
            .last_modified_at
            .checked_mul(MILLIS_PER_SECOND)
            .filter(|ms| *ms >= 0)?;

        Some(
            Bookmark::new(manga_id, chapter_id, self.page_index, self.note.clone())
                .with_last_modified_at(last_modified_at),
        )
    }
}

impl From<BookmarkWithChapterInfo> for BackupBookmark {
    fn from(info: BookmarkWithChapterInfo) -> Self {
        Self {
            chapter_url: info.chapter_url,
            chapter_number: info.chapter_number,
            page_index: info.page_index,
            note: info.note,
            last_modified_at: info.last_modified_at / MILLIS_PER_SECOND,
        }
    }
}

pub fn to_json(bookmarks: &[BackupBookmark]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(bookmarks)?)
}

pub fn from_json(json: &str) -> AppResult<Vec<BackupBookmark>> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_backup_file(path: &Path) -> AppResult<Vec<BackupBookmark>> {
    let contents = fs::read_to_string(path)?;
    from_json(&contents)
}

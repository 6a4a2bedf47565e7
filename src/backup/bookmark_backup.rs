// src/backup/bookmark_backup.rs
use std::sync::Arc;

use log::{info, warn};

use crate::backup::models::BackupBookmark;
use crate::domain::Bookmark;
use crate::error::AppResult;
use crate::repositories::ChapterRepository;
use crate::services::{GetBookmarks, OperationResult, SetBookmark};

/// Outcome of a restore
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Entries handed to the merge
    pub applied: usize,
    /// Entries with an unknown chapter URL or an out-of-range timestamp
    pub skipped: usize,
}

pub struct BookmarkBackup {
    get_bookmarks: Arc<GetBookmarks>,
    set_bookmark: Arc<SetBookmark>,
    chapter_repo: Arc<dyn ChapterRepository>,
}

impl BookmarkBackup {
    pub fn new(
        get_bookmarks: Arc<GetBookmarks>,
        set_bookmark: Arc<SetBookmark>,
        chapter_repo: Arc<dyn ChapterRepository>,
    ) -> Self {
        Self {
            get_bookmarks,
            set_bookmark,
            chapter_repo,
        }
    }

    pub fn backup(&self, manga_id: i64) -> AppResult<Vec<BackupBookmark>> {
        let rows = self.get_bookmarks.get_with_chapter_info(manga_id)?;
        Ok(rows.into_iter().map(BackupBookmark::from).collect())
    }

    /// Merges backed-up bookmarks into a manga
    ///
    /// Existing notes survive unless the backup entry carries its own note.
    pub fn restore(&self, manga_id: i64, backup: &[BackupBookmark]) -> AppResult<RestoreReport> {
        let mut report = RestoreReport::default();
        let mut bookmarks: Vec<Bookmark> = Vec::with_capacity(backup.len());

        for entry in backup {
            let Some(chapter) = self.chapter_repo.get_by_url(manga_id, &entry.chapter_url)? else {
                warn!(
                    "Skipping bookmark for unknown chapter {} of manga {}",
                    entry.chapter_url, manga_id
                );
                report.skipped += 1;
                continue;
            };

            match entry.to_bookmark(manga_id, chapter.id) {
                Some(bookmark) => bookmarks.push(bookmark),
                None => {
                    warn!(
                        "Skipping bookmark for chapter {} with invalid timestamp {}",
                        entry.chapter_url, entry.last_modified_at
                    );
                    report.skipped += 1;
                }
            }
        }

        if let OperationResult::InternalError(e) = self.set_bookmark.set_all(&bookmarks) {
            return Err(e);
        }

        report.applied = bookmarks.len();
        info!(
            "Restored {} bookmarks for manga {} ({} skipped)",
            report.applied, manga_id, report.skipped
        );
        Ok(report)
    }
}

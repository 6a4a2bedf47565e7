// src/services/delete_bookmark.rs
use crate::domain::{BookmarkDelete, Chapter, ChapterUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::{BookmarkRepository, ChapterRepository};
use crate::services::OperationResult;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Removes bookmarks
///
/// Chapter flags are cleared before the bookmark rows go away, so a flag
/// never outlives its chapter-level bookmark.
pub struct DeleteBookmark {
    bookmark_repo: Arc<dyn BookmarkRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
}

impl DeleteBookmark {
    pub fn new(
        bookmark_repo: Arc<dyn BookmarkRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
    ) -> Self {
        Self {
            bookmark_repo,
            chapter_repo,
        }
    }

    pub fn delete(
        &self,
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
    ) -> OperationResult {
        let key = BookmarkDelete::new(manga_id, chapter_id, page_index);
        OperationResult::from_result("Delete bookmark", self.try_delete_all(&[key]))
    }

    pub fn delete_by_id(&self, bookmark_id: i64) -> OperationResult {
        OperationResult::from_result("Delete bookmark", self.try_delete_by_id(bookmark_id))
    }

    /// Deletes every key in one transaction
    pub fn delete_all(&self, keys: &[BookmarkDelete]) -> OperationResult {
        OperationResult::from_result("Delete bookmarks", self.try_delete_all(keys))
    }

    /// Deletes the chapter-level bookmarks of `chapters`
    pub fn delete_by_chapters(&self, chapters: &[Chapter]) -> OperationResult {
        let keys: Vec<BookmarkDelete> = chapters
            .iter()
            .map(|c| BookmarkDelete::chapter_level(c.manga_id, c.id))
            .collect();
        OperationResult::from_result("Delete chapter bookmarks", self.try_delete_all(&keys))
    }

    /// Deletes every bookmark of a manga
    ///
    /// With `update_chapters` the manga's chapter flags are cleared too.
    pub fn delete_all_by_manga_id(&self, manga_id: i64, update_chapters: bool) -> OperationResult {
        OperationResult::from_result(
            "Delete manga bookmarks",
            self.try_delete_all_by_manga_id(manga_id, update_chapters),
        )
    }

    fn clear_flags(&self, chapter_ids: impl IntoIterator<Item = i64>) -> AppResult<()> {
        let updates: Vec<ChapterUpdate> = chapter_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|id| ChapterUpdate::bookmark_update(id, false))
            .collect();

        match updates.as_slice() {
            [] => Ok(()),
            [single] => self.chapter_repo.update(single),
            _ => self.chapter_repo.update_all(&updates),
        }
    }

    fn try_delete_by_id(&self, bookmark_id: i64) -> AppResult<()> {
        let bookmark = self
            .bookmark_repo
            .get(bookmark_id)?
            .ok_or(AppError::NotFound)?;

        if bookmark.is_chapter_level() {
            self.clear_flags([bookmark.chapter_id])?;
        }

        self.bookmark_repo.delete(bookmark_id)
    }

    fn try_delete_all(&self, keys: &[BookmarkDelete]) -> AppResult<()> {
        if keys.is_empty() {
            return Ok(());
        }

        self.clear_flags(
            keys.iter()
                .filter(|k| k.is_chapter_level())
                .map(|k| k.chapter_id),
        )?;

        if let [single] = keys {
            self.bookmark_repo.delete_by_key(single)?;
        } else {
            self.bookmark_repo.delete_all(keys)?;
        }
        Ok(())
    }

    fn try_delete_all_by_manga_id(&self, manga_id: i64, update_chapters: bool) -> AppResult<()> {
        if update_chapters {
            let chapters = self
                .chapter_repo
                .get_bookmarked_chapters_by_manga_id(manga_id)?;
            self.clear_flags(chapters.iter().map(|c| c.id))?;
        }

        self.bookmark_repo.delete_all_by_manga_id(manga_id)?;
        Ok(())
    }
}

// src/services/set_bookmark.rs
use crate::domain::bookmark::entity::is_non_blank;
use crate::domain::{validate_bookmark, Bookmark, BookmarkUpdate, Chapter, ChapterUpdate};
use crate::error::{AppError, AppResult};
use crate::repositories::{BookmarkRepository, ChapterRepository};
use crate::services::OperationResult;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Creates bookmarks and edits their notes
///
/// Writes go bookmark first, chapter flag second.
pub struct SetBookmark {
    bookmark_repo: Arc<dyn BookmarkRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
}

impl SetBookmark {
    pub fn new(
        bookmark_repo: Arc<dyn BookmarkRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
    ) -> Self {
        Self {
            bookmark_repo,
            chapter_repo,
        }
    }

    /// Upserts the bookmark for a key
    ///
    /// An existing bookmark only changes when `note` is non-blank; otherwise
    /// the call keeps whatever note is stored. `last_modified_at` (ms) applies
    /// to new rows and defaults to now.
    pub fn set(
        &self,
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
        note: Option<String>,
        last_modified_at: Option<i64>,
    ) -> OperationResult {
        OperationResult::from_result(
            "Set bookmark",
            self.try_set(manga_id, chapter_id, page_index, note, last_modified_at),
        )
    }

    /// Replaces the note of a stored bookmark; a blank note clears it
    pub fn update_note(&self, bookmark_id: i64, note: Option<String>) -> OperationResult {
        let note = note.filter(|n| is_non_blank(Some(n.as_str())));
        OperationResult::from_result(
            "Update bookmark note",
            self.bookmark_repo
                .update_partial(&BookmarkUpdate { id: bookmark_id, note }),
        )
    }

    /// Bulk merge-upsert; see [`crate::domain::reconcile`]
    pub fn set_all(&self, bookmarks: &[Bookmark]) -> OperationResult {
        OperationResult::from_result("Set bookmarks", self.try_set_all(bookmarks))
    }

    /// Chapter-level bookmarks for whole chapters
    pub fn set_by_chapters(&self, chapters: &[Chapter]) -> OperationResult {
        let bookmarks: Vec<Bookmark> = chapters
            .iter()
            .map(|c| Bookmark::chapter_level(c.manga_id, c.id))
            .collect();
        OperationResult::from_result("Bookmark chapters", self.try_set_all(&bookmarks))
    }

    fn try_set(
        &self,
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
        note: Option<String>,
        last_modified_at: Option<i64>,
    ) -> AppResult<()> {
        match self.bookmark_repo.get_by_key(manga_id, chapter_id, page_index)? {
            Some(existing) => {
                if is_non_blank(note.as_deref()) {
                    self.bookmark_repo
                        .update_partial(&BookmarkUpdate { id: existing.id, note })?;
                }
            }
            None => {
                let mut bookmark = Bookmark::new(manga_id, chapter_id, page_index, note);
                if let Some(timestamp) = last_modified_at {
                    bookmark = bookmark.with_last_modified_at(timestamp);
                }
                validate_bookmark(&bookmark).map_err(AppError::Domain)?;
                self.bookmark_repo.insert(&bookmark)?;
            }
        }

        if page_index.is_none() {
            self.chapter_repo
                .update(&ChapterUpdate::bookmark_update(chapter_id, true))?;
        }

        Ok(())
    }

    fn try_set_all(&self, bookmarks: &[Bookmark]) -> AppResult<()> {
        if bookmarks.is_empty() {
            return Ok(());
        }

        for bookmark in bookmarks {
            validate_bookmark(bookmark).map_err(AppError::Domain)?;
        }

        self.bookmark_repo.set_all(bookmarks)?;

        let flagged: BTreeSet<i64> = bookmarks
            .iter()
            .filter(|b| b.is_chapter_level())
            .map(|b| b.chapter_id)
            .collect();
        if !flagged.is_empty() {
            let updates: Vec<ChapterUpdate> = flagged
                .into_iter()
                .map(|id| ChapterUpdate::bookmark_update(id, true))
                .collect();
            self.chapter_repo.update_all(&updates)?;
        }

        Ok(())
    }
}

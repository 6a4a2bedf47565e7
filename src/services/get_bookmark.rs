// src/services/get_bookmark.rs
use crate::domain::{Bookmark, BookmarkWithChapterInfo};
use crate::error::AppResult;
use crate::repositories::BookmarkRepository;
use std::sync::Arc;

/// Single-bookmark lookups
pub struct GetBookmark {
    bookmark_repo: Arc<dyn BookmarkRepository>,
}

impl GetBookmark {
    pub fn new(bookmark_repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmark_repo }
    }

    pub fn get(
        &self,
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
    ) -> AppResult<Option<Bookmark>> {
        self.bookmark_repo
            .get_by_key(manga_id, chapter_id, page_index)
            .inspect_err(|e| log::error!("Failed to load bookmark: {}", e))
    }

    pub fn get_by_id(&self, bookmark_id: i64) -> AppResult<Option<Bookmark>> {
        self.bookmark_repo
            .get(bookmark_id)
            .inspect_err(|e| log::error!("Failed to load bookmark {}: {}", bookmark_id, e))
    }
}

/// Per-manga bookmark lists
pub struct GetBookmarks {
    bookmark_repo: Arc<dyn BookmarkRepository>,
}

impl GetBookmarks {
    pub fn new(bookmark_repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmark_repo }
    }

    pub fn get_all(&self, manga_id: i64) -> AppResult<Vec<Bookmark>> {
        self.bookmark_repo
            .get_all_by_manga_id(manga_id)
            .inspect_err(|e| log::error!("Failed to load bookmarks of manga {}: {}", manga_id, e))
    }

    /// Bookmarks keyed by chapter URL, for backup export
    pub fn get_with_chapter_info(&self, manga_id: i64) -> AppResult<Vec<BookmarkWithChapterInfo>> {
        self.bookmark_repo
            .get_with_chapter_info_by_manga_id(manga_id)
            .inspect_err(|e| log::error!("Failed to load bookmarks of manga {}: {}", manga_id, e))
    }
}

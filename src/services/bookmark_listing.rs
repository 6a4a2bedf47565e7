// src/services/bookmark_listing.rs
//
// Aggregate reads behind the bookmark screens.

use crate::domain::{BookmarkedPage, MangaWithBookmarks};
use crate::error::AppResult;
use crate::repositories::BookmarkRepository;
use std::sync::Arc;

/// One row per manga that has bookmarks, newest activity first
pub struct GetBookmarkedMangas {
    bookmark_repo: Arc<dyn BookmarkRepository>,
}

impl GetBookmarkedMangas {
    pub fn new(bookmark_repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmark_repo }
    }

    pub fn get(&self) -> AppResult<Vec<MangaWithBookmarks>> {
        self.bookmark_repo
            .get_manga_with_bookmarks()
            .inspect_err(|e| log::error!("Failed to load bookmarked mangas: {}", e))
    }
}

/// Bookmarks of one manga joined with chapter and manga data
///
/// Rows come back in store order; callers sort for display.
pub struct GetBookmarkedPages {
    bookmark_repo: Arc<dyn BookmarkRepository>,
}

impl GetBookmarkedPages {
    pub fn new(bookmark_repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmark_repo }
    }

    pub fn get(&self, manga_id: i64) -> AppResult<Vec<BookmarkedPage>> {
        self.bookmark_repo
            .get_bookmarked_pages_by_manga_id(manga_id)
            .inspect_err(|e| {
                log::error!("Failed to load bookmarked pages of manga {}: {}", manga_id, e)
            })
    }
}

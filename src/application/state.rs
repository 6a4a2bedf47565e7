// src/application/state.rs

use std::sync::Arc;

use crate::application::bookmarks_details::BookmarksDetailsScreenModel;
use crate::application::bookmarks_top::BookmarksTopScreenModel;
use crate::backup::BookmarkBackup;
use crate::db::ConnectionPool;
use crate::repositories::{
    BookmarkRepository, ChapterRepository, SqliteBookmarkRepository, SqliteChapterRepository,
};
use crate::services::{
    DeleteBookmark, GetBookmark, GetBookmarkedMangas, GetBookmarkedPages, GetBookmarks,
    SetBookmark,
};

/// Everything the bookmark feature needs, wired once at startup.
/// All fields are Arc-wrapped so screen models can share them.
pub struct AppState {
    pub get_bookmark: Arc<GetBookmark>,
    pub get_bookmarks: Arc<GetBookmarks>,
    pub get_bookmarked_mangas: Arc<GetBookmarkedMangas>,
    pub get_bookmarked_pages: Arc<GetBookmarkedPages>,
    pub set_bookmark: Arc<SetBookmark>,
    pub delete_bookmark: Arc<DeleteBookmark>,
    pub bookmark_backup: Arc<BookmarkBackup>,
}

impl AppState {
    /// Wires the SQLite repositories over `pool`
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let bookmark_repo: Arc<dyn BookmarkRepository> =
            Arc::new(SqliteBookmarkRepository::new(pool.clone()));
        let chapter_repo: Arc<dyn ChapterRepository> =
            Arc::new(SqliteChapterRepository::new(pool));

        Self::with_repositories(bookmark_repo, chapter_repo)
    }

    pub fn with_repositories(
        bookmark_repo: Arc<dyn BookmarkRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
    ) -> Self {
        let get_bookmarks = Arc::new(GetBookmarks::new(bookmark_repo.clone()));
        let set_bookmark = Arc::new(SetBookmark::new(bookmark_repo.clone(), chapter_repo.clone()));
        let delete_bookmark = Arc::new(DeleteBookmark::new(
            bookmark_repo.clone(),
            chapter_repo.clone(),
        ));

        Self {
            get_bookmark: Arc::new(GetBookmark::new(bookmark_repo.clone())),
            get_bookmarked_mangas: Arc::new(GetBookmarkedMangas::new(bookmark_repo.clone())),
            get_bookmarked_pages: Arc::new(GetBookmarkedPages::new(bookmark_repo)),
            bookmark_backup: Arc::new(BookmarkBackup::new(
                get_bookmarks.clone(),
                set_bookmark.clone(),
                chapter_repo,
            )),
            get_bookmarks,
            set_bookmark,
            delete_bookmark,
        }
    }

    pub fn bookmarks_top_model(&self) -> BookmarksTopScreenModel {
        BookmarksTopScreenModel::new(
            self.get_bookmarked_mangas.clone(),
            self.get_bookmarked_pages.clone(),
            self.set_bookmark.clone(),
            self.delete_bookmark.clone(),
        )
    }

    pub fn bookmarks_details_model(&self, manga_id: i64) -> BookmarksDetailsScreenModel {
        BookmarksDetailsScreenModel::new(manga_id, self.get_bookmarked_pages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::{insert_chapter, insert_manga, setup_pool};

    #[tokio::test]
    async fn test_models_share_the_store() {
        let pool = setup_pool();
        let manga_id = insert_manga(&pool, "Akira");
        let chapter_id = insert_chapter(&pool, manga_id, "/a/1", "Chapter 1", 1.0);
        let state = AppState::new(pool);

        assert!(state.set_bookmark.set(manga_id, chapter_id, Some(2), None, None).is_success());

        let top = state.bookmarks_top_model();
        top.load().await;
        assert_eq!(top.state().manga_with_bookmarks.len(), 1);

        let details = state.bookmarks_details_model(manga_id);
        details.load().await;
        assert!(matches!(
            details.state(),
            crate::application::BookmarksDetailsState::Success { .. }
        ));
    }
}

// src/application/bookmarks_top.rs
//
// View-state model behind the bookmarks tab: the per-manga list at the top
// level, and one manga's bookmarked pages after a selection.

use std::sync::Arc;
use std::time::Duration;

use log::error;

use crate::application::background::{run_blocking, run_operation};
use crate::application::state_store::StateStore;
use crate::domain::{sort_for_listing, BookmarkedPage, MangaWithBookmarks};
use crate::services::{
    DeleteBookmark, GetBookmarkedMangas, GetBookmarkedPages, OperationResult, SetBookmark,
};

pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarksTopState {
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub manga_with_bookmarks: Vec<MangaWithBookmarks>,
    /// Pages of the selected manga, in listing order
    pub groups_of_bookmarks: Vec<BookmarkedPage>,
    /// `None` at the top level
    pub selected_manga_id: Option<i64>,
}

impl Default for BookmarksTopState {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_refreshing: false,
            manga_with_bookmarks: Vec::new(),
            groups_of_bookmarks: Vec::new(),
            selected_manga_id: None,
        }
    }
}

impl BookmarksTopState {
    /// Emptiness of whichever level is showing
    pub fn is_empty(&self) -> bool {
        match self.selected_manga_id {
            Some(_) => self.groups_of_bookmarks.is_empty(),
            None => self.manga_with_bookmarks.is_empty(),
        }
    }

    fn loaded(&self) -> Self {
        Self {
            is_loading: false,
            is_refreshing: false,
            ..self.clone()
        }
    }
}

pub struct BookmarksTopScreenModel {
    store: StateStore<BookmarksTopState>,
    get_bookmarked_mangas: Arc<GetBookmarkedMangas>,
    get_bookmarked_pages: Arc<GetBookmarkedPages>,
    set_bookmark: Arc<SetBookmark>,
    delete_bookmark: Arc<DeleteBookmark>,
    refresh_delay: Duration,
}

impl BookmarksTopScreenModel {
    pub fn new(
        get_bookmarked_mangas: Arc<GetBookmarkedMangas>,
        get_bookmarked_pages: Arc<GetBookmarkedPages>,
        set_bookmark: Arc<SetBookmark>,
        delete_bookmark: Arc<DeleteBookmark>,
    ) -> Self {
        Self {
            store: StateStore::new(BookmarksTopState::default()),
            get_bookmarked_mangas,
            get_bookmarked_pages,
            set_bookmark,
            delete_bookmark,
            refresh_delay: DEFAULT_REFRESH_DELAY,
        }
    }

    pub fn with_refresh_delay(mut self, refresh_delay: Duration) -> Self {
        self.refresh_delay = refresh_delay;
        self
    }

    pub fn state(&self) -> BookmarksTopState {
        self.store.get()
    }

    pub fn store(&self) -> &StateStore<BookmarksTopState> {
        &self.store
    }

    /// Initial fetch of the top-level list
    pub async fn load(&self) {
        self.load_manga_with_bookmarks().await;
    }

    /// Shows the refresh indicator for a moment, then re-fetches the current level
    pub async fn refresh(&self) {
        self.store.update(|s| BookmarksTopState {
            is_refreshing: true,
            ..s.clone()
        });
        tokio::time::sleep(self.refresh_delay).await;

        match self.store.get().selected_manga_id {
            Some(manga_id) => self.load_grouped_bookmarks(manga_id).await,
            None => self.load_manga_with_bookmarks().await,
        }
    }

    pub async fn on_manga_selected(&self, manga_id: i64) {
        self.load_grouped_bookmarks(manga_id).await;
    }

    /// Leaves the drill-down; returns false when already at the top level
    pub fn on_navigation_up(&self) -> bool {
        if self.store.get().selected_manga_id.is_none() {
            return false;
        }

        self.store.update(|s| BookmarksTopState {
            selected_manga_id: None,
            ..s.clone()
        });
        true
    }

    /// Deletes every bookmark of the selected manga and returns to the top level
    pub async fn delete(&self) -> OperationResult {
        let Some(manga_id) = self.store.get().selected_manga_id else {
            return OperationResult::Success;
        };

        let delete_bookmark = self.delete_bookmark.clone();
        let result =
            run_operation(move || delete_bookmark.delete_all_by_manga_id(manga_id, true)).await;

        self.load_manga_with_bookmarks().await;
        result
    }

    pub async fn edit_note(&self, bookmark_id: i64, note: Option<String>) -> OperationResult {
        let set_bookmark = self.set_bookmark.clone();
        let result = run_operation(move || set_bookmark.update_note(bookmark_id, note)).await;

        self.reload_selected().await;
        result
    }

    pub async fn delete_page(&self, bookmark_id: i64) -> OperationResult {
        let delete_bookmark = self.delete_bookmark.clone();
        let result = run_operation(move || delete_bookmark.delete_by_id(bookmark_id)).await;

        self.reload_selected().await;
        result
    }

    async fn reload_selected(&self) {
        if let Some(manga_id) = self.store.get().selected_manga_id {
            self.load_grouped_bookmarks(manga_id).await;
        }
    }

    async fn load_manga_with_bookmarks(&self) {
        let get_bookmarked_mangas = self.get_bookmarked_mangas.clone();

        match run_blocking(move || get_bookmarked_mangas.get()).await {
            Ok(manga_with_bookmarks) => self.store.set(BookmarksTopState {
                is_loading: false,
                is_refreshing: false,
                manga_with_bookmarks,
                groups_of_bookmarks: Vec::new(),
                selected_manga_id: None,
            }),
            Err(e) => {
                error!("Failed to load bookmarked mangas: {}", e);
                self.store.update(BookmarksTopState::loaded);
            }
        }
    }

    async fn load_grouped_bookmarks(&self, manga_id: i64) {
        let get_bookmarked_pages = self.get_bookmarked_pages.clone();

        match run_blocking(move || get_bookmarked_pages.get(manga_id)).await {
            Ok(mut pages) => {
                sort_for_listing(&mut pages);
                self.store.update(|s| BookmarksTopState {
                    is_loading: false,
                    is_refreshing: false,
                    groups_of_bookmarks: pages,
                    selected_manga_id: Some(manga_id),
                    ..s.clone()
                });
            }
            Err(e) => {
                error!("Failed to load bookmarks of manga {}: {}", manga_id, e);
                self.store.update(BookmarksTopState::loaded);
            }
        }
    }
}

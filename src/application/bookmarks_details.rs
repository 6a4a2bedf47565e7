// src/application/bookmarks_details.rs
use std::sync::Arc;

use log::error;

use crate::application::background::run_blocking;
use crate::application::state_store::StateStore;
use crate::domain::{group_by_manga, BookmarkedPage};
use crate::services::GetBookmarkedPages;

#[derive(Debug, Clone, PartialEq)]
pub enum BookmarksDetailsState {
    Loading,
    Empty,
    /// One group per manga, each in listing order
    Success {
        groups_of_bookmarks: Vec<Vec<BookmarkedPage>>,
    },
}

/// Bookmarked pages of a single manga
pub struct BookmarksDetailsScreenModel {
    manga_id: i64,
    store: StateStore<BookmarksDetailsState>,
    get_bookmarked_pages: Arc<GetBookmarkedPages>,
}

impl BookmarksDetailsScreenModel {
    pub fn new(manga_id: i64, get_bookmarked_pages: Arc<GetBookmarkedPages>) -> Self {
        Self {
            manga_id,
            store: StateStore::new(BookmarksDetailsState::Loading),
            get_bookmarked_pages,
        }
    }

    pub fn manga_id(&self) -> i64 {
        self.manga_id
    }

    pub fn state(&self) -> BookmarksDetailsState {
        self.store.get()
    }

    pub fn store(&self) -> &StateStore<BookmarksDetailsState> {
        &self.store
    }

    pub async fn load(&self) {
        let get_bookmarked_pages = self.get_bookmarked_pages.clone();
        let manga_id = self.manga_id;

        let next = match run_blocking(move || get_bookmarked_pages.get(manga_id)).await {
            Ok(pages) if pages.is_empty() => BookmarksDetailsState::Empty,
            Ok(pages) => BookmarksDetailsState::Success {
                groups_of_bookmarks: group_by_manga(pages),
            },
            Err(e) => {
                error!("Failed to load bookmark details for manga {}: {}", manga_id, e);
                BookmarksDetailsState::Empty
            }
        };
        self.store.set(next);
    }
}

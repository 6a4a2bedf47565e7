// src/presentation/bookmarks_details_screen.rs
use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use crate::application::{BookmarksDetailsScreenModel, BookmarksDetailsState, Navigator};
use crate::presentation::display::DisplayPreferences;
use crate::presentation::list_items::{grouped_page_items, BookmarkListItem, PageRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsScreenContent {
    Loading,
    Empty,
    Pages(Vec<BookmarkListItem>),
}

/// Every bookmark of one manga, grouped under a manga header
pub struct BookmarksDetailsScreen {
    model: Arc<BookmarksDetailsScreenModel>,
    navigator: Arc<dyn Navigator>,
    preferences: DisplayPreferences,
}

impl BookmarksDetailsScreen {
    pub fn new(
        model: Arc<BookmarksDetailsScreenModel>,
        navigator: Arc<dyn Navigator>,
        preferences: DisplayPreferences,
    ) -> Self {
        Self {
            model,
            navigator,
            preferences,
        }
    }

    pub fn title(&self) -> &'static str {
        "Found bookmarks"
    }

    pub fn content(&self) -> DetailsScreenContent {
        self.content_in(&Local::now())
    }

    pub fn content_in<Tz>(&self, now: &DateTime<Tz>) -> DetailsScreenContent
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self.model.state() {
            BookmarksDetailsState::Loading => DetailsScreenContent::Loading,
            BookmarksDetailsState::Empty => DetailsScreenContent::Empty,
            BookmarksDetailsState::Success { groups_of_bookmarks } => DetailsScreenContent::Pages(
                grouped_page_items(&groups_of_bookmarks, &self.preferences, now),
            ),
        }
    }

    pub fn open_bookmark(&self, row: &PageRow) {
        self.navigator
            .open_reader(row.manga_id, row.chapter_id, row.page_index);
    }

    pub fn navigate_up(&self) {
        self.navigator.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{AppState, Screen};
    use crate::db::fixtures::{insert_chapter, insert_manga, setup_pool};
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    mock! {
        pub Nav {}

        impl Navigator for Nav {
            fn open_reader(&self, manga_id: i64, chapter_id: i64, page_index: Option<i32>);
            fn push(&self, screen: Screen);
            fn pop(&self);
        }
    }

    #[tokio::test]
    async fn test_clicking_a_page_opens_the_reader() {
        let pool = setup_pool();
        let manga_id = insert_manga(&pool, "Houseki no Kuni");
        let chapter_id = insert_chapter(&pool, manga_id, "/h/1", "Chapter 1", 1.0);
        let state = AppState::new(pool);
        state.set_bookmark.set(manga_id, chapter_id, Some(7), None, None);

        let mut navigator = MockNav::new();
        navigator
            .expect_open_reader()
            .with(eq(manga_id), eq(chapter_id), eq(Some(7)))
            .times(1)
            .return_const(());
        navigator.expect_pop().times(1).return_const(());

        let model = Arc::new(state.bookmarks_details_model(manga_id));
        let screen = BookmarksDetailsScreen::new(
            model.clone(),
            Arc::new(navigator),
            DisplayPreferences::default(),
        );
        assert_eq!(screen.content_in(&Utc::now()), DetailsScreenContent::Loading);

        model.load().await;
        let DetailsScreenContent::Pages(items) = screen.content_in(&Utc::now()) else {
            panic!("expected pages");
        };
        assert!(matches!(items[0], BookmarkListItem::MangaHeader { .. }));
        let row = items
            .iter()
            .find_map(|item| match item {
                BookmarkListItem::Page(row) => Some(row.clone()),
                _ => None,
            })
            .unwrap();

        screen.open_bookmark(&row);
        screen.navigate_up();
    }

    #[tokio::test]
    async fn test_empty_manga() {
        let pool = setup_pool();
        let state = AppState::new(pool);
        let model = Arc::new(state.bookmarks_details_model(1));
        let screen = BookmarksDetailsScreen::new(
            model.clone(),
            Arc::new(MockNav::new()),
            DisplayPreferences::default(),
        );

        model.load().await;
        assert_eq!(screen.content_in(&Utc::now()), DetailsScreenContent::Empty);
    }
}

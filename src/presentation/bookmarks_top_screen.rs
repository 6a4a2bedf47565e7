// src/presentation/bookmarks_top_screen.rs
//
// Bookmarks tab: manga list at the top level, pages after a selection.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use crate::application::{BookmarksTopScreenModel, Navigator, Screen};
use crate::presentation::display::DisplayPreferences;
use crate::presentation::edit_bookmark_dialog::DialogAction;
use crate::presentation::list_items::{manga_rows, page_items, BookmarkListItem, MangaRow};
use crate::services::OperationResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopScreenContent {
    Loading,
    Empty,
    Mangas(Vec<MangaRow>),
    Pages(Vec<BookmarkListItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarksTopIntent {
    SelectManga(i64),
    OpenReader {
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
    },
    /// Opens the standalone details screen for a manga
    ShowDetails(i64),
    /// Deletes every bookmark of the selected manga
    DeleteAll,
    DeletePage(i64),
    EditNote {
        bookmark_id: i64,
        note: Option<String>,
    },
    Refresh,
    NavigateUp,
}

pub struct BookmarksTopScreen {
    model: Arc<BookmarksTopScreenModel>,
    navigator: Arc<dyn Navigator>,
    preferences: DisplayPreferences,
}

impl BookmarksTopScreen {
    pub fn new(
        model: Arc<BookmarksTopScreenModel>,
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
        "Bookmarks"
    }

    /// The delete-all action only shows inside a manga
    pub fn shows_delete_all(&self) -> bool {
        self.model.state().selected_manga_id.is_some()
    }

    pub fn is_refreshing(&self) -> bool {
        self.model.state().is_refreshing
    }

    pub fn content(&self) -> TopScreenContent {
        self.content_in(&Local::now())
    }

    pub fn content_in<Tz>(&self, now: &DateTime<Tz>) -> TopScreenContent
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let state = self.model.state();

        if state.is_loading {
            return TopScreenContent::Loading;
        }
        if state.is_empty() {
            return TopScreenContent::Empty;
        }

        match state.selected_manga_id {
            None => TopScreenContent::Mangas(manga_rows(
                &state.manga_with_bookmarks,
                &self.preferences,
                now,
            )),
            Some(_) => TopScreenContent::Pages(page_items(
                &state.groups_of_bookmarks,
                &self.preferences,
                now,
            )),
        }
    }

    pub async fn dispatch(&self, intent: BookmarksTopIntent) -> OperationResult {
        match intent {
            BookmarksTopIntent::SelectManga(manga_id) => {
                self.model.on_manga_selected(manga_id).await;
            }
            BookmarksTopIntent::OpenReader {
                manga_id,
                chapter_id,
                page_index,
            } => self.navigator.open_reader(manga_id, chapter_id, page_index),
            BookmarksTopIntent::ShowDetails(manga_id) => {
                self.navigator.push(Screen::BookmarksDetails { manga_id });
            }
            BookmarksTopIntent::DeleteAll => return self.model.delete().await,
            BookmarksTopIntent::DeletePage(bookmark_id) => {
                return self.model.delete_page(bookmark_id).await;
            }
            BookmarksTopIntent::EditNote { bookmark_id, note } => {
                return self.model.edit_note(bookmark_id, note).await;
            }
            BookmarksTopIntent::Refresh => self.model.refresh().await,
            BookmarksTopIntent::NavigateUp => {
                if !self.model.on_navigation_up() {
                    self.navigator.pop();
                }
            }
        }
        OperationResult::Success
    }

    /// Applies the edit dialog's outcome to a bookmark
    pub async fn apply_dialog(&self, bookmark_id: i64, action: DialogAction) -> OperationResult {
        match action {
            DialogAction::Save(note) => {
                self.dispatch(BookmarksTopIntent::EditNote {
                    bookmark_id,
                    note: Some(note),
                })
                .await
            }
            DialogAction::Delete => {
                self.dispatch(BookmarksTopIntent::DeletePage(bookmark_id))
                    .await
            }
            DialogAction::Dismiss => OperationResult::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppState;
    use crate::db::fixtures::{count_bookmarks, insert_chapter, insert_manga, setup_pool};
    use crate::db::ConnectionPool;
    use chrono::Utc;
    use mockall::{mock, predicate::*};
    use std::time::Duration;

    mock! {
        pub Nav {}

        impl Navigator for Nav {
            fn open_reader(&self, manga_id: i64, chapter_id: i64, page_index: Option<i32>);
            fn push(&self, screen: Screen);
            fn pop(&self);
        }
    }

    struct Harness {
        pool: Arc<ConnectionPool>,
        state: AppState,
        manga_id: i64,
        chapter_id: i64,
    }

    fn harness() -> Harness {
        let pool = setup_pool();
        let manga_id = insert_manga(&pool, "Oyasumi Punpun");
        let chapter_id = insert_chapter(&pool, manga_id, "/p/1", "Chapter 1", 1.0);
        Harness {
            state: AppState::new(pool.clone()),
            pool,
            manga_id,
            chapter_id,
        }
    }

    fn screen(state: &AppState, navigator: MockNav) -> BookmarksTopScreen {
        let model = state
            .bookmarks_top_model()
            .with_refresh_delay(Duration::from_millis(1));
        BookmarksTopScreen::new(
            Arc::new(model),
            Arc::new(navigator),
            DisplayPreferences::default(),
        )
    }

    #[tokio::test]
    async fn test_content_moves_from_loading_to_empty() {
        let h = harness();
        let screen = screen(&h.state, MockNav::new());

        assert_eq!(screen.content_in(&Utc::now()), TopScreenContent::Loading);

        screen.dispatch(BookmarksTopIntent::Refresh).await;
        assert_eq!(screen.content_in(&Utc::now()), TopScreenContent::Empty);
    }

    #[tokio::test]
    async fn test_select_manga_shows_pages() {
        let h = harness();
        h.state
            .set_bookmark
            .set(h.manga_id, h.chapter_id, Some(2), Some("rain".to_string()), None);
        let screen = screen(&h.state, MockNav::new());

        screen.dispatch(BookmarksTopIntent::Refresh).await;
        let TopScreenContent::Mangas(rows) = screen.content_in(&Utc::now()) else {
            panic!("expected manga rows");
        };
        assert_eq!(rows[0].bookmark_count_label, "1 bookmark");
        assert!(!screen.shows_delete_all());

        screen.dispatch(BookmarksTopIntent::SelectManga(h.manga_id)).await;
        let TopScreenContent::Pages(items) = screen.content_in(&Utc::now()) else {
            panic!("expected page rows");
        };
        assert_eq!(items.len(), 2);
        assert!(screen.shows_delete_all());
    }

    #[tokio::test]
    async fn test_navigate_up_pops_only_at_top_level() {
        let h = harness();
        let mut navigator = MockNav::new();
        navigator.expect_pop().times(1).return_const(());
        let screen = screen(&h.state, navigator);

        screen.dispatch(BookmarksTopIntent::SelectManga(h.manga_id)).await;
        screen.dispatch(BookmarksTopIntent::NavigateUp).await;
        screen.dispatch(BookmarksTopIntent::NavigateUp).await;
    }

    #[tokio::test]
    async fn test_open_reader_and_details_go_through_navigator() {
        let h = harness();
        let mut navigator = MockNav::new();
        navigator
            .expect_open_reader()
            .with(eq(h.manga_id), eq(h.chapter_id), eq(Some(4)))
            .times(1)
            .return_const(());
        navigator
            .expect_push()
            .with(eq(Screen::BookmarksDetails { manga_id: h.manga_id }))
            .times(1)
            .return_const(());
        let screen = screen(&h.state, navigator);

        screen
            .dispatch(BookmarksTopIntent::OpenReader {
                manga_id: h.manga_id,
                chapter_id: h.chapter_id,
                page_index: Some(4),
            })
            .await;
        screen.dispatch(BookmarksTopIntent::ShowDetails(h.manga_id)).await;
    }

    #[tokio::test]
    async fn test_dialog_actions() {
        let h = harness();
        h.state.set_bookmark.set(h.manga_id, h.chapter_id, Some(0), None, None);
        let bookmark = h
            .state
            .get_bookmark
            .get(h.manga_id, h.chapter_id, Some(0))
            .unwrap()
            .unwrap();
        let screen = screen(&h.state, MockNav::new());
        screen.dispatch(BookmarksTopIntent::SelectManga(h.manga_id)).await;

        let saved = screen
            .apply_dialog(bookmark.id, DialogAction::Save("first panel".to_string()))
            .await;
        assert!(saved.is_success());
        let stored = h.state.get_bookmark.get_by_id(bookmark.id).unwrap().unwrap();
        assert_eq!(stored.note.as_deref(), Some("first panel"));

        assert!(screen.apply_dialog(bookmark.id, DialogAction::Dismiss).await.is_success());
        assert_eq!(count_bookmarks(&h.pool), 1);

        assert!(screen.apply_dialog(bookmark.id, DialogAction::Delete).await.is_success());
        assert_eq!(count_bookmarks(&h.pool), 0);
        assert_eq!(screen.content_in(&Utc::now()), TopScreenContent::Empty);
    }

    #[tokio::test]
    async fn test_delete_all_returns_to_manga_list() {
        let h = harness();
        let other = insert_manga(&h.pool, "Goodnight");
        let other_chapter = insert_chapter(&h.pool, other, "/g/1", "Chapter 1", 1.0);
        h.state.set_bookmark.set(h.manga_id, h.chapter_id, None, None, None);
        h.state.set_bookmark.set(other, other_chapter, Some(1), None, None);
        let screen = screen(&h.state, MockNav::new());

        screen.dispatch(BookmarksTopIntent::SelectManga(h.manga_id)).await;
        assert!(screen.dispatch(BookmarksTopIntent::DeleteAll).await.is_success());

        let TopScreenContent::Mangas(rows) = screen.content_in(&Utc::now()) else {
            panic!("expected manga rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].manga_id, other);
    }
}

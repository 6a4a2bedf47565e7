// src/presentation/mod.rs
//
// Presentation Layer
//
// ARCHITECTURE:
// - Screens turn view-state snapshots into renderer-agnostic content
// - User intents go to the view-state model; navigation goes to the Navigator
// - No persistence access from here

pub mod bookmarks_details_screen;
pub mod bookmarks_top_screen;
pub mod display;
pub mod edit_bookmark_dialog;
pub mod list_items;

pub use bookmarks_details_screen::{BookmarksDetailsScreen, DetailsScreenContent};
pub use bookmarks_top_screen::{BookmarksTopIntent, BookmarksTopScreen, TopScreenContent};
pub use display::{DisplayPreferences, DEFAULT_DATE_FORMAT};
pub use edit_bookmark_dialog::{DialogAction, EditBookmarkDialog};
pub use list_items::{BookmarkListItem, MangaRow, PageRow};

pub mod entity;
pub mod invariants;
pub mod ordering;
pub mod reconcile;

pub use entity::{
    Bookmark, BookmarkDelete, BookmarkKey, BookmarkUpdate, BookmarkWithChapterInfo,
    BookmarkedPage, MangaWithBookmarks, UNSAVED_ID,
};
pub use invariants::validate_bookmark;
pub use ordering::{compare_bookmarked_pages, group_by_manga, natural_cmp, sort_for_listing};
pub use reconcile::{reconcile, BookmarkReconciliation};

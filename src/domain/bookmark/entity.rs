use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::MangaCover;

/// Id carried by a bookmark that has not been persisted yet
pub const UNSAVED_ID: i64 = -1;

/// A saved pointer to a page, or a whole chapter, of a manga
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub manga_id: i64,
    pub chapter_id: i64,

    /// `None` marks a chapter-level bookmark
    pub page_index: Option<i32>,

    pub note: Option<String>,

    /// Milliseconds since the epoch (the store keeps seconds)
    pub last_modified_at: i64,
}

/// Identity of a bookmark from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkKey {
    pub manga_id: i64,
    pub chapter_id: i64,
    pub page_index: Option<i32>,
}

impl Bookmark {
    /// Unsaved page bookmark stamped with the current time
    pub fn new(
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            manga_id,
            chapter_id,
            page_index,
            note,
            last_modified_at: Utc::now().timestamp_millis(),
        }
    }

    /// Unsaved bookmark covering a whole chapter
    pub fn chapter_level(manga_id: i64, chapter_id: i64) -> Self {
        Self::new(manga_id, chapter_id, None, None)
    }

    pub fn with_last_modified_at(mut self, last_modified_at: i64) -> Self {
        self.last_modified_at = last_modified_at;
        self
    }

    pub fn key(&self) -> BookmarkKey {
        BookmarkKey {
            manga_id: self.manga_id,
            chapter_id: self.chapter_id,
            page_index: self.page_index,
        }
    }

    pub fn is_chapter_level(&self) -> bool {
        self.page_index.is_none()
    }

    /// True when the note has any non-whitespace content
    pub fn has_note(&self) -> bool {
        is_non_blank(self.note.as_deref())
    }
}

pub(crate) fn is_non_blank(note: Option<&str>) -> bool {
    note.is_some_and(|n| !n.trim().is_empty())
}

/// Deletion key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookmarkDelete {
    pub manga_id: i64,
    pub chapter_id: i64,
    pub page_index: Option<i32>,
}

impl BookmarkDelete {
    pub fn new(manga_id: i64, chapter_id: i64, page_index: Option<i32>) -> Self {
        Self {
            manga_id,
            chapter_id,
            page_index,
        }
    }

    pub fn chapter_level(manga_id: i64, chapter_id: i64) -> Self {
        Self::new(manga_id, chapter_id, None)
    }

    pub fn is_chapter_level(&self) -> bool {
        self.page_index.is_none()
    }
}

impl From<&Bookmark> for BookmarkDelete {
    fn from(bookmark: &Bookmark) -> Self {
        Self::new(bookmark.manga_id, bookmark.chapter_id, bookmark.page_index)
    }
}

/// Partial update; the note is the only mutable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkUpdate {
    pub id: i64,
    pub note: Option<String>,
}

/// Bookmark joined with its manga and chapter, for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkedPage {
    pub bookmark_id: i64,
    pub manga_id: i64,
    pub chapter_id: i64,
    pub page_index: Option<i32>,
    pub manga_title: String,
    pub chapter_number: f64,
    pub chapter_name: String,
    pub note: Option<String>,
    pub last_modified_at: i64,
    pub cover: MangaCover,
}

/// Per-manga aggregate for the top-level bookmarks list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaWithBookmarks {
    pub manga_id: i64,
    pub manga_title: String,
    pub number_of_bookmarks: i64,
    /// Most recent bookmark modification, milliseconds
    pub bookmark_last_modified: i64,
    pub cover: MangaCover,
}

/// Bookmark keyed by chapter URL instead of chapter id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkWithChapterInfo {
    pub chapter_url: String,
    pub chapter_number: f64,
    pub page_index: Option<i32>,
    pub note: Option<String>,
    pub last_modified_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bookmark_is_unsaved() {
        let bookmark = Bookmark::new(1, 10, Some(5), None);
        assert_eq!(bookmark.id, UNSAVED_ID);
        assert!(bookmark.last_modified_at > 0);
        assert!(!bookmark.is_chapter_level());
    }

    #[test]
    fn test_blank_notes_do_not_count() {
        let mut bookmark = Bookmark::chapter_level(1, 10);
        assert!(!bookmark.has_note());

        bookmark.note = Some("   \n".to_string());
        assert!(!bookmark.has_note());

        bookmark.note = Some("cliffhanger".to_string());
        assert!(bookmark.has_note());
    }

    #[test]
    fn test_delete_key_from_bookmark() {
        let bookmark = Bookmark::chapter_level(3, 30);
        let delete = BookmarkDelete::from(&bookmark);
        assert_eq!(delete, BookmarkDelete::chapter_level(3, 30));
        assert!(delete.is_chapter_level());
    }
}

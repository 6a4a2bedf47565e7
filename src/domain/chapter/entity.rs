use serde::{Deserialize, Serialize};

/// The slice of a chapter the bookmark feature reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: i64,
    pub manga_id: i64,
    /// Stable source key; survives renumbering
    pub url: String,
    pub name: String,
    pub chapter_number: f64,
    /// Denormalized: true while a chapter-level bookmark exists
    pub bookmark: bool,
}

/// Partial chapter update
///
/// The bookmark flag is only reachable through [`ChapterUpdate::bookmark_update`],
/// which the set/delete bookmark use-cases call to keep the flag and the
/// bookmarks table consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterUpdate {
    pub id: i64,
    bookmark: Option<bool>,
}

impl ChapterUpdate {
    pub fn bookmark_update(id: i64, bookmark: bool) -> Self {
        Self {
            id,
            bookmark: Some(bookmark),
        }
    }

    pub fn bookmark(&self) -> Option<bool> {
        self.bookmark
    }
}

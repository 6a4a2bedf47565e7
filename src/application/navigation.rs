// src/application/navigation.rs
//
// Navigation seam. The host application owns the real navigation stack and
// the reader; bookmark screens only talk to this trait.

/// Destinations the bookmark screens can push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    BookmarksTop,
    BookmarksDetails { manga_id: i64 },
}

pub trait Navigator: Send + Sync {
    /// Opens the reader at a chapter, on `page_index` when given
    fn open_reader(&self, manga_id: i64, chapter_id: i64, page_index: Option<i32>);

    fn push(&self, screen: Screen);

    fn pop(&self);
}

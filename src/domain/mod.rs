// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod bookmark;
pub mod chapter;
pub mod manga;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Bookmark Domain
pub use bookmark::{
    compare_bookmarked_pages, group_by_manga, natural_cmp, reconcile, sort_for_listing,
    validate_bookmark, Bookmark, BookmarkDelete, BookmarkKey, BookmarkReconciliation,
    BookmarkUpdate, BookmarkWithChapterInfo, BookmarkedPage, MangaWithBookmarks, UNSAVED_ID,
};

// Chapter Domain (collaborator view)
pub use chapter::{Chapter, ChapterUpdate};

// Manga Domain (display data only)
pub use manga::MangaCover;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Page index {0} is negative")]
    NegativePageIndex(i32),

    #[error("Timestamp {0} is before the epoch")]
    NegativeTimestamp(i64),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

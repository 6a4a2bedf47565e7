// src/lib.rs
// Mangashelf - Page and chapter bookmarks for a local-first manga library
//
// Architecture:
// - Domain-centric: bookmark rules (merge, ordering, invariants) live in the domain
// - Explicit: use-cases are built from repository trait objects, no service locator
// - Layered: presentation -> application -> services -> repositories -> SQLite
// - Local-first: the library database is the only source of truth

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION & PRESENTATION
// ============================================================================

pub mod application;
pub mod backup;
pub mod presentation;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_bookmark,
    // Bookmark
    Bookmark,
    BookmarkDelete,
    BookmarkUpdate,
    BookmarkWithChapterInfo,
    BookmarkedPage,
    // Chapter
    Chapter,
    ChapterUpdate,
    // Manga
    MangaCover,
    MangaWithBookmarks,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    BookmarkRepository, ChapterRepository, SqliteBookmarkRepository, SqliteChapterRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    DeleteBookmark, GetBookmark, GetBookmarkedMangas, GetBookmarkedPages, GetBookmarks,
    OperationResult, SetBookmark,
};

// ============================================================================
// PUBLIC API - Application & Presentation
// ============================================================================

pub use application::{AppState, Navigator, Screen, StateStore};
pub use backup::{BackupBookmark, BookmarkBackup};
pub use presentation::{BookmarksDetailsScreen, BookmarksTopScreen, DisplayPreferences};

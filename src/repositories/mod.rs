// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are data mappers
// - Merge decisions come from the domain (`domain::reconcile`)
// - NO cross-repository calls
// - Explicit SQL only
// - Seconds in the store, milliseconds in memory

pub mod bookmark_repository;
pub mod chapter_repository;

pub use bookmark_repository::{BookmarkRepository, SqliteBookmarkRepository};
pub use chapter_repository::{ChapterRepository, SqliteChapterRepository};

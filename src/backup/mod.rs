// src/backup/mod.rs
//
// Backup Module - per-manga bookmark export and restore
//
// RULES:
// - Chapters are referenced by URL, never by row id
// - Backup timestamps are whole seconds
// - Restore goes through SetBookmark, so merge rules and chapter flags apply

pub mod bookmark_backup;
pub mod models;

pub use bookmark_backup::{BookmarkBackup, RestoreReport};
pub use models::{from_json, read_backup_file, to_json, BackupBookmark};

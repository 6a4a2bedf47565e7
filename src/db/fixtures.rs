// src/db/fixtures.rs
//
// Test-only helpers for seeding manga and chapter rows.

use std::sync::Arc;

use rusqlite::params;

use crate::db::{create_memory_pool, initialize_database, ConnectionPool};

/// Fresh in-memory database with the schema applied
pub(crate) fn setup_pool() -> Arc<ConnectionPool> {
    let pool = create_memory_pool().unwrap();
    {
        let conn = pool.get().unwrap();
        initialize_database(&conn).unwrap();
    }
    Arc::new(pool)
}

pub(crate) fn insert_manga(pool: &ConnectionPool, title: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO mangas (source, url, title, thumbnail_url, favorite, cover_last_modified)
         VALUES (1, ?1, ?2, ?3, 1, 0)",
        params![
            format!("/manga/{}", title.to_lowercase().replace(' ', "-")),
            title,
            format!("https://covers.example/{}.jpg", title.len()),
        ],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn insert_chapter(
    pool: &ConnectionPool,
    manga_id: i64,
    url: &str,
    name: &str,
    chapter_number: f64,
) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO chapters (manga_id, url, name, chapter_number, bookmark)
         VALUES (?1, ?2, ?3, ?4, 0)",
        params![manga_id, url, name, chapter_number],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn chapter_bookmark_flag(pool: &ConnectionPool, chapter_id: i64) -> bool {
    let conn = pool.get().unwrap();
    conn.query_row(
        "SELECT bookmark FROM chapters WHERE id = ?1",
        params![chapter_id],
        |row| row.get(0),
    )
    .unwrap()
}

pub(crate) fn count_bookmarks(pool: &ConnectionPool) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))
        .unwrap()
}

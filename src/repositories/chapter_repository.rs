// src/repositories/chapter_repository.rs

use std::sync::Arc;

use rusqlite::{params, Connection, Row};

use crate::db::ConnectionPool;
use crate::domain::{Chapter, ChapterUpdate};
use crate::error::{AppError, AppResult};

/// Chapter rows as seen by the bookmark feature
///
/// Only the bookmark flag is writable from here.
pub trait ChapterRepository: Send + Sync {
    fn get_by_id(&self, id: i64) -> AppResult<Option<Chapter>>;

    /// Chapter URLs are unique within a manga
    fn get_by_url(&self, manga_id: i64, url: &str) -> AppResult<Option<Chapter>>;

    fn get_bookmarked_chapters_by_manga_id(&self, manga_id: i64) -> AppResult<Vec<Chapter>>;

    fn update(&self, update: &ChapterUpdate) -> AppResult<()>;

    fn update_all(&self, updates: &[ChapterUpdate]) -> AppResult<()>;
}

pub struct SqliteChapterRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteChapterRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_chapter(row: &Row) -> rusqlite::Result<Chapter> {
        Ok(Chapter {
            id: row.get("id")?,
            manga_id: row.get("manga_id")?,
            url: row.get("url")?,
            name: row.get("name")?,
            chapter_number: row.get("chapter_number")?,
            bookmark: row.get("bookmark")?,
        })
    }

    fn update_on(conn: &Connection, update: &ChapterUpdate) -> AppResult<()> {
        let Some(bookmark) = update.bookmark() else {
            return Ok(());
        };

        let rows_affected = conn.execute(
            "UPDATE chapters SET bookmark = ?1 WHERE id = ?2",
            params![bookmark, update.id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

impl ChapterRepository for SqliteChapterRepository {
    fn get_by_id(&self, id: i64) -> AppResult<Option<Chapter>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, manga_id, url, name, chapter_number, bookmark
             FROM chapters WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_chapter) {
            Ok(chapter) => Ok(Some(chapter)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_url(&self, manga_id: i64, url: &str) -> AppResult<Option<Chapter>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, manga_id, url, name, chapter_number, bookmark
             FROM chapters
             WHERE manga_id = ?1 AND url = ?2
             LIMIT 1",
        )?;

        match stmt.query_row(params![manga_id, url], Self::row_to_chapter) {
            Ok(chapter) => Ok(Some(chapter)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_bookmarked_chapters_by_manga_id(&self, manga_id: i64) -> AppResult<Vec<Chapter>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, manga_id, url, name, chapter_number, bookmark
             FROM chapters
             WHERE manga_id = ?1 AND bookmark = 1
             ORDER BY chapter_number",
        )?;

        let chapters = stmt
            .query_map(params![manga_id], Self::row_to_chapter)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(chapters)
    }

    fn update(&self, update: &ChapterUpdate) -> AppResult<()> {
        let conn = self.pool.get()?;
        Self::update_on(&conn, update)
    }

    fn update_all(&self, updates: &[ChapterUpdate]) -> AppResult<()> {
        if updates.is_empty() {
            return Ok(());
        }

        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        for update in updates {
            Self::update_on(&tx, update)?;
        }

        tx.commit()?;
        Ok(())
    }
}

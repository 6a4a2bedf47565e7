// src/repositories/bookmark_repository.rs
//
// Bookmark persistence

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, Connection, Row};

use crate::db::ConnectionPool;
use crate::domain::{
    reconcile, Bookmark, BookmarkDelete, BookmarkReconciliation, BookmarkUpdate,
    BookmarkWithChapterInfo, BookmarkedPage, MangaCover, MangaWithBookmarks,
};
use crate::error::{AppError, AppResult};

const MILLIS_PER_SECOND: i64 = 1000;

pub trait BookmarkRepository: Send + Sync {
    fn get(&self, id: i64) -> AppResult<Option<Bookmark>>;

    fn get_by_key(
        &self,
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
    ) -> AppResult<Option<Bookmark>>;

    fn get_all_by_manga_id(&self, manga_id: i64) -> AppResult<Vec<Bookmark>>;

    fn get_manga_with_bookmarks(&self) -> AppResult<Vec<MangaWithBookmarks>>;

    fn get_bookmarked_pages_by_manga_id(&self, manga_id: i64) -> AppResult<Vec<BookmarkedPage>>;

    fn get_with_chapter_info_by_manga_id(
        &self,
        manga_id: i64,
    ) -> AppResult<Vec<BookmarkWithChapterInfo>>;

    /// Returns the id of the new row
    fn insert(&self, bookmark: &Bookmark) -> AppResult<i64>;

    /// Replaces the note and stamps the row with the current time
    fn update_partial(&self, update: &BookmarkUpdate) -> AppResult<()>;

    /// Merge-upsert in one transaction; see [`crate::domain::reconcile`]
    fn set_all(&self, bookmarks: &[Bookmark]) -> AppResult<BookmarkReconciliation>;

    fn delete(&self, bookmark_id: i64) -> AppResult<()>;

    /// Returns the number of removed rows
    fn delete_by_key(&self, delete: &BookmarkDelete) -> AppResult<usize>;

    /// All keys in one transaction; returns the number of removed rows
    fn delete_all(&self, deletes: &[BookmarkDelete]) -> AppResult<usize>;

    fn delete_all_by_manga_id(&self, manga_id: i64) -> AppResult<usize>;
}

pub struct SqliteBookmarkRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteBookmarkRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_bookmark(row: &Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get("id")?,
            manga_id: row.get("manga_id")?,
            chapter_id: row.get("chapter_id")?,
            page_index: row.get("page_index")?,
            note: row.get("note")?,
            last_modified_at: row.get::<_, i64>("last_modified_at")? * MILLIS_PER_SECOND,
        })
    }

    fn row_to_cover(row: &Row) -> rusqlite::Result<MangaCover> {
        Ok(MangaCover {
            manga_id: row.get("manga_id")?,
            source_id: row.get("manga_source")?,
            is_manga_favorite: row.get("is_manga_favorite")?,
            url: row.get("manga_thumbnail_url")?,
            last_modified: row.get("manga_cover_last_modified")?,
        })
    }

    fn row_to_manga_with_bookmarks(row: &Row) -> rusqlite::Result<MangaWithBookmarks> {
        let last_modified: Option<i64> = row.get("bookmark_last_modified")?;

        Ok(MangaWithBookmarks {
            manga_id: row.get("manga_id")?,
            manga_title: row.get("manga_title")?,
            number_of_bookmarks: row.get("number_of_bookmarks")?,
            bookmark_last_modified: last_modified.unwrap_or(0) * MILLIS_PER_SECOND,
            cover: Self::row_to_cover(row)?,
        })
    }

    fn row_to_bookmarked_page(row: &Row) -> rusqlite::Result<BookmarkedPage> {
        Ok(BookmarkedPage {
            bookmark_id: row.get("bookmark_id")?,
            manga_id: row.get("manga_id")?,
            chapter_id: row.get("chapter_id")?,
            page_index: row.get("page_index")?,
            manga_title: row.get("manga_title")?,
            chapter_number: row.get("chapter_number")?,
            chapter_name: row.get("chapter_name")?,
            note: row.get("note")?,
            last_modified_at: row.get::<_, i64>("last_modified_at")? * MILLIS_PER_SECOND,
            cover: Self::row_to_cover(row)?,
        })
    }

    fn row_to_bookmark_with_chapter_info(row: &Row) -> rusqlite::Result<BookmarkWithChapterInfo> {
        Ok(BookmarkWithChapterInfo {
            chapter_url: row.get("chapter_url")?,
            chapter_number: row.get("chapter_number")?,
            page_index: row.get("page_index")?,
            note: row.get("note")?,
            last_modified_at: row.get::<_, i64>("last_modified_at")? * MILLIS_PER_SECOND,
        })
    }

    // Statement helpers shared by plain and transactional paths.

    fn insert_on(conn: &Connection, bookmark: &Bookmark) -> AppResult<i64> {
        conn.execute(
            "INSERT INTO bookmarks (manga_id, chapter_id, page_index, note, last_modified_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                bookmark.manga_id,
                bookmark.chapter_id,
                bookmark.page_index,
                bookmark.note,
                bookmark.last_modified_at / MILLIS_PER_SECOND,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn delete_id_on(conn: &Connection, bookmark_id: i64) -> AppResult<usize> {
        let removed = conn.execute("DELETE FROM bookmarks WHERE id = ?1", params![bookmark_id])?;
        Ok(removed)
    }

    fn delete_key_on(conn: &Connection, delete: &BookmarkDelete) -> AppResult<usize> {
        let removed = conn.execute(
            "DELETE FROM bookmarks
             WHERE manga_id = ?1 AND chapter_id = ?2 AND page_index IS ?3",
            params![delete.manga_id, delete.chapter_id, delete.page_index],
        )?;
        Ok(removed)
    }

    fn list_by_manga_on(conn: &Connection, manga_id: i64) -> AppResult<Vec<Bookmark>> {
        let mut stmt = conn.prepare(
            "SELECT id, manga_id, chapter_id, page_index, note, last_modified_at
             FROM bookmarks
             WHERE manga_id = ?1
             ORDER BY id",
        )?;

        let bookmarks = stmt
            .query_map(params![manga_id], Self::row_to_bookmark)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookmarks)
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    fn get(&self, id: i64) -> AppResult<Option<Bookmark>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, manga_id, chapter_id, page_index, note, last_modified_at
             FROM bookmarks WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_bookmark) {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_key(
        &self,
        manga_id: i64,
        chapter_id: i64,
        page_index: Option<i32>,
    ) -> AppResult<Option<Bookmark>> {
        let conn = self.pool.get()?;

        // `IS` so that a NULL page index matches chapter-level rows.
        let mut stmt = conn.prepare(
            "SELECT id, manga_id, chapter_id, page_index, note, last_modified_at
             FROM bookmarks
             WHERE manga_id = ?1 AND chapter_id = ?2 AND page_index IS ?3
             ORDER BY id
             LIMIT 1",
        )?;

        match stmt.query_row(params![manga_id, chapter_id, page_index], Self::row_to_bookmark) {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_all_by_manga_id(&self, manga_id: i64) -> AppResult<Vec<Bookmark>> {
        let conn = self.pool.get()?;
        Self::list_by_manga_on(&conn, manga_id)
    }

    fn get_manga_with_bookmarks(&self) -> AppResult<Vec<MangaWithBookmarks>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT manga_id, manga_title, manga_thumbnail_url, manga_source,
                    is_manga_favorite, manga_cover_last_modified,
                    number_of_bookmarks, bookmark_last_modified
             FROM manga_with_bookmarks_view
             ORDER BY bookmark_last_modified DESC, manga_title",
        )?;

        let mangas = stmt
            .query_map([], Self::row_to_manga_with_bookmarks)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(mangas)
    }

    fn get_bookmarked_pages_by_manga_id(&self, manga_id: i64) -> AppResult<Vec<BookmarkedPage>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT bookmark_id, manga_id, chapter_id, page_index, manga_title,
                    manga_thumbnail_url, manga_source, is_manga_favorite,
                    manga_cover_last_modified, chapter_number, chapter_name,
                    note, last_modified_at
             FROM bookmarks_view
             WHERE manga_id = ?1",
        )?;

        let pages = stmt
            .query_map(params![manga_id], Self::row_to_bookmarked_page)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pages)
    }

    fn get_with_chapter_info_by_manga_id(
        &self,
        manga_id: i64,
    ) -> AppResult<Vec<BookmarkWithChapterInfo>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT c.url AS chapter_url, c.chapter_number AS chapter_number,
                    b.page_index AS page_index, b.note AS note,
                    b.last_modified_at AS last_modified_at
             FROM bookmarks b
             JOIN chapters c ON c.id = b.chapter_id
             WHERE b.manga_id = ?1
             ORDER BY c.chapter_number, b.page_index",
        )?;

        let rows = stmt
            .query_map(params![manga_id], Self::row_to_bookmark_with_chapter_info)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn insert(&self, bookmark: &Bookmark) -> AppResult<i64> {
        let conn = self.pool.get()?;
        Self::insert_on(&conn, bookmark)
    }

    fn update_partial(&self, update: &BookmarkUpdate) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE bookmarks SET note = ?1, last_modified_at = ?2 WHERE id = ?3",
            params![update.note, Utc::now().timestamp(), update.id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn set_all(&self, bookmarks: &[Bookmark]) -> AppResult<BookmarkReconciliation> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let manga_ids: BTreeSet<i64> = bookmarks.iter().map(|b| b.manga_id).collect();
        let mut existing = Vec::new();
        for manga_id in manga_ids {
            existing.extend(Self::list_by_manga_on(&tx, manga_id)?);
        }

        let plan = reconcile(&existing, bookmarks);
        for id in &plan.ids_to_delete {
            Self::delete_id_on(&tx, *id)?;
        }
        for bookmark in &plan.bookmarks_to_insert {
            Self::insert_on(&tx, bookmark)?;
        }

        tx.commit()?;

        log::debug!(
            "Merged {} bookmarks: {} inserted, {} replaced",
            bookmarks.len(),
            plan.bookmarks_to_insert.len(),
            plan.ids_to_delete.len()
        );
        Ok(plan)
    }

    fn delete(&self, bookmark_id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        if Self::delete_id_on(&conn, bookmark_id)? == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn delete_by_key(&self, delete: &BookmarkDelete) -> AppResult<usize> {
        let conn = self.pool.get()?;
        Self::delete_key_on(&conn, delete)
    }

    fn delete_all(&self, deletes: &[BookmarkDelete]) -> AppResult<usize> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let mut removed = 0;
        for delete in deletes {
            removed += Self::delete_key_on(&tx, delete)?;
        }

        tx.commit()?;
        Ok(removed)
    }

    fn delete_all_by_manga_id(&self, manga_id: i64) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let removed = conn.execute("DELETE FROM bookmarks WHERE manga_id = ?1", params![manga_id])?;

        Ok(removed)
    }
}

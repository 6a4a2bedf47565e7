// src/presentation/list_items.rs
//
// Renderer-agnostic rows for bookmark lists.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::domain::{BookmarkedPage, MangaCover, MangaWithBookmarks};
use crate::presentation::display::DisplayPreferences;

/// Top-level row: one manga and its bookmark totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MangaRow {
    pub manga_id: i64,
    pub title: String,
    pub cover: MangaCover,
    pub bookmark_count_label: String,
    /// Absent when no modification time is known
    pub last_updated_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub bookmark_id: i64,
    pub manga_id: i64,
    pub chapter_id: i64,
    pub page_index: Option<i32>,
    pub chapter_name: String,
    /// "Page N" (1-based) or "Chapter"
    pub position_label: String,
    pub date_label: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkListItem {
    MangaHeader {
        manga_id: i64,
        title: String,
        cover: MangaCover,
    },
    ChapterHeader {
        chapter_id: i64,
        chapter_name: String,
    },
    Page(PageRow),
}

pub fn bookmark_count_label(count: i64) -> String {
    match count {
        1 => "1 bookmark".to_string(),
        n => format!("{} bookmarks", n),
    }
}

pub fn position_label(page_index: Option<i32>) -> String {
    match page_index {
        Some(index) => format!("Page {}", index + 1),
        None => "Chapter".to_string(),
    }
}

pub fn manga_rows<Tz>(
    mangas: &[MangaWithBookmarks],
    preferences: &DisplayPreferences,
    now: &DateTime<Tz>,
) -> Vec<MangaRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    mangas
        .iter()
        .map(|manga| MangaRow {
            manga_id: manga.manga_id,
            title: manga.manga_title.clone(),
            cover: manga.cover.clone(),
            bookmark_count_label: bookmark_count_label(manga.number_of_bookmarks),
            last_updated_label: (manga.bookmark_last_modified > 0).then(|| {
                format!(
                    "Updated {}",
                    preferences.format_date_in(manga.bookmark_last_modified, now)
                )
            }),
        })
        .collect()
}

fn page_row<Tz>(
    page: &BookmarkedPage,
    preferences: &DisplayPreferences,
    now: &DateTime<Tz>,
) -> PageRow
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    PageRow {
        bookmark_id: page.bookmark_id,
        manga_id: page.manga_id,
        chapter_id: page.chapter_id,
        page_index: page.page_index,
        chapter_name: page.chapter_name.clone(),
        position_label: position_label(page.page_index),
        date_label: preferences.format_date_in(page.last_modified_at, now),
        note: page.note.clone(),
    }
}

/// Page rows with a chapter header before each new chapter
///
/// `pages` must already be in listing order.
pub fn page_items<Tz>(
    pages: &[BookmarkedPage],
    preferences: &DisplayPreferences,
    now: &DateTime<Tz>,
) -> Vec<BookmarkListItem>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut items = Vec::with_capacity(pages.len() * 2);
    let mut current_chapter = None;

    for page in pages {
        if current_chapter != Some(page.chapter_id) {
            current_chapter = Some(page.chapter_id);
            items.push(BookmarkListItem::ChapterHeader {
                chapter_id: page.chapter_id,
                chapter_name: page.chapter_name.clone(),
            });
        }
        items.push(BookmarkListItem::Page(page_row(page, preferences, now)));
    }
    items
}

/// Per-manga groups, each led by a manga header
pub fn grouped_page_items<Tz>(
    groups: &[Vec<BookmarkedPage>],
    preferences: &DisplayPreferences,
    now: &DateTime<Tz>,
) -> Vec<BookmarkListItem>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut items = Vec::new();
    for group in groups {
        let Some(first) = group.first() else {
            continue;
        };
        items.push(BookmarkListItem::MangaHeader {
            manga_id: first.manga_id,
            title: first.manga_title.clone(),
            cover: first.cover.clone(),
        });
        items.extend(page_items(group, preferences, now));
    }
    items
}

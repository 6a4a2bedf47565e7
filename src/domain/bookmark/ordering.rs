// Listing order for bookmarked pages.
//
// Pages sort by manga, chapter number, chapter name, then page index.
// Chapter names break ties when numbers are missing (every chapter at -1,
// e.g. "Volume 1", "Volume 2"), so they compare digit runs numerically.
// Chapter-level bookmarks sort before the pages of the same chapter.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use super::entity::BookmarkedPage;

/// Sort key standing in for a missing page index
const CHAPTER_LEVEL_SORT_KEY: i32 = -1;

fn page_sort_key(page_index: Option<i32>) -> i32 {
    page_index.unwrap_or(CHAPTER_LEVEL_SORT_KEY)
}

pub fn compare_bookmarked_pages(a: &BookmarkedPage, b: &BookmarkedPage) -> Ordering {
    a.manga_id
        .cmp(&b.manga_id)
        .then_with(|| a.chapter_number.total_cmp(&b.chapter_number))
        .then_with(|| natural_cmp(&a.chapter_name, &b.chapter_name))
        .then_with(|| page_sort_key(a.page_index).cmp(&page_sort_key(b.page_index)))
}

/// Stable sort into listing order
pub fn sort_for_listing(pages: &mut [BookmarkedPage]) {
    pages.sort_by(compare_bookmarked_pages);
}

/// Groups pages per manga, in order of first appearance, each group sorted
pub fn group_by_manga(pages: Vec<BookmarkedPage>) -> Vec<Vec<BookmarkedPage>> {
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<Vec<BookmarkedPage>> = Vec::new();

    for page in pages {
        let slot = *slots.entry(page.manga_id).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(page);
    }

    for group in &mut groups {
        sort_for_listing(group);
    }
    groups
}

/// String comparison where runs of ASCII digits compare by numeric value
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_digits = take_digits(&mut left);
                let r_digits = take_digits(&mut right);
                let ord = compare_digit_runs(&l_digits, &r_digits);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.cmp(&r);
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

// Arbitrary length, so no integer parsing.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MangaCover;

    fn page(
        manga_id: i64,
        chapter_number: f64,
        chapter_name: &str,
        page_index: Option<i32>,
    ) -> BookmarkedPage {
        BookmarkedPage {
            bookmark_id: 0,
            manga_id,
            chapter_id: (chapter_number * 10.0) as i64,
            page_index,
            manga_title: format!("Manga {}", manga_id),
            chapter_number,
            chapter_name: chapter_name.to_string(),
            note: None,
            last_modified_at: 0,
            cover: MangaCover {
                manga_id,
                source_id: 1,
                is_manga_favorite: false,
                url: None,
                last_modified: 0,
            },
        }
    }

    fn positions(pages: &[BookmarkedPage]) -> Vec<(f64, Option<i32>)> {
        pages.iter().map(|p| (p.chapter_number, p.page_index)).collect()
    }

    #[test]
    fn test_sorts_by_chapter_then_page() {
        let mut pages = vec![
            page(1, 2.0, "Chapter 2", None),
            page(1, 1.0, "Chapter 1", Some(3)),
            page(1, 1.0, "Chapter 1", Some(1)),
        ];

        sort_for_listing(&mut pages);

        assert_eq!(
            positions(&pages),
            vec![(1.0, Some(1)), (1.0, Some(3)), (2.0, None)]
        );
    }

    #[test]
    fn test_chapter_level_sorts_before_pages() {
        let mut pages = vec![
            page(1, 4.0, "Chapter 4", Some(0)),
            page(1, 4.0, "Chapter 4", None),
        ];

        sort_for_listing(&mut pages);

        assert_eq!(positions(&pages), vec![(4.0, None), (4.0, Some(0))]);
    }

    #[test]
    fn test_unnumbered_chapters_sort_by_name() {
        let mut pages = vec![
            page(1, -1.0, "Volume 10", Some(0)),
            page(1, -1.0, "Volume 2", Some(0)),
            page(1, -1.0, "Volume 1", Some(0)),
        ];

        sort_for_listing(&mut pages);

        let names: Vec<&str> = pages.iter().map(|p| p.chapter_name.as_str()).collect();
        assert_eq!(names, vec!["Volume 1", "Volume 2", "Volume 10"]);
    }

    #[test]
    fn test_manga_id_is_the_primary_key() {
        let mut pages = vec![
            page(2, 1.0, "Chapter 1", Some(0)),
            page(1, 9.0, "Chapter 9", Some(0)),
        ];

        sort_for_listing(&mut pages);

        assert_eq!(pages[0].manga_id, 1);
        assert_eq!(pages[1].manga_id, 2);
    }

    #[test]
    fn test_group_by_manga_keeps_first_appearance_order() {
        let pages = vec![
            page(7, 3.0, "Chapter 3", Some(2)),
            page(4, 1.0, "Chapter 1", Some(0)),
            page(7, 1.0, "Chapter 1", Some(5)),
        ];

        let groups = group_by_manga(pages);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].manga_id, 7);
        assert_eq!(positions(&groups[0]), vec![(1.0, Some(5)), (3.0, Some(2))]);
        assert_eq!(groups[1][0].manga_id, 4);
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("Vol. 2", "Vol. 10"), Ordering::Less);
        assert_eq!(natural_cmp("Vol. 02", "Vol. 2"), Ordering::Equal);
        assert_eq!(natural_cmp("Extra", "Extra 1"), Ordering::Less);
        assert_eq!(natural_cmp("b", "a"), Ordering::Greater);
    }
}

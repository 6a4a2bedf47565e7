// Merge rule for bulk bookmark writes.
//
// A candidate is written when no stored bookmark has its key, or when it
// carries a non-blank note. A noteless candidate over an existing row is a
// no-op so that restoring or re-marking never wipes a user's note. Written
// candidates replace every stored row with the same key.

use std::collections::HashMap;

use super::entity::{Bookmark, BookmarkKey};

/// What a bulk write has to do to the store
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookmarkReconciliation {
    pub ids_to_delete: Vec<i64>,
    pub bookmarks_to_insert: Vec<Bookmark>,
}

impl BookmarkReconciliation {
    pub fn is_empty(&self) -> bool {
        self.ids_to_delete.is_empty() && self.bookmarks_to_insert.is_empty()
    }
}

/// Plans a bulk write of `candidates` against the `existing` rows
///
/// Candidates sharing a key collapse to the last one, except that a noteless
/// candidate never displaces an earlier noted one.
pub fn reconcile(existing: &[Bookmark], candidates: &[Bookmark]) -> BookmarkReconciliation {
    let mut stored: HashMap<BookmarkKey, Vec<i64>> = HashMap::new();
    for bookmark in existing {
        stored.entry(bookmark.key()).or_default().push(bookmark.id);
    }

    let mut slots: HashMap<BookmarkKey, usize> = HashMap::new();
    let mut unique: Vec<&Bookmark> = Vec::new();
    for candidate in candidates {
        match slots.get(&candidate.key()) {
            Some(&slot) => {
                if candidate.has_note() || !unique[slot].has_note() {
                    unique[slot] = candidate;
                }
            }
            None => {
                slots.insert(candidate.key(), unique.len());
                unique.push(candidate);
            }
        }
    }

    let mut plan = BookmarkReconciliation::default();
    for candidate in unique {
        match stored.get(&candidate.key()) {
            None => plan.bookmarks_to_insert.push(candidate.clone()),
            Some(ids) if candidate.has_note() => {
                plan.ids_to_delete.extend(ids.iter().copied());
                plan.bookmarks_to_insert.push(candidate.clone());
            }
            Some(_) => {}
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, chapter_id: i64, page_index: Option<i32>, note: Option<&str>) -> Bookmark {
        Bookmark {
            id,
            manga_id: 1,
            chapter_id,
            page_index,
            note: note.map(str::to_string),
            last_modified_at: 1_000,
        }
    }

    fn candidate(chapter_id: i64, page_index: Option<i32>, note: Option<&str>) -> Bookmark {
        Bookmark::new(1, chapter_id, page_index, note.map(str::to_string))
    }

    #[test]
    fn test_new_keys_are_inserted() {
        let plan = reconcile(&[], &[candidate(10, Some(1), None), candidate(10, None, None)]);

        assert!(plan.ids_to_delete.is_empty());
        assert_eq!(plan.bookmarks_to_insert.len(), 2);
    }

    #[test]
    fn test_noteless_candidate_over_existing_is_skipped() {
        let existing = vec![stored(5, 10, Some(1), Some("keep me"))];

        let plan = reconcile(&existing, &[candidate(10, Some(1), Some("  "))]);

        assert!(plan.is_empty());
    }

    #[test]
    fn test_noted_candidate_replaces_existing() {
        let existing = vec![stored(5, 10, Some(1), Some("old"))];

        let plan = reconcile(&existing, &[candidate(10, Some(1), Some("new"))]);

        assert_eq!(plan.ids_to_delete, vec![5]);
        assert_eq!(plan.bookmarks_to_insert.len(), 1);
        assert_eq!(plan.bookmarks_to_insert[0].note.as_deref(), Some("new"));
    }

    #[test]
    fn test_replacement_removes_every_stored_duplicate() {
        let existing = vec![stored(5, 10, None, None), stored(6, 10, None, None)];

        let plan = reconcile(&existing, &[candidate(10, None, Some("whole chapter"))]);

        assert_eq!(plan.ids_to_delete, vec![5, 6]);
    }

    #[test]
    fn test_duplicate_candidates_collapse_to_last() {
        let plan = reconcile(
            &[],
            &[candidate(10, Some(2), Some("first")), candidate(10, Some(2), Some("second"))],
        );

        assert_eq!(plan.bookmarks_to_insert.len(), 1);
        assert_eq!(plan.bookmarks_to_insert[0].note.as_deref(), Some("second"));
    }

    #[test]
    fn test_noteless_duplicate_keeps_earlier_note() {
        let existing = vec![stored(5, 10, Some(2), Some("old"))];

        let plan = reconcile(
            &existing,
            &[
                candidate(10, Some(2), Some("mine")),
                candidate(10, Some(2), None),
                candidate(10, Some(2), Some(" ")),
            ],
        );

        assert_eq!(plan.ids_to_delete, vec![5]);
        assert_eq!(plan.bookmarks_to_insert.len(), 1);
        assert_eq!(plan.bookmarks_to_insert[0].note.as_deref(), Some("mine"));
    }

    #[test]
    fn test_page_and_chapter_level_keys_are_distinct() {
        let existing = vec![stored(5, 10, Some(0), None)];

        let plan = reconcile(&existing, &[candidate(10, None, None)]);

        assert!(plan.ids_to_delete.is_empty());
        assert_eq!(plan.bookmarks_to_insert.len(), 1);
    }
}

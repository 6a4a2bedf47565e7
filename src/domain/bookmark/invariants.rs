use super::entity::Bookmark;
use crate::domain::{DomainError, DomainResult};

/// Validates all Bookmark invariants
pub fn validate_bookmark(bookmark: &Bookmark) -> DomainResult<()> {
    validate_references(bookmark)?;
    validate_page_index(bookmark)?;
    validate_timestamp(bookmark)?;
    Ok(())
}

fn validate_references(bookmark: &Bookmark) -> DomainResult<()> {
    if bookmark.manga_id <= 0 || bookmark.chapter_id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Bookmark must reference a stored manga and chapter (manga {}, chapter {})",
            bookmark.manga_id, bookmark.chapter_id
        )));
    }
    Ok(())
}

fn validate_page_index(bookmark: &Bookmark) -> DomainResult<()> {
    match bookmark.page_index {
        Some(index) if index < 0 => Err(DomainError::NegativePageIndex(index)),
        _ => Ok(()),
    }
}

fn validate_timestamp(bookmark: &Bookmark) -> DomainResult<()> {
    if bookmark.last_modified_at < 0 {
        return Err(DomainError::NegativeTimestamp(bookmark.last_modified_at));
    }
    Ok(())
}

/// Bookmark invariants:
///
/// 1. At most one bookmark per (manga, chapter, page index); kept by the
///    set-bookmark use-case, not by the store
/// 2. A chapter-level bookmark (no page index) implies the chapter flag is set
/// 3. Only the note changes after creation

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_bookmark() {
        let bookmark = Bookmark::new(1, 2, Some(0), Some("start".to_string()));
        assert!(validate_bookmark(&bookmark).is_ok());
    }

    #[test]
    fn test_valid_chapter_bookmark() {
        let bookmark = Bookmark::chapter_level(1, 2);
        assert!(validate_bookmark(&bookmark).is_ok());
    }

    #[test]
    fn test_negative_page_index_fails() {
        let bookmark = Bookmark::new(1, 2, Some(-1), None);
        assert!(matches!(
            validate_bookmark(&bookmark),
            Err(DomainError::NegativePageIndex(-1))
        ));
    }

    #[test]
    fn test_unsaved_references_fail() {
        let bookmark = Bookmark::new(-1, 2, Some(3), None);
        assert!(matches!(
            validate_bookmark(&bookmark),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_negative_timestamp_fails() {
        let bookmark = Bookmark::new(1, 2, Some(3), None).with_last_modified_at(-5);
        assert!(matches!(
            validate_bookmark(&bookmark),
            Err(DomainError::NegativeTimestamp(-5))
        ));
    }
}

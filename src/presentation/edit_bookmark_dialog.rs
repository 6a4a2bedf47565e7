// src/presentation/edit_bookmark_dialog.rs
use crate::domain::Bookmark;

/// What the dialog asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Save(String),
    Delete,
    Dismiss,
}

/// Add / update / delete state for a page bookmark's note
///
/// Deleting asks for confirmation in place before it is offered as the
/// confirm action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBookmarkDialog {
    note: String,
    exists: bool,
    confirming_delete: bool,
}

impl EditBookmarkDialog {
    pub fn new(bookmark: Option<&Bookmark>) -> Self {
        Self {
            note: bookmark
                .and_then(|b| b.note.clone())
                .unwrap_or_default(),
            exists: bookmark.is_some(),
            confirming_delete: false,
        }
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn can_delete(&self) -> bool {
        self.exists
    }

    pub fn title(&self) -> &'static str {
        if self.confirming_delete {
            "Delete bookmark"
        } else if self.exists {
            "Update page bookmark"
        } else {
            "Add page bookmark"
        }
    }

    pub fn body(&self) -> Option<&'static str> {
        self.confirming_delete
            .then_some("Are you sure you want to delete this bookmark?")
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.confirming_delete {
            "Delete"
        } else if self.exists {
            "Update"
        } else {
            "Add"
        }
    }

    /// Switches to the delete confirmation; ignored for new bookmarks
    pub fn request_delete(&mut self) {
        if self.exists {
            self.confirming_delete = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    pub fn confirm(&self) -> DialogAction {
        if self.confirming_delete {
            DialogAction::Delete
        } else {
            DialogAction::Save(self.note.clone())
        }
    }

    pub fn dismiss(&self) -> DialogAction {
        DialogAction::Dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bookmark_dialog() {
        let mut dialog = EditBookmarkDialog::new(None);

        assert_eq!(dialog.title(), "Add page bookmark");
        assert_eq!(dialog.confirm_label(), "Add");
        assert!(!dialog.can_delete());

        dialog.request_delete();
        assert!(!dialog.is_confirming_delete());

        dialog.set_note("panel 3");
        assert_eq!(dialog.confirm(), DialogAction::Save("panel 3".to_string()));
    }

    #[test]
    fn test_existing_bookmark_prefills_note() {
        let bookmark = Bookmark::new(1, 2, Some(3), Some("old".to_string()));
        let dialog = EditBookmarkDialog::new(Some(&bookmark));

        assert_eq!(dialog.note(), "old");
        assert_eq!(dialog.title(), "Update page bookmark");
        assert_eq!(dialog.confirm_label(), "Update");
        assert_eq!(dialog.body(), None);
    }

    #[test]
    fn test_delete_confirmation_in_place() {
        let bookmark = Bookmark::new(1, 2, Some(3), None);
        let mut dialog = EditBookmarkDialog::new(Some(&bookmark));

        dialog.request_delete();
        assert_eq!(dialog.title(), "Delete bookmark");
        assert!(dialog.body().is_some());
        assert_eq!(dialog.confirm(), DialogAction::Delete);

        dialog.cancel_delete();
        assert_eq!(dialog.confirm(), DialogAction::Save(String::new()));
        assert_eq!(dialog.dismiss(), DialogAction::Dismiss);
    }
}

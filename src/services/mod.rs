// src/services/mod.rs
//
// Services Module - Bookmark use-cases
//
// PRINCIPLES:
// - One use-case object per intent, built from repository trait objects
// - Write use-cases never propagate errors: they log and return OperationResult
// - Read use-cases return AppResult and log before propagating
// - The chapter bookmark flag is only written from here

pub mod bookmark_listing;
pub mod delete_bookmark;
pub mod get_bookmark;
pub mod set_bookmark;


pub use bookmark_listing::{GetBookmarkedMangas, GetBookmarkedPages};
pub use delete_bookmark::DeleteBookmark;
pub use get_bookmark::{GetBookmark, GetBookmarks};
pub use set_bookmark::SetBookmark;

use crate::error::{AppError, AppResult};

/// Outcome of a write use-case
#[derive(Debug)]
pub enum OperationResult {
    Success,
    InternalError(AppError),
}

impl OperationResult {
    /// Collapses a result, logging the failure under `operation`
    pub fn from_result(operation: &str, result: AppResult<()>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(e) => {
                log::error!("{} failed: {}", operation, e);
                Self::InternalError(e)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Success => None,
            Self::InternalError(e) => Some(e),
        }
    }
}

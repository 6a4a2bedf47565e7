use serde::{Deserialize, Serialize};

/// Everything a list row needs to draw a manga cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaCover {
    pub manga_id: i64,
    pub source_id: i64,
    pub is_manga_favorite: bool,
    pub url: Option<String>,
    /// Cover cache key, seconds
    pub last_modified: i64,
}

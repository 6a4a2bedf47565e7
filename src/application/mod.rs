// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between screens (presentation) and use-cases (services)
// - View-state models own a StateStore and publish immutable snapshots
// - Use-cases run on the blocking pool, never on the async executor
// - Navigation goes through the Navigator trait; the host implements it

mod background;
pub mod bookmarks_details;
pub mod bookmarks_top;
pub mod navigation;
pub mod state;
pub mod state_store;

pub use bookmarks_details::{BookmarksDetailsScreenModel, BookmarksDetailsState};
pub use bookmarks_top::{BookmarksTopScreenModel, BookmarksTopState, DEFAULT_REFRESH_DELAY};
pub use navigation::{Navigator, Screen};
pub use state::AppState;
pub use state_store::StateStore;

// Device-agnostic reading state shared by the stores

pub mod clock;
pub mod keys;
pub mod models;

pub use models::{Bookmark, MAX_RECENT_COUNT, ProgressRecord, RecentRecord};

//! Persistent reading state for a manga reader: per-chapter progress,
//! the recently opened list and bookmarks, each kept in its own JSON file.

pub mod config;
pub mod domain;
pub mod storage;

pub use config::Config;
pub use domain::{Bookmark, MAX_RECENT_COUNT, ProgressRecord, RecentRecord};
pub use storage::{BookmarkStore, ProgressStore, RecentStore};

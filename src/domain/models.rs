// Records persisted by the stores. Field names match the on-disk JSON (camelCase).

use serde::{Deserialize, Deserializer, Serialize};

use super::clock::now_millis;

/// Upper bound on the recently opened list.
pub const MAX_RECENT_COUNT: usize = 10;

// Missing and null fields fall back the same way.
fn page_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

fn millis_or_now<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_else(now_millis))
}

/// Last page read in a single chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub manga_id: String,
    pub chapter_id: String,
    #[serde(default, deserialize_with = "page_or_zero")]
    pub page_index: i32,
    /// Epoch milliseconds of the last save.
    #[serde(default = "now_millis", deserialize_with = "millis_or_now")]
    pub last_read_at: i64,
}

impl ProgressRecord {
    pub fn new(manga_id: &str, chapter_id: &str, page_index: i32) -> Self {
        Self {
            manga_id: manga_id.to_string(),
            chapter_id: chapter_id.to_string(),
            page_index,
            last_read_at: now_millis(),
        }
    }

    pub fn key(&self) -> String {
        super::keys::progress_key(&self.manga_id, &self.chapter_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRecord {
    pub manga_id: String,
    pub title: String,
    #[serde(default = "now_millis", deserialize_with = "millis_or_now")]
    pub last_read_at: i64,
}

impl RecentRecord {
    pub fn new(manga_id: &str, title: &str) -> Self {
        Self {
            manga_id: manga_id.to_string(),
            title: title.to_string(),
            last_read_at: now_millis(),
        }
    }
}

/// One bookmark per manga, pointing at a page of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub manga_id: String,
    pub manga_title: String,
    pub chapter_id: String,
    pub chapter_title: String,
    #[serde(default, deserialize_with = "page_or_zero")]
    pub page: i32,
    #[serde(default = "now_millis", deserialize_with = "millis_or_now")]
    pub created_at: i64,
}

impl Bookmark {
    pub fn new(
        manga_id: impl Into<String>,
        manga_title: impl Into<String>,
        chapter_id: impl Into<String>,
        chapter_title: impl Into<String>,
        page: i32,
    ) -> Self {
        Self {
            manga_id: manga_id.into(),
            manga_title: manga_title.into(),
            chapter_id: chapter_id.into(),
            chapter_title: chapter_title.into(),
            page,
            created_at: now_millis(),
        }
    }
}

use std::path::{Path, PathBuf};

use super::json_file::JsonArrayFile;
use crate::domain::{MAX_RECENT_COUNT, RecentRecord};

/// Recently opened manga, most recent first, capped at [`MAX_RECENT_COUNT`].
///
/// Order is kept by re-inserting at the head; timestamps are never compared,
/// and the order found in the file is trusted as-is on load.
#[derive(Debug)]
pub struct RecentStore {
    file: JsonArrayFile,
    recent: Vec<RecentRecord>,
}

impl RecentStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = JsonArrayFile::new(path, "recent mangas");
        let recent = file.load();
        Self { file, recent }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Move `manga_id` to the head with a fresh timestamp, evicting from the tail.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add(&mut self, manga_id: &str, title: &str) {
        self.recent.retain(|r| r.manga_id != manga_id);
        self.recent.insert(0, RecentRecord::new(manga_id, title));
        self.recent.truncate(MAX_RECENT_COUNT);
        self.persist();
    }

    pub fn all(&self) -> Vec<RecentRecord> {
        self.recent.clone()
    }

    /// Rename in place, keeping position and timestamp. Unknown ids are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_title(&mut self, manga_id: &str, new_title: &str) {
        let Some(record) = self.recent.iter_mut().find(|r| r.manga_id == manga_id) else {
            return;
        };
        record.title = new_title.to_string();
        self.persist();
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, manga_id: &str) {
        self.recent.retain(|r| r.manga_id != manga_id);
        self.persist();
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.recent.clear();
        self.persist();
    }

    pub fn contains(&self, manga_id: &str) -> bool {
        self.recent.iter().any(|r| r.manga_id == manga_id)
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    fn persist(&self) {
        self.file.save(&self.recent);
    }
}

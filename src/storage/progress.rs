use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::json_file::JsonArrayFile;
use crate::domain::ProgressRecord;
use crate::domain::keys::{key_matches_manga, progress_key};

/// Last page read per (manga, chapter), written through to a JSON file.
#[derive(Debug)]
pub struct ProgressStore {
    file: JsonArrayFile,
    progress: HashMap<String, ProgressRecord>,
}

impl ProgressStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = JsonArrayFile::new(path, "reading progress entries");
        let progress = file
            .load::<ProgressRecord>()
            .into_iter()
            .map(|record| (record.key(), record))
            .collect();
        Self { file, progress }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Record `page_index` as the last page read, replacing any earlier entry.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn save_progress(&mut self, manga_id: &str, chapter_id: &str, page_index: i32) {
        let record = ProgressRecord::new(manga_id, chapter_id, page_index);
        self.progress.insert(record.key(), record);
        self.persist();
    }

    /// Stored page for the chapter, or 0 when nothing was saved.
    pub fn page_index(&self, manga_id: &str, chapter_id: &str) -> i32 {
        self.progress
            .get(&progress_key(manga_id, chapter_id))
            .map(|record| record.page_index)
            .unwrap_or(0)
    }

    pub fn has_progress(&self, manga_id: &str, chapter_id: &str) -> bool {
        self.progress.contains_key(&progress_key(manga_id, chapter_id))
    }

    pub fn get(&self, manga_id: &str, chapter_id: &str) -> Option<&ProgressRecord> {
        self.progress.get(&progress_key(manga_id, chapter_id))
    }

    /// Drop every entry whose key starts with `manga_id`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn clear_manga_progress(&mut self, manga_id: &str) {
        self.progress.retain(|key, _| !key_matches_manga(key, manga_id));
        self.persist();
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn clear_all(&mut self) {
        self.progress.clear();
        self.persist();
    }

    pub fn len(&self) -> usize {
        self.progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    fn persist(&self) {
        let records: Vec<&ProgressRecord> = self.progress.values().collect();
        self.file.save(&records);
    }
}

use std::path::{Path, PathBuf};

use super::json_file::JsonArrayFile;
use crate::domain::Bookmark;

/// At most one bookmark per manga, kept in insertion order.
#[derive(Debug)]
pub struct BookmarkStore {
    file: JsonArrayFile,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = JsonArrayFile::new(path, "bookmarks");
        let bookmarks = file.load();
        Self { file, bookmarks }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Replace the bookmark for the same manga; the new one goes to the end.
    #[tracing::instrument(level = "debug", skip(self), fields(manga_id = %bookmark.manga_id))]
    pub fn add(&mut self, bookmark: Bookmark) {
        self.bookmarks.retain(|b| b.manga_id != bookmark.manga_id);
        self.bookmarks.push(bookmark);
        self.persist();
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, manga_id: &str) {
        self.bookmarks.retain(|b| b.manga_id != manga_id);
        self.persist();
    }

    pub fn find(&self, manga_id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.manga_id == manga_id)
    }

    pub fn all(&self) -> Vec<Bookmark> {
        self.bookmarks.clone()
    }

    fn persist(&self) {
        self.file.save(&self.bookmarks);
    }
}

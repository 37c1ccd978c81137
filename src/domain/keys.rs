// Composite lookup key for progress records

pub const KEY_SEPARATOR: char = ':';

pub fn progress_key(manga_id: &str, chapter_id: &str) -> String {
    format!("{manga_id}{KEY_SEPARATOR}{chapter_id}")
}

/// Whether a stored key belongs to `manga_id` when clearing a manga.
///
/// This is a raw prefix match on the key string, so `"abc"` also matches
/// keys of manga `"abc2"`.
pub fn key_matches_manga(key: &str, manga_id: &str) -> bool {
    key.starts_with(manga_id)
}

// Whole-file JSON array persistence with log-and-continue semantics.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// A single JSON file holding an array of records.
///
/// Reads never fail towards the caller: a missing file and an unreadable
/// file both yield an empty collection, differing only in what gets logged.
/// Writes replace the whole file and only log on failure.
#[derive(Debug, Clone)]
pub struct JsonArrayFile {
    path: PathBuf,
    label: &'static str,
}

impl JsonArrayFile {
    /// `label` names the collection in log lines, e.g. "reading progress entries".
    pub fn new(path: impl Into<PathBuf>, label: &'static str) -> Self {
        Self {
            path: path.into(),
            label,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "{} file does not exist, starting empty", self.label);
            return Vec::new();
        }
        match self.read() {
            Ok(records) => {
                tracing::info!(path = %self.path.display(), count = records.len(), "loaded {}", self.label);
                records
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = ?e, "failed to load {}, starting empty", self.label);
                Vec::new()
            }
        }
    }

    pub fn save<T: Serialize>(&self, records: &[T]) {
        match self.write(records) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = records.len(), "saved {}", self.label);
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = ?e, "failed to save {}", self.label);
            }
        }
    }

    // The document must be an array; entries that fail to decode are skipped.
    fn read<T: DeserializeOwned>(&self) -> anyhow::Result<Vec<T>> {
        let body = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&body)
            .with_context(|| format!("decoding {}", self.path.display()))?;
        let records = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), index, error = %e, "skipping unreadable entry in {}", self.label);
                    None
                }
            })
            .collect();
        Ok(records)
    }

    fn write<T: Serialize>(&self, records: &[T]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, body).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let file = JsonArrayFile::new(dir.path().join("absent.json"), "rows");
        let rows: Vec<Row> = file.load();
        assert!(rows.is_empty());
    }

    #[test]
    fn save_creates_parent_directories_and_pretty_prints() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("rows.json");
        let file = JsonArrayFile::new(&path, "rows");
        file.save(&[Row { name: "a".into() }]);

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains('\n'));
        let rows: Vec<Row> = file.load();
        assert_eq!(rows, vec![Row { name: "a".into() }]);
    }

    #[test]
    fn non_array_document_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(&path, r#"{"name":"a"}"#).unwrap();
        let rows: Vec<Row> = JsonArrayFile::new(&path, "rows").load();
        assert!(rows.is_empty());
    }

    #[test]
    fn bad_entries_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(&path, r#"[{"name":"a"},{"name":7},{"other":true},{"name":"b"}]"#).unwrap();
        let rows: Vec<Row> = JsonArrayFile::new(&path, "rows").load();
        assert_eq!(rows, vec![Row { name: "a".into() }, Row { name: "b".into() }]);
    }

    #[test]
    fn failed_write_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // parent is a regular file, so the directory cannot be created
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let file = JsonArrayFile::new(blocker.join("rows.json"), "rows");
        file.save(&[Row { name: "a".into() }]);
        assert!(!blocker.join("rows.json").exists());
    }
}

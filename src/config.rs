use std::path::{Path, PathBuf};

use anyhow::Context;
use twelf::{Layer, config};

/// Env vars are read with this prefix, e.g. `MANGA_DATA_DIR`.
pub const ENV_PREFIX: &str = "MANGA_";
/// Optional YAML file layered under the environment.
pub const CONFIG_FILE_VAR: &str = "MANGA_CONFIG_FILE";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PROGRESS_FILE: &str = "progress.json";
const DEFAULT_RECENT_FILE: &str = "recent.json";
const DEFAULT_BOOKMARKS_FILE: &str = "bookmarks.json";

#[config]
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the state files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_progress_file")]
    pub progress_file: String,
    #[serde(default = "default_recent_file")]
    pub recent_file: String,
    #[serde(default = "default_bookmarks_file")]
    pub bookmarks_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_progress_file() -> String {
    DEFAULT_PROGRESS_FILE.into()
}

fn default_recent_file() -> String {
    DEFAULT_RECENT_FILE.into()
}

fn default_bookmarks_file() -> String {
    DEFAULT_BOOKMARKS_FILE.into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            progress_file: default_progress_file(),
            recent_file: default_recent_file(),
            bookmarks_file: default_bookmarks_file(),
        }
    }
}

impl Config {
    /// Layers: YAML file named by `MANGA_CONFIG_FILE` (if set), then `MANGA_*` env vars.
    pub fn load() -> anyhow::Result<Self> {
        let mut layers = Vec::new();
        if let Ok(file) = std::env::var(CONFIG_FILE_VAR) {
            layers.push(Layer::Yaml(PathBuf::from(file)));
        }
        layers.push(Layer::Env(Some(ENV_PREFIX.to_string())));
        Config::with_layers(&layers).with_context(|| "Failed to load configuration")
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.progress_file.is_empty() {
            return Err("MANGA_PROGRESS_FILE is empty".into());
        }
        if self.recent_file.is_empty() {
            return Err("MANGA_RECENT_FILE is empty".into());
        }
        if self.bookmarks_file.is_empty() {
            return Err("MANGA_BOOKMARKS_FILE is empty".into());
        }
        Ok(())
    }

    pub fn progress_path(&self) -> PathBuf {
        self.resolve(&self.progress_file)
    }

    pub fn recent_path(&self) -> PathBuf {
        self.resolve(&self.recent_file)
    }

    pub fn bookmarks_path(&self) -> PathBuf {
        self.resolve(&self.bookmarks_file)
    }

    // absolute names win over data_dir when joined
    fn resolve(&self, name: &str) -> PathBuf {
        self.data_dir.join(Path::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn yaml_in(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("manga.yaml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn yaml_layer_sets_fields_and_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = yaml_in(&dir, "data_dir: /srv/manga\nrecent_file: mru.json\n");
        let config = Config::with_layers(&[Layer::Yaml(path)]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/manga"));
        assert_eq!(config.recent_path(), PathBuf::from("/srv/manga/mru.json"));
        assert_eq!(config.progress_path(), PathBuf::from("/srv/manga/progress.json"));
    }

    #[test]
    fn env_layer_overrides_yaml() {
        let dir = TempDir::new().unwrap();
        let path = yaml_in(&dir, "data_dir: /srv/manga\nrecent_file: mru.json\n");
        // prefix private to this test so parallel tests never see it
        let prefix = "MANGA_CFG_LAYER_TEST_";
        unsafe {
            std::env::set_var("MANGA_CFG_LAYER_TEST_DATA_DIR", "/tmp/manga-env");
        }
        let config =
            Config::with_layers(&[Layer::Yaml(path), Layer::Env(Some(prefix.to_string()))])
                .unwrap();
        unsafe {
            std::env::remove_var("MANGA_CFG_LAYER_TEST_DATA_DIR");
        }
        assert_eq!(config.data_dir, PathBuf::from("/tmp/manga-env"));
        assert_eq!(config.recent_path(), PathBuf::from("/tmp/manga-env/mru.json"));
    }

    #[test]
    fn defaults_live_under_data_dir() {
        let config = Config::default();
        assert_eq!(config.progress_path(), PathBuf::from("data/progress.json"));
        assert_eq!(config.recent_path(), PathBuf::from("data/recent.json"));
        assert_eq!(config.bookmarks_path(), PathBuf::from("data/bookmarks.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn data_dir_override() {
        let config = Config::default().with_data_dir("/tmp/manga");
        assert_eq!(config.recent_path(), PathBuf::from("/tmp/manga/recent.json"));
    }

    #[test]
    fn absolute_file_name_ignores_data_dir() {
        let config = Config {
            progress_file: "/var/lib/manga/p.json".into(),
            ..Config::default()
        };
        assert_eq!(config.progress_path(), PathBuf::from("/var/lib/manga/p.json"));
    }

    #[test]
    fn empty_file_name_is_rejected() {
        let config = Config {
            recent_file: String::new(),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err("MANGA_RECENT_FILE is empty".to_string()));
    }
}

//! Best-effort persistence for user progress.
//!
//! Progress lives as a single JSON object of string keys and string values
//! (`theme`, `token`, `userName`, `userLevel`) in the platform data
//! directory. Loading never fails: a missing, unreadable or corrupt file
//! degrades to in-memory defaults, since this is low-stakes local
//! preference state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::{ThemeChoice, UserProgress};

const PROGRESS_FILE: &str = "progress.json";

/// Sentinel stored under `token`; presence alone implies logged in.
const LOCAL_TOKEN: &str = "local";

/// On-disk key-value entries. Every value is a string; absent keys fall
/// back to defaults on load.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(rename = "userLevel", skip_serializing_if = "Option::is_none")]
    user_level: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

/// Handles progress persistence.
pub struct ProgressStore {
    data_dir: PathBuf,
}

impl ProgressStore {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
        Ok(Self { data_dir })
    }

    /// Get default storage location.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fliplingo")
    }

    fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILE)
    }

    /// Whether a progress file has been written before.
    pub fn has_progress(&self) -> bool {
        self.progress_path().exists()
    }

    /// Load progress, falling back to defaults (theme=light, level=1,
    /// logged out) on any failure.
    pub fn load(&self) -> UserProgress {
        let Ok(json) = fs::read_to_string(self.progress_path()) else {
            return UserProgress::default();
        };
        let Ok(file) = serde_json::from_str::<ProgressFile>(&json) else {
            return UserProgress::default();
        };

        UserProgress {
            current_level: file
                .user_level
                .as_deref()
                .and_then(|s| s.parse().ok())
                .filter(|&level| level >= 1)
                .unwrap_or(1),
            theme: file
                .theme
                .as_deref()
                .map(ThemeChoice::from_str)
                .unwrap_or_default(),
            logged_in: file.token.is_some(),
            user_name: file.user_name.unwrap_or_default(),
        }
    }

    /// Save progress to disk.
    pub fn save(&self, progress: &UserProgress) -> Result<PathBuf> {
        let file = ProgressFile {
            theme: Some(progress.theme.as_str().to_string()),
            token: progress.logged_in.then(|| LOCAL_TOKEN.to_string()),
            user_name: (!progress.user_name.is_empty()).then(|| progress.user_name.clone()),
            user_level: Some(progress.current_level.to_string()),
            updated_at: Some(chrono::Local::now().to_rfc3339()),
        };

        let path = self.progress_path();
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write progress file: {:?}", path))?;
        Ok(path)
    }

    /// Delete saved progress. Returns whether a file existed.
    pub fn reset(&self) -> Result<bool> {
        let path = self.progress_path();
        if path.exists() {
            fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (ProgressStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ProgressStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let (store, _temp) = create_test_store();
        assert!(!store.has_progress());

        let progress = store.load();
        assert_eq!(progress.current_level, 1);
        assert_eq!(progress.theme, ThemeChoice::Light);
        assert!(!progress.logged_in);
        assert!(progress.user_name.is_empty());
    }

    #[test]
    fn progress_round_trips() {
        let (store, _temp) = create_test_store();

        let mut progress = UserProgress::default();
        progress.current_level = 7;
        progress.theme = ThemeChoice::Dark;
        progress.log_in("Nico".to_string());
        store.save(&progress).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, progress);
    }

    #[test]
    fn level_is_stored_as_a_string() {
        let (store, temp) = create_test_store();
        store
            .save(&UserProgress {
                current_level: 4,
                ..UserProgress::default()
            })
            .unwrap();

        let json = fs::read_to_string(temp.path().join(PROGRESS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["userLevel"], "4");
        assert_eq!(value["theme"], "light");
        assert!(value.get("token").is_none());
    }

    #[test]
    fn missing_user_level_defaults_to_one() {
        let (store, temp) = create_test_store();
        fs::write(
            temp.path().join(PROGRESS_FILE),
            r#"{ "theme": "dark", "userName": "Nico" }"#,
        )
        .unwrap();

        let progress = store.load();
        assert_eq!(progress.current_level, 1);
        assert_eq!(progress.theme, ThemeChoice::Dark);
    }

    #[test]
    fn unparseable_level_defaults_to_one() {
        let (store, temp) = create_test_store();
        fs::write(
            temp.path().join(PROGRESS_FILE),
            r#"{ "userLevel": "three" }"#,
        )
        .unwrap();
        assert_eq!(store.load().current_level, 1);

        fs::write(temp.path().join(PROGRESS_FILE), r#"{ "userLevel": "0" }"#).unwrap();
        assert_eq!(store.load().current_level, 1);
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let (store, temp) = create_test_store();
        fs::write(temp.path().join(PROGRESS_FILE), "not json {{{").unwrap();

        let progress = store.load();
        assert_eq!(progress, UserProgress::default());
    }

    #[test]
    fn token_presence_implies_logged_in() {
        let (store, temp) = create_test_store();
        fs::write(
            temp.path().join(PROGRESS_FILE),
            r#"{ "token": "anything", "userName": "Ana" }"#,
        )
        .unwrap();

        let progress = store.load();
        assert!(progress.logged_in);
        assert_eq!(progress.user_name, "Ana");
    }

    #[test]
    fn theme_double_toggle_round_trips() {
        let (store, _temp) = create_test_store();

        let mut progress = store.load();
        let original = progress.theme;

        progress.theme = progress.theme.toggled();
        store.save(&progress).unwrap();
        progress.theme = progress.theme.toggled();
        store.save(&progress).unwrap();

        assert_eq!(store.load().theme, original);
    }

    #[test]
    fn reset_deletes_the_progress_file() {
        let (store, _temp) = create_test_store();
        assert!(!store.reset().unwrap());

        store.save(&UserProgress::default()).unwrap();
        assert!(store.has_progress());
        assert!(store.reset().unwrap());
        assert!(!store.has_progress());
    }
}

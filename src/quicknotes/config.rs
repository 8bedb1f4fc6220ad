//! # Configuration
//!
//! Configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `QUICK_NOTES_STORAGE_KEY`, `QUICK_NOTES_SELECTED_KEY`,
//!    `QUICK_NOTES_DEBOUNCE_MS`.
//! 2. **Config file**: `quicknotes.toml` in the data directory, if present.
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `quick-notes__v1` | Record holding the notes collection |
//! | `selected_key` | `quick-notes__selected` | Record holding the selected note id |
//! | `debounce_ms` | `300` | Quiet period before an edit is saved |
//!
//! The data directory itself comes from `--data-dir` / `QUICK_NOTES_DATA_DIR`,
//! falling back to the OS data directory (via the `directories` crate).

use crate::error::{NotesError, Result};
use crate::store::StorageKeys;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "quicknotes.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuickNotesConfig {
    /// Name of the record holding the notes collection.
    #[config(env = "QUICK_NOTES_STORAGE_KEY", default = "quick-notes__v1")]
    pub storage_key: String,

    /// Name of the record holding the selected note id.
    #[config(env = "QUICK_NOTES_SELECTED_KEY", default = "quick-notes__selected")]
    pub selected_key: String,

    /// Quiet period, in milliseconds, before buffered edits are saved.
    #[config(env = "QUICK_NOTES_DEBOUNCE_MS", default = 300)]
    pub debounce_ms: u64,
}

impl Default for QuickNotesConfig {
    fn default() -> Self {
        let keys = StorageKeys::default();
        Self {
            storage_key: keys.notes,
            selected_key: keys.selected,
            debounce_ms: 300,
        }
    }
}

impl QuickNotesConfig {
    /// Loads configuration for `data_dir` from the environment and the
    /// optional `quicknotes.toml` inside it.
    pub fn load_for(data_dir: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects key names that would make the two records, or the config
    /// file, share storage.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key == self.selected_key {
            return Err(NotesError::Store(format!(
                "storage_key and selected_key must differ (both are {:?})",
                self.storage_key
            )));
        }
        for key in [&self.storage_key, &self.selected_key] {
            if key == CONFIG_FILENAME {
                return Err(NotesError::Store(format!(
                    "{:?} is reserved for the config file",
                    key
                )));
            }
        }
        Ok(())
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            notes: self.storage_key.clone(),
            selected: self.selected_key.clone(),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// The OS-appropriate data directory for the notes records.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "quicknotes", "quicknotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotesError::Store("Could not determine a data directory".to_string()))
}

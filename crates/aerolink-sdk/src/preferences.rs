//! Persisted display preference.
//!
//! The display mode is the only state kept between sessions. It is read
//! and written through a [`PreferenceStore`] handed to the shell, never
//! through ambient globals.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use aerolink_models::DisplayMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SdkError;

const APP_DIR: &str = "aerolink";
const PREFERENCES_FILE: &str = "preferences.json";

/// Key/value access to the persisted preference.
pub trait PreferenceStore: Send + Sync {
    /// The saved mode, or `None` if nothing was saved yet.
    fn load_display_mode(&self) -> Result<Option<DisplayMode>, SdkError>;

    fn save_display_mode(&self, mode: DisplayMode) -> Result<(), SdkError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    display_mode: Option<DisplayMode>,
}

// ---------------------------------------------------------------------------
// JsonFilePreferenceStore
// ---------------------------------------------------------------------------

/// Stores preferences as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/aerolink/preferences.json` for the current user.
    pub fn in_config_dir() -> Result<Self, SdkError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| SdkError::Config("could not determine config directory".into()))?
            .join(APP_DIR);
        Ok(Self::new(dir.join(PREFERENCES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn load_display_mode(&self) -> Result<Option<DisplayMode>, SdkError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let prefs: Preferences = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), mode = ?prefs.display_mode, "preferences loaded");
        Ok(prefs.display_mode)
    }

    fn save_display_mode(&self, mode: DisplayMode) -> Result<(), SdkError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&Preferences {
            display_mode: Some(mode),
        })?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), %mode, "preferences saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryPreferenceStore
// ---------------------------------------------------------------------------

/// Keeps the preference in memory only.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    mode: RwLock<Option<DisplayMode>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_display_mode(&self) -> Result<Option<DisplayMode>, SdkError> {
        Ok(*self.mode.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn save_display_mode(&self, mode: DisplayMode) -> Result<(), SdkError> {
        *self.mode.write().unwrap_or_else(PoisonError::into_inner) = Some(mode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("aerolink-prefs-{}-{name}", std::process::id()))
            .join(PREFERENCES_FILE)
    }

    #[test]
    fn missing_file_means_no_preference() {
        let store = JsonFilePreferenceStore::new(temp_path("missing"));
        assert_eq!(store.load_display_mode().unwrap(), None);
    }

    #[test]
    fn file_removed_after_save_means_no_preference() {
        let path = temp_path("removed");
        let store = JsonFilePreferenceStore::new(&path);
        store.save_display_mode(DisplayMode::Light).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(store.load_display_mode().unwrap(), None);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn directory_in_place_of_file_is_an_error() {
        let path = temp_path("isdir");
        fs::create_dir_all(&path).unwrap();
        let store = JsonFilePreferenceStore::new(&path);
        assert!(matches!(store.load_display_mode(), Err(SdkError::Io(_))));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn file_store_round_trips_mode() {
        let path = temp_path("roundtrip");
        let store = JsonFilePreferenceStore::new(&path);
        store.save_display_mode(DisplayMode::Light).unwrap();
        assert_eq!(store.load_display_mode().unwrap(), Some(DisplayMode::Light));

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"light\""));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFilePreferenceStore::new(&path);
        assert!(matches!(
            store.load_display_mode(),
            Err(SdkError::Serialization(_))
        ));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load_display_mode().unwrap(), None);
        store.save_display_mode(DisplayMode::Dark).unwrap();
        assert_eq!(store.load_display_mode().unwrap(), Some(DisplayMode::Dark));
    }
}

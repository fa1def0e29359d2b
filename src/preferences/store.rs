//! Persistence for user preferences

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::ColorScheme;

/// Preferences file, relative to the site directory
pub const PREFERENCES_FILE: &str = ".folio/preferences.json";

/// What gets written to disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredPreferences {
    pub color_scheme: ColorScheme,
}

/// Where preferences are loaded from and saved to
pub trait PreferenceStore {
    /// `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<StoredPreferences>>;

    fn save(&self, prefs: &StoredPreferences) -> Result<()>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the default location inside a site directory
    pub fn in_site<P: AsRef<Path>>(base_dir: P) -> Self {
        Self::new(base_dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoredPreferences>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        let prefs = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", self.path))?;
        Ok(Some(prefs))
    }

    fn save(&self, prefs: &StoredPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json).with_context(|| format!("Failed to write {:?}", self.path))?;
        tracing::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}
